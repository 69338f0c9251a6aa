use bookbot::{analyze_book, USAGE};
use log::error;
use std::env;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Expect exactly one argument: the path of the book
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        println!("{}", USAGE);
        std::process::exit(1);
    }
    let book_path = &args[0];

    match analyze_book(book_path) {
        Ok(report) => {
            print!("{}", report);
        }
        Err(e) => {
            error!("Error analyzing {}: {}", book_path, e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
