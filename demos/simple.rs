use bookbot::BookReport;

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let text = "It was the best of times, it was the worst of times.";

    let report = BookReport::from_text("inline text", text);

    println!("Word and letter counts for the given text \"{}\"", text);
    print!("{}", report);
}
