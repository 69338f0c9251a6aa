use crate::constants::GZIP_EXTENSION;
use crate::models::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Loads the full text of a book from disk.
pub struct BookReader;

impl BookReader {
    /// Reads the file at `path` into a `String`.
    ///
    /// Files with a `.gz` extension are gunzipped first. The contents must be valid
    /// UTF-8. A missing file is reported as [`Error::BookNotFound`].
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, Error> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::BookNotFound(path.to_path_buf()),
            _ => Error::IoError(err),
        })?;

        let mut text = String::new();

        if Self::is_gzipped(path) {
            debug!("Decompressing {:?}", path);
            GzDecoder::new(file).read_to_string(&mut text)?;
        } else {
            file.read_to_string(&mut text)?;
        }

        debug!("Read {} bytes from {:?}", text.len(), path);

        Ok(text)
    }

    fn is_gzipped(path: &Path) -> bool {
        path.extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzipped() {
        assert!(BookReader::is_gzipped(Path::new("books/frankenstein.txt.gz")));
        assert!(BookReader::is_gzipped(Path::new("books/FRANKENSTEIN.GZ")));
        assert!(!BookReader::is_gzipped(Path::new("books/frankenstein.txt")));
        assert!(!BookReader::is_gzipped(Path::new("books/gz")));
    }

    #[test]
    fn test_missing_book() {
        let result = BookReader::read_to_string("this/book/does/not/exist.txt");

        match result {
            Err(Error::BookNotFound(path)) => {
                assert_eq!(path, Path::new("this/book/does/not/exist.txt"))
            }
            other => panic!("Expected BookNotFound, got {:?}", other),
        }
    }
}
