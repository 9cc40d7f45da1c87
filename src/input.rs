use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, TokenError};

/// Where the text to tokenize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both select stdin.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| self.io_error(source))?;
                Ok(text)
            }
            InputSource::File(path) => {
                ensure_file(path)?;
                fs::read_to_string(path).map_err(|source| self.io_error(source))
            }
        }
    }

    pub fn read_lines(&self) -> Result<Vec<String>> {
        let reader = self.open_lines()?;
        reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|source| self.io_error(source))
    }

    /// Opens the source for line-at-a-time reading.
    pub fn open_lines(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                ensure_file(path)?;
                let file = File::open(path).map_err(|source| self.io_error(source))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn io_error(&self, source: io::Error) -> TokenError {
        let path = match self {
            InputSource::Stdin => PathBuf::from("<stdin>"),
            InputSource::File(path) => path.clone(),
        };
        TokenError::Io { path, source }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TokenError::InvalidInput(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TokenError::InvalidInput(format!(
            "input is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dash_and_none_select_stdin() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("-"))),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("words.txt"))),
            InputSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let tmp = TempDir::new().unwrap();
        let source = InputSource::File(tmp.path().join("absent.txt"));
        let err = source.read_text().unwrap_err();
        assert!(matches!(err, TokenError::InvalidInput(_)));
    }

    #[test]
    fn directory_is_invalid_input() {
        let tmp = TempDir::new().unwrap();
        let source = InputSource::File(tmp.path().to_path_buf());
        assert!(matches!(
            source.read_lines(),
            Err(TokenError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("binary.txt");
        fs::write(&path, [b'a', b' ', 0xff, b'\n']).unwrap();

        let source = InputSource::File(path.clone());
        match source.read_text().unwrap_err() {
            TokenError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected io error, got {other:?}"),
        }
        assert!(matches!(source.read_lines(), Err(TokenError::Io { .. })));
    }

    #[test]
    fn reads_lines_without_terminators() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lines.txt");
        fs::write(&path, "a b\r\nc\n").unwrap();

        let lines = InputSource::File(path).read_lines().unwrap();
        assert_eq!(lines, vec!["a b", "c"]);
    }
}
