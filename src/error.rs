use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Allocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
}

#[derive(Debug, thiserror::Error)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
    #[source]
    pub source: Option<io::Error>,
}

impl Error {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: context.into(),
            location: None,
            source: Some(source),
        }
    }

    pub fn io_at(path: &Path, op: &str, source: io::Error) -> Self {
        Self::io(format!("{op} {}", path.display()), source)
    }

    /// A grammar or token mismatch. `expected` describes what the parser
    /// wanted to see at `line`.
    pub fn parse(line: usize, expected: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse,
            message: expected.into(),
            location: Some(Location { line }),
            source: None,
        }
    }

    pub fn allocation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Allocation,
            message: message.into(),
            location: None,
            source: None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.location.map(|location| location.line)
    }

    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.location, &self.source) {
            (ErrorKind::Parse, Some(location), _) => {
                write!(f, "parse error at line {}: {}", location.line, self.message)
            }
            (ErrorKind::Io, _, Some(source)) => write!(f, "{}: {source}", self.message),
            (ErrorKind::Allocation, _, _) => write!(f, "allocation failed: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn parse_error_reports_line() {
        let err = Error::parse(7, "expected a value");
        assert_eq!(err.line(), Some(7));
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "parse error at line 7: expected a value");
    }

    #[rstest::rstest]
    fn io_error_keeps_source() {
        let err = Error::io(
            "open lvm.conf",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.kind, ErrorKind::Io);
        assert_eq!(err.to_string(), "open lvm.conf: missing");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[rstest::rstest]
    fn allocation_error_has_no_location() {
        let err = Error::allocation("arena limit of 16 bytes exceeded");
        assert_eq!(err.line(), None);
        assert_eq!(
            err.to_string(),
            "allocation failed: arena limit of 16 bytes exceeded"
        );
    }
}
