use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error that can occur while reading one of the raw UCD data files.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) path: Option<PathBuf>,
}

/// The kind of error that occurred.
#[derive(Debug)]
pub enum ErrorKind {
    /// An I/O error on the underlying file.
    Io(io::Error),
    /// A line that did not match the grammar of its file.
    Parse(String),
}

impl Error {
    /// Create a new parse error from the given message.
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(msg), line: None, path: None }
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line number at which this error occurred, if known.
    ///
    /// Line numbers start at 1 and count every line of the file, including
    /// the comment and blank lines the line parser skips.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Return the path of the file this error came from, if known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if and only if this is an I/O error.
    ///
    /// The table compiler treats a parse error as "line not applicable"
    /// and moves on; an I/O error always aborts the run. This predicate is
    /// how callers tell the two apart.
    pub fn is_io_error(&self) -> bool {
        match self.kind {
            ErrorKind::Io(_) => true,
            ErrorKind::Parse(_) => false,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Parse(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.path.as_ref(), self.line) {
            (Some(path), Some(line)) => {
                write!(f, "{}:{}: ", path.display(), line)?
            }
            (Some(path), None) => write!(f, "{}: ", path.display())?,
            (None, Some(line)) => write!(f, "line {}: ", line)?,
            (None, None) => {}
        }
        match self.kind {
            ErrorKind::Io(ref err) => write!(f, "{}", err),
            ErrorKind::Parse(ref msg) => write!(f, "{}", msg),
        }
    }
}
