use std::fmt;
use std::io;
use std::result;

/// A type alias for handling errors throughout this crate.
pub type Result<T> = result::Result<T, Error>;

/// An error that can occur while compiling tables.
#[derive(Debug)]
pub enum Error {
    /// An I/O error while writing generated output.
    Io(io::Error),
    /// An error while reading one of the UCD input files.
    Parse(uniprop_parse::Error),
    /// An error from command line parsing.
    Clap(clap::Error),
    /// Any other error.
    Other(String),
}

impl Error {
    /// Returns true if and only if this is a broken pipe error.
    pub fn is_broken_pipe(&self) -> bool {
        match *self {
            Error::Io(ref err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<uniprop_parse::Error> for Error {
    fn from(err: uniprop_parse::Error) -> Error {
        Error::Parse(err)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::Clap(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref err) => write!(f, "{}", err),
            Error::Parse(ref err) => write!(f, "{}", err),
            Error::Clap(ref err) => write!(f, "{}", err),
            Error::Other(ref msg) => write!(f, "{}", msg),
        }
    }
}
