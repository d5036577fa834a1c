use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    State(String),
    Io(String),
    Source(String),
    Store(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Source(msg)      => write!(f, "{}", msg),
            Error::Store(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Argument(format!("JSON error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
