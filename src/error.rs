// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    Alloc(String),  // Reserving the pixel buffer failed
    Encode(String), // The buffer could not be turned into a PNG
    Sink(String),   // Creating/writing the output file failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc(s) => write!(f, "Buffer allocation error: {s}"),
            Error::Encode(s) => write!(f, "PNG encode error: {s}"),
            Error::Sink(s) => write!(f, "Output write error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
