/*!
Errors that can happen during the application's runtime
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
};

use plist_decoder::error::plist::PlistError;

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    DecodeError(PlistError),
    DiskError(IoError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::DecodeError(why) => write!(fmt, "{why}"),
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
        }
    }
}
