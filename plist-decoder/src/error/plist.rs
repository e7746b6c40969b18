/*!
 Errors that can happen when decoding XML property list data.
*/

use std::{io, path::PathBuf, sync::Arc};

use thiserror::Error;

/// Errors that can happen when decoding a property list document
#[derive(Debug, Error)]
pub enum PlistError {
    /// The underlying byte source failed
    #[error("plist: error reading stream: {0}")]
    Stream(Arc<io::Error>),
    /// The file handed to [`decode_file`](crate::decode_file) could not be opened or read
    #[error("plist: error reading {0:?}: {1}")]
    CannotRead(PathBuf, io::Error),
    /// The bytes are not well-formed XML
    #[error("plist: malformed XML: {0}")]
    MalformedXml(quick_xml::Error),
    /// The XML is well-formed but does not follow the property list grammar
    #[error("plist: {0}")]
    Format(#[from] FormatError),
}

impl From<io::Error> for PlistError {
    fn from(why: io::Error) -> Self {
        PlistError::Stream(Arc::new(why))
    }
}

impl From<quick_xml::Error> for PlistError {
    fn from(why: quick_xml::Error) -> Self {
        match why {
            quick_xml::Error::Io(why) => PlistError::Stream(why),
            other => PlistError::MalformedXml(other),
        }
    }
}

/// Property list grammar violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing version")]
    MissingVersion,
    #[error("bad root element '{0}': must be dict or array")]
    BadRootElement(String),
    #[error("unexpected end tag: {0}")]
    UnexpectedEndTag(String),
    #[error("unexpected element '{0}'")]
    UnexpectedElement(String),
    #[error("unexpected end of document")]
    UnexpectedEof,
    #[error("expected non-empty {0} value")]
    EmptyValue(String),
    #[error("invalid integer value '{0}'")]
    InvalidInteger(String),
    #[error("invalid float value '{0}'")]
    InvalidReal(String),
    #[error("invalid date value '{0}'")]
    InvalidDate(String),
    #[error("error decoding data '{0}'")]
    InvalidData(String),
    #[error("text is not valid UTF-8")]
    InvalidUtf8,
    /// Only returned when [`UnknownTagPolicy::Reject`](crate::xml::options::UnknownTagPolicy::Reject) is set
    #[error("unknown value tag '{0}'")]
    UnknownValueTag(String),
    #[error("containers nested deeper than {0} levels")]
    TooDeep(usize),
}
