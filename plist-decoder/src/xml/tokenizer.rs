/*!
 Adapts the [`quick_xml`] pull parser into the small token vocabulary the property list reader needs.
*/

use std::io::BufRead;

use log::trace;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::error::plist::{FormatError, PlistError};

/// An opening element, with namespace prefixes stripped from its name and attribute keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    fn from_event(event: &BytesStart) -> Result<Self, PlistError> {
        let name = utf8(event.local_name().as_ref())?;
        let attributes = event
            .attributes()
            .map(|attr| -> Result<(String, String), PlistError> {
                let attr = attr.map_err(quick_xml::Error::from)?;
                let key = utf8(attr.key.local_name().as_ref())?;
                let value = attr.unescape_value()?.into_owned();
                Ok((key, value))
            })
            .collect::<Result<Vec<_>, PlistError>>()?;
        Ok(Self { name, attributes })
    }
}

/// Structural items emitted by [`Tokenizer::next_element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Start(StartTag),
    End(String),
}

/// Items emitted by [`Tokenizer::next_token`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Start(StartTag),
    End(String),
    /// Unescaped text or the contents of a CDATA section
    Text(String),
}

fn utf8(bytes: &[u8]) -> Result<String, PlistError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| FormatError::InvalidUtf8.into())
}

/// Reads [`Token`]s from an XML byte stream
///
/// Comments, processing instructions, the XML declaration and doctypes are never emitted.
/// Self-closing elements are emitted as a [`Token::Start`] followed by a [`Token::End`].
pub struct Tokenizer<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;
        Self {
            reader,
            buf: vec![],
        }
    }

    /// Read the next start, end, or text token, or `None` at the end of the stream
    pub fn next_token(&mut self) -> Result<Option<Token>, PlistError> {
        loop {
            self.buf.clear();
            let token = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(start) => Token::Start(StartTag::from_event(&start)?),
                Event::End(end) => Token::End(utf8(end.local_name().as_ref())?),
                Event::Text(text) => Token::Text(text.unescape()?.into_owned()),
                Event::CData(cdata) => Token::Text(
                    String::from_utf8(cdata.into_inner().into_owned())
                        .map_err(|_| FormatError::InvalidUtf8)?,
                ),
                Event::Eof => return Ok(None),
                // Comments, declarations, processing instructions and doctypes.
                // Empty elements never arrive here, the reader expands them.
                _ => continue,
            };
            return Ok(Some(token));
        }
    }

    /// Read the next start or end token, skipping any character data in between
    pub fn next_element(&mut self) -> Result<Option<Element>, PlistError> {
        loop {
            match self.next_token()? {
                Some(Token::Start(start)) => return Ok(Some(Element::Start(start))),
                Some(Token::End(name)) => return Ok(Some(Element::End(name))),
                Some(Token::Text(text)) => {
                    if !text.trim().is_empty() {
                        trace!("skipping stray text {text:?}");
                    }
                }
                None => return Ok(None),
            }
        }
    }
}
