/*!
 Contains the recursive descent reader that turns [`Token`]s into a [`Document`].

 Grammar, as described by the [Apple DTD](http://www.apple.com/DTDs/PropertyList-1.0.dtd):

 ```txt
 plist   := <plist version="..."> (dict | array)? </plist>
 dict    := <dict> (<key>text</key> value)* </dict>
 array   := <array> value* </array>
 value   := dict | array | string | integer | real | true | false | date | data
 ```
*/

use std::io::BufRead;

use base64::{prelude::BASE64_STANDARD, Engine};
use chrono::{DateTime, Utc};
use log::{debug, trace, warn};

use crate::{
    error::plist::{FormatError, PlistError},
    util::dates::parse_rfc3339,
    xml::{
        models::{Dictionary, Document, Tag, Value},
        options::{DecodeOptions, UnknownTagPolicy},
        tokenizer::{Element, StartTag, Token, Tokenizer},
    },
};

/// Name of the element that wraps every document
const PLIST: &str = "plist";
/// Name of the element that precedes each value in a `<dict>`
const KEY: &str = "key";
/// The only attribute allowed on the `<plist>` element
const VERSION: &str = "version";

/// Contains the token cursor and settings used to read a property list
pub struct PlistReader<R: BufRead> {
    tokens: Tokenizer<R>,
    options: DecodeOptions,
    /// Number of containers currently open
    depth: usize,
}

impl<R: BufRead> PlistReader<R> {
    pub fn new(source: R, options: DecodeOptions) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            options,
            depth: 0,
        }
    }

    /// Read a whole document, from `<plist>` to `</plist>`
    pub fn parse(&mut self) -> Result<Document, PlistError> {
        self.depth = 0;
        let start = self.read_start(Some(PLIST))?;

        let version = match start.attributes.as_slice() {
            [(name, value)] if name == VERSION => value.clone(),
            _ => return Err(FormatError::MissingVersion.into()),
        };

        let Some(root_tag) = self.read_start_or_end(None, &start)? else {
            trace!("empty plist");
            return Ok(Document::new(version, None));
        };

        let root = match Tag::from_name(&root_tag.name) {
            Some(Tag::Dict) => Value::Dictionary(self.read_dict(&root_tag)?),
            Some(Tag::Array) => Value::Array(self.read_array(&root_tag)?),
            _ => return Err(FormatError::BadRootElement(root_tag.name).into()),
        };
        trace!("read root: {root}");

        self.read_end(&start)?;

        Ok(Document::new(version, Some(root)))
    }

    /// Read the next element, which must be a start tag, optionally with a specific name
    fn read_start(&mut self, expected: Option<&str>) -> Result<StartTag, PlistError> {
        match self.tokens.next_element()? {
            Some(Element::Start(start)) => check_name(start, expected),
            Some(Element::End(name)) => Err(FormatError::UnexpectedEndTag(name).into()),
            None => Err(FormatError::UnexpectedEof.into()),
        }
    }

    /// Read the next element, which must be the end tag for `parent`
    fn read_end(&mut self, parent: &StartTag) -> Result<(), PlistError> {
        match self.tokens.next_element()? {
            Some(Element::End(name)) if name == parent.name => Ok(()),
            Some(Element::End(name)) => Err(FormatError::UnexpectedEndTag(name).into()),
            Some(Element::Start(start)) => Err(FormatError::UnexpectedElement(start.name).into()),
            None => Err(FormatError::UnexpectedEof.into()),
        }
    }

    /// Read the next element, which is either a start tag or the end tag for `parent`
    ///
    /// Returns `None` when `parent` was closed.
    fn read_start_or_end(
        &mut self,
        expected: Option<&str>,
        parent: &StartTag,
    ) -> Result<Option<StartTag>, PlistError> {
        match self.tokens.next_element()? {
            Some(Element::Start(start)) => check_name(start, expected).map(Some),
            Some(Element::End(name)) if name == parent.name => Ok(None),
            Some(Element::End(name)) => Err(FormatError::UnexpectedEndTag(name).into()),
            None => Err(FormatError::UnexpectedEof.into()),
        }
    }

    /// Read the character data of a leaf element and its end tag
    ///
    /// Returns `None` when the element has no character data at all.
    fn read_text(&mut self, start: &StartTag) -> Result<Option<String>, PlistError> {
        let mut text: Option<String> = None;
        loop {
            match self.tokens.next_token()? {
                // Text split by a comment or a CDATA section is joined back together
                Some(Token::Text(chunk)) => text.get_or_insert_with(String::new).push_str(&chunk),
                Some(Token::End(name)) if name == start.name => return Ok(text),
                Some(Token::End(name)) => return Err(FormatError::UnexpectedEndTag(name).into()),
                Some(Token::Start(inner)) => {
                    return Err(FormatError::UnexpectedElement(inner.name).into())
                }
                None => return Err(FormatError::UnexpectedEof.into()),
            }
        }
    }

    /// Read text that must not be empty, i.e. for numbers and dates
    fn read_non_empty_text(&mut self, start: &StartTag) -> Result<String, PlistError> {
        match self.read_text(start)? {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(FormatError::EmptyValue(start.name.clone()).into()),
        }
    }

    /// Read the value introduced by `start`, dispatching on its tag
    ///
    /// Returns `None` when the tag is not a value type and [`UnknownTagPolicy::Skip`] is set.
    fn read_value(&mut self, start: &StartTag) -> Result<Option<Value>, PlistError> {
        // A key where a value belongs is a grammar error under every policy
        if start.name == KEY {
            return Err(FormatError::UnexpectedElement(start.name.clone()).into());
        }

        let Some(tag) = Tag::from_name(&start.name) else {
            return match self.options.unknown_tags {
                UnknownTagPolicy::Skip => {
                    warn!("skipping unknown value tag <{}>", start.name);
                    self.skip_element(start)?;
                    Ok(None)
                }
                UnknownTagPolicy::Reject => {
                    Err(FormatError::UnknownValueTag(start.name.clone()).into())
                }
            };
        };

        let value = match tag {
            Tag::Dict => Value::Dictionary(self.read_dict(start)?),
            Tag::Array => Value::Array(self.read_array(start)?),
            Tag::String => Value::String(self.read_text(start)?.unwrap_or_default()),
            Tag::Integer => Value::Integer(self.read_integer(start)?),
            Tag::Real => Value::Real(self.read_real(start)?),
            Tag::True => {
                self.read_end(start)?;
                Value::Boolean(true)
            }
            Tag::False => {
                self.read_end(start)?;
                Value::Boolean(false)
            }
            Tag::Date => Value::Date(self.read_date(start)?),
            Tag::Data => Value::Data(self.read_data(start)?),
        };
        Ok(Some(value))
    }

    /// Track a newly opened container, failing if it is nested too deeply
    fn enter(&mut self) -> Result<(), PlistError> {
        // Same floor as `DecodeOptions::max_depth`
        let limit = self.options.max_depth.max(1);
        if self.depth >= limit {
            return Err(FormatError::TooDeep(limit).into());
        }
        self.depth += 1;
        Ok(())
    }

    fn read_dict(&mut self, start: &StartTag) -> Result<Dictionary, PlistError> {
        trace!("reading dict");
        self.enter()?;
        let mut dictionary = Dictionary::new();

        let mut next = self.read_start_or_end(Some(KEY), start)?;
        while let Some(key_tag) = next {
            let key = self.read_text(&key_tag)?.unwrap_or_default();
            let value_tag = self.read_start(None)?;

            if let Some(value) = self.read_value(&value_tag)? {
                if let Some(previous) = dictionary.insert(key, value) {
                    debug!("duplicate key replaced {previous}");
                }
            }

            next = self.read_start_or_end(Some(KEY), start)?;
        }

        self.depth -= 1;
        trace!("read dict with {} keys", dictionary.len());
        Ok(dictionary)
    }

    fn read_array(&mut self, start: &StartTag) -> Result<Vec<Value>, PlistError> {
        trace!("reading array");
        self.enter()?;
        let mut array = vec![];

        let mut next = self.read_start_or_end(None, start)?;
        while let Some(element) = next {
            if let Some(value) = self.read_value(&element)? {
                array.push(value);
            }
            next = self.read_start_or_end(None, start)?;
        }

        self.depth -= 1;
        trace!("read array with {} items", array.len());
        Ok(array)
    }

    fn read_integer(&mut self, start: &StartTag) -> Result<i64, PlistError> {
        let text = self.read_non_empty_text(start)?;
        trace!("read integer: {text}");
        text.parse::<i64>()
            .map_err(|_| FormatError::InvalidInteger(text).into())
    }

    fn read_real(&mut self, start: &StartTag) -> Result<f64, PlistError> {
        let text = self.read_non_empty_text(start)?;
        trace!("read real: {text}");
        text.parse::<f64>()
            .map_err(|_| FormatError::InvalidReal(text).into())
    }

    fn read_date(&mut self, start: &StartTag) -> Result<DateTime<Utc>, PlistError> {
        let text = self.read_non_empty_text(start)?;
        trace!("read date: {text}");
        parse_rfc3339(&text).ok_or_else(|| FormatError::InvalidDate(text).into())
    }

    fn read_data(&mut self, start: &StartTag) -> Result<Vec<u8>, PlistError> {
        let Some(text) = self.read_text(start)? else {
            return Ok(vec![]);
        };

        // Serializers wrap and indent long base64 runs
        let compact: String = text
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        trace!("read data: {compact}");

        BASE64_STANDARD
            .decode(&compact)
            .map_err(|_| FormatError::InvalidData(text).into())
    }

    /// Consume an element and all of its children
    fn skip_element(&mut self, start: &StartTag) -> Result<(), PlistError> {
        let mut open = 1_usize;
        while open > 0 {
            match self.tokens.next_token()? {
                Some(Token::Start(_)) => open += 1,
                Some(Token::End(_)) => open -= 1,
                Some(Token::Text(_)) => {}
                None => return Err(FormatError::UnexpectedEof.into()),
            }
        }
        trace!("skipped <{}>", start.name);
        Ok(())
    }
}

/// Ensure a start tag has the expected name, if one is required
fn check_name(start: StartTag, expected: Option<&str>) -> Result<StartTag, PlistError> {
    match expected {
        Some(expected) if start.name != expected => {
            Err(FormatError::UnexpectedElement(start.name).into())
        }
        _ => Ok(start),
    }
}
