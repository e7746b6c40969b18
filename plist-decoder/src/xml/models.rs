/*!
 Data structures produced when decoding a property list.
*/

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result},
};

use base64::{prelude::BASE64_STANDARD, Engine};
use chrono::{DateTime, Utc};

use crate::util::dates::format_rfc3339;

/// Keys mapped to values in a `<dict>`
///
/// Duplicate keys in the source collapse to the last value decoded for that key.
pub type Dictionary = BTreeMap<String, Value>;

/// A decoded property list document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Contents of the `version` attribute on the `<plist>` element
    pub version: String,
    /// The top-level `<dict>` or `<array>`, or `None` if the `<plist>` element is empty
    pub root: Option<Value>,
}

impl Document {
    pub(crate) fn new(version: String, root: Option<Value>) -> Self {
        Self { version, root }
    }

    /// The kind of the root container, if there is one
    pub fn root_kind(&self) -> Option<Kind> {
        self.root.as_ref().map(Value::kind)
    }
}

impl Display for Document {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match &self.root {
            Some(root) => write!(fmt, "plist v{} {root}", self.version),
            None => write!(fmt, "plist v{} (empty)", self.version),
        }
    }
}

/// Rust structures containing data stored in the property list
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A `<dict>`, possibly empty
    Dictionary(Dictionary),
    /// An `<array>`, in source order, possibly empty
    Array(Vec<Value>),
    /// Text from a `<string>`
    String(String),
    /// A signed `<integer>`
    Integer(i64),
    /// A floating point `<real>`
    Real(f64),
    /// A `<true/>` or `<false/>`
    Boolean(bool),
    /// A `<date>` in UTC
    Date(DateTime<Utc>),
    /// Bytes decoded from the base64 text of a `<data>`
    Data(Vec<u8>),
}

/// The kinds of [`Value`] a property list can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dictionary,
    Array,
    String,
    Integer,
    Real,
    Boolean,
    Date,
    Data,
}

impl Kind {
    /// Short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Dictionary => "dict",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::Boolean => "boolean",
            Kind::Date => "date",
            Kind::Data => "data",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        write!(fmt, "{}", self.name())
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Dictionary(_) => Kind::Dictionary,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::Boolean(_) => Kind::Boolean,
            Value::Date(_) => Kind::Date,
            Value::Data(_) => Kind::Data,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(dictionary) => Some(dictionary),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(real) => Some(*real),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Value::Data(data) => Some(data),
            _ => None,
        }
    }
}

/// Single-line rendering for logs and test failures, i.e. `{"a": [1, true]}`
impl Display for Value {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            Value::Dictionary(dictionary) => {
                write!(fmt, "{{")?;
                for (idx, (key, value)) in dictionary.iter().enumerate() {
                    if idx > 0 {
                        write!(fmt, ", ")?;
                    }
                    write!(fmt, "{key:?}: {value}")?;
                }
                write!(fmt, "}}")
            }
            Value::Array(array) => {
                write!(fmt, "[")?;
                for (idx, value) in array.iter().enumerate() {
                    if idx > 0 {
                        write!(fmt, ", ")?;
                    }
                    write!(fmt, "{value}")?;
                }
                write!(fmt, "]")
            }
            Value::String(string) => write!(fmt, "{string:?}"),
            Value::Integer(integer) => write!(fmt, "{integer}"),
            Value::Real(real) => write!(fmt, "{real:?}"),
            Value::Boolean(boolean) => write!(fmt, "{boolean}"),
            Value::Date(date) => write!(fmt, "<date {}>", format_rfc3339(date)),
            Value::Data(data) => write!(fmt, "<data {}>", BASE64_STANDARD.encode(data)),
        }
    }
}

/// The element names that introduce a value inside a `<dict>` or `<array>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Dict,
    Array,
    String,
    Integer,
    Real,
    True,
    False,
    Date,
    Data,
}

impl Tag {
    /// Match an element's local name, `None` if it is not a value type
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dict" => Some(Self::Dict),
            "array" => Some(Self::Array),
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "real" => Some(Self::Real),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "date" => Some(Self::Date),
            "data" => Some(Self::Data),
            _ => None,
        }
    }
}
