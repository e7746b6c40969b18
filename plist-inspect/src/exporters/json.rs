use base64::{prelude::BASE64_STANDARD, Engine};
use json::{object, JsonValue};

use plist_decoder::{
    util::dates::format_rfc3339,
    xml::models::{Dictionary, Value},
};

use crate::{
    app::runtime::Config,
    exporters::exporter::{Exporter, Writer},
};

/// Spaces per level in the rendered output
const PRETTY_SPACES: u16 = 4;

/// Renders a document as a JSON object holding its version and root
pub struct JSON<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for JSON<'a> {
    fn new(config: &'a Config) -> Self {
        JSON { config }
    }

    fn render(&self) -> String {
        let mut out_s = self.format_document().pretty(PRETTY_SPACES);
        out_s.push('\n');
        out_s
    }
}

impl<'a> JSON<'a> {
    /// Build the JSON form of the whole document; an absent root is `null`
    fn format_document(&self) -> JsonValue {
        let document = &self.config.document;
        let root = match &document.root {
            Some(root) => self.format_value(root, 0),
            None => JsonValue::Null,
        };

        object! {
            version: document.version.as_str(),
            root: root,
        }
    }
}

impl<'a> Writer<JsonValue> for JSON<'a> {
    fn format_value(&self, value: &Value, indent: usize) -> JsonValue {
        match value {
            Value::Dictionary(dictionary) => self.format_dictionary(dictionary, indent),
            Value::Array(array) => self.format_array(array, indent),
            Value::String(text) => JsonValue::from(text.as_str()),
            Value::Integer(number) => JsonValue::from(*number),
            Value::Real(number) => JsonValue::from(*number),
            Value::Boolean(flag) => JsonValue::from(*flag),
            Value::Date(date) => JsonValue::from(format_rfc3339(date)),
            Value::Data(bytes) => JsonValue::from(BASE64_STANDARD.encode(bytes)),
        }
    }

    fn format_dictionary(&self, dictionary: &Dictionary, indent: usize) -> JsonValue {
        let mut json_dict = JsonValue::new_object();
        for (key, value) in dictionary {
            json_dict[key.as_str()] = self.format_value(value, indent + 1);
        }
        json_dict
    }

    fn format_array(&self, array: &[Value], indent: usize) -> JsonValue {
        JsonValue::Array(
            array
                .iter()
                .map(|value| self.format_value(value, indent + 1))
                .collect(),
        )
    }
}
