use std::io::Write;

use plist_decoder::xml::models::{Dictionary, Value};

use crate::app::{error::RuntimeError, runtime::Config};

/// Defines behavior for rendering a decoded document and writing it out
pub trait Exporter<'a> {
    /// Create a new exporter with a reference to the decoded document
    fn new(config: &'a Config) -> Self;
    /// Render the whole document in this exporter's format
    fn render(&self) -> String;
    /// Write the rendered document to `out`
    fn export<W: Write>(&self, out: &mut W) -> Result<(), RuntimeError> {
        out.write_all(self.render().as_bytes())
            .map_err(RuntimeError::DiskError)
    }
}

/// Defines behavior for formatting values to the desired output format
pub(super) trait Writer<T> {
    /// Format any value, recursing into containers
    fn format_value(&self, value: &Value, indent: usize) -> T;
    /// Format a dictionary and every value it holds
    fn format_dictionary(&self, dictionary: &Dictionary, indent: usize) -> T;
    /// Format an array and every value it holds
    fn format_array(&self, array: &[Value], indent: usize) -> T;
}
