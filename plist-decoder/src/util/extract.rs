/*!
 Contains functions that read typed values out of a decoded [`Dictionary`].

 These are the lookups tools reach for after decoding, i.e. reading `CFBundleIdentifier` out of an `Info.plist`.
*/

use crate::{
    error::extract::ExtractError,
    xml::models::{Dictionary, Value},
};

/// Get a value for a key, failing if it is missing
fn extract_key<'a>(dictionary: &'a Dictionary, key: &str) -> Result<&'a Value, ExtractError> {
    dictionary
        .get(key)
        .ok_or_else(|| ExtractError::MissingKey(key.to_string()))
}

fn invalid_type(key: &str, expected: &str) -> ExtractError {
    ExtractError::InvalidType(key.to_string(), expected.to_string())
}

/// Extract a nested dictionary from a key-value pair that looks like `{key: {...}}`
pub fn extract_dictionary<'a>(
    dictionary: &'a Dictionary,
    key: &str,
) -> Result<&'a Dictionary, ExtractError> {
    extract_key(dictionary, key)?
        .as_dictionary()
        .ok_or_else(|| invalid_type(key, "dictionary"))
}

/// Extract an array from a key-value pair that looks like `{key: [...]}`
pub fn extract_array_key<'a>(
    dictionary: &'a Dictionary,
    key: &str,
) -> Result<&'a [Value], ExtractError> {
    extract_key(dictionary, key)?
        .as_array()
        .ok_or_else(|| invalid_type(key, "array"))
}

/// Extract a string from a key-value pair that looks like `{key: "value"}`
pub fn extract_string_key<'a>(
    dictionary: &'a Dictionary,
    key: &str,
) -> Result<&'a str, ExtractError> {
    extract_key(dictionary, key)?
        .as_string()
        .ok_or_else(|| invalid_type(key, "string"))
}

/// Extract an integer from a key-value pair that looks like `{key: 1}`
pub fn extract_int_key(dictionary: &Dictionary, key: &str) -> Result<i64, ExtractError> {
    extract_key(dictionary, key)?
        .as_integer()
        .ok_or_else(|| invalid_type(key, "integer"))
}

/// Extract bytes from a key-value pair that looks like `{key: <data>}`
pub fn extract_bytes_key<'a>(
    dictionary: &'a Dictionary,
    key: &str,
) -> Result<&'a [u8], ExtractError> {
    extract_key(dictionary, key)?
        .as_data()
        .ok_or_else(|| invalid_type(key, "data"))
}

/// Extract a boolean from a key-value pair that looks like `{key: true}`
pub fn extract_bool_key(dictionary: &Dictionary, key: &str) -> Result<bool, ExtractError> {
    extract_key(dictionary, key)?
        .as_boolean()
        .ok_or_else(|| invalid_type(key, "boolean"))
}
