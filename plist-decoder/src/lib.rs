#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod decoder;
pub mod error;
pub mod util;
pub mod xml;

pub use decoder::{
    decode_bytes, decode_file, decode_file_with_options, decode_stream, PlistDecoder,
};
