/*!
 Entry points for decoding property lists from memory, from any reader, or from disk.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use log::debug;

use crate::{
    error::plist::PlistError,
    xml::{models::Document, options::DecodeOptions, parser::PlistReader},
};

/// Decodes a single property list document from a buffered byte source
///
/// A decoder holds the read position of its source, so it is driven through `&mut self`
/// and cannot be shared between threads without external locking.
pub struct PlistDecoder<R: BufRead> {
    reader: PlistReader<R>,
}

impl<R: BufRead> PlistDecoder<R> {
    /// Create a decoder with the default [`DecodeOptions`]
    pub fn new(source: R) -> Self {
        Self::with_options(source, DecodeOptions::default())
    }

    /// Create a decoder that applies `options`, i.e. a strict unknown tag policy or a nesting limit
    ///
    /// # Example:
    ///
    /// ```
    /// use plist_decoder::{
    ///     error::plist::{FormatError, PlistError},
    ///     xml::options::{DecodeOptions, UnknownTagPolicy},
    ///     PlistDecoder,
    /// };
    ///
    /// let options = DecodeOptions::default().unknown_tags(UnknownTagPolicy::Reject);
    /// let source: &[u8] = br#"<plist version="1.0"><array><uid/></array></plist>"#;
    /// let result = PlistDecoder::with_options(source, options).decode();
    /// assert!(matches!(
    ///     result,
    ///     Err(PlistError::Format(FormatError::UnknownValueTag(_)))
    /// ));
    /// ```
    pub fn with_options(source: R, options: DecodeOptions) -> Self {
        Self {
            reader: PlistReader::new(source, options),
        }
    }

    /// Read the source until the closing `</plist>` and return the assembled document
    ///
    /// Nothing is returned unless the whole document is valid.
    pub fn decode(&mut self) -> Result<Document, PlistError> {
        self.reader.parse()
    }
}

/// Decode a property list held in memory
///
/// # Example:
///
/// ```
/// use plist_decoder::{decode_bytes, xml::models::Value};
///
/// let document = decode_bytes(br#"<plist version="1.0"><array><integer>1</integer></array></plist>"#).unwrap();
/// assert_eq!(document.version, "1.0");
/// assert_eq!(document.root, Some(Value::Array(vec![Value::Integer(1)])));
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<Document, PlistError> {
    PlistDecoder::new(bytes).decode()
}

/// Wrap a reader, i.e. a socket or pipe, in a [`PlistDecoder`]
pub fn decode_stream<R: Read>(stream: R) -> PlistDecoder<BufReader<R>> {
    PlistDecoder::new(BufReader::new(stream))
}

/// Read the file at `path` into memory and decode it with the default [`DecodeOptions`]
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Document, PlistError> {
    decode_file_with_options(path, DecodeOptions::default())
}

/// Read the file at `path` into memory and decode it
///
/// The file handle is closed before decoding starts.
pub fn decode_file_with_options<P: AsRef<Path>>(
    path: P,
    options: DecodeOptions,
) -> Result<Document, PlistError> {
    let path = path.as_ref();
    debug!("reading plist from {}", path.display());

    let bytes = {
        let mut file =
            File::open(path).map_err(|why| PlistError::CannotRead(path.to_path_buf(), why))?;
        let mut bytes = vec![];
        file.read_to_end(&mut bytes)
            .map_err(|why| PlistError::CannotRead(path.to_path_buf(), why))?;
        bytes
    };

    PlistDecoder::with_options(bytes.as_slice(), options).decode()
}
