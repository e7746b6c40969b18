/*!
 Decodes the requested document and hands it to the selected exporter.
*/

use std::io::{stdout, BufWriter, Write};

use plist_decoder::{decode_file_with_options, xml::models::Document};

use crate::{
    app::{error::RuntimeError, export_type::ExportType, options::Options},
    Exporter, Summary, JSON, TXT,
};

/// Stores the application state and handles application lifecycle
pub struct Config {
    /// App settings
    pub options: Options,
    /// The fully decoded property list
    pub document: Document,
}

impl Config {
    /// Decode the file named in `options`
    pub fn new(options: Options) -> Result<Config, RuntimeError> {
        let document = decode_file_with_options(&options.plist_path, options.decode_options)
            .map_err(RuntimeError::DecodeError)?;

        Ok(Config { options, document })
    }

    /// Render the document in the selected format to stdout
    pub fn start(&self) -> Result<(), RuntimeError> {
        let stdout = stdout();
        let mut out = BufWriter::new(stdout.lock());

        match self.options.export_type {
            ExportType::Summary => Summary::new(self).export(&mut out)?,
            ExportType::Txt => TXT::new(self).export(&mut out)?,
            ExportType::Json => JSON::new(self).export(&mut out)?,
        }

        out.flush().map_err(RuntimeError::DiskError)
    }
}
