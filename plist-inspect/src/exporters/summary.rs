use plist_decoder::xml::models::Kind;

use crate::{app::runtime::Config, exporters::exporter::Exporter};

/// Reports the version and the kind of root value, without walking the tree
pub struct Summary<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for Summary<'a> {
    fn new(config: &'a Config) -> Self {
        Summary { config }
    }

    fn render(&self) -> String {
        let document = &self.config.document;
        let mut out_s = String::new();

        out_s.push_str(&format!("Read plist of version {}\n", document.version));
        match document.root_kind() {
            Some(Kind::Dictionary) => out_s.push_str("Root is a dict\n"),
            Some(Kind::Array) => out_s.push_str("Root is an array\n"),
            Some(other) => out_s.push_str(&format!("Root is a {other}\n")),
            None => out_s.push_str("Root is empty\n"),
        }
        out_s.push_str("Parsed plist\n");

        out_s
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use plist_decoder::{decode_bytes, xml::options::DecodeOptions};

    use crate::{
        app::{export_type::ExportType, options::Options, runtime::Config},
        Exporter, Summary,
    };

    fn fake_config(source: &str) -> Config {
        Config {
            options: Options {
                plist_path: PathBuf::from("fake.plist"),
                export_type: ExportType::Summary,
                decode_options: DecodeOptions::default(),
            },
            document: decode_bytes(source.as_bytes()).unwrap(),
        }
    }

    #[test]
    fn can_summarize_dict() {
        let config = fake_config(r#"<plist version="1.0"><dict/></plist>"#);
        let exporter = Summary::new(&config);
        assert_eq!(
            exporter.render(),
            "Read plist of version 1.0\nRoot is a dict\nParsed plist\n"
        );
    }

    #[test]
    fn can_summarize_array() {
        let config = fake_config(r#"<plist version="0.9"><array><true/></array></plist>"#);
        let exporter = Summary::new(&config);
        assert_eq!(
            exporter.render(),
            "Read plist of version 0.9\nRoot is an array\nParsed plist\n"
        );
    }

    #[test]
    fn can_summarize_empty() {
        let config = fake_config(r#"<plist version="1.0"></plist>"#);
        let exporter = Summary::new(&config);
        assert_eq!(
            exporter.render(),
            "Read plist of version 1.0\nRoot is empty\nParsed plist\n"
        );
    }

    #[test]
    fn can_export_to_writer() {
        let config = fake_config(r#"<plist version="1.0"><dict/></plist>"#);
        let exporter = Summary::new(&config);

        let mut out = vec![];
        exporter.export(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), exporter.render());
    }
}
