use base64::{prelude::BASE64_STANDARD, Engine};

use plist_decoder::{
    util::dates::format_rfc3339,
    xml::models::{Dictionary, Value},
};

use crate::{
    app::runtime::Config,
    exporters::exporter::{Exporter, Writer},
};

/// Indentation added for each level of nesting
const INDENT: &str = "    ";

/// Renders a document as an indented tree, one value per line
pub struct TXT<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for TXT<'a> {
    fn new(config: &'a Config) -> Self {
        TXT { config }
    }

    fn render(&self) -> String {
        let document = &self.config.document;
        let mut out_s = String::new();

        self.add_line(&mut out_s, &format!("plist v{}", document.version), "");
        match &document.root {
            Some(root) => out_s.push_str(&self.format_value(root, 0)),
            None => self.add_line(&mut out_s, "(empty)", ""),
        }

        out_s
    }
}

impl<'a> Writer<String> for TXT<'a> {
    fn format_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Dictionary(dictionary) => self.format_dictionary(dictionary, indent),
            Value::Array(array) => self.format_array(array, indent),
            Value::String(text) => format!("string {text:?}\n"),
            Value::Integer(number) => format!("integer {number}\n"),
            Value::Real(number) => format!("real {number}\n"),
            Value::Boolean(flag) => format!("boolean {flag}\n"),
            Value::Date(date) => format!("date {}\n", format_rfc3339(date)),
            Value::Data(bytes) if bytes.is_empty() => "data (0 bytes)\n".to_string(),
            Value::Data(bytes) => format!(
                "data ({}) {}\n",
                plural(bytes.len(), "byte"),
                BASE64_STANDARD.encode(bytes)
            ),
        }
    }

    fn format_dictionary(&self, dictionary: &Dictionary, indent: usize) -> String {
        let mut out_s = format!("dict ({})\n", plural(dictionary.len(), "key"));
        let prefix = INDENT.repeat(indent + 1);

        for (key, value) in dictionary {
            out_s.push_str(&prefix);
            out_s.push_str(&format!("{key:?}: "));
            out_s.push_str(&self.format_value(value, indent + 1));
        }

        out_s
    }

    fn format_array(&self, array: &[Value], indent: usize) -> String {
        let mut out_s = format!("array ({})\n", plural(array.len(), "item"));
        let prefix = INDENT.repeat(indent + 1);

        for (idx, value) in array.iter().enumerate() {
            out_s.push_str(&prefix);
            out_s.push_str(&format!("[{idx}]: "));
            out_s.push_str(&self.format_value(value, indent + 1));
        }

        out_s
    }
}

impl<'a> TXT<'a> {
    fn add_line(&self, string: &mut String, part: &str, indent: &str) {
        if !part.is_empty() {
            string.push_str(indent);
            string.push_str(part);
            string.push('\n');
        }
    }
}

/// Pair a count with a noun, i.e. `1 key` or `3 keys`
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use plist_decoder::{
        decode_bytes,
        xml::{models::Value, options::DecodeOptions},
    };

    use crate::{
        app::{export_type::ExportType, options::Options, runtime::Config},
        exporters::exporter::Writer,
        Exporter, TXT,
    };

    fn fake_config(source: &str) -> Config {
        Config {
            options: Options {
                plist_path: PathBuf::from("fake.plist"),
                export_type: ExportType::Txt,
                decode_options: DecodeOptions::default(),
            },
            document: decode_bytes(source.as_bytes()).unwrap(),
        }
    }

    #[test]
    fn can_render_empty() {
        let config = fake_config(r#"<plist version="1.0"></plist>"#);
        let exporter = TXT::new(&config);
        assert_eq!(exporter.render(), "plist v1.0\n(empty)\n");
    }

    #[test]
    fn can_render_tree() {
        let config = fake_config(
            r#"<plist version="1.0">
<dict>
    <key>name</key>
    <string>Example "app"</string>
    <key>list</key>
    <array>
        <integer>1</integer>
        <dict/>
    </array>
    <key>on</key>
    <true/>
</dict>
</plist>"#,
        );
        let exporter = TXT::new(&config);

        let expected = concat!(
            "plist v1.0\n",
            "dict (3 keys)\n",
            "    \"list\": array (2 items)\n",
            "        [0]: integer 1\n",
            "        [1]: dict (0 keys)\n",
            "    \"name\": string \"Example \\\"app\\\"\"\n",
            "    \"on\": boolean true\n",
        );
        assert_eq!(exporter.render(), expected);
    }

    #[test]
    fn can_format_leaves() {
        let config = fake_config(r#"<plist version="1.0"></plist>"#);
        let exporter = TXT::new(&config);

        assert_eq!(exporter.format_value(&Value::Real(-0.25), 0), "real -0.25\n");
        assert_eq!(
            exporter.format_value(&Value::Data(b"hi".to_vec()), 0),
            "data (2 bytes) aGk=\n"
        );
        assert_eq!(
            exporter.format_value(&Value::Data(vec![]), 0),
            "data (0 bytes)\n"
        );
    }

    #[test]
    fn can_format_date() {
        let config = fake_config(
            r#"<plist version="1.0"><array><date>2011-10-05T16:48:00+02:00</date></array></plist>"#,
        );
        let exporter = TXT::new(&config);

        let root = config.document.root.as_ref().unwrap();
        let date = &root.as_array().unwrap()[0];
        assert_eq!(exporter.format_value(date, 0), "date 2011-10-05T14:48:00Z\n");
    }

    #[test]
    fn can_add_line_no_indent() {
        let config = fake_config(r#"<plist version="1.0"></plist>"#);
        let exporter = TXT::new(&config);

        let mut s = String::new();
        exporter.add_line(&mut s, "hello world", "");
        assert_eq!(s, "hello world\n".to_string());
    }

    #[test]
    fn can_add_line_skip_empty() {
        let config = fake_config(r#"<plist version="1.0"></plist>"#);
        let exporter = TXT::new(&config);

        let mut s = String::new();
        exporter.add_line(&mut s, "", "    ");
        assert!(s.is_empty());
    }
}
