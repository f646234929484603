//! JSON serialization of instances

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use super::config::{OutputConfig, OutputStyle};

/// Single-line formatter that puts a space after `,` and `:`
///
/// This is the layout the reference generator produced, so instances written
/// in the default style compare byte for byte with older fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize any value into bytes using the configured style
pub fn to_vec<T>(value: &T, config: &OutputConfig) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    match config.style {
        OutputStyle::Compact => {
            let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut ser)?;
        }
        OutputStyle::Pretty => {
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
            value.serialize(&mut ser)?;
        }
        OutputStyle::Minified => {
            serde_json::to_writer(&mut buf, value)?;
        }
    }
    if config.trailing_newline {
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut map = BTreeMap::new();
        map.insert("ap", vec!["g1", "g2"]);
        map.insert("labels", vec![]);
        map
    }

    fn render(style: OutputStyle) -> String {
        let config = OutputConfig::new().with_style(style);
        String::from_utf8(to_vec(&sample(), &config).unwrap()).unwrap()
    }

    #[test]
    fn test_compact_spacing() {
        assert_eq!(render(OutputStyle::Compact), r#"{"ap": ["g1", "g2"], "labels": []}"#);
    }

    #[test]
    fn test_minified() {
        assert_eq!(render(OutputStyle::Minified), r#"{"ap":["g1","g2"],"labels":[]}"#);
    }

    #[test]
    fn test_pretty_indentation() {
        let pretty = render(OutputStyle::Pretty);
        assert!(pretty.starts_with("{\n  \"ap\": [\n    \"g1\",\n"));
        assert!(pretty.contains("\"labels\": []"));
    }

    #[test]
    fn test_trailing_newline() {
        let config = OutputConfig::new().with_trailing_newline(true);
        let bytes = to_vec(&sample(), &config).unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let bytes = to_vec(&sample(), &OutputConfig::default()).unwrap();
        assert_eq!(bytes.last(), Some(&b'}'));
    }
}
