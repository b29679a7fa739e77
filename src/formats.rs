//! Database formats and conversion between them.
//!
//! A database file is read in the format named by its extension and written
//! back out in the other one.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::ConvertError;
use crate::recipes::RecipeCollection;
use crate::xml_db::{self, XmlRecipes};

/// Indentation used for all pretty-printed output.
const INDENT_WIDTH: usize = 4;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbFormat {
    Xml,
    Json,
}

impl DbFormat {
    /// Selects a format from the text after the last `.` of the file name.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let extension = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, extension)| extension);

        match extension {
            Some("xml") => Ok(Self::Xml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConvertError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The format a database read as `self` is written out as.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Xml => Self::Json,
            Self::Json => Self::Xml,
        }
    }

    /// Parses a whole document into the canonical collection.
    pub fn parse(self, content: &str) -> Result<RecipeCollection, ConvertError> {
        let parse_error = |message: String| ConvertError::Parse {
            format: self,
            message,
        };

        match self {
            Self::Xml => xml_db::parse_document(content).map_err(parse_error),
            Self::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Pretty-prints the collection with four-space indentation.
    pub fn serialize(self, collection: &RecipeCollection) -> Result<String, ConvertError> {
        let serialize_error = |message: String| ConvertError::Serialize {
            format: self,
            message,
        };

        match self {
            Self::Xml => {
                let mut buffer = String::new();
                let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
                serializer.indent(' ', INDENT_WIDTH);
                XmlRecipes::from(collection)
                    .serialize(serializer)
                    .map_err(|e| serialize_error(e.to_string()))?;
                Ok(buffer)
            }
            Self::Json => {
                let indent = " ".repeat(INDENT_WIDTH);
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut buffer = Vec::new();
                let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
                collection
                    .serialize(&mut serializer)
                    .map_err(|e| serialize_error(e.to_string()))?;
                String::from_utf8(buffer).map_err(|e| serialize_error(e.to_string()))
            }
        }
    }
}

impl fmt::Display for DbFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "XML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Reads a database file and returns it rendered in the opposite format.
pub fn convert_file(path: &Path) -> Result<String, ConvertError> {
    let source = DbFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let collection = source.parse(&content)?;
    let target = source.opposite();
    debug!(
        recipes = collection.recipes.len(),
        from = %source,
        to = %target,
        "converting database"
    );

    target.serialize(&collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::sample_collection;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DbFormat::from_path(Path::new("cakes.xml")).unwrap(), DbFormat::Xml);
        assert_eq!(
            DbFormat::from_path(Path::new("dir.v2/cakes.json")).unwrap(),
            DbFormat::Json
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        for name in ["cakes.txt", "cakes", "cakes.XML", "cakes.json.bak"] {
            let err = DbFormat::from_path(Path::new(name)).unwrap_err();
            assert!(
                matches!(err, ConvertError::UnsupportedFormat { ref path } if path == &PathBuf::from(name)),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(DbFormat::Xml.opposite(), DbFormat::Json);
        assert_eq!(DbFormat::Json.opposite(), DbFormat::Xml);
    }

    #[test]
    fn test_json_output_layout() {
        let collection = RecipeCollection {
            recipes: vec![crate::recipes::Recipe {
                name: "Plain".to_string(),
                cook_time: "5 min".to_string(),
                ingredients: Vec::new(),
            }],
        };
        let json = DbFormat::Json.serialize(&collection).unwrap();
        let expected = r#"{
    "cake": [
        {
            "name": "Plain",
            "time": "5 min",
            "ingredients": []
        }
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_xml_output_layout() {
        let xml = DbFormat::Xml.serialize(&sample_collection()).unwrap();
        assert!(xml.starts_with("<recipes>\n    <cake>\n        <name>Red Velvet Strawberry Cake</name>"));
        assert!(xml.contains("<stovetime>45 min</stovetime>"));
        assert!(xml.contains("<item>\n                <itemname>Flour</itemname>"));
        assert!(xml.trim_end().ends_with("</recipes>"));
    }

    #[test]
    fn test_round_trip_through_both_formats() {
        let original = sample_collection();
        let xml = DbFormat::Xml.serialize(&original).unwrap();
        let from_xml = DbFormat::Xml.parse(&xml).unwrap();
        let json = DbFormat::Json.serialize(&from_xml).unwrap();
        let from_json = DbFormat::Json.parse(&json).unwrap();
        assert_eq!(from_json, original);
    }

    #[test]
    fn test_padded_fields_survive_json_to_xml_and_back() {
        let mut original = sample_collection();
        original.recipes[0].name = "  Red Velvet ".to_string();
        original.recipes[0].cook_time = " ".to_string();
        original.recipes[0].ingredients[1].unit = " ".to_string();

        let json = DbFormat::Json.serialize(&original).unwrap();
        let from_json = DbFormat::Json.parse(&json).unwrap();
        let xml = DbFormat::Xml.serialize(&from_json).unwrap();
        let from_xml = DbFormat::Xml.parse(&xml).unwrap();
        let back = DbFormat::Json.parse(&DbFormat::Json.serialize(&from_xml).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_xml_escaping() {
        let mut collection = sample_collection();
        collection.recipes[0].name = "Salt & <Pepper> Cake".to_string();
        let xml = DbFormat::Xml.serialize(&collection).unwrap();
        assert!(xml.contains("Salt &amp; &lt;Pepper&gt; Cake"));
        assert_eq!(DbFormat::Xml.parse(&xml).unwrap(), collection);
    }

    #[test]
    fn test_malformed_content() {
        let err = DbFormat::Json.parse("{\"cake\": [").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { format: DbFormat::Json, .. }));

        let err = DbFormat::Xml.parse("<recipes><cake><name>x</cake>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { format: DbFormat::Xml, .. }));
    }

    #[test]
    fn test_convert_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"cake": [{{"name": "Plain", "time": "5 min", "ingredients": []}}]}}"#
        )
        .unwrap();

        let xml = convert_file(file.path()).unwrap();
        let collection = DbFormat::Xml.parse(&xml).unwrap();
        assert_eq!(collection.recipes[0].name, "Plain");
        assert_eq!(collection.recipes[0].cook_time, "5 min");
    }

    #[test]
    fn test_convert_missing_file() {
        let err = convert_file(Path::new("/nonexistent/cakes.xml")).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
