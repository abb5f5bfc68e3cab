//! JSON form of the document tree
//!
//! Every node is an object tagged by `"type"`. Unknown tags become
//! [`Node::Unsupported`] so a document with foreign elements still loads.

use super::node::*;
use base64::Engine;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_string();

        fn parse<T: DeserializeOwned, E: serde::de::Error>(value: Value) -> Result<T, E> {
            serde_json::from_value(value).map_err(E::custom)
        }

        Ok(match kind.as_str() {
            "body" => Node::Body(parse(value)?),
            "paragraph" => Node::Paragraph(parse(value)?),
            "text" => Node::Text(parse(value)?),
            "equation" => Node::Equation(parse(value)?),
            "equation_symbol" => Node::EquationSymbol(parse(value)?),
            "equation_function" => Node::EquationFunction(parse(value)?),
            "equation_separator" => Node::EquationSeparator,
            "list_item" => Node::ListItem(parse(value)?),
            "footnote" => Node::Footnote(parse(value)?),
            "inline_image" => Node::InlineImage(parse(value)?),
            _ => {
                let children = match value.get("children") {
                    Some(children) => parse(children.clone())?,
                    None => Vec::new(),
                };
                Node::Unsupported(Unsupported {
                    kind: kind.to_uppercase(),
                    children,
                })
            }
        })
    }
}

/// Decode standard base64 image payloads.
pub(crate) fn deserialize_base64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(D::Error::custom)
}

/// Parse a document tree from JSON.
pub fn from_json(input: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str(input)
}
