use std::str::FromStr;

use roxmltree::{Document, Node};

use super::SpriteRecord;
use crate::error::BunkaiError;

/// Parse an atlas descriptor into sprite records, in document order.
///
/// Every `SubTexture` element is selected wherever it appears in the
/// tree, not only as a direct child of the root. Document order is
/// preserved because it determines processing order.
pub fn parse_atlas(text: &str) -> Result<Vec<SpriteRecord>, BunkaiError> {
    let doc = Document::parse(text)?;

    doc.descendants()
        .filter(|node| node.has_tag_name("SubTexture"))
        .map(parse_record)
        .collect()
}

fn parse_record(node: Node) -> Result<SpriteRecord, BunkaiError> {
    let name = required_attr(&node, "name")?;
    if name.is_empty() {
        return Err(BunkaiError::EmptyName);
    }

    let x = required_numeric(&node, "x")?;
    let y = required_numeric(&node, "y")?;
    let width = required_numeric(&node, "width")?;
    let height = required_numeric(&node, "height")?;

    // Frame attributes describe the original untrimmed frame; absent
    // means the sprite was packed untrimmed.
    let frame_x = optional_numeric(&node, "frameX", 0)?;
    let frame_y = optional_numeric(&node, "frameY", 0)?;
    let frame_width = optional_numeric(&node, "frameWidth", width)?;
    let frame_height = optional_numeric(&node, "frameHeight", height)?;

    // Only the exact literal "true" counts; "True", "1" etc. are false.
    let rotated = node.attribute("rotated") == Some("true");

    Ok(SpriteRecord {
        name: name.to_string(),
        x,
        y,
        width,
        height,
        frame_x,
        frame_y,
        frame_width,
        frame_height,
        rotated,
    })
}

fn required_attr<'a>(node: &Node<'a, '_>, attribute: &'static str) -> Result<&'a str, BunkaiError> {
    node.attribute(attribute)
        .ok_or(BunkaiError::MissingAttribute { attribute })
}

fn required_numeric<T: FromStr>(node: &Node, attribute: &'static str) -> Result<T, BunkaiError> {
    parse_numeric(required_attr(node, attribute)?, attribute)
}

fn optional_numeric<T: FromStr>(
    node: &Node,
    attribute: &'static str,
    default: T,
) -> Result<T, BunkaiError> {
    match node.attribute(attribute) {
        Some(value) => parse_numeric(value, attribute),
        None => Ok(default),
    }
}

fn parse_numeric<T: FromStr>(value: &str, attribute: &'static str) -> Result<T, BunkaiError> {
    value.parse().map_err(|_e| BunkaiError::InvalidAttribute {
        attribute,
        value: value.to_string(),
    })
}
