use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BunkaiError {
    #[error("Atlas descriptor is not well-formed XML: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("SubTexture is missing required attribute '{attribute}'")]
    MissingAttribute { attribute: &'static str },

    #[error("SubTexture attribute '{attribute}' has invalid value '{value}'")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },

    #[error("SubTexture has an empty name")]
    EmptyName,

    #[error(
        "Sprite '{name}' crop region ({x},{y} {width}x{height}) falls outside the \
         sheet ({sheet_width}x{sheet_height})"
    )]
    CropOutOfBounds {
        name: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Failed to read atlas descriptor '{path}': {source}")]
    DescriptorRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load sheet image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save sprite '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },
}
