use std::path::Path;

use image::{RgbaImage, imageops};

use crate::atlas::SpriteRecord;
use crate::error::BunkaiError;

/// Rebuild one sprite's original untrimmed frame from the packed sheet.
///
/// Crops the packed region, undoes the packer's 90° rotation if present,
/// then places the result on a transparent canvas sized to hold both the
/// declared frame and the sprite at its frame offset. Pure pixel work,
/// no file I/O.
pub fn reconstruct_sprite(
    sheet: &RgbaImage,
    record: &SpriteRecord,
) -> Result<RgbaImage, BunkaiError> {
    let sprite = crop_sprite(sheet, record)?;

    // Packers store rotated sprites 90° clockwise; rotating 270° CW
    // (i.e. 90° CCW) restores the original orientation. The rotated
    // buffer's own dimensions are the working dimensions from here on.
    let sprite = if record.rotated {
        imageops::rotate270(&sprite)
    } else {
        sprite
    };

    let (canvas_width, canvas_height) = canvas_size(sprite.dimensions(), record);

    // RgbaImage::new zero-fills, so the canvas starts fully transparent.
    let mut canvas = RgbaImage::new(canvas_width, canvas_height);
    imageops::replace(
        &mut canvas,
        &sprite,
        i64::from(record.frame_x.unsigned_abs()),
        i64::from(record.frame_y.unsigned_abs()),
    );

    Ok(canvas)
}

/// Crop the packed region `[x, y, x+width, y+height]` out of the sheet.
fn crop_sprite(sheet: &RgbaImage, record: &SpriteRecord) -> Result<RgbaImage, BunkaiError> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    // u64 arithmetic so x+width cannot wrap before the comparison
    let right = u64::from(record.x) + u64::from(record.width);
    let bottom = u64::from(record.y) + u64::from(record.height);
    if right > u64::from(sheet_width) || bottom > u64::from(sheet_height) {
        return Err(BunkaiError::CropOutOfBounds {
            name: record.name.clone(),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            sheet_width,
            sheet_height,
        });
    }

    Ok(imageops::crop_imm(sheet, record.x, record.y, record.width, record.height).to_image())
}

/// Canvas dimensions for a sprite's output frame.
///
/// `max(working + |frame offset|, declared frame size)` per axis: large
/// enough for the declared frame AND for the sprite pasted at its
/// offset, even when the two disagree. Never throws away pixels.
fn canvas_size(working: (u32, u32), record: &SpriteRecord) -> (u32, u32) {
    let (working_width, working_height) = working;
    let width = (working_width + record.frame_x.unsigned_abs()).max(record.frame_width);
    let height = (working_height + record.frame_y.unsigned_abs()).max(record.frame_height);
    (width, height)
}

/// Write a reconstructed frame as `<output_dir>/<name>.png`, replacing
/// any existing file.
pub fn save_sprite(
    canvas: &RgbaImage,
    output_dir: &Path,
    name: &str,
) -> Result<std::path::PathBuf, BunkaiError> {
    let path = output_dir.join(format!("{name}.png"));
    canvas.save(&path).map_err(|e| BunkaiError::ImageSave {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
