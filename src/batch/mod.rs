mod worker;

pub use worker::{BatchRequest, BatchTask, RunState, start_batch};

use std::fs;
use std::path::Path;

use image::{ImageReader, RgbaImage};
use log::{debug, info};

use crate::atlas::parse_atlas;
use crate::error::BunkaiError;
use crate::extract::{reconstruct_sprite, save_sprite};

/// Extract every sprite described by the atlas into `output_dir`.
///
/// The sheet is loaded once and shared across all records. Records are
/// processed sequentially in document order, and the first error aborts
/// the remaining batch; sprites already written before the failure stay
/// on disk.
pub fn run_batch(
    descriptor_path: &Path,
    sheet_path: &Path,
    output_dir: &Path,
) -> Result<String, BunkaiError> {
    let text =
        fs::read_to_string(descriptor_path).map_err(|e| BunkaiError::DescriptorRead {
            path: descriptor_path.to_path_buf(),
            source: e,
        })?;
    let records = parse_atlas(&text)?;
    info!("Parsed {} sprite records", records.len());

    let sheet = load_sheet(sheet_path)?;

    for record in &records {
        let canvas = reconstruct_sprite(&sheet, record)?;
        let path = save_sprite(&canvas, output_dir, &record.name)?;
        debug!("Wrote {}", path.display());
    }

    Ok(format!(
        "Extracted {} sprites to {}",
        records.len(),
        output_dir.display()
    ))
}

fn load_sheet(path: &Path) -> Result<RgbaImage, BunkaiError> {
    Ok(ImageReader::open(path)
        .map_err(|e| BunkaiError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| BunkaiError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        sheet_path: PathBuf,
    }

    /// 64x64 sheet whose pixels encode their own coordinates
    fn write_fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let sheet = RgbaImage::from_fn(64, 64, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let sheet_path = dir.path().join("sheet.png");
        sheet.save(&sheet_path).unwrap();
        Fixture { dir, sheet_path }
    }

    fn write_atlas(fixture: &Fixture, body: &str) -> PathBuf {
        let path = fixture.dir.path().join("atlas.xml");
        std::fs::write(
            &path,
            format!(r#"<TextureAtlas imagePath="sheet.png">{body}</TextureAtlas>"#),
        )
        .unwrap();
        path
    }

    fn output_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_single_sprite_matches_sheet_region() {
        let fixture = write_fixture();
        let atlas = write_atlas(
            &fixture,
            r#"<SubTexture name="hero" x="0" y="0" width="32" height="32"/>"#,
        );
        let out_dir = fixture.dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let msg = run_batch(&atlas, &fixture.sheet_path, &out_dir).unwrap();
        assert!(msg.contains("1 sprites"));

        let hero = image::open(out_dir.join("hero.png")).unwrap().into_rgba8();
        assert_eq!(hero.dimensions(), (32, 32));
        for y in 0..32u32 {
            for x in 0..32u32 {
                assert_eq!(*hero.get_pixel(x, y), Rgba([x as u8, y as u8, 0, 255]));
            }
        }
    }

    #[test]
    fn test_rotated_square_sprite_is_rotated_content() {
        let fixture = write_fixture();
        let atlas = write_atlas(
            &fixture,
            r#"<SubTexture name="hero" x="0" y="0" width="32" height="32" rotated="true"/>"#,
        );
        let out_dir = fixture.dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        run_batch(&atlas, &fixture.sheet_path, &out_dir).unwrap();

        let hero = image::open(out_dir.join("hero.png")).unwrap().into_rgba8();
        // Square, so the dimension swap is invisible
        assert_eq!(hero.dimensions(), (32, 32));
        // but the content is rotated 90° CCW: source (x,y) -> (y, 31-x)
        assert_eq!(*hero.get_pixel(0, 31), Rgba([0, 0, 0, 255]));
        assert_eq!(*hero.get_pixel(12, 31 - 7), Rgba([7, 12, 0, 255]));
    }

    #[test]
    fn test_trimmed_sprite_gets_transparent_padding() {
        let fixture = write_fixture();
        let atlas = write_atlas(
            &fixture,
            r#"<SubTexture name="pad" x="0" y="0" width="32" height="32"
                           frameX="5" frameY="0" frameWidth="40" frameHeight="32"/>"#,
        );
        let out_dir = fixture.dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        run_batch(&atlas, &fixture.sheet_path, &out_dir).unwrap();

        let pad = image::open(out_dir.join("pad.png")).unwrap().into_rgba8();
        assert_eq!(pad.dimensions(), (40, 32));
        for y in 0..32 {
            for x in (0..5).chain(37..40) {
                assert_eq!(pad.get_pixel(x, y)[3], 0);
            }
            assert_eq!(*pad.get_pixel(5, y), Rgba([0, y as u8, 0, 255]));
        }
    }

    #[test]
    fn test_malformed_document_writes_nothing() {
        let fixture = write_fixture();
        let atlas = fixture.dir.path().join("atlas.xml");
        std::fs::write(&atlas, "<TextureAtlas><SubTexture").unwrap();
        let out_dir = fixture.dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let err = run_batch(&atlas, &fixture.sheet_path, &out_dir).unwrap_err();
        assert!(matches!(err, BunkaiError::MalformedDocument(_)));
        assert!(output_files(&out_dir).is_empty());
    }

    #[test]
    fn test_out_of_bounds_aborts_remaining_records() {
        let fixture = write_fixture();
        let atlas = write_atlas(
            &fixture,
            r#"<SubTexture name="first" x="0" y="0" width="16" height="16"/>
               <SubTexture name="oob" x="60" y="0" width="16" height="16"/>
               <SubTexture name="never" x="0" y="16" width="16" height="16"/>"#,
        );
        let out_dir = fixture.dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let err = run_batch(&atlas, &fixture.sheet_path, &out_dir).unwrap_err();
        assert!(matches!(err, BunkaiError::CropOutOfBounds { ref name, .. } if name == "oob"));

        // first was already written, never was not reached
        assert_eq!(output_files(&out_dir), ["first.png"]);
    }

    #[test]
    fn test_missing_sheet_image() {
        let fixture = write_fixture();
        let atlas = write_atlas(
            &fixture,
            r#"<SubTexture name="hero" x="0" y="0" width="8" height="8"/>"#,
        );

        let err = run_batch(
            &atlas,
            &fixture.dir.path().join("nope.png"),
            fixture.dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, BunkaiError::ImageLoad { .. }));
    }
}
