use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,
    HalfTurn,
    CounterClockwise,
}

/// Map an EXIF orientation tag to a rotation.
/// 1 = normal, 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
/// Mirrored orientations are shown as stored.
pub fn rotation_for(orientation: u16) -> Rotation {
    match orientation {
        3 => Rotation::HalfTurn,
        6 => Rotation::Clockwise,
        8 => Rotation::CounterClockwise,
        _ => Rotation::None,
    }
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// True when `image` names an existing local file raylib can decode.
pub fn is_local_image(image: &str) -> bool {
    if image.contains("://") {
        return false;
    }
    let path = Path::new(image);
    path.is_file() && SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: show the image as stored
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Load a card image from disk, apply its EXIF rotation and upload it as a texture.
pub fn load_card_texture(rl: &mut RaylibHandle, thread: &RaylibThread, image: &str) -> Result<Texture2D> {
    if !is_local_image(image) {
        bail!("{image} is not a local image file");
    }
    let path = Path::new(image);
    let file_bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let extension = extension_of(path);
    // EXIF is only reliable in JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(path, &file_bytes)
    } else {
        1
    };

    let mut decoded = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", path.display()))?;

    let rotation = rotation_for(orientation);
    match rotation {
        Rotation::HalfTurn => {
            decoded.rotate_cw();
            decoded.rotate_cw();
        }
        Rotation::Clockwise => decoded.rotate_cw(),
        Rotation::CounterClockwise => decoded.rotate_ccw(),
        Rotation::None => {}
    }
    debug!(path = %path.display(), orientation, ?rotation, "decoded card image");

    let texture = rl
        .load_texture_from_image(thread, &decoded)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", path.display()))?;

    // CPU copy is no longer needed once uploaded
    drop(decoded);

    Ok(texture)
}
