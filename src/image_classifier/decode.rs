use crate::device_camera::interface::CapturedImage;
use crate::error::InferenceError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// EXIF orientation, named after how the stored pixels must be turned to show upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    UpMirrored,
    Down,
    DownMirrored,
    LeftMirrored,
    Right,
    RightMirrored,
    Left,
}

impl Orientation {
    pub fn from_exif(value: u32) -> Option<Self> {
        match value {
            1 => Some(Orientation::Up),
            2 => Some(Orientation::UpMirrored),
            3 => Some(Orientation::Down),
            4 => Some(Orientation::DownMirrored),
            5 => Some(Orientation::LeftMirrored),
            6 => Some(Orientation::Right),
            7 => Some(Orientation::RightMirrored),
            8 => Some(Orientation::Left),
            _ => None,
        }
    }

    pub fn apply(&self, image: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Up => image,
            Orientation::UpMirrored => image.fliph(),
            Orientation::Down => image.rotate180(),
            Orientation::DownMirrored => image.flipv(),
            Orientation::LeftMirrored => image.rotate90().fliph(),
            Orientation::Right => image.rotate90(),
            Orientation::RightMirrored => image.rotate270().fliph(),
            Orientation::Left => image.rotate270(),
        }
    }
}

/// Reads the orientation tag. No EXIF block, or no tag, means the image is stored upright.
/// A broken EXIF block, or a tag outside 1..=8, is an error rather than a guess.
pub fn read_orientation(bytes: &[u8]) -> Result<Orientation, InferenceError> {
    // Formats without an EXIF container are always stored upright.
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg | ImageFormat::Tiff | ImageFormat::Png | ImageFormat::WebP) => {}
        _ => return Ok(Orientation::Up),
    }

    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(Orientation::Up),
        Err(e) => return Err(InferenceError::Decode(format!("invalid EXIF: {}", e))),
    };

    let Some(field) = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) else {
        return Ok(Orientation::Up);
    };

    let value = field
        .value
        .get_uint(0)
        .ok_or(InferenceError::UnsupportedOrientation(0))?;

    Orientation::from_exif(value).ok_or(InferenceError::UnsupportedOrientation(value))
}

/// Decodes a captured photo into an upright bitmap.
pub fn decode_captured_image(image: &CapturedImage) -> Result<DynamicImage, InferenceError> {
    if image.bytes.is_empty() {
        return Err(InferenceError::EmptyImage);
    }

    let orientation = read_orientation(&image.bytes)?;

    let decoded = image::load_from_memory(&image.bytes)
        .map_err(|e| InferenceError::Decode(e.to_string()))?;

    Ok(orientation.apply(decoded))
}
