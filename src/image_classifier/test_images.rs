use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// A JPEG with `payload` inserted as an APP1 segment right after SOI.
pub fn jpeg_with_app1(width: u32, height: u32, payload: &[u8]) -> Vec<u8> {
    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut encoded, ImageFormat::Jpeg)
        .unwrap();
    let encoded = encoded.into_inner();

    let length = (payload.len() + 2) as u16;
    let mut bytes = encoded[..2].to_vec();
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(&encoded[2..]);
    bytes
}

/// A JPEG whose EXIF block holds a single Orientation entry.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    // big-endian TIFF header, IFD0 at offset 8
    payload.extend_from_slice(b"MM\0\x2A");
    payload.extend_from_slice(&8u32.to_be_bytes());
    // one entry: tag 0x0112, SHORT, count 1, value padded to 4 bytes
    payload.extend_from_slice(&1u16.to_be_bytes());
    payload.extend_from_slice(&0x0112u16.to_be_bytes());
    payload.extend_from_slice(&3u16.to_be_bytes());
    payload.extend_from_slice(&1u32.to_be_bytes());
    payload.extend_from_slice(&orientation.to_be_bytes());
    payload.extend_from_slice(&[0, 0]);
    // no next IFD
    payload.extend_from_slice(&0u32.to_be_bytes());

    jpeg_with_app1(width, height, &payload)
}
