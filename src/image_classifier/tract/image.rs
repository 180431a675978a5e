use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Crops the largest centered region with the target aspect ratio, then scales it.
pub fn center_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let target_aspect = width as f32 / height as f32;

    let (crop_w, crop_h) = if w / h > target_aspect {
        ((h * target_aspect).round() as u32, image.height())
    } else {
        (image.width(), (w / target_aspect).round() as u32)
    };
    let crop_w = crop_w.clamp(1, image.width().max(1));
    let crop_h = crop_h.clamp(1, image.height().max(1));

    let x_offset = (image.width() - crop_w) / 2;
    let y_offset = (image.height() - crop_h) / 2;

    image
        .crop_imm(x_offset, y_offset, crop_w, crop_h)
        .resize_exact(width, height, imageops::FilterType::Triangle)
}

fn image_to_tensor(
    image: &DynamicImage,
    mean: [f32; 3],
    std: [f32; 3],
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let array = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        (pixel[c] as f32 / 255.0 - mean[c]) / std[c]
    });

    Ok(array.into_tensor())
}

pub fn center_crop_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mean: [f32; 3],
    std: [f32; 3],
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let cropped = center_crop(image, width, height);
    let tensor = image_to_tensor(&cropped, mean, std)?;

    Ok(tensor)
}
