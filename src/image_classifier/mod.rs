pub mod decode;
pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod models;
#[cfg(test)]
pub mod test_images;
pub mod tract;
