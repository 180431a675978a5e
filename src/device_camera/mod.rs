#[cfg(test)]
pub mod impl_fake;
pub mod impl_file_dialog;
pub mod interface;
