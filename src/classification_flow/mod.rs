pub mod core;
pub mod format;
pub mod main;
pub mod render;
pub mod run;
pub mod run_effect;
pub mod search;
#[cfg(test)]
mod tests;
