pub mod blob;
pub mod draw;
pub mod input_preprocess;
