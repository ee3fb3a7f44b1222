mod image_decoder;
pub mod size;

pub use image_decoder::DecodeError;
