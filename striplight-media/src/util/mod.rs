pub mod crop;
pub mod hsv;
