mod conversion;
mod luma;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, rgb_to_hsl, rgb_to_hsv};

// luma
pub use luma::LumaAlgorithm;

// string
pub(crate) use string::parse;
