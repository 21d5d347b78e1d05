pub mod oklab;
pub mod round;
pub mod srgb;
