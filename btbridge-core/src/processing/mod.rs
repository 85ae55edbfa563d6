pub mod scale;
pub mod staging;
