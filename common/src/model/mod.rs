pub mod mix;
pub mod source;
