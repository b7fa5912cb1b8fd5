pub mod decode;
pub mod sequence;
