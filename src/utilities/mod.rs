pub mod scale;

pub use scale::{divide_scale, inverse, max_scale, sinify};
