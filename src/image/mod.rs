//! Camera frame representation.
//!
//! Frames arrive as packed YCbCr 4:2:2: every cell covers two horizontally
//! adjacent pixels that share one chroma pair. The segmenter samples cells
//! directly; [`YCbCr422Image::to_ycbcr444`] expands a frame for tooling.
pub mod color;
pub mod frame;
pub mod io;
pub mod traits;

pub use self::color::{YCbCr422, YCbCr444};
pub use self::frame::{YCbCr422Image, YCbCr444Image};
pub use self::traits::{ImageView, Rows};
