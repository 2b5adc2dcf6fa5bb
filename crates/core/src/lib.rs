#![deny(unsafe_code)]
//! Core types and traits for the phosphor demo suite.
//!
//! Provides the `Generator` trait, `Field` grid, `Palette` quantizer,
//! `Argb` color, the `Surface` render contract with an in-memory
//! `BufferSurface`, the injectable `Rng` capability with the `Xorshift64`
//! implementation, `DemoError`, and JSON parameter helpers.

pub mod color;
pub mod error;
pub mod field;
pub mod generator;
pub mod palette;
pub mod params;
pub mod rng;
pub mod surface;

pub use color::Argb;
pub use error::DemoError;
pub use field::Field;
pub use generator::Generator;
pub use palette::Palette;
pub use rng::{Rng, Xorshift64};
pub use surface::{BufferSurface, Rect, Surface};
