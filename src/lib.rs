//! Trama: dense halftone raster grids in pure Rust.
//!
//! Trama provides a 2D grid container parameterized over a closed set of
//! element kinds (boolean, floating-point, fixed-width signed integer)
//! with saturating elementwise and scalar arithmetic, tolerance-aware
//! equality, a normalized density metric, and a line-based half-plane
//! inversion transform.
//!
//! # Quick Start
//!
//! ```
//! use trama::prelude::*;
//!
//! // A 5x7 grid of 8-bit cells.
//! let img = Grid::from_vec(5, 7, vec![100_i8; 35]).unwrap();
//!
//! // Arithmetic saturates instead of wrapping.
//! let brightened = img.add_scalar(100);
//! assert!(brightened.iter().all(|&c| c == i8::MAX));
//!
//! // Density of the raster relative to its theoretical maximum.
//! assert!((brightened.fill_factor() - 1.0).abs() < 1e-12);
//!
//! // Unary inversion is arithmetic negation for numeric kinds.
//! let inverted = !&img;
//! assert_eq!(!&inverted, img);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core `Grid` type
//! - [`element`]: per-kind arithmetic and equality rules
//! - [`transform`]: half-plane inversion over a grid
//! - [`error`]: crate error type and `Result` alias

pub mod element;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod transform;

pub use element::Element;
pub use error::{Result, TramaError};
pub use primitives::Grid;
