//! Core grid primitives.
//!
//! The `Grid` type is the foundation for all raster operations in the
//! crate. Its arithmetic is delegated to the element kind through the
//! [`crate::element::Element`] trait.

mod grid;

pub use grid::Grid;
