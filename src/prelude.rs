//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use trama::prelude::*;
//! ```

pub use crate::element::Element;
pub use crate::error::{Result, TramaError};
pub use crate::primitives::Grid;
pub use crate::transform::invert_half_plane;
