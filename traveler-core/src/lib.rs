//! Traveler Core - Fundamental types
//!
//! This crate provides the types shared by every converter:
//! - `ConvertError`: Typed failures of a single conversion
//! - `FetchError`: Failure kinds of the exchange-rate collaborator
//! - `ErrorReport`: Serializable error form for the presentation boundary

mod error;
mod input;

pub use error::{ConvertError, FetchError, ErrorReport, codes};
pub use input::{ensure_finite, ensure_non_negative, ensure_representable};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertError, FetchError, ErrorReport};
    pub use crate::error::codes;
}
