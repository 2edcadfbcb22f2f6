//! Application layer: phrase sampling and the overlay session
//!
//! This layer orchestrates domain logic and owns the I/O at its edges.

pub mod error;
pub mod error_ext;
pub mod overlay;
pub mod phrases;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use overlay::OverlaySession;
pub use phrases::{read_phrases, sample_phrases, DEFAULT_MAX_PHRASES};
