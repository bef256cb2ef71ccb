//! Insensible fluid loss estimation: the adjustment rules, the loss aggregate, and the
//! plumbing that gathers and records observations.

pub mod adjustments;
pub mod builder;
pub mod error;
pub mod input;
pub mod logger;
pub mod losses;
pub mod validation;

pub use error::HydrolossError;
