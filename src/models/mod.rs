//! Domain model for Wits: the strain record and its reference vocabularies.

mod cannabinoid;
mod strain;
mod terpene;

pub use cannabinoid::*;
pub use strain::*;
pub use terpene::*;
