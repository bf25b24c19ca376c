//! # Screens
//!
//! One module per navigable appliance. Each screen owns its state, handles
//! navigation actions and renders its own body.

mod appliance;
mod strains;

pub use appliance::{Appliance, ApplianceScreen};
pub use strains::StrainsScreen;

#[cfg(test)]
pub use strains::{Status, EMPTY_PLACEHOLDER};
