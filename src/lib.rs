//! Explist
//!
//! Multi-element expansion lists for two-dimensional spectral/hp element
//! discretisations, and the trace (face) space of a three-dimensional mesh.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod exp_list;
pub mod expansion;
pub mod grid;
pub mod reference_cell;
pub mod traits;
pub mod types;

pub use exp_list::{ExpList2D, OffsetLayout, PeriodicMap};
pub use expansion::{ElementIdTracker, Expansion, ExpansionFactory, ExpansionType};
pub use types::{ExpListError, Result};
