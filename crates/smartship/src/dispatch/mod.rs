//! Driver assignment for the shipment board.
//!
//! The engine in [`assigner`] is a pure, synchronous function over two string
//! lists. Loading the roster and keeping per-card display state are layered on
//! top by [`roster`] and [`board`].

pub mod assigner;
pub mod board;
pub mod domain;
pub mod roster;
pub mod suitability;

#[cfg(test)]
mod tests;

pub use assigner::{assign_drivers, assign_roster};
pub use board::{
    CardBackground, CardTheme, ShipmentBoard, ShipmentCard, ShipmentCardView, NO_DRIVER_LABEL,
};
pub use domain::{Assignment, ShipmentsAndDrivers};
pub use roster::{RosterImportError, RosterLoader};
