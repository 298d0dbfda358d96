use super::domain::ShipmentsAndDrivers;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the `{ "shipments": [...], "drivers": [...] }` document.
///
/// A literal `null` document loads as `None`; callers treat that the same as
/// a roster they could not obtain.
pub struct RosterLoader;

impl RosterLoader {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Option<ShipmentsAndDrivers>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Option<ShipmentsAndDrivers>, RosterImportError> {
        let roster: Option<ShipmentsAndDrivers> = serde_json::from_reader(reader)?;
        log_loaded(roster.as_ref());
        Ok(roster)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Option<ShipmentsAndDrivers>, RosterImportError> {
        let roster: Option<ShipmentsAndDrivers> = serde_json::from_slice(bytes)?;
        log_loaded(roster.as_ref());
        Ok(roster)
    }
}

fn log_loaded(roster: Option<&ShipmentsAndDrivers>) {
    match roster {
        Some(roster) => tracing::debug!(
            shipments = roster.shipments.len(),
            drivers = roster.drivers.len(),
            "roster loaded"
        ),
        None => tracing::debug!("roster document is null"),
    }
}
