use smartship::dispatch::{RosterImportError, RosterLoader, ShipmentsAndDrivers};
use std::path::Path;
use tracing::warn;

/// Reads the roster document off the runtime's blocking pool.
pub(crate) async fn read_roster(
    path: &Path,
) -> Result<Option<ShipmentsAndDrivers>, RosterImportError> {
    let bytes = tokio::fs::read(path).await?;
    RosterLoader::from_slice(&bytes)
}

/// Like [`read_roster`], but an unreadable or malformed document becomes an
/// absent roster so the board renders empty instead of failing.
pub(crate) async fn load_roster_or_absent(path: &Path) -> Option<ShipmentsAndDrivers> {
    match read_roster(path).await {
        Ok(roster) => roster,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "roster unavailable; board will be empty");
            None
        }
    }
}
