use serde::{Deserialize, Serialize};

/// The two lists the engine consumes, as stored in the bundled roster document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentsAndDrivers {
    pub shipments: Vec<String>,
    pub drivers: Vec<String>,
}

impl ShipmentsAndDrivers {
    pub fn new<S, D>(shipments: S, drivers: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            shipments: shipments.into_iter().map(Into::into).collect(),
            drivers: drivers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A shipment paired with the driver chosen for it.
///
/// `driver` is `None` when every eligible driver was already taken or the
/// roster had no drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub shipment: String,
    pub driver: Option<String>,
}

impl Assignment {
    pub fn new(shipment: impl Into<String>, driver: Option<String>) -> Self {
        Self {
            shipment: shipment.into(),
            driver,
        }
    }

    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }

    pub fn is_unassigned(&self) -> bool {
        self.driver.is_none()
    }
}
