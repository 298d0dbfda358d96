use crate::dispatch::domain::{Assignment, ShipmentsAndDrivers};
use std::collections::HashSet;

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn pair(shipment: &str, driver: &str) -> Assignment {
    Assignment::new(shipment, Some(driver.to_string()))
}

pub(super) fn unassigned(shipment: &str) -> Assignment {
    Assignment::new(shipment, None)
}

pub(super) fn street_roster() -> ShipmentsAndDrivers {
    ShipmentsAndDrivers::new(
        [
            "12 Elm Street",
            "480 Oak Avenue",
            "7 Birch Lane",
            "3301 Maple Drive",
            "55 Cedar Court",
            "9 Pine Road",
        ],
        ["Amy", "Bob", "Charlotte", "Dmitri", "Eugenia", "Yusuf"],
    )
}

pub(super) fn assert_unique_drivers(assignments: &[Assignment]) {
    let mut seen = HashSet::new();
    for assignment in assignments {
        if let Some(driver) = assignment.driver() {
            assert!(seen.insert(driver), "driver {driver} assigned twice");
        }
    }
}
