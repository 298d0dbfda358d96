use super::domain::{Assignment, ShipmentsAndDrivers};
use super::suitability::suitability;
use std::collections::HashSet;

/// Assigns the most suitable remaining driver to each shipment, in order.
///
/// Each shipment scans every driver not yet taken by an earlier shipment and
/// keeps the first one with the strictly highest score. Shipments that find
/// no eligible driver get `None`. A driver is never used twice, so the
/// result depends on the order of `shipments`.
pub fn assign_drivers(shipments: &[String], drivers: &[String]) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(shipments.len());
    let mut taken: HashSet<&str> = HashSet::new();

    for street in shipments {
        let mut greatest_suitability = -1.0_f32;
        let mut most_suitable: Option<&str> = None;

        for driver in drivers {
            if taken.contains(driver.as_str()) {
                continue;
            }

            let score = suitability(street, driver);
            if score > greatest_suitability {
                greatest_suitability = score;
                most_suitable = Some(driver.as_str());
            }
        }

        // An empty name is indistinguishable from "none found".
        let chosen = most_suitable.filter(|driver| !driver.is_empty());
        match chosen {
            Some(driver) => {
                taken.insert(driver);
                tracing::debug!(
                    shipment = %street,
                    driver,
                    score = greatest_suitability,
                    "driver assigned"
                );
            }
            None => tracing::debug!(shipment = %street, "no driver available"),
        }

        assignments.push(Assignment::new(street.clone(), chosen.map(str::to_string)));
    }

    let assigned = assignments.iter().filter(|a| !a.is_unassigned()).count();
    tracing::info!(
        shipments = shipments.len(),
        drivers = drivers.len(),
        assigned,
        unassigned = shipments.len() - assigned,
        "driver assignment complete"
    );

    assignments
}

/// Runs [`assign_drivers`] over a loaded roster. An absent roster yields no assignments.
pub fn assign_roster(roster: Option<&ShipmentsAndDrivers>) -> Vec<Assignment> {
    match roster {
        Some(roster) => assign_drivers(&roster.shipments, &roster.drivers),
        None => Vec::new(),
    }
}
