use super::common::*;
use crate::dispatch::board::{CardBackground, CardTheme, ShipmentBoard, NO_DRIVER_LABEL};
use crate::dispatch::domain::ShipmentsAndDrivers;

fn small_roster() -> ShipmentsAndDrivers {
    ShipmentsAndDrivers::new(["Elm", "Oak"], ["Bob"])
}

#[test]
fn board_starts_collapsed_after_assignment() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&small_roster()));

    assert_eq!(board.len(), 2);
    assert!(board.cards().iter().all(|card| !card.expanded));

    let views = board.views(CardTheme::Light);
    assert_eq!(views[0].driver, "Bob");
    assert!(views[0].assigned);
    assert!(views[0].shipment.is_none());
    assert_eq!(views[1].driver, NO_DRIVER_LABEL);
    assert!(!views[1].assigned);
    assert!(views
        .iter()
        .all(|view| view.background == CardBackground::LightGray));
}

#[test]
fn toggling_reveals_and_hides_the_shipment() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&small_roster()));

    assert_eq!(board.toggle(1), Some(true));
    let views = board.views(CardTheme::Dark);
    assert_eq!(views[1].shipment.as_deref(), Some("Oak"));
    assert!(views[0].shipment.is_none());
    assert_eq!(views[1].background, CardBackground::DarkGray);

    assert_eq!(board.toggle(1), Some(false));
    assert!(board.views(CardTheme::Dark)[1].shipment.is_none());
}

#[test]
fn toggling_out_of_range_is_ignored() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&small_roster()));
    assert_eq!(board.toggle(2), None);
    assert!(board.cards().iter().all(|card| !card.expanded));
}

#[test]
fn expand_and_collapse_all() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&street_roster()));

    board.expand_all();
    assert!(board
        .views(CardTheme::Light)
        .iter()
        .all(|view| view.shipment.is_some()));

    board.collapse_all();
    assert!(board.cards().iter().all(|card| !card.expanded));
}

#[test]
fn rerunning_replaces_previous_cards() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&street_roster()));
    board.expand_all();

    board.assign_drivers(Some(&small_roster()));

    assert_eq!(board.len(), 2);
    assert_eq!(
        board.assignments().cloned().collect::<Vec<_>>(),
        vec![pair("Elm", "Bob"), unassigned("Oak")]
    );
    assert!(board.cards().iter().all(|card| !card.expanded));
}

#[test]
fn absent_roster_clears_the_board() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&small_roster()));

    board.assign_drivers(None);

    assert!(board.is_empty());
    assert!(board.views(CardTheme::Light).is_empty());
}

#[test]
fn card_view_serializes_for_display() {
    let mut board = ShipmentBoard::new();
    board.assign_drivers(Some(&small_roster()));
    board.toggle(0);

    let json = serde_json::to_value(board.views(CardTheme::Dark)).expect("views serialize");

    assert_eq!(
        json,
        serde_json::json!([
            { "driver": "Bob", "shipment": "Elm", "assigned": true, "background": "dark_gray" },
            { "driver": "No driver available", "assigned": false, "background": "dark_gray" }
        ])
    );
}
