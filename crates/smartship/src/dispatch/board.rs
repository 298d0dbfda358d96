use super::assigner::assign_roster;
use super::domain::{Assignment, ShipmentsAndDrivers};
use serde::Serialize;

pub const NO_DRIVER_LABEL: &str = "No driver available";

/// Light or dark card styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTheme {
    #[default]
    Light,
    Dark,
}

impl CardTheme {
    pub fn background(self) -> CardBackground {
        match self {
            CardTheme::Light => CardBackground::LightGray,
            CardTheme::Dark => CardBackground::DarkGray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBackground {
    LightGray,
    DarkGray,
}

/// One assignment on the board with its expand/collapse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentCard {
    pub assignment: Assignment,
    pub expanded: bool,
}

/// What a card shows: the driver always, the shipment only when expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentCardView {
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<String>,
    pub assigned: bool,
    pub background: CardBackground,
}

/// Caller-owned list of cards produced by the most recent assignment run.
#[derive(Debug, Clone, Default)]
pub struct ShipmentBoard {
    cards: Vec<ShipmentCard>,
}

impl ShipmentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board with a fresh assignment run. Every card starts collapsed.
    pub fn assign_drivers(&mut self, roster: Option<&ShipmentsAndDrivers>) {
        self.cards.clear();
        self.cards.extend(
            assign_roster(roster)
                .into_iter()
                .map(|assignment| ShipmentCard {
                    assignment,
                    expanded: false,
                }),
        );
    }

    pub fn cards(&self) -> &[ShipmentCard] {
        &self.cards
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.cards.iter().map(|card| &card.assignment)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Flips the card at `index` and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let card = self.cards.get_mut(index)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }

    pub fn expand_all(&mut self) {
        self.set_all(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, expanded: bool) {
        for card in &mut self.cards {
            card.expanded = expanded;
        }
    }

    pub fn views(&self, theme: CardTheme) -> Vec<ShipmentCardView> {
        let background = theme.background();
        self.cards
            .iter()
            .map(|card| ShipmentCardView {
                driver: card
                    .assignment
                    .driver()
                    .unwrap_or(NO_DRIVER_LABEL)
                    .to_string(),
                shipment: card
                    .expanded
                    .then(|| card.assignment.shipment.clone()),
                assigned: !card.assignment.is_unassigned(),
                background,
            })
            .collect()
    }
}
