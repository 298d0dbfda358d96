use crate::cli::{AssignArgs, BoardArgs, OutputFormat};
use crate::infra::load_roster_or_absent;
use smartship::config::AppConfig;
use smartship::dispatch::{assign_drivers, Assignment, ShipmentBoard, ShipmentCardView};
use smartship::error::AppError;
use tracing::{info, warn};

pub(crate) async fn run_board(args: BoardArgs, config: &AppConfig) -> Result<(), AppError> {
    let BoardArgs {
        data,
        theme,
        toggle,
        expand_all,
        format,
    } = args;

    let path = data.unwrap_or_else(|| config.roster.data_path.clone());
    let theme = theme.unwrap_or(config.display.theme);

    // Assignment only runs once the roster has finished loading.
    let roster = load_roster_or_absent(&path).await;
    let mut board = ShipmentBoard::new();
    board.assign_drivers(roster.as_ref());

    apply_card_actions(&mut board, expand_all, &toggle);

    let views = board.views(theme);
    match format {
        OutputFormat::Text => {
            for line in format_cards(&views) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
    }

    info!(cards = views.len(), ?theme, "shipment board rendered");
    Ok(())
}

/// Expands every card if asked, then flips each 1-based position in order.
/// Positions with no card are logged and skipped.
pub(crate) fn apply_card_actions(
    board: &mut ShipmentBoard,
    expand_all: bool,
    toggles: &[usize],
) {
    if expand_all {
        board.expand_all();
    }
    for &position in toggles {
        if position
            .checked_sub(1)
            .and_then(|index| board.toggle(index))
            .is_none()
        {
            warn!(position, cards = board.len(), "no card at position; ignoring toggle");
        }
    }
}

pub(crate) fn run_assign(args: AssignArgs) -> Result<(), AppError> {
    let assignments = assign_drivers(&args.shipments, &args.drivers);

    match args.format {
        OutputFormat::Text => {
            for line in format_assignments(&assignments) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assignments)?),
    }

    Ok(())
}

pub(crate) fn format_cards(views: &[ShipmentCardView]) -> Vec<String> {
    if views.is_empty() {
        return vec!["No shipments to display".to_string()];
    }

    let mut lines = Vec::with_capacity(views.len());
    for (index, view) in views.iter().enumerate() {
        lines.push(format!("[{}] {}", index + 1, view.driver));
        if let Some(shipment) = &view.shipment {
            lines.push(format!("    {shipment}"));
        }
    }
    lines
}

pub(crate) fn format_assignments(assignments: &[Assignment]) -> Vec<String> {
    assignments
        .iter()
        .map(|assignment| {
            format!(
                "{} -> {}",
                assignment.shipment,
                assignment.driver().unwrap_or("-")
            )
        })
        .collect()
}
