//! End-of-expedition summary table.

use comfy_table::{Cell, Color, ContentArrangement, Table};

use ruin_engine::{Expedition, REQUIRED_ARTIFACTS, Terminal};

/// Build a table of how the expedition went.
pub fn render(expedition: &Expedition, terminal: Terminal, color: bool) -> Table {
    let player = expedition.player();
    let found = REQUIRED_ARTIFACTS
        .iter()
        .filter(|a| player.has_artifact(a))
        .count();

    let outcome = Cell::new(terminal).fg(if terminal.is_victory() {
        Color::Green
    } else {
        Color::Red
    });

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if !color {
        table.force_no_tty();
    }
    table.set_header(vec![
        "Outcome",
        "Turns",
        "Health",
        "Sanity",
        "Knowledge",
        "Artifacts",
        "Seed",
        "Time",
    ]);
    table.add_row(vec![
        outcome,
        Cell::new(expedition.turn()),
        Cell::new(player.health()),
        Cell::new(player.sanity()),
        Cell::new(player.knowledge()),
        Cell::new(format!("{found}/{}", REQUIRED_ARTIFACTS.len())),
        Cell::new(expedition.config().seed),
        Cell::new(format!("{}s", expedition.journal().elapsed().num_seconds())),
    ]);
    table
}
