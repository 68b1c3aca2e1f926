//! Table output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use vmc_cli::session::StatusRow;
use vmc_model::Status;

pub fn print_status_table(rows: &[StatusRow]) {
    if rows.is_empty() {
        println!("No machines in the catalog and no stored statuses.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Machine"),
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Since"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.slug),
            Cell::new(row.name.as_deref().unwrap_or("-")),
            status_cell(row.status),
            Cell::new(
                row.since
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    println!("{table}");

    let out = rows.iter().filter(|row| row.status == Status::CheckedOut).count();
    let repairing = rows.iter().filter(|row| row.status == Status::Repairing).count();
    println!(
        "{} machines: {} available, {} checked out, {} repairing",
        rows.len(),
        rows.len() - out - repairing,
        out,
        repairing
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn status_cell(status: Status) -> Cell {
    let cell = Cell::new(status.label());
    match status {
        Status::Available => cell.fg(Color::Green),
        Status::CheckedOut => cell.fg(Color::Yellow),
        Status::Repairing => cell.fg(Color::Red),
    }
}
