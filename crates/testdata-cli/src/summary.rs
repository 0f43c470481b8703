//! Table rendering for `preview` output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use testdata_core::Preview;

pub fn print_preview(preview: &Preview) {
    println!("File: {} ({})", preview.path.display(), preview.size_kb());
    println!("{}", preview_table(preview));
    println!("{}", preview_footer(preview));
}

pub fn preview_table(preview: &Preview) -> Table {
    let mut table = Table::new();
    table.set_header(preview.headers.iter().map(header_cell));
    apply_table_style(&mut table);
    for record in &preview.records {
        table.add_row(record.iter());
    }
    table
}

pub fn preview_footer(preview: &Preview) -> String {
    let shown = preview.records.len();
    if preview.truncated {
        format!("Showing first {shown} records.")
    } else {
        format!("{shown} records.")
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
