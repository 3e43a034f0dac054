//! Console rendering of the surveillance report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use amr_core::PipelineResult;
use amr_model::TableSchema;
use amr_report::render_narrative;

pub fn print_report(result: &PipelineResult, show_distribution: bool, show_profiles: bool) {
    println!("{}", render_narrative(&result.report.narrative));
    if show_distribution {
        print_distribution(result);
    }
    if show_profiles {
        print_profiles(result);
    }
    print_drivers(result);
}

pub fn print_validation(schema: &TableSchema, isolates: usize) {
    println!("OK: {} isolates, {} antibiotic columns", isolates, schema.antibiotic_count());
    println!("Antibiotics: {}", schema.antibiotics().join(", "));
}

fn print_distribution(result: &PipelineResult) {
    if result.report.resistance_summary.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Antibiotic"),
        header_cell("Label"),
        header_cell("Count"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &result.report.resistance_summary {
        table.add_row(vec![
            Cell::new(&row.antibiotic),
            label_cell(&row.label),
            Cell::new(row.count),
            Cell::new(format!("{:.1}%", row.percent)),
        ]);
    }
    println!("Resistance distribution:");
    println!("{table}");
}

fn print_profiles(result: &PipelineResult) {
    if result.report.mdr_profiles.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("MDR profile"), header_cell("Isolates")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for profile in &result.report.mdr_profiles {
        let label = if profile.profile.is_empty() {
            "(no resistant antibiotics)".to_string()
        } else {
            profile.profile.clone()
        };
        table.add_row(vec![Cell::new(label), Cell::new(profile.count)]);
    }
    println!("Dominant MDR profiles:");
    println!("{table}");
}

fn print_drivers(result: &PipelineResult) {
    if result.report.mdr_drivers.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Antibiotic"),
        header_cell("Observed"),
        header_cell("Resistant among MDR"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for driver in &result.report.mdr_drivers {
        table.add_row(vec![
            Cell::new(&driver.antibiotic),
            Cell::new(driver.observed),
            Cell::new(format!("{:.1}%", driver.resistant_percent)),
        ]);
    }
    println!("MDR drivers:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    match label {
        "Resistant" => Cell::new(label).fg(Color::Red),
        "Intermediate" => Cell::new(label).fg(Color::Yellow),
        "Sensitive" => Cell::new(label).fg(Color::Green),
        other => Cell::new(other),
    }
}
