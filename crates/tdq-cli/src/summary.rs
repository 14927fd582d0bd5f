use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tdq_model::{ParsedProtocol, ValidationSummary, value_label};

use tdq_cli::types::{EventReport, InvalidRow, PatientReport};

pub fn print_patient_report(report: &PatientReport) {
    println!("Patients: {}", report.source.display());
    print_summary_table(&report.summary);
    print_invalid_table(&report.invalid, "Patient");
}

pub fn print_event_report(report: &EventReport) {
    println!("Adverse events: {}", report.source.display());
    print_summary_table(&report.summary);
    print_severity_table(report);
    println!(
        "Event rate: {:.2} events/day (window {} days)",
        report.event_rate, report.days
    );
    print_invalid_table(&report.invalid, "Event");

    if let Some(patient) = &report.patient {
        println!("Events for {}: {}", patient.patient_id, patient.events.len());
        if patient.events.is_empty() {
            return;
        }
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Event"),
            header_cell("Date"),
            header_cell("Severity"),
            header_cell("Description"),
        ]);
        apply_table_style(&mut table);
        for event in &patient.events {
            let field = |name: &str| {
                event
                    .get(name)
                    .map_or_else(|| "-".to_string(), value_label)
            };
            table.add_row(vec![
                Cell::new(field("event_id")),
                Cell::new(field("event_date")),
                Cell::new(field("severity")),
                Cell::new(field("description")),
            ]);
        }
        println!("{table}");
    }
}

pub fn print_protocol(parsed: &ParsedProtocol) {
    println!(
        "Protocol number: {}",
        parsed.protocol_number.as_deref().unwrap_or("-")
    );
    print_criteria("Inclusion criteria", &parsed.inclusion_criteria);
    print_criteria("Exclusion criteria", &parsed.exclusion_criteria);
}

fn print_criteria(title: &str, criteria: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    if criteria.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("none found")]);
    }
    for (idx, criterion) in criteria.iter().enumerate() {
        table.add_row(vec![Cell::new(idx + 1), Cell::new(criterion)]);
    }
    println!("{table}");
}

fn print_summary_table(summary: &ValidationSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    for idx in 0..4 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total),
        Cell::new(summary.valid).fg(Color::Green),
        count_cell(summary.invalid, Color::Red),
        Cell::new(format!("{:.1}%", summary.validation_rate * 100.0)).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_severity_table(report: &EventReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Severity"), header_cell("Events")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count, known) in report.severity_rows() {
        let (label_cell, color) = if known {
            (Cell::new(label), Color::Yellow)
        } else {
            (Cell::new(label).fg(Color::Red), Color::Red)
        };
        table.add_row(vec![label_cell, count_cell(count, color)]);
    }
    println!("{table}");
}

fn print_invalid_table(rows: &[InvalidRow], id_label: &str) {
    if rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell(id_label),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.row),
            row.id.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(row.errors.join("\n")).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
