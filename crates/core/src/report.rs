use crate::model::{ClassRow, ValidationReport};

const HEADERS: [&str; 3] = ["Class", "Images", "Non-Images"];

pub const SUCCESS_LINE: &str = "Dataset looks good.";

/// Renders the per-class table. Empty input renders nothing.
pub fn render_table(rows: &[ClassRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let cells = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.images.to_string(),
                row.non_images.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS, &widths));
    out.push_str(
        &widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &cells {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row<S: AsRef<str>>(cells: &[S; 3], widths: &[usize; 3]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{line}\n")
}

/// Renders everything the CLI prints: table, warnings, issues and, when
/// nothing failed, the closing success line.
pub fn render_report(report: &ValidationReport) -> String {
    let mut out = render_table(&report.rows);

    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }

    if !report.errors.is_empty() {
        out.push_str("\nIssues found:\n");
        for error in &report.errors {
            out.push_str(&format!("- {}\n", error));
        }
    } else {
        out.push_str(&format!("\n{SUCCESS_LINE}\n"));
    }

    out
}
