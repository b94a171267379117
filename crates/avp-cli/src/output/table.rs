//! Plain aligned-table rendering for terminal output.
//!
//! Cells are padded before any color codes are applied, so width math never
//! has to strip escape sequences.

use serde_json::Value;

use super::value_to_cell;

/// Longest a single cell may grow before truncation.
const MAX_CELL_WIDTH: usize = 48;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render any JSON value as a table.
///
/// Arrays of objects become one row per element; single objects become a
/// key/value listing; scalars print as-is.
#[must_use]
pub fn render_value(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => {
            let rows: Vec<Vec<String>> = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            render_table(&["field", "value"], &rows, options)
        }
        scalar => value_to_cell(scalar),
    }
}

fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows: Vec<Vec<String>> = items.iter().map(|item| vec![value_to_cell(item)]).collect();
        return render_table(&["value"], &rows, options);
    }

    // Union of keys across all rows, in first-seen order.
    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect()
        })
        .collect();

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    render_table(&header_refs, &rows, options)
}

fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let cap = cell_cap(headers.len(), options.max_width);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .min(cap)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(header_line.trim_end().chars().count()));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let padded = pad(&truncate(cell, *width), *width);
                if options.color {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Per-cell width cap derived from the terminal width, if known.
fn cell_cap(columns: usize, max_width: Option<usize>) -> usize {
    max_width
        .and_then(|total| {
            let separators = columns.saturating_sub(1) * 2;
            total.checked_sub(separators).map(|usable| usable / columns.max(1))
        })
        .map_or(MAX_CELL_WIDTH, |cap| cap.clamp(6, MAX_CELL_WIDTH))
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

/// Color well-known status words; padding stays untouched because the code
/// wraps the already-padded cell.
fn colorize_status(padded: &str) -> String {
    let code = match padded.trim_end().to_ascii_lowercase().as_str() {
        "verified" | "completed" | "true" => Some("32"),
        "pending" | "requested" | "in review" | "in development" => Some("33"),
        "false" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_COLOR: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn array_of_objects_renders_one_row_per_element() {
        let value = serde_json::json!([
            {"id": 1, "status": "Requested"},
            {"id": 2, "status": "Completed"}
        ]);
        let out = render_value(&value, NO_COLOR);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("Requested"));
        assert!(lines[3].contains("Completed"));
    }

    #[test]
    fn missing_keys_render_as_dash() {
        let value = serde_json::json!([
            {"id": 1, "adminRemarks": "ok"},
            {"id": 2}
        ]);
        let out = render_value(&value, NO_COLOR);
        assert!(out.lines().last().is_some_and(|line| line.contains('-')));
    }

    #[test]
    fn object_renders_field_value_rows() {
        let value = serde_json::json!({"amount": 1500.5, "verified": false});
        let out = render_value(&value, NO_COLOR);
        assert!(out.contains("field"));
        assert!(out.contains("amount"));
        assert!(out.contains("1500.5"));
    }

    #[test]
    fn empty_array_says_no_rows() {
        let value = serde_json::json!([]);
        assert_eq!(render_value(&value, NO_COLOR), "(no rows)");
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        let long = "x".repeat(200);
        let value = serde_json::json!([{"description": long}]);
        let out = render_value(&value, NO_COLOR);
        assert!(out.contains('…'));
        assert!(out.lines().all(|line| line.chars().count() <= MAX_CELL_WIDTH));
    }

    #[test]
    fn colorizes_known_status_words() {
        let value = serde_json::json!([{"status": "verified"}]);
        let out = render_value(
            &value,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("\u{1b}[32m"));
    }
}
