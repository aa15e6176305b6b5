use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Render items as a pretty JSON array or a rounded table
pub fn render_items<T, R, F>(items: &[T], to_row: F, json: bool) -> String
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        serde_json::to_string_pretty(items).unwrap_or_default()
    } else {
        render_table(items, to_row)
    }
}

fn render_table<T, R, F>(items: &[T], to_row: F) -> String
where
    R: Tabled,
    F: Fn(&T) -> R,
{
    let rows: Vec<R> = items.iter().map(to_row).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a notice on stderr so JSON on stdout stays parseable
pub fn print_notice(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Field label for the detail view
pub fn label(name: &str) -> String {
    format!("{name}:").bold().to_string()
}
