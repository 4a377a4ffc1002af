use crate::catalog::{Catalog, SaleOutcome, SaleReport};
use crate::models::Item;
use std::fmt::Write;

/// Multi-line labeled record, the detail view used by search results and
/// category listings.
pub fn format_item_record(item: &Item) -> String {
    let mut output = String::new();
    for (label, value) in item.render_fields() {
        let _ = writeln!(output, "{label}: {value}");
    }
    output
}

/// One-line summary used by the full listing: name, category, price, and
/// the expiration date when there is one.
pub fn format_item_line(item: &Item) -> String {
    let mut line = format!(
        "Name: {}, Category: {}, Price: {}",
        item.name, item.category, item.price
    );
    if let Some(date) = &item.expiration_date {
        let _ = write!(line, ", Expiration Date: {date}");
    }
    line
}

/// All items in insertion order, one summary line each.
pub fn format_all_items(catalog: &Catalog) -> String {
    let mut output = String::from("All items:\n");
    for item in catalog.iter() {
        output.push_str(&format_item_line(item));
        output.push('\n');
    }
    output
}

/// Items grouped under category headers, categories ascending.
pub fn format_by_category(catalog: &Catalog) -> String {
    let mut output = String::new();
    for (category, items) in catalog.by_category() {
        let _ = writeln!(output, "Category: {category}");
        for item in items {
            output.push_str(&format_item_record(item));
        }
    }
    output
}

/// Search results as full records, or the not-found line when nothing
/// matched.
pub fn format_search_results(matches: &[&Item]) -> String {
    if matches.is_empty() {
        return "Item not found.\n".to_string();
    }
    let mut output = String::new();
    for item in matches {
        output.push_str(&format_item_record(item));
    }
    output
}

/// Per-line sale statuses in request order, followed by the accumulated
/// total.
pub fn format_sale_report(report: &SaleReport) -> String {
    let mut output = String::new();
    for outcome in &report.outcomes {
        match outcome {
            SaleOutcome::Sold { name, .. } => {
                let _ = writeln!(output, "Item '{name}' sold successfully.");
            }
            SaleOutcome::ShortStock { name, .. } => {
                let _ = writeln!(output, "Not enough quantity of item '{name}' available.");
            }
            SaleOutcome::NotFound { name } => {
                let _ = writeln!(output, "Item '{name}' not found.");
            }
        }
    }
    let _ = writeln!(output, "Total cost: {}", report.total);
    output
}
