//! Catalog file save and load.
//!
//! Records are headerless CSV, one item per line:
//! `name,category,price,quantity[,expirationDate]` with the trailing date
//! only on perishable items. Writing goes through the `csv` writer, so a
//! field containing a comma or quote is quoted instead of corrupting the
//! line; for ordinary values the output is byte-identical to the legacy
//! unescaped format, and legacy files load unchanged.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::Item;

/// Parses every line of the file and merge-adds the items into the catalog.
/// The whole file is parsed before the catalog is touched, so a malformed
/// line leaves the in-memory state exactly as it was. Returns the number of
/// records loaded.
pub fn load_catalog(path: &str, catalog: &mut Catalog) -> CatalogResult<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut parsed = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 1);
        let item = parse_record(&record)
            .map_err(|reason| CatalogError::MalformedRecord { line, reason })?;
        parsed.push(item);
    }

    let count = parsed.len();
    for item in parsed {
        catalog.add(item);
    }
    log::info!("Loaded {count} item(s) from {path}");
    Ok(count)
}

/// One persisted line: name, category, price, quantity, and positionally
/// the expiration date when present. The category rule decides whether a
/// trailing date is kept.
fn parse_record(record: &csv::StringRecord) -> Result<Item, String> {
    if record.len() < 4 || record.len() > 5 {
        return Err(format!("expected 4 or 5 fields, got {}", record.len()));
    }
    let price: f64 = record[2]
        .parse()
        .map_err(|_| format!("invalid price '{}'", &record[2]))?;
    let quantity: i32 = record[3]
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", &record[3]))?;
    let expiration_date = record.get(4).map(|date| date.to_string());

    Ok(Item::new(
        record[0].to_string(),
        record[1].to_string(),
        price,
        quantity,
        expiration_date,
    ))
}

/// Serializes every item in collection order, fully overwriting the
/// destination. Perishable items write five fields, plain items four.
pub fn save_catalog(path: &str, catalog: &Catalog) -> CatalogResult<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    for item in catalog.iter() {
        let price = item.price.to_string();
        let quantity = item.quantity.to_string();
        match &item.expiration_date {
            Some(date) => wtr.write_record([
                item.name.as_str(),
                item.category.as_str(),
                price.as_str(),
                quantity.as_str(),
                date.as_str(),
            ])?,
            None => wtr.write_record([
                item.name.as_str(),
                item.category.as_str(),
                price.as_str(),
                quantity.as_str(),
            ])?,
        }
    }
    wtr.flush()?;
    log::info!("Saved {} item(s) to {path}", catalog.len());
    Ok(())
}
