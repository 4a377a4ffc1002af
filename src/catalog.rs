use crate::error::{CatalogError, CatalogResult};
use crate::models::{Item, SellRequest};
use std::collections::BTreeMap;

/// Outcome of one sell request, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    /// Stock was sufficient: quantity decremented, cost accrued to the total
    Sold { name: String, quantity: i32, cost: f64 },
    /// Stock was insufficient: the item is left untouched
    ShortStock {
        name: String,
        requested: i32,
        available: i32,
    },
    /// No item with this name exists
    NotFound { name: String },
}

/// Result of processing a sell batch: one outcome per request plus the
/// accumulated total of the successful lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaleReport {
    pub outcomes: Vec<SaleOutcome>,
    pub total: f64,
}

/// The owning collection of items. Insertion order is preserved and every
/// query is a linear scan over the current state.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge-insert: a name+category collision adds the incoming quantity to
    /// the existing entry in place, otherwise the item is appended. The
    /// catalog never holds two entries sharing name and category.
    pub fn add(&mut self, item: Item) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.name == item.name && i.category == item.category)
        {
            existing.quantity += item.quantity;
            log::debug!(
                "Merged {} x '{}' into existing {} entry",
                item.quantity,
                item.name,
                item.category
            );
            return;
        }
        self.items.push(item);
    }

    /// All items in insertion order. A fresh pass over current state each call.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items grouped by category, categories ascending, insertion order
    /// preserved within each group.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&Item>> {
        let mut groups: BTreeMap<&str, Vec<&Item>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category.as_str()).or_default().push(item);
        }
        groups
    }

    /// Every item whose name matches exactly. Empty result means not found.
    pub fn search(&self, name: &str) -> Vec<&Item> {
        self.items.iter().filter(|i| i.name == name).collect()
    }

    /// Removes every item with this name and returns how many were removed.
    pub fn delete(&mut self, name: &str) -> CatalogResult<usize> {
        let before = self.items.len();
        self.items.retain(|i| i.name != name);
        let removed = before - self.items.len();
        if removed == 0 {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        log::debug!("Deleted {removed} item(s) named '{name}'");
        Ok(removed)
    }

    /// Processes sell requests in submission order. Each request targets the
    /// first entry matching its name: sufficient stock decrements the
    /// quantity and accrues `price * requested` to the total, a shortage
    /// leaves the entry untouched, and a missing name is reported as such.
    /// Every request is processed independently of earlier failures.
    pub fn sell(&mut self, requests: &[SellRequest]) -> SaleReport {
        let mut report = SaleReport::default();
        for request in requests {
            let outcome = match self.items.iter_mut().find(|i| i.name == request.name) {
                Some(item) if item.quantity >= request.quantity => {
                    item.quantity -= request.quantity;
                    let cost = item.price * request.quantity as f64;
                    report.total += cost;
                    SaleOutcome::Sold {
                        name: request.name.clone(),
                        quantity: request.quantity,
                        cost,
                    }
                }
                Some(item) => SaleOutcome::ShortStock {
                    name: request.name.clone(),
                    requested: request.quantity,
                    available: item.quantity,
                },
                None => SaleOutcome::NotFound {
                    name: request.name.clone(),
                },
            };
            report.outcomes.push(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 10, "2024-06-10"));
        catalog.add(Item::perishable("Bread", "bakery", 1.2, 20, "2024-06-08"));
        catalog.add(Item::plain("Soap", "household", 0.8, 25));
        catalog
    }

    #[test]
    fn test_add_appends_new_items_in_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread", "Soap"]);
    }

    #[test]
    fn test_add_merges_on_name_and_category() {
        let mut catalog = Catalog::new();
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 10, "2024-06-10"));
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 5, "2024-06-12"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].quantity, 15);
        // The existing entry wins; the duplicate is discarded wholesale
        assert_eq!(
            catalog.items()[0].expiration_date.as_deref(),
            Some("2024-06-10")
        );
    }

    #[test]
    fn test_add_same_name_different_category_stays_separate() {
        let mut catalog = Catalog::new();
        catalog.add(Item::plain("Brush", "household", 2.0, 5));
        catalog.add(Item::plain("Brush", "paint", 4.0, 3));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_by_category_sorted_with_insertion_order_within() {
        let mut catalog = Catalog::new();
        catalog.add(Item::plain("Soap", "household", 0.8, 25));
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 10, "2024-06-10"));
        catalog.add(Item::plain("Sponge", "household", 0.5, 40));

        let groups = catalog.by_category();
        let categories: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(categories, vec!["dairy", "household"]);

        let household: Vec<&str> = groups["household"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(household, vec!["Soap", "Sponge"]);
    }

    #[test]
    fn test_search_returns_all_exact_matches() {
        let mut catalog = sample_catalog();
        catalog.add(Item::plain("Milk", "powdered", 3.0, 4));

        let matches = catalog.search("Milk");
        assert_eq!(matches.len(), 2);

        assert!(catalog.search("milk").is_empty());
        assert!(catalog.search("Butter").is_empty());
    }

    #[test]
    fn test_delete_removes_all_matching_names() {
        let mut catalog = sample_catalog();
        catalog.add(Item::plain("Milk", "powdered", 3.0, 4));

        let removed = catalog.delete("Milk").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.search("Milk").is_empty());
    }

    #[test]
    fn test_delete_missing_name_reports_not_found() {
        let mut catalog = sample_catalog();
        let err = catalog.delete("Butter").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(name) if name == "Butter"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_sell_decrements_and_accrues_total() {
        let mut catalog = Catalog::new();
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 10, "2024-06-10"));

        let report = catalog.sell(&[SellRequest::new("Milk", 4)]);

        assert_eq!(catalog.items()[0].quantity, 6);
        assert!((report.total - 6.0).abs() < f64::EPSILON);
        assert_eq!(
            report.outcomes,
            vec![SaleOutcome::Sold {
                name: "Milk".to_string(),
                quantity: 4,
                cost: 6.0,
            }]
        );
    }

    #[test]
    fn test_sell_shortage_leaves_item_untouched() {
        let mut catalog = Catalog::new();
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 3, "2024-06-10"));

        let report = catalog.sell(&[SellRequest::new("Milk", 4)]);

        assert_eq!(catalog.items()[0].quantity, 3);
        assert_eq!(report.total, 0.0);
        assert_eq!(
            report.outcomes,
            vec![SaleOutcome::ShortStock {
                name: "Milk".to_string(),
                requested: 4,
                available: 3,
            }]
        );
    }

    #[test]
    fn test_sell_batch_processes_requests_independently() {
        let mut catalog = sample_catalog();

        let report = catalog.sell(&[
            SellRequest::new("Milk", 100),  // shortage
            SellRequest::new("Butter", 1),  // missing
            SellRequest::new("Bread", 5),   // fine
        ]);

        assert_eq!(report.outcomes.len(), 3);
        assert!(matches!(report.outcomes[0], SaleOutcome::ShortStock { .. }));
        assert!(matches!(report.outcomes[1], SaleOutcome::NotFound { .. }));
        assert!(matches!(report.outcomes[2], SaleOutcome::Sold { .. }));
        assert!((report.total - 6.0).abs() < f64::EPSILON);
        assert_eq!(catalog.search("Bread")[0].quantity, 15);
        assert_eq!(catalog.search("Milk")[0].quantity, 10);
    }

    #[test]
    fn test_sell_targets_first_matching_entry_only() {
        let mut catalog = Catalog::new();
        catalog.add(Item::perishable("Milk", "dairy", 1.5, 2, "2024-06-10"));
        catalog.add(Item::plain("Milk", "powdered", 3.0, 50));

        // First entry is short, so the request fails even though the second
        // entry could cover it
        let report = catalog.sell(&[SellRequest::new("Milk", 5)]);
        assert!(matches!(report.outcomes[0], SaleOutcome::ShortStock { .. }));
        assert_eq!(catalog.items()[1].quantity, 50);
    }

    #[test]
    fn test_sell_zero_quantity_succeeds_at_no_cost() {
        let mut catalog = sample_catalog();
        let report = catalog.sell(&[SellRequest::new("Soap", 0)]);
        assert!(matches!(report.outcomes[0], SaleOutcome::Sold { .. }));
        assert_eq!(report.total, 0.0);
        assert_eq!(catalog.search("Soap")[0].quantity, 25);
    }
}
