pub mod catalog;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;

// Re-export commonly used items
pub use catalog::{Catalog, SaleOutcome, SaleReport};
pub use error::{CatalogError, CatalogResult};
pub use formatters::{
    format_all_items, format_by_category, format_item_record, format_sale_report,
    format_search_results,
};
pub use io::{load_catalog, save_catalog};
pub use models::{is_perishable_category, Item, SellRequest, PERISHABLE_CATEGORIES};
