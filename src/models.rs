/// Categories whose items carry an expiration date. Matching is exact and
/// lowercase, as in the legacy catalog files.
pub const PERISHABLE_CATEGORIES: &[&str] = &["dairy", "bakery"];

/// Returns true if items in this category carry an expiration date.
pub fn is_perishable_category(category: &str) -> bool {
    PERISHABLE_CATEGORIES.contains(&category)
}

/// One inventory record. The perishable/plain split is carried by the
/// category rule and the optional expiration date rather than by separate
/// types; the variant is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    /// Free-text date, present only on perishable items. Not validated.
    pub expiration_date: Option<String>,
}

impl Item {
    /// Builds an item, deciding the variant from the category: "dairy" and
    /// "bakery" items keep the supplied expiration date, any other category
    /// drops it.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i32,
        expiration_date: Option<String>,
    ) -> Self {
        let category = category.into();
        let expiration_date = if is_perishable_category(&category) {
            expiration_date
        } else {
            None
        };
        Item {
            name: name.into(),
            category,
            price,
            quantity,
            expiration_date,
        }
    }

    /// A plain item with no expiration date, regardless of category.
    pub fn plain(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Item {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            expiration_date: None,
        }
    }

    /// A perishable item carrying the given expiration date.
    pub fn perishable(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i32,
        expiration_date: impl Into<String>,
    ) -> Self {
        Item {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            expiration_date: Some(expiration_date.into()),
        }
    }

    /// Returns true if this item belongs to a perishable category.
    pub fn is_perishable(&self) -> bool {
        is_perishable_category(&self.category)
    }

    /// Ordered labeled fields, the record view used by search results and
    /// category listings.
    pub fn render_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Category", self.category.clone()),
            ("Price", self.price.to_string()),
            ("Quantity", self.quantity.to_string()),
        ];
        if let Some(date) = &self.expiration_date {
            fields.push(("Expiration Date", date.clone()));
        }
        fields
    }
}

/// One line of a sell batch: how many units of which item.
#[derive(Debug, Clone, PartialEq)]
pub struct SellRequest {
    pub name: String,
    pub quantity: i32,
}

impl SellRequest {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        SellRequest {
            name: name.into(),
            quantity,
        }
    }
}
