use serde::{Deserialize, Serialize};

/// A catalog entry: one orderable food or beverage item.
///
/// Items are immutable and owned by the [`catalog`](crate::catalog); the cart
/// never holds a live reference to one. When an item is added to the cart its
/// fields are copied into a [`CartLine`](crate::model::CartLine), so later
/// catalog changes do not retroactively affect lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
}

impl Item {
    /// Creates a new catalog item.
    ///
    /// # Arguments
    /// * `id` - Unique identifier across the catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `image` - Image URI
    /// * `description` - Short menu description
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
        }
    }
}
