use crate::model::Item;
use serde::{Deserialize, Serialize};

/// One row of the in-progress order: a catalog item plus its selected quantity.
///
/// The line stores a denormalized copy of the item's fields taken at insertion
/// time, not a reference into the catalog. `quantity` is always at least 1; a
/// line whose quantity would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Creates a fresh line for `item` with quantity 1, copying its fields.
    pub fn first_of(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }

    /// The line's contribution to the order total.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Derived aggregate view of the cart, recomputed from the lines on every
/// read. Never stored or mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub items: u32,
    /// Sum of price x quantity over all lines.
    pub price: f64,
}

impl CartTotals {
    /// Computes totals from an ordered slice of lines.
    pub fn of(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(|line| line.quantity).sum(),
            price: lines.iter().map(CartLine::subtotal).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, price: f64, quantity: u32) -> CartLine {
        CartLine {
            id,
            name: format!("item_{}", id),
            price,
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn totals_of_empty_slice_are_zero() {
        let totals = CartTotals::of(&[]);
        assert_eq!(totals.items, 0);
        assert_eq!(totals.price, 0.0);
    }

    #[test]
    fn totals_sum_quantities_and_subtotals() {
        let lines = vec![line(1, 30.0, 2), line(2, 25.0, 1)];
        let totals = CartTotals::of(&lines);
        assert_eq!(totals.items, 3);
        assert_eq!(totals.price, 85.0);
    }
}
