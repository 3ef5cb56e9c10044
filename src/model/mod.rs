//! Pure data structures (DTOs) shared by the catalog, cart, and checkout.

pub mod cart;
pub mod item;

pub use cart::*;
pub use item::*;
