//! Domain layer: the item model and its identifier.

pub mod item;

pub use item::{Item, ItemId, ItemPatch};
