mod item;

pub use item::PantryItem;
