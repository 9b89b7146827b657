pub mod inventory;
pub mod order_book;

pub use inventory::{Inventory, Product};
pub use order_book::{Order, OrderBook};
