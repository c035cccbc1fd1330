pub mod inventory;
pub mod worker;

pub use inventory::Inventory;
pub use worker::{spawn_worker, IoCommand, IoResult};
