pub mod account;
pub mod config;
pub mod inventory;
pub mod snapshot;
pub mod stats;

pub use account::*;
pub use config::*;
pub use inventory::*;
pub use snapshot::*;
pub use stats::*;
