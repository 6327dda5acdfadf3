//! Series store: annual debt records and their loaders

mod data;
pub mod loader;

pub use data::{DebtRecord, Series, POPULATION};
pub use loader::static_baseline;
