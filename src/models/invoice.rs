pub mod queries;
pub mod schema;
pub mod store;
pub mod types;

pub use queries::{find_by_id, find_summaries};
pub use store::InvoiceStore;
pub use types::*;
