pub mod record;
pub mod state;
pub mod store;

pub use record::{Link, Project};
pub use state::{Filter, QueryState};
pub use store::{ProjectStore, StoreError};
