pub mod contact;
pub mod filter;
pub mod glow;
pub mod model;
pub mod reveal;
pub mod views;

pub use model::{Filter, Link, Project, ProjectStore, QueryState, StoreError};
