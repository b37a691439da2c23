pub mod fetch;
pub mod loader;
pub mod model;
pub mod query;
pub mod query_cache;

pub use fetch::{DataSource, HttpSource};
pub use loader::{DashboardLoader, LoadMessage, FETCH_FAILURE_MESSAGE};
pub use model::{AnomalyRecord, Dashboard, RowKey, Summary, SummaryTopUser};
pub use query::{SortKey, QueryState};
pub use query_cache::QueryCache;
