pub mod order;
pub mod analytics;
pub mod snapshot;
pub mod auth;
pub mod filter;

pub use order::{Order, OrderNumber};
pub use analytics::Analytics;
pub use snapshot::{OrdersResponse, Snapshot};
pub use auth::{LoginRequest, LoginResponse};
pub use filter::{FilterState, StatusFilter, ALL_STATUSES};
