pub mod api_client;
pub mod event_loop;

pub use api_client::{ApiClient, OrdersApi};
pub use event_loop::{BrowserEventLoop, EventLoop};
