pub mod app;
pub mod login;
pub mod dashboard;
pub mod charts;
pub mod orders_table;

pub use app::render_app;
pub use login::render_login;
pub use dashboard::render_dashboard;
