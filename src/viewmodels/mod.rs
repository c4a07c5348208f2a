// ============================================================================
// VIEWMODELS - Lógica de negocio entre servicios y vistas
// ============================================================================

pub mod refresh_viewmodel;
pub mod session_viewmodel;
pub mod projector;
pub mod controller;

pub use refresh_viewmodel::{RefreshSettings, RefreshViewModel};
pub use session_viewmodel::SessionViewModel;
pub use projector::{AnalyticsCard, BarChartData, BarValue, PieChartData, StatusOption, ViewProjector};
pub use controller::DashboardController;
