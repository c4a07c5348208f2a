// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod order_store;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use order_store::*;
pub use app_state::*;
