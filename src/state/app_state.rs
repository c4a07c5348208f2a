// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::FilterState;
use crate::state::{ChangeNotifier, OrderStore, SessionState};

/// Estado compartido (clones baratos, todos apuntan a lo mismo)
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub store: OrderStore,
    pub filter: Rc<RefCell<FilterState>>,

    // UI State
    pub auto_refresh: Rc<RefCell<bool>>,
    /// Mensaje de la pantalla de login (credenciales / conexión)
    pub login_error: Rc<RefCell<Option<String>>>,

    pub notifier: ChangeNotifier,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            store: OrderStore::new(),
            filter: Rc::new(RefCell::new(FilterState::default())),
            auto_refresh: Rc::new(RefCell::new(true)),
            login_error: Rc::new(RefCell::new(None)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        *self.auto_refresh.borrow()
    }

    pub fn get_login_error(&self) -> Option<String> {
        self.login_error.borrow().clone()
    }

    pub fn set_login_error(&self, message: Option<String>) {
        *self.login_error.borrow_mut() = message;
    }

    pub fn filter(&self) -> FilterState {
        self.filter.borrow().clone()
    }

    pub fn reset_filter(&self) {
        *self.filter.borrow_mut() = FilterState::default();
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(crate::state::UpdateType) + 'static,
    {
        self.notifier.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
