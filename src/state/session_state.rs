// ============================================================================
// SESSION STATE - Token de la sesión activa
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// `None` significa "sin sesión". Solo SessionViewModel escribe aquí.
#[derive(Clone, Default)]
pub struct SessionState {
    token: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: String) {
        *self.token.borrow_mut() = Some(token);
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Quita el token y devuelve el anterior
    pub fn take_token(&self) -> Option<String> {
        self.token.borrow_mut().take()
    }
}
