// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Login/logout y dueño del token. El token vive solo en memoria.
// ============================================================================

use std::rc::Rc;

use crate::error::DashboardError;
use crate::services::{EventLoop, OrdersApi};
use crate::state::{OrderStore, SessionState};
use crate::viewmodels::RefreshViewModel;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel<A: OrdersApi, E: EventLoop> {
    api: Rc<A>,
    session: SessionState,
    store: OrderStore,
    refresh: RefreshViewModel<A, E>,
}

impl<A: OrdersApi, E: EventLoop> Clone for SessionViewModel<A, E> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            store: self.store.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<A: OrdersApi, E: EventLoop> SessionViewModel<A, E> {
    pub fn new(api: Rc<A>, session: SessionState, store: OrderStore, refresh: RefreshViewModel<A, E>) -> Self {
        Self {
            api,
            session,
            store,
            refresh,
        }
    }

    /// Autentica y guarda el token. Si falla, la sesión queda como estaba.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, DashboardError> {
        log::info!("🔐 [SESSION] Iniciando login de {}", username);

        let token = match self.api.login(username, password).await {
            Ok(token) => token,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Login rechazado ({:?}): {}", e.kind(), e);
                return Err(e);
            }
        };

        // Re-login con sesión abierta: lo de la sesión anterior no debe llegar al store
        if self.session.is_logged_in() {
            log::info!("🔁 [SESSION] Reemplazando sesión anterior");
            self.end_session();
        }

        self.session.set_token(token.clone());
        log::info!("✅ [SESSION] Sesión iniciada");
        Ok(token)
    }

    /// Borra token, pedidos y analítica y detiene el timer. Idempotente.
    pub fn logout(&self) {
        if self.end_session() {
            log::info!("👋 [SESSION] Sesión cerrada");
        } else {
            log::debug!("[SESSION] Logout sin sesión activa");
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.session.get_token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    fn end_session(&self) -> bool {
        let previous = self.session.take_token();
        self.refresh.stop();
        self.refresh.invalidate();
        self.store.clear();
        previous.is_some()
    }
}
