// ============================================================================
// ERRORES - Errores tipados del pipeline login/refresh
// ============================================================================
// Los mensajes (Display) son los que ve el operador en la UI
// ============================================================================

use thiserror::Error;

/// Familia de error tal como la distingue la UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Transport,
    MalformedResponse,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Неверный логин или пароль")]
    Auth,

    #[error("Ошибка соединения: {0}")]
    Transport(String),

    #[error("Превышено время ожидания ответа сервера ({after_ms} мс)")]
    Timeout { after_ms: u32 },

    #[error("Ошибка сервера {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Неполные данные от сервера: {0}")]
    MalformedResponse(String),
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Auth => ErrorKind::Auth,
            DashboardError::Transport(_)
            | DashboardError::Timeout { .. }
            | DashboardError::Server { .. } => ErrorKind::Transport,
            DashboardError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DashboardError::Timeout { .. })
    }
}
