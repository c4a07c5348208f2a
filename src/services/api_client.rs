// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: no toca estado ni aplica timeouts.
// El timeout de 10s lo pone RefreshViewModel alrededor de fetch_orders.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::DashboardError;
use crate::models::{LoginRequest, LoginResponse, OrdersResponse};

/// Contrato con el servicio remoto de pedidos
#[allow(async_fn_in_trait)]
pub trait OrdersApi: 'static {
    /// `POST /login` -> token opaco
    async fn login(&self, login: &str, password: &str) -> Result<String, DashboardError>;

    /// `GET /orders` con `Authorization: Bearer <token>`
    async fn fetch_orders(&self, token: &str) -> Result<OrdersResponse, DashboardError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OrdersApi for ApiClient {
    async fn login(&self, login: &str, password: &str) -> Result<String, DashboardError> {
        let url = self.url("/login");
        let request = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Login para usuario: {}", login);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| DashboardError::Transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        classify_login(status, &body)
    }

    async fn fetch_orders(&self, token: &str) -> Result<OrdersResponse, DashboardError> {
        let url = self.url("/orders");
        let started = js_sys::Date::now();

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        log::debug!(
            "📦 [API] GET /orders -> HTTP {} en {:.0} ms",
            status,
            js_sys::Date::now() - started
        );

        classify_orders(status, &status_text, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Respuesta de `POST /login` -> token o `Auth`.
/// El servicio contesta 401 + `{"success": false}` con credenciales malas.
pub fn classify_login(status: u16, body: &str) -> Result<String, DashboardError> {
    if !is_success(status) {
        log::warn!("⚠️ [API] Login rechazado: HTTP {}", status);
        return Err(DashboardError::Auth);
    }

    let response: LoginResponse = serde_json::from_str(body).map_err(|e| {
        log::warn!("⚠️ [API] Body de login ilegible: {}", e);
        DashboardError::Auth
    })?;

    response.into_token().ok_or(DashboardError::Auth)
}

/// Respuesta de `GET /orders` -> body decodificado, `Server` o `MalformedResponse`.
/// Los campos ausentes se validan después en `OrdersResponse::into_snapshot`.
pub fn classify_orders(status: u16, status_text: &str, body: &str) -> Result<OrdersResponse, DashboardError> {
    if !is_success(status) {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(message) }) => message,
            _ => status_text.to_string(),
        };
        return Err(DashboardError::Server { status, message });
    }

    serde_json::from_str(body).map_err(|e| DashboardError::MalformedResponse(e.to_string()))
}
