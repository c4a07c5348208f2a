// ============================================================================
// DASHBOARD CONTROLLER - Punto de entrada de la UI hacia los viewmodels
// ============================================================================
// Las vistas solo hablan con el controller; el controller muta AppState y
// notifica qué sección del DOM hay que refrescar.
// ============================================================================

use std::rc::Rc;

use crate::error::DashboardError;
use crate::models::StatusFilter;
use crate::services::{EventLoop, OrdersApi};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::viewmodels::{RefreshSettings, RefreshViewModel, SessionViewModel, ViewProjector};

pub struct DashboardController<A: OrdersApi, E: EventLoop> {
    state: AppState,
    session: SessionViewModel<A, E>,
    refresh: RefreshViewModel<A, E>,
}

impl<A: OrdersApi, E: EventLoop> Clone for DashboardController<A, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            session: self.session.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<A: OrdersApi, E: EventLoop> DashboardController<A, E> {
    pub fn new(api: A, event_loop: E, settings: RefreshSettings) -> Self {
        Self::with_state(AppState::new(), api, event_loop, settings)
    }

    pub fn with_state(state: AppState, api: A, event_loop: E, settings: RefreshSettings) -> Self {
        let api = Rc::new(api);
        let refresh = RefreshViewModel::new(
            api.clone(),
            event_loop,
            state.store.clone(),
            state.notifier.clone(),
            settings,
        );
        let session = SessionViewModel::new(api, state.session.clone(), state.store.clone(), refresh.clone());
        Self {
            state,
            session,
            refresh,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ========================================================================
    // SESIÓN
    // ========================================================================

    /// Login y primer fetch. El error queda en la pantalla de login.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), DashboardError> {
        let outcome = match self.session.login(username, password).await {
            Ok(token) => {
                self.state.set_login_error(None);
                self.state.reset_filter();
                if self.state.auto_refresh_enabled() {
                    self.refresh.start(token);
                } else {
                    self.refresh.refresh_now(token);
                }
                Ok(())
            }
            Err(e) => {
                self.state.set_login_error(Some(e.to_string()));
                Err(e)
            }
        };
        self.state.notifier.notify(UpdateType::FullRender);
        outcome
    }

    pub fn logout(&self) {
        self.session.logout();
        self.state.reset_filter();
        self.state.set_login_error(None);
        self.state.notifier.notify(UpdateType::FullRender);
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn current_token(&self) -> Option<String> {
        self.session.current_token()
    }

    // ========================================================================
    // REFRESH
    // ========================================================================

    pub fn refresh_now(&self) {
        match self.session.current_token() {
            Some(token) => self.refresh.refresh_now(token),
            None => log::warn!("⚠️ [APP] Refresh pedido sin sesión activa"),
        }
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        *self.state.auto_refresh.borrow_mut() = enabled;

        if let Some(token) = self.session.current_token() {
            if !enabled {
                self.refresh.stop();
            } else if !self.refresh.is_running() {
                self.refresh.start(token);
            }
        }
        self.state.notifier.notify_incremental(IncrementalUpdate::Header);
    }

    pub fn is_loading(&self) -> bool {
        self.refresh.is_loading()
    }

    pub fn is_auto_refresh_running(&self) -> bool {
        self.refresh.is_running()
    }

    // ========================================================================
    // FILTROS
    // ========================================================================

    pub fn set_status_filter(&self, select_value: &str) {
        self.state.filter.borrow_mut().status = StatusFilter::from_select_value(select_value);
        self.state.notifier.notify_incremental(IncrementalUpdate::OrdersTable);
    }

    pub fn set_search_query(&self, query: &str) {
        self.state.filter.borrow_mut().search_query = query.to_string();
        self.state.notifier.notify_incremental(IncrementalUpdate::OrdersTable);
    }

    /// Proyección sobre el snapshot y los filtros actuales
    pub fn with_projector<R>(&self, f: impl FnOnce(&ViewProjector) -> R) -> R {
        let filter = self.state.filter.borrow();
        self.state.store.with(|data| f(&ViewProjector::new(data, &filter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::models::Order;
    use crate::test_support::{analytics, body, sample_body, FakeOrdersApi, ManualEventLoop};
    use crate::viewmodels::PieChartData;

    const SETTINGS: RefreshSettings = RefreshSettings {
        interval_ms: 60_000,
        timeout_ms: 10_000,
    };

    fn controller(api: FakeOrdersApi) -> (ManualEventLoop, DashboardController<FakeOrdersApi, ManualEventLoop>) {
        let event_loop = ManualEventLoop::new();
        let controller = DashboardController::new(api, event_loop.clone(), SETTINGS);
        (event_loop, controller)
    }

    fn order_numbers(controller: &DashboardController<FakeOrdersApi, ManualEventLoop>) -> Vec<String> {
        controller.with_projector(|p| p.filtered_orders().iter().map(|o| o.number.to_string()).collect())
    }

    #[test]
    fn test_login_then_first_fetch_scenario() {
        let api = FakeOrdersApi::new();
        api.push_ok(sample_body());
        let (event_loop, controller) = controller(api);

        event_loop.block_on(controller.login("admin", "secret")).unwrap();

        assert_eq!(controller.current_token().as_deref(), Some("abc"));
        assert_eq!(order_numbers(&controller), vec!["1001"]);
        controller.with_projector(|p| {
            assert_eq!(p.distinct_statuses(), vec!["payoff"]);
            assert_eq!(p.status_options()[0].label, "Подтвержден");
            assert_eq!(p.pie_chart_data(), PieChartData { approved: 1, other: 0 });
        });
        assert!(controller.is_auto_refresh_running());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_second_fetch_times_out_scenario() {
        let api = FakeOrdersApi::new();
        api.push_ok(sample_body());
        api.push_hang();
        let (event_loop, controller) = controller(api);

        event_loop.block_on(controller.login("admin", "secret")).unwrap();
        event_loop.tick();
        assert!(controller.is_loading());

        event_loop.elapse_timeouts();

        assert_eq!(order_numbers(&controller), vec!["1001"]);
        controller.with_projector(|p| {
            assert!(!p.has_analytics());
            assert_eq!(p.pie_chart_data().total(), 0);
        });
        let error = controller.state().store.error().unwrap();
        assert!(!error.is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_successful_refresh_clears_previous_error() {
        let api = FakeOrdersApi::new();
        api.push_err(DashboardError::Transport("connection refused".into()));
        api.push_ok(sample_body());
        let (event_loop, controller) = controller(api);

        event_loop.block_on(controller.login("admin", "secret")).unwrap();
        assert!(controller.state().store.error().is_some());

        controller.refresh_now();
        event_loop.run_until_stalled();

        assert_eq!(controller.state().store.error(), None);
        assert!(controller.state().store.analytics().is_some());
    }

    #[test]
    fn test_failed_login_shows_message_and_keeps_state() {
        let (event_loop, controller) = controller(FakeOrdersApi::with_login(Err(DashboardError::Auth)));

        let result = event_loop.block_on(controller.login("admin", "wrong"));

        assert_eq!(result, Err(DashboardError::Auth));
        assert!(!controller.is_logged_in());
        assert_eq!(controller.state().get_login_error().as_deref(), Some("Неверный логин или пароль"));
        assert_eq!(controller.state().store.read(), crate::state::StoreData::default());
        assert_eq!(event_loop.active_intervals(), 0);
    }

    #[test]
    fn test_logout_resets_session_scope() {
        let api = FakeOrdersApi::new();
        api.push_ok(sample_body());
        let (event_loop, controller) = controller(api);
        event_loop.block_on(controller.login("admin", "secret")).unwrap();

        controller.set_status_filter("payoff");
        controller.logout();

        assert_eq!(controller.current_token(), None);
        assert!(controller.state().store.orders().is_empty());
        assert!(controller.state().store.analytics().is_none());
        assert_eq!(event_loop.active_intervals(), 0);
        assert!(controller.state().filter().is_default());
    }

    #[test]
    fn test_in_flight_result_after_logout_is_dropped() {
        let api = Rc::new(FakeOrdersApi::new());
        let in_flight = api.push_deferred();
        let event_loop = ManualEventLoop::new();
        let state = AppState::new();
        let refresh = RefreshViewModel::new(
            api.clone(),
            event_loop.clone(),
            state.store.clone(),
            state.notifier.clone(),
            SETTINGS,
        );
        let session = SessionViewModel::new(api.clone(), state.session.clone(), state.store.clone(), refresh.clone());

        let token = event_loop.block_on(session.login("admin", "secret")).unwrap();
        refresh.start(token);
        event_loop.run_until_stalled();
        assert!(refresh.is_loading());

        session.logout();
        let _ = in_flight.send(Ok(sample_body()));
        event_loop.run_until_stalled();

        assert!(state.store.orders().is_empty());
        assert!(state.store.analytics().is_none());
        assert_eq!(api.fetch_calls(), 1);
    }

    #[test]
    fn test_filters_reset_on_logout_and_apply_live() {
        let api = FakeOrdersApi::new();
        api.push_ok(body(
            vec![
                Order::new("1001", "payoff", 0, 2),
                Order::new("1002", "new", 0, 1),
                Order::new("2010", "new", 1, 1),
            ],
            analytics(3, 1, 0, 33.3, 0.0),
        ));
        let (event_loop, controller) = controller(api);
        event_loop.block_on(controller.login("admin", "secret")).unwrap();

        controller.set_status_filter("new");
        assert_eq!(order_numbers(&controller), vec!["1002", "2010"]);

        controller.set_search_query("20");
        assert_eq!(order_numbers(&controller), vec!["2010"]);

        controller.set_status_filter("all");
        controller.set_search_query("");
        assert_eq!(order_numbers(&controller), vec!["1001", "1002", "2010"]);
    }

    #[test]
    fn test_auto_refresh_toggle() {
        let api = FakeOrdersApi::new();
        for _ in 0..3 {
            api.push_ok(sample_body());
        }
        let (event_loop, controller) = controller(api);
        event_loop.block_on(controller.login("admin", "secret")).unwrap();
        assert_eq!(event_loop.active_intervals(), 1);

        controller.set_auto_refresh(false);
        assert_eq!(event_loop.active_intervals(), 0);
        assert!(!controller.state().auto_refresh_enabled());

        controller.set_auto_refresh(true);
        controller.set_auto_refresh(true);
        event_loop.run_until_stalled();
        assert_eq!(event_loop.active_intervals(), 1);
    }

    #[test]
    fn test_login_without_auto_refresh_fetches_once() {
        let api = FakeOrdersApi::new();
        api.push_ok(sample_body());
        let (event_loop, controller) = controller(api);
        *controller.state().auto_refresh.borrow_mut() = false;

        event_loop.block_on(controller.login("admin", "secret")).unwrap();

        assert_eq!(event_loop.active_intervals(), 0);
        assert_eq!(order_numbers(&controller), vec!["1001"]);
    }

    #[test]
    fn test_notifications_per_section() {
        let api = FakeOrdersApi::new();
        api.push_ok(sample_body());
        let (event_loop, controller) = controller(api);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            controller.state().subscribe_to_changes(move |update| seen.borrow_mut().push(update));
        }

        event_loop.block_on(controller.login("admin", "secret")).unwrap();
        controller.set_search_query("10");

        let seen = seen.borrow();
        assert!(seen.contains(&UpdateType::FullRender));
        assert!(seen.contains(&UpdateType::Incremental(IncrementalUpdate::DataSections)));
        assert_eq!(seen.last(), Some(&UpdateType::Incremental(IncrementalUpdate::OrdersTable)));
    }
}
