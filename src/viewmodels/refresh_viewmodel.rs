// ============================================================================
// REFRESH VIEWMODEL - Auto-refresh de pedidos + analítica
// ============================================================================
// - Un único timer por sesión: start() cancela el anterior antes de crear otro
// - Cada fetch lleva un número de secuencia; un resultado más viejo que el
//   último aplicado se descarta
// - Cada logout abre una nueva "época"; lo que vuelva de la época anterior
//   no toca el store
// ============================================================================

use std::cell::{Cell, RefCell};
use std::pin::pin;
use std::rc::Rc;

use futures::future::{select, Either, FutureExt, LocalBoxFuture};

use crate::config::AppConfig;
use crate::error::DashboardError;
use crate::models::Snapshot;
use crate::services::{EventLoop, OrdersApi};
use crate::state::{ChangeNotifier, IncrementalUpdate, OrderStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    pub interval_ms: u32,
    pub timeout_ms: u32,
}

impl RefreshSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            interval_ms: config.refresh_interval_ms,
            timeout_ms: config.fetch_timeout_ms,
        }
    }
}

#[derive(Default)]
struct FetchCounters {
    issued: Cell<u64>,
    applied: Cell<u64>,
    epoch: Cell<u64>,
    in_flight: Cell<usize>,
}

impl FetchCounters {
    fn begin(&self) -> (u64, u64) {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        self.in_flight.set(self.in_flight.get() + 1);
        (seq, self.epoch.get())
    }

    fn finish(&self) {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
    }
}

/// Lo que necesita una tarea de fetch. No guarda el timer: el callback del
/// intervalo captura un Fetcher y así no hay ciclo timer -> callback -> timer.
struct Fetcher<A, E> {
    api: Rc<A>,
    event_loop: E,
    store: OrderStore,
    notifier: ChangeNotifier,
    counters: Rc<FetchCounters>,
    timeout_ms: u32,
}

impl<A, E: Clone> Clone for Fetcher<A, E> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            event_loop: self.event_loop.clone(),
            store: self.store.clone(),
            notifier: self.notifier.clone(),
            counters: self.counters.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

impl<A: OrdersApi, E: EventLoop> Fetcher<A, E> {
    fn spawn(&self, token: String) {
        let task = self.clone().run(token).map(|_| ()).boxed_local();
        self.event_loop.spawn(task);
    }

    /// La secuencia se asigna al iniciar, no al primer poll
    fn run(self, token: String) -> LocalBoxFuture<'static, Result<Snapshot, DashboardError>> {
        let (seq, epoch) = self.counters.begin();
        log::debug!("🔄 [REFRESH] Fetch #{} iniciado", seq);
        self.notifier.notify_incremental(IncrementalUpdate::Header);

        async move {
            let outcome = self.fetch_with_timeout(&token).await;
            self.apply(seq, epoch, outcome)
        }
        .boxed_local()
    }

    fn apply(
        &self,
        seq: u64,
        epoch: u64,
        outcome: Result<Snapshot, DashboardError>,
    ) -> Result<Snapshot, DashboardError> {
        if epoch != self.counters.epoch.get() {
            // invalidate() ya reinició in_flight para la nueva época
            log::info!("🗑️ [REFRESH] Fetch #{} descartado: la sesión terminó", seq);
            return outcome;
        }
        self.counters.finish();

        let applied = self.counters.applied.get();
        if seq <= applied {
            log::info!("⏭️ [REFRESH] Fetch #{} descartado: ya se aplicó #{}", seq, applied);
            self.notifier.notify_incremental(IncrementalUpdate::Header);
            return outcome;
        }
        self.counters.applied.set(seq);

        match &outcome {
            Ok(snapshot) => {
                log::info!(
                    "✅ [REFRESH] Fetch #{}: {} pedidos, {} aprobados",
                    seq,
                    snapshot.orders.len(),
                    snapshot.analytics.approved_orders
                );
                self.store.replace(snapshot.clone());
            }
            Err(e) => {
                log::error!("❌ [REFRESH] Fetch #{} falló: {}", seq, e);
                self.store.record_failure(e.to_string());
            }
        }
        self.notifier.notify_incremental(IncrementalUpdate::DataSections);

        outcome
    }

    async fn fetch_with_timeout(&self, token: &str) -> Result<Snapshot, DashboardError> {
        let request = pin!(self.api.fetch_orders(token));
        let timeout = self.event_loop.sleep(self.timeout_ms);

        match select(request, timeout).await {
            Either::Left((result, _)) => result?.into_snapshot(chrono::Local::now().naive_local()),
            Either::Right(_) => Err(DashboardError::Timeout {
                after_ms: self.timeout_ms,
            }),
        }
    }
}

/// RefreshScheduler: mantiene el OrderStore al día mientras hay sesión
pub struct RefreshViewModel<A: OrdersApi, E: EventLoop> {
    fetcher: Fetcher<A, E>,
    interval_ms: u32,
    timer: Rc<RefCell<Option<E::Interval>>>,
}

impl<A: OrdersApi, E: EventLoop> Clone for RefreshViewModel<A, E> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            interval_ms: self.interval_ms,
            timer: self.timer.clone(),
        }
    }
}

impl<A: OrdersApi, E: EventLoop> RefreshViewModel<A, E> {
    pub fn new(
        api: Rc<A>,
        event_loop: E,
        store: OrderStore,
        notifier: ChangeNotifier,
        settings: RefreshSettings,
    ) -> Self {
        Self {
            fetcher: Fetcher {
                api,
                event_loop,
                store,
                notifier,
                counters: Rc::new(FetchCounters::default()),
                timeout_ms: settings.timeout_ms,
            },
            interval_ms: settings.interval_ms,
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Primer fetch inmediato y luego uno por tick
    pub fn start(&self, token: String) {
        if self.stop() {
            log::info!("🔁 [REFRESH] Timer anterior cancelado antes de reiniciar");
        }
        log::info!("⏰ [REFRESH] Auto-refresh cada {} s", self.interval_ms / 1000);

        self.fetcher.spawn(token.clone());

        let fetcher = self.fetcher.clone();
        let interval = self.fetcher.event_loop.interval(
            self.interval_ms,
            Box::new(move || fetcher.spawn(token.clone())),
        );
        *self.timer.borrow_mut() = Some(interval);
    }

    /// Cancela el timer; devuelve si había uno activo
    pub fn stop(&self) -> bool {
        let previous = self.timer.borrow_mut().take();
        let was_running = previous.is_some();
        drop(previous);
        if was_running {
            log::info!("⏹️ [REFRESH] Auto-refresh detenido");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }

    /// Un fetch acotado por el timeout. El store solo cambia si el resultado
    /// sigue siendo el más reciente de la sesión actual.
    pub fn fetch_once(&self, token: String) -> LocalBoxFuture<'static, Result<Snapshot, DashboardError>> {
        self.fetcher.clone().run(token)
    }

    /// Refresh manual ("Обновить"), en segundo plano
    pub fn refresh_now(&self, token: String) {
        self.fetcher.spawn(token);
    }

    /// Fin de sesión: lo que esté en vuelo se descartará al llegar
    pub fn invalidate(&self) {
        let counters = &self.fetcher.counters;
        counters.epoch.set(counters.epoch.get() + 1);
        counters.in_flight.set(0);
    }

    pub fn is_loading(&self) -> bool {
        self.fetcher.counters.in_flight.get() > 0
    }
}
