// ============================================================================
// TEST SUPPORT - Event loop manual y API falsa para los tests del pipeline
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use crate::error::DashboardError;
use crate::models::{Analytics, Order, OrdersResponse};
use crate::services::{EventLoop, OrdersApi};

struct IntervalSlot {
    alive: Weak<()>,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

/// Handle de timer del loop manual; soltarlo cancela el timer
pub struct ManualInterval {
    _alive: Rc<()>,
}

/// Event loop de un solo hilo donde los ticks y timeouts se disparan a mano
#[derive(Clone)]
pub struct ManualEventLoop {
    pool: Rc<RefCell<LocalPool>>,
    spawner: LocalSpawner,
    intervals: Rc<RefCell<Vec<IntervalSlot>>>,
    sleeps: Rc<RefCell<Vec<oneshot::Sender<()>>>>,
}

impl ManualEventLoop {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            pool: Rc::new(RefCell::new(pool)),
            spawner,
            intervals: Rc::new(RefCell::new(Vec::new())),
            sleeps: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        let output = self.pool.borrow_mut().run_until(future);
        self.run_until_stalled();
        output
    }

    pub fn active_intervals(&self) -> usize {
        let mut intervals = self.intervals.borrow_mut();
        intervals.retain(|slot| slot.alive.upgrade().is_some());
        intervals.len()
    }

    /// Dispara una vez todos los timers vivos y deja correr las tareas
    pub fn tick(&self) {
        let callbacks: Vec<_> = {
            let mut intervals = self.intervals.borrow_mut();
            intervals.retain(|slot| slot.alive.upgrade().is_some());
            intervals.iter().map(|slot| slot.callback.clone()).collect()
        };
        for callback in callbacks {
            (callback.borrow_mut())();
        }
        self.run_until_stalled();
    }

    /// Vence todos los `sleep` pendientes (simula el paso del timeout)
    pub fn elapse_timeouts(&self) {
        let senders: Vec<_> = self.sleeps.borrow_mut().drain(..).collect();
        for sender in senders {
            let _ = sender.send(());
        }
        self.run_until_stalled();
    }
}

impl EventLoop for ManualEventLoop {
    type Interval = ManualInterval;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("el pool de test sigue vivo");
    }

    fn interval(&self, _period_ms: u32, callback: Box<dyn FnMut()>) -> ManualInterval {
        let alive = Rc::new(());
        self.intervals.borrow_mut().push(IntervalSlot {
            alive: Rc::downgrade(&alive),
            callback: Rc::new(RefCell::new(callback)),
        });
        ManualInterval { _alive: alive }
    }

    fn sleep(&self, _duration_ms: u32) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.sleeps.borrow_mut().push(tx);
        async move {
            let _ = rx.await;
        }
        .boxed_local()
    }
}

type FetchResult = Result<OrdersResponse, DashboardError>;

enum Reply {
    Ready(FetchResult),
    Deferred(oneshot::Receiver<FetchResult>),
    Hang,
}

/// API con respuestas guionizadas; sin guion, el fetch queda colgado
pub struct FakeOrdersApi {
    login_reply: RefCell<Result<String, DashboardError>>,
    replies: RefCell<VecDeque<Reply>>,
    fetch_calls: Cell<usize>,
    tokens_seen: RefCell<Vec<String>>,
}

impl FakeOrdersApi {
    pub fn new() -> Self {
        Self::with_login(Ok("abc".to_string()))
    }

    pub fn with_login(reply: Result<String, DashboardError>) -> Self {
        Self {
            login_reply: RefCell::new(reply),
            replies: RefCell::new(VecDeque::new()),
            fetch_calls: Cell::new(0),
            tokens_seen: RefCell::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, body: OrdersResponse) {
        self.replies.borrow_mut().push_back(Reply::Ready(Ok(body)));
    }

    pub fn push_err(&self, error: DashboardError) {
        self.replies.borrow_mut().push_back(Reply::Ready(Err(error)));
    }

    pub fn push_hang(&self) {
        self.replies.borrow_mut().push_back(Reply::Hang);
    }

    /// Respuesta que el test entrega cuando quiere
    pub fn push_deferred(&self) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.borrow().clone()
    }
}

impl OrdersApi for FakeOrdersApi {
    async fn login(&self, _login: &str, _password: &str) -> Result<String, DashboardError> {
        self.login_reply.borrow().clone()
    }

    async fn fetch_orders(&self, token: &str) -> Result<OrdersResponse, DashboardError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.tokens_seen.borrow_mut().push(token.to_string());

        let reply = self.replies.borrow_mut().pop_front().unwrap_or(Reply::Hang);
        match reply {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DashboardError::Transport("respuesta cancelada".into()))),
            Reply::Hang => futures::future::pending().await,
        }
    }
}

pub fn analytics(total: i64, approved: i64, delivered: i64, pa: f64, pd: f64) -> Analytics {
    Analytics {
        total_orders: total,
        approved_orders: approved,
        delivered_orders: delivered,
        percent_approved: pa,
        percent_delivered: pd,
    }
}

pub fn body(orders: Vec<Order>, analytics: Analytics) -> OrdersResponse {
    OrdersResponse {
        orders: Some(orders),
        analytics: Some(analytics),
        timestamp: Some("2025-03-04T10:20:30".to_string()),
        error: None,
    }
}

/// Respuesta del escenario de ejemplo: un pedido 1001 en `payoff`
pub fn sample_body() -> OrdersResponse {
    body(
        vec![Order::new("1001", "payoff", 0, 2)],
        analytics(1, 1, 0, 100.0, 0.0),
    )
}
