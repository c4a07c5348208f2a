// ============================================================================
// ORDER STORE - Último snapshot bueno + último error de refresh
// ============================================================================
// Todo vive en un único RefCell: un lector nunca ve pedidos de un fetch con
// analítica de otro.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::models::{Analytics, Order, Snapshot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreData {
    pub orders: Vec<Order>,
    pub analytics: Option<Analytics>,
    pub fetched_at: Option<NaiveDateTime>,
    pub error: Option<String>,
}

#[derive(Clone, Default)]
pub struct OrderStore {
    data: Rc<RefCell<StoreData>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza pedidos + analítica juntos y limpia el error
    pub fn replace(&self, snapshot: Snapshot) {
        let inconsistent = snapshot.orders.iter().filter(|o| !o.is_consistent()).count();
        if inconsistent > 0 {
            log::warn!("⚠️ [STORE] {} pedidos con qty_without_delivery > total_qty", inconsistent);
        }
        if !snapshot.analytics.is_consistent() {
            log::warn!("⚠️ [STORE] Analítica fuera de rango: {:?}", snapshot.analytics);
        }

        *self.data.borrow_mut() = StoreData {
            orders: snapshot.orders,
            analytics: Some(snapshot.analytics),
            fetched_at: Some(snapshot.fetched_at),
            error: None,
        };
    }

    /// Refresh fallido: se conserva la lista de pedidos, la analítica se descarta
    pub fn record_failure(&self, message: String) {
        let mut data = self.data.borrow_mut();
        data.analytics = None;
        data.error = Some(message);
    }

    pub fn clear(&self) {
        *self.data.borrow_mut() = StoreData::default();
    }

    /// Copia coherente de todo el estado
    pub fn read(&self) -> StoreData {
        self.data.borrow().clone()
    }

    /// Acceso sin copiar (no llamar a `replace`/`clear` desde dentro)
    pub fn with<R>(&self, f: impl FnOnce(&StoreData) -> R) -> R {
        f(&self.data.borrow())
    }

    pub fn orders(&self) -> Vec<Order> {
        self.data.borrow().orders.clone()
    }

    pub fn analytics(&self) -> Option<Analytics> {
        self.data.borrow().analytics.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.data.borrow().error.clone()
    }

    pub fn fetched_at(&self) -> Option<NaiveDateTime> {
        self.data.borrow().fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(numbers: &[&str], approved: i64) -> Snapshot {
        Snapshot {
            orders: numbers.iter().map(|n| Order::new(*n, "payoff", 0, 1)).collect(),
            analytics: Analytics {
                total_orders: numbers.len() as i64,
                approved_orders: approved,
                delivered_orders: 0,
                percent_approved: 100.0,
                percent_delivered: 0.0,
            },
            fetched_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let store = OrderStore::new();
        store.replace(snapshot(&["1", "2"], 2));
        store.record_failure("boom".into());
        store.replace(snapshot(&["3"], 1));

        let data = store.read();
        assert_eq!(data.orders, vec![Order::new("3", "payoff", 0, 1)]);
        assert_eq!(data.analytics.unwrap().approved_orders, 1);
        assert_eq!(data.error, None);
    }

    #[test]
    fn test_failure_keeps_orders_drops_analytics() {
        let store = OrderStore::new();
        store.replace(snapshot(&["1001"], 1));
        let fetched_at = store.fetched_at();

        store.record_failure("timeout".into());

        assert_eq!(store.orders().len(), 1);
        assert!(store.analytics().is_none());
        assert_eq!(store.error().as_deref(), Some("timeout"));
        assert_eq!(store.fetched_at(), fetched_at);
    }

    #[test]
    fn test_clear() {
        let store = OrderStore::new();
        store.replace(snapshot(&["1001"], 1));
        store.clear();
        assert_eq!(store.read(), StoreData::default());
    }
}
