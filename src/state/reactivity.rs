// ============================================================================
// REACTIVITY - Notificaciones de cambio hacia la capa de presentación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo una sección)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout)
    FullRender,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Hora de actualización, botón de refresh (loading), auto-refresh
    Header,
    /// Error, tarjetas de analítica, gráficos, opciones de estado y tabla
    DataSections,
    /// Solo la tabla de pedidos (cambio de filtro o búsqueda)
    OrdersTable,
}

type Subscriber = Rc<dyn Fn(UpdateType)>;

/// Lista de subscribers compartida entre clones
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify(&self, update: UpdateType) {
        // Copia de la lista: un subscriber puede suscribir a otro mientras notificamos
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback(update);
        }
    }

    pub fn notify_incremental(&self, update: IncrementalUpdate) {
        self.notify(UpdateType::Incremental(update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            notifier.subscribe(move |update| seen.borrow_mut().push(update));
        }

        notifier.clone().notify_incremental(IncrementalUpdate::OrdersTable);
        notifier.notify(UpdateType::FullRender);

        assert_eq!(
            *seen.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::OrdersTable), UpdateType::FullRender]
        );
    }
}
