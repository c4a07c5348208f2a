use crate::models::Order;

/// Valor del `<select>` que significa "sin filtro de estado"
pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_STATUSES {
            StatusFilter::All
        } else {
            StatusFilter::Status(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Status(code) => code,
        }
    }

    /// Compara contra el código crudo del pedido, no contra la etiqueta traducida
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(code) => code == status,
        }
    }
}

/// Estado transitorio de filtros, vive solo mientras dura la sesión
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub search_query: String,
}

impl FilterState {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.matches(&order.status) && order.number_contains(&self.search_query)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_value_round_trip() {
        assert_eq!(StatusFilter::from_select_value("all"), StatusFilter::All);
        let delivery = StatusFilter::from_select_value("delivery");
        assert_eq!(delivery.as_select_value(), "delivery");
        assert!(delivery.matches("delivery"));
        assert!(!delivery.matches("Доставка"));
    }

    #[test]
    fn test_filter_combines_status_and_search() {
        let filter = FilterState {
            status: StatusFilter::Status("new".into()),
            search_query: "10".into(),
        };
        assert!(filter.matches(&Order::new("1001", "new", 0, 1)));
        assert!(!filter.matches(&Order::new("1001", "payoff", 0, 1)));
        assert!(!filter.matches(&Order::new("2002", "new", 0, 1)));
        assert!(FilterState::default().is_default());
    }
}
