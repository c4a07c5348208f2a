use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Número de pedido: el servicio lo envía como string o como entero
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderNumber {
    Int(i64),
    Text(String),
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderNumber::Int(n) => write!(f, "{}", n),
            OrderNumber::Text(s) => f.write_str(s),
        }
    }
}

// `"number": null` se muestra como número vacío, no tumba el snapshot entero
impl Default for OrderNumber {
    fn default() -> Self {
        OrderNumber::Text(String::new())
    }
}

impl From<&str> for OrderNumber {
    fn from(value: &str) -> Self {
        OrderNumber::Text(value.to_string())
    }
}

impl From<i64> for OrderNumber {
    fn from(value: i64) -> Self {
        OrderNumber::Int(value)
    }
}

/// Pedido tal como llega en `GET /orders` (snake_case en el wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: OrderNumber,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_qty")]
    pub qty_without_delivery: u32,
    #[serde(default, deserialize_with = "lenient_qty")]
    pub total_qty: u32,
}

impl Order {
    pub fn new(number: impl Into<OrderNumber>, status: &str, qty_without_delivery: u32, total_qty: u32) -> Self {
        Self {
            number: number.into(),
            status: status.to_string(),
            qty_without_delivery,
            total_qty,
        }
    }

    /// `qty_without_delivery <= total_qty`
    pub fn is_consistent(&self) -> bool {
        self.qty_without_delivery <= self.total_qty
    }

    /// Búsqueda por subcadena sobre el número ya convertido a texto
    pub fn number_contains(&self, query: &str) -> bool {
        query.is_empty() || self.number.to_string().contains(query)
    }
}

// El backend puede mandar `"status": null` o `"number": null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Las cantidades son sumas de `quantity` de RetailCRM: llegan como `2.0`.
// null -> 0; negativas o con decimales se avisan y se truncan.
fn lenient_qty<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        log::warn!("⚠️ [STORE] Cantidad no entera en pedido: {}", raw);
    }
    // `as` satura: NaN y negativos -> 0
    Ok(raw.trunc() as u32)
}
