// ============================================================================
// STATUS - Normalización de estados (códigos crudos y etiquetas ya traducidas)
// ============================================================================
// Una sola tabla canónica código -> etiqueta. Las etiquetas se reconocen
// buscándolas en la columna derecha, así que no se duplican entradas.
// ============================================================================

/// (código crudo del backend, etiqueta canónica, color del badge)
const STATUS_TABLE: &[(&str, &str, &str)] = &[
    ("payoff", "Подтвержден", "#4CAF50"),
    ("complectation", "Комплектация", "#2196F3"),
    ("delivery", "Доставка", "#FF9800"),
    ("completed", "Выполнен", "#9C27B0"),
    ("return", "Возврат", "#E91E63"),
    ("new", "Новый", "#607D8B"),
    ("cancel-other", "Отменен", "#F44336"),
    ("duplicate", "Дубликат", "#795548"),
    ("no-call", "Нет связи", "#9E9E9E"),
    ("trash", "Удален", "#333"),
    ("otmena-net-tovara", "Нет товара", "#FF5722"),
];

fn lookup(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    STATUS_TABLE
        .iter()
        .find(|(raw, label, _)| *raw == code || *label == code)
}

/// Etiqueta canónica de un estado. Idempotente; los códigos desconocidos
/// se devuelven tal cual para que un estado nuevo del backend se vea crudo.
pub fn translate(code: &str) -> &str {
    match lookup(code) {
        Some((_, label, _)) => *label,
        None => code,
    }
}

/// ¿Es un código crudo o una etiqueta conocida?
pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

/// Color del badge para cualquiera de las dos formas del estado
pub fn status_color(code: &str) -> Option<&'static str> {
    lookup(code).map(|(_, _, color)| *color)
}

/// Todos los códigos y etiquetas conocidos
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    STATUS_TABLE
        .iter()
        .flat_map(|(raw, label, _)| [*raw, *label])
}
