use chrono::NaiveDateTime;

/// Fecha de la última actualización, formato ruso (`dd.mm.yyyy, HH:MM:SS`)
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%d.%m.%Y, %H:%M:%S").to_string()
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}
