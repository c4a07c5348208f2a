// ============================================================================
// TEXTOS DE LA UI
// ============================================================================
// El panel solo existe en ruso; las claves mantienen las vistas legibles
// ============================================================================

pub fn t(key: &str) -> &'static str {
    match key {
        // Login
        "login_title" => "Вход в админ-панель",
        "login_placeholder" => "Логин",
        "password_placeholder" => "Пароль",
        "login_submit" => "Войти",

        // Header
        "panel_title" => "Админ-панель заказов",
        "updated_at" => "Обновлено:",
        "refresh" => "Обновить",
        "loading" => "Загрузка...",
        "auto_refresh" => "Автообновление",
        "logout" => "Выйти",

        // Analítica
        "total_orders" => "Всего заказов",
        "approved_orders" => "Апрувы",
        "delivered_orders" => "Доставленные",
        "percent_approved" => "% Апрува",
        "percent_delivered" => "% Выкупа",
        "no_analytics" => "Нет данных аналитики",

        // Gráficos
        "pie_title" => "Соотношение апрувов",
        "pie_approved" => "Апрувы",
        "pie_other" => "Остальные заказы",
        "bar_title" => "Процентные показатели",

        // Filtros y tabla
        "status_label" => "Статус:",
        "all_statuses" => "Все статусы",
        "search_label" => "Поиск:",
        "search_placeholder" => "Номер заказа",
        "orders" => "Заказы",
        "col_number" => "Номер",
        "col_status" => "Статус",
        "col_qty_without_delivery" => "Товары без доставки",
        "col_total_qty" => "Всего товаров",
        "no_orders" => "Нет заказов",

        _ => {
            log::warn!("⚠️ [I18N] Clave sin traducción: {}", key);
            ""
        }
    }
}
