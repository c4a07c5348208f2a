// ============================================================================
// LOGIN VIEW - Formulario de acceso al panel
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppController;
use crate::dom::{on_input, on_submit, set_flag, set_text_content, ElementBuilder};
use crate::utils::t;

/// Renderizar vista de login
pub fn render_login(controller: &AppController) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    // Estado local del formulario (en closures)
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let username_input = create_input("login", "text", t("login_placeholder"), username.clone())?;
    let password_input = create_input("password", "password", t("password_placeholder"), password.clone())?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(t("login_submit"))
        .build();

    let error_box = ElementBuilder::new("div")?.class("error-message").build();
    if let Some(message) = controller.state().get_login_error() {
        set_text_content(&error_box, &message);
    }

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(username_input)?
        .child(password_input)?
        .child(error_box)?
        .child(submit_btn.clone())?
        .build();

    // Event listener para submit
    {
        let controller = controller.clone();
        on_submit(&form, move || {
            let username_val = username.borrow().trim().to_string();
            let password_val = password.borrow().clone();
            if username_val.is_empty() || password_val.is_empty() {
                return;
            }

            // Evita doble envío mientras la petición está en curso
            if let Err(e) = set_flag(&submit_btn, "disabled", true) {
                log::warn!("⚠️ [LOGIN] No se pudo deshabilitar el botón: {:?}", e);
            }

            let controller = controller.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                // El resultado ya queda en AppState; en éxito el re-render reemplaza este formulario
                if controller.login(&username_val, &password_val).await.is_err() {
                    if let Err(e) = set_flag(&submit_btn, "disabled", false) {
                        log::warn!("⚠️ [LOGIN] No se pudo rehabilitar el botón: {:?}", e);
                    }
                }
            });
        })?;
    }

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(ElementBuilder::new("h1")?.text(t("login_title")).build())?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container)?
        .build())
}

/// Helper para crear un input ligado a un valor local
fn create_input(
    name: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("name", name)?
        .attr("placeholder", placeholder)?
        .attr("required", "")?
        .build();

    on_input(&input, move |current| {
        *value.borrow_mut() = current;
    })?;

    Ok(input)
}
