//! Roster Controller
//!
//! Binds the sort control and the name filter of the roster page to a
//! `RosterView` and logs what each pass did.

use std::rc::Rc;

use leptos::prelude::*;
use roster_core::{FilterPass, RosterView, SortPass, SortPreference};

use crate::dom::{self, RosterDom};
use crate::storage::LocalStorage;

type BrowserView = RosterView<RosterDom, LocalStorage>;

#[component]
pub fn RosterController() -> impl IntoView {
    dom::when_ready(start);
}

fn start() {
    let Some(doc) = dom::document() else {
        return;
    };
    let config = dom::load_config(&doc);
    let preference = SortPreference::new(LocalStorage, config.storage_key.clone());
    let Some(view) = RosterView::attach(RosterDom::locate(&doc, &config), preference) else {
        web_sys::console::log_1(
            &format!(
                "[Roster] #{} or #{} not found, nothing to do",
                config.sort_control_id, config.container_id
            )
            .into(),
        );
        return;
    };
    let view: Rc<BrowserView> = Rc::new(view);

    {
        let handler_view = view.clone();
        view.page().on_sort_change(move || {
            let change = handler_view.sort_changed();
            if let Err(e) = change.saved {
                web_sys::console::warn_1(&format!("[Roster] Sort preference not saved: {}", e).into());
            }
            log_sort(&change.sort);
        });
    }

    if view.page().has_filter_input() {
        let handler_view = view.clone();
        view.page().on_filter_input(move || {
            if let Some(pass) = handler_view.filter_changed() {
                log_filter(&pass);
            }
        });
    } else {
        web_sys::console::warn_1(
            &format!("[Roster] #{} not found, name filter disabled", config.filter_input_id).into(),
        );
    }

    let startup = view.start();
    web_sys::console::log_1(
        &format!(
            "[Roster] Started with {} members, restored sort: {:?}",
            startup.sort.rows, startup.restored
        )
        .into(),
    );
    log_sort(&startup.sort);
    if let Some(pass) = &startup.filter {
        log_filter(pass);
    }
}

fn log_sort(pass: &SortPass) {
    web_sys::console::log_1(
        &format!(
            "[Roster] Sorted {} members by {} ({})",
            pass.rows,
            pass.order.field.map(|f| f.as_str()).unwrap_or("nothing"),
            pass.order.direction.as_str()
        )
        .into(),
    );
}

fn log_filter(pass: &FilterPass) {
    web_sys::console::log_1(
        &format!("[Roster] Filter '{}': {}/{} visible", pass.query, pass.visible, pass.rows).into(),
    );
}
