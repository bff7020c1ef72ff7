//! Roster DOM
//!
//! web-sys access to the roster page: element lookup, member rows,
//! reordering, visibility and event listeners.

use roster_core::{Member, PageRow, RosterConfig, RosterPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement};

/// Optional `<script type="application/json">` holding a `RosterConfig`
const CONFIG_ELEMENT_ID: &str = "roster-config";

/// Handles to the roster page elements
#[derive(Clone)]
pub struct RosterDom {
    sort_control: HtmlSelectElement,
    filter_input: Option<HtmlInputElement>,
    container: Element,
    member_selector: String,
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Run `f` once the document has been parsed.
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }

    let on_ready = Closure::once(f);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        web_sys::console::error_1(&format!("[Roster] Cannot wait for DOMContentLoaded: {:?}", e).into());
    }
    on_ready.forget();
}

/// Page configuration, falling back to the defaults.
pub fn load_config(doc: &Document) -> RosterConfig {
    let Some(json) = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return RosterConfig::default();
    };
    RosterConfig::from_json(&json).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[Roster] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
        RosterConfig::default()
    })
}

/// `Date.parse` for strings chrono does not understand
fn parse_date_in_browser(raw: &str) -> Option<i64> {
    let ms = js_sys::Date::parse(raw);
    ms.is_finite().then(|| ms as i64)
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        web_sys::console::error_1(&format!("[Roster] Cannot bind '{}': {:?}", event, e).into());
    }
    callback.forget();
}

impl RosterDom {
    /// Find the roster elements. `None` when the sort control or the
    /// container is missing; the filter input is optional.
    pub fn locate(doc: &Document, config: &RosterConfig) -> Option<Self> {
        let sort_control = doc
            .get_element_by_id(&config.sort_control_id)?
            .dyn_into::<HtmlSelectElement>()
            .ok()?;
        let container = doc.get_element_by_id(&config.container_id)?;
        let filter_input = doc
            .get_element_by_id(&config.filter_input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

        Some(Self {
            sort_control,
            filter_input,
            container,
            member_selector: config.member_selector.clone(),
        })
    }

    pub fn has_filter_input(&self) -> bool {
        self.filter_input.is_some()
    }

    /// Called on every `change` of the sort control.
    pub fn on_sort_change<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        listen(&self.sort_control, "change", move |_| handler());
    }

    /// Called on every keystroke in the filter input, if there is one.
    pub fn on_filter_input<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        if let Some(input) = &self.filter_input {
            listen(input, "input", move |_| handler());
        }
    }
}

impl RosterPage for RosterDom {
    type Row = HtmlElement;

    fn sort_value(&self) -> String {
        self.sort_control.value()
    }

    /// Values matching no option leave the select empty.
    fn set_sort_value(&self, value: &str) {
        self.sort_control.set_value(value);
    }

    fn filter_value(&self) -> Option<String> {
        self.filter_input.as_ref().map(|input| input.value())
    }

    fn rows(&self) -> Vec<PageRow<HtmlElement>> {
        let nodes = match self.container.query_selector_all(&self.member_selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                web_sys::console::error_1(
                    &format!("[Roster] Bad member selector '{}': {:?}", self.member_selector, e).into(),
                );
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|handle| {
                let member =
                    Member::from_attributes_with(|attr| handle.get_attribute(attr), parse_date_in_browser);
                PageRow { handle, member }
            })
            .collect()
    }

    /// Re-appends each row to the container.
    fn reorder(&self, rows: &[PageRow<HtmlElement>]) {
        for row in rows {
            if let Err(e) = self.container.append_child(&row.handle) {
                web_sys::console::error_1(&format!("[Roster] appendChild failed: {:?}", e).into());
            }
        }
    }

    fn set_visible(&self, row: &HtmlElement, visible: bool) {
        let display = if visible { "" } else { "none" };
        if let Err(e) = row.style().set_property("display", display) {
            web_sys::console::error_1(&format!("[Roster] Cannot set display '{}': {:?}", display, e).into());
        }
    }
}
