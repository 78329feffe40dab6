//! Browser binding for the loading indicator
//!
//! Plugs `setInterval` and id-based element lookup into the
//! [`LoadingIndicator`] controller and subscribes it to `htmx:indicator` on
//! `document.body`. The same event is dispatched for this app's own requests,
//! so an htmx-served page and the Dioxus pages drive one controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use portal_common::{
    visibility_from_detail, IndicatorConfig, IndicatorView, LoadingIndicator, TickScheduler,
};
use portal_ui::wasm_utils::EventListener;
use tracing::{debug, info, warn};
use wasm_bindgen_x::prelude::*;

/// Event fired by htmx when a request indicator should change.
pub const HTMX_INDICATOR_EVENT: &str = "htmx:indicator";

type DomIndicator = LoadingIndicator<IntervalTimer, DomIndicatorView>;

/// `window.setInterval` driving a single tick callback.
pub struct IntervalTimer {
    window: web_sys_x::Window,
    on_tick: Closure<dyn FnMut()>,
}

impl TickScheduler for IntervalTimer {
    type Handle = i32;

    fn schedule(&mut self, period: Duration) -> Option<i32> {
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.on_tick.as_ref().unchecked_ref(),
                millis,
            )
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

/// Updates the indicator elements, looking them up by id on every call.
pub struct DomIndicatorView {
    document: web_sys_x::Document,
    container_id: String,
    dots_id: String,
}

impl DomIndicatorView {
    pub fn new(document: web_sys_x::Document, config: &IndicatorConfig) -> Self {
        Self {
            document,
            container_id: config.container_id.clone(),
            dots_id: config.dots_id.clone(),
        }
    }

    fn container(&self) -> Option<web_sys_x::HtmlElement> {
        let element = self.document.get_element_by_id(&self.container_id);
        if element.is_none() {
            debug!("#{} not in document, skipping", self.container_id);
        }
        element?.dyn_into::<web_sys_x::HtmlElement>().ok()
    }
}

impl IndicatorView for DomIndicatorView {
    fn show(&mut self) {
        if let Some(el) = self.container() {
            let _ = el.style().remove_property("display");
        }
    }

    fn hide(&mut self) {
        if let Some(el) = self.container() {
            let _ = el.style().set_property("display", "none");
        }
    }

    fn set_text(&mut self, text: &str) {
        match self.document.get_element_by_id(&self.dots_id) {
            Some(el) => el.set_text_content(Some(text)),
            None => debug!("#{} not in document, skipping", self.dots_id),
        }
    }
}

/// Keeps the controller and its event subscription alive.
///
/// Dropping it removes the listener, then cancels any live timer.
pub struct IndicatorBinding {
    _listener: EventListener,
    _controller: Rc<RefCell<DomIndicator>>,
}

/// Build the controller and subscribe it to `htmx:indicator`.
///
/// Returns `None` outside a browser document.
pub fn install(config: IndicatorConfig) -> Option<IndicatorBinding> {
    let window = web_sys_x::window()?;
    let document = window.document()?;
    let body = document.body()?;
    let view = DomIndicatorView::new(document, &config);

    // The timer callback only holds a weak reference, so the controller is
    // dropped with the binding even while an interval is scheduled.
    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<DomIndicator>>| {
        let weak = weak.clone();
        let on_tick = Closure::wrap(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().tick();
            }
        }) as Box<dyn FnMut()>);
        RefCell::new(LoadingIndicator::new(
            config,
            IntervalTimer { window, on_tick },
            view,
        ))
    });

    let target = Rc::downgrade(&controller);
    let listener = EventListener::new(body.into(), HTMX_INDICATOR_EVENT, move |event| {
        let visible = visible_from_event(&event);
        if let Some(controller) = target.upgrade() {
            controller.borrow_mut().on_visibility_changed(visible);
        }
    });

    info!("Loading indicator listening for {HTMX_INDICATOR_EVENT}");
    Some(IndicatorBinding {
        _listener: listener,
        _controller: controller,
    })
}

/// Read `event.detail.visible`. Anything but a boolean `true` counts as hidden.
fn visible_from_event(event: &JsValue) -> bool {
    let visible = js_sys_x::Reflect::get(event, &JsValue::from_str("detail"))
        .and_then(|detail| js_sys_x::Reflect::get(&detail, &JsValue::from_str("visible")))
        .ok()
        .and_then(|visible| visible.as_bool());
    visibility_from_detail(visible)
}

/// Fire `htmx:indicator` on `document.body` with `detail.visible`.
pub fn dispatch_visibility(visible: bool) {
    let Some(body) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let detail = js_sys_x::Object::new();
    let _ = js_sys_x::Reflect::set(
        &detail,
        &JsValue::from_str("visible"),
        &JsValue::from_bool(visible),
    );

    let init = web_sys_x::CustomEventInit::new();
    init.set_detail(&detail);

    match web_sys_x::CustomEvent::new_with_event_init_dict(HTMX_INDICATOR_EVENT, &init) {
        Ok(event) => {
            let _ = body.dispatch_event(&event);
        }
        Err(e) => warn!("Failed to create {HTMX_INDICATOR_EVENT} event: {e:?}"),
    }
}
