//! DOM plumbing shared by the components: lookups, listeners, timers and
//! intersection observers. Every closure registered here is leaked with
//! `forget()`; listeners live for the page lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Milliseconds from `performance.now()`, `0.0` when unavailable.
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Required element lookup by id, scoped to `root`.
pub(crate) fn element_by_id(root: &Element, id: &str) -> Result<Element, JsValue> {
    find_by_id(root, id)?.ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Optional element lookup by id, scoped to `root`.
pub(crate) fn find_by_id(root: &Element, id: &str) -> Result<Option<Element>, JsValue> {
    if root.id() == id {
        return Ok(Some(root.clone()));
    }
    root.query_selector(&format!("#{id}"))
}

/// All descendants of `root` matching `selector`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn query_all_html(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(query_all(root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Register a page-lifetime listener.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once the window `load` event has fired: right away when the
/// document is already complete, otherwise from a `load` listener.
pub(crate) fn when_loaded<F>(callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document()?.ready_state() == "complete" {
        callback();
        return Ok(());
    }
    let win = window()?;
    let mut pending = Some(callback);
    listen(&win, "load", move |_| {
        if let Some(cb) = pending.take() {
            cb();
        }
    })
}

/// One-shot `setTimeout`.
pub(crate) fn set_timeout<F>(delay_ms: u32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(callback);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).ok();
}

/// Observer options shared by the reveal and counter animators.
pub(crate) struct ObserveOptions<'a> {
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
}

/// Observe every element with one `IntersectionObserver`. The handler gets
/// each callback batch in delivery order.
pub(crate) fn observe<F>(
    elements: &[Element],
    opts: ObserveOptions<'_>,
    mut handler: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>) + 'static,
{
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: IntersectionObserver| {
        let batch: Vec<IntersectionObserverEntry> = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        handler(batch);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    if let Some(margin) = opts.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(observer)
}
