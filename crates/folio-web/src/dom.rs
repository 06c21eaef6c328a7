//! Panic-free DOM lookups
//!
//! Everything here returns `Option`/`Result`; missing globals and elements
//! are reported, never unwrapped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::{Result, WebError};

/// Get window object
///
/// # Errors
///
/// Returns `WebError::WindowNotAvailable` outside a browser
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WebError::WindowNotAvailable)
}

/// Get document from the current window
///
/// # Errors
///
/// Returns an error when either global is missing
pub fn document() -> Result<Document> {
    window()?.document().ok_or(WebError::DocumentNotAvailable)
}

/// Element with `id` cast to `T`; `None` when absent or of another type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Like [`element_by_id`] but reports why nothing came back
///
/// # Errors
///
/// `ElementNotFound` when absent, `UnexpectedElement` when not a `T`
pub fn require_element<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::ElementNotFound(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WebError::UnexpectedElement {
            id: id.to_string(),
            expected,
        })
}

/// All elements matching `selector` that are a `T`, in document order
///
/// # Errors
///
/// Returns `WebError::InvalidSelector` when the browser rejects the selector
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| WebError::InvalidSelector {
            selector: selector.to_string(),
            message: format!("{e:?}"),
        })?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attaches `handler` to `target` for the rest of the page's life
///
/// # Errors
///
/// Returns `WebError::ListenerFailed` when the browser refuses the listener
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WebError::ListenerFailed {
            event,
            message: format!("{e:?}"),
        })?;

    // Keep closure alive
    closure.forget();

    Ok(())
}
