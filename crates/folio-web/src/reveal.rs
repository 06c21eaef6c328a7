//! `IntersectionObserver` subscription driving the reveal animation
//!
//! The observer callback turns each entry into a [`VisibilityEvent`] pushed
//! down an unbounded channel; a local task feeds that stream to the core
//! [`RevealAnimator`]. Elements are unobserved once revealed and the observer
//! is disconnected when none are left.

use folio_core::{RevealAnimator, RevealConfig, Revealable, VisibilityEvent};
use futures::channel::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::error::{Result, WebError};

/// Attribute carrying an element's position in the reveal set
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// An element animated through its inline style
#[derive(Debug, Clone)]
pub struct StyledElement(HtmlElement);

impl StyledElement {
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    #[must_use]
    pub const fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl Revealable for StyledElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.0.style().set_property(property, value) {
            warn!(property, error = ?e, "failed to set reveal style");
        }
    }
}

fn visibility_event(entry: &IntersectionObserverEntry) -> Option<VisibilityEvent> {
    let index = entry
        .target()
        .get_attribute(INDEX_ATTRIBUTE)?
        .parse::<usize>()
        .ok()?;
    Some(VisibilityEvent {
        index,
        intersecting: entry.is_intersecting(),
    })
}

/// Starts watching `elements` and returns the observer with its event stream
///
/// Each element is tagged with [`INDEX_ATTRIBUTE`] so events can be traced
/// back to their position.
///
/// # Errors
///
/// Returns an error when the observer cannot be created or an element
/// cannot be tagged
pub fn observe(
    elements: &[StyledElement],
    config: &RevealConfig,
) -> Result<(IntersectionObserver, UnboundedReceiver<VisibilityEvent>)> {
    let (tx, rx) = mpsc::unbounded();

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(event) = entry
                .dyn_into::<IntersectionObserverEntry>()
                .ok()
                .as_ref()
                .and_then(visibility_event)
            else {
                continue;
            };
            // Receiver gone means the animator finished
            let _ = tx.unbounded_send(event);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| WebError::ObserverFailed(format!("{e:?}")))?;

    // Keep closure alive
    callback.forget();

    for (index, element) in elements.iter().enumerate() {
        element
            .0
            .set_attribute(INDEX_ATTRIBUTE, &index.to_string())
            .map_err(|e| WebError::Dom(format!("{e:?}")))?;
        observer.observe(&element.0);
    }

    Ok((observer, rx))
}

/// Prepares every element matching the configured selectors and reveals
/// each as it scrolls into view
///
/// # Errors
///
/// Returns an error for an invalid selector or a failed observer setup
pub fn start_reveal(document: &Document, config: &RevealConfig) -> Result<()> {
    let elements: Vec<StyledElement> = dom::query_all::<HtmlElement>(document, &config.selector())?
        .into_iter()
        .map(StyledElement::new)
        .collect();

    if elements.is_empty() {
        debug!("no elements to reveal");
        return Ok(());
    }

    let animator = RevealAnimator::prepare(elements.clone(), config);
    let (observer, events) = observe(&elements, config)?;
    info!(count = elements.len(), "reveal animation armed");

    spawn_local(async move {
        let _ = animator
            .run(events, |_, element| observer.unobserve(element.element()))
            .await;
        observer.disconnect();
    });

    Ok(())
}

/// Runs `task` once the DOM is parsed
///
/// Runs immediately when the document has already finished loading.
///
/// # Errors
///
/// Returns an error when the `DOMContentLoaded` listener cannot be added
pub fn on_dom_ready<F>(document: &Document, task: F) -> Result<()>
where
    F: FnOnce(&Document) + 'static,
{
    if document.ready_state() != "loading" {
        task(document);
        return Ok(());
    }

    let mut task = Some(task);
    let target = document.clone();
    dom::listen(document, "DOMContentLoaded", move |_| {
        if let Some(task) = task.take() {
            task(&target);
        }
    })
}
