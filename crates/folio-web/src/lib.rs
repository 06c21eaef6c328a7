//! Browser bindings for the folio portfolio page
//!
//! Wires the page logic in `folio-core` to the live DOM of a static,
//! hand-authored page. Nothing here renders markup; it only attaches
//! behavior to elements that are already on the page.
//!
//! ## Architecture
//! - WASM compilation target (wasm32-unknown-unknown)
//! - `web-sys` for DOM access, `gloo-timers` for delays
//! - Event handlers spawn local futures; there is no render loop
//! - `tracing` events are routed to the browser console
//!
//! ## Module Structure
//! - `chrome`: footer year, smooth scrolling, spinner keyframes
//! - `config`: locating the page configuration
//! - `dom`: panic-free lookups and listener helpers
//! - `error`: error types and handling
//! - `form`: contact form view and event wiring
//! - `logging`: console subscriber for `tracing`
//! - `reveal`: intersection-driven reveal animation
//! - `timer`: `setTimeout`-backed sleeper

#![forbid(unsafe_code)]

pub mod chrome;
pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod logging;
pub mod reveal;
pub mod timer;

use std::rc::Rc;

use folio_core::PageConfig;
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use error::{Result, WebError};
pub use form::PageFormController;

/// Behavior attached to a loaded page
pub struct Page {
    config: PageConfig,
    form: Option<Rc<PageFormController>>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("config", &self.config)
            .field("form_bound", &self.form.is_some())
            .finish()
    }
}

impl Page {
    /// Attaches every page behavior to the current document
    ///
    /// Each step is independent: a step that fails is logged and the rest
    /// still run. Only a missing window or document is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no document to bind to
    pub fn boot(js_config: Option<JsValue>) -> Result<Self> {
        console_error_panic_hook::set_once();

        let document = dom::document()?;
        let (config, config_problem) = config::resolve(Some(&document), js_config);

        let level = config.level().unwrap_or(tracing::Level::INFO);
        if let Err(e) = logging::init(level) {
            // Already installed by an earlier boot
            debug!(error = %e, "keeping existing log subscriber");
        }
        if let Some(problem) = config_problem {
            warn!(error = %problem, "page config rejected, using defaults");
        }

        chrome::stamp_year(&document);
        if let Err(e) = chrome::inject_spin_keyframes(&document) {
            error!(error = %e, "failed to inject spinner keyframes");
        }

        let form = match form::bind_contact_form(&document, &config.form) {
            Ok(form) => form,
            Err(e) => {
                error!(error = %e, "failed to bind contact form");
                None
            }
        };

        let reveal = config.reveal.clone();
        let armed = reveal::on_dom_ready(&document, move |document: &Document| {
            if let Err(e) = reveal::start_reveal(document, &reveal) {
                error!(error = %e, "failed to start reveal animation");
            }
        });
        if let Err(e) = armed {
            error!(error = %e, "failed to schedule reveal animation");
        }

        info!(form = form.is_some(), "page behaviors attached");
        Ok(Self { config, form })
    }

    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Contact form controller, when the page has a form
    #[must_use]
    pub fn form(&self) -> Option<&PageFormController> {
        self.form.as_deref()
    }
}

/// Attaches page behavior using the embedded config or defaults
///
/// # Errors
///
/// Rejects when there is no document
#[wasm_bindgen]
pub fn boot() -> std::result::Result<(), JsValue> {
    Page::boot(None).map(drop).map_err(JsValue::from)
}

/// Attaches page behavior with a config object supplied from JavaScript
///
/// # Errors
///
/// Rejects when there is no document
#[wasm_bindgen]
pub fn boot_with_config(config: JsValue) -> std::result::Result<(), JsValue> {
    Page::boot(Some(config)).map(drop).map_err(JsValue::from)
}

/// Smoothly scrolls to the section with `section_id`
///
/// Returns whether the section exists.
#[wasm_bindgen]
pub fn scroll_to_section(section_id: &str) -> bool {
    dom::document().is_ok_and(|document| chrome::scroll_to(&document, section_id))
}
