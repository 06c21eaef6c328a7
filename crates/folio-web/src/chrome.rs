//! One-shot page chrome: footer year, section scrolling, spinner keyframes

use tracing::debug;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::{Result, WebError};

/// Element showing the current year in the footer
pub const YEAR_ELEMENT_ID: &str = "currentYear";

/// Keyframes the submit button's loading indicator spins with
pub const SPIN_KEYFRAMES: &str = "
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
";

/// Writes the current year into the footer; no-op when the element is absent
pub fn stamp_year(document: &Document) {
    let Some(element) = document.get_element_by_id(YEAR_ELEMENT_ID) else {
        debug!("no footer year element");
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
}

/// Smoothly scrolls the element with `section_id` into view
///
/// Returns whether the section exists.
pub fn scroll_to(document: &Document, section_id: &str) -> bool {
    let Some(section) = document.get_element_by_id(section_id) else {
        debug!(section_id, "scroll target not found");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Appends a `<style>` element declaring the `spin` keyframes to `<head>`
///
/// # Errors
///
/// Returns an error when there is no `<head>` or the element cannot be added
pub fn inject_spin_keyframes(document: &Document) -> Result<()> {
    let head = document.head().ok_or(WebError::HeadNotAvailable)?;
    let style = document
        .create_element("style")
        .map_err(|e| WebError::Dom(format!("{e:?}")))?;
    style.set_text_content(Some(SPIN_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| WebError::Dom(format!("{e:?}")))?;
    Ok(())
}
