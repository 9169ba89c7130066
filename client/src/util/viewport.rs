//! Browser viewport and element measurements.
//!
//! Requires a browser environment; SSR and native test builds return `None`
//! so callers simply skip the interaction.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
use super::evasion::ButtonSize;
use super::evasion::Viewport;

/// Current `window.innerWidth` × `window.innerHeight`.
pub fn current_viewport() -> Option<Viewport> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport { width, height })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Rendered size of an element from its bounding client rect.
#[cfg(feature = "hydrate")]
pub fn element_size(element: &web_sys::Element) -> ButtonSize {
    let rect = element.get_bounding_client_rect();
    ButtonSize { width: rect.width(), height: rect.height() }
}
