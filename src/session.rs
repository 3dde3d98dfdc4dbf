//! Fragment Session
//!
//! Owns every binding made against one loaded fragment. The loader drops the
//! old session before swapping markup, which detaches its listeners.

use std::rc::Rc;

use web_sys::Document;

use crate::config::ShellConfig;
use crate::layers::LayerToggles;
use crate::map::MapControls;
use crate::theme::{PreferenceStore, ThemeToggle};

#[derive(Debug, Default)]
pub struct FragmentSession {
    theme: Option<ThemeToggle>,
    map: Option<MapControls>,
    layers: Option<LayerToggles>,
}

impl FragmentSession {
    /// Run every binder against the markup currently in the document.
    /// Binders whose markup is missing are skipped.
    pub fn attach(
        document: &Document,
        config: &ShellConfig,
        store: Rc<dyn PreferenceStore>,
    ) -> Self {
        let session = Self {
            theme: ThemeToggle::bind(document, &config.theme, store),
            map: MapControls::bind(document, &config.map),
            layers: LayerToggles::bind(document, &config.layers),
        };
        tracing::debug!(
            theme = session.theme.is_some(),
            map = session.map.is_some(),
            layers = session.layers.as_ref().map_or(0, |l| l.bindings().len()),
            "Fragment bindings attached"
        );
        session
    }

    pub fn theme(&self) -> Option<&ThemeToggle> {
        self.theme.as_ref()
    }

    pub fn map(&self) -> Option<&MapControls> {
        self.map.as_ref()
    }

    pub fn layers(&self) -> Option<&LayerToggles> {
        self.layers.as_ref()
    }
}
