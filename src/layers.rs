//! Layer Toggle Binder
//!
//! Each layer checkbox shows or hides the map tag that shares its key.

use web_sys::{Document, Element, HtmlInputElement};

use crate::config::LayerConfig;
use crate::dom::{self, Listener};

/// A checkbox and the tag it controls
#[derive(Debug)]
pub struct LayerBinding {
    key: String,
    has_tag: bool,
    _change: Listener,
}

impl LayerBinding {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a matching tag was found at bind time
    pub fn has_tag(&self) -> bool {
        self.has_tag
    }
}

/// All layer bindings of one fragment
#[derive(Debug)]
pub struct LayerToggles {
    bindings: Vec<LayerBinding>,
}

impl LayerToggles {
    /// Bind every layer checkbox; `None` when the fragment has none
    pub fn bind(document: &Document, config: &LayerConfig) -> Option<Self> {
        let toggles = dom::query_all::<HtmlInputElement>(document, &config.toggle_selector);
        if toggles.is_empty() {
            tracing::trace!("No layer toggles in fragment");
            return None;
        }
        let tags = dom::query_all::<Element>(document, &config.tag_selector);

        let bindings = toggles
            .into_iter()
            .filter_map(|toggle| {
                let key = toggle.get_attribute(&config.layer_attr)?;
                let tag = find_tag(&tags, &config.tag_attr, &key).cloned();
                if tag.is_none() {
                    tracing::debug!("Layer {:?} has no matching tag", key);
                }

                sync_tag(&toggle, tag.as_ref(), &config.hidden_class);

                let has_tag = tag.is_some();
                let hidden_class = config.hidden_class.clone();
                let target = toggle.clone();
                let change = Listener::new(&toggle, "change", move |_| {
                    sync_tag(&target, tag.as_ref(), &hidden_class);
                });

                Some(LayerBinding {
                    key,
                    has_tag,
                    _change: change,
                })
            })
            .collect();

        Some(Self { bindings })
    }

    pub fn bindings(&self) -> &[LayerBinding] {
        &self.bindings
    }
}

/// First tag whose key attribute equals `key`
fn find_tag<'a>(tags: &'a [Element], attr: &str, key: &str) -> Option<&'a Element> {
    tags.iter()
        .find(|tag| tag.get_attribute(attr).as_deref() == Some(key))
}

/// Make the tag visible exactly when the checkbox is checked
fn sync_tag(toggle: &HtmlInputElement, tag: Option<&Element>, hidden_class: &str) {
    if let Some(tag) = tag {
        dom::set_class(tag, hidden_class, !toggle.checked());
    }
}
