//! Map Control Binder
//!
//! Wires the zoom/reset/locate buttons of the decorative map to the icon.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::config::MapConfig;
use crate::dom::{self, Listener};
use crate::zoom::{MapCommand, MapEffect, Zoom};

/// Live map binding; owns the zoom state for one fragment
#[derive(Debug)]
pub struct MapControls {
    zoom: Rc<RefCell<Zoom>>,
    listeners: Vec<Listener>,
}

impl MapControls {
    /// Bind the controls. Returns `None` unless both the zoom-in button and
    /// the icon are present; the other buttons are bound when found.
    pub fn bind(document: &Document, config: &MapConfig) -> Option<Self> {
        if document.get_element_by_id(&config.zoom_in_id).is_none() {
            tracing::trace!("No #{} in fragment, skipping map controls", config.zoom_in_id);
            return None;
        }
        let Some(icon) = dom::by_id::<HtmlElement>(document, &config.icon_id) else {
            tracing::trace!("No #{} in fragment, skipping map controls", config.icon_id);
            return None;
        };

        let zoom = Rc::new(RefCell::new(Zoom::new(config.zoom_step)));
        let mut listeners = Vec::with_capacity(MapCommand::ALL.len());

        for command in MapCommand::ALL {
            let id = command.element_id(config);
            let Some(button) = document.get_element_by_id(id) else {
                tracing::debug!("Map control #{} missing, {:?} disabled", id, command);
                continue;
            };

            let zoom = Rc::clone(&zoom);
            let icon = icon.clone();
            let pulse_class = config.pulse_class.clone();
            let pulse_ms = config.pulse_ms;
            listeners.push(Listener::new(&button, "click", move |_| {
                let effect = zoom.borrow_mut().apply(command);
                render_effect(&icon, effect, &pulse_class, pulse_ms);
            }));
        }

        Some(Self { zoom, listeners })
    }

    /// Current zoom multiplier
    pub fn level(&self) -> f64 {
        self.zoom.borrow().level()
    }

    pub fn bound_controls(&self) -> usize {
        self.listeners.len()
    }
}

fn render_effect(icon: &HtmlElement, effect: MapEffect, pulse_class: &str, pulse_ms: u32) {
    match effect {
        MapEffect::Scale(level) => {
            let transform = crate::zoom::scale_transform(level);
            if let Err(e) = icon.style().set_property("transform", &transform) {
                tracing::warn!("Failed to apply {}: {:?}", transform, e);
            }
        }
        MapEffect::Pulse => {
            dom::set_class(icon, pulse_class, true);
            let icon = icon.clone();
            let pulse_class = pulse_class.to_string();
            Timeout::new(pulse_ms, move || {
                dom::set_class(&icon, &pulse_class, false);
            })
            .forget();
        }
        MapEffect::Unchanged => {}
    }
}
