//! # EDI Shell
//!
//! WebAssembly controller for the EDI dashboard: a collapsible sidebar,
//! client-side loading of HTML page fragments, a persisted dark mode and the
//! interactive controls of the decorative map widget.
//!
//! ## Modules
//!
//! - [`app`]: Leptos components rendering the persistent shell
//! - [`shell`]: sidebar navigation and the content container
//! - [`loader`]: fragment fetching with last-navigation-wins ordering
//! - [`session`]: per-fragment bindings, rebuilt on every load
//! - [`theme`], [`map`], [`layers`]: the individual binders
//! - [`zoom`], [`dispatch`]: DOM-free state and click tables
//!
//! Everything that touches the DOM expects a browser; the state types in
//! [`zoom`], [`loader`], [`config`] and [`theme`] work anywhere.

use std::rc::Rc;

use leptos::*;

use crate::app::App;

pub mod app;
pub mod config;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod layers;
pub mod loader;
pub mod map;
pub mod session;
pub mod shell;
pub mod telemetry;
pub mod theme;
pub mod zoom;

pub use config::{LayerConfig, LoggingConfig, MapConfig, NavItem, ShellConfig, ThemeConfig};
pub use error::{ShellError, ShellResult};
pub use loader::{FragmentLoader, FragmentSource, FragmentView, HttpSource, LoadOutcome};
pub use session::FragmentSession;
pub use shell::Shell;
pub use theme::{LocalStorage, MemoryStore, PreferenceStore, Theme};
pub use zoom::{MapCommand, MapEffect, Zoom};

/// Boot the shell: configuration, logging, saved theme, then mount
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        web_sys::console::error_1(&"EDI shell needs a browser document".into());
        return;
    };

    let (config, config_error) = match ShellConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(e) => (ShellConfig::default(), Some(e)),
    };

    telemetry::init_logging(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring invalid shell configuration: {}", e);
    }
    tracing::info!("EDI shell v{}", env!("CARGO_PKG_VERSION"));

    // Theme goes on before the first paint of the shell
    let store = theme::open_store();
    theme::restore_saved_theme(&document, &config.theme, store.as_ref());

    let config = Rc::new(config);
    mount_to_body(move || view! { <App config=config store=store /> });
}
