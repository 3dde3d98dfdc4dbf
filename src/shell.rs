//! Shell Controller
//!
//! Ties the content container, the fragment loader and the sidebar
//! navigation together.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement};

use crate::config::ShellConfig;
use crate::dispatch::{resolve_nav_click, NavAction};
use crate::dom;
use crate::loader::{FragmentLoader, FragmentSource, FragmentView};
use crate::session::FragmentSession;
use crate::theme::PreferenceStore;

/// Writes fragments into the content container and rebinds them
pub struct DomView {
    document: Document,
    container: HtmlElement,
    config: Rc<ShellConfig>,
    store: Rc<dyn PreferenceStore>,
    session: RefCell<Option<FragmentSession>>,
}

impl DomView {
    pub fn new(
        document: Document,
        container: HtmlElement,
        config: Rc<ShellConfig>,
        store: Rc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            document,
            container,
            config,
            store,
            session: RefCell::new(None),
        }
    }

    /// Inspect the bindings of the fragment currently shown
    pub fn with_session<R>(&self, f: impl FnOnce(Option<&FragmentSession>) -> R) -> R {
        f(self.session.borrow().as_ref())
    }

    /// Drop the previous fragment's bindings before its markup goes away
    fn release_session(&self) {
        let previous = self.session.borrow_mut().take();
        drop(previous);
    }
}

impl FragmentView for DomView {
    fn show_fragment(&self, html: &str) {
        self.release_session();
        self.container.set_inner_html(html);

        let session = FragmentSession::attach(&self.document, &self.config, Rc::clone(&self.store));
        *self.session.borrow_mut() = Some(session);
    }

    fn show_error(&self, html: &str) {
        self.release_session();
        self.container.set_inner_html(html);
    }
}

/// The running dashboard shell
#[derive(Clone)]
pub struct Shell {
    config: Rc<ShellConfig>,
    view: Rc<DomView>,
    loader: FragmentLoader,
}

impl Shell {
    /// Shell fetching fragments from `source`
    pub fn with_source(
        document: Document,
        container: HtmlElement,
        config: Rc<ShellConfig>,
        store: Rc<dyn PreferenceStore>,
        source: Rc<dyn FragmentSource>,
    ) -> Self {
        let view = Rc::new(DomView::new(document, container, Rc::clone(&config), store));
        let loader = FragmentLoader::new(source, view.clone(), &config.error_fragment);
        Self {
            config,
            view,
            loader,
        }
    }

    /// Load a fragment into the content area
    pub fn navigate(&self, url: &str) {
        self.loader.spawn(url);
    }

    /// Initial load of the configured default page
    pub fn load_default(&self) {
        tracing::info!("Loading default page {}", self.config.default_page);
        self.navigate(&self.config.default_page);
    }

    /// Delegated click handler for the whole sidebar
    pub fn handle_sidebar_click(&self, event: &Event) {
        if let Some(page) = intercept_nav_click(event) {
            tracing::debug!("Navigating to {}", page);
            self.navigate(&page);
        }
    }

    pub fn loader(&self) -> &FragmentLoader {
        &self.loader
    }

    pub fn view(&self) -> &DomView {
        &self.view
    }
}

/// Resolve a sidebar click and, for fragment links, stop the browser from
/// following the `href`. Returns the page to load.
pub fn intercept_nav_click(event: &Event) -> Option<String> {
    let target = dom::event_element(event)?;
    match resolve_nav_click(&target) {
        NavAction::Load(page) => {
            event.prevent_default();
            Some(page)
        }
        NavAction::Ignore => None,
    }
}
