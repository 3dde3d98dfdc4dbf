//! App Root Component
//!
//! Renders the persistent shell: sidebar, toggle button and the content
//! container fragments are loaded into.

use std::rc::Rc;

use leptos::*;

use crate::config::{NavItem, ShellConfig};
use crate::dom;
use crate::loader::{FragmentSource, HttpSource};
use crate::shell::{self, Shell};
use crate::theme::PreferenceStore;

/// Root shell component. Fragments are fetched over HTTP unless another
/// `source` is given.
#[component]
pub fn App(
    config: Rc<ShellConfig>,
    store: Rc<dyn PreferenceStore>,
    #[prop(optional)] source: Option<Rc<dyn FragmentSource>>,
) -> impl IntoView {
    let collapsed = create_rw_signal(false);
    let content_ref = create_node_ref::<html::Div>();
    let running = store_value(None::<Shell>);

    // Start loading once the content container exists
    let nav = config.nav.clone();
    content_ref.on_load(move |container| {
        let Some(document) = dom::document() else {
            tracing::error!("No document available, shell not started");
            return;
        };
        let container: &web_sys::HtmlElement = &container;

        let source = source.unwrap_or_else(|| Rc::new(HttpSource) as Rc<dyn FragmentSource>);
        let started = Shell::with_source(document, container.clone(), config, store, source);
        started.load_default();
        running.set_value(Some(started));
    });

    view! {
        <aside
            id="sidebar"
            class:collapsed=move || collapsed.get()
            on:click=move |ev: ev::MouseEvent| {
                running.with_value(|started| match started {
                    Some(started) => started.handle_sidebar_click(&ev),
                    // Still keep the browser on the shell page
                    None => {
                        if let Some(page) = shell::intercept_nav_click(&ev) {
                            tracing::debug!("Shell not started yet, dropping navigation to {}", page);
                        }
                    }
                });
            }
        >
            <Nav items=nav />
        </aside>

        <main id="main" class:full=move || collapsed.get()>
            <button
                id="toggle-btn"
                type="button"
                aria-label="Toggle sidebar"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                "☰"
            </button>

            <div id="content-area" node_ref=content_ref />
        </main>
    }
}

/// Sidebar navigation links
#[component]
pub fn Nav(items: Vec<NavItem>) -> impl IntoView {
    view! {
        <nav class="sidebar-nav">
            <ul>
                {items
                    .into_iter()
                    .map(|item| view! { <NavLink item=item /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let href = item.page.clone();

    view! {
        <li>
            <a href=href data-page=item.page>
                <span class="link-text">{item.label}</span>
            </a>
        </li>
    }
}
