//! Fragment Loader
//!
//! Fetches HTML fragments and hands them to a [`FragmentView`]. Every load
//! takes a ticket when it is issued; a response is only rendered if no newer
//! load was issued in the meantime, so the last navigation wins no matter
//! which response arrives first.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::error::{ShellError, ShellResult};

/// Where fragment markup comes from
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn fetch(&self, url: &str) -> ShellResult<String>;
}

/// Plain HTTP GET relative to the page
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

#[async_trait(?Send)]
impl FragmentSource for HttpSource {
    async fn fetch(&self, url: &str) -> ShellResult<String> {
        let response = Request::get(url).send().await?;

        if !response.ok() {
            return Err(ShellError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ShellError::Body(e.to_string()))
    }
}

/// Where fragment markup goes
pub trait FragmentView {
    /// Replace the content with a fetched fragment and rebind it
    fn show_fragment(&self, html: &str);
    /// Replace the content with the error fragment
    fn show_error(&self, html: &str);
}

/// How a single load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    /// A newer load was issued before this one resolved; nothing rendered
    Superseded,
}

/// Monotonic counter of issued loads
#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    latest: Rc<Cell<u64>>,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket; every earlier ticket becomes stale
    pub fn issue(&self) -> LoadTicket {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        LoadTicket {
            id,
            latest: Rc::clone(&self.latest),
        }
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}

/// Proof of position in the load sequence
#[derive(Debug)]
pub struct LoadTicket {
    id: u64,
    latest: Rc<Cell<u64>>,
}

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True while no newer load has been issued
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.id
    }
}

/// Loads fragments from a source into a view
#[derive(Clone)]
pub struct FragmentLoader {
    source: Rc<dyn FragmentSource>,
    view: Rc<dyn FragmentView>,
    sequence: LoadSequence,
    error_fragment: Rc<str>,
}

impl FragmentLoader {
    pub fn new(
        source: Rc<dyn FragmentSource>,
        view: Rc<dyn FragmentView>,
        error_fragment: &str,
    ) -> Self {
        Self {
            source,
            view,
            sequence: LoadSequence::new(),
            error_fragment: Rc::from(error_fragment),
        }
    }

    /// Start loading `url`. The ticket is taken now, not when the returned
    /// future is first polled.
    pub fn load(&self, url: &str) -> impl Future<Output = LoadOutcome> + 'static {
        let ticket = self.sequence.issue();
        let source = Rc::clone(&self.source);
        let view = Rc::clone(&self.view);
        let error_fragment = Rc::clone(&self.error_fragment);
        let url = url.to_string();

        async move {
            tracing::debug!(url = %url, request = ticket.id(), "Loading fragment");
            let result = source.fetch(&url).await;

            if let Err(e) = &result {
                log_failure(&url, e);
            }

            if !ticket.is_current() {
                tracing::debug!(
                    url = %url,
                    request = ticket.id(),
                    "Discarding response superseded by a newer load"
                );
                return LoadOutcome::Superseded;
            }

            match result {
                Ok(html) => {
                    view.show_fragment(&html);
                    tracing::info!(url = %url, bytes = html.len(), "Fragment loaded");
                    LoadOutcome::Loaded
                }
                Err(_) => {
                    view.show_error(&error_fragment);
                    LoadOutcome::Failed
                }
            }
        }
    }

    /// Fire-and-forget variant of [`load`](Self::load) for event handlers
    pub fn spawn(&self, url: &str) {
        let pending = self.load(url);
        leptos::spawn_local(async move {
            pending.await;
        });
    }

    pub fn sequence(&self) -> &LoadSequence {
        &self.sequence
    }
}

/// Failed loads are logged whether or not they still get rendered
fn log_failure(url: &str, error: &ShellError) {
    if error.is_fetch_failure() {
        tracing::error!(url = %url, error = %error, "Error loading page");
    } else {
        tracing::warn!(url = %url, error = %error, "Unexpected failure loading page");
    }
}
