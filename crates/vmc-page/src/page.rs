//! Page bootstrap and event dispatch.
//!
//! A [`Page`] owns one document and its state store. Nothing happens until
//! [`Event::DomContentLoaded`]: the catalog is projected and, if the page
//! carries detail controls, a [`DetailController`] is bound. Later events
//! are handled one at a time, each fully applied before the next.

use vmc_core::status_of;
use vmc_persistence::{StateStore, StorageBackend};

use crate::catalog::render_catalog;
use crate::detail::{DetailController, Outcome};
use crate::dom::Document;
use crate::input::{Event, command_for};

/// One loaded page.
#[derive(Debug)]
pub struct Page<B> {
    document: Document,
    store: StateStore<B>,
    controller: Option<DetailController>,
    ready: bool,
}

impl<B: StorageBackend> Page<B> {
    pub fn new(document: Document, store: StateStore<B>) -> Self {
        Self {
            document,
            store,
            controller: None,
            ready: false,
        }
    }

    /// Create a page and deliver [`Event::DomContentLoaded`].
    pub fn boot(document: Document, store: StateStore<B>) -> Self {
        let mut page = Self::new(document, store);
        page.dispatch(&Event::DomContentLoaded);
        page
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn store(&self) -> &StateStore<B> {
        &self.store
    }

    pub fn controller(&self) -> Option<&DetailController> {
        self.controller.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Deliver one event. Returns the outcome when it reached the detail
    /// controller as a command.
    pub fn dispatch(&mut self, event: &Event) -> Option<Outcome> {
        if let Event::DomContentLoaded = event {
            self.on_ready();
            return None;
        }
        if !self.ready {
            tracing::trace!(?event, "Event before document ready");
            return None;
        }
        let controller = self.controller.as_ref()?;
        let command = command_for(&self.document, event)?;
        Some(controller.handle(&mut self.document, &self.store, &command))
    }

    fn on_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;

        let state = self.store.load();
        let cards = render_catalog(&mut self.document, &state);
        self.controller = DetailController::discover(&self.document);
        if let Some(controller) = &self.controller {
            controller.render(&mut self.document, status_of(&state, controller.slug()));
        }
        tracing::debug!(
            cards,
            detail = self.controller.as_ref().map(DetailController::slug),
            "Page ready"
        );
    }
}
