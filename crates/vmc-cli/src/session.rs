//! Status operations over the configured storage and catalog.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use vmc_core::{set_status, status_of};
use vmc_model::Status;
use vmc_page::dom::{CHECKOUT_CLASS, TOGGLE_ATTR};
use vmc_page::{
    ControlStyle, Event, Machine, Outcome, Page, Trigger, catalog_section, detail_section,
};
use vmc_persistence::{FileBackend, PersistenceError, StateStore};

use crate::config::{Config, load_catalog};

/// One line of the status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub slug: String,
    /// Catalog name, when the machine is in the catalog.
    pub name: Option<String>,
    pub status: Status,
    /// Day the status was set; `None` for available machines.
    pub since: Option<NaiveDate>,
}

/// Configured storage and catalog.
#[derive(Debug)]
pub struct Session {
    config: Config,
    machines: Vec<Machine>,
    store: StateStore<FileBackend>,
}

impl Session {
    /// Open the storage and read the catalog named by `config`.
    pub fn open(config: Config) -> Result<Self> {
        let machines = match &config.catalog.path {
            Some(path) => load_catalog(path)?,
            None => Vec::new(),
        };
        let backend = FileBackend::new(config.storage_path());
        tracing::debug!(storage = %backend.path().display(), machines = machines.len(), "Opened session");
        let store = StateStore::with_key(backend, config.storage.key.clone());
        Ok(Self {
            config,
            machines,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn store(&self) -> &StateStore<FileBackend> {
        &self.store
    }

    /// Catalog entry for `slug`, or a stand-in named after the slug.
    pub fn machine(&self, slug: &str) -> Machine {
        self.machines
            .iter()
            .find(|machine| machine.slug == slug)
            .cloned()
            .unwrap_or_else(|| Machine::new(slug, slug))
    }

    pub fn status(&self, slug: &str) -> Status {
        status_of(&self.store.load(), slug)
    }

    /// Catalog machines in catalog order, then stored machines missing
    /// from the catalog in slug order.
    pub fn rows(&self) -> Vec<StatusRow> {
        let state = self.store.load();
        let mut rows: Vec<StatusRow> = self
            .machines
            .iter()
            .map(|machine| {
                let entry = state.get(&machine.slug);
                StatusRow {
                    slug: machine.slug.clone(),
                    name: Some(machine.name.clone()),
                    status: status_of(&state, &machine.slug),
                    since: entry.map(|entry| entry.date()),
                }
            })
            .collect();
        for (slug, entry) in &state {
            if self.machines.iter().any(|machine| &machine.slug == slug) {
                continue;
            }
            rows.push(StatusRow {
                slug: slug.clone(),
                name: None,
                status: entry.status(),
                since: Some(entry.date()),
            });
        }
        rows
    }

    /// Press a control on `slug`'s detail page, exactly as a visitor would.
    pub fn press(&self, slug: &str, trigger: Trigger) -> Result<Outcome> {
        let style = match trigger {
            Trigger::Toggle(_) => ControlStyle::Toggles,
            Trigger::LegacyCheckout => ControlStyle::Legacy,
        };
        let machine = self.machine(slug);
        let current = self.status(slug);
        let document = vmc_page::page([detail_section(&machine, current, style)]);
        let mut detail = Page::boot(document, self.store.clone());

        let target = match trigger {
            Trigger::Toggle(action) => detail
                .document()
                .select(|e| e.attr(TOGGLE_ATTR) == Some(action.toggle_kind()))
                .into_iter()
                .next(),
            Trigger::LegacyCheckout => detail
                .document()
                .select_class(CHECKOUT_CLASS)
                .into_iter()
                .next(),
        }
        .context("detail page has no matching control")?;

        detail
            .dispatch(&Event::Click(target))
            .context("control did not produce a command")
    }

    /// Set a status directly, bypassing the transition rules.
    pub fn set(&self, slug: &str, status: Status) -> Result<()> {
        let mut state = self.store.load();
        set_status(&mut state, slug, status);
        self.store
            .save(&state)
            .map_err(|e| storage_error(&e))
            .with_context(|| format!("save status of {slug}"))?;
        tracing::info!(slug, %status, "Status set");
        Ok(())
    }

    /// HTML of the catalog page after projection.
    pub fn render_catalog(&self) -> String {
        let state = self.store.load();
        let document =
            vmc_page::page([catalog_section(&self.machines, |slug| status_of(&state, slug))]);
        Page::boot(document, self.store.clone())
            .into_document()
            .to_html()
    }

    /// HTML of `slug`'s detail page after projection.
    pub fn render_detail(&self, slug: &str, style: ControlStyle) -> String {
        let document = vmc_page::page([detail_section(
            &self.machine(slug),
            self.status(slug),
            style,
        )]);
        Page::boot(document, self.store.clone())
            .into_document()
            .to_html()
    }

    pub fn clear(&self) -> Result<()> {
        self.store
            .clear()
            .map_err(|e| storage_error(&e))
            .context("clear stored statuses")
    }
}

fn storage_error(error: &PersistenceError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{} {}", error.user_message(), hint),
        None => anyhow!("{}", error.user_message()),
    }
}
