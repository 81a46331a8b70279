//! Language switching over a parsed page.
//!
//! `LanguageSwitcher` drives the whole flow:
//!
//! - `initialize` runs once after parsing. It restores the persisted
//!   selection (or falls back to the configured default), syncs the page's
//!   selection control, and applies the language as plain text.
//! - `change_language` handles a new selection. It persists the code first,
//!   then applies it and re-syncs the control.
//!
//! Recoverable conditions degrade to warnings: a page without a control
//! still switches, and a failing store keeps the selection in memory for
//! the session.

use crate::apply::{apply_language, ApplyMode, ApplyOutcome};
use crate::config::SwitcherConfig;
use crate::control::{find_language_control, sync_control};
use crate::dom::Document;
use crate::error::SwitchError;
use crate::i18n::Language;
use crate::store::{FileStore, SelectionStore};
use indextree::NodeId;
use tracing::{debug, info, warn};

/// What `initialize` did: which language it settled on and how.
#[derive(Debug, Clone)]
pub struct InitReport {
    /// Code the page was initialized to
    pub language: String,

    /// Whether the code came from the store rather than the default
    pub restored_from_store: bool,

    /// Whether a selection control was found and synced
    pub control_synced: bool,

    /// Element counts from applying the language
    pub outcome: ApplyOutcome,
}

/// Drives language switching for one page against one selection store.
pub struct LanguageSwitcher<S: SelectionStore> {
    config: SwitcherConfig,
    store: S,
    current: String,
}

impl<S: SelectionStore> LanguageSwitcher<S> {
    pub fn new(config: SwitcherConfig, store: S) -> Self {
        let current = config.default_language.code().to_string();
        Self {
            config,
            store,
            current,
        }
    }

    /// Restore the persisted selection and apply it to a freshly parsed page.
    ///
    /// Runs the load-time flow once: read the store, fall back to the
    /// configured default when nothing usable is persisted, sync the page's
    /// control, and apply the language as plain text. The store is never
    /// written here.
    pub fn initialize(&mut self, document: &mut Document) -> InitReport {
        let control = match find_language_control(document) {
            Ok(control) => Some(control),
            Err(err) => {
                warn!("{}; skipping control sync", err);
                None
            }
        };
        self.initialize_inner(document, control)
    }

    /// Same as [`LanguageSwitcher::initialize`], with a caller-located control.
    pub fn initialize_with_control(
        &mut self,
        document: &mut Document,
        control: NodeId,
    ) -> InitReport {
        self.initialize_inner(document, Some(control))
    }

    fn initialize_inner(&mut self, document: &mut Document, control: Option<NodeId>) -> InitReport {
        let persisted = match self.store.load() {
            Ok(persisted) => persisted,
            Err(err) => {
                warn!("Failed to read persisted selection: {:#}", err);
                None
            }
        };

        let (code, restored) = match persisted {
            Some(code) if !code.is_empty() => {
                if self.config.strict_codes {
                    match Language::from_code(&code) {
                        Ok(language) => (language.code().to_string(), true),
                        Err(err) => {
                            warn!("Persisted selection unusable ({:#}); using default", err);
                            (self.config.default_language.code().to_string(), false)
                        }
                    }
                } else {
                    (code, true)
                }
            }
            _ => (self.config.default_language.code().to_string(), false),
        };

        let control_synced = match control {
            Some(control) => sync_control(document, control, &code),
            None => false,
        };

        let outcome = apply_language(document, &code, ApplyMode::Text);
        self.current = code;

        info!(
            "Initialized with '{}' ({}): {} elements replaced",
            self.current,
            if restored { "restored" } else { "default" },
            outcome.replaced
        );

        InitReport {
            language: self.current.clone(),
            restored_from_store: restored,
            control_synced,
            outcome,
        }
    }

    /// Switch the page to `code`, persisting the choice first.
    ///
    /// A store failure is logged and the selection kept in memory for this
    /// session. In strict mode an unknown code is rejected before anything
    /// is written.
    pub fn change_language(
        &mut self,
        document: &mut Document,
        code: &str,
        mode: ApplyMode,
    ) -> Result<ApplyOutcome, SwitchError> {
        if self.config.strict_codes && Language::from_code(code).is_err() {
            return Err(SwitchError::UnknownLanguage {
                code: code.to_string(),
            });
        }

        if let Err(err) = self.store.save(code) {
            warn!(
                "Failed to persist selection '{}' ({:#}); keeping it in memory",
                code, err
            );
        }

        let outcome = apply_language(document, code, mode);

        match find_language_control(document) {
            Ok(control) => {
                sync_control(document, control, code);
            }
            Err(_) => debug!("No language control to sync for '{}'", code),
        }

        self.current = code.to_string();
        info!(
            "Switched language to '{}': {} elements replaced",
            self.current, outcome.replaced
        );

        Ok(outcome)
    }

    /// Code of the language most recently applied (or the default).
    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl LanguageSwitcher<FileStore> {
    /// Build a switcher persisting to the configured state file.
    pub fn with_file_store(config: SwitcherConfig) -> Self {
        let store = FileStore::new(config.state_file.clone());
        Self::new(config, store)
    }
}
