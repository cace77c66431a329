//! Draft cache for in-progress wizard answers.
//!
//! Entries live under fixed keys: `form1`..`form5` per step, `result` for the
//! merged answers written right before submit, and `id` for the principal
//! text set by the sign-in layer. `user_id` remembers the id the backend
//! assigned on account creation. Nothing here is a source of truth.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};

use crate::error::DraftError;
use crate::wizard::{steps::draft_key, Answers};

pub const MAX_DRAFT_STEPS: usize = 5;
pub const RESULT_KEY: &str = "result";
pub const PRINCIPAL_KEY: &str = "id";
pub const USER_ID_KEY: &str = "user_id";

/// Raw string key-value storage.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: String) -> Result<(), DraftError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: String) -> Result<(), DraftError> {
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|e| DraftError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: String) -> Result<(), DraftError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view over the draft keys.
#[derive(Debug, Default)]
pub struct Drafts<S> {
    store: S,
}

impl<S: KeyValueStore> Drafts<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self, key: &str) -> Option<Answers> {
        let raw = self.store.read(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, key: &str, answers: &Answers) -> Result<(), DraftError> {
        let json = serde_json::to_string(answers)?;
        self.store.write(key, json)
    }

    pub fn save_step(&self, index: usize, answers: &Answers) -> Result<(), DraftError> {
        if index >= MAX_DRAFT_STEPS {
            return Ok(());
        }
        self.save(&draft_key(index), answers)
    }

    pub fn load_step(&self, index: usize) -> Option<Answers> {
        self.load(&draft_key(index))
    }

    /// Every saved step merged in step order; unreadable entries are skipped.
    pub fn load_all(&self) -> Answers {
        let mut merged = Answers::new();
        for index in 0..MAX_DRAFT_STEPS {
            if let Some(step) = self.load_step(index) {
                merged.merge(step);
            }
        }
        merged
    }

    /// Answers to resume from: the step drafts, overlaid with the merged
    /// answers of a submit that never completed.
    pub fn restore(&self) -> Answers {
        let mut answers = self.load_all();
        if let Some(pending) = self.result() {
            answers.merge(pending);
        }
        answers
    }

    pub fn save_result(&self, answers: &Answers) -> Result<(), DraftError> {
        self.save(RESULT_KEY, answers)
    }

    pub fn result(&self) -> Option<Answers> {
        self.load(RESULT_KEY)
    }

    /// Principal text as stored by the sign-in layer.
    pub fn principal(&self) -> Option<String> {
        self.store
            .read(PRINCIPAL_KEY)
            .map(|p| p.trim().trim_matches('"').to_string())
            .filter(|p| !p.is_empty())
    }

    pub fn save_user_id(&self, user_id: &str) -> Result<(), DraftError> {
        self.store.write(USER_ID_KEY, user_id.to_string())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.read(USER_ID_KEY).filter(|id| !id.trim().is_empty())
    }

    /// Drops all drafts. The principal and user id stay.
    pub fn clear(&self) {
        for index in 0..MAX_DRAFT_STEPS {
            self.store.remove(&draft_key(index));
        }
        self.store.remove(RESULT_KEY);
    }
}

impl Drafts<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}
