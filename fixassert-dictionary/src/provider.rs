/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dictionary resolution by BeginString and ApplVerID.
//!
//! A [`DictionaryProvider`] resolves a version identifier in three steps:
//! dictionaries registered on the provider itself, then its parent, then the
//! embedded dictionaries. [`DictionaryProvider::scoped`] creates a provider
//! whose registrations stay local while still seeing the process-wide ones.

use crate::builtin;
use crate::schema::{Dictionary, Version, begin_string_for_appl_ver_id};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{trace, warn};

/// Returns the embedded dictionary for `version`.
///
/// Dictionaries are built once and shared.
#[must_use]
pub fn builtin_dictionary(version: Version) -> Arc<Dictionary> {
    static BUILTIN: OnceLock<HashMap<Version, Arc<Dictionary>>> = OnceLock::new();
    let all = BUILTIN.get_or_init(|| {
        Version::ALL
            .into_iter()
            .map(|v| (v, Arc::new(builtin::build(v))))
            .collect()
    });
    match all.get(&version) {
        Some(dictionary) => Arc::clone(dictionary),
        None => Arc::new(builtin::build(version)),
    }
}

fn global_provider_arc() -> &'static Arc<DictionaryProvider> {
    static GLOBAL: OnceLock<Arc<DictionaryProvider>> = OnceLock::new();
    GLOBAL.get_or_init(|| Arc::new(DictionaryProvider::new()))
}

/// Registry of data dictionaries keyed by version identifier.
///
/// A clone copies its own registrations and shares its parent, so adding a
/// dictionary to a clone never affects the original.
#[derive(Debug, Default)]
pub struct DictionaryProvider {
    registered: RwLock<HashMap<String, Arc<Dictionary>>>,
    parent: Option<Arc<DictionaryProvider>>,
}

impl Clone for DictionaryProvider {
    fn clone(&self) -> Self {
        Self {
            registered: RwLock::new(self.registered.read().clone()),
            parent: self.parent.clone(),
        }
    }
}

impl DictionaryProvider {
    /// Creates an empty provider backed only by the embedded dictionaries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide provider.
    #[must_use]
    pub fn global() -> &'static DictionaryProvider {
        global_provider_arc()
    }

    /// Creates a provider layered over the process-wide one.
    #[must_use]
    pub fn scoped() -> Self {
        Self::layered(Arc::clone(global_provider_arc()))
    }

    /// Creates a provider layered over `parent`.
    #[must_use]
    pub fn with_parent(parent: DictionaryProvider) -> Self {
        Self::layered(Arc::new(parent))
    }

    fn layered(parent: Arc<DictionaryProvider>) -> Self {
        Self {
            registered: RwLock::default(),
            parent: Some(parent),
        }
    }

    /// Registers `dictionary` under `begin_string`, replacing any earlier one.
    ///
    /// # Arguments
    /// * `begin_string` - A BeginString or version identifier such as `"FIX.5.0SP2"`
    /// * `dictionary` - The dictionary to use for it
    pub fn add_dictionary(&self, begin_string: impl Into<String>, dictionary: Dictionary) {
        let begin_string = begin_string.into();
        trace!(begin_string = %begin_string, "registering dictionary");
        self.registered
            .write()
            .insert(begin_string, Arc::new(dictionary));
    }

    /// Returns true if a dictionary was registered for `begin_string` on this
    /// provider or a parent.
    #[must_use]
    pub fn is_registered(&self, begin_string: &str) -> bool {
        self.registered.read().contains_key(begin_string)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.is_registered(begin_string))
    }

    fn lookup(&self, begin_string: &str) -> Option<Arc<Dictionary>> {
        if let Some(dictionary) = self.registered.read().get(begin_string) {
            return Some(Arc::clone(dictionary));
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.lookup(begin_string))
    }

    /// Resolves the dictionary for a BeginString or version identifier.
    ///
    /// # Returns
    /// The registered dictionary if any, otherwise the embedded one, or
    /// `None` when the identifier names no known version.
    #[must_use]
    pub fn session_dictionary(&self, begin_string: &str) -> Option<Arc<Dictionary>> {
        if let Some(dictionary) = self.lookup(begin_string) {
            trace!(begin_string, "resolved registered dictionary");
            return Some(dictionary);
        }
        match Version::from_identifier(begin_string) {
            Some(version) => {
                trace!(begin_string, "resolved embedded dictionary");
                Some(builtin_dictionary(version))
            }
            None => {
                warn!(begin_string, "no dictionary for version");
                None
            }
        }
    }

    /// Resolves the application dictionary for an ApplVerID (tag 1128) value.
    #[must_use]
    pub fn application_dictionary(&self, appl_ver_id: &str) -> Option<Arc<Dictionary>> {
        match begin_string_for_appl_ver_id(appl_ver_id) {
            Some(identifier) => self.session_dictionary(identifier),
            None => {
                warn!(appl_ver_id, "unknown ApplVerID");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolution() {
        let provider = DictionaryProvider::new();
        let dict = provider.session_dictionary("FIX.4.2").unwrap();
        assert_eq!(dict.begin_string(), "FIX.4.2");
        assert!(provider.session_dictionary("FIX.9.9").is_none());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin_dictionary(Version::Fix44);
        let b = builtin_dictionary(Version::Fix44);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_application_dictionary() {
        let provider = DictionaryProvider::new();
        let dict = provider.application_dictionary("8").unwrap();
        assert_eq!(dict.version(), Some(Version::Fix50Sp1));
        assert!(provider.application_dictionary("0").is_none());
        assert!(provider.application_dictionary("x").is_none());
    }

    #[test]
    fn test_registered_overrides_builtin() {
        let provider = DictionaryProvider::new();
        provider.add_dictionary("FIX.4.4", Dictionary::new("FIX.4.4"));
        let dict = provider.session_dictionary("FIX.4.4").unwrap();
        assert!(dict.get_field(35).is_none());
        assert!(provider.is_registered("FIX.4.4"));
    }

    #[test]
    fn test_custom_begin_string() {
        let provider = DictionaryProvider::new();
        provider.add_dictionary("FIX.CUSTOM", Dictionary::new("FIX.CUSTOM"));
        assert!(provider.session_dictionary("FIX.CUSTOM").is_some());
    }

    #[test]
    fn test_scoped_registration_stays_local() {
        let parent = DictionaryProvider::new();
        parent.add_dictionary("FIX.P", Dictionary::new("FIX.P"));
        let child = DictionaryProvider::with_parent(parent.clone());
        child.add_dictionary("FIX.C", Dictionary::new("FIX.C"));

        assert!(child.session_dictionary("FIX.P").is_some());
        assert!(child.session_dictionary("FIX.C").is_some());
        assert!(parent.session_dictionary("FIX.C").is_none());
    }

    #[test]
    fn test_clone_keeps_registrations_apart() {
        let original = DictionaryProvider::scoped();
        original.add_dictionary("FIX.O", Dictionary::new("FIX.O"));
        let copy = original.clone();
        copy.add_dictionary("FIX.K", Dictionary::new("FIX.K"));

        assert!(copy.is_registered("FIX.O"));
        assert!(copy.is_registered("FIX.K"));
        assert!(!original.is_registered("FIX.K"));
    }

    #[test]
    fn test_scoped_sees_later_global_registrations() {
        let scoped = DictionaryProvider::scoped();
        DictionaryProvider::global().add_dictionary("FIX.GLOBAL.LATE", Dictionary::new("FIX.GLOBAL.LATE"));
        assert!(scoped.is_registered("FIX.GLOBAL.LATE"));
    }
}
