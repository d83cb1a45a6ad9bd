//! Template context derivation
//!
//! The context is a flat map of uppercase keys to string or boolean values,
//! derived once per generation run from [`ProjectSettings`] and read-only for
//! the rest of the run.

use std::collections::BTreeMap;

use crate::models::ProjectSettings;

/// A single context value: strings feed placeholders, flags feed conditionals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// String value, substituted into `{{KEY}}` placeholders
    Str(String),
    /// Boolean flag, only consulted by `{{#if KEY}}` conditionals
    Flag(bool),
}

impl ContextValue {
    /// Truthiness used by conditional blocks: non-empty string or `true`
    pub fn is_truthy(&self) -> bool {
        match self {
            ContextValue::Str(s) => !s.is_empty(),
            ContextValue::Flag(b) => *b,
        }
    }
}

/// Flat key/value environment for template rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<String, ContextValue>,
}

impl TemplateContext {
    /// Create an empty context (tests and callers that set values manually)
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the context from project settings
    ///
    /// Pure function of its input: direct string fields pass through under
    /// their uppercase names, `HAS_CUSTOM_FIXTURE` is true when the fixture
    /// import path is non-empty and not the literal `"none"`, and
    /// `NO_CUSTOM_FIXTURE` is always its negation.
    ///
    /// `PAGE_FACTORY_IMPORT`, `HAS_PAGE_FACTORY`, and `NO_PAGE_FACTORY` are
    /// reserved for a page-factory capability that is not yet wired to any
    /// setting; they stay at their fixed defaults.
    pub fn from_settings(settings: &ProjectSettings) -> Self {
        let has_custom_fixture =
            !settings.fixture_import_path.is_empty() && settings.fixture_import_path != "none";

        let mut ctx = Self::new();
        ctx.set_str("PROJECT_NAME", &settings.project_name);
        ctx.set_str("BASE_URL", &settings.base_url);
        ctx.set_str("FIXTURE_IMPORT_PATH", &settings.fixture_import_path);
        ctx.set_str("PAGE_OBJECTS_DIR", &settings.page_objects_dir);
        ctx.set_str("TEST_DIR", &settings.test_dir);
        ctx.set_flag("HAS_CUSTOM_FIXTURE", has_custom_fixture);
        ctx.set_flag("NO_CUSTOM_FIXTURE", !has_custom_fixture);
        ctx.set_str("PAGE_FACTORY_IMPORT", "");
        ctx.set_flag("HAS_PAGE_FACTORY", false);
        ctx.set_flag("NO_PAGE_FACTORY", true);
        ctx
    }

    /// Set a string value
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), ContextValue::Str(value.into()));
    }

    /// Set a boolean flag
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), ContextValue::Flag(value));
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }
}
