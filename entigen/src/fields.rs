use indexmap::IndexMap;

use crate::errors::{ConfigError, ConfigResult};

/// One field of a base type, as reported by a [`FieldProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    /// Explicit column override; wins over the naming strategy.
    pub column: Option<String>,
    /// Carried through for the rendering stage (id annotations, key
    /// constants); column resolution itself does not consult it.
    pub primary_key: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
            primary_key: false,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// Resolves a type path to its field-to-column mappings.
///
/// The generator core never introspects types itself; whoever drives it
/// supplies a provider backed by whatever source it has (a hand-written
/// registry, a parsed source tree, a schema dump).
pub trait FieldProvider {
    fn fields(&self, type_path: &str) -> ConfigResult<Vec<FieldDef>>;
}

/// Map-backed provider for callers that register base types up front.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldProvider {
    types: IndexMap<String, Vec<FieldDef>>,
}

impl StaticFieldProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, type_path: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        self.types.insert(type_path.into(), fields);
        self
    }
}

impl FieldProvider for StaticFieldProvider {
    fn fields(&self, type_path: &str) -> ConfigResult<Vec<FieldDef>> {
        self.types
            .get(type_path)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownType(type_path.to_string()))
    }
}
