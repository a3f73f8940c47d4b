use serde::{Deserialize, Serialize};

/// Parent strategy configuration shared by the per-kind generator configs.
///
/// Table prefixes are stripped before a table name becomes an entity name;
/// field prefixes are stripped before a column name becomes a property name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub table_prefixes: Vec<String>,
    pub field_prefixes: Vec<String>,
}

impl StrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn add_field_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }
}
