use heck::ToUpperCamelCase;

use crate::naming::{NamingStrategy, capital_first, strip_prefixes};
use crate::strategy::StrategyConfig;

/// Maps an entity name to the base name of the file it is written to.
pub type FileNameConverter = Box<dyn Fn(&str) -> String + Send + Sync>;

pub(crate) fn identity_file_name() -> FileNameConverter {
    Box::new(|entity_name| entity_name.to_string())
}

/// Maps raw table metadata to generated identifier names.
pub trait NameConvert: Send + Sync {
    /// Type name generated for a table.
    fn entity_name(&self, table_name: &str) -> String;

    /// Field name generated for a column.
    fn property_name(&self, column_name: &str) -> String;
}

/// Prefix-stripping converter driven by the parent strategy config.
///
/// Under `SnakeCase` a table `tbl_user_account` (with `tbl_` configured as a
/// table prefix) becomes `UserAccount`; under `NoChange` only the first
/// letter is capitalized.
#[derive(Debug, Clone)]
pub struct DefaultNameConvert {
    strategy: StrategyConfig,
    naming: NamingStrategy,
    column_naming: NamingStrategy,
}

impl DefaultNameConvert {
    pub fn new(
        strategy: StrategyConfig,
        naming: NamingStrategy,
        column_naming: NamingStrategy,
    ) -> Self {
        Self {
            strategy,
            naming,
            column_naming,
        }
    }
}

impl NameConvert for DefaultNameConvert {
    fn entity_name(&self, table_name: &str) -> String {
        let base = strip_prefixes(table_name, &self.strategy.table_prefixes);
        match self.naming {
            NamingStrategy::NoChange => capital_first(&base),
            NamingStrategy::SnakeCase => base.to_upper_camel_case(),
        }
    }

    fn property_name(&self, column_name: &str) -> String {
        let base = strip_prefixes(column_name, &self.strategy.field_prefixes);
        self.column_naming.apply(&base)
    }
}
