use indexmap::IndexSet;

use crate::convert::{DefaultNameConvert, FileNameConverter, NameConvert, identity_file_name};
use crate::errors::{ConfigError, ConfigResult};
use crate::fields::FieldProvider;
use crate::fill::TableFill;
use crate::id::IdType;
use crate::naming::NamingStrategy;
use crate::strategy::StrategyConfig;

/// Entity rendering configuration.
///
/// Built once per generation run through [`EntityBuilder`], then handed
/// read-only to the rendering stage. Every field here is a knob for how the
/// template step writes entity structs; none of them touch the database or
/// the file system directly.
pub struct EntityConfig {
    name_convert: Box<dyn NameConvert>,
    super_class: Option<String>,
    super_entity_columns: IndexSet<String>,
    serial_version_uid: bool,
    column_constants: bool,
    chain_setters: bool,
    lombok_style: bool,
    boolean_strip_is_prefix: bool,
    field_annotations: bool,
    version_column_name: Option<String>,
    version_property_name: Option<String>,
    logic_delete_column_name: Option<String>,
    logic_delete_property_name: Option<String>,
    table_fills: Vec<TableFill>,
    naming: NamingStrategy,
    column_naming: Option<NamingStrategy>,
    active_record: bool,
    id_type: Option<IdType>,
    file_name_converter: FileNameConverter,
}

impl EntityConfig {
    pub fn builder() -> EntityBuilder {
        EntityBuilder::new(StrategyConfig::default())
    }

    pub fn name_convert(&self) -> &dyn NameConvert {
        self.name_convert.as_ref()
    }

    pub fn super_class(&self) -> Option<&str> {
        self.super_class.as_deref()
    }

    /// Explicitly configured inherited columns, in insertion order.
    pub fn super_entity_columns(&self) -> &IndexSet<String> {
        &self.super_entity_columns
    }

    pub fn serial_version_uid(&self) -> bool {
        self.serial_version_uid
    }

    pub fn column_constants(&self) -> bool {
        self.column_constants
    }

    pub fn chain_setters(&self) -> bool {
        self.chain_setters
    }

    pub fn lombok_style(&self) -> bool {
        self.lombok_style
    }

    pub fn boolean_strip_is_prefix(&self) -> bool {
        self.boolean_strip_is_prefix
    }

    pub fn field_annotations(&self) -> bool {
        self.field_annotations
    }

    pub fn version_column_name(&self) -> Option<&str> {
        self.version_column_name.as_deref()
    }

    pub fn version_property_name(&self) -> Option<&str> {
        self.version_property_name.as_deref()
    }

    pub fn logic_delete_column_name(&self) -> Option<&str> {
        self.logic_delete_column_name.as_deref()
    }

    pub fn logic_delete_property_name(&self) -> Option<&str> {
        self.logic_delete_property_name.as_deref()
    }

    pub fn table_fills(&self) -> &[TableFill] {
        &self.table_fills
    }

    pub fn naming(&self) -> NamingStrategy {
        self.naming
    }

    /// Column naming strategy, falling back to the table strategy when unset.
    pub fn column_naming(&self) -> NamingStrategy {
        self.column_naming.unwrap_or(self.naming)
    }

    pub fn active_record(&self) -> bool {
        self.active_record
    }

    pub fn id_type(&self) -> Option<IdType> {
        self.id_type
    }

    pub fn file_name_converter(&self) -> &FileNameConverter {
        &self.file_name_converter
    }

    pub fn convert_file_name(&self, entity_name: &str) -> String {
        (self.file_name_converter)(entity_name)
    }

    /// Whether a column belongs to the configured base type. Comparison
    /// ignores ASCII case since several databases report identifiers
    /// case-folded.
    pub fn match_super_entity_columns(&self, column_name: &str) -> bool {
        self.super_entity_columns
            .iter()
            .any(|column| column.eq_ignore_ascii_case(column_name))
    }

    /// Full inherited column set: the explicit columns merged with the
    /// fields of `super_class` as reported by the provider. A per-field
    /// column override wins; otherwise the column naming strategy is applied
    /// to the field name. Provider failure surfaces as an error.
    pub fn resolve_super_entity_columns(
        &self,
        provider: &dyn FieldProvider,
    ) -> ConfigResult<IndexSet<String>> {
        let mut columns = self.super_entity_columns.clone();
        if let Some(super_class) = &self.super_class {
            for field in provider.fields(super_class)? {
                let column = field
                    .column
                    .unwrap_or_else(|| self.column_naming().apply(&field.name));
                columns.insert(column);
            }
        }
        Ok(columns)
    }

    /// Lenient variant of [`resolve_super_entity_columns`]: a provider
    /// failure degrades to the explicitly configured set, with the failure
    /// logged rather than discarded.
    ///
    /// [`resolve_super_entity_columns`]: EntityConfig::resolve_super_entity_columns
    pub fn super_entity_columns_or_explicit(
        &self,
        provider: &dyn FieldProvider,
    ) -> IndexSet<String> {
        match self.resolve_super_entity_columns(provider) {
            Ok(columns) => columns,
            Err(err) => {
                tracing::warn!(
                    super_class = self.super_class.as_deref().unwrap_or(""),
                    error = %err,
                    "falling back to explicit super entity columns"
                );
                self.super_entity_columns.clone()
            }
        }
    }
}

/// Fluent builder for [`EntityConfig`].
pub struct EntityBuilder {
    strategy: StrategyConfig,
    name_convert: Option<Box<dyn NameConvert>>,
    super_class: Option<String>,
    super_entity_columns: IndexSet<String>,
    serial_version_uid: bool,
    column_constants: bool,
    chain_setters: bool,
    lombok_style: bool,
    boolean_strip_is_prefix: bool,
    field_annotations: bool,
    version_column_name: Option<String>,
    version_property_name: Option<String>,
    logic_delete_column_name: Option<String>,
    logic_delete_property_name: Option<String>,
    table_fills: Vec<TableFill>,
    naming: NamingStrategy,
    column_naming: Option<NamingStrategy>,
    active_record: bool,
    id_type: Option<IdType>,
    file_name_converter: Option<FileNameConverter>,
}

impl EntityBuilder {
    pub fn new(strategy: StrategyConfig) -> Self {
        Self {
            strategy,
            name_convert: None,
            super_class: None,
            super_entity_columns: IndexSet::new(),
            serial_version_uid: false,
            column_constants: false,
            chain_setters: false,
            lombok_style: false,
            boolean_strip_is_prefix: false,
            field_annotations: false,
            version_column_name: None,
            version_property_name: None,
            logic_delete_column_name: None,
            logic_delete_property_name: None,
            table_fills: Vec::new(),
            naming: NamingStrategy::default(),
            column_naming: None,
            active_record: false,
            id_type: None,
            file_name_converter: None,
        }
    }

    pub fn name_convert(mut self, convert: impl NameConvert + 'static) -> Self {
        self.name_convert = Some(Box::new(convert));
        self
    }

    pub fn super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }

    pub fn serial_version_uid(mut self, enable: bool) -> Self {
        self.serial_version_uid = enable;
        self
    }

    pub fn column_constants(mut self, enable: bool) -> Self {
        self.column_constants = enable;
        self
    }

    pub fn chain_setters(mut self, enable: bool) -> Self {
        self.chain_setters = enable;
        self
    }

    pub fn lombok_style(mut self, enable: bool) -> Self {
        self.lombok_style = enable;
        self
    }

    pub fn boolean_strip_is_prefix(mut self, enable: bool) -> Self {
        self.boolean_strip_is_prefix = enable;
        self
    }

    pub fn field_annotations(mut self, enable: bool) -> Self {
        self.field_annotations = enable;
        self
    }

    pub fn version_column_name(mut self, name: impl Into<String>) -> Self {
        self.version_column_name = Some(name.into());
        self
    }

    pub fn version_property_name(mut self, name: impl Into<String>) -> Self {
        self.version_property_name = Some(name.into());
        self
    }

    pub fn logic_delete_column_name(mut self, name: impl Into<String>) -> Self {
        self.logic_delete_column_name = Some(name.into());
        self
    }

    pub fn logic_delete_property_name(mut self, name: impl Into<String>) -> Self {
        self.logic_delete_property_name = Some(name.into());
        self
    }

    pub fn naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    pub fn column_naming(mut self, naming: NamingStrategy) -> Self {
        self.column_naming = Some(naming);
        self
    }

    /// Append inherited column names; never replaces earlier additions.
    pub fn add_super_entity_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.super_entity_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn add_table_fill(mut self, fill: TableFill) -> Self {
        self.table_fills.push(fill);
        self
    }

    /// Append fill directives; never replaces earlier additions.
    pub fn add_table_fills(mut self, fills: impl IntoIterator<Item = TableFill>) -> Self {
        self.table_fills.extend(fills);
        self
    }

    pub fn active_record(mut self, enable: bool) -> Self {
        self.active_record = enable;
        self
    }

    pub fn id_type(mut self, id_type: IdType) -> Self {
        self.id_type = Some(id_type);
        self
    }

    pub fn convert_file_name<F>(mut self, converter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.file_name_converter = Some(Box::new(converter));
        self
    }

    /// File names from a pattern, `{}` standing in for the entity name.
    pub fn format_file_name(self, pattern: &str) -> ConfigResult<Self> {
        if !pattern.contains("{}") {
            return Err(ConfigError::InvalidPattern(pattern.to_string()));
        }
        let pattern = pattern.to_string();
        Ok(self.convert_file_name(move |entity_name| pattern.replace("{}", entity_name)))
    }

    pub fn build(self) -> EntityConfig {
        let column_naming = self.column_naming.unwrap_or(self.naming);
        let name_convert = self.name_convert.unwrap_or_else(|| {
            Box::new(DefaultNameConvert::new(
                self.strategy,
                self.naming,
                column_naming,
            ))
        });
        EntityConfig {
            name_convert,
            super_class: self.super_class,
            super_entity_columns: self.super_entity_columns,
            serial_version_uid: self.serial_version_uid,
            column_constants: self.column_constants,
            chain_setters: self.chain_setters,
            lombok_style: self.lombok_style,
            boolean_strip_is_prefix: self.boolean_strip_is_prefix,
            field_annotations: self.field_annotations,
            version_column_name: self.version_column_name,
            version_property_name: self.version_property_name,
            logic_delete_column_name: self.logic_delete_column_name,
            logic_delete_property_name: self.logic_delete_property_name,
            table_fills: self.table_fills,
            naming: self.naming,
            column_naming: self.column_naming,
            active_record: self.active_record,
            id_type: self.id_type,
            file_name_converter: self
                .file_name_converter
                .unwrap_or_else(identity_file_name),
        }
    }
}
