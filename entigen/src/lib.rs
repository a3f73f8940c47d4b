mod convert;
mod entity;
mod errors;
mod fields;
mod fill;
mod id;
mod naming;
mod strategy;

pub use convert::{DefaultNameConvert, FileNameConverter, NameConvert};
pub use entity::{EntityBuilder, EntityConfig};
pub use errors::{ConfigError, ConfigResult};
pub use fields::{FieldDef, FieldProvider, StaticFieldProvider};
pub use fill::{FieldFill, TableFill};
pub use id::IdType;
pub use naming::{NamingStrategy, capital_first, strip_is_prefix, strip_prefixes};
pub use strategy::StrategyConfig;
