use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// When the generated entity auto-populates a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldFill {
    #[default]
    Default,
    Insert,
    Update,
    InsertUpdate,
}

/// A directive to auto-populate one field at insert/update time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFill {
    pub field_name: String,
    pub fill: FieldFill,
}

impl TableFill {
    pub fn new(field_name: impl Into<String>, fill: FieldFill) -> Self {
        Self {
            field_name: field_name.into(),
            fill,
        }
    }
}
