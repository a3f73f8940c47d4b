use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Primary-key generation strategy tagged onto the generated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdType {
    /// Database auto-increment.
    Auto,
    /// No declared strategy, follows whatever the table defines.
    None,
    /// Caller supplies the id before insert.
    Input,
    /// Generator-assigned numeric id.
    AssignId,
    /// Generator-assigned UUID.
    AssignUuid,
}
