use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How raw table and column names map to generated identifiers.
///
/// `SnakeCase` normalizes whatever casing the database reports into
/// snake_case; `NoChange` keeps names exactly as they arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NamingStrategy {
    #[default]
    NoChange,
    SnakeCase,
}

impl NamingStrategy {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            NamingStrategy::NoChange => raw.to_string(),
            NamingStrategy::SnakeCase => raw.to_snake_case(),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capital_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Remove the first matching prefix from a raw name. Prefix comparison is
/// case-insensitive since most databases report identifiers case-folded.
pub fn strip_prefixes(raw: &str, prefixes: &[String]) -> String {
    for prefix in prefixes {
        if let Some(head) = raw.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return raw[prefix.len()..].to_string();
            }
        }
    }
    raw.to_string()
}

/// Drop a leading `is_` from a boolean column name, e.g. `is_active` maps
/// to the `active` property when the strip flag is enabled.
pub fn strip_is_prefix(name: &str) -> String {
    match name.get(..3) {
        Some(head) if head.eq_ignore_ascii_case("is_") => name[3..].to_string(),
        _ => name.to_string(),
    }
}
