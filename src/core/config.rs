//! The bot configuration document root.

use serde::{Deserialize, Serialize};

use crate::core::service::ServiceRecord;

/// Top-level shape of a `.bot` document.
///
/// Constructed in one bulk step, either by deserializing a document (see
/// [`loader`](crate::core::loader)) or by assembling records in memory.
/// `secret_key` is an opaque reference stored in the document itself; it
/// is never used as the decryption secret, which callers supply
/// separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Service records in document order. Order is preserved and decides
    /// ambiguous lookups (first match wins), but carries no other
    /// meaning.
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}
