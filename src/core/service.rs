//! Service records and the sensitive-field table.
//!
//! A service record is one entry in a bot configuration: a required type
//! discriminator, optional `name`/`id`, and a flat map of additional
//! string properties. Sensitive properties (API keys, app passwords) are
//! stored encrypted and decrypted in place, at most once per record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher;

/// The five recognized service type discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Endpoint,
    AzureBotService,
    Luis,
    QnaMaker,
    Dispatch,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Endpoint,
        ServiceKind::AzureBotService,
        ServiceKind::Luis,
        ServiceKind::QnaMaker,
        ServiceKind::Dispatch,
    ];

    /// The discriminator string as it appears in `.bot` documents.
    pub fn discriminator(self) -> &'static str {
        match self {
            ServiceKind::Endpoint => "endpoint",
            ServiceKind::AzureBotService => "abs",
            ServiceKind::Luis => "luis",
            ServiceKind::QnaMaker => "qna",
            ServiceKind::Dispatch => "dispatch",
        }
    }

    /// Parse a discriminator, case-insensitively.
    ///
    /// Returns `None` for anything outside the five recognized types.
    pub fn parse(s: &str) -> Option<ServiceKind> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.discriminator().eq_ignore_ascii_case(s))
    }

    /// Property names stored encrypted for this service kind.
    ///
    /// Field sets sourced from the MSBot CLI, which produces the
    /// ciphertext this crate decrypts.
    pub fn sensitive_fields(self) -> &'static [&'static str] {
        match self {
            ServiceKind::Endpoint => &["appPassword"],
            ServiceKind::AzureBotService => &["appPassword"],
            ServiceKind::Luis => &["authoringKey", "subscriptionKey"],
            ServiceKind::QnaMaker => &["subscriptionKey"],
            ServiceKind::Dispatch => &["authoringKey", "subscriptionKey"],
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// One configuration entry describing an external integration.
///
/// Records with unrecognized `type` strings are legal to store and
/// round-trip through serialization; they just cannot be resolved through
/// the typed lookup API and have no sensitive fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Type discriminator. Immutable through the property operations.
    #[serde(rename = "type")]
    service_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Type-specific and extension properties (`appId`, `appPassword`,
    /// `subscriptionKey`, ...), keyed exactly as they appear in the
    /// document.
    #[serde(flatten)]
    properties: BTreeMap<String, String>,

    /// In-memory only: true once the decryption pass has run. Never
    /// persisted, so records always reload as undecrypted ciphertext.
    #[serde(skip)]
    decrypted: bool,
}

impl ServiceRecord {
    pub fn new(service_type: impl Into<String>) -> Self {
        ServiceRecord {
            service_type: service_type.into(),
            name: None,
            id: None,
            properties: BTreeMap::new(),
            decrypted: false,
        }
    }

    /// The raw type discriminator as stored in the document.
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// The recognized kind, or `None` for unrecognized discriminators.
    pub fn kind(&self) -> Option<ServiceKind> {
        ServiceKind::parse(&self.service_type)
    }

    /// Whether the decryption pass has run on this record.
    pub fn is_decrypted(&self) -> bool {
        self.decrypted
    }

    /// Look up a field by its document name (`"name"`, `"id"`, or any
    /// property key).
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(&self.service_type),
            "name" => self.name.as_deref(),
            "id" => self.id.as_deref(),
            _ => self.properties.get(field).map(String::as_str),
        }
    }

    /// Extension and type-specific properties, excluding `type`, `name`,
    /// and `id`.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Set a named field.
    ///
    /// Returns `false` only for the immutable `type` discriminator;
    /// `name`, `id`, and arbitrary extension properties all succeed, so
    /// batch property-setting can continue past individual refusals.
    pub fn add(&mut self, field: &str, value: impl Into<String>) -> bool {
        match field {
            "type" => false,
            "name" => {
                self.name = Some(value.into());
                true
            }
            "id" => {
                self.id = Some(value.into());
                true
            }
            _ => {
                self.properties.insert(field.to_string(), value.into());
                true
            }
        }
    }

    /// Clear a named field.
    ///
    /// Same contract as [`add`](Self::add): `false` only for `type`.
    /// Removing an absent field succeeds.
    pub fn remove(&mut self, field: &str) -> bool {
        match field {
            "type" => false,
            "name" => {
                self.name = None;
                true
            }
            "id" => {
                self.id = None;
                true
            }
            _ => {
                self.properties.remove(field);
                true
            }
        }
    }

    /// Decrypt this record's sensitive fields in place, at most once.
    ///
    /// With no secret the record is returned untouched and the pass
    /// remains available for a later caller that has one. Otherwise every
    /// sensitive field present on the record is run through the cipher
    /// (failures keep the original value, see [`cipher::decrypt_value`])
    /// and the record is marked decrypted, even if it had no sensitive
    /// fields or its type is unrecognized.
    pub fn decrypt(&mut self, secret: Option<&str>) {
        let Some(secret) = secret else {
            debug!(service_type = %self.service_type, "no secret supplied, skipping decryption");
            return;
        };
        if self.decrypted {
            debug!(service_type = %self.service_type, "already decrypted, skipping");
            return;
        }
        if let Some(kind) = self.kind() {
            for field in kind.sensitive_fields() {
                if let Some(value) = self.properties.get_mut(*field) {
                    *value = cipher::decrypt_value(value, secret).value;
                }
            }
        }
        self.decrypted = true;
    }
}
