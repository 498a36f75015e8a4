//! Service lookup over a loaded bot configuration.
//!
//! The registry owns the configuration and the caller's secret, and
//! resolves `type` (plus optional `name`) queries to a single record,
//! decrypting its sensitive fields on first access.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::BotConfiguration;
use crate::core::loader;
use crate::core::service::{ServiceKind, ServiceRecord};
use crate::core::views::{
    AzureBotService, DispatchService, EndpointService, LuisService, QnaMakerService,
};
use crate::error::{BotfileError, Result};

/// Typed lookup over the services of one bot configuration.
///
/// The secret is bound once at construction and applied lazily: a
/// record's sensitive fields are decrypted the first time the record is
/// resolved, and never again. Resolving takes `&mut self` because of
/// that in-place decryption, which also makes the check-then-decrypt
/// sequence exclusive under the borrow rules.
#[derive(Debug)]
pub struct ServiceRegistry {
    configuration: BotConfiguration,
    secret: Option<Zeroizing<String>>,
}

impl ServiceRegistry {
    /// Build a registry over an already-parsed configuration.
    pub fn new(configuration: BotConfiguration, secret: Option<String>) -> Self {
        ServiceRegistry {
            configuration,
            secret: secret.map(Zeroizing::new),
        }
    }

    /// Load a specific `.bot` file and build a registry over it.
    ///
    /// # Errors
    ///
    /// Returns an io or parse error if the file cannot be loaded.
    pub fn from_file(path: &Path, secret: Option<String>) -> Result<Self> {
        Ok(Self::new(loader::load_file(path)?, secret))
    }

    /// Find the single `.bot` file in `dir` and build a registry over it.
    ///
    /// # Errors
    ///
    /// Returns `BotFileNotFound`/`MultipleBotFiles` from discovery, or an
    /// io/parse error from loading.
    pub fn from_directory(dir: &Path, secret: Option<String>) -> Result<Self> {
        Ok(Self::new(loader::load_dir(dir)?, secret))
    }

    /// The underlying configuration document.
    pub fn configuration(&self) -> &BotConfiguration {
        &self.configuration
    }

    /// Resolve a type (and optional name) query to a single record.
    ///
    /// Matching is case-insensitive on `service_type` and exact on
    /// `name`; with no name, any record of the type matches. When several
    /// records match, the first in document order wins, silently. The
    /// matched record's sensitive fields are decrypted before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `ServiceNotFound`, carrying the query parameters, if
    /// nothing matches.
    pub fn resolve(&mut self, service_type: &str, name: Option<&str>) -> Result<&ServiceRecord> {
        debug!(service_type, name, "resolving service");

        let index = self
            .configuration
            .services
            .iter()
            .position(|record| {
                record.service_type().eq_ignore_ascii_case(service_type)
                    && name.map_or(true, |n| record.name.as_deref() == Some(n))
            })
            .ok_or_else(|| BotfileError::ServiceNotFound {
                service_type: service_type.to_string(),
                name: name.map(String::from),
            })?;

        let record = &mut self.configuration.services[index];
        record.decrypt(self.secret.as_ref().map(|s| s.as_str()));
        Ok(&self.configuration.services[index])
    }

    /// Resolve a query, validating the type discriminator first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidServiceType` for anything outside the five
    /// recognized discriminators, before any record is scanned, even if a
    /// record with that type string exists. Otherwise behaves like
    /// [`resolve`](Self::resolve).
    pub fn get_service(
        &mut self,
        service_type: &str,
        name: Option<&str>,
    ) -> Result<&ServiceRecord> {
        let kind = ServiceKind::parse(service_type)
            .ok_or_else(|| BotfileError::InvalidServiceType(service_type.to_string()))?;
        self.resolve(kind.discriminator(), name)
    }

    /// The `endpoint` service, optionally by name.
    pub fn endpoint(&mut self, name: Option<&str>) -> Result<EndpointService<'_>> {
        self.resolve(ServiceKind::Endpoint.discriminator(), name)
            .map(EndpointService::new)
    }

    /// The `abs` (Azure Bot Service) registration, optionally by name.
    pub fn azure_bot_service(&mut self, name: Option<&str>) -> Result<AzureBotService<'_>> {
        self.resolve(ServiceKind::AzureBotService.discriminator(), name)
            .map(AzureBotService::new)
    }

    /// The `luis` service, optionally by name.
    pub fn luis(&mut self, name: Option<&str>) -> Result<LuisService<'_>> {
        self.resolve(ServiceKind::Luis.discriminator(), name)
            .map(LuisService::new)
    }

    /// The `qna` (QnA Maker) service, optionally by name.
    pub fn qna_maker(&mut self, name: Option<&str>) -> Result<QnaMakerService<'_>> {
        self.resolve(ServiceKind::QnaMaker.discriminator(), name)
            .map(QnaMakerService::new)
    }

    /// The `dispatch` router, optionally by name.
    pub fn dispatch(&mut self, name: Option<&str>) -> Result<DispatchService<'_>> {
        self.resolve(ServiceKind::Dispatch.discriminator(), name)
            .map(DispatchService::new)
    }
}
