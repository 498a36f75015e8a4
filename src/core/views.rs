//! Typed read-only views over resolved service records.
//!
//! Each view fixes one service kind and exposes its field set as
//! accessors, so callers work against a closed surface instead of raw
//! property names. Views borrow the record they were resolved from;
//! sensitive fields are already decrypted by the time a view is handed
//! out.

use crate::core::service::ServiceRecord;

macro_rules! common_accessors {
    () => {
        /// The underlying record, for fields outside this view's surface.
        pub fn record(&self) -> &ServiceRecord {
            self.record
        }

        pub fn name(&self) -> Option<&str> {
            self.record.name.as_deref()
        }

        pub fn id(&self) -> Option<&str> {
            self.record.id.as_deref()
        }
    };
}

/// An `endpoint` service: a bot's messaging endpoint credentials.
pub struct EndpointService<'a> {
    record: &'a ServiceRecord,
}

impl<'a> EndpointService<'a> {
    pub(crate) fn new(record: &'a ServiceRecord) -> Self {
        EndpointService { record }
    }

    common_accessors!();

    pub fn app_id(&self) -> Option<&str> {
        self.record.get("appId")
    }

    pub fn app_password(&self) -> Option<&str> {
        self.record.get("appPassword")
    }
}

/// An `abs` service: an Azure Bot Service registration.
pub struct AzureBotService<'a> {
    record: &'a ServiceRecord,
}

impl<'a> AzureBotService<'a> {
    pub(crate) fn new(record: &'a ServiceRecord) -> Self {
        AzureBotService { record }
    }

    common_accessors!();

    pub fn tenant_id(&self) -> Option<&str> {
        self.record.get("tenantId")
    }

    pub fn resource_group(&self) -> Option<&str> {
        self.record.get("resourceGroup")
    }

    pub fn subscription_id(&self) -> Option<&str> {
        self.record.get("subscriptionId")
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.record.get("endpoint")
    }

    pub fn app_id(&self) -> Option<&str> {
        self.record.get("appId")
    }

    pub fn app_password(&self) -> Option<&str> {
        self.record.get("appPassword")
    }
}

/// A `luis` service: a language-understanding application.
pub struct LuisService<'a> {
    record: &'a ServiceRecord,
}

impl<'a> LuisService<'a> {
    pub(crate) fn new(record: &'a ServiceRecord) -> Self {
        LuisService { record }
    }

    common_accessors!();

    pub fn app_id(&self) -> Option<&str> {
        self.record.get("appId")
    }

    pub fn version(&self) -> Option<&str> {
        self.record.get("version")
    }

    pub fn authoring_key(&self) -> Option<&str> {
        self.record.get("authoringKey")
    }

    pub fn subscription_key(&self) -> Option<&str> {
        self.record.get("subscriptionKey")
    }

    pub fn endpoint_base_path(&self) -> Option<&str> {
        self.record.get("endpointBasePath")
    }
}

/// A `qna` service: a QnA Maker knowledge base.
pub struct QnaMakerService<'a> {
    record: &'a ServiceRecord,
}

impl<'a> QnaMakerService<'a> {
    pub(crate) fn new(record: &'a ServiceRecord) -> Self {
        QnaMakerService { record }
    }

    common_accessors!();

    pub fn subscription_key(&self) -> Option<&str> {
        self.record.get("subscriptionKey")
    }

    pub fn endpoint_key(&self) -> Option<&str> {
        self.record.get("endpointKey")
    }

    pub fn kb_id(&self) -> Option<&str> {
        self.record.get("kbId")
    }

    pub fn hostname(&self) -> Option<&str> {
        self.record.get("hostname")
    }
}

/// A `dispatch` service: a dispatch router, sharing the LUIS field set.
pub struct DispatchService<'a> {
    record: &'a ServiceRecord,
}

impl<'a> DispatchService<'a> {
    pub(crate) fn new(record: &'a ServiceRecord) -> Self {
        DispatchService { record }
    }

    common_accessors!();

    pub fn app_id(&self) -> Option<&str> {
        self.record.get("appId")
    }

    pub fn version(&self) -> Option<&str> {
        self.record.get("version")
    }

    pub fn authoring_key(&self) -> Option<&str> {
        self.record.get("authoringKey")
    }

    pub fn subscription_key(&self) -> Option<&str> {
        self.record.get("subscriptionKey")
    }

    pub fn endpoint_base_path(&self) -> Option<&str> {
        self.record.get("endpointBasePath")
    }
}
