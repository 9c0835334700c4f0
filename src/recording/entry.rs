use super::event::{Failure, LifecycleEvent};

/// One recorded event. Built once at append time, read-only afterwards.
#[derive(Debug, Clone)]
pub struct LogEntry {
    module_id: Option<String>,
    service_name: Option<String>,
    application_name: Option<String>,
    is_internal_service: bool,
    failure: Option<Failure>,
    message: String,
}

impl LogEntry {
    pub(crate) fn from_event(event: &LifecycleEvent, is_internal_service: bool) -> Self {
        Self {
            module_id: event.module_id().map(str::to_string),
            service_name: event.service_name().map(str::to_string),
            application_name: event.application_name().map(str::to_string),
            is_internal_service,
            failure: event.failure().cloned(),
            message: event.to_string(),
        }
    }

    pub fn module_id(&self) -> Option<&str> {
        self.module_id.as_deref()
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn is_internal_service(&self) -> bool {
        self.is_internal_service
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
