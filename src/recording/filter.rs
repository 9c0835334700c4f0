use serde::{Serialize, Deserialize};

use super::entry::LogEntry;

/// Exclusion switches applied by the consuming reads. An entry is skipped
/// when any enabled switch matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFilter {
    pub skip_module_events: bool,
    pub skip_service_events: bool,
    pub skip_application_events: bool,
    pub skip_internal_services: bool,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            skip_module_events: false,
            skip_service_events: false,
            skip_application_events: false,
            skip_internal_services: true,
        }
    }
}

impl EntryFilter {
    /// Nothing is skipped, internal plumbing included.
    pub fn all() -> Self {
        Self {
            skip_module_events: false,
            skip_service_events: false,
            skip_application_events: false,
            skip_internal_services: false,
        }
    }

    pub fn skip_module_events(mut self, skip: bool) -> Self {
        self.skip_module_events = skip;
        self
    }

    pub fn skip_service_events(mut self, skip: bool) -> Self {
        self.skip_service_events = skip;
        self
    }

    pub fn skip_application_events(mut self, skip: bool) -> Self {
        self.skip_application_events = skip;
        self
    }

    pub fn skip_internal_services(mut self, skip: bool) -> Self {
        self.skip_internal_services = skip;
        self
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if self.skip_module_events && entry.module_id().is_some() {
            return false;
        }
        if self.skip_service_events && entry.service_name().is_some() {
            return false;
        }
        if self.skip_application_events && entry.application_name().is_some() {
            return false;
        }
        if self.skip_internal_services && entry.is_internal_service() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::event::LifecycleEvent;

    fn module_entry() -> LogEntry {
        LogEntry::from_event(&LifecycleEvent::ModuleLoadStart { module_id: "m1".into() }, false)
    }

    fn internal_entry() -> LogEntry {
        LogEntry::from_event(&LifecycleEvent::BindService { name: "zipline/host".into() }, true)
    }

    #[test]
    fn default_only_hides_internal() {
        let filter = EntryFilter::default();
        assert!(filter.matches(&module_entry()));
        assert!(!filter.matches(&internal_entry()));
        assert!(EntryFilter::all().matches(&internal_entry()));
    }

    #[test]
    fn any_enabled_switch_excludes() {
        let filter = EntryFilter::all().skip_module_events(true);
        assert!(!filter.matches(&module_entry()));
        assert!(filter.matches(&internal_entry()));

        let filter = EntryFilter::all().skip_service_events(true);
        assert!(!filter.matches(&internal_entry()));

        let app = LogEntry::from_event(
            &LifecycleEvent::InitializerStart { application: "red".into() },
            false,
        );
        assert!(!EntryFilter::all().skip_application_events(true).matches(&app));
    }

    #[test]
    fn engine_events_always_pass() {
        let created = LogEntry::from_event(&LifecycleEvent::EngineCreated, false);
        let strict = EntryFilter::default()
            .skip_module_events(true)
            .skip_service_events(true)
            .skip_application_events(true);
        assert!(strict.matches(&created));
    }

    #[test]
    fn deserializes_with_defaults() {
        let filter: EntryFilter = serde_json::from_str(r#"{ "skip_module_events": true }"#).unwrap();
        assert!(filter.skip_module_events);
        assert!(filter.skip_internal_services);
        assert!(!filter.skip_service_events);
    }
}
