use std::collections::VecDeque;

use tracing::{debug, trace};

use super::config::RecorderConfig;
use super::entry::LogEntry;
use super::error::RecorderError;
use super::event::{Call, CallResult, Failure, LifecycleEvent, StartToken};
use super::filter::EntryFilter;
use super::listener::EventListener;
use super::service::{is_internal_with_prefix, Service};

/// Ordered log of every lifecycle event seen by one engine.
///
/// Hooks append at the tail; the `take_*` and `drain_all` reads consume from
/// the head and never put anything back.
#[derive(Debug)]
pub struct EventRecorder {
    buffer: VecDeque<LogEntry>,
    next_call_id: StartToken,
    config: RecorderConfig,
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::with_config(RecorderConfig::default())
    }

    pub fn with_config(config: RecorderConfig) -> Self {
        Self {
            buffer: VecDeque::with_capacity(config.capacity_hint),
            next_call_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn record(&mut self, event: LifecycleEvent, service: Option<&dyn Service>) {
        let internal = is_internal_with_prefix(
            event.service_name(),
            service,
            &self.config.internal_service_prefix,
        );
        let entry = LogEntry::from_event(&event, internal);

        if self.config.trace_entries {
            debug!(internal, "recorded: {}", entry.message());
        }
        self.buffer.push_back(entry);
    }

    /// Pops entries until one passes `filter`. Non-matching entries are
    /// dropped for good.
    pub fn take_next_entry(&mut self, filter: &EntryFilter) -> Result<LogEntry, RecorderError> {
        self.take_first(|entry| filter.matches(entry), "a matching entry")
    }

    pub fn take_next(&mut self, filter: &EntryFilter) -> Result<String, RecorderError> {
        self.take_next_entry(filter).map(LogEntry::into_message)
    }

    /// Pops entries until one carries a failure. Ignores filters.
    pub fn take_next_failure(&mut self) -> Result<LogEntry, RecorderError> {
        self.take_first(|entry| entry.failure().is_some(), "a failure entry")
    }

    /// Empties the log, returning the messages that pass `filter` in order.
    pub fn drain_all(&mut self, filter: &EntryFilter) -> Vec<String> {
        self.buffer
            .drain(..)
            .filter(|entry| filter.matches(entry))
            .map(LogEntry::into_message)
            .collect()
    }

    fn take_first<F>(&mut self, mut accept: F, wanted: &'static str) -> Result<LogEntry, RecorderError>
    where
        F: FnMut(&LogEntry) -> bool,
    {
        let mut discarded = 0;
        while let Some(entry) = self.buffer.pop_front() {
            if accept(&entry) {
                return Ok(entry);
            }
            trace!("discarded: {}", entry.message());
            discarded += 1;
        }

        debug!(discarded, "underflow looking for {}", wanted);
        Err(RecorderError::Underflow { wanted, discarded })
    }
}

impl EventListener for EventRecorder {
    fn bind_service(&mut self, name: &str, service: &dyn Service) {
        self.record(LifecycleEvent::BindService { name: name.to_string() }, Some(service));
    }

    fn take_service(&mut self, name: &str, service: &dyn Service) {
        self.record(LifecycleEvent::TakeService { name: name.to_string() }, Some(service));
    }

    fn call_start(&mut self, call: &Call) -> Option<StartToken> {
        let id = self.next_call_id;
        self.next_call_id += 1;

        self.record(
            LifecycleEvent::CallStart {
                id,
                service_name: call.service_name.clone(),
                function_name: call.function_name.clone(),
                args: call.args_json(),
            },
            call.service.as_deref(),
        );
        Some(id)
    }

    fn call_end(&mut self, call: &Call, result: &CallResult, start: Option<StartToken>) {
        self.record(
            LifecycleEvent::CallEnd {
                id: start,
                service_name: call.service_name.clone(),
                function_name: call.function_name.clone(),
                args: call.args_json(),
                result: result.to_string(),
            },
            call.service.as_deref(),
        );
    }

    fn service_leaked(&mut self, name: &str) {
        self.record(LifecycleEvent::ServiceLeaked { name: name.to_string() }, None);
    }

    fn application_load_start(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
    ) -> Option<StartToken> {
        self.record(
            LifecycleEvent::ApplicationLoadStart {
                application: application.to_string(),
                manifest_url: manifest_url.map(str::to_string),
            },
            None,
        );
        None
    }

    fn application_load_success(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
        _start: Option<StartToken>,
    ) {
        self.record(
            LifecycleEvent::ApplicationLoadSuccess {
                application: application.to_string(),
                manifest_url: manifest_url.map(str::to_string),
            },
            None,
        );
    }

    fn application_load_skipped(
        &mut self,
        application: &str,
        manifest_url: &str,
        _start: Option<StartToken>,
    ) {
        self.record(
            LifecycleEvent::ApplicationLoadSkipped {
                application: application.to_string(),
                manifest_url: manifest_url.to_string(),
            },
            None,
        );
    }

    fn application_load_skipped_not_fresh(
        &mut self,
        application: &str,
        manifest_url: &str,
        _start: Option<StartToken>,
    ) {
        self.record(
            LifecycleEvent::ApplicationLoadSkippedNotFresh {
                application: application.to_string(),
                manifest_url: manifest_url.to_string(),
            },
            None,
        );
    }

    fn application_load_failed(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
        failure: Failure,
        _start: Option<StartToken>,
    ) {
        self.record(
            LifecycleEvent::ApplicationLoadFailed {
                application: application.to_string(),
                manifest_url: manifest_url.map(str::to_string),
                failure,
            },
            None,
        );
    }

    fn download_start(&mut self, application: &str, url: &str) -> Option<StartToken> {
        self.record(
            LifecycleEvent::DownloadStart {
                application: application.to_string(),
                url: url.to_string(),
            },
            None,
        );
        None
    }

    fn download_end(&mut self, application: &str, url: &str, _start: Option<StartToken>) {
        self.record(
            LifecycleEvent::DownloadEnd {
                application: application.to_string(),
                url: url.to_string(),
            },
            None,
        );
    }

    fn download_failed(
        &mut self,
        application: &str,
        url: &str,
        failure: Failure,
        _start: Option<StartToken>,
    ) {
        self.record(
            LifecycleEvent::DownloadFailed {
                application: application.to_string(),
                url: url.to_string(),
                failure,
            },
            None,
        );
    }

    fn manifest_parse_failed(&mut self, application: &str, url: Option<&str>, failure: Failure) {
        self.record(
            LifecycleEvent::ManifestParseFailed {
                application: application.to_string(),
                url: url.map(str::to_string),
                failure,
            },
            None,
        );
    }

    fn manifest_verified(&mut self, application: &str, manifest_url: &str, key_name: &str) {
        self.record(
            LifecycleEvent::ManifestVerified {
                application: application.to_string(),
                manifest_url: manifest_url.to_string(),
                key_name: key_name.to_string(),
            },
            None,
        );
    }

    fn module_load_start(&mut self, module_id: &str) -> Option<StartToken> {
        self.record(LifecycleEvent::ModuleLoadStart { module_id: module_id.to_string() }, None);
        None
    }

    fn module_load_end(&mut self, module_id: &str, _start: Option<StartToken>) {
        self.record(LifecycleEvent::ModuleLoadEnd { module_id: module_id.to_string() }, None);
    }

    fn initializer_start(&mut self, application: &str) -> Option<StartToken> {
        self.record(LifecycleEvent::InitializerStart { application: application.to_string() }, None);
        None
    }

    fn initializer_end(&mut self, application: &str, _start: Option<StartToken>) {
        self.record(LifecycleEvent::InitializerEnd { application: application.to_string() }, None);
    }

    fn main_function_start(&mut self, application: &str) -> Option<StartToken> {
        self.record(LifecycleEvent::MainFunctionStart { application: application.to_string() }, None);
        None
    }

    fn main_function_end(&mut self, application: &str, _start: Option<StartToken>) {
        self.record(LifecycleEvent::MainFunctionEnd { application: application.to_string() }, None);
    }

    fn engine_created(&mut self) {
        self.record(LifecycleEvent::EngineCreated, None);
    }

    fn engine_closed(&mut self) {
        self.record(LifecycleEvent::EngineClosed, None);
    }
}
