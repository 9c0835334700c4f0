use std::sync::{Arc, Mutex, MutexGuard};

use super::entry::LogEntry;
use super::error::RecorderError;
use super::event::{Call, CallResult, Failure, StartToken};
use super::filter::EntryFilter;
use super::listener::EventListener;
use super::recorder::EventRecorder;
use super::service::Service;

/// Cloneable handle serializing access to one `EventRecorder`.
///
/// Each hook and each read holds the lock for exactly one operation, so
/// appends from concurrent tasks interleave but never tear.
#[derive(Debug, Clone, Default)]
pub struct SharedRecorder {
    inner: Arc<Mutex<EventRecorder>>,
}

impl SharedRecorder {
    pub fn new(recorder: EventRecorder) -> Self {
        Self { inner: Arc::new(Mutex::new(recorder)) }
    }

    /// Entries are immutable and every operation leaves the log whole, so a
    /// poisoned lock still guards a usable recorder.
    pub fn lock(&self) -> MutexGuard<'_, EventRecorder> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn take_next(&self, filter: &EntryFilter) -> Result<String, RecorderError> {
        self.lock().take_next(filter)
    }

    pub fn take_next_entry(&self, filter: &EntryFilter) -> Result<LogEntry, RecorderError> {
        self.lock().take_next_entry(filter)
    }

    pub fn take_next_failure(&self) -> Result<LogEntry, RecorderError> {
        self.lock().take_next_failure()
    }

    pub fn drain_all(&self, filter: &EntryFilter) -> Vec<String> {
        self.lock().drain_all(filter)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<EventRecorder> for SharedRecorder {
    fn from(recorder: EventRecorder) -> Self {
        Self::new(recorder)
    }
}

impl EventListener for SharedRecorder {
    fn bind_service(&mut self, name: &str, service: &dyn Service) {
        self.lock().bind_service(name, service);
    }

    fn take_service(&mut self, name: &str, service: &dyn Service) {
        self.lock().take_service(name, service);
    }

    fn call_start(&mut self, call: &Call) -> Option<StartToken> {
        self.lock().call_start(call)
    }

    fn call_end(&mut self, call: &Call, result: &CallResult, start: Option<StartToken>) {
        self.lock().call_end(call, result, start);
    }

    fn service_leaked(&mut self, name: &str) {
        self.lock().service_leaked(name);
    }

    fn application_load_start(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
    ) -> Option<StartToken> {
        self.lock().application_load_start(application, manifest_url)
    }

    fn application_load_success(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
        start: Option<StartToken>,
    ) {
        self.lock().application_load_success(application, manifest_url, start);
    }

    fn application_load_skipped(
        &mut self,
        application: &str,
        manifest_url: &str,
        start: Option<StartToken>,
    ) {
        self.lock().application_load_skipped(application, manifest_url, start);
    }

    fn application_load_skipped_not_fresh(
        &mut self,
        application: &str,
        manifest_url: &str,
        start: Option<StartToken>,
    ) {
        self.lock().application_load_skipped_not_fresh(application, manifest_url, start);
    }

    fn application_load_failed(
        &mut self,
        application: &str,
        manifest_url: Option<&str>,
        failure: Failure,
        start: Option<StartToken>,
    ) {
        self.lock().application_load_failed(application, manifest_url, failure, start);
    }

    fn download_start(&mut self, application: &str, url: &str) -> Option<StartToken> {
        self.lock().download_start(application, url)
    }

    fn download_end(&mut self, application: &str, url: &str, start: Option<StartToken>) {
        self.lock().download_end(application, url, start);
    }

    fn download_failed(
        &mut self,
        application: &str,
        url: &str,
        failure: Failure,
        start: Option<StartToken>,
    ) {
        self.lock().download_failed(application, url, failure, start);
    }

    fn manifest_parse_failed(&mut self, application: &str, url: Option<&str>, failure: Failure) {
        self.lock().manifest_parse_failed(application, url, failure);
    }

    fn manifest_verified(&mut self, application: &str, manifest_url: &str, key_name: &str) {
        self.lock().manifest_verified(application, manifest_url, key_name);
    }

    fn module_load_start(&mut self, module_id: &str) -> Option<StartToken> {
        self.lock().module_load_start(module_id)
    }

    fn module_load_end(&mut self, module_id: &str, start: Option<StartToken>) {
        self.lock().module_load_end(module_id, start);
    }

    fn initializer_start(&mut self, application: &str) -> Option<StartToken> {
        self.lock().initializer_start(application)
    }

    fn initializer_end(&mut self, application: &str, start: Option<StartToken>) {
        self.lock().initializer_end(application, start);
    }

    fn main_function_start(&mut self, application: &str) -> Option<StartToken> {
        self.lock().main_function_start(application)
    }

    fn main_function_end(&mut self, application: &str, start: Option<StartToken>) {
        self.lock().main_function_end(application, start);
    }

    fn engine_created(&mut self) {
        self.lock().engine_created();
    }

    fn engine_closed(&mut self) {
        self.lock().engine_closed();
    }
}
