#![allow(dead_code)]

use std::sync::Arc;

use lifecycle_recorder::{Call, CallResult, EventListener, InternalMarker, Service};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct UserService;
impl Service for UserService {}

pub struct CancelCallbackService;
impl Service for CancelCallbackService {
    fn marker(&self) -> Option<InternalMarker> {
        Some(InternalMarker::CancelCallback)
    }
}

pub struct SuspendCallbackService;
impl Service for SuspendCallbackService {
    fn marker(&self) -> Option<InternalMarker> {
        Some(InternalMarker::SuspendCallback)
    }
}

/// Drives a listener the way the interception layer does: one hook per
/// event, start tokens handed back to the matching end hook.
pub struct FakeBridge<L: EventListener> {
    pub listener: L,
}

impl<L: EventListener> FakeBridge<L> {
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    pub fn call(
        &mut self,
        service_name: &str,
        service: Arc<dyn Service>,
        function: &str,
        args: Vec<Value>,
        result: CallResult,
    ) -> Option<u64> {
        let call = Call::new(service_name, function, args).with_service(service);
        let token = self.listener.call_start(&call);
        self.listener.call_end(&call, &result, token);
        token
    }

    pub fn load_module(&mut self, module_id: &str) {
        let token = self.listener.module_load_start(module_id);
        self.listener.module_load_end(module_id, token);
    }

    pub fn download(&mut self, application: &str, url: &str) {
        let token = self.listener.download_start(application, url);
        self.listener.download_end(application, url, token);
    }
}
