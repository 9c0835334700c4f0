use super::event::{Call, CallResult, Failure, StartToken};
use super::service::Service;

/// Hook surface driven by the interception layer, one method per lifecycle
/// event. Every method defaults to a no-op so listeners only override what
/// they observe.
///
/// Start hooks return a token (or `None`); the caller hands it back to the
/// matching end hook unchanged.
pub trait EventListener {
    fn bind_service(&mut self, _name: &str, _service: &dyn Service) {}

    fn take_service(&mut self, _name: &str, _service: &dyn Service) {}

    fn call_start(&mut self, _call: &Call) -> Option<StartToken> {
        None
    }

    fn call_end(&mut self, _call: &Call, _result: &CallResult, _start: Option<StartToken>) {}

    /// A service was garbage collected without being closed. Only the name
    /// survives.
    fn service_leaked(&mut self, _name: &str) {}

    fn application_load_start(
        &mut self,
        _application: &str,
        _manifest_url: Option<&str>,
    ) -> Option<StartToken> {
        None
    }

    fn application_load_success(
        &mut self,
        _application: &str,
        _manifest_url: Option<&str>,
        _start: Option<StartToken>,
    ) {
    }

    fn application_load_skipped(
        &mut self,
        _application: &str,
        _manifest_url: &str,
        _start: Option<StartToken>,
    ) {
    }

    fn application_load_skipped_not_fresh(
        &mut self,
        _application: &str,
        _manifest_url: &str,
        _start: Option<StartToken>,
    ) {
    }

    fn application_load_failed(
        &mut self,
        _application: &str,
        _manifest_url: Option<&str>,
        _failure: Failure,
        _start: Option<StartToken>,
    ) {
    }

    fn download_start(&mut self, _application: &str, _url: &str) -> Option<StartToken> {
        None
    }

    fn download_end(&mut self, _application: &str, _url: &str, _start: Option<StartToken>) {}

    fn download_failed(
        &mut self,
        _application: &str,
        _url: &str,
        _failure: Failure,
        _start: Option<StartToken>,
    ) {
    }

    fn manifest_parse_failed(&mut self, _application: &str, _url: Option<&str>, _failure: Failure) {}

    fn manifest_verified(&mut self, _application: &str, _manifest_url: &str, _key_name: &str) {}

    fn module_load_start(&mut self, _module_id: &str) -> Option<StartToken> {
        None
    }

    fn module_load_end(&mut self, _module_id: &str, _start: Option<StartToken>) {}

    fn initializer_start(&mut self, _application: &str) -> Option<StartToken> {
        None
    }

    fn initializer_end(&mut self, _application: &str, _start: Option<StartToken>) {}

    fn main_function_start(&mut self, _application: &str) -> Option<StartToken> {
        None
    }

    fn main_function_end(&mut self, _application: &str, _start: Option<StartToken>) {}

    fn engine_created(&mut self) {}

    fn engine_closed(&mut self) {}
}
