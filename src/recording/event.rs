use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::service::Service;

/// Correlation value handed out by `call_start` and echoed by `call_end`.
pub type StartToken = u64;

/// A failure reported by the interception layer. Stored verbatim; cloning
/// shares the underlying error.
#[derive(Clone)]
pub struct Failure(Arc<anyhow::Error>);

impl Failure {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self(Arc::new(error.into()))
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// True when both handles point at the same captured error.
    pub fn ptr_eq(&self, other: &Failure) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Self(Arc::new(error))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// One call crossing the bridge.
#[derive(Clone)]
pub struct Call {
    pub service_name: String,
    pub function_name: String,
    pub args: Vec<Value>,
    pub service: Option<Arc<dyn Service>>,
}

impl Call {
    pub fn new(service_name: &str, function_name: &str, args: Vec<Value>) -> Self {
        Self {
            service_name: service_name.to_string(),
            function_name: function_name.to_string(),
            args,
            service: None,
        }
    }

    pub fn with_service(mut self, service: Arc<dyn Service>) -> Self {
        self.service = Some(service);
        self
    }

    /// Arguments as a compact JSON array, e.g. `["a",1]`.
    pub fn args_json(&self) -> String {
        Value::Array(self.args.clone()).to_string()
    }
}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("service_name", &self.service_name)
            .field("function_name", &self.function_name)
            .field("args", &self.args)
            .field("has_service", &self.service.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    Success(Value),
    Failure(String),
}

impl fmt::Display for CallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallResult::Success(value) => write!(f, "Success({})", value),
            CallResult::Failure(message) => write!(f, "Failure({})", message),
        }
    }
}

/// Every lifecycle notification the recorder understands.
///
/// Rendering (`Display`) is the message stored on the log entry: the
/// camelCase event kind followed by its fields, space separated, in
/// declaration order. Absent optional fields render as `null`.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    BindService { name: String },
    TakeService { name: String },
    CallStart {
        id: StartToken,
        service_name: String,
        function_name: String,
        args: String,
    },
    CallEnd {
        id: Option<StartToken>,
        service_name: String,
        function_name: String,
        args: String,
        result: String,
    },
    ServiceLeaked { name: String },

    ApplicationLoadStart { application: String, manifest_url: Option<String> },
    ApplicationLoadSuccess { application: String, manifest_url: Option<String> },
    ApplicationLoadSkipped { application: String, manifest_url: String },
    ApplicationLoadSkippedNotFresh { application: String, manifest_url: String },
    ApplicationLoadFailed {
        application: String,
        manifest_url: Option<String>,
        failure: Failure,
    },

    DownloadStart { application: String, url: String },
    DownloadEnd { application: String, url: String },
    DownloadFailed { application: String, url: String, failure: Failure },

    ManifestParseFailed { application: String, url: Option<String>, failure: Failure },
    ManifestVerified { application: String, manifest_url: String, key_name: String },

    ModuleLoadStart { module_id: String },
    ModuleLoadEnd { module_id: String },

    InitializerStart { application: String },
    InitializerEnd { application: String },
    MainFunctionStart { application: String },
    MainFunctionEnd { application: String },

    EngineCreated,
    EngineClosed,
}

impl LifecycleEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleEvent::BindService { .. } => "bindService",
            LifecycleEvent::TakeService { .. } => "takeService",
            LifecycleEvent::CallStart { .. } => "callStart",
            LifecycleEvent::CallEnd { .. } => "callEnd",
            LifecycleEvent::ServiceLeaked { .. } => "serviceLeaked",
            LifecycleEvent::ApplicationLoadStart { .. } => "applicationLoadStart",
            LifecycleEvent::ApplicationLoadSuccess { .. } => "applicationLoadSuccess",
            LifecycleEvent::ApplicationLoadSkipped { .. } => "applicationLoadSkipped",
            LifecycleEvent::ApplicationLoadSkippedNotFresh { .. } => "applicationLoadSkippedNotFresh",
            LifecycleEvent::ApplicationLoadFailed { .. } => "applicationLoadFailed",
            LifecycleEvent::DownloadStart { .. } => "downloadStart",
            LifecycleEvent::DownloadEnd { .. } => "downloadEnd",
            LifecycleEvent::DownloadFailed { .. } => "downloadFailed",
            LifecycleEvent::ManifestParseFailed { .. } => "manifestParseFailed",
            LifecycleEvent::ManifestVerified { .. } => "manifestVerified",
            LifecycleEvent::ModuleLoadStart { .. } => "moduleLoadStart",
            LifecycleEvent::ModuleLoadEnd { .. } => "moduleLoadEnd",
            LifecycleEvent::InitializerStart { .. } => "initializerStart",
            LifecycleEvent::InitializerEnd { .. } => "initializerEnd",
            LifecycleEvent::MainFunctionStart { .. } => "mainFunctionStart",
            LifecycleEvent::MainFunctionEnd { .. } => "mainFunctionEnd",
            LifecycleEvent::EngineCreated => "ziplineCreated",
            LifecycleEvent::EngineClosed => "ziplineClosed",
        }
    }

    pub fn module_id(&self) -> Option<&str> {
        match self {
            LifecycleEvent::ModuleLoadStart { module_id }
            | LifecycleEvent::ModuleLoadEnd { module_id } => Some(module_id),
            _ => None,
        }
    }

    pub fn service_name(&self) -> Option<&str> {
        match self {
            LifecycleEvent::BindService { name }
            | LifecycleEvent::TakeService { name }
            | LifecycleEvent::ServiceLeaked { name } => Some(name),
            LifecycleEvent::CallStart { service_name, .. }
            | LifecycleEvent::CallEnd { service_name, .. } => Some(service_name),
            _ => None,
        }
    }

    pub fn application_name(&self) -> Option<&str> {
        match self {
            LifecycleEvent::ApplicationLoadStart { application, .. }
            | LifecycleEvent::ApplicationLoadSuccess { application, .. }
            | LifecycleEvent::ApplicationLoadSkipped { application, .. }
            | LifecycleEvent::ApplicationLoadSkippedNotFresh { application, .. }
            | LifecycleEvent::ApplicationLoadFailed { application, .. }
            | LifecycleEvent::DownloadStart { application, .. }
            | LifecycleEvent::DownloadEnd { application, .. }
            | LifecycleEvent::DownloadFailed { application, .. }
            | LifecycleEvent::ManifestParseFailed { application, .. }
            | LifecycleEvent::ManifestVerified { application, .. }
            | LifecycleEvent::InitializerStart { application }
            | LifecycleEvent::InitializerEnd { application }
            | LifecycleEvent::MainFunctionStart { application }
            | LifecycleEvent::MainFunctionEnd { application } => Some(application),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            LifecycleEvent::ApplicationLoadFailed { failure, .. }
            | LifecycleEvent::DownloadFailed { failure, .. }
            | LifecycleEvent::ManifestParseFailed { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            LifecycleEvent::BindService { name }
            | LifecycleEvent::TakeService { name }
            | LifecycleEvent::ServiceLeaked { name } => write!(f, "{} {}", kind, name),
            LifecycleEvent::CallStart { id, service_name, function_name, args } => {
                write!(f, "{} {} {} {} {}", kind, id, service_name, function_name, args)
            }
            LifecycleEvent::CallEnd { id, service_name, function_name, args, result } => {
                let id = id.map(|id| id.to_string()).unwrap_or_else(|| "null".to_string());
                write!(f, "{} {} {} {} {} {}", kind, id, service_name, function_name, args, result)
            }
            LifecycleEvent::ApplicationLoadStart { application, manifest_url }
            | LifecycleEvent::ApplicationLoadSuccess { application, manifest_url } => {
                write!(f, "{} {} {}", kind, application, or_null(manifest_url))
            }
            LifecycleEvent::ApplicationLoadSkipped { application, manifest_url }
            | LifecycleEvent::ApplicationLoadSkippedNotFresh { application, manifest_url } => {
                write!(f, "{} {} {}", kind, application, manifest_url)
            }
            LifecycleEvent::ApplicationLoadFailed { application, failure, .. } => {
                write!(f, "{} {} {}", kind, application, failure)
            }
            LifecycleEvent::DownloadStart { application, url }
            | LifecycleEvent::DownloadEnd { application, url } => {
                write!(f, "{} {} {}", kind, application, url)
            }
            LifecycleEvent::DownloadFailed { application, url, failure } => {
                write!(f, "{} {} {} {}", kind, application, url, failure)
            }
            LifecycleEvent::ManifestParseFailed { application, url, .. } => {
                write!(f, "{} {} {}", kind, application, or_null(url))
            }
            LifecycleEvent::ManifestVerified { application, manifest_url, key_name } => {
                write!(f, "{} {} {} {}", kind, application, manifest_url, key_name)
            }
            LifecycleEvent::ModuleLoadStart { module_id }
            | LifecycleEvent::ModuleLoadEnd { module_id } => write!(f, "{} {}", kind, module_id),
            LifecycleEvent::InitializerStart { application }
            | LifecycleEvent::InitializerEnd { application }
            | LifecycleEvent::MainFunctionStart { application }
            | LifecycleEvent::MainFunctionEnd { application } => {
                write!(f, "{} {}", kind, application)
            }
            LifecycleEvent::EngineCreated | LifecycleEvent::EngineClosed => f.write_str(kind),
        }
    }
}
