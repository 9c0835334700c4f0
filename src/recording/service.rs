use serde::{Serialize, Deserialize};

/// Default namespace reserved for bridge plumbing services.
pub const INTERNAL_SERVICE_PREFIX: &str = "zipline/";

/// Capabilities the bridge attaches to its own plumbing services.
/// Closed set: anything else is a user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalMarker {
    /// Service carries a cancellation callback for an in-flight call.
    CancelCallback,
    /// Service resumes a suspended call on the other side of the bridge.
    SuspendCallback,
}

/// A service handle as seen by the interception layer.
///
/// The recorder never calls into the service; it only asks whether the
/// handle is one of the bridge's own callbacks.
pub trait Service: Send + Sync {
    fn marker(&self) -> Option<InternalMarker> {
        None
    }
}

/// Pure classification: a marker on the handle, or a name inside the
/// reserved namespace, makes the service internal.
pub fn is_internal(name: Option<&str>, service: Option<&dyn Service>) -> bool {
    is_internal_with_prefix(name, service, INTERNAL_SERVICE_PREFIX)
}

pub fn is_internal_with_prefix(
    name: Option<&str>,
    service: Option<&dyn Service>,
    prefix: &str,
) -> bool {
    let marked = match service.and_then(|s| s.marker()) {
        Some(InternalMarker::CancelCallback) | Some(InternalMarker::SuspendCallback) => true,
        None => false,
    };

    marked || name.is_some_and(|n| n.starts_with(prefix))
}
