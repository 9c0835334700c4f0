pub mod recording;

// Re-export the pieces tests touch directly
pub use recording::{
    Call, CallResult, EntryFilter, EventListener, EventRecorder, Failure, InternalMarker,
    LogEntry, RecorderConfig, RecorderError, Service, SharedRecorder,
};
