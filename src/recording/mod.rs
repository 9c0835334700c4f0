//! Ordered capture of bridge lifecycle events for test assertions.
//!
//! # ORDERING INVARIANT
//! Entries land in the log in exactly the order their hooks were invoked.
//! Nothing is removed except by a consuming read, and nothing is mutated
//! after it is appended.
//!
//! # CONSUMPTION INVARIANT
//! Reads are destructive and forward-only. An entry skipped by a filter is
//! gone; a test can never observe the same event twice.

pub mod config;
pub mod entry;
pub mod error;
pub mod event;
pub mod filter;
pub mod listener;
pub mod recorder;
pub mod service;
pub mod shared;

pub use config::RecorderConfig;
pub use entry::LogEntry;
pub use error::RecorderError;
pub use event::{Call, CallResult, Failure, LifecycleEvent, StartToken};
pub use filter::EntryFilter;
pub use listener::EventListener;
pub use recorder::EventRecorder;
pub use service::{is_internal, InternalMarker, Service, INTERNAL_SERVICE_PREFIX};
pub use shared::SharedRecorder;
