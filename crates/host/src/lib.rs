//! `masshaul-host` - host-side integration for the earthwork volume report.
//!
//! The engine stays pure; this crate owns the document seam: the selection
//! and enumeration view, the report command, output sinks, and an in-memory
//! fixture document with a CSV loader for tests.

pub mod command;
pub mod document;
pub mod error;
pub mod fixture;
pub mod sink;

pub use command::{run_report, CommandOutput};
pub use document::DocumentView;
pub use error::{FixtureError, SelectionError};
pub use fixture::{load_csv_lists, InMemoryDocument};
pub use sink::{BufferSink, ReportSink, WriteSink};
