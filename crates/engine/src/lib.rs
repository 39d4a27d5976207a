//! `masshaul-engine` - earthwork quantity aggregation and reporting.
//!
//! Pure engine crate: reads material list records through a capability
//! trait, returns aggregated volume rows plus rendered report text. No IO
//! or host dependencies.

pub mod aggregate;
pub mod collect;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

pub use config::ReportStyle;
pub use engine::run;
pub use error::{Fault, FaultReason, StyleError};
pub use model::{
    AlignmentId, AlignmentRef, MaterialItem, MaterialList, QuantityRecord, ReportResult,
    ReportTable, VolumeRow,
};
pub use render::{render, NO_DATA_NOTICE};
pub use source::MaterialSource;
