use serde::Serialize;

use crate::error::Fault;

// ---------------------------------------------------------------------------
// Input (host object model)
// ---------------------------------------------------------------------------

/// Opaque host handle for an alignment object. Equality is handle equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentId(pub String);

impl std::fmt::Display for AlignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved alignment selection: host handle plus display name.
#[derive(Debug, Clone)]
pub struct AlignmentRef {
    pub id: AlignmentId,
    pub name: String,
}

/// One material list record: an ordered run of material items owned by an
/// alignment.
#[derive(Debug, Clone)]
pub struct MaterialList {
    pub record_id: String,
    pub name: String,
    pub alignment: AlignmentId,
    pub items: Vec<MaterialItem>,
}

/// One material item, with the host's read outcome for its quantity table:
/// records in table order, or the reason extraction failed.
#[derive(Debug, Clone)]
pub struct MaterialItem {
    pub record_id: String,
    pub name: String,
    pub quantities: Result<Vec<QuantityRecord>, String>,
}

/// Cut/fill volumes over one station range. `station_start <= station_end`
/// and non-negative volumes are authoring-side invariants; values pass
/// through unchanged here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityRecord {
    pub station_start: f64,
    pub station_end: f64,
    pub cut_volume: f64,
    pub fill_volume: f64,
}

// ---------------------------------------------------------------------------
// Derived rows
// ---------------------------------------------------------------------------

/// One report row per quantity record, in traversal order. The cumulative
/// fields are running sums over the whole row sequence (across material
/// lists) and include this row's contribution.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeRow {
    pub material_list: String,
    pub material: String,
    pub station_start: f64,
    pub station_end: f64,
    pub cut_volume: f64,
    pub fill_volume: f64,
    pub net_volume: f64,
    pub cumulative_cut: f64,
    pub cumulative_fill: f64,
}

/// Ordered rows plus grand totals. Totals equal the last row's cumulative
/// values, or zero when there are no rows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub rows: Vec<VolumeRow>,
    pub total_cut: f64,
    pub total_fill: f64,
}

impl ReportTable {
    pub fn net(&self) -> f64 {
        self.total_cut - self.total_fill
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub lists: usize,
    pub rows: usize,
    pub total_cut: f64,
    pub total_fill: f64,
    pub net_volume: f64,
    pub faults: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    pub meta: ReportMeta,
    pub summary: ReportSummary,
    pub table: ReportTable,
    pub faults: Vec<Fault>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub alignment: String,
    pub engine_version: String,
    pub run_at: String,
}
