use crate::aggregate::aggregate;
use crate::collect::collect;
use crate::model::{AlignmentRef, ReportMeta, ReportResult, ReportSummary};
use crate::source::MaterialSource;

/// Run the full pipeline for one alignment: collect its material lists,
/// aggregate quantities into rows, summarize, stamp metadata.
///
/// Infallible by construction. List and item read failures are contained as
/// faults in the result (collection faults first, then extraction faults,
/// each in encounter order), and a document with no matching data yields an
/// empty table.
pub fn run<S: MaterialSource + ?Sized>(source: &S, alignment: &AlignmentRef) -> ReportResult {
    let collected = collect(source, &alignment.id);
    let lists = collected.lists.len();

    let aggregation = aggregate(&collected.lists);

    let mut faults = collected.faults;
    faults.extend(aggregation.faults);

    let table = aggregation.table;
    let summary = ReportSummary {
        lists,
        rows: table.rows.len(),
        total_cut: table.total_cut,
        total_fill: table.total_fill,
        net_volume: table.net(),
        faults: faults.len(),
    };

    ReportResult {
        meta: ReportMeta {
            alignment: alignment.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        table,
        faults,
    }
}
