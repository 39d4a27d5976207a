use crate::error::{Fault, FaultReason};
use crate::model::{MaterialList, ReportTable, VolumeRow};

/// Aggregated volume table plus per-item extraction faults.
#[derive(Debug)]
pub struct Aggregation {
    pub table: ReportTable,
    pub faults: Vec<Fault>,
}

/// Emit one row per quantity record, with running cumulative cut/fill.
///
/// Traversal is list order, then item record order, then quantity record
/// order. The cumulative pair is initialized once and spans every list; a
/// row's volumes are added before its cumulative fields are assigned, so the
/// table totals equal the last row's cumulatives. An item whose quantity
/// table could not be read contributes no rows and one fault, and traversal
/// continues.
pub fn aggregate(lists: &[MaterialList]) -> Aggregation {
    let mut rows = Vec::new();
    let mut faults = Vec::new();
    let mut cum_cut = 0.0;
    let mut cum_fill = 0.0;

    for list in lists {
        for item in &list.items {
            let quantities = match &item.quantities {
                Ok(quantities) => quantities,
                Err(reason) => {
                    faults.push(Fault {
                        record_id: item.record_id.clone(),
                        reason: FaultReason::QuantityExtraction(reason.clone()),
                    });
                    continue;
                }
            };
            for quantity in quantities {
                cum_cut += quantity.cut_volume;
                cum_fill += quantity.fill_volume;
                rows.push(VolumeRow {
                    material_list: list.name.clone(),
                    material: item.name.clone(),
                    station_start: quantity.station_start,
                    station_end: quantity.station_end,
                    cut_volume: quantity.cut_volume,
                    fill_volume: quantity.fill_volume,
                    net_volume: quantity.cut_volume - quantity.fill_volume,
                    cumulative_cut: cum_cut,
                    cumulative_fill: cum_fill,
                });
            }
        }
    }

    Aggregation {
        table: ReportTable {
            rows,
            total_cut: cum_cut,
            total_fill: cum_fill,
        },
        faults,
    }
}
