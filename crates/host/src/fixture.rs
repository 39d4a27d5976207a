use masshaul_engine::{
    AlignmentId, AlignmentRef, Fault, FaultReason, MaterialItem, MaterialList, MaterialSource,
    QuantityRecord,
};

use crate::document::DocumentView;
use crate::error::{FixtureError, SelectionError};

// ---------------------------------------------------------------------------
// In-memory document
// ---------------------------------------------------------------------------

/// In-memory document for tests and host-free development. Builder-style:
/// add lists and faults in enumeration order, then select an alignment.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    entries: Vec<Result<MaterialList, Fault>>,
    selection: Option<AlignmentRef>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list: MaterialList) -> Self {
        self.entries.push(Ok(list));
        self
    }

    pub fn with_lists(mut self, lists: Vec<MaterialList>) -> Self {
        self.entries.extend(lists.into_iter().map(Ok));
        self
    }

    /// A list record the host cannot materialize.
    pub fn with_unreadable_list(mut self, record_id: &str, reason: &str) -> Self {
        self.entries.push(Err(Fault {
            record_id: record_id.into(),
            reason: FaultReason::ListUnreadable(reason.into()),
        }));
        self
    }

    pub fn with_selection(mut self, id: &str, name: &str) -> Self {
        self.selection = Some(AlignmentRef {
            id: AlignmentId(id.into()),
            name: name.into(),
        });
        self
    }
}

impl MaterialSource for InMemoryDocument {
    fn material_lists(&self) -> Vec<Result<MaterialList, Fault>> {
        self.entries.clone()
    }
}

impl DocumentView for InMemoryDocument {
    fn selected_alignment(&self) -> Result<AlignmentRef, SelectionError> {
        self.selection.clone().ok_or(SelectionError::NoSelection)
    }
}

// ---------------------------------------------------------------------------
// CSV fixture loader
// ---------------------------------------------------------------------------

/// Parse fixture CSV into material lists.
///
/// Expected header:
/// `alignment,material_list,material,station_start,station_end,cut_volume,fill_volume`.
/// Rows group into lists by the (alignment, material list) pair's first
/// appearance and into items by the material name's first appearance within
/// the list; quantity order follows row order throughout. Record ids are
/// assigned positionally (`ml_1`, `it_1_2`, ...).
pub fn load_csv_lists(csv_data: &str) -> Result<Vec<MaterialList>, FixtureError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| FixtureError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &str| -> Result<usize, FixtureError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| FixtureError::MissingColumn(name.into()))
    };

    let alignment_idx = idx("alignment")?;
    let list_idx = idx("material_list")?;
    let material_idx = idx("material")?;
    let start_idx = idx("station_start")?;
    let end_idx = idx("station_end")?;
    let cut_idx = idx("cut_volume")?;
    let fill_idx = idx("fill_volume")?;

    let mut lists: Vec<MaterialList> = Vec::new();

    for (row_number, record) in reader.records().enumerate() {
        let record = record.map_err(|e| FixtureError::Csv(e.to_string()))?;
        // Header occupies line 1.
        let line = row_number + 2;

        let alignment = record.get(alignment_idx).unwrap_or("").to_string();
        let list_name = record.get(list_idx).unwrap_or("").to_string();
        let material = record.get(material_idx).unwrap_or("").to_string();

        let number = |i: usize, column: &str| -> Result<f64, FixtureError> {
            let value = record.get(i).unwrap_or("");
            value.trim().parse().map_err(|_| FixtureError::Parse {
                line,
                column: column.into(),
                value: value.into(),
            })
        };

        let quantity = QuantityRecord {
            station_start: number(start_idx, "station_start")?,
            station_end: number(end_idx, "station_end")?,
            cut_volume: number(cut_idx, "cut_volume")?,
            fill_volume: number(fill_idx, "fill_volume")?,
        };

        let list_pos = match lists
            .iter()
            .position(|l| l.name == list_name && l.alignment.0 == alignment)
        {
            Some(pos) => pos,
            None => {
                lists.push(MaterialList {
                    record_id: format!("ml_{}", lists.len() + 1),
                    name: list_name,
                    alignment: AlignmentId(alignment),
                    items: Vec::new(),
                });
                lists.len() - 1
            }
        };

        let items = &mut lists[list_pos].items;
        let item_pos = match items.iter().position(|i| i.name == material) {
            Some(pos) => pos,
            None => {
                items.push(MaterialItem {
                    record_id: format!("it_{}_{}", list_pos + 1, items.len() + 1),
                    name: material,
                    quantities: Ok(Vec::new()),
                });
                items.len() - 1
            }
        };

        if let Ok(quantities) = &mut items[item_pos].quantities {
            quantities.push(quantity);
        }
    }

    Ok(lists)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "\
alignment,material_list,material,station_start,station_end,cut_volume,fill_volume
align_7,Earthworks,Topsoil,0.0,100.0,10.0,4.0
align_7,Earthworks,Topsoil,100.0,200.0,5.0,6.0
align_7,Earthworks,Rock,0.0,100.0,2.5,0.0
align_3,Other Road,Borrow,0.0,50.0,0.0,7.5
";

    #[test]
    fn load_groups_by_first_appearance() {
        let lists = load_csv_lists(BASIC).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Earthworks");
        assert_eq!(lists[0].alignment, AlignmentId("align_7".into()));
        assert_eq!(lists[0].items.len(), 2);
        assert_eq!(lists[0].items[0].name, "Topsoil");
        assert_eq!(lists[0].items[1].name, "Rock");
        assert_eq!(lists[1].name, "Other Road");

        let topsoil = lists[0].items[0].quantities.as_ref().unwrap();
        assert_eq!(topsoil.len(), 2);
        assert_eq!(topsoil[0].cut_volume, 10.0);
        assert_eq!(topsoil[1].station_start, 100.0);
    }

    #[test]
    fn same_list_name_under_two_alignments_stays_separate() {
        let csv = "\
alignment,material_list,material,station_start,station_end,cut_volume,fill_volume
align_7,Earthworks,Topsoil,0.0,100.0,1.0,0.0
align_3,Earthworks,Topsoil,0.0,100.0,2.0,0.0
";
        let lists = load_csv_lists(csv).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].alignment, AlignmentId("align_7".into()));
        assert_eq!(lists[1].alignment, AlignmentId("align_3".into()));
    }

    #[test]
    fn record_ids_are_positional() {
        let lists = load_csv_lists(BASIC).unwrap();
        assert_eq!(lists[0].record_id, "ml_1");
        assert_eq!(lists[0].items[0].record_id, "it_1_1");
        assert_eq!(lists[0].items[1].record_id, "it_1_2");
        assert_eq!(lists[1].record_id, "ml_2");
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "alignment,material_list,material,station_start,station_end,cut_volume\n";
        let err = load_csv_lists(csv).unwrap_err();
        assert!(err.to_string().contains("missing column 'fill_volume'"));
    }

    #[test]
    fn bad_number_reports_line_and_column() {
        let csv = "\
alignment,material_list,material,station_start,station_end,cut_volume,fill_volume
align_7,Earthworks,Topsoil,0.0,100.0,ten,4.0
";
        let err = load_csv_lists(csv).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("cut_volume"));
        assert!(msg.contains("'ten'"));
    }

    #[test]
    fn in_memory_document_selection() {
        let doc = InMemoryDocument::new().with_selection("align_7", "Main Street");
        let selected = doc.selected_alignment().unwrap();
        assert_eq!(selected.id, AlignmentId("align_7".into()));
        assert_eq!(selected.name, "Main Street");

        let unselected = InMemoryDocument::new();
        assert_eq!(
            unselected.selected_alignment().unwrap_err(),
            SelectionError::NoSelection
        );
    }

    #[test]
    fn in_memory_document_preserves_entry_order() {
        let lists = load_csv_lists(BASIC).unwrap();
        let doc = InMemoryDocument::new()
            .with_lists(lists)
            .with_unreadable_list("ml_ghost", "record vanished");
        let entries = doc.material_lists();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_ok());
        assert!(entries[2].is_err());
    }
}
