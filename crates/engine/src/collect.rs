use crate::error::Fault;
use crate::model::{AlignmentId, MaterialList};
use crate::source::MaterialSource;

/// Material lists owned by one alignment, plus list-level read faults.
#[derive(Debug)]
pub struct Collected {
    pub lists: Vec<MaterialList>,
    pub faults: Vec<Fault>,
}

/// Filter the document's material lists down to those owned by `alignment`.
///
/// Order-preserving: kept lists appear in document enumeration order. An
/// unreadable list has no readable owner, so its fault is recorded no matter
/// which alignment was requested. An empty result is valid (no data), not an
/// error.
pub fn collect<S: MaterialSource + ?Sized>(source: &S, alignment: &AlignmentId) -> Collected {
    let mut lists = Vec::new();
    let mut faults = Vec::new();

    for entry in source.material_lists() {
        match entry {
            Ok(list) if list.alignment == *alignment => lists.push(list),
            Ok(_) => {}
            Err(fault) => faults.push(fault),
        }
    }

    Collected { lists, faults }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultReason;

    fn list(record_id: &str, name: &str, alignment: &str) -> MaterialList {
        MaterialList {
            record_id: record_id.into(),
            name: name.into(),
            alignment: AlignmentId(alignment.into()),
            items: Vec::new(),
        }
    }

    fn unreadable(record_id: &str) -> Fault {
        Fault {
            record_id: record_id.into(),
            reason: FaultReason::ListUnreadable("proxy object lost".into()),
        }
    }

    #[test]
    fn filters_by_alignment_in_document_order() {
        let source = vec![
            Ok(list("ml_1", "Earthworks A", "align_7")),
            Ok(list("ml_2", "Earthworks B", "align_3")),
            Ok(list("ml_3", "Earthworks C", "align_7")),
        ];
        let collected = collect(&source, &AlignmentId("align_7".into()));
        assert_eq!(collected.lists.len(), 2);
        assert_eq!(collected.lists[0].record_id, "ml_1");
        assert_eq!(collected.lists[1].record_id, "ml_3");
        assert!(collected.faults.is_empty());
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let source = vec![Ok(list("ml_1", "Earthworks A", "align_7"))];
        let collected = collect(&source, &AlignmentId("align_9".into()));
        assert!(collected.lists.is_empty());
        assert!(collected.faults.is_empty());
    }

    #[test]
    fn unreadable_list_faults_for_any_alignment() {
        // An unreadable list has no owner to check against.
        let source = vec![
            Ok(list("ml_1", "Earthworks A", "align_7")),
            Err(unreadable("ml_2")),
            Ok(list("ml_3", "Earthworks C", "align_7")),
        ];
        let collected = collect(&source, &AlignmentId("align_9".into()));
        assert!(collected.lists.is_empty());
        assert_eq!(collected.faults.len(), 1);
        assert_eq!(collected.faults[0].record_id, "ml_2");
    }

    #[test]
    fn faults_keep_encounter_order() {
        let source = vec![
            Err(unreadable("ml_1")),
            Ok(list("ml_2", "Earthworks B", "align_7")),
            Err(unreadable("ml_3")),
        ];
        let collected = collect(&source, &AlignmentId("align_7".into()));
        assert_eq!(collected.lists.len(), 1);
        assert_eq!(collected.faults[0].record_id, "ml_1");
        assert_eq!(collected.faults[1].record_id, "ml_3");
    }
}
