use crate::error::Fault;
use crate::model::MaterialList;

/// Read access to a document's material list records.
///
/// Implementations yield every material list in the document, in document
/// enumeration order. A list the host cannot materialize surfaces as `Err`
/// carrying its record id; enumeration itself never fails.
pub trait MaterialSource {
    fn material_lists(&self) -> Vec<Result<MaterialList, Fault>>;
}

/// Pre-loaded lists with explicit per-list outcomes, for fixtures.
impl MaterialSource for Vec<Result<MaterialList, Fault>> {
    fn material_lists(&self) -> Vec<Result<MaterialList, Fault>> {
        self.clone()
    }
}

/// Pre-loaded lists that all read cleanly, for fixtures.
impl MaterialSource for Vec<MaterialList> {
    fn material_lists(&self) -> Vec<Result<MaterialList, Fault>> {
        self.iter().cloned().map(Ok).collect()
    }
}
