use masshaul_engine::{AlignmentRef, MaterialSource};

use crate::error::SelectionError;

/// Read-only view of one open host document, held for the duration of one
/// command.
///
/// The view borrows host state; opening and releasing it is the caller's
/// concern. Record handles are stable for the lifetime of the view, nothing
/// longer.
pub trait DocumentView: MaterialSource {
    /// The alignment the user picked, resolved to a handle plus display
    /// name.
    fn selected_alignment(&self) -> Result<AlignmentRef, SelectionError>;
}
