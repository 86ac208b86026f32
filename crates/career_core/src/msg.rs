use crate::{Company, SortOrder, VisitedSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Loader produced the de-duplicated company list.
    DirectoryLoaded(Vec<Company>),
    /// Every candidate source failed; initialization halts.
    DirectoryFailed(String),
    /// Visited record read from storage at startup.
    VisitedRestored(VisitedSet),
    /// User edited the search box.
    SearchChanged(String),
    SearchCleared,
    /// User checked or unchecked an industry filter.
    IndustryToggled(String),
    /// Move the focus within the industry filter list.
    FacetCursorMoved(i32),
    /// Toggle the industry under the facet cursor.
    FocusedIndustryToggled,
    /// Reset search text and industry selection.
    FiltersCleared,
    EmptySelectionToggled,
    SortChanged(SortOrder),
    SortCycled,
    /// Explicitly mark or unmark a company by its visited key.
    VisitedMarked { key: String, visited: bool },
    /// Flip the visited flag of a company by its visited key.
    VisitedToggled { key: String },
    /// Flip the visited flag of the row under the cursor.
    SelectedVisitedToggled,
    /// Remove every visited mark.
    VisitedCleared,
    HideVisitedToggled,
    /// Move the result-list cursor by the given number of rows.
    CursorMoved(i32),
    /// Open the career page of the row under the cursor.
    OpenSelected,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
