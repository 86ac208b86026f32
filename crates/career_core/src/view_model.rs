use crate::{CompanyRow, DirectoryView, EmptySelection, LoadPhase, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetView {
    pub name: String,
    pub count: usize,
    pub selected: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    pub result: DirectoryView,
    pub facets: Vec<FacetView>,
    pub search: String,
    pub sort: SortOrder,
    pub empty_selection: EmptySelection,
    pub hide_visited: bool,
    pub total: usize,
    pub visited_count: usize,
    /// Row under the cursor; `None` when the result is empty.
    pub cursor: Option<usize>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn rows(&self) -> &[CompanyRow] {
        self.result.rows()
    }

    pub fn shown(&self) -> usize {
        self.result.len()
    }

    pub fn selected_row(&self) -> Option<&CompanyRow> {
        self.cursor.and_then(|index| self.rows().get(index))
    }
}
