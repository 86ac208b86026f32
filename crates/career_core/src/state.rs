use crate::company::{industries, visited_key, Company, IndustryFacet};
use crate::view::{compute_view, DirectoryView, ViewQuery};
use crate::view_model::{AppViewModel, FacetView};
use crate::VisitedSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    /// Terminal for this run; carries the user-facing reason.
    Failed(String),
}

/// Controller state; every view is derived from it through [`compute_view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: LoadPhase,
    companies: Vec<Company>,
    facets: Vec<IndustryFacet>,
    query: ViewQuery,
    visited: VisitedSet,
    cursor: usize,
    facet_cursor: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a preconfigured query (sort order, default filters).
    pub fn with_query(query: ViewQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn directory_view(&self) -> DirectoryView {
        compute_view(&self.companies, &self.query, &self.visited)
    }

    pub fn view(&self) -> AppViewModel {
        let result = self.directory_view();
        let cursor = if result.is_empty() {
            None
        } else {
            Some(self.cursor.min(result.len() - 1))
        };
        let facets = self
            .facets
            .iter()
            .enumerate()
            .map(|(index, facet)| FacetView {
                name: facet.name.clone(),
                count: facet.count,
                selected: self.query.selected_industries.contains(&facet.name),
                focused: index == self.facet_cursor,
            })
            .collect();

        AppViewModel {
            phase: self.phase.clone(),
            result,
            facets,
            search: self.query.search.clone(),
            sort: self.query.sort,
            empty_selection: self.query.empty_selection,
            hide_visited: self.query.hide_visited,
            total: self.companies.len(),
            visited_count: self.visited_in_directory(),
            cursor,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_loaded(&mut self, companies: Vec<Company>) {
        self.facets = industries(&companies);
        self.companies = companies;
        self.phase = LoadPhase::Ready;
        self.cursor = 0;
        self.facet_cursor = 0;
        self.mark_dirty();
    }

    pub(crate) fn set_failed(&mut self, reason: String) {
        self.phase = LoadPhase::Failed(reason);
        self.mark_dirty();
    }

    pub(crate) fn set_visited(&mut self, visited: VisitedSet) {
        self.visited = visited;
        self.mark_dirty();
    }

    pub(crate) fn query_mut(&mut self) -> &mut ViewQuery {
        self.cursor = 0;
        self.mark_dirty();
        &mut self.query
    }

    pub(crate) fn visited_mut(&mut self) -> &mut VisitedSet {
        &mut self.visited
    }

    pub(crate) fn move_cursor(&mut self, delta: i32) {
        let len = self.directory_view().len();
        if len == 0 {
            return;
        }
        let current = self.cursor.min(len - 1);
        let next = offset(current, delta, len);
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn move_facet_cursor(&mut self, delta: i32) {
        if self.facets.is_empty() {
            return;
        }
        let next = offset(self.facet_cursor, delta, self.facets.len());
        if next != self.facet_cursor {
            self.facet_cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn focused_industry(&self) -> Option<String> {
        self.facets
            .get(self.facet_cursor)
            .map(|facet| facet.name.clone())
    }

    /// Visited key and company of the row under the cursor.
    pub(crate) fn selected(&self) -> Option<(String, Company)> {
        let view = self.directory_view();
        let rows = view.rows();
        if rows.is_empty() {
            return None;
        }
        let row = &rows[self.cursor.min(rows.len() - 1)];
        Some((visited_key(&row.company), row.company.clone()))
    }

    fn visited_in_directory(&self) -> usize {
        self.companies
            .iter()
            .filter(|company| self.visited.contains(&visited_key(company)))
            .count()
    }
}

fn offset(current: usize, delta: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (current as i64 + i64::from(delta)).clamp(0, max) as usize
}
