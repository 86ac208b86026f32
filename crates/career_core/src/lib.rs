//! Career directory core: domain model, filter/sort pipeline and pure state machine.
mod company;
mod effect;
mod msg;
mod state;
mod update;
mod view;
mod view_model;
mod visited;

pub use company::{
    collate, dedupe, industries, prepare, visited_key, Company, CompanyKey, DirectoryDocument,
    IndustryFacet,
};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, LoadPhase};
pub use update::update;
pub use view::{compute_view, CompanyRow, DirectoryView, EmptySelection, SortOrder, ViewQuery};
pub use view_model::{AppViewModel, FacetView};
pub use visited::VisitedSet;
