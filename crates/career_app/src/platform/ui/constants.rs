pub const APP_TITLE: &str = " Career Directory ";
pub const SEARCH_TITLE: &str = " Search ";
pub const FACETS_TITLE: &str = " Industries ";
pub const LIST_TITLE: &str = " Companies ";
pub const LOADING_TEXT: &str = "Loading company directory...";
pub const NO_RESULTS_TEXT: &str = "No companies match your search and filters";
pub const NO_FACETS_TEXT: &str = "(no industries)";
pub const ERROR_TITLE: &str = " Could not load the company directory ";
pub const KEY_HINTS: &str =
    "Up/Down move  Enter open  ^V visited  Left/Right+^F industry  Tab sort  ^R reset  ^O unvisited  ^E empty=  ^X clear  Esc quit";
pub const FACET_PANE_WIDTH: u16 = 30;
pub const PAGE_ROWS: i32 = 10;
