/// Side effects requested by `update`; executed by the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistVisited { key: String, visited: bool },
    ClearVisited,
    OpenUrl { url: String },
}
