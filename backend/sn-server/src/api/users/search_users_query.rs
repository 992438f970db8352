use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchUsersQuery {
    /// Search string; a username to resolve
    #[serde(default)]
    pub q: Option<String>,
}
