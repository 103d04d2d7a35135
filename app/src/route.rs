//! Route table for the console browser.
//!
//! Three screens, addressed by path: the credential gate at `/`, the
//! collection at `/home`, and the detail view at `/more/{name}`. `parse`
//! and `path` round-trip every route.

/// Screens the browser can display
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Credential gate at `/`
    Login,
    /// Collection listing and selection at `/home`
    Home,
    /// Detail view at `/more/{name}`
    MoreInfo {
        /// Route parameter naming the pokemon to show
        name: String,
    },
}

impl Route {
    /// Parse a path into a route.
    ///
    /// The path is trimmed first. Returns `None` for anything outside the
    /// route table, including `/more/` with an empty or multi-segment
    /// parameter.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        match path {
            "/" => Some(Self::Login),
            "/home" => Some(Self::Home),
            _ => {
                let name = path.strip_prefix("/more/")?;
                if name.is_empty() || name.contains('/') {
                    return None;
                }
                Some(Self::MoreInfo {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Format the route back into its path
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Home => "/home".to_string(),
            Self::MoreInfo { name } => format!("/more/{name}"),
        }
    }
}
