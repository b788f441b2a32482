/// Principal a search request runs as. Permission filtering against this
/// user happens entirely on the store side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedInUser {
    pub user_id: i64,
    pub org_id: i64,
    pub login: String,
}

// Required permission levels, lowest to highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PermissionLevel {
    #[default]
    View,
    Edit,
    Admin,
}
