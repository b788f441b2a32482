use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A named sort strategy the store knows how to apply. The set is a small
/// closed enumeration; nothing registers options at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub direction: SortDirection,
}

pub const SORT_ALPHA_ASC: SortOption = SortOption {
    name: "alpha-asc",
    display_name: "Alphabetically (A-Z)",
    description: "Sorted by title in ascending order",
    direction: SortDirection::Asc,
};

pub const SORT_ALPHA_DESC: SortOption = SortOption {
    name: "alpha-desc",
    display_name: "Alphabetically (Z-A)",
    description: "Sorted by title in descending order",
    direction: SortDirection::Desc,
};

static SORT_OPTIONS: Lazy<HashMap<&'static str, SortOption>> = Lazy::new(|| {
    let mut options = HashMap::new();
    options.insert(SORT_ALPHA_ASC.name, SORT_ALPHA_ASC);
    options.insert(SORT_ALPHA_DESC.name, SORT_ALPHA_DESC);
    options
});

/// Looks a strategy up by name. Unknown names resolve to `None`, never to
/// an error.
pub fn sort_option(name: &str) -> Option<&'static SortOption> {
    SORT_OPTIONS.get(name)
}

/// All registered strategies, ordered by name.
pub fn sort_options() -> Vec<SortOption> {
    let mut options: Vec<SortOption> = SORT_OPTIONS.values().cloned().collect();
    options.sort_by_key(|o| o.name);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(sort_option("alpha-asc"), Some(&SORT_ALPHA_ASC));
        assert_eq!(sort_option("alpha-desc"), Some(&SORT_ALPHA_DESC));
        assert_eq!(
            sort_option("alpha-desc").map(|o| o.direction),
            Some(SortDirection::Desc)
        );
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert!(sort_option("").is_none());
        assert!(sort_option("most-viewed").is_none());
    }

    #[test]
    fn options_are_listed_in_name_order() {
        let names: Vec<&str> = sort_options().iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["alpha-asc", "alpha-desc"]);
    }
}
