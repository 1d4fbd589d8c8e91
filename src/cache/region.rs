//! Cache Region Module
//!
//! The fixed set of cache partitions, one per proxied endpoint.

use std::fmt;

// == Region ==
/// Identifies one independently-bounded cache partition.
///
/// The set is fixed before the server accepts its first request and never
/// changes afterwards. A key is only ever visible inside its own region, so
/// an id used as a "lookup" key and the same text used as a "search" name
/// address two unrelated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Search-by-name responses, keyed by the requested name
    Search,
    /// The category listing, a single shared entry
    Categories,
    /// The random-meal response, a single shared entry
    Random,
    /// Lookup-by-id responses, keyed by the requested id
    Lookup,
    /// Filter-by-category responses, keyed by the requested category
    Filter,
}

impl Region {
    /// Every region, in declaration order (this order indexes the store table).
    pub const ALL: [Region; 5] = [
        Region::Search,
        Region::Categories,
        Region::Random,
        Region::Lookup,
        Region::Filter,
    ];

    /// The region's stable name, used in stats bodies and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Search => "search",
            Region::Categories => "categories",
            Region::Random => "random",
            Region::Lookup => "lookup",
            Region::Filter => "filter",
        }
    }

    /// Index into the per-region store table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_regions_have_distinct_names_and_indexes() {
        let names: HashSet<&str> = Region::ALL.iter().map(|r| r.name()).collect();
        let indexes: HashSet<usize> = Region::ALL.iter().map(|r| r.index()).collect();

        assert_eq!(names.len(), Region::ALL.len());
        assert_eq!(indexes.len(), Region::ALL.len());
    }

    #[test]
    fn test_indexes_match_declaration_order() {
        for (position, region) in Region::ALL.iter().enumerate() {
            assert_eq!(region.index(), position);
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Region::Search.to_string(), "search");
        assert_eq!(Region::Lookup.to_string(), "lookup");
    }
}
