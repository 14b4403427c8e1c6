//! Search and sort helpers shared by the back-office tables.

use std::cmp::Ordering;

/// Row types that can be matched against a free-text search query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Drops rows not matching the query. An empty or whitespace-only query
/// keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Case-insensitive containment check, the building block for
/// [`Searchable`] implementations.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sorts the list by the named column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort marker for a column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    } else {
        " \u{21c5}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        total: u32,
    }

    impl Row {
        fn new(name: &str, total: u32) -> Self {
            Self {
                name: name.to_string(),
                total,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(&self.name, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                "total" => self.total.cmp(&other.total),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let rows = vec![Row::new("Metro Store", 3), Row::new("City Market", 1)];
        assert_eq!(filter_list(rows.clone(), "").len(), 2);
        assert_eq!(filter_list(rows, "   ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = vec![Row::new("Metro Store", 3), Row::new("City Market", 1)];
        let filtered = filter_list(rows, "metro");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Metro Store");
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row::new("b", 2), Row::new("a", 3), Row::new("c", 1)];
        sort_list(&mut rows, "total", true);
        assert_eq!(rows[0].total, 1);
        sort_list(&mut rows, "total", false);
        assert_eq!(rows[0].total, 3);
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn unknown_field_preserves_order() {
        let mut rows = vec![Row::new("b", 2), Row::new("a", 3)];
        sort_list(&mut rows, "missing", true);
        assert_eq!(rows[0].name, "b");
    }
}
