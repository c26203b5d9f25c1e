//! Limit and offset handling.

use serde::Serialize;

/// Parse a raw query parameter, falling back to `default` when it is missing
/// or not a non-negative integer.
pub fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parse a boolean query parameter. Anything unrecognized counts as absent.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Keep the first `limit` items.
pub fn truncate<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

/// Pagination metadata of a windowed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(total: usize, limit: usize, offset: usize) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

/// One window of a larger result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `items[offset..offset + limit]`, clamped to the collection.
pub fn paginate<T>(items: Vec<T>, limit: usize, offset: usize) -> Page<T> {
    let pagination = Pagination::new(items.len(), limit, offset);
    let items = items.into_iter().skip(offset).take(limit).collect();
    Page { items, pagination }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_defaults() {
        assert_eq!(parse_or(None, 20), 20);
        assert_eq!(parse_or(Some("abc"), 20), 20);
        assert_eq!(parse_or(Some("-5"), 20), 20);
        assert_eq!(parse_or(Some(""), 50), 50);
        assert_eq!(parse_or(Some("7"), 20), 7);
        assert_eq!(parse_or(Some(" 3 "), 20), 3);
        assert_eq!(parse_or(Some("0"), 20), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(None), None);
        assert_eq!(parse_flag(Some("true")), Some(true));
        assert_eq!(parse_flag(Some("TRUE")), Some(true));
        assert_eq!(parse_flag(Some("1")), Some(true));
        assert_eq!(parse_flag(Some("false")), Some(false));
        assert_eq!(parse_flag(Some("0")), Some(false));
        assert_eq!(parse_flag(Some("maybe")), None);
        assert_eq!(parse_flag(Some("")), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(truncate(vec![1, 2, 3], 10), vec![1, 2, 3]);
        assert!(truncate(vec![1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_has_more_iff_window_ends_before_total() {
        for total in 0..12 {
            for limit in 0..6 {
                for offset in 0..14 {
                    let p = Pagination::new(total, limit, offset);
                    assert_eq!(p.has_more, offset + limit < total);
                }
            }
        }
    }

    #[test]
    fn test_has_more_does_not_overflow() {
        let p = Pagination::new(10, usize::MAX, 5);
        assert!(!p.has_more);
    }

    #[test]
    fn test_pages_reconstruct_full_set() {
        let items: Vec<u32> = (0..23).collect();
        for limit in 1..8 {
            let mut rebuilt = Vec::new();
            let mut offset = 0;
            loop {
                let page = paginate(items.clone(), limit, offset);
                assert_eq!(page.pagination.total, items.len());
                rebuilt.extend(page.items);
                if !page.pagination.has_more {
                    break;
                }
                offset += limit;
            }
            assert_eq!(rebuilt, items, "limit {}", limit);
        }
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let page = paginate(vec![1, 2, 3], 10, 7);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(10, 3, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 10, "limit": 3, "offset": 3, "hasMore": true})
        );
    }
}
