use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Paginated envelope `{count, next, previous, results}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Either list shape a collection endpoint may answer with. Decoded once at
/// the client boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged(PagedResponse<T>),
    Flat(Vec<T>),
    Unrecognized(serde_json::Value),
}

/// One page of items plus the server-side total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> ListPayload<T> {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ListPayload::Unrecognized(_))
    }

    /// Items plus the `next` link of a paged envelope.
    pub fn into_chunk(self) -> (Vec<T>, Option<String>) {
        match self {
            ListPayload::Paged(page) => (page.results, page.next.filter(|n| !n.is_empty())),
            ListPayload::Flat(items) => (items, None),
            ListPayload::Unrecognized(_) => (Vec::new(), None),
        }
    }

    /// A flat array counts as a single page holding everything.
    pub fn into_page(self) -> Page<T> {
        match self {
            ListPayload::Paged(page) => Page {
                total_count: page.count.max(page.results.len()),
                items: page.results,
            },
            ListPayload::Flat(items) => Page {
                total_count: items.len(),
                items,
            },
            ListPayload::Unrecognized(_) => Page {
                items: Vec::new(),
                total_count: 0,
            },
        }
    }
}

/// Collects a whole collection by following `next` links page by page.
#[derive(Debug)]
pub struct AllPages<T> {
    items: Vec<T>,
    visited: HashSet<String>,
}

impl<T> Default for AllPages<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visited: HashSet::new(),
        }
    }
}

impl<T> AllPages<T> {
    pub fn new(first_url: &str) -> Self {
        let mut pages = Self::default();
        pages.visited.insert(first_url.to_string());
        pages
    }

    /// Appends one page and returns the next url to fetch, `None` once done.
    /// A link back to a page already fetched ends the walk.
    pub fn push(&mut self, payload: ListPayload<T>) -> Option<String> {
        let (items, next) = payload.into_chunk();
        self.items.extend(items);
        next.filter(|url| self.visited.insert(url.clone()))
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Query string of a paginated list request: `?page&page_size&search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl ListQuery {
    /// `(name, value)` pairs for a request builder.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }
}

/// Number of pages; an empty list still has one page.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// 1-based `(first, last)` item numbers shown on `page`; `(0, 0)` when empty.
pub fn page_window(
    page: usize,
    page_size: usize,
    shown: usize,
    total_count: usize,
) -> (usize, usize) {
    if shown == 0 || total_count == 0 {
        return (0, 0);
    }
    let first = (page.saturating_sub(1)) * page_size + 1;
    let last = (first + shown - 1).min(total_count);
    (first, last)
}

/// "Showing X to Y of N entries".
pub fn showing_label(page: usize, page_size: usize, shown: usize, total_count: usize) -> String {
    let (first, last) = page_window(page, page_size, shown, total_count);
    format!("Showing {} to {} of {} entries", first, last, total_count)
}

/// Applies the search filter and page slicing locally, for lists already
/// held in memory.
pub fn paginate_local<T: Clone>(
    items: &[T],
    query: &ListQuery,
    matches: impl Fn(&T, &str) -> bool,
) -> Page<T> {
    let needle = query.search.trim().to_lowercase();
    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| needle.is_empty() || matches(item, &needle))
        .collect();
    let start = query.page.saturating_sub(1) * query.page_size;
    Page {
        total_count: filtered.len(),
        items: filtered
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_decode_paged() {
        let json = r#"{"count": 23, "next": "http://x/?page=2", "previous": null,
                       "results": [{"id": 1, "name": "Bole"}]}"#;
        let payload: ListPayload<Row> = serde_json::from_str(json).unwrap();
        let page = payload.into_page();
        assert_eq!(page.total_count, 23);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_decode_flat() {
        let json = r#"[{"id": 1, "name": "Bole"}, {"id": 2, "name": "Yeka"}]"#;
        let payload: ListPayload<Row> = serde_json::from_str(json).unwrap();
        assert!(payload.is_recognized());
        assert_eq!(payload.into_page().total_count, 2);
    }

    #[test]
    fn test_decode_unrecognized() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"{"detail": "Not found."}"#).unwrap();
        assert!(!payload.is_recognized());
        assert_eq!(payload.into_chunk(), (Vec::new(), None));
    }

    #[test]
    fn test_all_pages_follows_next() {
        let first: ListPayload<Row> = serde_json::from_str(
            r#"{"count": 3, "next": "http://x/units/?page=2", "previous": null,
                "results": [{"id": 1, "name": "Bole"}, {"id": 2, "name": "Yeka"}]}"#,
        )
        .unwrap();
        let second: ListPayload<Row> = serde_json::from_str(
            r#"{"count": 3, "next": null, "previous": "http://x/units/",
                "results": [{"id": 3, "name": "Arada"}]}"#,
        )
        .unwrap();

        let mut pages = AllPages::new("http://x/units/");
        assert_eq!(pages.push(first).as_deref(), Some("http://x/units/?page=2"));
        assert_eq!(pages.push(second), None);
        let ids: Vec<i64> = pages.into_items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_all_pages_stops_on_repeated_link() {
        let looping = r#"{"count": 9, "next": "http://x/units/?page=2",
                          "results": [{"id": 1, "name": "Bole"}]}"#;
        let mut pages = AllPages::new("http://x/units/");
        let payload: ListPayload<Row> = serde_json::from_str(looping).unwrap();
        assert!(pages.push(payload).is_some());
        let payload: ListPayload<Row> = serde_json::from_str(looping).unwrap();
        assert_eq!(pages.push(payload), None);
        assert_eq!(pages.into_items().len(), 2);
    }

    #[test]
    fn test_all_pages_flat_list_is_single_page() {
        let payload: ListPayload<Row> =
            serde_json::from_str(r#"[{"id": 1, "name": "Bole"}]"#).unwrap();
        let mut pages = AllPages::new("http://x/subcities/");
        assert_eq!(pages.push(payload), None);
        assert_eq!(pages.into_items().len(), 1);
    }

    #[test]
    fn test_query_pairs() {
        let mut query = ListQuery {
            page: 2,
            page_size: 10,
            search: String::new(),
        };
        assert_eq!(
            query.pairs(),
            vec![("page", "2".to_string()), ("page_size", "10".to_string())]
        );
        query.search = "bole".into();
        assert_eq!(query.pairs().len(), 3);
    }

    #[test]
    fn test_total_pages_and_window() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(page_window(2, 10, 3, 13), (11, 13));
        assert_eq!(page_window(1, 10, 0, 0), (0, 0));
        assert_eq!(
            showing_label(1, 10, 10, 23),
            "Showing 1 to 10 of 23 entries"
        );
    }

    #[test]
    fn test_paginate_local() {
        let rows: Vec<Row> = (1..=12)
            .map(|i| Row {
                id: i,
                name: if i % 2 == 0 { format!("Bole {}", i) } else { format!("Yeka {}", i) },
            })
            .collect();
        let query = ListQuery {
            page: 2,
            page_size: 4,
            search: "BOLE".into(),
        };
        let page = paginate_local(&rows, &query, |r, needle| {
            r.name.to_lowercase().contains(needle)
        });
        assert_eq!(page.total_count, 6);
        assert_eq!(page.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![10, 12]);
    }
}
