//! State and transitions of a paginated, searchable list page.
//!
//! The reducer is pure: [`ListState::apply`] mutates the state and returns the
//! [`ListEffect`] the caller must run (issue a request, arm an error timer).

use super::paging::{total_pages, ListQuery, Page};
use crate::domain::common::EntityId;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const SEARCH_DEBOUNCE_MS: u32 = 500;
pub const VALIDATION_ERROR_TTL_MS: u32 = 5_000;
pub const MUTATION_ERROR_TTL_MS: u32 = 7_000;
pub const FORM_DATA_ERROR_TTL_MS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    /// A list request failed; stays until the next successful load.
    Fetch,
    /// Validation or mutation failure; cleared by its timer.
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListError {
    pub message: String,
    pub generation: u64,
    pub source: ErrorSource,
}

/// A list request handed out by [`ListState::begin_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub id: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    Loaded { request_id: u64, page: Page<T> },
    LoadFailed {
        request_id: u64,
        message: String,
        /// The backend has no such page (404 past the last page).
        page_missing: bool,
    },
    SetPage(usize),
    SetPageSize(usize),
    /// Debounced search text.
    SetSearch(String),
    ToggleExpanded(EntityId),
    Refresh,
    MutationSucceeded,
    ActionFailed { message: String, ttl_ms: u32 },
    ClearError(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEffect {
    None,
    Reload,
    ClearErrorAfter { generation: u64, delay_ms: u32 },
    /// A response for a superseded request was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub phase: ListPhase,
    pub error: Option<ListError>,
    pub expanded: Option<EntityId>,
    loaded_once: bool,
    last_request: u64,
    in_flight: Option<u64>,
    error_generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            phase: ListPhase::Idle,
            error: None,
            expanded: None,
            loaded_once: false,
            last_request: 0,
            in_flight: None,
            error_generation: 0,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            search: self.search.clone(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.message.clone())
    }

    /// Starts a request for the current query. Any earlier request still in
    /// flight becomes stale.
    pub fn begin_load(&mut self) -> ListRequest {
        self.last_request += 1;
        self.in_flight = Some(self.last_request);
        self.phase = ListPhase::Loading;
        ListRequest {
            id: self.last_request,
            query: self.query(),
        }
    }

    fn set_error(&mut self, message: String, source: ErrorSource) -> u64 {
        self.error_generation += 1;
        self.error = Some(ListError {
            message,
            generation: self.error_generation,
            source,
        });
        self.error_generation
    }

    fn settle(&mut self, request_id: u64) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn apply(&mut self, action: ListAction<T>) -> ListEffect {
        match action {
            ListAction::Loaded { request_id, page } => {
                if !self.settle(request_id) {
                    return ListEffect::Stale;
                }
                self.items = page.items;
                self.total_count = page.total_count;
                self.phase = ListPhase::Loaded;
                self.loaded_once = true;
                self.expanded = None;
                if matches!(&self.error, Some(e) if e.source == ErrorSource::Fetch) {
                    self.error = None;
                }
                // The page emptied under us (e.g. its last row was deleted).
                let last = self.total_pages();
                if self.items.is_empty() && self.total_count > 0 && self.page > last {
                    self.page = last;
                    return ListEffect::Reload;
                }
                ListEffect::None
            }
            ListAction::LoadFailed {
                request_id,
                message,
                page_missing,
            } => {
                if !self.settle(request_id) {
                    return ListEffect::Stale;
                }
                self.phase = if self.loaded_once {
                    ListPhase::Loaded
                } else {
                    ListPhase::Idle
                };
                if page_missing && self.has_previous() {
                    self.page -= 1;
                    return ListEffect::Reload;
                }
                self.set_error(message, ErrorSource::Fetch);
                ListEffect::None
            }
            ListAction::SetPage(page) => {
                if page < 1 || page > self.total_pages() || page == self.page {
                    return ListEffect::None;
                }
                self.page = page;
                ListEffect::Reload
            }
            ListAction::SetPageSize(size) => {
                let size = size.max(1);
                if size == self.page_size {
                    return ListEffect::None;
                }
                self.page_size = size;
                self.page = 1;
                ListEffect::Reload
            }
            ListAction::SetSearch(search) => {
                if search == self.search {
                    return ListEffect::None;
                }
                self.search = search;
                self.page = 1;
                ListEffect::Reload
            }
            ListAction::ToggleExpanded(id) => {
                self.expanded = if self.expanded == Some(id) {
                    None
                } else {
                    Some(id)
                };
                ListEffect::None
            }
            ListAction::Refresh => ListEffect::Reload,
            ListAction::MutationSucceeded => {
                self.error = None;
                ListEffect::Reload
            }
            ListAction::ActionFailed { message, ttl_ms } => {
                let generation = self.set_error(message, ErrorSource::Action);
                ListEffect::ClearErrorAfter {
                    generation,
                    delay_ms: ttl_ms,
                }
            }
            ListAction::ClearError(generation) => {
                if matches!(&self.error, Some(e) if e.generation == generation) {
                    self.error = None;
                }
                ListEffect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<i64>, total_count: usize) -> Page<i64> {
        Page { items, total_count }
    }

    fn loaded(total: usize) -> ListState<i64> {
        let mut state = ListState::new(10);
        let req = state.begin_load();
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page((1..=10).collect(), total),
        });
        state
    }

    #[test]
    fn test_initial_load() {
        let mut state: ListState<i64> = ListState::default();
        assert_eq!(state.phase, ListPhase::Idle);
        let req = state.begin_load();
        assert_eq!(req.query.page, 1);
        assert_eq!(req.query.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.is_loading());
        let effect = state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![1, 2], 2),
        });
        assert_eq!(effect, ListEffect::None);
        assert_eq!(state.phase, ListPhase::Loaded);
        assert_eq!(state.items, vec![1, 2]);
        assert!(!state.has_next());
    }

    #[test]
    fn test_set_page_bounds() {
        let mut state = loaded(25);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.apply(ListAction::SetPage(0)), ListEffect::None);
        assert_eq!(state.apply(ListAction::SetPage(4)), ListEffect::None);
        assert_eq!(state.page, 1);
        assert_eq!(state.apply(ListAction::SetPage(3)), ListEffect::Reload);
        assert_eq!(state.page, 3);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut state = loaded(25);
        state.apply(ListAction::SetPage(2));
        assert_eq!(
            state.apply(ListAction::SetSearch("bole".into())),
            ListEffect::Reload
        );
        assert_eq!(state.page, 1);
        assert_eq!(state.query().search, "bole");
        assert_eq!(
            state.apply(ListAction::SetSearch("bole".into())),
            ListEffect::None
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded(25);
        let first = state.begin_load();
        let second = state.begin_load();
        assert_eq!(
            state.apply(ListAction::Loaded {
                request_id: second.id,
                page: page(vec![42], 1),
            }),
            ListEffect::None
        );
        assert_eq!(
            state.apply(ListAction::Loaded {
                request_id: first.id,
                page: page(vec![7, 8], 2),
            }),
            ListEffect::Stale
        );
        assert_eq!(state.items, vec![42]);
        assert_eq!(
            state.apply(ListAction::LoadFailed {
                request_id: first.id,
                message: "late".into(),
                page_missing: false,
            }),
            ListEffect::Stale
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fetch_failure_keeps_data() {
        let mut state = loaded(25);
        let req = state.begin_load();
        state.apply(ListAction::LoadFailed {
            request_id: req.id,
            message: "Failed to fetch subcities.".into(),
            page_missing: false,
        });
        assert_eq!(state.phase, ListPhase::Loaded);
        assert_eq!(state.items.len(), 10);
        assert_eq!(
            state.error_message().as_deref(),
            Some("Failed to fetch subcities.")
        );

        let req = state.begin_load();
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![1], 1),
        });
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_before_first_load_is_idle() {
        let mut state: ListState<i64> = ListState::default();
        let req = state.begin_load();
        state.apply(ListAction::LoadFailed {
            request_id: req.id,
            message: "down".into(),
            page_missing: false,
        });
        assert_eq!(state.phase, ListPhase::Idle);
    }

    #[test]
    fn test_error_timer_clears_only_its_own_error() {
        let mut state = loaded(5);
        let first = state.apply(ListAction::ActionFailed {
            message: "first".into(),
            ttl_ms: MUTATION_ERROR_TTL_MS,
        });
        let second = state.apply(ListAction::ActionFailed {
            message: "second".into(),
            ttl_ms: VALIDATION_ERROR_TTL_MS,
        });
        let (
            ListEffect::ClearErrorAfter {
                generation: g1,
                delay_ms,
            },
            ListEffect::ClearErrorAfter { generation: g2, .. },
        ) = (first, second)
        else {
            panic!("expected timers");
        };
        assert_eq!(delay_ms, MUTATION_ERROR_TTL_MS);
        state.apply(ListAction::ClearError(g1));
        assert_eq!(state.error_message().as_deref(), Some("second"));
        state.apply(ListAction::ClearError(g2));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_action_error_survives_reload() {
        let mut state = loaded(5);
        state.apply(ListAction::ActionFailed {
            message: "Deletion failed: in use".into(),
            ttl_ms: MUTATION_ERROR_TTL_MS,
        });
        let req = state.begin_load();
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![1], 1),
        });
        assert!(state.error.is_some());
    }

    #[test]
    fn test_mutation_success_clears_error_and_reloads() {
        let mut state = loaded(5);
        state.apply(ListAction::ActionFailed {
            message: "x".into(),
            ttl_ms: 1,
        });
        assert_eq!(state.apply(ListAction::MutationSucceeded), ListEffect::Reload);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_expanded_row_toggles_and_collapses_on_load() {
        let mut state = loaded(5);
        state.apply(ListAction::ToggleExpanded(3));
        assert_eq!(state.expanded, Some(3));
        state.apply(ListAction::ToggleExpanded(4));
        assert_eq!(state.expanded, Some(4));
        state.apply(ListAction::ToggleExpanded(4));
        assert_eq!(state.expanded, None);

        state.apply(ListAction::ToggleExpanded(4));
        let req = state.begin_load();
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![1], 1),
        });
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_emptied_last_page_steps_back() {
        let mut state = loaded(21);
        state.apply(ListAction::SetPage(3));
        let req = state.begin_load();
        let effect = state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![], 20),
        });
        assert_eq!(effect, ListEffect::Reload);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_deleting_only_row_of_last_page_steps_back() {
        let mut state = loaded(21);
        state.apply(ListAction::SetPage(3));
        let req = state.begin_load();
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page(vec![21], 21),
        });
        assert_eq!(state.apply(ListAction::MutationSucceeded), ListEffect::Reload);

        let req = state.begin_load();
        let effect = state.apply(ListAction::LoadFailed {
            request_id: req.id,
            message: "Failed to fetch woredas.".into(),
            page_missing: true,
        });
        assert_eq!(effect, ListEffect::Reload);
        assert_eq!(state.page, 2);
        assert!(state.error.is_none());

        let req = state.begin_load();
        assert_eq!(req.query.page, 2);
        state.apply(ListAction::Loaded {
            request_id: req.id,
            page: page((11..=20).collect(), 20),
        });
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_missing_first_page_reports_error() {
        let mut state: ListState<i64> = ListState::default();
        let req = state.begin_load();
        let effect = state.apply(ListAction::LoadFailed {
            request_id: req.id,
            message: "Failed to fetch woredas.".into(),
            page_missing: true,
        });
        assert_eq!(effect, ListEffect::None);
        assert_eq!(state.page, 1);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_page_size_change() {
        let mut state = loaded(25);
        state.apply(ListAction::SetPage(2));
        assert_eq!(state.apply(ListAction::SetPageSize(25)), ListEffect::Reload);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 1);
    }
}
