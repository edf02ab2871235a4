//! Reactive driver around [`ListState`].
//!
//! Owns the list state in a signal, runs the effects the reducer asks for
//! (requests, error timers) and turns results back into actions.

use contracts::domain::common::{EntityId, Resource};
use contracts::shared::api_error::{
    fetch_failed_message, mutation_failed_message, ApiError, Mutation,
};
use contracts::shared::list_state::{ListAction, ListEffect, ListState, MUTATION_ERROR_TTL_MS};
use contracts::shared::paging::{paginate_local, ListQuery, Page};
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;

use crate::shared::api_client::ApiClient;

pub type PageFuture<T> = LocalBoxFuture<'static, Result<Page<T>, ApiError>>;

/// Produces one page for a query.
pub type PageFetcher<T> = Arc<dyn Fn(ListQuery) -> PageFuture<T> + Send + Sync>;

pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    fetcher: StoredValue<PageFetcher<T>>,
    resource: Resource,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    pub fn new(resource: Resource, fetcher: PageFetcher<T>) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            fetcher: StoredValue::new(fetcher),
            resource,
        }
    }

    /// Pages come from the backend's paginated endpoint.
    pub fn remote(client: ApiClient, resource: Resource) -> Self
    where
        T: DeserializeOwned,
    {
        Self::new(
            resource,
            Arc::new(move |query: ListQuery| {
                let client = client.clone();
                async move { client.fetch_page(resource, &query).await }.boxed_local()
            }),
        )
    }

    /// Pages are cut from a list already in memory.
    pub fn local(
        resource: Resource,
        source: Signal<Vec<T>>,
        matches: fn(&T, &str) -> bool,
    ) -> Self {
        Self::new(
            resource,
            Arc::new(move |query: ListQuery| {
                let page = source.with_untracked(|items| paginate_local(items, &query, matches));
                future::ready(Ok(page)).boxed_local()
            }),
        )
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn dispatch(&self, action: ListAction<T>) {
        let Some(effect) = self.state.try_update(|s| s.apply(action)) else {
            return;
        };
        match effect {
            ListEffect::None => {}
            ListEffect::Reload => self.reload(),
            ListEffect::ClearErrorAfter {
                generation,
                delay_ms,
            } => {
                let this = *self;
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    this.dispatch(ListAction::ClearError(generation));
                });
            }
            ListEffect::Stale => {
                log::debug!("dropped stale {} response", self.resource.segment());
            }
        }
    }

    /// Requests the current page again.
    pub fn reload(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let Some(pending) = self
            .fetcher
            .try_with_value(|fetch| fetch(request.query.clone()))
        else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match pending.await {
                Ok(page) => this.dispatch(ListAction::Loaded {
                    request_id: request.id,
                    page,
                }),
                Err(error) => {
                    log::error!("fetching {} failed: {}", this.resource.segment(), error);
                    this.dispatch(ListAction::LoadFailed {
                        request_id: request.id,
                        message: fetch_failed_message(this.resource),
                        page_missing: error.is_not_found(),
                    });
                }
            }
        });
    }

    pub fn set_page(&self, page: usize) {
        self.dispatch(ListAction::SetPage(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.dispatch(ListAction::SetPageSize(page_size));
    }

    pub fn set_search(&self, search: String) {
        self.dispatch(ListAction::SetSearch(search));
    }

    pub fn toggle_expanded(&self, id: EntityId) {
        self.dispatch(ListAction::ToggleExpanded(id));
    }

    /// Shows `message` in the banner until `ttl_ms` elapses.
    pub fn show_error(&self, message: String, ttl_ms: u32) {
        self.dispatch(ListAction::ActionFailed { message, ttl_ms });
    }

    /// Reloads after a create or update made elsewhere (e.g. in a form).
    pub fn mutation_succeeded(&self) {
        self.dispatch(ListAction::MutationSucceeded);
    }

    /// Awaits `request`, then reloads on success or shows the failure.
    pub fn run_mutation<F>(&self, mutation: Mutation, request: F)
    where
        F: Future<Output = Result<(), ApiError>> + 'static,
    {
        let this = *self;
        spawn_local(async move {
            match request.await {
                Ok(()) => this.mutation_succeeded(),
                Err(error) => {
                    log::error!("{:?} on {} failed: {}", mutation, this.resource.segment(), error);
                    this.show_error(
                        mutation_failed_message(this.resource, mutation, &error),
                        MUTATION_ERROR_TTL_MS,
                    );
                }
            }
        });
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error_message())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn expanded(&self) -> Option<EntityId> {
        self.state.with(|s| s.expanded)
    }
}
