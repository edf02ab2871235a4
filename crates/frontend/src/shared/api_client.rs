//! Authenticated client for the employee-tracker REST resources.
//!
//! The session is handed in at construction; every request carries
//! `Authorization: Token <token>`. A 401 ends the session.

use contracts::domain::common::{EntityId, Resource};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{AllPages, ListPayload, ListQuery, Page};
use contracts::system::auth::Session;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{employee_tracker_base, join_url};
use crate::system::auth::context::{end_session, use_auth, AuthState};

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Option<Session>,
    auth: WriteSignal<AuthState>,
}

impl ApiClient {
    pub fn new(base: String, session: Option<Session>, auth: WriteSignal<AuthState>) -> Self {
        Self {
            base,
            session,
            auth,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let session = self.session.as_ref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder
            .header("Authorization", &session.authorization_header())
            .header("Accept", "application/json"))
    }

    async fn execute(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let request =
            request.map_err(|e| ApiError::Parse(format!("Failed to build request: {}", e)))?;
        log::debug!("request {}", request.url());

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(response.status(), &body);
        if error.is_auth_failure() {
            log::warn!("token rejected by backend, ending session");
            end_session(self.auth);
        }
        Err(error)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
        query: Option<&ListQuery>,
    ) -> Result<ListPayload<T>, ApiError> {
        let mut builder = self.authorize(Request::get(url))?;
        if let Some(query) = query {
            builder = builder.query(query.pairs().iter().map(|(k, v)| (*k, v.as_str())));
        }
        let text = self
            .execute(builder.build())
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let payload: ListPayload<T> =
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;
        if !payload.is_recognized() {
            log::warn!(
                "unrecognized list payload for {}, treating as empty",
                resource.segment()
            );
        }
        Ok(payload)
    }

    /// One page of `resource`, filtered server-side by `query.search`.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &ListQuery,
    ) -> Result<Page<T>, ApiError> {
        let url = self.url(&resource.collection_path());
        Ok(self.get_list(resource, &url, Some(query)).await?.into_page())
    }

    /// Every record of `resource`, for dropdowns and the unit tree. Paged
    /// responses are followed through their `next` links.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, ApiError> {
        let first = self.url(&resource.collection_path());
        let mut pages = AllPages::new(&first);
        let mut next = Some(first);
        while let Some(url) = next {
            let payload = self.get_list(resource, &url, None).await?;
            next = pages.push(payload);
        }
        Ok(pages.into_items())
    }

    pub async fn create<B: Serialize>(&self, resource: Resource, body: &B) -> Result<(), ApiError> {
        let builder = self.authorize(Request::post(&self.url(&resource.collection_path())))?;
        self.execute(builder.json(body)).await?;
        Ok(())
    }

    pub async fn update<B: Serialize>(
        &self,
        resource: Resource,
        id: EntityId,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.authorize(Request::put(&self.url(&resource.item_path(id))))?;
        self.execute(builder.json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, resource: Resource, id: EntityId) -> Result<(), ApiError> {
        let builder = self.authorize(Request::delete(&self.url(&resource.item_path(id))))?;
        self.execute(builder.build()).await?;
        Ok(())
    }
}

/// Client bound to the current session.
pub fn use_api_client() -> ApiClient {
    let (auth_state, set_auth_state) = use_auth();
    ApiClient::new(
        employee_tracker_base(),
        auth_state.with_untracked(|s| s.session.clone()),
        set_auth_state,
    )
}
