use crate::domain::common::Resource;
use thiserror::Error;

/// Failure of a call to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or token rejected")]
    Unauthorized,
    #[error("conflict: {detail}")]
    Conflict { detail: String },
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classifies a non-2xx response. JSON bodies are kept in compact form so
    /// they can be shown verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        let json = serde_json::from_str::<serde_json::Value>(body).ok();
        match status {
            401 => ApiError::Unauthorized,
            409 => match json
                .as_ref()
                .and_then(|v| v.get("detail"))
                .and_then(|d| d.as_str())
            {
                Some(detail) => ApiError::Conflict {
                    detail: detail.to_string(),
                },
                None => ApiError::Status {
                    status,
                    body: compact_body(json.as_ref(), body),
                },
            },
            _ => ApiError::Status {
                status,
                body: compact_body(json.as_ref(), body),
            },
        }
    }

    /// Ends the session when returned from an authenticated call.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }

    /// 404, which a paginated endpoint also answers for a page past the end.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Response body worth showing to the user, if any.
    fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}

fn compact_body(json: Option<&serde_json::Value>, raw: &str) -> String {
    json.map(|v| v.to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

/// Banner text for a failed list or dropdown fetch.
pub fn fetch_failed_message(resource: Resource) -> String {
    format!("Failed to fetch {}.", resource.plural())
}

/// Banner text for a failed create, update or delete.
pub fn mutation_failed_message(resource: Resource, mutation: Mutation, error: &ApiError) -> String {
    match (mutation, error) {
        (Mutation::Delete, ApiError::Conflict { detail }) => {
            format!("Deletion failed: {}", detail)
        }
        (Mutation::Delete, _) => format!(
            "An unexpected error occurred while trying to delete the {}. Please try again.",
            resource.singular()
        ),
        (_, ApiError::Conflict { detail }) => {
            format!("Failed to {} {}: {}", mutation.verb(), resource.singular(), detail)
        }
        (_, error) => match error.body() {
            Some(body) => format!(
                "Failed to {} {}: {}",
                mutation.verb(),
                resource.singular(),
                body
            ),
            None => format!(
                "Failed to {} {}. Please try again.",
                mutation.verb(),
                resource.singular()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(409, r#"{"detail": "in use"}"#),
            ApiError::Conflict {
                detail: "in use".into()
            }
        );
        assert_eq!(
            ApiError::from_status(400, "{\"name\": [\"This field is required.\"]}"),
            ApiError::Status {
                status: 400,
                body: r#"{"name":["This field is required."]}"#.into()
            }
        );
        assert_eq!(
            ApiError::from_status(500, "  Internal Server Error\n"),
            ApiError::Status {
                status: 500,
                body: "Internal Server Error".into()
            }
        );
    }

    #[test]
    fn test_not_found() {
        assert!(ApiError::from_status(404, r#"{"detail": "Invalid page."}"#).is_not_found());
        assert!(!ApiError::from_status(500, "").is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn test_delete_conflict_message() {
        let error = ApiError::from_status(409, r#"{"detail": "3 employees reference this unit"}"#);
        assert_eq!(
            mutation_failed_message(Resource::OrganizationalUnits, Mutation::Delete, &error),
            "Deletion failed: 3 employees reference this unit"
        );
    }

    #[test]
    fn test_delete_generic_message() {
        let error = ApiError::Network("offline".into());
        assert_eq!(
            mutation_failed_message(Resource::Subcities, Mutation::Delete, &error),
            "An unexpected error occurred while trying to delete the subcity. Please try again."
        );
    }

    #[test]
    fn test_create_update_messages() {
        let error = ApiError::from_status(400, r#"{"name": ["exists"]}"#);
        assert_eq!(
            mutation_failed_message(Resource::OrganizationalUnits, Mutation::Create, &error),
            r#"Failed to create organizational unit: {"name":["exists"]}"#
        );
        assert_eq!(
            mutation_failed_message(
                Resource::Woredas,
                Mutation::Update,
                &ApiError::Network("x".into())
            ),
            "Failed to update woreda. Please try again."
        );
    }

    #[test]
    fn test_fetch_message_and_auth_failure() {
        assert_eq!(fetch_failed_message(Resource::Woredas), "Failed to fetch woredas.");
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(!ApiError::Parse("x".into()).is_auth_failure());
    }
}
