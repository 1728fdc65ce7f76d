//! Project list for the board filter dropdown.

use reqwest::Method;
use serde::Deserialize;
use site_core::entities::Project;

use crate::{ApiClient, error::ApiError, http::check_response};

/// The endpoint answers either a bare array or `{ "projects": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectsResponse {
    Bare(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

impl ApiClient {
    /// List projects visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let resp = check_response(self.request(Method::GET, "/projects").send().await?).await?;
        let body = resp
            .json::<ProjectsResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("projects: {e}")))?;
        Ok(match body {
            ProjectsResponse::Bare(projects) | ProjectsResponse::Wrapped { projects } => projects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_shapes() {
        let bare: ProjectsResponse =
            serde_json::from_str(r#"[{"id":"p1","name":"North Tower"}]"#).unwrap();
        let wrapped: ProjectsResponse =
            serde_json::from_str(r#"{"projects":[{"id":"p1","name":"North Tower"}]}"#).unwrap();
        for body in [bare, wrapped] {
            let (ProjectsResponse::Bare(projects) | ProjectsResponse::Wrapped { projects }) = body;
            assert_eq!(projects[0].name, "North Tower");
        }
    }
}
