use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{api::responses::JobView, database::models::job, templates};

/// Query parameter extractor for view selection.
///
/// Reads the `view` query parameter and converts it to the specified view
/// enum. Requests without a `view` get the enum's default.
///
/// ```rust,ignore
/// pub async fn get_jobs(view: ViewParam<JobListView>) -> Response {
///     view.render(jobs)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ViewParam<T> {
    view: T,
}

impl<T> ViewParam<T> {
    /// Render an entity using this view.
    pub fn render<E>(&self, entity: E) -> Response
    where
        T: Renderer<E>,
    {
        self.view.render(entity)
    }
}

impl<T> std::ops::Deref for ViewParam<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.view
    }
}

#[derive(Deserialize)]
struct ViewQuery {
    view: Option<String>,
}

#[derive(Debug)]
pub struct InvalidViewError;

impl IntoResponse for InvalidViewError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, "Invalid view parameter").into_response()
    }
}

impl<S, T> FromRequestParts<S> for ViewParam<T>
where
    S: Send + Sync,
    T: ViewEnum + Send,
{
    type Rejection = InvalidViewError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ViewQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| InvalidViewError)?;

        let view = match query.view {
            Some(view_name) => T::from_name(&view_name).ok_or(InvalidViewError)?,
            None => T::default_view(),
        };

        Ok(Self { view })
    }
}

/// A closed set of named representations for a resource.
pub trait ViewEnum: Sized {
    fn from_name(name: &str) -> Option<Self>;

    fn name(&self) -> &str;

    fn default_view() -> Self;
}

/// Renders an entity as a complete HTTP response in one view.
pub trait Renderer<E> {
    fn render(&self, entity: E) -> Response;
}

/// Representations of the job listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobListView {
    /// `[{"name", "time", "url"}]`
    Json,
    /// HTML table page
    Html,
}

impl ViewEnum for JobListView {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    fn default_view() -> Self {
        Self::Json
    }
}

impl Renderer<Vec<job::Model>> for JobListView {
    fn render(&self, jobs: Vec<job::Model>) -> Response {
        match self {
            Self::Json => {
                let jobs: Vec<JobView> = jobs.into_iter().map(JobView::from).collect();
                Json(jobs).into_response()
            }
            Self::Html => Html(templates::job_list_page(&jobs)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_round_trip() {
        for view in [JobListView::Json, JobListView::Html] {
            assert_eq!(JobListView::from_name(view.name()), Some(view));
        }
    }

    #[test]
    fn test_unknown_view_name() {
        assert_eq!(JobListView::from_name("xml"), None);
        assert_eq!(JobListView::from_name("HTML"), None);
    }

    #[test]
    fn test_default_view_is_json() {
        assert_eq!(JobListView::default_view(), JobListView::Json);
    }
}
