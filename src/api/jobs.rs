use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::{
    api::{
        api_error::ApiError,
        responses::ScheduledResponse,
        view_param::{JobListView, ViewEnum as _, ViewParam},
    },
    app::App,
    jobs::{self, ScheduleOutcome},
};

/// `GET /getjobs`
pub async fn get_jobs(
    State(app): State<App>,
    view: ViewParam<JobListView>,
) -> Result<Response, ApiError> {
    let jobs = jobs::list_jobs(&app.db).await?;

    debug!(count = jobs.len(), view = view.name(), "Rendering job list");

    Ok(view.render(jobs))
}

/// `POST /schedule`
pub async fn schedule_job(State(app): State<App>, body: Bytes) -> Result<Response, ApiError> {
    let submission = jobs::parse_job(&body).inspect_err(|err| {
        warn!("Rejected job submission: {err}");
    })?;

    match jobs::schedule_job(&app.db, submission).await? {
        ScheduleOutcome::Scheduled(job) => {
            let response = ScheduledResponse {
                message: format!("Job {} scheduled", job.name),
                job: job.into(),
            };
            Ok((StatusCode::CREATED, Json(response)).into_response())
        }
        ScheduleOutcome::Duplicate(existing) => Err(ApiError::DuplicateJob(Box::new(existing))),
    }
}
