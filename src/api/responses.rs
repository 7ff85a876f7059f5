use serde::{Deserialize, Serialize};

use crate::database::models::job;

/// A stored job as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobView {
    pub name: String,
    pub time: String,
    pub url: String,
}

impl From<job::Model> for JobView {
    fn from(job: job::Model) -> Self {
        Self {
            name: job.name,
            time: job.scheduled_time,
            url: job.url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduledResponse {
    pub message: String,
    pub job: JobView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobView>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            job: None,
        }
    }
}
