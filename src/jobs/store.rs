use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};
use tracing::{info, warn};

use crate::{
    database::models::job,
    jobs::{check_dup_jobs, JobSubmission},
};

/// Result of running a submission through the dedup check and insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The job was stored.
    Scheduled(job::Model),
    /// A job with the same name already exists; nothing was stored.
    Duplicate(job::Model),
}

/// All stored jobs, oldest first.
pub async fn list_jobs(db: &DatabaseConnection) -> Result<Vec<job::Model>, DbErr> {
    job::Entity::find()
        .order_by_asc(job::Column::Id)
        .all(db)
        .await
}

pub async fn save_job(
    db: &DatabaseConnection,
    submission: JobSubmission,
) -> Result<job::Model, DbErr> {
    info!("Saving {} to database", submission.name);

    job::ActiveModel {
        id: NotSet,
        name: Set(submission.name),
        scheduled_time: Set(submission.scheduled_time),
        url: Set(submission.url),
        created_at: NotSet,
    }
    .insert(db)
    .await
}

/// Stores `submission` unless a job with the same name already exists.
pub async fn schedule_job(
    db: &DatabaseConnection,
    submission: JobSubmission,
) -> Result<ScheduleOutcome, DbErr> {
    if let Some(existing) = check_dup_jobs(db, &submission).await? {
        warn!(name = %existing.name, id = existing.id, "Existing job found");
        return Ok(ScheduleOutcome::Duplicate(existing));
    }

    save_job(db, submission).await.map(ScheduleOutcome::Scheduled)
}
