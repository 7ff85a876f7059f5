use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    database::models::job,
    jobs::{store::list_jobs, JobSubmission},
};

/// Looks for an already stored job with the submission's name.
///
/// Every stored job is loaded and compared, so the cost grows linearly with
/// the table. Names are compared exactly.
pub async fn check_dup_jobs(
    db: &DatabaseConnection,
    submission: &JobSubmission,
) -> Result<Option<job::Model>, DbErr> {
    let jobs = list_jobs(db).await?;
    Ok(find_duplicate(jobs, &submission.name))
}

fn find_duplicate(
    jobs: impl IntoIterator<Item = job::Model>,
    name: &str,
) -> Option<job::Model> {
    jobs.into_iter().find(|job| job.has_name(name))
}
