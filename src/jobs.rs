//! The job submission path: parse and validate a request body, look for a
//! stored job with the same name, then persist the new one.

pub mod deduplication;
pub mod store;
pub mod submission;

pub use deduplication::check_dup_jobs;
pub use store::{list_jobs, save_job, schedule_job, ScheduleOutcome};
pub use submission::{parse_job, JobSubmission};
