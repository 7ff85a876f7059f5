pub mod api_error;
pub mod health_checks;
pub mod jobs;
pub mod json_error;
pub mod pages;
pub mod responses;
pub mod view_param;
