mod requests_logging;
mod slowdown;

pub use requests_logging::{log_requests, RequestsLoggingLevel};
#[allow(unused_imports)] // Only layered in under the slowdown feature
pub use slowdown::slowdown_request;
