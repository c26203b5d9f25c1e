pub mod categories;
pub mod channels;
pub mod countries;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod search;

pub use error::ApiError;
pub use extract::LenientQuery;
pub use routes::create_router;

use chrono::{SecondsFormat, Utc};

/// Current time as an ISO-8601 UTC timestamp with milliseconds.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
