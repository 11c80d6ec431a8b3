//! Index route listing the available endpoints.

use axum::response::Html;

const ROUTES: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/&lt;start&gt;<br/>",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;"
);

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(ROUTES)
}
