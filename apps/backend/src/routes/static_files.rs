//! Static asset middleware

use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Force `application/javascript` on successful `.js` responses
pub async fn javascript_content_type(request: Request, next: Next) -> Response {
    let is_script = request.uri().path().ends_with(".js");
    let mut response = next.run(request).await;

    if is_script && response.status().is_success() {
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/javascript"),
        );
    }
    response
}
