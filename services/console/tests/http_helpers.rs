use axum::body::Body;
use axum::http::Request;

pub fn get_as(role: Option<&str>, uri: &str) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(role) = role {
        builder = builder
            .header("x-mrosc-role", role)
            .header("x-mrosc-user-name", "Test User");
    }
    builder.body(Body::empty()).expect("request")
}
