mod auth_flow_tests;
mod detail_tests;
mod health_tests;

use crate::router::{handle, App, SESSION_COOKIE};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub fn get(uri: &str, session: Option<&str>) -> astra::Request {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("{SESSION_COOKIE}={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, session: Option<&str>) -> astra::Request {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("{SESSION_COOKIE}={token}"));
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Signs in through `POST /login` and returns the session cookie value.
pub fn sign_in(app: &App) -> String {
    let resp = handle(
        post_form("/login", "user=u1&credential=id-token-123", None),
        app,
    )
    .expect("login failed");
    assert_eq!(resp.status(), 302);

    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("login must set a cookie");
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix(&format!("{SESSION_COOKIE}=")))
        .expect("session cookie")
        .to_string()
}
