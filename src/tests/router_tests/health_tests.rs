use super::{body_string, get};
use crate::router::handle;
use crate::tests::utils::{test_app, FakeApi};

#[test]
fn health_reports_backend_url() {
    let (app, _) = test_app(FakeApi::default());

    let resp = handle(get("/health", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_base_url"], "http://backend.test/");
    assert!(body["timestamp"].is_string());
}
