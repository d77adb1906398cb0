use super::{body_string, get, location, sign_in};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{sample_listing, test_app, ApiCall, FakeApi};

#[test]
fn detail_renders_listing() {
    let (app, _) = test_app(FakeApi::with_listings(vec![sample_listing("p-9")]));
    let session = sign_in(&app);

    let resp = handle(get("/properties/p-9", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sakura Heights p-9"));
    assert!(body.contains("¥50,000,000"));
    assert!(body.contains("渋谷駅 （徒歩5分）"));
    assert!(body.contains("一覧に戻る"));
}

#[test]
fn missing_property_renders_not_found() {
    let (app, _) = test_app(FakeApi::with_listings(vec![sample_listing("p-1")]));
    let session = sign_in(&app);

    let resp = handle(get("/properties/missing-id", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Property not found"));
    assert!(!body.contains("¥50,000,000"));
}

#[test]
fn detail_without_session_redirects_to_login() {
    let (app, api) = test_app(FakeApi::with_listings(vec![sample_listing("p-1")]));

    let resp = handle(get("/properties/p-1", None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    assert!(api.calls().is_empty());
}

#[test]
fn encoded_id_is_decoded_before_lookup() {
    let (app, api) = test_app(FakeApi::default());
    let session = sign_in(&app);

    let resp = handle(get("/properties/a%2Fb", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 404);

    assert_eq!(
        api.calls(),
        vec![ApiCall::Get {
            id: "a/b".to_string(),
            credential: Some("id-token-123".to_string()),
        }]
    );
}

#[test]
fn padded_id_reaches_backend_unchanged() {
    let (app, api) = test_app(FakeApi::with_listings(vec![sample_listing(" p-1")]));
    let session = sign_in(&app);

    let resp = handle(get("/properties/%20p-1", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    assert_eq!(
        api.calls(),
        vec![ApiCall::Get {
            id: " p-1".to_string(),
            credential: Some("id-token-123".to_string()),
        }]
    );
}

#[test]
fn padded_id_card_links_to_its_own_detail_page() {
    let (app, _) = test_app(FakeApi::with_listings(vec![sample_listing(" p-1")]));
    let session = sign_in(&app);

    let body = body_string(handle(get("/properties", Some(&session)), &app).unwrap());
    assert!(body.contains(r#"href="/properties/%20p-1""#));
}

#[test]
fn blank_id_is_not_found() {
    let (app, api) = test_app(FakeApi::default());
    let session = sign_in(&app);

    let result = handle(get("/properties/", Some(&session)), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert!(api.calls().is_empty());
}
