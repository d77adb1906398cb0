use super::{body_string, get, location, post_form, sign_in};
use crate::router::handle;
use crate::tests::utils::{sample_listing, test_app, ApiCall, FakeApi};

#[test]
fn login_page_loads_successfully() {
    let (app, _) = test_app(FakeApi::default());

    let resp = handle(get("/login", None), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn login_sets_cookie_and_redirects_to_list() {
    let (app, _) = test_app(FakeApi::default());

    let resp = handle(
        post_form("/login", "user=u1&credential=tok%2Babc", None),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/properties");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn login_with_blank_credential_rerenders_form() {
    let (app, _) = test_app(FakeApi::default());

    let resp = handle(post_form("/login", "user=u1&credential=", None), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(resp.headers().get("Set-Cookie").is_none());

    let body = body_string(resp);
    assert!(body.contains("Invalid credential"));
    assert!(body.contains(r#"role="alert""#));
}

#[test]
fn credential_is_forwarded_as_bearer() {
    let (app, api) = test_app(FakeApi::with_listings(vec![sample_listing("p-1")]));
    let session = sign_in(&app);

    let resp = handle(get("/properties", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 200);

    assert_eq!(
        api.calls(),
        vec![ApiCall::List {
            page: 1,
            page_size: 10,
            credential: Some("id-token-123".to_string()),
        }]
    );
}

#[test]
fn logout_clears_session_and_later_mounts_redirect() {
    let (app, _) = test_app(FakeApi::with_listings(vec![sample_listing("p-1")]));
    let session = sign_in(&app);

    let before = handle(get("/properties", Some(&session)), &app).unwrap();
    assert_eq!(before.status(), 200);

    let resp = handle(post_form("/logout", "", Some(&session)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
    let cleared = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"));

    for path in ["/properties", "/properties/p-1"] {
        let resp = handle(get(path, Some(&session)), &app).unwrap();
        assert_eq!(resp.status(), 302, "{path} should redirect after logout");
        assert_eq!(location(&resp), "/login");
    }
}

#[test]
fn logout_without_session_still_goes_to_login() {
    let (app, _) = test_app(FakeApi::default());

    let resp = handle(post_form("/logout", "", None), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/login");
}
