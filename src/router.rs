use crate::api::PropertyApi;
use crate::auth::SessionStore;
use crate::domain::listing::PropertyId;
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_response, redirect, redirect_with_cookie,
    ResultResp,
};
use crate::templates::pages::{login_page, properties_page, property_detail_page};
use crate::views::{DetailState, DetailView, ListView, Navigation, Route, ViewContext};
use astra::Request;
use std::io::Read;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

pub const SESSION_COOKIE: &str = "session";
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Shared handles every request needs.
pub struct App {
    pub api: Arc<dyn PropertyApi>,
    pub sessions: SessionStore,
    pub api_base_url: Url,
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let cookie = session_cookie(&req);
    let cookie = cookie.as_deref();
    let now = now_unix();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect(&Route::Properties.path()),
        ("GET", "/health") => health(app),
        ("GET", "/login") => html_response(login_page(None)),
        ("POST", "/login") => login(&mut req, app, now),
        ("POST", "/logout") => logout(app, cookie, now),
        ("GET", "/properties") => list_page(app, cookie, now),
        ("GET", p) => match p.strip_prefix("/properties/") {
            Some(raw_id) => detail_page(app, cookie, raw_id, now),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn view_context(app: &App, cookie: Option<&str>, now: i64) -> (ViewContext, Arc<Navigation>) {
    let navigation = Arc::new(Navigation::default());
    let ctx = ViewContext {
        api: Arc::clone(&app.api),
        session: Arc::new(app.sessions.provider(cookie, now)),
        navigator: navigation.clone(),
    };
    (ctx, navigation)
}

fn list_page(app: &App, cookie: Option<&str>, now: i64) -> ResultResp {
    let (ctx, navigation) = view_context(app, cookie, now);
    let view = ListView::new(ctx);

    let mut mounted = view.mount();
    // No session: leave right away, the fetch result gets discarded.
    let state = (!mounted.has_left()).then(|| mounted.settle());
    mounted.unmount();

    if let Some(route) = navigation.target() {
        return redirect(&route.path());
    }
    match state {
        Some(state) => html_response(properties_page(&state)),
        None => redirect(&Route::Login.path()),
    }
}

fn detail_page(app: &App, cookie: Option<&str>, raw_id: &str, now: i64) -> ResultResp {
    let decoded = urlencoding::decode(raw_id)
        .map_err(|_| ServerError::BadRequest("property id is not valid UTF-8".into()))?;
    let Some(id) = PropertyId::parse(&decoded) else {
        return Err(ServerError::NotFound);
    };

    let (ctx, navigation) = view_context(app, cookie, now);
    let view = DetailView::new(ctx, id);
    tracing::debug!(property_id = %view.id(), "mounting detail view");

    let mut mounted = view.mount();
    let state = (!mounted.has_left()).then(|| mounted.settle());
    mounted.unmount();

    if let Some(route) = navigation.target() {
        return redirect(&route.path());
    }
    match state {
        Some(DetailState::NotFound) => {
            html_response_with_status(404, property_detail_page(&DetailState::NotFound))
        }
        Some(state) => html_response(property_detail_page(&state)),
        None => redirect(&Route::Login.path()),
    }
}

fn login(req: &mut Request, app: &App, now: i64) -> ResultResp {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form: {e}")))?;

    let mut user = String::new();
    let mut credential = String::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "user" => user = value.into_owned(),
            "credential" => credential = value.into_owned(),
            _ => {}
        }
    }

    match app.sessions.sign_in(&user, &credential, now) {
        Ok(token) => {
            let cookie = format!(
                "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                app.sessions.session_ttl_secs()
            );
            redirect_with_cookie(&Route::Properties.path(), &cookie)
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in rejected");
            html_response_with_status(400, login_page(Some(&e.to_string())))
        }
    }
}

fn logout(app: &App, cookie: Option<&str>, now: i64) -> ResultResp {
    let (ctx, navigation) = view_context(app, cookie, now);

    ListView::new(ctx)
        .sign_out()
        .map_err(|_| ServerError::InternalError)?;

    let target = navigation.target().unwrap_or(Route::Login);
    let cleared = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    redirect_with_cookie(&target.path(), &cleared)
}

fn health(app: &App) -> ResultResp {
    json_response(&serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "api_base_url": app.api_base_url.as_str(),
    }))
}

fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
