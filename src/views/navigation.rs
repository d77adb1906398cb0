use crate::domain::listing::PropertyId;
use std::sync::{Mutex, PoisonError};

/// Client-facing routes a view can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Properties,
    Property(PropertyId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Properties => "/properties".to_string(),
            Route::Property(id) => format!("/properties/{}", urlencoding::encode(id.as_str())),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Remembers where the view asked to go. The router turns that into a redirect.
#[derive(Debug, Default)]
pub struct Navigation {
    target: Mutex<Option<Route>>,
}

impl Navigation {
    pub fn target(&self) -> Option<Route> {
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for Navigation {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = %route.path(), "navigate");
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}
