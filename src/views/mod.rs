pub mod detail;
pub mod list;
mod mount;
pub mod navigation;

pub use detail::{DetailState, DetailView};
pub use list::{ListState, ListView};
pub use mount::Mounted;
pub use navigation::{Navigation, Navigator, Route};

use crate::api::PropertyApi;
use crate::auth::SessionProvider;
use std::sync::Arc;

/// Everything a view talks to, injected so tests can swap any of it.
#[derive(Clone)]
pub struct ViewContext {
    pub api: Arc<dyn PropertyApi>,
    pub session: Arc<dyn SessionProvider>,
    pub navigator: Arc<dyn Navigator>,
}
