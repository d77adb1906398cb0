use crate::auth::AuthError;
use crate::domain::listing::Listing;
use crate::views::{Mounted, Route, ViewContext};
use std::num::NonZeroU32;
use std::sync::Arc;

pub const FIRST_PAGE: NonZeroU32 = NonZeroU32::MIN;
pub const PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Populated(Vec<Listing>),
    Empty,
    /// Rendered like `Loading`; kept distinct so it can be observed.
    Error(String),
}

/// The property list page.
pub struct ListView {
    ctx: ViewContext,
}

impl ListView {
    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx }
    }

    /// Subscribes to the session and fetches the first page, concurrently.
    pub fn mount(&self) -> Mounted<ListState> {
        let api = Arc::clone(&self.ctx.api);
        let session = Arc::clone(&self.ctx.session);

        Mounted::start(&self.ctx, ListState::Loading, move || {
            let credential = session.current_credential();
            match api.list_properties(credential.as_ref(), FIRST_PAGE, PAGE_SIZE) {
                Ok(page) => {
                    tracing::debug!(
                        page = page.page.get(),
                        page_size = page.page_size.get(),
                        count = page.listings.len(),
                        "properties loaded"
                    );
                    if page.is_empty() {
                        ListState::Empty
                    } else {
                        ListState::Populated(page.listings)
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch properties");
                    ListState::Error(e.to_string())
                }
            }
        })
    }

    /// Ends the session and sends the user to the login page.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        if let Err(e) = self.ctx.session.sign_out() {
            tracing::error!(error = %e, "logout failed");
            return Err(e);
        }
        self.ctx.navigator.navigate(Route::Login);
        Ok(())
    }
}
