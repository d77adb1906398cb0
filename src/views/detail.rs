use crate::domain::listing::{Listing, PropertyId};
use crate::views::{Mounted, Route, ViewContext};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Populated(Listing),
    NotFound,
}

/// A single property page.
pub struct DetailView {
    ctx: ViewContext,
    id: PropertyId,
}

impl DetailView {
    pub fn new(ctx: ViewContext, id: PropertyId) -> Self {
        Self { ctx, id }
    }

    pub fn id(&self) -> &PropertyId {
        &self.id
    }

    pub fn mount(&self) -> Mounted<DetailState> {
        let api = Arc::clone(&self.ctx.api);
        let session = Arc::clone(&self.ctx.session);
        let id = self.id.clone();

        Mounted::start(&self.ctx, DetailState::Loading, move || {
            let credential = session.current_credential();
            match api.get_property(credential.as_ref(), &id) {
                Ok(listing) => DetailState::Populated(listing),
                // Not-found and transport failures look the same to the user.
                Err(e) => {
                    tracing::error!(property_id = %id, error = %e, "failed to fetch property");
                    DetailState::NotFound
                }
            }
        })
    }

    /// Back to the list.
    pub fn back(&self) {
        self.ctx.navigator.navigate(Route::Properties);
    }
}
