pub mod session;
pub mod store;
pub mod token;

pub use session::{AuthError, Credential, Session, SessionProvider, Subscription};
pub use store::{SessionConfig, SessionStore};
