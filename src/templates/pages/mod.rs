pub mod login;
pub mod properties;
pub mod property_detail;

pub use login::login_page;
pub use properties::properties_page;
pub use property_detail::property_detail_page;
