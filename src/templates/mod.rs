pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_page, property_list};
pub use layouts::desktop::desktop_layout;
