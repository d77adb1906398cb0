pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal HTML response
pub use html::{html_response, html_response_with_status, json_response};
pub use redirect::{redirect, redirect_with_cookie};
