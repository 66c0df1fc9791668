pub mod environment;
pub mod fetch;
pub mod hero;
pub mod logging;

pub const TARGET_WEB_REQUEST: &str = "web_request";
