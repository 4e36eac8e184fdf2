//! Client side of the image generator: form rules, card bookkeeping and
//! the HTTP client for the proxy endpoint. Nothing here touches a live
//! document; handlers return effects for the caller to apply.

pub mod cards;
pub mod dimensions;
pub mod dispatch;
pub mod errors;
pub mod form;
pub mod prompts;
pub mod proxy_client;
pub mod session;
pub mod theme;
