//! Provider integration and page rendering.
//!
//! - `playht` - Play.ht websocket authentication (models, wire types, client)
//! - `template` - HTML page loading and placeholder substitution

pub mod playht;
pub mod template;

pub use playht::{
    ApiVersion, PlayHtAuthClient, PlayHtError, PlayHtModel, WebSocketAuth, WsAuthResponse,
};
pub use template::{PageTemplate, SELECTED_MODEL_TOKEN, WEBSOCKET_URL_TOKEN};
