//! A small async client for the Dropbox HTTP API.
//!
//! Requests carry a bearer token and have their arguments serialized into
//! the `Dropbox-API-Arg` header (content calls) or a JSON body (RPC calls).
//! Use a [`DropboxClient`] with an explicit [`Config`], or the free functions
//! which read a process-wide token set with [`set_token`].

mod api;
mod dropbox;
pub mod types;

pub use api::*;
pub use dropbox::{
    authorize_url, Download, DropboxClient, API_ENDPOINT, API_VERSION, AUTHORIZE_ENDPOINT,
    CONTENT_ENDPOINT, DROPBOX_API_ARG, DROPBOX_API_RESULT, NOT_IMPLEMENTED,
};
pub use types::*;
