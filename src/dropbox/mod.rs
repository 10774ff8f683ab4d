mod client;
pub(crate) mod oauth;
mod res;
pub(crate) mod utils;

use reqwest::{header::HeaderName, Client};
use tokio::sync::RwLock;

pub use client::DropboxClient;
pub use oauth::{authorize_url, NOT_IMPLEMENTED};
pub use res::Download;

pub const API_VERSION: &str = "2/";

pub const AUTHORIZE_ENDPOINT: &str = "https://www.dropbox.com/oauth2/authorize";
pub const CONTENT_ENDPOINT: &str = "https://content.dropboxapi.com/";
pub const API_ENDPOINT: &str = "https://api.dropboxapi.com/";

pub const DROPBOX_API_ARG: HeaderName = HeaderName::from_static("dropbox-api-arg");
pub const DROPBOX_API_RESULT: HeaderName = HeaderName::from_static("dropbox-api-result");

lazy_static::lazy_static! {
    pub static ref TOKEN: RwLock<String> = RwLock::new(String::new());
    pub static ref HTTP: Client = Client::new();
}
