//! Process-wide convenience calls.
//!
//! These mirror the methods of [`DropboxClient`] but take the bearer token
//! from a process-wide value set with [`set_token`]. Passing `Some(token)`
//! overrides it for a single call.

use reqwest::{Body, Response};
use serde::Serialize;

use crate::{
    dropbox::{self, utils::validate_token, Download, DropboxClient, TOKEN},
    types::*,
};

/// Replaces the token used by every call that is not given one explicitly.
/// The empty string is accepted.
pub async fn set_token(token: impl Into<String>) -> Result<()> {
    let token = token.into();
    validate_token(&token)?;

    *TOKEN.write().await = token;
    Ok(())
}

pub async fn token() -> String {
    TOKEN.read().await.clone()
}

async fn client(token: Option<&str>) -> DropboxClient {
    let token = match token {
        Some(t) => t.to_string(),
        None => self::token().await,
    };

    DropboxClient::new(Config::new(token))
}

/// Always fails: obtain a token manually and store it via [`set_token`].
pub async fn authorize(client_id: &str, redirect_uri: Option<&str>) -> Result<u16> {
    dropbox::oauth::authorize(client_id, redirect_uri).await
}

/// Generic content-style `POST`. `endpoint` defaults to
/// [`CONTENT_ENDPOINT`](crate::CONTENT_ENDPOINT).
pub async fn post<T: Serialize + ?Sized>(
    api_method: &str,
    api_args: &T,
    content: impl Into<Body>,
    endpoint: Option<&str>,
    token: Option<&str>,
) -> Result<Response> {
    let content = content.into();
    client(token)
        .await
        .post(api_method, api_args, content, endpoint)
        .await
}

/// Generic content-style `GET`. `endpoint` defaults to
/// [`CONTENT_ENDPOINT`](crate::CONTENT_ENDPOINT).
pub async fn get<T: Serialize + ?Sized>(
    api_method: &str,
    api_args: &T,
    endpoint: Option<&str>,
    token: Option<&str>,
) -> Result<Response> {
    client(token).await.get(api_method, api_args, endpoint).await
}

/// Generic RPC-style call with a JSON body. `endpoint` defaults to
/// [`API_ENDPOINT`](crate::API_ENDPOINT).
pub async fn rpc<T: Serialize + ?Sized>(
    api_method: &str,
    api_args: &T,
    endpoint: Option<&str>,
    token: Option<&str>,
) -> Result<Response> {
    client(token).await.rpc(api_method, api_args, endpoint).await
}

pub async fn upload(
    args: &UploadArgs,
    content: impl Into<Body>,
    token: Option<&str>,
) -> Result<FileMetadata> {
    let content = content.into();
    client(token).await.upload(args, content).await
}

pub async fn download(path: &str, token: Option<&str>) -> Result<Download> {
    client(token).await.download(path).await
}

pub async fn get_metadata(args: &GetMetadataArgs, token: Option<&str>) -> Result<Metadata> {
    client(token).await.get_metadata(args).await
}
