use futures::{StreamExt, TryStreamExt};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tokio::io::AsyncRead;
use tokio_util::compat::FuturesAsyncReadCompatExt;

use crate::{
    dropbox::{utils::IntoIOErr, DROPBOX_API_RESULT},
    types::{ApiErrorBody, Error, FileMetadata, Result},
};

pub struct Res(Response);

impl Res {
    /// Passes a 2xx response through and turns anything else into
    /// [`Error::Api`].
    pub async fn checked(self) -> Result<Response> {
        let res = self.0;
        let status = res.status();

        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await?;
        let summary = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(e) => e.error_summary,
            Err(_) => body.trim().to_string(),
        };
        tracing::debug!("Dropbox API error {}: {}", status, summary);

        Err(Error::Api {
            status,
            summary,
            body,
        })
    }

    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.checked().await?.bytes().await?;
        let t = serde_json::from_slice::<T>(&bytes)?;
        Ok(t)
    }
}

impl From<Response> for Res {
    fn from(r: Response) -> Self {
        Self(r)
    }
}

/// A successful `files/download` call: the file's metadata plus its
/// not-yet-consumed content.
#[derive(Debug)]
pub struct Download {
    metadata: FileMetadata,
    response: Response,
}

impl Download {
    pub(crate) fn from_response(response: Response) -> Result<Self> {
        let header = response.headers().get(DROPBOX_API_RESULT).ok_or_else(|| {
            Error::UnexpectedResponse(format!("response has no `{DROPBOX_API_RESULT}` header"))
        })?;
        let metadata = serde_json::from_slice::<FileMetadata>(header.as_bytes())?;

        Ok(Self { metadata, response })
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    pub async fn bytes(self) -> Result<Vec<u8>> {
        Ok(self.response.bytes().await?.to_vec())
    }

    pub async fn text(self) -> Result<String> {
        Ok(self.response.text().await?)
    }

    pub fn into_async_read(self) -> impl AsyncRead + Send + Unpin {
        self.response
            .bytes_stream()
            .map_err(|e| e.into_io_err())
            .boxed()
            .into_async_read()
            .compat()
    }

    pub fn into_parts(self) -> (FileMetadata, Response) {
        (self.metadata, self.response)
    }
}
