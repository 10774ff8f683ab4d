mod config;
mod error;
mod metadata;
mod upload;

pub use config::{Config, API_ENDPOINT_VAR, CONTENT_ENDPOINT_VAR, TOKEN_VAR};
pub use error::{Error, Result};
pub use metadata::{
    ApiErrorBody, DeletedMetadata, FileMetadata, FolderMetadata, GetMetadataArgs, Metadata,
};
pub use upload::{DownloadArgs, UploadArgs, WriteMode};
