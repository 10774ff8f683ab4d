use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetMetadataArgs {
    pub path: String,
    pub include_media_info: bool,
    pub include_deleted: bool,
    pub include_has_explicit_shared_members: bool,
}

impl GetMetadataArgs {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
        }
    }

    pub fn include_media_info(mut self, include: bool) -> Self {
        self.include_media_info = include;
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }

    pub fn include_has_explicit_shared_members(mut self, include: bool) -> Self {
        self.include_has_explicit_shared_members = include;
        self
    }
}

/// Metadata of a file, folder or deleted entry, tagged by `.tag`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Metadata {
    File(FileMetadata),
    Folder(FolderMetadata),
    Deleted(DeletedMetadata),
}

impl Metadata {
    pub fn name(&self) -> &str {
        match self {
            Metadata::File(f) => &f.name,
            Metadata::Folder(f) => &f.name,
            Metadata::Deleted(f) => &f.name,
        }
    }

    pub fn path_display(&self) -> Option<&str> {
        match self {
            Metadata::File(f) => f.path_display.as_deref(),
            Metadata::Folder(f) => f.path_display.as_deref(),
            Metadata::Deleted(f) => f.path_display.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub id: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
    pub rev: String,
    pub size: u64,
    pub client_modified: String,
    pub server_modified: String,
    pub content_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderMetadata {
    pub name: String,
    pub id: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletedMetadata {
    pub name: String,
    pub path_lower: Option<String>,
    pub path_display: Option<String>,
}

/// Body of an endpoint-specific (HTTP 409) error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error_summary: String,
    #[serde(default)]
    pub error: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_file_metadata() -> anyhow::Result<()> {
        let raw = r#"{
            ".tag": "file",
            "name": "Prime_Numbers.txt",
            "id": "id:a4ayc_80_OEAAAAAAAAAXw",
            "client_modified": "2015-05-12T15:50:38Z",
            "server_modified": "2015-05-12T15:50:38Z",
            "rev": "a1c10ce0dd78",
            "size": 7212,
            "path_lower": "/homework/math/prime_numbers.txt",
            "path_display": "/Homework/math/Prime_Numbers.txt",
            "is_downloadable": true,
            "content_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        }"#;

        let meta = serde_json::from_str::<Metadata>(raw)?;
        let Metadata::File(file) = &meta else {
            panic!("expected file metadata, got {meta:?}");
        };

        assert_eq!(file.size, 7212);
        assert_eq!(file.rev, "a1c10ce0dd78");
        assert_eq!(meta.name(), "Prime_Numbers.txt");
        assert_eq!(meta.path_display(), Some("/Homework/math/Prime_Numbers.txt"));
        Ok(())
    }

    #[test]
    fn parse_folder_and_deleted() -> anyhow::Result<()> {
        let folder = serde_json::from_str::<Metadata>(
            r#"{ ".tag": "folder", "name": "math", "id": "id:a4ayc_80_OEAAAAAAAAAXz",
                 "path_lower": "/homework/math", "path_display": "/Homework/math" }"#,
        )?;
        assert!(matches!(folder, Metadata::Folder(ref f) if f.name == "math"));

        let deleted = serde_json::from_str::<Metadata>(
            r#"{ ".tag": "deleted", "name": "old.txt", "path_lower": "/old.txt" }"#,
        )?;
        assert!(matches!(deleted, Metadata::Deleted(_)));
        assert_eq!(deleted.path_display(), None);

        Ok(())
    }

    #[test]
    fn serialize_get_metadata_args() -> anyhow::Result<()> {
        let args = GetMetadataArgs::new("/Homework/math").include_deleted(true);

        assert_eq!(
            serde_json::to_value(args)?,
            serde_json::json!({
                "path": "/Homework/math",
                "include_media_info": false,
                "include_deleted": true,
                "include_has_explicit_shared_members": false
            })
        );
        Ok(())
    }
}
