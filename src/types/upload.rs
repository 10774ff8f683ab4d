use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::dropbox::utils::normalize_path;

/// What to do when a file already exists at the upload path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Add,
    Overwrite,
    /// Overwrite only if the current revision matches.
    Update(String),
}

impl Serialize for WriteMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WriteMode::Add => serializer.serialize_str("add"),
            WriteMode::Overwrite => serializer.serialize_str("overwrite"),
            WriteMode::Update(rev) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(".tag", "update")?;
                map.serialize_entry("update", rev)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadArgs {
    pub path: String,
    pub mode: WriteMode,
    pub autorename: bool,
    pub mute: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strict_conflict: bool,
}

impl UploadArgs {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: WriteMode::Add,
            autorename: true,
            mute: false,
            strict_conflict: false,
        }
    }

    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn autorename(mut self, autorename: bool) -> Self {
        self.autorename = autorename;
        self
    }

    pub fn mute(mut self, mute: bool) -> Self {
        self.mute = mute;
        self
    }

    pub fn strict_conflict(mut self, strict_conflict: bool) -> Self {
        self.strict_conflict = strict_conflict;
        self
    }

    /// Copy of these args with a leading `/` on the path.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            path: normalize_path(&self.path),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadArgs {
    pub path: String,
}
