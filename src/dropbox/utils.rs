use std::{fmt::Write, io};

use regex::Regex;
use reqwest::{header::HeaderValue, Url};
use serde::Serialize;

use crate::{
    dropbox::API_VERSION,
    types::{Error, Result},
};

lazy_static::lazy_static! {
    static ref API_METHOD: Regex =
        Regex::new(r"^([a-z_2]+/)*[a-z_2]+$").expect("valid api method pattern");
}

pub trait IntoIOErr {
    fn into_io_err(self) -> io::Error;
}

impl IntoIOErr for reqwest::Error {
    fn into_io_err(self) -> io::Error {
        io::Error::new(io::ErrorKind::Other, self)
    }
}

pub fn validate_api_method(api_method: &str) -> Result<()> {
    if API_METHOD.is_match(api_method) {
        Ok(())
    } else {
        Err(Error::InvalidApiMethod(api_method.to_string()))
    }
}

/// `endpoint + API_VERSION + api_method`, with a `/` inserted after the
/// endpoint when it lacks one.
pub fn endpoint_url(endpoint: &str, api_method: &str) -> Result<Url> {
    validate_api_method(api_method)?;

    let invalid = |reason: String| Error::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut base = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(&format!("{API_VERSION}{api_method}"))
        .map_err(|e| invalid(e.to_string()))
}

/// Serializes `args` for the `Dropbox-API-Arg` header. The value must be a
/// JSON object; anything outside printable ASCII is written as `\uXXXX`.
pub fn api_arg_header<T: Serialize + ?Sized>(args: &T) -> Result<HeaderValue> {
    let value = serde_json::to_value(args)?;
    if !value.is_object() {
        return Err(Error::InvalidArgs(format!("{value} (expected: object)")));
    }

    let json = escape_non_ascii(&value.to_string());
    HeaderValue::from_str(&json).map_err(|e| Error::InvalidArgs(e.to_string()))
}

fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];

    for c in json.chars() {
        if c.is_ascii() && !c.is_ascii_control() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04x}");
        }
    }

    out
}

pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// A token is usable if `Bearer <token>` is a valid header value.
pub fn validate_token(token: &str) -> Result<()> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map(|_| ())
        .map_err(|_| Error::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_method_format() {
        for ok in ["files/upload", "files/get_metadata", "users/get_current_account", "check"] {
            assert!(validate_api_method(ok).is_ok(), "{ok} should be accepted");
        }

        let bad_methods = [
            "",
            "/files/upload",
            "files/",
            "files//upload",
            "Files/upload",
            "files/up-load",
        ];
        for bad in bad_methods {
            assert!(
                matches!(validate_api_method(bad), Err(Error::InvalidApiMethod(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_endpoint_url() -> anyhow::Result<()> {
        let url = endpoint_url("https://content.dropboxapi.com/", "files/upload")?;
        assert_eq!(url.as_str(), "https://content.dropboxapi.com/2/files/upload");

        let url = endpoint_url("http://127.0.0.1:3000", "files/download")?;
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/2/files/download");

        let url = endpoint_url("http://localhost/dropbox", "files/get_metadata")?;
        assert_eq!(url.as_str(), "http://localhost/dropbox/2/files/get_metadata");

        assert!(matches!(
            endpoint_url("not a url", "files/upload"),
            Err(Error::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            endpoint_url("ftp://example.com/", "files/upload"),
            Err(Error::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            endpoint_url("https://content.dropboxapi.com/", "files/Upload"),
            Err(Error::InvalidApiMethod(_))
        ));

        Ok(())
    }

    #[test]
    fn api_arg_escapes_non_ascii() -> anyhow::Result<()> {
        let header = api_arg_header(&json!({ "path": "/Fotos/Café 😀.jpg" }))?;

        assert_eq!(
            header.to_str()?,
            r#"{"path":"/Fotos/Caf\u00e9 \ud83d\ude00.jpg"}"#
        );
        Ok(())
    }

    #[test]
    fn api_arg_must_be_object() {
        assert!(matches!(api_arg_header("just a string"), Err(Error::InvalidArgs(_))));
        assert!(matches!(api_arg_header(&[1, 2, 3]), Err(Error::InvalidArgs(_))));
        assert!(api_arg_header(&json!({})).is_ok());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("validTestPath"), "/validTestPath");
        assert_eq!(normalize_path("/a/b.txt"), "/a/b.txt");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn token_characters() {
        assert!(validate_token("").is_ok());
        assert!(validate_token("loremipsum1234!").is_ok());
        assert!(validate_token("two words").is_ok());
        assert!(validate_token("tab\tseparated").is_ok());
        assert!(matches!(validate_token("line\nbreak"), Err(Error::InvalidToken)));
        assert!(matches!(validate_token("carriage\rreturn"), Err(Error::InvalidToken)));
        assert!(matches!(validate_token("nul\0byte"), Err(Error::InvalidToken)));
        assert!(matches!(validate_token("del\x7f"), Err(Error::InvalidToken)));
    }
}
