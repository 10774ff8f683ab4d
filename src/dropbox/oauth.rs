use reqwest::{header::HeaderValue, Url};

use crate::types::{Error, Result};

pub const NOT_IMPLEMENTED: &str =
    "Not implemented yet, please obtain a token manually and store it via set_token";

/// OAuth 2 authorization is not supported; this always fails.
pub async fn authorize(_client_id: &str, _redirect_uri: Option<&str>) -> Result<u16> {
    Err(Error::NotImplemented(NOT_IMPLEMENTED))
}

/// Builds the token-flow URL a user would open to grant access to the app
/// identified by `client_id`.
pub fn authorize_url(
    authorize_endpoint: &str,
    client_id: &str,
    redirect_uri: Option<&str>,
) -> Result<Url> {
    if client_id.is_empty() {
        return Err(Error::InvalidArgs("client_id must not be empty".into()));
    }

    let mut params = vec![("response_type", "token"), ("client_id", client_id)];
    if let Some(uri) = redirect_uri {
        Url::parse(uri).map_err(|e| Error::InvalidArgs(format!("redirect_uri `{uri}`: {e}")))?;
        params.push(("redirect_uri", uri));
    }

    Url::parse_with_params(authorize_endpoint, &params).map_err(|e| Error::InvalidEndpoint {
        endpoint: authorize_endpoint.to_string(),
        reason: e.to_string(),
    })
}

pub fn get_auth_header(token: &str) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| Error::InvalidToken)?;
    value.set_sensitive(true);

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropbox::AUTHORIZE_ENDPOINT;

    #[tokio::test]
    async fn authorize_is_not_implemented() {
        let calls = [("", None), ("app-key", None), ("app-key", Some("http://localhost"))];
        for (client_id, redirect) in calls {
            let err = authorize(client_id, redirect).await.unwrap_err();
            assert!(matches!(err, Error::NotImplemented(_)));
            assert_eq!(err.to_string(), NOT_IMPLEMENTED);
        }
    }

    #[test]
    fn test_authorize_url() -> anyhow::Result<()> {
        let url = authorize_url(AUTHORIZE_ENDPOINT, "app-key", Some("http://localhost"))?;
        assert_eq!(
            url.as_str(),
            "https://www.dropbox.com/oauth2/authorize?response_type=token&client_id=app-key&redirect_uri=http%3A%2F%2Flocalhost"
        );

        assert!(authorize_url(AUTHORIZE_ENDPOINT, "", None).is_err());
        assert!(authorize_url(AUTHORIZE_ENDPOINT, "app-key", Some("invalid url")).is_err());
        Ok(())
    }

    #[test]
    fn auth_header() -> anyhow::Result<()> {
        let header = get_auth_header("abc123")?;
        assert_eq!(header.to_str()?, "Bearer abc123");
        assert!(header.is_sensitive());

        assert!(matches!(get_auth_header("a\r\nb"), Err(Error::InvalidToken)));
        Ok(())
    }
}
