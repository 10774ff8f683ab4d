use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Body, Client, Method, Request, RequestBuilder, Response,
};
use serde::Serialize;

use crate::{
    dropbox::{
        oauth,
        res::{Download, Res},
        utils::{api_arg_header, endpoint_url, validate_token},
        DROPBOX_API_ARG, HTTP,
    },
    types::*,
};

const OCTET_STREAM: &str = "application/octet-stream";
const JSON: &str = "application/json";

/// A Dropbox API client bound to one [`Config`].
///
/// Every call takes an optional `endpoint`; `None` selects the endpoint the
/// Dropbox API serves that kind of call from.
#[derive(Debug, Clone)]
pub struct DropboxClient {
    http: Client,
    config: Config,
}

impl Default for DropboxClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DropboxClient {
    /// Client sharing the process-wide connection pool.
    pub fn new(config: Config) -> Self {
        Self::with_http(HTTP.clone(), config)
    }

    pub fn with_http(http: Client, config: Config) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        validate_token(&token)?;
        self.config.token = token;
        Ok(())
    }

    fn request(&self, method: Method, api_method: &str, endpoint: &str) -> Result<RequestBuilder> {
        let url = endpoint_url(endpoint, api_method)?;

        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, oauth::get_auth_header(&self.config.token)?))
    }

    /// Builds a content-style `POST`: arguments in the `Dropbox-API-Arg`
    /// header, `content` as the raw body.
    pub fn post_request<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        content: impl Into<Body>,
        endpoint: Option<&str>,
    ) -> Result<Request> {
        let endpoint = endpoint.unwrap_or(&self.config.content_endpoint);
        let arg = api_arg_header(api_args)?;
        tracing::trace!("{} {}: {:?}", DROPBOX_API_ARG, api_method, arg);

        let req = self
            .request(Method::POST, api_method, endpoint)?
            .header(CONTENT_TYPE, OCTET_STREAM)
            .header(DROPBOX_API_ARG, arg)
            .body(content)
            .build()?;

        Ok(req)
    }

    /// Builds a content-style `GET` with the arguments in the
    /// `Dropbox-API-Arg` header and no body.
    pub fn get_request<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        endpoint: Option<&str>,
    ) -> Result<Request> {
        let endpoint = endpoint.unwrap_or(&self.config.content_endpoint);
        let arg = api_arg_header(api_args)?;
        tracing::trace!("{} {}: {:?}", DROPBOX_API_ARG, api_method, arg);

        let req = self
            .request(Method::GET, api_method, endpoint)?
            .header(DROPBOX_API_ARG, arg)
            .build()?;

        Ok(req)
    }

    /// Builds an RPC-style `POST` with the arguments as a JSON body.
    pub fn rpc_request<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        endpoint: Option<&str>,
    ) -> Result<Request> {
        let endpoint = endpoint.unwrap_or(&self.config.api_endpoint);
        let body = serde_json::to_vec(api_args)?;

        let req = self
            .request(Method::POST, api_method, endpoint)?
            .header(CONTENT_TYPE, JSON)
            .body(body)
            .build()?;

        Ok(req)
    }

    async fn execute(&self, req: Request) -> Result<Response> {
        tracing::debug!("{} {}", req.method(), req.url());

        let res = self.http.execute(req).await?;
        tracing::debug!("{} answered {}", res.url(), res.status());

        Ok(res)
    }

    /// Sends `content` to `api_method`. The raw response is returned
    /// whatever its status.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        content: impl Into<Body>,
        endpoint: Option<&str>,
    ) -> Result<Response> {
        let req = self.post_request(api_method, api_args, content, endpoint)?;
        self.execute(req).await
    }

    pub async fn get<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        endpoint: Option<&str>,
    ) -> Result<Response> {
        let req = self.get_request(api_method, api_args, endpoint)?;
        self.execute(req).await
    }

    pub async fn rpc<T: Serialize + ?Sized>(
        &self,
        api_method: &str,
        api_args: &T,
        endpoint: Option<&str>,
    ) -> Result<Response> {
        let req = self.rpc_request(api_method, api_args, endpoint)?;
        self.execute(req).await
    }

    pub async fn upload(
        &self,
        args: &UploadArgs,
        content: impl Into<Body>,
    ) -> Result<FileMetadata> {
        let args = args.normalized();
        let res = self.post("files/upload", &args, content, None).await?;

        Res::from(res).json::<FileMetadata>().await
    }

    pub async fn download(&self, path: &str) -> Result<Download> {
        let args = DownloadArgs {
            path: path.to_string(),
        };
        let res = self.get("files/download", &args, None).await?;

        Download::from_response(Res::from(res).checked().await?)
    }

    pub async fn get_metadata(&self, args: &GetMetadataArgs) -> Result<Metadata> {
        let res = self.rpc("files/get_metadata", args, None).await?;

        Res::from(res).json::<Metadata>().await
    }

    pub async fn authorize(&self, client_id: &str, redirect_uri: Option<&str>) -> Result<u16> {
        oauth::authorize(client_id, redirect_uri).await
    }

    pub fn authorize_url(
        &self,
        client_id: &str,
        redirect_uri: Option<&str>,
    ) -> Result<reqwest::Url> {
        oauth::authorize_url(&self.config.authorize_endpoint, client_id, redirect_uri)
    }
}
