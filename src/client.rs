use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use strum_macros::{Display, IntoStaticStr};
use url::Url;

use crate::domain::Domains;
use crate::envelope;
use crate::record::Records;
use crate::user::Users;
use crate::{ApiError, ClientBuilderError, ClientError, CommonParams, Payload};

const DEFAULT_ENDPOINT: &str = "https://dnsapi.cn/";
const INTERNATIONAL_ENDPOINT: &str = "https://api.dnspod.com/";
const DEFAULT_USER_AGENT: &str = concat!("dnspod-rs/", env!("CARGO_PKG_VERSION"));

/// Remote methods of the DNSPod API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Method {
    #[strum(serialize = "Domain.List")]
    DomainList,
    #[strum(serialize = "Domain.Create")]
    DomainCreate,
    #[strum(serialize = "Domain.Info")]
    DomainInfo,
    #[strum(serialize = "Domain.Remove")]
    DomainRemove,
    #[strum(serialize = "Record.Line")]
    RecordLine,
    #[strum(serialize = "Record.List")]
    RecordList,
    #[strum(serialize = "Record.Create")]
    RecordCreate,
    #[strum(serialize = "Record.Info")]
    RecordInfo,
    #[strum(serialize = "Record.Modify")]
    RecordModify,
    #[strum(serialize = "Record.Remove")]
    RecordRemove,
    #[strum(serialize = "User.Detail")]
    UserDetail,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// HTTP details of a response, passed through for callers that need them.
#[derive(Debug, Clone, Default)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// Gets the value of a header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A decoded value, along with the metadata of the response it came from.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub value: T,
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            value: f(self.value),
            meta: self.meta,
        }
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    login_token: Option<String>,
    international: bool,
    format: Option<String>,
    lang: Option<String>,
    error_on_empty: Option<String>,
    user_id: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            login_token: None,
            international: false,
            format: None,
            lang: None,
            error_on_empty: None,
            user_id: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the login token, in the `<id>,<token>` form DNSPod issues.
    pub fn login_token(mut self, login_token: &str) -> Self {
        self.login_token = Some(login_token.to_string());
        self
    }

    /// Targets the international version of the API.
    pub fn international(mut self, international: bool) -> Self {
        self.international = international;
        self
    }

    /// Sets the response format. Only `json` can be decoded.
    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn error_on_empty(mut self, error_on_empty: &str) -> Self {
        self.error_on_empty = Some(error_on_empty.to_string());
        self
    }

    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, `https://dnsapi.cn/` is used,
    /// or `https://api.dnspod.com/` for the international version.
    ///
    /// # Errors
    /// - `MissingField` if no login token was given.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    /// - `Reqwest` if the HTTP client can't be created.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None if self.international => INTERNATIONAL_ENDPOINT.parse()?,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let login_token = self
            .login_token
            .ok_or_else(|| ClientBuilderError::MissingField("login_token".to_string()))?;

        let mut params = CommonParams::new(&login_token);
        params.is_international = self.international;
        if let Some(format) = self.format {
            params.format = format;
        }
        params.lang = self.lang;
        params.error_on_empty = self.error_on_empty;
        params.user_id = self.user_id;

        let mut http = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            endpoint,
            params,
            client: http.build()?,
        })
    }
}

/// API client.
///
/// Every call issues exactly one request per page; nothing is retried.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    params: CommonParams,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client with the default user agent.
    ///
    /// # Errors
    /// - `Reqwest` if the HTTP client can't be created.
    pub fn new(endpoint: &Url, params: CommonParams) -> Result<Self, ClientBuilderError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;

        Ok(Self {
            endpoint: endpoint.clone(),
            params,
            client,
        })
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn params(&self) -> &CommonParams {
        &self.params
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    pub fn records(&self) -> Records<'_> {
        Records::new(self)
    }

    pub fn user(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Returns a payload for sending to the DNSPod API.
    ///
    /// This payload already includes the data necessary for authorization.
    pub(crate) fn payload(&self) -> Payload {
        self.params.to_payload()
    }

    /// Creates the [Url] for the given method.
    fn build_url(&self, method: Method) -> Result<Url, url::ParseError> {
        self.endpoint.join(method.as_str())
    }

    /// Sends the payload to the given method and returns the raw body.
    ///
    /// # Errors
    /// - `Http` if the response status isn't a success, with the status and
    ///   the body's message.
    /// - `Reqwest` if the request couldn't be sent or the body read.
    pub(crate) fn execute(
        &self,
        method: Method,
        payload: Payload,
    ) -> Result<(Vec<u8>, ResponseMeta), ClientError> {
        let url = self.build_url(method)?;
        tracing::debug!(method = method.as_str(), %url, "sending DNSPod request");

        let resp = self.client.post(url).form(payload.fields()).send()?;
        if !resp.status().is_success() {
            let err = ApiError::from_response(resp);
            tracing::warn!(method = method.as_str(), status = %err.status(), "DNSPod request failed");
            return Err(err.into());
        }

        let meta = ResponseMeta {
            status: resp.status(),
            headers: resp.headers().clone(),
        };
        let body = resp.bytes()?.to_vec();

        Ok((body, meta))
    }

    /// Sends the payload to the given method and decodes the response's payload.
    pub(crate) fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        payload: Payload,
    ) -> Result<ApiResponse<T>, ClientError> {
        let (body, meta) = self.execute(method, payload)?;
        let value = envelope::decode(&body)?;

        Ok(ApiResponse { value, meta })
    }
}
