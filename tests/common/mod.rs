#![allow(dead_code)]

use dnspod::{Client, ClientBuilder};
use url::Url;
use wiremock::MockServer;

pub const LOGIN_TOKEN: &str = "token";
pub const USER_AGENT: &str = concat!("dnspod-rs/", env!("CARGO_PKG_VERSION"));

/// Builds a client pointed at the mock server.
///
/// The blocking client must be created, used and dropped off the async
/// runtime, so this is only called from inside [with_client].
pub fn client(uri: &str, international: bool) -> Client {
    let endpoint: Url = format!("{uri}/").parse().unwrap();
    Client::builder()
        .login_token(LOGIN_TOKEN)
        .endpoint(&endpoint)
        .international(international)
        .build()
        .unwrap()
}

/// Runs `f` with a client for `server` on a blocking thread.
pub async fn with_client<F, R>(server: &MockServer, f: F) -> R
where
    F: FnOnce(Client) -> R + Send + 'static,
    R: Send + 'static,
{
    with_client_opts(server, false, f).await
}

pub async fn with_client_opts<F, R>(server: &MockServer, international: bool, f: F) -> R
where
    F: FnOnce(Client) -> R + Send + 'static,
    R: Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || f(client(&uri, international)))
        .await
        .unwrap()
}

/// Runs `f` on a blocking thread with a client for `server`, built from a
/// builder that `customize` may adjust.
pub async fn with_builder<C, F, R>(server: &MockServer, customize: C, f: F) -> R
where
    C: FnOnce(ClientBuilder) -> ClientBuilder + Send + 'static,
    F: FnOnce(Client) -> R + Send + 'static,
    R: Send + 'static,
{
    let endpoint: Url = format!("{}/", server.uri()).parse().unwrap();
    tokio::task::spawn_blocking(move || {
        let builder = Client::builder().login_token(LOGIN_TOKEN).endpoint(&endpoint);
        f(customize(builder).build().unwrap())
    })
    .await
    .unwrap()
}

pub fn ok_body(rest: &str) -> String {
    if rest.is_empty() {
        r#"{"status": {"code": "1", "message": "Action completed successful"}}"#.to_string()
    } else {
        format!(r#"{{"status": {{"code": "1", "message": "Action completed successful"}}, {rest}}}"#)
    }
}
