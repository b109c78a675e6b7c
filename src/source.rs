use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{redirect, StatusCode};
use tracing::debug;

use crate::error::{PreloadError, Result};

/// Raw-file endpoint for the transport security state document in the
/// chromium source mirror.
///
/// The list historically lived on a code-browsing endpoint that no longer
/// exists, which is why the location is a named constant here rather than
/// an inline literal; [`crate::PreloadedListClient::from_url`] accepts any
/// other location serving the same commented-JSON body.
pub const PRELOAD_LIST_URL: &str =
    "https://raw.githubusercontent.com/chromium/chromium/main/net/http/transport_security_state_static.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One blocking GET of the list body. Exactly 200 counts as success;
/// redirects are not followed, so a 3xx surfaces as a status failure.
pub(crate) fn fetch_list_text(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(concat!("hsts-preload/", env!("CARGO_PKG_VERSION")))
        .redirect(redirect::Policy::none())
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    debug!(url = %url, "fetching preload list");
    let response = client.get(url).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(PreloadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text()?;
    debug!(bytes = body.len(), "fetched preload list body");
    Ok(body)
}
