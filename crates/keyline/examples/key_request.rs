//! Send one key request to a license proxy and print the response size.
//!
//! Usage: `key_request <proxy-url> [challenge-file]`

use std::{env::args, error::Error, time::Duration};

use bytes::Bytes;
use keyline::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("keyline_drm=info,keyline_net=debug")),
        )
        .with_line_number(true)
        .with_file(true)
        .init();

    let proxy_url: Url = args()
        .nth(1)
        .ok_or("usage: key_request <proxy-url> [challenge-file]")?
        .parse()?;
    let challenge = match args().nth(2) {
        Some(path) => Bytes::from(std::fs::read(path)?),
        None => Bytes::from_static(b"\x08\x04"),
    };

    let options = TransportOptions::new(proxy_url).with_request_timeout(Duration::from_secs(10));
    let transport = HttpTransport::new(options)?.with_timeout(Duration::from_secs(15));
    let callback = LicenseCallback::new(transport);

    let license = callback
        .execute_key_request(WIDEVINE_UUID, &KeyRequest::new(challenge))
        .await?;
    info!(len = license.len(), "license received");

    Ok(())
}
