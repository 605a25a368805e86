use std::time::Duration;

use bytes::Bytes;
use keyline::prelude::*;
use keyline_test_utils::LicenseServer;
use rstest::rstest;
use tokio::net::TcpListener;
use url::Url;

fn callback_with_proxy(proxy: Url) -> LicenseCallback<HttpTransport> {
    LicenseCallback::new(HttpTransport::new(TransportOptions::new(proxy)).unwrap())
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn provisioning_round_trip() {
    let server = LicenseServer::start().await;
    let callback = callback_with_proxy(server.url("/license"));
    let default_url = format!("{}?key=k1", server.url("/provision"));

    let cert = callback
        .handle_provisioning_request(&ProvisionRequest::new(&b"a+b/c"[..], default_url))
        .await
        .unwrap();

    assert_eq!(cert, Bytes::from_static(b"certificate:a+b/c"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].query.as_deref(),
        Some("key=k1&signedRequest=a%2Bb%2Fc")
    );
    assert!(requests[0].body.is_empty());
}

#[rstest]
#[case::created(201)]
#[case::accepted(202)]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn provisioning_accepts_any_2xx(#[case] status: u16) {
    let server = LicenseServer::start().await;
    let callback = callback_with_proxy(server.url("/license"));
    let default_url = format!("{}?key=k1", server.url(&format!("/status/{status}")));

    let body = callback
        .handle_provisioning_request(&ProvisionRequest::new(&b"abc"[..], default_url))
        .await
        .unwrap();

    assert_eq!(body, Bytes::from(format!("status {status}")));
}

#[rstest]
#[case::conflict(409)]
#[case::not_found(404)]
#[case::server_error(500)]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn provisioning_rejection_carries_url_and_body(#[case] status: u16) {
    let server = LicenseServer::start().await;
    let callback = callback_with_proxy(server.url("/license"));
    let default_url = format!("{}?key=k1", server.url(&format!("/status/{status}")));
    let expected_url = format!("{default_url}&signedRequest=abc");

    let err = callback
        .handle_provisioning_request(&ProvisionRequest::new(&b"abc"[..], default_url))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CallbackError::http_status(status, Some(format!("status {status}")), expected_url)
    );
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn key_request_round_trip() {
    let server = LicenseServer::start().await;
    let callback = callback_with_proxy(server.url("/license"));

    let license = callback
        .execute_key_request(WIDEVINE_UUID, &KeyRequest::new(&b"\x01\x02"[..]))
        .await
        .unwrap();

    assert_eq!(license, Bytes::from_static(b"license:\x01\x02"));
    assert_eq!(server.requests()[0].body, Bytes::from_static(b"\x01\x02"));
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn key_request_denied() {
    let server = LicenseServer::start().await;
    let proxy = server.url("/license");
    let callback = callback_with_proxy(proxy.clone());

    let err = callback
        .handle_key_request(&KeyRequest::new(Bytes::new()))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.body(), Some("denied"));
    assert_eq!(err.url(), Some(proxy.as_str()));
}

#[rstest]
#[case::created(201)]
#[case::no_content(204)]
#[case::bad_request(400)]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn key_request_requires_exactly_200(#[case] status: u16) {
    let server = LicenseServer::start().await;
    let callback = callback_with_proxy(server.url(&format!("/status/{status}")));

    let err = callback
        .handle_key_request(&KeyRequest::new(&b"payload"[..]))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(status));
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn unreachable_proxy_surfaces_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let callback = callback_with_proxy(Url::parse(&format!("http://{addr}/license")).unwrap());

    let err = callback
        .handle_key_request(&KeyRequest::new(&b"payload"[..]))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CallbackError::Transport(NetError::Http(_))),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn transport_timeout_is_not_a_status_error() {
    let server = LicenseServer::start().await;
    let transport = HttpTransport::new(TransportOptions::new(server.url("/slow")))
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let callback: Box<dyn MediaDrmCallback> = Box::new(LicenseCallback::new(transport));

    let err = callback
        .execute_key_request(PLAYREADY_UUID, &KeyRequest::new(&b"payload"[..]))
        .await
        .unwrap_err();

    assert_eq!(err, CallbackError::Transport(NetError::Timeout));
    assert_eq!(err.status_code(), None);
}
