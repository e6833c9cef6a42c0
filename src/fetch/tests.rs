use super::*;
use crate::executor::BoundedExecutor;
use crate::outcome::FailureKind;

#[derive(serde::Deserialize, Debug, PartialEq)]
struct Greeting {
    hello: String,
}

#[tokio::test]
async fn fetches_body_status_and_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/a")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hello":"world"}"#)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new().expect("fetcher");
    let response = fetcher
        .fetch(&format!("{}/a", server.url()))
        .await
        .expect("response");

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(
        response.json::<Greeting>().expect("json"),
        Greeting {
            hello: "world".to_string()
        }
    );
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ua")
        .match_header("user-agent", "fetchpool-test")
        .with_status(204)
        .create_async()
        .await;

    let fetcher = HttpFetcher::builder()
        .user_agent("fetchpool-test")
        .timeout_seconds(5)
        .build()
        .expect("fetcher");
    let response = fetcher
        .fetch(&format!("{}/ua", server.url()))
        .await
        .expect("response");

    mock.assert_async().await;
    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn injected_client_still_gets_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ua")
        .match_header("user-agent", "fetchpool-shared")
        .with_status(200)
        .create_async()
        .await;

    let fetcher = HttpFetcher::builder()
        .client(reqwest::Client::new())
        .user_agent("fetchpool-shared")
        .build()
        .expect("fetcher");
    fetcher
        .fetch(&format!("{}/ua", server.url()))
        .await
        .expect("response");

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_success_by_default() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let fetcher = HttpFetcher::new().expect("fetcher");
    let response = fetcher
        .fetch(&format!("{}/missing", server.url()))
        .await
        .expect("response");

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert_eq!(response.text(), "not here");
}

#[tokio::test]
async fn error_for_status_keeps_the_status_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/down")
        .with_status(503)
        .create_async()
        .await;

    let fetcher = HttpFetcher::builder()
        .error_for_status(true)
        .build()
        .expect("fetcher");
    let err = fetcher
        .fetch(&format!("{}/down", server.url()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Status);
    assert_eq!(err.status, Some(503));
}

#[tokio::test]
async fn skipping_the_body_leaves_it_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/big")
        .with_status(200)
        .with_body("lots of bytes")
        .create_async()
        .await;

    let fetcher = HttpFetcher::builder()
        .read_body(false)
        .build()
        .expect("fetcher");
    let response = fetcher
        .fetch(&format!("{}/big", server.url()))
        .await
        .expect("response");

    assert!(response.body.is_empty());
}

#[tokio::test]
async fn invalid_url_fails_only_that_item() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/ok")
        .with_status(200)
        .with_body("fine")
        .expect(2)
        .create_async()
        .await;
    let ok = format!("{}/ok", server.url());
    let urls = vec![ok.clone(), "not a url".to_string(), ok];

    let results = fetch_with_concurrency(&urls, 2).await.expect("fetch");

    assert!(results[0].is_success());
    assert!(results[2].is_success());
    let err = results[1].failure().expect("failure");
    assert_eq!(err.kind, FailureKind::Transport);
    assert!(err.message.contains("not a url"));
    assert!(err.cause.is_some());
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let fetcher = HttpFetcher::builder()
        .timeout_seconds(5)
        .build()
        .expect("fetcher");
    let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Transport);
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn results_follow_url_order() {
    let mut server = mockito::Server::new_async().await;
    let paths = ["/one", "/two", "/three", "/four", "/five"];
    for path in paths {
        server
            .mock("GET", path)
            .with_status(200)
            .with_body(path.trim_start_matches('/'))
            .create_async()
            .await;
    }
    let urls: Vec<String> = paths
        .iter()
        .map(|p| format!("{}{p}", server.url()))
        .collect();

    let fetcher = HttpFetcher::new().expect("fetcher");
    let executor = BoundedExecutor::new(fetcher, 2).expect("limit");
    let results = executor.execute(&urls).await;

    let bodies: Vec<String> = results
        .into_iter()
        .map(|o| o.into_result().expect("success").text())
        .collect();
    assert_eq!(bodies, vec!["one", "two", "three", "four", "five"]);
}

#[tokio::test]
async fn invalid_limit_sends_no_requests() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/never")
        .expect(0)
        .create_async()
        .await;
    let urls = vec![format!("{}/never", server.url())];

    let err = fetch_with_concurrency(&urls, 0).await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidArgument(_)));
    mock.assert_async().await;
}
