use fetchpool::{FetchResponse, OperationError, Outcome};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UrlReport<'a> {
    pub url: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a OperationError>,
}

impl<'a> UrlReport<'a> {
    pub fn new(url: &'a str, outcome: &'a Outcome<FetchResponse>) -> Self {
        match outcome {
            Outcome::Success(response) => Self {
                url,
                ok: true,
                status: Some(response.status),
                bytes: Some(response.body.len()),
                error: None,
            },
            Outcome::Failure(err) => Self {
                url,
                ok: false,
                status: err.status,
                bytes: None,
                error: Some(err),
            },
        }
    }
}

pub fn render_line(url: &str, outcome: &Outcome<FetchResponse>) -> String {
    match outcome {
        Outcome::Success(response) => {
            format!("OK  {} {:>8}B {url}", response.status, response.body.len())
        }
        Outcome::Failure(err) => format!("ERR {url}: {err}"),
    }
}

pub fn render_json(
    urls: &[String],
    outcomes: &[Outcome<FetchResponse>],
) -> serde_json::Result<String> {
    let reports: Vec<UrlReport<'_>> = urls
        .iter()
        .zip(outcomes)
        .map(|(url, outcome)| UrlReport::new(url, outcome))
        .collect();
    serde_json::to_string_pretty(&reports)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bytes::Bytes;
    use fetchpool::FailureKind;

    use super::*;

    fn response(status: u16, body: &'static str) -> FetchResponse {
        FetchResponse {
            url: "https://a/".to_string(),
            status,
            headers: BTreeMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn lines_show_status_or_error() {
        let ok = Outcome::Success(response(200, "hello"));
        assert_eq!(render_line("https://a/", &ok), "OK  200        5B https://a/");

        let failed = Outcome::Failure(OperationError::new(FailureKind::Timeout, "timed out"));
        assert_eq!(render_line("https://b/", &failed), "ERR https://b/: timed out");
    }

    #[test]
    fn json_keeps_input_order_and_error_metadata() {
        let urls = vec!["https://a/".to_string(), "https://b/".to_string()];
        let outcomes = vec![
            Outcome::Success(response(200, "hi")),
            Outcome::Failure(
                OperationError::new(FailureKind::Status, "HTTP status 404").with_status(404),
            ),
        ];

        let json = render_json(&urls, &outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["url"], "https://a/");
        assert_eq!(value[0]["ok"], true);
        assert_eq!(value[0]["bytes"], 2);
        assert_eq!(value[1]["ok"], false);
        assert_eq!(value[1]["status"], 404);
        assert_eq!(value[1]["error"]["kind"], "status");
    }
}
