//! Tests for HTTP request/response types.

use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method, StatusCode};

use super::http::AGENT;
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url() -> url::Url {
    url::Url::parse("https://example.com/bangs.json").unwrap()
}

mod request {
    use super::*;

    #[test]
    fn get_has_no_headers() {
        let req = HttpRequest::get(url());

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, url());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn get_json_asks_for_json_and_names_agent() {
        let req = HttpRequest::get_json(url());

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.headers[ACCEPT], "application/json");
        assert_eq!(req.headers[USER_AGENT], AGENT);
        assert!(AGENT.starts_with("unbang/"));
    }

    #[test]
    fn with_header_keeps_earlier_values() {
        let req = HttpRequest::get_json(url())
            .with_header(ACCEPT, HeaderValue::from_static("text/javascript"));

        let accepted: Vec<_> = req.headers.get_all(ACCEPT).iter().collect();
        assert_eq!(accepted, ["application/json", "text/javascript"]);
    }
}

mod response {
    use super::*;

    #[test]
    fn ok_is_success_with_body() {
        let resp = HttpResponse::ok(&b"[]"[..]);

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body, b"[]");
        assert!(resp.is_success());
    }

    #[test]
    fn success_is_2xx_only() {
        let cases = [
            (StatusCode::OK, true),
            (StatusCode::NO_CONTENT, true),
            (StatusCode::NOT_MODIFIED, false),
            (StatusCode::NOT_FOUND, false),
            (StatusCode::BAD_GATEWAY, false),
        ];

        for (status, expected) in cases {
            let resp = HttpResponse::new(status, HeaderMap::new(), Vec::new());
            assert_eq!(resp.is_success(), expected, "{status}");
        }
    }
}

mod error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_keeps_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("unreachable")));

        assert!(error.to_string().contains("Connection error"));
        assert_eq!(error.source().unwrap().to_string(), "unreachable");
    }

    #[test]
    fn messages() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            HttpError::InvalidUrl("missing scheme".into()).to_string(),
            "Invalid URL: missing scheme"
        );
    }
}

mod client_trait {
    use super::*;

    struct EchoClient;

    impl HttpClient for EchoClient {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::ok(req.url.as_str()))
        }
    }

    #[tokio::test]
    async fn client_sees_request_url() {
        let resp = EchoClient.request(HttpRequest::get(url())).await.unwrap();
        assert_eq!(resp.body, url().as_str().as_bytes());
    }
}
