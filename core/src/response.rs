//! Status classification and body reading.
//!
//! | status      | outcome   | body                              |
//! |-------------|-----------|-----------------------------------|
//! | 200, 201    | `Content` | read and decoded                  |
//! | 202, 204    | `Empty`   | not read                          |
//! | anything else | `Error` | read as text into [`ApiError`]    |

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::codec;
use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::transport::TransportResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Content,
    Empty,
    Error,
}

pub fn classify(status: u16) -> Outcome {
    match status {
        200 | 201 => Outcome::Content,
        202 | 204 => Outcome::Empty,
        _ => Outcome::Error,
    }
}

/// Classify `response` and read it accordingly.
///
/// Returns `Ok(None)` for 202/204 and for a blank or `null` success body.
pub async fn read_response<T, B>(response: B) -> Result<Option<T>>
where
    T: DeserializeOwned,
    B: TransportResponse,
{
    let status = response.status();
    let outcome = classify(status);
    trace!(status, ?outcome, "classified response");

    match outcome {
        Outcome::Empty => {
            drop(response);
            Ok(None)
        }
        Outcome::Content => {
            let body = response.text().await?;
            Ok(codec::decode_body(&body)?)
        }
        Outcome::Error => {
            let body = response.text().await?;
            Err(ApiError { status, body }.into())
        }
    }
}

/// Synchronous counterpart of [`read_response`] for a response already in memory.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<Option<T>> {
    match classify(response.status) {
        Outcome::Empty => Ok(None),
        Outcome::Content => Ok(codec::decode_body(&response.body)?),
        Outcome::Error => Err(ApiError {
            status: response.status,
            body: response.body,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, TransportError};
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Widget {
        id: String,
    }

    /// Fails the test if the body is read.
    struct Unreadable(u16);

    #[async_trait]
    impl TransportResponse for Unreadable {
        fn status(&self) -> u16 {
            self.0
        }

        async fn text(self) -> std::result::Result<String, TransportError> {
            panic!("body of a {} response must not be read", self.0);
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(classify(200), Outcome::Content);
        assert_eq!(classify(201), Outcome::Content);
        assert_eq!(classify(202), Outcome::Empty);
        assert_eq!(classify(204), Outcome::Empty);
        for status in [100, 203, 206, 301, 304, 400, 401, 404, 409, 500, 503, 999] {
            assert_eq!(classify(status), Outcome::Error, "{status}");
        }
    }

    #[tokio::test]
    async fn empty_outcomes_skip_the_body() {
        for status in [202, 204] {
            let result: Option<Widget> = read_response(Unreadable(status)).await.unwrap();
            assert!(result.is_none());
        }
    }

    #[tokio::test]
    async fn content_is_decoded() {
        let result: Option<Widget> = read_response(HttpResponse::new(200, r#"{"id":"42"}"#))
            .await
            .unwrap();
        assert_eq!(result, Some(Widget { id: "42".to_string() }));
    }

    #[tokio::test]
    async fn error_carries_raw_body() {
        let err = read_response::<Widget, _>(HttpResponse::new(500, "{\"oops\": true}"))
            .await
            .unwrap_err();
        assert!(matches!(&err, Error::Api(ApiError { status: 500, body }) if body == "{\"oops\": true}"));
    }

    #[test]
    fn malformed_success_body_is_serialization_error() {
        let err = parse_response::<Widget>(HttpResponse::new(201, "<html>")).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn parse_matches_async_reader() {
        assert!(parse_response::<Widget>(HttpResponse::new(204, "ignored")).unwrap().is_none());
        let err = parse_response::<Widget>(HttpResponse::new(404, "not found")).unwrap_err();
        assert_eq!(err.to_string(), "not found");
    }
}
