//! Content-type aware response decoding.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::GrafanaClient;
use crate::error::{ApiError, ClientError};
use crate::method::RestMethod;
use crate::params::RequestParams;
use crate::request::RequestSpec;
use crate::response::{BinaryFormat, DecodedResponse, JsonFormat, ResponseFormat};

impl GrafanaClient {
    /// Sends a request and decodes the response as JSON.
    ///
    /// ## Errors
    ///
    /// Besides the dispatch errors of [`send`](Self::send), fails with
    /// [`ValidationError::ContentTypeMismatch`](crate::ValidationError::ContentTypeMismatch)
    /// if the response is not declared as `application/json`, and with
    /// [`ValidationError::JsonParse`](crate::ValidationError::JsonParse) if
    /// the body is malformed.
    pub async fn request_json(
        &self,
        path: &str,
        params: RequestParams,
        method: RestMethod,
    ) -> Result<serde_json::Value, ApiError> {
        self.request_json_as(path, params, method).await
    }

    /// Like [`request_json`](Self::request_json), deserializing into `T`.
    pub async fn request_json_as<T>(
        &self,
        path: &str,
        params: RequestParams,
        method: RestMethod,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let spec = RequestSpec::new(path, method)?.with_params(params);
        self.execute::<JsonFormat<T>>(&spec).await
    }

    /// Sends a request and decodes the body by its declared content type.
    ///
    /// JSON responses are parsed into [`DecodedResponse::Json`]; anything
    /// else is returned untouched as [`DecodedResponse::Binary`].
    pub async fn request_decoded(
        &self,
        path: &str,
        params: RequestParams,
        method: RestMethod,
    ) -> Result<DecodedResponse, ApiError> {
        let spec = RequestSpec::new(path, method)?.with_params(params);
        let response = self.send(&spec).await?;
        let content_type = content_type_of(&response);

        if JsonFormat::<serde_json::Value>::check_content_type(&content_type).is_ok() {
            read_body::<JsonFormat<serde_json::Value>>(response, &content_type)
                .await
                .map(DecodedResponse::Json)
        } else {
            read_body::<BinaryFormat>(response, &content_type)
                .await
                .map(DecodedResponse::Binary)
        }
    }

    /// Sends a request and decodes the response with the format `F`.
    pub async fn execute<F>(&self, spec: &RequestSpec) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        let response = self.send(spec).await?;
        decode::<F>(response).await
    }
}

/// Checks the content type, then reads and parses the whole body once.
async fn decode<F: ResponseFormat>(response: reqwest::Response) -> Result<F::Output, ApiError> {
    let content_type = content_type_of(&response);
    F::check_content_type(&content_type)?;
    read_body::<F>(response, &content_type).await
}

async fn read_body<F: ResponseFormat>(
    response: reqwest::Response,
    content_type: &str,
) -> Result<F::Output, ApiError> {
    let body = response.bytes().await.map_err(ClientError::Request)?;
    debug!(
        content_type = %content_type,
        body_len = body.len(),
        "Decoding response body"
    );

    let parsed = F::parse(body).await?;
    Ok(parsed)
}

/// Declared content type, or `""` when the header is absent.
fn content_type_of(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ValidationError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GrafanaClient {
        let config = ClientConfig::new(server.uri(), "test-token").unwrap();
        GrafanaClient::new(config).unwrap()
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Org {
        id: u64,
        name: String,
    }

    #[tokio::test]
    async fn test_json_with_charset_is_accepted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/org"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"id":1,"name":"Main Org."}"#, "application/json; charset=utf-8"),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let value = client
            .request_json("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "name": "Main Org."}));
    }

    #[tokio::test]
    async fn test_plain_text_is_rejected_with_actual_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/org"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("ok", "text/plain"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .request_json("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(e) => assert_eq!(e.actual_content_type(), Some("text/plain")),
            other => panic!("expected content type mismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .request_json("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::ContentTypeMismatch { ref actual, .. }) if actual.is_empty()
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .request_json("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::JsonParse(_))));
    }

    #[tokio::test]
    async fn test_typed_decoding() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 4,
                "name": "Ops"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let org: Org = client
            .request_json_as("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap();
        assert_eq!(
            org,
            Org {
                id: 4,
                name: "Ops".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_binary_format_skips_content_type_check() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("raw", "text/plain"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let spec = RequestSpec::get("anything").unwrap();
        let body = client.execute::<BinaryFormat>(&spec).await.unwrap();
        assert_eq!(body, "raw");
    }

    #[tokio::test]
    async fn test_non_utf8_content_type_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"ok".to_vec())
                    .insert_header("content-type", &b"text/plain; name=caf\xe9"[..]),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .request_json("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap_err();
        match err {
            ApiError::Validation(e) => {
                let actual = e.actual_content_type().unwrap_or_default();
                assert!(actual.starts_with("text/plain; name=caf"), "got {actual:?}");
            }
            other => panic!("expected content type mismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_decoded_picks_variant_by_content_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/render/d-solo/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("png-bytes", "image/png"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let json = client
            .request_decoded("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap();
        assert_eq!(json.as_json(), Some(&serde_json::json!({"id": 1})));

        let image = client
            .request_decoded("render/d-solo/abc", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap();
        assert_eq!(image.as_binary(), Some(&b"png-bytes"[..]));
    }

    #[tokio::test]
    async fn test_request_decoded_rejects_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{oops", "application/json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .request_decoded("api/org", RequestParams::new(), RestMethod::Get)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::JsonParse(_))));
    }
}
