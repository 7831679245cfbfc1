//! JSON body extractor that keeps rejections inside the error taxonomy.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Axum's stock `Json` answers malformed bodies with its own plaintext
/// 422/415 responses; this wrapper folds those into the API's uniform
/// `{"error": ...}` shape as a 400 instead. The rejection detail is
/// logged, not echoed to the caller.
///
/// # Example
///
/// ```rust,ignore
/// async fn signup(
///     State(state): State<AppState>,
///     AppJson(request): AppJson<SignupRequest>,
/// ) -> Result<impl IntoResponse> {
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(detail = %rejection.body_text(), "Rejected request body");
                Err(AppError::BadRequest("Invalid request body".to_string()))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        name: Option<String>,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let AppJson(probe) = AppJson::<Probe>::from_request(json_request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_bad_request() {
        let err = AppJson::<Probe>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        use axum::response::IntoResponse;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_maps_to_bad_request() {
        let req = Request::builder()
            .method("POST")
            .body(axum::body::Body::from(r#"{"name":"x"}"#))
            .unwrap();

        let err = AppJson::<Probe>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
