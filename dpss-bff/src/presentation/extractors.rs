//! Request extractors

use axum::{
    extract::{Form, FromRequest, FromRequestParts, Multipart, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::application::ViewError;
use crate::domain::FormValues;
use crate::presentation::controllers::BffState;

/// [`Path`] whose rejection is a JSON `BAD_REQUEST` error body.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T> FromRequestParts<BffState> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &BffState,
    ) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(state.error_response(ViewError::bad_request(rejection.body_text())))
            }
        }
    }
}

/// [`Query`] whose rejection is a JSON `BAD_REQUEST` error body.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T> FromRequestParts<BffState> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &BffState,
    ) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(state.error_response(ViewError::bad_request(rejection.body_text())))
            }
        }
    }
}

/// Submitted form fields, from either `multipart/form-data` (what the
/// rendering client sends) or `application/x-www-form-urlencoded`.
///
/// Repeated names keep the last value; file parts are read as text.
#[derive(Debug, Clone, Default)]
pub struct SubmittedForm(pub FormValues);

impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(values) = Form::<FormValues>::from_request(request, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(values));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut values = FormValues::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field.text().await.map_err(IntoResponse::into_response)?;
            values.insert(name, value);
        }

        Ok(Self(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Method;

    async fn extract(content_type: &str, body: &'static str) -> SubmittedForm {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        SubmittedForm::from_request(request, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_urlencoded_form() {
        let SubmittedForm(values) =
            extract("application/x-www-form-urlencoded", "name=lab&host=10.0.0.1").await;
        assert_eq!(values.get("name").map(String::as_str), Some("lab"));
        assert_eq!(values.get("host").map(String::as_str), Some("10.0.0.1"));
    }

    #[tokio::test]
    async fn test_multipart_form() {
        let body = "--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"name\"\r\n\
\r\n\
lab\r\n\
--XBOUNDARY\r\n\
Content-Disposition: form-data; name=\"password\"\r\n\
\r\n\
hunter2\r\n\
--XBOUNDARY--\r\n";
        let SubmittedForm(values) =
            extract("multipart/form-data; boundary=XBOUNDARY", body).await;
        assert_eq!(values.get("name").map(String::as_str), Some("lab"));
        assert_eq!(values.get("password").map(String::as_str), Some("hunter2"));
    }
}
