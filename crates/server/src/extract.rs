//! Body extractors whose rejections are JSON `{error, message}` 400s.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// `axum::Json` that rejects malformed or mistyped bodies with 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

/// A file part from a multipart body.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Accepts either `application/json` or `multipart/form-data`.
///
/// In a multipart body the first part without a file name is parsed as the
/// JSON payload (whatever its name, e.g. `user` or `product`), and the first
/// non-empty part with a file name is the image.
#[derive(Debug)]
pub struct JsonWithImage<T> {
    pub payload: T,
    pub image: Option<Upload>,
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonWithImage<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let ApiJson(payload) = ApiJson::<T>::from_request(req, state).await?;
            return Ok(Self { payload, image: None });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;

        let mut payload: Option<T> = None;
        let mut image: Option<Upload> = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?
        {
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let bytes = field.bytes().await.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
                    if image.is_none() && !bytes.is_empty() {
                        image = Some(Upload { file_name, bytes });
                    }
                }
                None => {
                    let text = field.text().await.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
                    if payload.is_none() {
                        let parsed = serde_json::from_str::<T>(&text)
                            .map_err(|e| JsonApiError::bad_request(format!("invalid JSON part: {e}")))?;
                        payload = Some(parsed);
                    }
                }
            }
        }

        let payload = payload.ok_or_else(|| JsonApiError::bad_request("missing JSON part"))?;
        Ok(Self { payload, image })
    }
}
