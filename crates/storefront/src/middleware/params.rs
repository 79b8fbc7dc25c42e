use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use shared::errors::HttpError;
use std::collections::HashMap;

/// Raw query-string parameters with typed accessors that fail as 400 envelopes.
#[derive(Debug, Default, Clone)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// A required integer parameter.
    pub fn int(&self, key: &str) -> Result<i64, HttpError> {
        let raw = self.text(key);
        raw.parse::<i64>()
            .map_err(|e| HttpError::BadRequest(format!("invalid {key} parameter {raw:?}: {e}")))
    }

    /// Text parameter; missing keys read as an empty string.
    pub fn text(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    /// `limit` and `offset`, with a zero limit replaced by the default page size.
    pub fn page(&self) -> Result<(i64, i64), HttpError> {
        let mut limit = self.int("limit")?;
        let offset = self.int("offset")?;

        if limit == 0 {
            limit = DEFAULT_PAGE_SIZE;
        }

        Ok((limit, offset))
    }
}

pub const DEFAULT_PAGE_SIZE: i64 = 10;

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(params))
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(params: HashMap<String, String>) -> Self {
        Self(params)
    }
}
