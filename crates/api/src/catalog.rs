//! Paginated catalog fetch.

use tracing::debug;

use common::pagination::PageQuery;
use common::types::{ApiResponse, ErrorMessage};
use models::catalog::ProductsPage;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch one catalog page. Non-success envelopes become
    /// [`ApiError::Backend`] carrying the backend's message and status code.
    pub async fn products(&self, page: PageQuery) -> Result<ProductsPage, ApiError> {
        let page = page.normalize();
        debug!(page = page.page, limit = page.limit, "fetching products");
        let query = page.to_query();
        let resp = self
            .http
            .get(self.url("/products"))
            .query(&query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope = resp
            .json::<ApiResponse<ProductsPage>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        match envelope {
            ApiResponse::Success(ok) => Ok(ok.data),
            ApiResponse::Error(err) => Err(ApiError::Backend {
                status_code: err.status_code,
                message: flatten_message(err.message),
            }),
        }
    }
}

fn flatten_message(message: ErrorMessage) -> String {
    match message {
        ErrorMessage::Text(text) => text,
        ErrorMessage::Fields(fields) => fields
            .into_iter()
            .map(|f| format!("{}: {}", f.field, f.error_message))
            .collect::<Vec<_>>()
            .join("; "),
    }
}
