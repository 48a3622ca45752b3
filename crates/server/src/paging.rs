//! Page links and paginated responses.

use axum::{
    Json,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use engine::{Page, PaginationMetadata};
use serde::Serialize;
use url::Url;

use crate::{
    ServerError,
    types::pagination::{PAGINATION_HEADER, PaginationHeader},
};

/// Builds links to other pages of one listing, carrying the request's
/// sort, filter and field parameters.
#[derive(Debug, Clone)]
pub(crate) struct PageLinks {
    url: Url,
    params: Vec<(&'static str, String)>,
}

impl PageLinks {
    /// `path` is relative to `base`, which may carry a path prefix.
    pub(crate) fn new(base: &Url, path: &str) -> Result<Self, ServerError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        let url = base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ServerError::Internal(format!("invalid link path {path}: {err}")))?;

        Ok(Self {
            url,
            params: Vec::new(),
        })
    }

    /// Carry `key=value` into every link, when the request supplied it.
    pub(crate) fn param(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.params.push((key, value.to_string()));
        }
        self
    }

    pub(crate) fn link(&self, page: u32, page_size: u32) -> String {
        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .clear()
                .append_pair("page", &page.to_string())
                .append_pair("pageSize", &page_size.to_string());
            for (key, value) in &self.params {
                query.append_pair(key, value);
            }
        }
        url.into()
    }
}

fn pagination_header(metadata: PaginationMetadata) -> PaginationHeader {
    PaginationHeader {
        current_page: metadata.current_page,
        page_size: metadata.page_size,
        total_count: metadata.total_count,
        total_pages: metadata.total_pages,
        previous_page_link: metadata.previous_page_link,
        next_page_link: metadata.next_page_link,
    }
}

/// JSON body of the page items plus the `X-Pagination` header.
pub(crate) fn paginated<T: Serialize>(page: Page<T>) -> Result<Response, ServerError> {
    let header = serde_json::to_string(&pagination_header(page.metadata))
        .map_err(|err| ServerError::Internal(format!("pagination header: {err}")))?;
    let value = HeaderValue::from_str(&header)
        .map_err(|err| ServerError::Internal(format!("pagination header: {err}")))?;
    let name = HeaderName::try_from(PAGINATION_HEADER)
        .map_err(|err| ServerError::Internal(format!("pagination header: {err}")))?;

    Ok(([(name, value)], Json(page.items)).into_response())
}
