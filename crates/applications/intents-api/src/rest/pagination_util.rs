//! `Link` and `X-Total-Count` headers for paged listings

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue};
use intents_core::Page;

/// Name of the total-count header
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Paging headers for `page`, with links relative to `base_url`.
///
/// Links are emitted in the order next, prev, last, first and joined with
/// commas.
pub fn generate_pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT, HeaderValue::from(page.total_elements));

    let size = page.size;
    let number = u64::from(page.number);
    let total_pages = page.total_pages();

    let mut links = Vec::with_capacity(4);
    if number + 1 < total_pages {
        links.push(link(base_url, number + 1, size, "next"));
    }
    if number > 0 {
        links.push(link(base_url, number - 1, size, "prev"));
    }
    let last_page = total_pages.saturating_sub(1);
    links.push(link(base_url, last_page, size, "last"));
    links.push(link(base_url, 0, size, "first"));

    if let Ok(value) = HeaderValue::from_str(&links.join(",")) {
        headers.insert(LINK, value);
    }
    headers
}

fn link(base_url: &str, page: u64, size: u32, rel: &str) -> String {
    format!("<{base_url}?page={page}&size={size}>; rel=\"{rel}\"")
}
