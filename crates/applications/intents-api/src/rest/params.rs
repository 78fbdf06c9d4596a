//! Paging parameters from the raw query string

use intents_core::{IntentsError, IntentsResult, PageRequest, PaginationConfig, SortOrder};
use url::form_urlencoded;

/// Build a [`PageRequest`] from `page`, `size` and repeated `sort` parameters.
///
/// Missing values fall back to page 0 and the configured default size;
/// oversized requests are clamped to the configured maximum.
pub fn page_request(query: Option<&str>, config: &PaginationConfig) -> IntentsResult<PageRequest> {
    let mut page = 0;
    let mut size = config.default_page_size;
    let mut sort = Vec::new();

    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        match key.as_ref() {
            "page" => page = parse_number("page", &value)?,
            "size" => size = parse_number("size", &value)?,
            "sort" => sort.extend(SortOrder::parse(&value)?),
            _ => {}
        }
    }

    Ok(PageRequest::new(page, size.min(config.max_page_size))?.with_sort(sort))
}

fn parse_number(name: &str, value: &str) -> IntentsResult<u32> {
    value.trim().parse().map_err(|_| {
        IntentsError::validation("badquery", format!("Invalid '{name}' parameter: {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use intents_core::Direction;

    #[test]
    fn test_defaults() {
        let request = page_request(None, &PaginationConfig::default()).unwrap();
        assert_eq!((request.page, request.size), (0, 20));
        assert!(request.sort.is_empty());
    }

    #[test]
    fn test_repeated_sort() {
        let request = page_request(
            Some("page=2&size=5&sort=tag,desc&sort=id"),
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!((request.page, request.size), (2, 5));
        assert_eq!(request.sort.len(), 2);
        assert_eq!(request.sort[0].property, "tag");
        assert_eq!(request.sort[0].direction, Direction::Desc);
        assert_eq!(request.sort[1].property, "id");
        assert_eq!(request.sort[1].direction, Direction::Asc);
    }

    #[test]
    fn test_size_is_clamped() {
        let request = page_request(Some("size=999999"), &PaginationConfig::default()).unwrap();
        assert_eq!(request.size, 2000);
    }

    #[test]
    fn test_invalid_values() {
        let config = PaginationConfig::default();
        assert!(page_request(Some("page=-1"), &config).is_err());
        assert!(page_request(Some("size=abc"), &config).is_err());
        assert!(page_request(Some("size=0"), &config).is_err());
        assert!(page_request(Some("sort=,desc"), &config).is_err());
    }

    #[test]
    fn test_percent_encoded_sort() {
        let request =
            page_request(Some("sort=context_set%2Cdesc"), &PaginationConfig::default()).unwrap();
        assert_eq!(request.sort[0].property, "context_set");
        assert_eq!(request.sort[0].direction, Direction::Desc);
    }
}
