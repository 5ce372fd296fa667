//! Serializes query parameters onto the records endpoint.

use crate::constants::COLOR_FILTER_PARAM;
use crate::query::QueryParams;
use crate::types::Endpoint;
use url::Url;

/// Builds the request URL for a page.
///
/// The color filter is written as a repeated `color[]` key, one per color,
/// followed by `page`, `limit` and `offset`. A query already present on the
/// endpoint is kept in front.
pub fn build_url(endpoint: &Endpoint, params: &QueryParams) -> Url {
    let mut url = endpoint.as_url().clone();
    {
        let mut pairs = url.query_pairs_mut();
        for color in &params.color_filter {
            pairs.append_pair(COLOR_FILTER_PARAM, color);
        }
        pairs
            .append_pair("page", &params.page.to_string())
            .append_pair("limit", &params.limit.to_string())
            .append_pair("offset", &params.offset.to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{build_query, PageRequest};

    fn endpoint(url: &str) -> Endpoint {
        Endpoint::parse(url).unwrap()
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_default_query() {
        let url = build_url(&endpoint("http://localhost:3000/records"), &build_query(None));
        assert_eq!(url.path(), "/records");
        assert_eq!(
            pairs(&url),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "11".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_colors_are_repeated_keys() {
        let request = PageRequest::new()
            .with_page(2)
            .unwrap()
            .with_colors(["red", "blue"])
            .unwrap();
        let url = build_url(
            &endpoint("http://localhost:3000/records"),
            &build_query(Some(&request)),
        );

        let colors: Vec<String> = pairs(&url)
            .into_iter()
            .filter(|(k, _)| k == "color[]")
            .map(|(_, v)| v)
            .collect();
        assert_eq!(colors, vec!["red", "blue"]);
        assert!(url.as_str().ends_with("page=2&limit=11&offset=10"));
    }

    #[test]
    fn test_existing_query_is_kept() {
        let url = build_url(
            &endpoint("http://localhost:3000/records?tenant=a"),
            &build_query(None),
        );
        assert_eq!(pairs(&url)[0], ("tenant".to_string(), "a".to_string()));
        assert_eq!(pairs(&url).len(), 4);
    }
}
