// src/integrations/tmdb/parser.rs
//
// Decoding of the `{"results": [...]}` envelope used by the per-movie
// `videos` and `reviews` listings. Source order is preserved.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Review, Trailer};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct ResultsEnvelope<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TrailerData {
    key: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ReviewData {
    author: String,
    content: String,
    url: String,
}

fn parse_results<T: DeserializeOwned>(body: &str) -> AppResult<Vec<T>> {
    serde_json::from_str::<ResultsEnvelope<T>>(body)
        .map(|envelope| envelope.results)
        .map_err(|e| AppError::MalformedResponse(e.to_string()))
}

pub fn parse_trailers(body: &str) -> AppResult<Vec<Trailer>> {
    let trailers = parse_results::<TrailerData>(body)?
        .into_iter()
        .map(|data| Trailer::new(data.key, data.name))
        .collect();
    Ok(trailers)
}

pub fn parse_reviews(body: &str) -> AppResult<Vec<Review>> {
    let reviews = parse_results::<ReviewData>(body)?
        .into_iter()
        .map(|data| Review::new(data.author, data.content, data.url))
        .collect();
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_is_empty_not_error() {
        assert!(parse_trailers(r#"{"results": []}"#).unwrap().is_empty());
        assert!(parse_reviews(r#"{"id": 42, "results": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_single_trailer() {
        let trailers = parse_trailers(r#"{"results":[{"key":"abc123","name":"Trailer 1"}]}"#).unwrap();
        assert_eq!(trailers, vec![Trailer::new("abc123", "Trailer 1")]);
    }

    #[test]
    fn test_extra_fields_are_ignored_and_order_kept() {
        let body = r#"{
            "id": 550,
            "results": [
                {"iso_639_1": "en", "key": "SUXWAEX2jlg", "name": "Trailer", "site": "YouTube"},
                {"iso_639_1": "en", "key": "BdJKm16Co6M", "name": "Teaser", "site": "YouTube"}
            ]
        }"#;

        let names: Vec<String> = parse_trailers(body)
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        assert_eq!(names, vec!["Trailer", "Teaser"]);
    }

    #[test]
    fn test_reviews() {
        let body = r#"{"results":[{"author":"Goddard","content":"Pretty awesome.","url":"https://www.themoviedb.org/review/5b1c"}]}"#;

        let reviews = parse_reviews(body).unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].author(), "Goddard");
        assert_eq!(reviews[0].content(), "Pretty awesome.");
        assert_eq!(reviews[0].url(), "https://www.themoviedb.org/review/5b1c");
    }

    #[test]
    fn test_missing_results_is_malformed() {
        let result = parse_trailers(r#"{"status_code": 7}"#);
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let result = parse_reviews(r#"{"results":[{"author":"a","content":"b"}]}"#);
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let result = parse_trailers("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
