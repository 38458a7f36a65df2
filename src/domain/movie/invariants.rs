use super::entity::MovieRef;
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieRef invariants
pub fn validate_movie(movie: &MovieRef) -> DomainResult<()> {
    validate_id(movie.id())?;
    validate_title(movie.title())?;
    Ok(())
}

/// Catalog ids are strictly positive
fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = MovieRef::new(42, "Hitchhiker", "2005-04-28", "6.8", "Don't panic.", "/h.jpg");
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_non_positive_id_fails() {
        let movie = MovieRef::new(0, "Zero", "", "", "", "");
        assert!(validate_movie(&movie).is_err());

        let movie = MovieRef::new(-7, "Negative", "", "", "", "");
        assert!(validate_movie(&movie).is_err());
    }

    #[test]
    fn test_blank_title_fails() {
        let movie = MovieRef::new(5, "   ", "", "", "", "");
        assert!(validate_movie(&movie).is_err());
    }
}
