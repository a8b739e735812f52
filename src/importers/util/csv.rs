use csv::StringRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("missing required field {field:?}")]
    MissingField { field: &'static str },
    #[error("marker {marker:?} not found, details: {details:?}, description: {description:?}")]
    MarkerNotFound {
        marker: &'static str,
        details: String,
        description: String,
    },
}

impl ReadError {
    pub fn marker_not_found(marker: &'static str, details: &str, description: &str) -> ReadError {
        ReadError::MarkerNotFound {
            marker,
            details: details.to_string(),
            description: description.to_string(),
        }
    }
}

/// Checks that every one of `required` names a column in `headers`. Column
/// order is not significant.
pub fn check_headers(headers: &StringRecord, required: &[&'static str]) -> Result<(), ReadError> {
    match required
        .iter()
        .copied()
        .find(|want| !headers.iter().any(|got| got == *want))
    {
        Some(field) => Err(ReadError::MissingField { field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_headers_accepts_any_order() {
        let headers = StringRecord::from(vec!["b", "extra", "a"]);
        assert!(check_headers(&headers, &["a", "b"]).is_ok());
    }

    #[test]
    fn check_headers_names_first_missing() {
        let headers = StringRecord::from(vec!["a"]);
        match check_headers(&headers, &["a", "b", "c"]) {
            Err(ReadError::MissingField { field }) => assert_eq!("b", field),
            other => panic!("got {:?}, want missing field", other),
        }
    }
}
