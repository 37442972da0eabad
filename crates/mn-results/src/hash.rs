//! Content fingerprints for run inputs.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::ResultsResult;

/// Hex SHA-256 of the JSON serialization of `value`.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> ResultsResult<String> {
    let json = serde_json::to_vec(value)?;
    let digest = Sha256::digest(&json);
    Ok(format!("{digest:x}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Request {
        model: &'static str,
        rows: u32,
    }

    #[test]
    fn fingerprint_is_stable() {
        let request = Request {
            model: "pershin",
            rows: 3,
        };
        let a = fingerprint(&request).unwrap();
        let b = fingerprint(&request).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn fingerprint_differs_for_different_inputs() {
        let a = fingerprint(&Request {
            model: "pershin",
            rows: 3,
        })
        .unwrap();
        let b = fingerprint(&Request {
            model: "vourkas",
            rows: 3,
        })
        .unwrap();
        assert_ne!(a, b);
    }
}
