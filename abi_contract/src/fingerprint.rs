//! ABI fingerprint
//!
//! Two declaration sets with the same fingerprint render to the same
//! canonical text, whatever order they were declared in.

use crate::model::Signature;
use crate::render::render_declaration;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 over the canonical rendering, sorted by symbol
///
/// Symbols declared more than once sort by their rendered text as well.
pub fn fingerprint<'a, I>(signatures: I) -> String
where
    I: IntoIterator<Item = &'a Signature>,
{
    let mut rendered: Vec<(&str, String)> = signatures
        .into_iter()
        .map(|signature| (signature.name.as_str(), render_declaration(signature)))
        .collect();
    rendered.sort();

    let mut hasher = Sha256::new();
    for (_, text) in &rendered {
        hasher.update(text.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CType, FnAttribute, Param};

    fn sample() -> Vec<Signature> {
        vec![
            Signature::new("zx_ticks_get", CType::value("zx_ticks_t"))
                .with_attr(FnAttribute::Leaf),
            Signature::new("zx_nanosleep", CType::value("zx_status_t"))
                .with_param(Param::new("deadline", CType::value("zx_time_t")))
                .with_attr(FnAttribute::Leaf),
        ]
    }

    #[test]
    fn test_shape() {
        let fp = fingerprint(&sample());
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_order_independent() {
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(fingerprint(&sample()), fingerprint(&reversed));
    }

    #[test]
    fn test_sensitive_to_shape() {
        let mut changed = sample();
        changed[1].params[0].ty = CType::value("zx_duration_t");
        assert_ne!(fingerprint(&sample()), fingerprint(&changed));
    }

    #[test]
    fn test_duplicate_names_order_independent() {
        let first = Signature::new("zx_f", CType::value("zx_status_t"))
            .with_param(Param::new("handle", CType::value("zx_handle_t")));
        let second = Signature::new("zx_f", CType::value("zx_status_t"))
            .with_param(Param::new("handle", CType::value("uint64_t")));

        let forward = vec![first.clone(), second.clone()];
        let backward = vec![second, first];
        assert_eq!(fingerprint(&forward), fingerprint(&backward));
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(
            fingerprint(&Vec::<Signature>::new()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
