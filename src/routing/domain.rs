//! Domain name handling.
//!
//! # Responsibilities
//! - Normalize assigned domains (trim whitespace and outer dots, lowercase)
//! - Detect the platform's wildcard subdomain space
//! - Classify a domain as subdomain or root domain
//!
//! # Known Limitation
//! Classification counts labels: three or more is a subdomain, fewer is a
//! root domain. Compound public suffixes are not recognized, so
//! `shop.example.co.uk` yields root `co.uk` and `example.co.uk` is treated
//! as a subdomain of `co.uk`.

/// Shape of a domain for routing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind<'a> {
    /// Three or more labels.
    Subdomain {
        /// Leftmost label (`api` in `api.example.com`).
        label: &'a str,
        /// Last two labels (`example.com`).
        root: &'a str,
    },
    /// Two labels (or fewer).
    Root,
}

/// Normalize an assigned domain.
///
/// Surrounding whitespace and dots are dropped. Returns `None` for blank
/// input and for domains with an empty interior label (`a..b`), which
/// cannot be routed.
pub fn normalize(domain: &str) -> Option<String> {
    let trimmed = domain.trim().trim_matches('.');
    if trimmed.is_empty() || trimmed.split('.').any(str::is_empty) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Whether `domain` lies in the wildcard subdomain space named by `suffix`.
///
/// Both `.workers.dev` and `workers.dev` name the same space; the bare
/// suffix itself also counts.
pub fn is_wildcard(domain: &str, suffix: &str) -> bool {
    let bare = suffix.trim().trim_start_matches('.').to_lowercase();
    if bare.is_empty() {
        return false;
    }
    domain == bare
        || domain
            .strip_suffix(bare.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Classify a normalized domain by label count.
pub fn classify(domain: &str) -> DomainKind<'_> {
    match domain.rmatch_indices('.').nth(1) {
        Some((idx, _)) => {
            let label = domain.split('.').next().unwrap_or(domain);
            DomainKind::Subdomain {
                label,
                root: &domain[idx + 1..],
            }
        }
        None => DomainKind::Root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" API.Example.com. ").as_deref(), Some("api.example.com"));
        assert_eq!(normalize("example.com").as_deref(), Some("example.com"));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_normalize_stray_dots() {
        assert_eq!(normalize(".example.com").as_deref(), Some("example.com"));
        assert_eq!(normalize("example.com..").as_deref(), Some("example.com"));
        assert_eq!(normalize("..api.example.com.").as_deref(), Some("api.example.com"));
        assert_eq!(normalize("api..example.com"), None);
        assert_eq!(normalize("..."), None);
    }

    #[test]
    fn test_wildcard_detection() {
        assert!(is_wildcard("myworker.workers.dev", ".workers.dev"));
        assert!(is_wildcard("myworker.acme.workers.dev", "workers.dev"));
        assert!(is_wildcard("workers.dev", ".workers.dev"));
        assert!(!is_wildcard("notworkers.dev", ".workers.dev"));
        assert!(!is_wildcard("api.example.com", ".workers.dev"));
        assert!(!is_wildcard("api.example.com", ""));
    }

    #[test]
    fn test_classify_subdomain() {
        assert_eq!(
            classify("api.example.com"),
            DomainKind::Subdomain {
                label: "api",
                root: "example.com"
            }
        );
        assert_eq!(
            classify("v1.api.example.com"),
            DomainKind::Subdomain {
                label: "v1",
                root: "example.com"
            }
        );
    }

    #[test]
    fn test_classify_root() {
        assert_eq!(classify("example.com"), DomainKind::Root);
        assert_eq!(classify("localhost"), DomainKind::Root);
    }

    #[test]
    fn test_compound_suffix_is_misclassified() {
        // Documented limitation: no public suffix list.
        assert_eq!(
            classify("example.co.uk"),
            DomainKind::Subdomain {
                label: "example",
                root: "co.uk"
            }
        );
    }
}
