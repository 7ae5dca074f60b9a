//! URL splitting and domain validity checks

pub mod splitter;
pub mod validator;

// Re-export main functionality
pub use splitter::{split_url, trim_protocol, UrlSplitter};
pub use validator::DomainValidator;

/// Pass/fail gate applied to each generated candidate
pub trait CandidateFilter {
    /// Whether the candidate should be emitted
    fn accepts(&self, candidate: &str) -> bool;
}

impl<F> CandidateFilter for F
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

impl CandidateFilter for DomainValidator {
    fn accepts(&self, candidate: &str) -> bool {
        self.is_valid_domain(candidate)
    }
}
