//! Domain name validation for generated candidates

use crate::error::Result;
use crate::validation_error;
use regex::Regex;
use std::collections::HashSet;

/// Domain name validator
#[derive(Debug, Clone)]
pub struct DomainValidator {
    label_pattern: Regex,
    tld_pattern: Regex,
    tld_whitelist: Option<HashSet<String>>,
}

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Result<Self> {
        Ok(Self {
            label_pattern: Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")?,
            tld_pattern: Regex::new(r"^[A-Za-z]{2,63}$")?,
            tld_whitelist: None,
        })
    }

    /// Only accept candidates whose final label is in `tlds`
    pub fn with_tld_whitelist(mut self, tlds: Vec<String>) -> Self {
        self.tld_whitelist = Some(tlds.into_iter().map(|s| s.to_lowercase()).collect());
        self
    }

    /// Validate a candidate, explaining the first rule it breaks
    pub fn validate(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(validation_error!("Domain name cannot be empty"));
        }

        if !domain.is_ascii() {
            return Err(validation_error!("Domain contains non-ASCII characters"));
        }

        if domain.len() > 253 {
            return Err(validation_error!("Domain name too long (max 253 characters)"));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(validation_error!("Domain must have at least one dot"));
        }

        for label in &labels {
            if label.is_empty() {
                return Err(validation_error!("Domain label cannot be empty"));
            }
            if !self.label_pattern.is_match(label) {
                return Err(validation_error!("Invalid domain label '{}'", label));
            }
        }

        // labels.len() >= 2 was checked above
        let tld = labels[labels.len() - 1];
        if !self.tld_pattern.is_match(tld) {
            return Err(validation_error!("Invalid TLD format '{}'", tld));
        }

        if let Some(whitelist) = &self.tld_whitelist {
            if !whitelist.contains(&tld.to_lowercase()) {
                return Err(validation_error!("TLD '{}' not in whitelist", tld));
            }
        }

        Ok(())
    }

    /// Check if a candidate is a syntactically valid domain
    pub fn is_valid_domain(&self, domain: &str) -> bool {
        match self.validate(domain) {
            Ok(()) => true,
            Err(e) => {
                tracing::trace!(domain = %domain.escape_debug(), reason = %e, "Rejected candidate");
                false
            }
        }
    }
}
