//! End-to-end bitsquat pipeline

use super::combiner::Combiner;
use crate::bits::{encode, VariantSet};
use crate::config::SquatConfig;
use crate::domain::{CandidateFilter, DomainValidator, UrlSplitter};
use crate::error::Result;
use crate::types::{Candidate, Label, SquatReport};

/// Generates the bitsquatted candidates for a URL
pub struct BitSquatter {
    config: SquatConfig,
    splitter: UrlSplitter,
    validator: DomainValidator,
}

impl BitSquatter {
    /// Create a generator with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SquatConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: SquatConfig) -> Result<Self> {
        let mut validator = DomainValidator::new()?;
        if let Some(tlds) = &config.tlds {
            validator = validator.with_tld_whitelist(tlds.clone());
        }

        Ok(Self {
            config,
            splitter: UrlSplitter::new()?,
            validator,
        })
    }

    pub fn config(&self) -> &SquatConfig {
        &self.config
    }

    /// Run the pipeline on `url`, filtering with the built-in domain validator
    pub fn generate(&self, url: &str) -> Result<SquatReport> {
        self.generate_with_filter(url, &self.validator)
    }

    /// Run the pipeline on `url`, filtering with a caller-supplied predicate
    pub fn generate_with_filter<F>(&self, url: &str, filter: &F) -> Result<SquatReport>
    where
        F: CandidateFilter + ?Sized,
    {
        let target = self.splitter.trim_protocol(url);
        let (domain, extension) = self.splitter.split(target)?;

        let domain_bits = encode(&domain);
        let extension_bits = encode(&extension);

        let all = self.candidates(&domain, &extension)?;
        let generated = all.len();
        let candidates = filter_candidates(all, filter);

        tracing::info!(
            url = %target,
            generated,
            emitted = candidates.len(),
            "Generated bitsquat candidates"
        );
        if candidates.is_empty() {
            tracing::warn!(url = %target, "No candidate passed the domain filter");
        }

        Ok(SquatReport {
            target: target.to_string(),
            domain,
            extension,
            domain_bits: domain_bits.to_string(),
            extension_bits: extension_bits.to_string(),
            flip_mode: self.config.flip_mode,
            permutate_extension: self.config.permutate_extension,
            generated,
            candidates,
        })
    }

    /// Every candidate for an already split URL, before filtering
    pub fn candidates(&self, domain: &Label, extension: &Label) -> Result<Vec<Candidate>> {
        let mode = self.config.flip_mode;

        let domain_variants =
            VariantSet::generate(&encode(domain), mode).decode_all(domain.char_len())?;
        tracing::debug!(domain = %domain, variants = domain_variants.len(), "Flipped domain bits");

        let extension_variants = if self.config.permutate_extension {
            let decoded =
                VariantSet::generate(&encode(extension), mode).decode_all(extension.char_len())?;
            tracing::debug!(extension = %extension, variants = decoded.len(), "Flipped extension bits");
            decoded
        } else {
            Vec::new()
        };

        let combiner = Combiner::new(self.config.permutate_extension);
        let candidates = combiner.combine(&domain_variants, extension, &extension_variants);
        debug_assert_eq!(
            candidates.len(),
            combiner.expected_count(domain_variants.len(), extension_variants.len())
        );

        Ok(candidates)
    }
}

/// Keep the candidates `filter` accepts, preserving order
pub fn filter_candidates<F>(candidates: Vec<Candidate>, filter: &F) -> Vec<Candidate>
where
    F: CandidateFilter + ?Sized,
{
    candidates
        .into_iter()
        .filter(|candidate| filter.accepts(candidate.as_str()))
        .collect()
}
