//! Reassemble domain and extension variants into candidate URLs

use crate::types::{Candidate, Label};

/// Where the extension half of each candidate comes from
#[derive(Debug, Clone, Copy)]
pub enum ExtensionSource<'a> {
    /// The original extension, unchanged
    Fixed(&'a Label),
    /// Every decoded extension variant
    Permuted(&'a [Label]),
}

/// Builds `domain.extension` candidates in generation order
#[derive(Debug, Clone, Copy, Default)]
pub struct Combiner {
    permutate_extension: bool,
}

impl Combiner {
    pub fn new(permutate_extension: bool) -> Self {
        Self {
            permutate_extension,
        }
    }

    pub fn permutate_extension(&self) -> bool {
        self.permutate_extension
    }

    /// Number of candidates `combine` will produce
    pub fn expected_count(&self, domain_variants: usize, extension_variants: usize) -> usize {
        if self.permutate_extension {
            domain_variants * extension_variants
        } else {
            domain_variants
        }
    }

    /// Combine every domain variant with the extension source
    ///
    /// `fixed` is the original extension. When extension permutation is
    /// enabled, `variants` supplies the inner loop; otherwise `fixed` is
    /// paired with every domain variant.
    pub fn combine(&self, domains: &[Label], fixed: &Label, variants: &[Label]) -> Vec<Candidate> {
        let source = if self.permutate_extension {
            ExtensionSource::Permuted(variants)
        } else {
            ExtensionSource::Fixed(fixed)
        };
        combine_with(domains, source)
    }
}

/// Build candidates: domain index ascending outside, extension index ascending inside
pub fn combine_with(domains: &[Label], source: ExtensionSource<'_>) -> Vec<Candidate> {
    match source {
        ExtensionSource::Fixed(extension) => domains
            .iter()
            .enumerate()
            .map(|(i, domain)| Candidate {
                domain_index: i,
                extension_index: None,
                url: join(domain, extension),
            })
            .collect(),
        ExtensionSource::Permuted(extensions) => {
            let mut candidates = Vec::with_capacity(domains.len() * extensions.len());
            for (i, domain) in domains.iter().enumerate() {
                for (j, extension) in extensions.iter().enumerate() {
                    candidates.push(Candidate {
                        domain_index: i,
                        extension_index: Some(j),
                        url: join(domain, extension),
                    });
                }
            }
            candidates
        }
    }
}

fn join(domain: &Label, extension: &Label) -> String {
    let mut url = String::with_capacity(domain.as_str().len() + extension.as_str().len() + 1);
    url.push_str(domain.as_str());
    url.push('.');
    url.push_str(extension.as_str());
    url
}
