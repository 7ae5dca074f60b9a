//! Bitsquat - enumerate domains one bit flip away from a URL
//!
//! Splits a URL into domain name and extension, flips each bit of their
//! binary form once, and keeps the reassembled candidates that are valid
//! domain names.

pub mod bits;
pub mod config;
pub mod domain;
pub mod error;
pub mod squat;
pub mod types;

// Re-export commonly used types
pub use error::{BitsquatError, Result};
pub use types::{Candidate, FlipMode, Label, OutputFormat, SquatReport};

// Re-export main functionality
pub use bits::{decode, encode, generate_variants, BitVector, VariantSet};
pub use config::SquatConfig;
pub use domain::{split_url, trim_protocol, CandidateFilter, DomainValidator};
pub use squat::{BitSquatter, Combiner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
