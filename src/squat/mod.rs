//! Candidate generation - combine flipped labels and filter the results

mod combiner;
mod generator;

pub use combiner::{combine_with, Combiner, ExtensionSource};
pub use generator::{filter_candidates, BitSquatter};
