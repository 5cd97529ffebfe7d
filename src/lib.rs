#![warn(clippy::all, rust_2018_idioms)]

pub mod catalog;
pub mod generation;
pub mod inventory;
mod raw_data;
pub mod sounds;
pub mod word;
pub mod zipf;

pub use catalog::{Catalog, CatalogIntegrityWarning};
pub use generation::parse::{Constraints, Directive};
pub use generation::syllable::{ClusterPosition, ClusterSizes};
pub use generation::{Generator, WordPolicy};
pub use inventory::Inventory;
pub use sounds::{Sound, SoundClass};
pub use word::{Morpheme, MorphemeKind, Syllable, Word};
pub use zipf::Zipfy;

#[derive(Debug, thiserror::Error)]
pub enum PhonoGenError {
    #[error("failed to parse directive \"{directive}\" ({reason})")]
    ConfigParse { directive: String, reason: String },
    #[error("zipfian sampler needs at least one option, got {0}")]
    InvalidDistributionInput(usize),
    #[error("no {0} cluster sizes configured")]
    EmptyClusterOptions(ClusterPosition),
    #[error("inventory has no {0} to fill a slot with")]
    EmptyCategory(SoundClass),
    #[error("unknown syllable slot '{0}', expected 'c' or 'v'")]
    InvalidStructure(char),
    #[error("failed to parse catalog ({0})")]
    CatalogParse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PhonoGenResult<T> = Result<T, PhonoGenError>;

impl From<csv::Error> for PhonoGenError {
    fn from(value: csv::Error) -> Self {
        Self::CatalogParse(value.to_string())
    }
}

impl From<serde_json::Error> for PhonoGenError {
    fn from(value: serde_json::Error) -> Self {
        Self::CatalogParse(value.to_string())
    }
}
