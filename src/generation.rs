pub mod parse;
pub mod syllable;

use crate::catalog::Catalog;
use crate::generation::parse::Constraints;
use crate::inventory::Inventory;
use crate::word::{Morpheme, MorphemeKind, Syllable, Word};
use crate::zipf::zipfy_index;
use crate::PhonoGenResult;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MORPHOLOGY_SIZE: usize = 30;
pub const PLACEHOLDER_MEANING: &str = "nomeaning";
pub const DEFAULT_WORD_SYLLABLES: usize = 4;

/// How [`Generator::generate_word`] builds a word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordPolicy {
    /// One consonant then one vowel per syllable, `1..=max_syllables` syllables skewed
    /// toward fewer. Cluster sizes are ignored.
    AlternatingCv { max_syllables: usize },
    /// A single `freeLexical` morpheme.
    Morphemic,
}

impl Default for WordPolicy {
    fn default() -> Self {
        Self::AlternatingCv {
            max_syllables: DEFAULT_WORD_SYLLABLES,
        }
    }
}

/// An inventory together with the constraints words are generated under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    inventory: Inventory,
    constraints: Constraints,
}

impl Generator {
    pub fn new(inventory: Inventory, constraints: Constraints) -> Self {
        Self {
            inventory,
            constraints,
        }
    }

    /// Selects a fresh inventory from `catalog` first.
    pub fn from_catalog<R: Rng + ?Sized>(
        catalog: &Catalog,
        constraints: Constraints,
        rng: &mut R,
    ) -> Self {
        let inventory = Inventory::generate(catalog, &constraints, rng);
        Self::new(inventory, constraints)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn generate_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> PhonoGenResult<Syllable> {
        syllable::generate_syllable(&self.inventory, &self.constraints, rng)
    }

    pub fn generate_morpheme<R: Rng + ?Sized>(
        &self,
        kind: MorphemeKind,
        meaning: impl Into<String>,
        rng: &mut R,
    ) -> PhonoGenResult<Morpheme> {
        let count = zipfy_index(rng, self.constraints.max_syllables_in_morpheme)? + 1;
        let syllables = (0..count)
            .map(|_| self.generate_syllable(rng))
            .collect::<PhonoGenResult<Vec<_>>>()?;
        Ok(Morpheme::new(syllables, kind, meaning))
    }

    /// [`DEFAULT_MORPHOLOGY_SIZE`] free lexical morphemes, all with the placeholder meaning.
    pub fn generate_morphology<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> PhonoGenResult<Vec<Morpheme>> {
        self.generate_morphology_with(
            DEFAULT_MORPHOLOGY_SIZE,
            MorphemeKind::FreeLexical,
            |_| PLACEHOLDER_MEANING.to_string(),
            rng,
        )
    }

    /// `count` morphemes of `kind`; `meaning` is called with each morpheme's index.
    pub fn generate_morphology_with<R, F>(
        &self,
        count: usize,
        kind: MorphemeKind,
        mut meaning: F,
        rng: &mut R,
    ) -> PhonoGenResult<Vec<Morpheme>>
    where
        R: Rng + ?Sized,
        F: FnMut(usize) -> String,
    {
        let morphemes = (0..count)
            .map(|i| self.generate_morpheme(kind, meaning(i), rng))
            .collect::<PhonoGenResult<Vec<_>>>()?;
        debug!("generated {} {} morphemes", morphemes.len(), kind);
        Ok(morphemes)
    }

    pub fn generate_word<R: Rng + ?Sized>(
        &self,
        policy: WordPolicy,
        meaning: impl Into<String>,
        rng: &mut R,
    ) -> PhonoGenResult<Word> {
        match policy {
            WordPolicy::AlternatingCv { max_syllables } => {
                let count = zipfy_index(rng, max_syllables)? + 1;
                let mut sounds = Vec::with_capacity(count * 2);
                for _ in 0..count {
                    let syllable = syllable::generate_syllable_from_structure(
                        &self.inventory,
                        "cv",
                        &self.constraints,
                        rng,
                    )?;
                    sounds.extend(syllable.sounds);
                }
                Ok(Word::new(sounds, meaning))
            }
            WordPolicy::Morphemic => Ok(self
                .generate_morpheme(MorphemeKind::FreeLexical, meaning, rng)?
                .into()),
        }
    }
}
