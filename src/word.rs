use crate::sounds::Sound;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum_macros::{Display, EnumString};

fn write_sounds<'a>(
    f: &mut Formatter<'_>,
    sounds: impl IntoIterator<Item = &'a Sound>,
) -> std::fmt::Result {
    for sound in sounds {
        write!(f, "{}", sound)?;
    }
    Ok(())
}

/// Sounds laid out by a `c`/`v` structure string, one sound per slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    pub(crate) structure: String,
    pub(crate) sounds: Vec<Sound>,
}

impl Syllable {
    pub fn new(structure: impl Into<String>, sounds: Vec<Sound>) -> Self {
        Self {
            structure: structure.into(),
            sounds,
        }
    }

    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    fn nucleus_range(&self) -> std::ops::Range<usize> {
        let start = self.sounds.iter().take_while(|s| s.is_consonant()).count();
        let len = self.sounds[start..]
            .iter()
            .take_while(|s| s.is_vowel())
            .count();
        start..start + len
    }

    /// Consonants before the first vowel.
    pub fn onset(&self) -> &[Sound] {
        &self.sounds[..self.nucleus_range().start]
    }

    pub fn nucleus(&self) -> &[Sound] {
        &self.sounds[self.nucleus_range()]
    }

    /// Everything after the vowel run.
    pub fn coda(&self) -> &[Sound] {
        &self.sounds[self.nucleus_range().end..]
    }
}

impl Display for Syllable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_sounds(f, &self.sounds)
    }
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MorphemeKind {
    FreeLexical,
    FreeFunctional,
    BoundPrefix,
    BoundAffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub(crate) syllables: Vec<Syllable>,
    pub(crate) kind: MorphemeKind,
    pub(crate) meaning: String,
}

impl Morpheme {
    pub fn new(syllables: Vec<Syllable>, kind: MorphemeKind, meaning: impl Into<String>) -> Self {
        Self {
            syllables,
            kind,
            meaning: meaning.into(),
        }
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn kind(&self) -> MorphemeKind {
        self.kind
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// All syllables' sounds, in order.
    pub fn pronunciation(&self) -> Vec<&Sound> {
        self.syllables.iter().flat_map(|s| s.sounds()).collect()
    }
}

impl Display for Morpheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_sounds(f, self.pronunciation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub(crate) sounds: Vec<Sound>,
    pub(crate) meaning: String,
}

impl Word {
    pub fn new(sounds: Vec<Sound>, meaning: impl Into<String>) -> Self {
        Self {
            sounds,
            meaning: meaning.into(),
        }
    }

    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

impl From<Morpheme> for Word {
    fn from(value: Morpheme) -> Self {
        Self {
            sounds: value
                .syllables
                .into_iter()
                .flat_map(|s| s.sounds)
                .collect(),
            meaning: value.meaning,
        }
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_sounds(f, &self.sounds)
    }
}
