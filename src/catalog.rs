use crate::raw_data;
use crate::sounds::{parse_sounds, Sound, SoundRecord};
use crate::PhonoGenResult;
use log::{debug, warn};
use std::fmt::Formatter;
use std::io;

/// The full set of sounds selection draws from. A catalog is never modified after it is
/// built; selectors keep their own working pools of references into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    consonants: Vec<Sound>,
    vowels: Vec<Sound>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MissingTag {
    Manner,
    Place,
}

/// A consonant the catalog accepted but that lacks manner or place tags. The sound is still
/// usable for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIntegrityWarning {
    pub sound: String,
    pub missing: MissingTag,
}

impl std::fmt::Display for CatalogIntegrityWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self.missing {
            MissingTag::Manner => "manner",
            MissingTag::Place => "place",
        };
        write!(f, "consonant {} has no {} tag", self.sound, tag)
    }
}

impl Catalog {
    /// Splits `sounds` into consonants and vowels, keeping catalog order, and logs any
    /// integrity problems.
    pub fn new(sounds: impl IntoIterator<Item = Sound>) -> Self {
        let (consonants, vowels): (Vec<_>, Vec<_>) =
            sounds.into_iter().partition(|s| s.is_consonant());
        let catalog = Self { consonants, vowels };
        for warning in catalog.integrity_warnings() {
            warn!("{}", warning);
        }
        debug!(
            "catalog holds {} consonants and {} vowels",
            catalog.consonants.len(),
            catalog.vowels.len()
        );
        catalog
    }

    /// The embedded IPA tables.
    pub fn builtin() -> PhonoGenResult<Self> {
        Self::from_csv_readers(
            raw_data::CONSONANTS.as_bytes(),
            raw_data::VOWELS.as_bytes(),
        )
    }

    pub fn from_csv_readers<C: io::Read, V: io::Read>(
        consonants: C,
        vowels: V,
    ) -> PhonoGenResult<Self> {
        let mut sounds = parse_sounds(consonants)?;
        sounds.append(&mut parse_sounds(vowels)?);
        Ok(Self::new(sounds))
    }

    /// Reads a JSON array of catalog records.
    pub fn from_json_reader<R: io::Read>(reader: R) -> PhonoGenResult<Self> {
        let sounds: Vec<Sound> = serde_json::from_reader(reader)?;
        Ok(Self::new(sounds))
    }

    pub fn to_json_writer<W: io::Write>(&self, writer: W) -> PhonoGenResult<()> {
        let records = self
            .sounds()
            .cloned()
            .map(SoundRecord::from)
            .collect::<Vec<_>>();
        serde_json::to_writer_pretty(writer, &records)?;
        Ok(())
    }

    pub fn consonants(&self) -> &[Sound] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[Sound] {
        &self.vowels
    }

    pub fn sounds(&self) -> impl Iterator<Item = &Sound> {
        self.consonants.iter().chain(self.vowels.iter())
    }

    pub fn len(&self) -> usize {
        self.consonants.len() + self.vowels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a sound up by glyph or descriptive name.
    pub fn find(&self, query: &str) -> Option<&Sound> {
        self.sounds().find(|s| s.matches(query))
    }

    pub fn integrity_warnings(&self) -> Vec<CatalogIntegrityWarning> {
        let mut warnings = vec![];
        for sound in &self.consonants {
            let Some(consonant) = sound.consonant() else {
                continue;
            };
            if consonant.manners().is_empty() {
                warnings.push(CatalogIntegrityWarning {
                    sound: sound.name().to_string(),
                    missing: MissingTag::Manner,
                });
            }
            if consonant.places().is_empty() {
                warnings.push(CatalogIntegrityWarning {
                    sound: sound.name().to_string(),
                    missing: MissingTag::Place,
                });
            }
        }
        warnings
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sounds::{Phonation, SoundClass};

    #[test]
    fn t_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.consonants().len() > 100);
        assert_eq!(catalog.vowels().len(), 34);
        assert!(catalog.consonants().iter().all(|s| s.class() == SoundClass::Consonant));
        assert!(catalog.vowels().iter().all(|s| s.class() == SoundClass::Vowel));
        assert!(catalog.integrity_warnings().is_empty());
        let common = catalog
            .consonants()
            .iter()
            .filter(|s| s.is_common())
            .map(|s| s.representation())
            .collect::<Vec<_>>();
        assert_eq!(common, vec!["m", "n", "p", "b", "t", "d", "k", "g", "s", "f", "j", "l"]);
    }

    #[test]
    fn t_find() {
        let catalog = Catalog::builtin().unwrap();
        let b = catalog.find("VoicedBilabialPlosive").unwrap();
        assert_eq!(b.representation(), "b");
        assert_eq!(b.consonant().unwrap().phonation(), Phonation::Voiced);
        assert_eq!(catalog.find("ə").unwrap().name(), "MidCentralVowel");
        assert!(catalog.find("not a sound").is_none());
    }

    #[test]
    fn t_json_round_trip() {
        let catalog = Catalog::builtin().unwrap();
        let mut buffer = vec![];
        catalog.to_json_writer(&mut buffer).unwrap();
        let back = Catalog::from_json_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn t_missing_tags_are_reported() {
        let json = r#"[
            {"descriptiveName": "Mystery", "ipaChar": "ʬ", "phonation": "voiceless", "type": "pulmonic"},
            {"descriptiveName": "Placeless", "ipaChar": "ʭ", "phonation": "voiced", "manner": ["click"], "type": "nonpulmonic"}
        ]"#;
        let catalog = Catalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.consonants().len(), 2);
        assert_eq!(
            catalog.integrity_warnings(),
            vec![
                CatalogIntegrityWarning {
                    sound: "Mystery".to_string(),
                    missing: MissingTag::Manner
                },
                CatalogIntegrityWarning {
                    sound: "Mystery".to_string(),
                    missing: MissingTag::Place
                },
                CatalogIntegrityWarning {
                    sound: "Placeless".to_string(),
                    missing: MissingTag::Place
                },
            ]
        );
    }

    #[test]
    fn t_malformed_json_is_a_catalog_error() {
        let json = r#"[{"descriptiveName": "NoType", "ipaChar": "x"}]"#;
        assert!(matches!(
            Catalog::from_json_reader(json.as_bytes()),
            Err(crate::PhonoGenError::CatalogParse(_))
        ));
    }
}
