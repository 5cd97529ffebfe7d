use crate::{PhonoGenError, PhonoGenResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt::Formatter;
use std::io;
use std::str::FromStr;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

pub type Manners = SmallVec<[Manner; 4]>;
pub type Places = SmallVec<[Place; 2]>;

/// A single catalog entry. Sounds are immutable once built; selection and generation only
/// ever clone or borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SoundRecord", into = "SoundRecord")]
pub struct Sound {
    pub(crate) name: String,
    pub(crate) representation: String,
    pub(crate) commonness: Commonness,
    pub(crate) description: SoundKind,
}

impl Sound {
    pub fn new(
        name: impl Into<String>,
        representation: impl Into<String>,
        commonness: Commonness,
        description: SoundKind,
    ) -> Self {
        Self {
            name: name.into(),
            representation: representation.into(),
            commonness,
            description,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn representation(&self) -> &str {
        self.representation.as_str()
    }

    pub fn commonness(&self) -> Commonness {
        self.commonness
    }

    pub fn description(&self) -> &SoundKind {
        &self.description
    }

    pub fn is_common(&self) -> bool {
        self.commonness == Commonness::Common
    }

    pub fn class(&self) -> SoundClass {
        match self.description {
            SoundKind::Consonant(_) => SoundClass::Consonant,
            SoundKind::Vowel(_) => SoundClass::Vowel,
        }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self.description, SoundKind::Consonant(_))
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self.description, SoundKind::Vowel(_))
    }

    pub fn consonant(&self) -> Option<&Consonant> {
        match &self.description {
            SoundKind::Consonant(c) => Some(c),
            SoundKind::Vowel(_) => None,
        }
    }

    pub fn vowel(&self) -> Option<&Vowel> {
        match &self.description {
            SoundKind::Vowel(v) => Some(v),
            SoundKind::Consonant(_) => None,
        }
    }

    /// `query` names this sound either by its exact glyph or by its descriptive name
    /// (ignoring ASCII case).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.representation == query || self.name.eq_ignore_ascii_case(query)
    }

    pub fn description_str(&self) -> String {
        match &self.description {
            SoundKind::Consonant(c) => format!("{} consonant", c),
            SoundKind::Vowel(v) => format!("{} vowel", v),
        }
    }
}

impl std::fmt::Display for Sound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.representation)
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum SoundKind {
    Vowel(Vowel),
    Consonant(Consonant),
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SoundClass {
    Consonant,
    Vowel,
}

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Commonness {
    Common,
    #[default]
    Normal,
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SoundType {
    Pulmonic,
    Nonpulmonic,
    Vowel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Airstream {
    Pulmonic,
    Nonpulmonic,
}

pub fn fmt_tags<T: ToString>(tags: &[T]) -> String {
    tags.iter().map(|t| t.to_string()).join(" ")
}

mod consonants {
    use super::*;

    #[derive(Debug, Clone, Eq, Hash, PartialEq)]
    pub struct Consonant {
        pub(crate) phonation: Phonation,
        pub(crate) places: Places,
        pub(crate) manners: Manners,
        pub(crate) airstream: Airstream,
    }

    impl Consonant {
        pub fn new(
            phonation: Phonation,
            places: &[Place],
            manners: &[Manner],
            airstream: Airstream,
        ) -> Self {
            Self {
                phonation,
                places: places.iter().copied().unique().collect(),
                manners: manners.iter().copied().unique().collect(),
                airstream,
            }
        }

        pub fn pulmonic(phonation: Phonation, place: Place, manner: Manner) -> Self {
            Self::new(phonation, &[place], &[manner], Airstream::Pulmonic)
        }

        pub fn with_manner(mut self, manner: Manner) -> Self {
            if !self.manners.contains(&manner) {
                self.manners.push(manner);
            }
            self
        }

        pub fn phonation(&self) -> Phonation {
            self.phonation
        }

        pub fn places(&self) -> &[Place] {
            &self.places
        }

        pub fn manners(&self) -> &[Manner] {
            &self.manners
        }

        pub fn airstream(&self) -> Airstream {
            self.airstream
        }

        pub fn is_pulmonic(&self) -> bool {
            self.airstream == Airstream::Pulmonic
        }
    }

    impl std::fmt::Display for Consonant {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "{} {} {}",
                self.phonation,
                fmt_tags(&self.places),
                fmt_tags(&self.manners)
            )
        }
    }

    #[derive(
        Debug,
        Copy,
        Clone,
        PartialOrd,
        PartialEq,
        Ord,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Phonation {
        Voiceless,
        Voiced,
    }

    #[derive(
        Debug,
        Copy,
        Clone,
        PartialOrd,
        PartialEq,
        Ord,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
        EnumIter,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Place {
        Bilabial,
        Labiodental,
        Linguolabial,
        Dental,
        Alveolar,
        Postalveolar,
        Retroflex,
        Palatal,
        Velar,
        Uvular,
        Pharyngeal,
        Glottal,
    }

    #[derive(
        Debug,
        Copy,
        Clone,
        PartialOrd,
        PartialEq,
        Ord,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
        EnumIter,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Manner {
        Nasal,
        Plosive,
        Sibilant,
        Fricative,
        Approximant,
        Flap,
        Trill,
        Lateral,
        Click,
        Ejective,
        Implosive,
    }
}

pub use consonants::*;

mod vowels {
    use super::*;

    #[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
    pub struct Vowel {
        pub(crate) height: Height,
        pub(crate) backness: Backness,
        pub(crate) roundedness: Roundedness,
    }

    impl Vowel {
        pub fn new(height: Height, backness: Backness, roundedness: Roundedness) -> Self {
            Self {
                height,
                backness,
                roundedness,
            }
        }

        pub fn height(&self) -> Height {
            self.height
        }

        pub fn backness(&self) -> Backness {
            self.backness
        }

        pub fn roundedness(&self) -> Roundedness {
            self.roundedness
        }
    }

    impl std::fmt::Display for Vowel {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} {} {}", self.height, self.backness, self.roundedness)
        }
    }

    #[derive(
        Debug,
        Eq,
        PartialEq,
        Ord,
        PartialOrd,
        Copy,
        Clone,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
        EnumIter,
        EnumCount,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Height {
        Close,
        NearClose,
        CloseMid,
        Mid,
        OpenMid,
        NearOpen,
        Open,
    }

    #[derive(
        Debug,
        Eq,
        PartialEq,
        Ord,
        PartialOrd,
        Copy,
        Clone,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
        EnumIter,
        EnumCount,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Backness {
        Front,
        NearFront,
        Central,
        NearBack,
        Back,
    }

    #[derive(
        Debug,
        Eq,
        PartialEq,
        Ord,
        PartialOrd,
        Copy,
        Clone,
        Hash,
        Serialize,
        Deserialize,
        Display,
        EnumString,
        EnumIter,
        EnumCount,
    )]
    #[serde(rename_all = "kebab-case")]
    #[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
    pub enum Roundedness {
        Unrounded,
        Rounded,
    }
}

pub use vowels::*;

/// Flat, serializable form of a [`Sound`] as it appears in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundRecord {
    pub descriptive_name: String,
    pub ipa_char: String,
    #[serde(default)]
    pub commonness: Commonness,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonation: Option<Phonation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manner: Vec<Manner>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub place: Vec<Place>,
    #[serde(rename = "type")]
    pub sound_type: SoundType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backness: Option<Backness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roundedness: Option<Roundedness>,
}

fn parse_tag<T: FromStr>(value: &str) -> PhonoGenResult<T> {
    T::from_str(value).map_err(|_| PhonoGenError::CatalogParse(format!("unknown tag '{}'", value)))
}

fn parse_tags<T: FromStr>(value: &str) -> PhonoGenResult<Vec<T>> {
    value.split_whitespace().map(parse_tag).collect()
}

impl SoundRecord {
    /// Builds a record from one CSV row keyed by header. List columns (`manner`, `place`)
    /// are whitespace separated.
    pub fn try_from_map(map: &HashMap<String, String>) -> PhonoGenResult<Self> {
        let field = |key: &str| map.get(key).map(String::as_str).filter(|v| !v.is_empty());
        let required = |key: &str| {
            field(key).ok_or_else(|| PhonoGenError::CatalogParse(format!("No {} defined", key)))
        };
        Ok(Self {
            descriptive_name: required("descriptiveName")?.to_string(),
            ipa_char: required("ipaChar")?.to_string(),
            commonness: field("commonness")
                .map(parse_tag)
                .transpose()?
                .unwrap_or_default(),
            phonation: field("phonation").map(parse_tag).transpose()?,
            manner: field("manner").map(parse_tags).transpose()?.unwrap_or_default(),
            place: field("place").map(parse_tags).transpose()?.unwrap_or_default(),
            sound_type: parse_tag(required("type")?)?,
            height: field("height").map(parse_tag).transpose()?,
            backness: field("backness").map(parse_tag).transpose()?,
            roundedness: field("roundedness").map(parse_tag).transpose()?,
        })
    }
}

impl TryFrom<SoundRecord> for Sound {
    type Error = PhonoGenError;

    fn try_from(record: SoundRecord) -> Result<Self, Self::Error> {
        let description = match record.sound_type {
            SoundType::Vowel => {
                let (Some(height), Some(backness), Some(roundedness)) =
                    (record.height, record.backness, record.roundedness)
                else {
                    return Err(PhonoGenError::CatalogParse(format!(
                        "vowel {} needs height, backness and roundedness",
                        record.descriptive_name
                    )));
                };
                SoundKind::Vowel(Vowel::new(height, backness, roundedness))
            }
            SoundType::Pulmonic | SoundType::Nonpulmonic => {
                let phonation = record.phonation.ok_or_else(|| {
                    PhonoGenError::CatalogParse(format!(
                        "consonant {} has no phonation",
                        record.descriptive_name
                    ))
                })?;
                let airstream = if record.sound_type == SoundType::Pulmonic {
                    Airstream::Pulmonic
                } else {
                    Airstream::Nonpulmonic
                };
                SoundKind::Consonant(Consonant::new(
                    phonation,
                    &record.place,
                    &record.manner,
                    airstream,
                ))
            }
        };
        Ok(Sound {
            name: record.descriptive_name,
            representation: record.ipa_char,
            commonness: record.commonness,
            description,
        })
    }
}

impl From<Sound> for SoundRecord {
    fn from(sound: Sound) -> Self {
        let mut record = SoundRecord {
            descriptive_name: sound.name,
            ipa_char: sound.representation,
            commonness: sound.commonness,
            phonation: None,
            manner: vec![],
            place: vec![],
            sound_type: SoundType::Vowel,
            height: None,
            backness: None,
            roundedness: None,
        };
        match sound.description {
            SoundKind::Consonant(c) => {
                record.phonation = Some(c.phonation);
                record.manner = c.manners.into_vec();
                record.place = c.places.into_vec();
                record.sound_type = match c.airstream {
                    Airstream::Pulmonic => SoundType::Pulmonic,
                    Airstream::Nonpulmonic => SoundType::Nonpulmonic,
                };
            }
            SoundKind::Vowel(v) => {
                record.height = Some(v.height);
                record.backness = Some(v.backness);
                record.roundedness = Some(v.roundedness);
            }
        }
        record
    }
}

pub fn parse_csv_to_map<R: io::Read>(reader: R) -> PhonoGenResult<Vec<HashMap<String, String>>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut records = vec![];
    for result in rdr.records() {
        let record = result?;
        let map = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.trim().to_string(), value.trim().to_string()))
            .collect::<HashMap<_, _>>();
        records.push(map);
    }
    Ok(records)
}

pub fn parse_sounds<R: io::Read>(input: R) -> PhonoGenResult<Vec<Sound>> {
    parse_csv_to_map(input)?
        .iter()
        .map(|r| SoundRecord::try_from_map(r).and_then(Sound::try_from))
        .collect()
}
