use super::syllable::{ClusterPosition, ClusterSizes};
use crate::sounds::{Sound, SoundClass};
use crate::{PhonoGenError, PhonoGenResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTRASTING_LENGTH: usize = 1;
pub const DEFAULT_MAX_SYLLABLES: usize = 3;

/// One recognised free-text directive, e.g. `"has: p"` or `"vowel cluster sizes: 1, 2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    No(Vec<String>),
    Has(Vec<String>),
    ConsonantInventorySize(usize),
    VowelInventorySize(usize),
    ContrastingVowelLength(usize),
    ContrastingConsonantLength(usize),
    MaxSyllablesInMorpheme(usize),
    ClusterSizes(ClusterPosition, Vec<usize>),
}

#[derive(Copy, Clone)]
enum Key {
    No,
    Has,
    ConsonantInventorySize,
    VowelInventorySize,
    ContrastingVowelLength,
    ContrastingConsonantLength,
    MaxSyllablesInMorpheme,
    ClusterSizes(ClusterPosition),
}

const KEYS: [(&str, Key); 10] = [
    ("no:", Key::No),
    ("has:", Key::Has),
    ("consonant inventory size:", Key::ConsonantInventorySize),
    ("vowel inventory size:", Key::VowelInventorySize),
    ("contrasting vowel length:", Key::ContrastingVowelLength),
    ("contrasting consonant length:", Key::ContrastingConsonantLength),
    ("max syllables in morpheme:", Key::MaxSyllablesInMorpheme),
    (
        "starting consonant cluster sizes:",
        Key::ClusterSizes(ClusterPosition::Onset),
    ),
    (
        "vowel cluster sizes:",
        Key::ClusterSizes(ClusterPosition::Nucleus),
    ),
    (
        "ending consonant cluster sizes:",
        Key::ClusterSizes(ClusterPosition::Coda),
    ),
];

fn split_key(input: &str) -> Option<(Key, &str)> {
    let trimmed = input.trim();
    KEYS.iter().find_map(|(prefix, key)| {
        let head = trimmed.get(..prefix.len())?;
        if head.eq_ignore_ascii_case(prefix) {
            Some((*key, trimmed[prefix.len()..].trim()))
        } else {
            None
        }
    })
}

fn config_error(directive: &str, reason: impl ToString) -> PhonoGenError {
    PhonoGenError::ConfigParse {
        directive: directive.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_count(directive: &str, payload: &str) -> PhonoGenResult<usize> {
    payload
        .parse::<usize>()
        .map_err(|e| config_error(directive, e))
}

fn parse_names(payload: &str) -> Vec<String> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Directive {
    /// Parses a single directive. Text that matches no known key is `Ok(None)`.
    pub fn parse(input: &str) -> PhonoGenResult<Option<Self>> {
        let Some((key, payload)) = split_key(input) else {
            return Ok(None);
        };
        let directive = match key {
            Key::No => Directive::No(parse_names(payload)),
            Key::Has => Directive::Has(parse_names(payload)),
            Key::ConsonantInventorySize => {
                Directive::ConsonantInventorySize(parse_count(input, payload)?)
            }
            Key::VowelInventorySize => Directive::VowelInventorySize(parse_count(input, payload)?),
            Key::ContrastingVowelLength => {
                Directive::ContrastingVowelLength(parse_count(input, payload)?)
            }
            Key::ContrastingConsonantLength => {
                Directive::ContrastingConsonantLength(parse_count(input, payload)?)
            }
            Key::MaxSyllablesInMorpheme => {
                Directive::MaxSyllablesInMorpheme(parse_count(input, payload)?)
            }
            Key::ClusterSizes(position) => {
                let sizes = payload
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| parse_count(input, s))
                    .collect::<PhonoGenResult<Vec<_>>>()?;
                Directive::ClusterSizes(position, sizes)
            }
        };
        Ok(Some(directive))
    }
}

/// Typed form of a directive list.
///
/// Scalar keys keep the last value given; `no:` and `has:` accumulate. A cluster-size
/// directive replaces the whole default list for its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub excluded: Vec<String>,
    pub required: Vec<String>,
    pub consonant_inventory_size: Option<usize>,
    pub vowel_inventory_size: Option<usize>,
    pub contrasting_vowel_length: usize,
    pub contrasting_consonant_length: usize,
    pub max_syllables_in_morpheme: usize,
    pub cluster_sizes: ClusterSizes,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            excluded: vec![],
            required: vec![],
            consonant_inventory_size: None,
            vowel_inventory_size: None,
            contrasting_vowel_length: DEFAULT_CONTRASTING_LENGTH,
            contrasting_consonant_length: DEFAULT_CONTRASTING_LENGTH,
            max_syllables_in_morpheme: DEFAULT_MAX_SYLLABLES,
            cluster_sizes: ClusterSizes::default(),
        }
    }
}

impl Constraints {
    /// Parses every directive, stopping at the first malformed one.
    pub fn parse<S: AsRef<str>>(directives: &[S]) -> PhonoGenResult<Self> {
        let mut result = Self::default();
        for d in directives {
            match Directive::parse(d.as_ref())? {
                Some(directive) => result.apply(directive),
                None => debug!("ignoring directive \"{}\"", d.as_ref()),
            }
        }
        Ok(result)
    }

    /// Like [`Constraints::parse`], but a malformed directive is skipped and its value left at
    /// whatever earlier directives (or the defaults) set. The skipped errors are returned.
    pub fn parse_lenient<S: AsRef<str>>(directives: &[S]) -> (Self, Vec<PhonoGenError>) {
        let mut result = Self::default();
        let mut errors = vec![];
        for d in directives {
            match Directive::parse(d.as_ref()) {
                Ok(Some(directive)) => result.apply(directive),
                Ok(None) => debug!("ignoring directive \"{}\"", d.as_ref()),
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        }
        (result, errors)
    }

    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::No(mut names) => self.excluded.append(&mut names),
            Directive::Has(mut names) => self.required.append(&mut names),
            Directive::ConsonantInventorySize(n) => self.consonant_inventory_size = Some(n),
            Directive::VowelInventorySize(n) => self.vowel_inventory_size = Some(n),
            Directive::ContrastingVowelLength(n) => self.contrasting_vowel_length = n,
            Directive::ContrastingConsonantLength(n) => self.contrasting_consonant_length = n,
            Directive::MaxSyllablesInMorpheme(n) => self.max_syllables_in_morpheme = n,
            Directive::ClusterSizes(position, sizes) => {
                *self.cluster_sizes.options_mut(position) = sizes
            }
        }
    }

    pub fn excludes(&self, sound: &Sound) -> bool {
        self.excluded.iter().any(|q| sound.matches(q))
    }

    /// True when a `has:` directive names `sound`. Exclusion is not taken into account here.
    pub fn requires(&self, sound: &Sound) -> bool {
        self.required.iter().any(|q| sound.matches(q))
    }

    pub fn contrasting_length(&self, class: SoundClass) -> usize {
        match class {
            SoundClass::Consonant => self.contrasting_consonant_length,
            SoundClass::Vowel => self.contrasting_vowel_length,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_defaults() {
        let c = Constraints::parse::<&str>(&[]).unwrap();
        assert_eq!(c, Constraints::default());
        assert_eq!(c.contrasting_consonant_length, 1);
        assert_eq!(c.max_syllables_in_morpheme, 3);
        assert_eq!(c.cluster_sizes.onset, vec![1, 0, 2, 3]);
        assert_eq!(c.cluster_sizes.nucleus, vec![1, 2, 3]);
        assert_eq!(c.cluster_sizes.coda, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn t_directives() {
        let c = Constraints::parse(&[
            "no: p, t",
            "has: ʃ",
            "Consonant Inventory Size: 12",
            "vowel inventory size: 7",
            "contrasting vowel length: 2",
            "contrasting consonant length: 3",
            "max syllables in morpheme: 5",
            "starting consonant cluster sizes: 1, 2",
            "vowel cluster sizes:1",
            "ending consonant cluster sizes: 0",
        ])
        .unwrap();
        assert_eq!(c.excluded, vec!["p", "t"]);
        assert_eq!(c.required, vec!["ʃ"]);
        assert_eq!(c.consonant_inventory_size, Some(12));
        assert_eq!(c.vowel_inventory_size, Some(7));
        assert_eq!(c.contrasting_vowel_length, 2);
        assert_eq!(c.contrasting_consonant_length, 3);
        assert_eq!(c.max_syllables_in_morpheme, 5);
        assert_eq!(c.cluster_sizes.onset, vec![1, 2]);
        assert_eq!(c.cluster_sizes.nucleus, vec![1]);
        assert_eq!(c.cluster_sizes.coda, vec![0]);
    }

    #[test]
    fn t_last_scalar_wins_lists_accumulate() {
        let c = Constraints::parse(&[
            "consonant inventory size: 10",
            "no: p",
            "vowel cluster sizes: 1, 2",
            "consonant inventory size: 20",
            "no: k",
            "vowel cluster sizes: 3",
        ])
        .unwrap();
        assert_eq!(c.consonant_inventory_size, Some(20));
        assert_eq!(c.excluded, vec!["p", "k"]);
        assert_eq!(c.cluster_sizes.nucleus, vec![3]);
    }

    #[test]
    fn t_unknown_directives_are_ignored() {
        let c = Constraints::parse(&["tone: yes", "", "nope", "vowels please"]).unwrap();
        assert_eq!(c, Constraints::default());
        assert_eq!(Directive::parse("stress: initial").unwrap(), None);
    }

    #[test]
    fn t_malformed_number() {
        let err = Constraints::parse(&["consonant inventory size: many"]).unwrap_err();
        match err {
            PhonoGenError::ConfigParse { directive, .. } => {
                assert_eq!(directive, "consonant inventory size: many")
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(Constraints::parse(&["vowel cluster sizes: 1, two"]).is_err());
        assert!(Constraints::parse(&["max syllables in morpheme: -1"]).is_err());
    }

    #[test]
    fn t_lenient_keeps_previous_value() {
        let (c, errors) = Constraints::parse_lenient(&[
            "max syllables in morpheme: 2",
            "max syllables in morpheme: lots",
            "has: m",
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(c.max_syllables_in_morpheme, 2);
        assert_eq!(c.required, vec!["m"]);
    }

    #[test]
    fn t_empty_cluster_list() {
        let c = Constraints::parse(&["ending consonant cluster sizes:"]).unwrap();
        assert!(c.cluster_sizes.coda.is_empty());
    }

    #[test]
    fn t_serde_defaults() {
        let c: Constraints = serde_json::from_str(r#"{"excluded": ["h"]}"#).unwrap();
        assert_eq!(c.excluded, vec!["h"]);
        assert_eq!(c.max_syllables_in_morpheme, DEFAULT_MAX_SYLLABLES);
        assert_eq!(c.cluster_sizes, ClusterSizes::default());
    }
}
