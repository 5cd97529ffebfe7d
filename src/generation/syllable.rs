use crate::generation::parse::Constraints;
use crate::inventory::Inventory;
use crate::sounds::{Sound, SoundClass};
use crate::word::Syllable;
use crate::zipf::choose_zipfy;
use crate::{PhonoGenError, PhonoGenResult};
use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ClusterPosition {
    Onset,
    Nucleus,
    Coda,
}

/// Allowed cluster sizes per syllable position, each list ordered from most to least common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSizes {
    pub onset: Vec<usize>,
    pub nucleus: Vec<usize>,
    pub coda: Vec<usize>,
}

impl Default for ClusterSizes {
    fn default() -> Self {
        Self {
            onset: vec![1, 0, 2, 3],
            nucleus: vec![1, 2, 3],
            coda: vec![0, 1, 2, 3, 4],
        }
    }
}

impl ClusterSizes {
    pub fn options(&self, position: ClusterPosition) -> &[usize] {
        match position {
            ClusterPosition::Onset => &self.onset,
            ClusterPosition::Nucleus => &self.nucleus,
            ClusterPosition::Coda => &self.coda,
        }
    }

    pub fn options_mut(&mut self, position: ClusterPosition) -> &mut Vec<usize> {
        match position {
            ClusterPosition::Onset => &mut self.onset,
            ClusterPosition::Nucleus => &mut self.nucleus,
            ClusterPosition::Coda => &mut self.coda,
        }
    }

    pub fn choose<R: Rng + ?Sized>(
        &self,
        position: ClusterPosition,
        rng: &mut R,
    ) -> PhonoGenResult<usize> {
        match self.options(position) {
            [] => Err(PhonoGenError::EmptyClusterOptions(position)),
            [only] => Ok(*only),
            options => choose_zipfy(options, rng).copied(),
        }
    }

    /// A structure string such as `"ccvc"`: one `c` per consonant slot, one `v` per vowel slot.
    pub fn structure<R: Rng + ?Sized>(&self, rng: &mut R) -> PhonoGenResult<String> {
        let onset = self.choose(ClusterPosition::Onset, rng)?;
        let nucleus = self.choose(ClusterPosition::Nucleus, rng)?;
        let coda = self.choose(ClusterPosition::Coda, rng)?;
        Ok(format!(
            "{}{}{}",
            "c".repeat(onset),
            "v".repeat(nucleus),
            "c".repeat(coda)
        ))
    }
}

fn slot_class(slot: char) -> PhonoGenResult<SoundClass> {
    match slot {
        'c' => Ok(SoundClass::Consonant),
        'v' => Ok(SoundClass::Vowel),
        other => Err(PhonoGenError::InvalidStructure(other)),
    }
}

/// Draws uniformly from `options` until the pick differs from each of the last `window`
/// sounds in `previous`.
///
/// When `options` is too small for that to be possible the window shrinks until some option
/// qualifies, so the loop always has a reachable exit.
fn pick_contrasting<'a, R: Rng + ?Sized>(
    options: &'a [Sound],
    previous: &[&'a Sound],
    window: usize,
    rng: &mut R,
) -> &'a Sound {
    let mut size = window.min(previous.len());
    let recent = loop {
        let recent = &previous[previous.len() - size..];
        if size == 0 || options.iter().any(|o| !recent.contains(&o)) {
            break recent;
        }
        size -= 1;
    };
    if size < window.min(previous.len()) {
        warn!(
            "only {} distinct sounds available, relaxing repetition window from {} to {}",
            options.len(),
            window,
            size
        );
    }
    loop {
        let candidate = &options[rng.gen_range(0..options.len())];
        if !recent.contains(&candidate) {
            return candidate;
        }
    }
}

pub fn generate_syllable_from_structure<R: Rng + ?Sized>(
    inventory: &Inventory,
    structure: &str,
    constraints: &Constraints,
    rng: &mut R,
) -> PhonoGenResult<Syllable> {
    let classes = structure
        .chars()
        .map(slot_class)
        .collect::<PhonoGenResult<Vec<_>>>()?;
    let mut sounds = Vec::with_capacity(classes.len());
    let mut consonants: Vec<&Sound> = vec![];
    let mut vowels: Vec<&Sound> = vec![];
    for class in classes {
        let options = inventory.sounds_of(class);
        if options.is_empty() {
            return Err(PhonoGenError::EmptyCategory(class));
        }
        let previous = match class {
            SoundClass::Consonant => &mut consonants,
            SoundClass::Vowel => &mut vowels,
        };
        let sound = pick_contrasting(
            options,
            previous.as_slice(),
            constraints.contrasting_length(class),
            rng,
        );
        previous.push(sound);
        sounds.push(sound.clone());
    }
    Ok(Syllable::new(structure, sounds))
}

pub fn generate_syllable<R: Rng + ?Sized>(
    inventory: &Inventory,
    constraints: &Constraints,
    rng: &mut R,
) -> PhonoGenResult<Syllable> {
    let structure = constraints.cluster_sizes.structure(rng)?;
    generate_syllable_from_structure(inventory, &structure, constraints, rng)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::Catalog;
    use crate::inventory::fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn constraints(directives: &[&str]) -> Constraints {
        Constraints::parse(directives).unwrap()
    }

    #[test]
    fn t_fixed_structure() {
        let c = constraints(&[
            "starting consonant cluster sizes: 2",
            "vowel cluster sizes: 1",
            "ending consonant cluster sizes: 0",
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(c.cluster_sizes.structure(&mut rng).unwrap(), "ccv");
    }

    #[test]
    fn t_structure_uses_only_listed_sizes() {
        let c = constraints(&["starting consonant cluster sizes: 0, 2"]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let s = c.cluster_sizes.structure(&mut rng).unwrap();
            let onset = s.chars().take_while(|c| *c == 'c').count();
            assert!(onset == 0 || onset == 2, "{}", s);
            let nucleus = s.chars().filter(|c| *c == 'v').count();
            assert!((1..=3).contains(&nucleus));
        }
    }

    #[test]
    fn t_empty_cluster_options() {
        let c = constraints(&["ending consonant cluster sizes:"]);
        let inventory = fixtures::inventory(&["t", "k"], &["a"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_syllable(&inventory, &c, &mut rng),
            Err(PhonoGenError::EmptyClusterOptions(ClusterPosition::Coda))
        ));
    }

    #[test]
    fn t_cvc_resamples_repeated_consonant() {
        let inventory = fixtures::inventory(&["t", "k"], &["a"]);
        let c = Constraints::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let syllable = generate_syllable_from_structure(&inventory, "cvc", &c, &mut rng).unwrap();
            let sounds = syllable.sounds();
            assert_eq!(sounds.len(), 3);
            assert_eq!(sounds[1].representation(), "a");
            assert_ne!(sounds[0], sounds[2]);
        }
    }

    #[test]
    fn t_no_adjacent_repeats_in_clusters() {
        let inventory = fixtures::inventory(&["p", "t", "k"], &["a", "i"]);
        let c = constraints(&[
            "contrasting consonant length: 1",
            "starting consonant cluster sizes: 3",
            "ending consonant cluster sizes: 4, 3",
        ]);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let syllable = generate_syllable(&inventory, &c, &mut rng).unwrap();
            for run in [syllable.onset(), syllable.coda()] {
                for pair in run.windows(2) {
                    assert_ne!(pair[0], pair[1], "{}", syllable);
                }
            }
        }
    }

    #[test]
    fn t_longer_window() {
        let inventory = fixtures::inventory(&["p", "t", "k"], &["a"]);
        let c = constraints(&["contrasting consonant length: 2"]);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..300 {
            let syllable = generate_syllable_from_structure(&inventory, "ccccc", &c, &mut rng).unwrap();
            for triple in syllable.sounds().windows(3) {
                assert_ne!(triple[0], triple[1]);
                assert_ne!(triple[0], triple[2]);
                assert_ne!(triple[1], triple[2]);
            }
        }
    }

    #[test]
    fn t_single_member_inventory_terminates() {
        let inventory = fixtures::inventory(&["t"], &["a"]);
        let c = constraints(&["contrasting vowel length: 2"]);
        let mut rng = StdRng::seed_from_u64(1);
        let syllable = generate_syllable_from_structure(&inventory, "ccvvvcc", &c, &mut rng).unwrap();
        assert_eq!(syllable.to_string(), "ttaaatt");
    }

    #[test]
    fn t_vowel_repeats_allowed_without_window() {
        let inventory = fixtures::inventory(&["t"], &["a", "i"]);
        let c = constraints(&["contrasting vowel length: 0"]);
        let mut rng = StdRng::seed_from_u64(8);
        let doubled = (0..200)
            .filter_map(|_| generate_syllable_from_structure(&inventory, "vv", &c, &mut rng).ok())
            .filter(|s| s.sounds()[0] == s.sounds()[1])
            .count();
        assert!(doubled > 0);
    }

    #[test]
    fn t_bad_structure() {
        let inventory = fixtures::inventory(&["t"], &["a"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_syllable_from_structure(&inventory, "cxv", &Constraints::default(), &mut rng),
            Err(PhonoGenError::InvalidStructure('x'))
        ));
    }

    #[test]
    fn t_missing_category() {
        let inventory = fixtures::inventory(&["t", "k"], &[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_syllable_from_structure(&inventory, "cv", &Constraints::default(), &mut rng),
            Err(PhonoGenError::EmptyCategory(SoundClass::Vowel))
        ));
    }

    #[test]
    fn t_generated_syllable_follows_structure() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let c = Constraints::default();
        let inventory = Inventory::generate(&catalog, &c, &mut rng);
        for _ in 0..200 {
            let syllable = generate_syllable(&inventory, &c, &mut rng).unwrap();
            assert_eq!(syllable.structure().len(), syllable.sounds().len());
            for (slot, sound) in syllable.structure().chars().zip(syllable.sounds()) {
                assert_eq!(slot == 'v', sound.is_vowel());
                assert!(inventory.sounds_of(sound.class()).contains(sound));
            }
        }
    }
}
