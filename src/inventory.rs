use crate::catalog::Catalog;
use crate::generation::parse::Constraints;
use crate::sounds::{Backness, Height, Roundedness, Sound, SoundClass, Vowel};
use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution, Exp1};
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Glyphs of the fixed three and five vowel systems.
pub const THREE_VOWEL_SYSTEM: [&str; 3] = ["i", "u", "a"];
pub const FIVE_VOWEL_SYSTEM: [&str; 5] = ["i", "u", "e", "o", "a"];

// Consonant inventory sizes, after WALS chapter 1 (563 languages).
const SIZE_SAMPLE: u32 = 563;
const SMALL: (u32, usize, usize) = (89, 6, 14);
const MODERATELY_SMALL: (u32, usize, usize) = (122, 15, 18);
const AVERAGE: (u32, usize, usize) = (201, 19, 25);
const MODERATELY_LARGE: (u32, usize, usize) = (94, 26, 33);
const LARGE_MIN: usize = 34;
const LARGE_SCALE: f64 = 0.2;
const LARGE_SPREAD: f64 = 89.;

/// The selected consonants and vowels of one generated language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    consonants: Vec<Sound>,
    vowels: Vec<Sound>,
}

impl Inventory {
    pub fn new(consonants: Vec<Sound>, vowels: Vec<Sound>) -> Self {
        Self { consonants, vowels }
    }

    /// Runs both selectors against `catalog`. The catalog itself is left untouched.
    pub fn generate<R: Rng + ?Sized>(
        catalog: &Catalog,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Self {
        for query in &constraints.required {
            if catalog.find(query).is_none() {
                warn!("has: {} names no sound in the catalog", query);
            }
        }
        let inventory = Self {
            consonants: select_consonants(catalog, constraints, rng),
            vowels: select_vowels(catalog, constraints, rng),
        };
        if inventory.is_empty() {
            warn!("selected an empty inventory");
        }
        debug!(
            "selected {} consonants and {} vowels",
            inventory.consonants.len(),
            inventory.vowels.len()
        );
        inventory
    }

    pub fn consonants(&self) -> &[Sound] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[Sound] {
        &self.vowels
    }

    pub fn sounds_of(&self, class: SoundClass) -> &[Sound] {
        match class {
            SoundClass::Consonant => &self.consonants,
            SoundClass::Vowel => &self.vowels,
        }
    }

    pub fn len(&self) -> usize {
        self.consonants.len() + self.vowels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Samples a consonant inventory size from the five WALS size buckets. Every bucket but the
/// largest is uniform; the largest is exponential so very large inventories stay rare. The
/// result never exceeds `available`.
pub fn sample_consonant_count<R: Rng + ?Sized>(rng: &mut R, available: usize) -> usize {
    let mut bucket = rng.gen_range(0..SIZE_SAMPLE);
    let mut count = None;
    for (weight, min, max) in [SMALL, MODERATELY_SMALL, AVERAGE, MODERATELY_LARGE] {
        if bucket < weight {
            count = Some(rng.gen_range(min..=max));
            break;
        }
        bucket -= weight;
    }
    let count = count.unwrap_or_else(|| {
        let x: f64 = Exp1.sample(rng);
        (x * LARGE_SCALE * LARGE_SPREAD).floor() as usize + LARGE_MIN
    });
    count.min(available)
}

/// Takes the sound matching each query out of `pool`, in query order.
fn take_required<'a>(pool: &mut Vec<&'a Sound>, queries: &[String]) -> Vec<&'a Sound> {
    let mut taken = vec![];
    for query in queries {
        if let Some(idx) = pool.iter().position(|s| s.matches(query)) {
            taken.push(pool.remove(idx));
        }
    }
    taken
}

fn take_random<'a, R: Rng + ?Sized>(pool: &mut Vec<&'a Sound>, rng: &mut R) -> Option<&'a Sound> {
    if pool.is_empty() {
        None
    } else {
        Some(pool.swap_remove(rng.gen_range(0..pool.len())))
    }
}

/// Picks the consonant inventory.
///
/// `no:` sounds are removed first, so a `has:` naming an excluded sound has no effect. The
/// remaining `has:` sounds are always included, even past the target size. Free slots go to
/// `common` consonants first and then to the rest, uniformly and without replacement.
pub fn select_consonants<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &Constraints,
    rng: &mut R,
) -> Vec<Sound> {
    let mut pool = catalog
        .consonants()
        .iter()
        .filter(|s| !constraints.excludes(s))
        .collect::<Vec<_>>();
    let mut selected = take_required(&mut pool, &constraints.required);
    let available = selected.len() + pool.len();
    let target = match constraints.consonant_inventory_size {
        Some(n) if n > available => {
            warn!(
                "asked for {} consonants but only {} are available",
                n, available
            );
            available
        }
        Some(n) => n,
        None => sample_consonant_count(rng, available),
    };
    debug!("consonant inventory target {}", target);

    let (mut common, mut rest): (Vec<_>, Vec<_>) = pool.into_iter().partition(|s| s.is_common());
    while selected.len() < target {
        let Some(sound) = take_random(&mut common, rng).or_else(|| take_random(&mut rest, rng))
        else {
            break;
        };
        selected.push(sound);
    }
    selected.into_iter().cloned().collect()
}

/// Distance between two vowels: Euclidean over height, backness and roundedness, each
/// scaled to `0.0..=1.0`. Symmetric, and zero only for identical features.
pub fn vowel_distance(a: &Vowel, b: &Vowel) -> f64 {
    fn axis(a: usize, b: usize, steps: usize) -> f64 {
        (a as f64 - b as f64) / (steps - 1) as f64
    }
    let height = axis(a.height as usize, b.height as usize, Height::COUNT);
    let backness = axis(a.backness as usize, b.backness as usize, Backness::COUNT);
    let roundedness = axis(
        a.roundedness as usize,
        b.roundedness as usize,
        Roundedness::COUNT,
    );
    (height * height + backness * backness + roundedness * roundedness).sqrt()
}

fn spread(candidate: &Sound, selected: &[&Sound]) -> f64 {
    let Some(vowel) = candidate.vowel() else {
        return 0.;
    };
    selected
        .iter()
        .filter_map(|s| s.vowel())
        .map(|other| vowel_distance(vowel, other))
        .sum()
}

fn canonical_system(catalog: &Catalog, size: usize) -> Option<Vec<Sound>> {
    let glyphs: &[&str] = match size {
        3 => &THREE_VOWEL_SYSTEM,
        5 => &FIVE_VOWEL_SYSTEM,
        _ => return None,
    };
    glyphs
        .iter()
        .map(|g| {
            catalog
                .vowels()
                .iter()
                .find(|v| v.representation() == *g)
                .cloned()
        })
        .collect()
}

/// Picks the vowel inventory.
///
/// Without vowel `has:`/`no:` constraints a size of 3 or 5 (a coin flip between the two when
/// no size is given) yields the fixed `i u a` or `i u e o a` system. Otherwise the set starts
/// from the `has:` vowels, or a random common vowel, and grows by repeatedly adding the
/// candidate farthest in total from everything already chosen.
pub fn select_vowels<R: Rng + ?Sized>(
    catalog: &Catalog,
    constraints: &Constraints,
    rng: &mut R,
) -> Vec<Sound> {
    let narrowed = catalog
        .vowels()
        .iter()
        .any(|v| constraints.excludes(v) || constraints.requires(v));
    let target = constraints
        .vowel_inventory_size
        .unwrap_or_else(|| if rng.gen_bool(0.5) { 3 } else { 5 });
    if !narrowed {
        if let Some(system) = canonical_system(catalog, target) {
            debug!("using the {} vowel system", target);
            return system;
        }
    }

    let mut pool = catalog
        .vowels()
        .iter()
        .filter(|s| !constraints.excludes(s))
        .collect::<Vec<_>>();
    let mut selected = take_required(&mut pool, &constraints.required);
    if selected.is_empty() && target > 0 {
        let (mut common, mut rest): (Vec<_>, Vec<_>) =
            pool.iter().copied().partition(|s| s.is_common());
        if let Some(seed) = take_random(&mut common, rng).or_else(|| take_random(&mut rest, rng)) {
            pool.retain(|s| *s != seed);
            selected.push(seed);
        }
    }
    while selected.len() < target {
        // position_max_by would keep the last of equal maxima; ties go to catalog order
        let best = pool
            .iter()
            .map(|s| spread(s, &selected))
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (idx, d)| match best {
                Some((_, max)) if max >= d => best,
                _ => Some((idx, d)),
            });
        let Some((idx, _)) = best else {
            warn!(
                "asked for {} vowels but only {} are available",
                target,
                selected.len()
            );
            break;
        };
        selected.push(pool.remove(idx));
    }
    debug!(
        "grew vowel set {}",
        selected.iter().map(|s| s.representation()).join(" ")
    );
    selected.into_iter().cloned().collect()
}


#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn constraints(directives: &[&str]) -> Constraints {
        Constraints::parse(directives).unwrap()
    }

    fn glyphs(sounds: &[Sound]) -> Vec<&str> {
        sounds.iter().map(|s| s.representation()).collect()
    }

    fn small_catalog() -> Catalog {
        let mut sounds = ["p", "t", "k", "m", "n"]
            .iter()
            .map(|c| fixtures::consonant(c, false))
            .collect::<Vec<_>>();
        sounds.push(fixtures::vowel("a", Height::Open, Backness::Front, Roundedness::Unrounded));
        sounds.push(fixtures::vowel("i", Height::Close, Backness::Front, Roundedness::Unrounded));
        sounds.push(fixtures::vowel("u", Height::Close, Backness::Back, Roundedness::Rounded));
        Catalog::new(sounds)
    }

    #[test]
    fn t_size_with_has() {
        let catalog = small_catalog();
        let c = constraints(&["consonant inventory size: 3", "has: p"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_consonants(&catalog, &c, &mut rng);
            assert_eq!(selected.len(), 3);
            assert!(glyphs(&selected).contains(&"p"));
        }
    }

    #[test]
    fn t_no_and_has() {
        let catalog = Catalog::builtin().unwrap();
        let c = constraints(&["has: ʃ, θ", "no: p", "no: t", "has: p"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_consonants(&catalog, &c, &mut rng);
            let g = glyphs(&selected);
            assert!(!g.contains(&"p"));
            assert!(!g.contains(&"t"));
            assert!(g.contains(&"ʃ"));
            assert!(g.contains(&"θ"));
            let unique = selected.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), selected.len());
        }
    }

    #[test]
    fn t_has_may_exceed_target() {
        let catalog = small_catalog();
        let c = constraints(&["consonant inventory size: 1", "has: p, t, k, p"]);
        let mut rng = StdRng::seed_from_u64(3);
        let selected = select_consonants(&catalog, &c, &mut rng);
        assert_eq!(glyphs(&selected), vec!["p", "t", "k"]);
    }

    #[test]
    fn t_explicit_size_is_capped() {
        let catalog = small_catalog();
        let c = constraints(&["consonant inventory size: 40", "no: m"]);
        let mut rng = StdRng::seed_from_u64(3);
        let selected = select_consonants(&catalog, &c, &mut rng);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn t_common_first() {
        let catalog = Catalog::builtin().unwrap();
        let c = constraints(&["consonant inventory size: 10"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_consonants(&catalog, &c, &mut rng);
            assert_eq!(selected.len(), 10);
            assert!(selected.iter().all(|s| s.is_common()));
        }
        let c = constraints(&["consonant inventory size: 20"]);
        let mut rng = StdRng::seed_from_u64(1);
        let selected = select_consonants(&catalog, &c, &mut rng);
        assert_eq!(selected.iter().filter(|s| s.is_common()).count(), 12);
    }

    #[test]
    fn t_catalog_untouched() {
        let catalog = Catalog::builtin().unwrap();
        let before = catalog.clone();
        let mut rng = StdRng::seed_from_u64(8);
        let _ = Inventory::generate(&catalog, &constraints(&["has: ʔ", "no: m"]), &mut rng);
        assert_eq!(catalog, before);
    }

    #[test]
    fn t_sampled_count_range() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut saw_large = false;
        for _ in 0..5000 {
            let n = sample_consonant_count(&mut rng, 500);
            assert!(n >= 6);
            saw_large |= n >= LARGE_MIN;
            assert!(sample_consonant_count(&mut rng, 10) <= 10);
        }
        assert!(saw_large);
    }

    #[test]
    fn t_canonical_vowels() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let three = select_vowels(&catalog, &constraints(&["vowel inventory size: 3"]), &mut rng);
        assert_eq!(glyphs(&three), THREE_VOWEL_SYSTEM.to_vec());
        let five = select_vowels(&catalog, &constraints(&["vowel inventory size: 5"]), &mut rng);
        assert_eq!(glyphs(&five), FIVE_VOWEL_SYSTEM.to_vec());
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = select_vowels(&catalog, &Constraints::default(), &mut rng).len();
            assert!(n == 3 || n == 5);
        }
    }

    #[test]
    fn t_grown_vowels() {
        let catalog = Catalog::builtin().unwrap();
        let c = constraints(&["vowel inventory size: 4", "has: ə", "no: a"]);
        let mut rng = StdRng::seed_from_u64(0);
        let vowels = select_vowels(&catalog, &c, &mut rng);
        let g = glyphs(&vowels);
        assert_eq!(g.len(), 4);
        assert_eq!(g[0], "ə");
        assert!(!g.contains(&"a"));
        assert_eq!(vowels.iter().collect::<HashSet<_>>().len(), 4);
        // farthest from a mid central vowel is a corner of the chart
        let second = vowels[1].vowel().unwrap();
        assert!(matches!(second.height(), Height::Close | Height::Open));
        assert!(matches!(second.backness(), Backness::Front | Backness::Back));
    }

    #[test]
    fn t_odd_sized_system_grows() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let vowels = select_vowels(&catalog, &constraints(&["vowel inventory size: 7"]), &mut rng);
        assert_eq!(vowels.len(), 7);
        assert!(vowels[0].is_common());
    }

    #[test]
    fn t_distance() {
        let a = Vowel::new(Height::Open, Backness::Front, Roundedness::Unrounded);
        let u = Vowel::new(Height::Close, Backness::Back, Roundedness::Rounded);
        let e = Vowel::new(Height::CloseMid, Backness::Front, Roundedness::Unrounded);
        assert_eq!(vowel_distance(&a, &a), 0.);
        assert_eq!(vowel_distance(&a, &u), vowel_distance(&u, &a));
        assert!((vowel_distance(&a, &u) - 3f64.sqrt()).abs() < 1e-9);
        assert!(vowel_distance(&a, &e) > 0.);
        assert!(vowel_distance(&a, &e) < vowel_distance(&a, &u));
    }
}
