#![warn(clippy::all, rust_2018_idioms)]

use clap::{Parser, ValueEnum};
use log::info;
use phonogen::generation::{DEFAULT_MORPHOLOGY_SIZE, PLACEHOLDER_MEANING};
use phonogen::sounds::fmt_tags;
use phonogen::{Catalog, Constraints, Generator, PhonoGenResult, WordPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Policy {
    Morphemic,
    Alternating,
}

impl From<Policy> for WordPolicy {
    fn from(value: Policy) -> Self {
        match value {
            Policy::Morphemic => WordPolicy::Morphemic,
            Policy::Alternating => WordPolicy::default(),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Generates a phoneme inventory and words for a constructed language")]
struct Cli {
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Constraint directive such as "has: p" or "vowel inventory size: 5"
    #[arg(short, long = "constraint", value_name = "TEXT")]
    constraints: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_MORPHOLOGY_SIZE)]
    count: usize,

    #[arg(long, value_enum, default_value_t = Policy::Morphemic)]
    policy: Policy,

    /// Catalog to use instead of the built-in IPA tables
    #[arg(long, value_name = "FILE")]
    catalog_json: Option<PathBuf>,
}

fn run(cli: Cli) -> PhonoGenResult<()> {
    let catalog = match &cli.catalog_json {
        Some(path) => Catalog::from_json_reader(BufReader::new(File::open(path)?))?,
        None => Catalog::builtin()?,
    };
    let constraints = Constraints::parse(&cli.constraints)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("loaded {} sounds", catalog.len());

    let generator = Generator::from_catalog(&catalog, constraints, &mut rng);
    let inventory = generator.inventory();
    println!("consonants: {}", fmt_tags(inventory.consonants()));
    println!("vowels: {}", fmt_tags(inventory.vowels()));
    println!();
    for _ in 0..cli.count {
        let word = generator.generate_word(cli.policy.into(), PLACEHOLDER_MEANING, &mut rng)?;
        println!("{}", word);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
