use super::{Demo, DemoContext};
use crate::error::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A dedicated generator: seeded when `seed` is given, from OS entropy otherwise.
pub fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub struct RandomDemo;

impl Demo for RandomDemo {
    fn name(&self) -> &'static str {
        "random"
    }

    fn title(&self) -> &'static str {
        "Random numbers from an owned generator"
    }

    fn run(&self, ctx: &DemoContext) -> Result<Vec<String>> {
        let seed = ctx.config.random.seed;
        let mut rng = new_rng(seed);
        let number: u64 = rng.gen();
        let source = match seed {
            Some(seed) => format!("seed {seed}"),
            None => "OS entropy".to_string(),
        };
        Ok(vec![format!("Random number (StdRng from {source}): {number}")])
    }
}
