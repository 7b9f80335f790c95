use super::{Demo, DemoContext};
use crate::error::Result;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

pub struct HashDemo;

impl Demo for HashDemo {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn title(&self) -> &'static str {
        "Seeded hashing of comparable values"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        // Random seed per state, stable within one state
        let state = RandomState::new();
        let key = "myKey";
        let hash = state.hash_one(key);

        let first = state.hash_one((1, "two"));
        let second = state.hash_one((1, "two"));

        Ok(vec![
            format!("Hash for key {key:?}: {hash}"),
            format!("Equal comparable values hash equally: {}", first == second),
        ])
    }
}
