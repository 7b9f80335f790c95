use super::{Demo, DemoContext};
use crate::error::Result;
use dashmap::DashMap;
use std::thread;

/// Fills a `DashMap` from two threads and returns its entries sorted by key.
pub fn fill_from_threads() -> Vec<(String, i32)> {
    let map: DashMap<String, i32> = DashMap::new();
    thread::scope(|s| {
        s.spawn(|| map.insert("key1".to_string(), 100));
        s.spawn(|| map.insert("key2".to_string(), 200));
    });

    let mut entries: Vec<_> =
        map.iter().map(|entry| (entry.key().clone(), *entry.value())).collect();
    entries.sort();
    entries
}

pub struct ConcurrentMapDemo;

impl Demo for ConcurrentMapDemo {
    fn name(&self) -> &'static str {
        "concurrent-map"
    }

    fn title(&self) -> &'static str {
        "Concurrent map"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let mut lines = vec!["Iterating over DashMap:".to_string()];
        lines.extend(
            fill_from_threads()
                .into_iter()
                .map(|(key, value)| format!("  key={key}, value={value}")),
        );
        Ok(lines)
    }
}
