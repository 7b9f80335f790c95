//! The demo catalogue
//!
//! Every demo implements [`Demo`] and is registered in [`Registry`], which
//! keeps them in tour order.

pub mod cleanup;
pub mod concurrent;
pub mod crypto;
pub mod encoding;
pub mod filesystem;
pub mod hashing;
pub mod language;
pub mod logging;
pub mod platform;
pub mod random;
pub mod template;

use crate::{
    config::TourConfig,
    error::{Error, Result},
    renderer::SequenceRenderer,
};
use indexmap::IndexMap;

/// Inputs shared by every demo in a run.
pub struct DemoContext {
    pub config: TourConfig,
    pub sequence: SequenceRenderer,
}

impl DemoContext {
    pub fn new(config: TourConfig) -> Self {
        let sequence = SequenceRenderer::with_max_len(config.sequence.max_len);
        Self { config, sequence }
    }
}

impl Default for DemoContext {
    fn default() -> Self {
        Self::new(TourConfig::default())
    }
}

/// A single self-contained feature illustration.
pub trait Demo {
    /// Identifier used on the command line and in config `skip` lists.
    fn name(&self) -> &'static str;

    /// Human readable title, used in listings and error reports.
    fn title(&self) -> &'static str;

    /// Runs the demo and returns the lines it wants printed.
    fn run(&self, ctx: &DemoContext) -> Result<Vec<String>>;
}

/// Ordered collection of demos keyed by name.
pub struct Registry {
    demos: IndexMap<&'static str, Box<dyn Demo>>,
}

impl Registry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self { demos: IndexMap::new() }
    }

    /// Every built-in demo in tour order.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(language::GenericAliasDemo));
        registry.register(Box::new(cleanup::ScopedCleanupDemo));
        registry.register(Box::new(crypto::CryptoDemo));
        registry.register(Box::new(filesystem::ScopedFsDemo));
        registry.register(Box::new(language::IteratorsDemo));
        registry.register(Box::new(encoding::TextAppendDemo));
        registry.register(Box::new(encoding::IpAppendDemo));
        registry.register(Box::new(encoding::RegexAppendDemo));
        registry.register(Box::new(platform::PlatformDemo));
        registry.register(Box::new(template::TemplateDemo));
        registry.register(Box::new(encoding::BigIntAppendDemo));
        registry.register(Box::new(random::RandomDemo));
        registry.register(Box::new(concurrent::ConcurrentMapDemo));
        registry.register(Box::new(logging::DiscardLogDemo));
        registry.register(Box::new(encoding::TimeAppendDemo));
        registry.register(Box::new(hashing::HashDemo));
        registry
    }

    /// Adds a demo at the end of the tour, replacing any demo with the same name.
    pub fn register(&mut self, demo: Box<dyn Demo>) {
        self.demos.insert(demo.name(), demo);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.demos.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Demo> + '_ {
        self.demos.values().map(|demo| &**demo)
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Resolves the demos to run, in tour order.
    ///
    /// An empty `include` selects every demo. Names in `skip` are removed
    /// afterwards. Any unknown name in either list is an error.
    pub fn select(&self, include: &[String], skip: &[String]) -> Result<Vec<&dyn Demo>> {
        for name in include.iter().chain(skip) {
            if !self.demos.contains_key(name.as_str()) {
                return Err(Error::UnknownDemo {
                    name: name.clone(),
                    available: self.names().collect::<Vec<_>>().join(", "),
                });
            }
        }

        Ok(self
            .demos
            .iter()
            .filter(|(name, _)| include.is_empty() || include.iter().any(|i| i == *name))
            .filter(|(name, _)| !skip.iter().any(|s| s == *name))
            .map(|(_, demo)| &**demo)
            .collect())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
