//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Settings load from a sextant.toml in the working directory when present.
//! The display preference is written back on toggle; the search intervals
//! are read-only tuning knobs.

use facet::Facet;
use std::fs;
use std::io;

const CONFIG_PATH: &str = "sextant.toml";

#[derive(Facet, Clone)]
/// User preferences loaded from sextant.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Persisted display preference: dark palette when true.
    pub dark_mode: bool,
    #[facet(default = 200)]
    /// Quiet interval in milliseconds before a search recomputation runs.
    pub search_quiet_ms: u64,
    #[facet(default = 100)]
    /// Delay in milliseconds before highlights clear on search blur.
    pub blur_clear_ms: u64,
}

impl Config {
    #[must_use]
    /// Load configuration from sextant.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string(CONFIG_PATH) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Persist the current preferences to sextant.toml.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> io::Result<()> {
        let contents = format!(
            "dark_mode = {}\nsearch_quiet_ms = {}\nblur_clear_ms = {}\n",
            self.dark_mode, self.search_quiet_ms, self.blur_clear_ms
        );
        fs::write(CONFIG_PATH, contents)
    }
}
