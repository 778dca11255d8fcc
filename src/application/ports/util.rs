// src/application/ports/util.rs

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Source of the disambiguating slug suffix. Production draws uniformly from
/// the six-character base-36 space; tests substitute a fixed token.
pub trait SuffixSource: Send + Sync {
    fn random_suffix(&self) -> String;
}
