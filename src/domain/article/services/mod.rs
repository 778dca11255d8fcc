// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::{SlugGenerator, SuffixSource};
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing slugs for articles.
///
/// The slug is the lowercased URL-safe stem of the title joined to a random
/// base-36 token, which keeps collisions improbable without probing the
/// store. Both collaborators are injected so tests can pin the output.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
    suffixes: Arc<dyn SuffixSource>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, suffixes: Arc<dyn SuffixSource>) -> Self {
        Self {
            generator,
            suffixes,
        }
    }

    /// Always succeeds: a title with no sluggable characters degrades to the
    /// separator plus the random token.
    pub fn generate(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let stem = self.generator.slugify(title.as_str());
        ArticleSlug::new(format!("{stem}-{}", self.suffixes.random_suffix()))
    }
}
