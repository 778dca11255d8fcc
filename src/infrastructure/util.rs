use crate::application::ports::util::{SlugGenerator, SuffixSource};
use rand::Rng;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// 36^6: the token space of a six-character base-36 suffix.
const SUFFIX_SPACE: u64 = 36 * 36 * 36 * 36 * 36 * 36;

/// Draws uniformly from `[0, 36^6)` and renders the value in base 36 without
/// padding, so a token is one to six characters of `[0-9a-z]`.
#[derive(Default, Clone)]
pub struct Base36SuffixSource;

impl SuffixSource for Base36SuffixSource {
    fn random_suffix(&self) -> String {
        to_base36(rand::thread_rng().gen_range(0..SUFFIX_SPACE))
    }
}

fn to_base36(mut value: u64) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
