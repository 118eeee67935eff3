//! Unicode character cell width calculations.
//!
//! Column widths are measured in terminal cells, not chars or bytes, so
//! tables stay rectangular when cells contain wide characters (CJK, emoji).

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

/// Minimum string length to cache (shorter strings have minimal overhead).
const CACHE_MIN_LEN: usize = 8;

/// LRU cache for `cell_len` calculations.
static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

/// Get the cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and some emoji
/// are 2 cells wide. Control characters have 0 width.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Compute cell width by summing character widths.
#[inline]
fn compute_cell_width(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Get the total cell width of a string (cached for longer strings).
///
/// This is the sum of the widths of all characters, accounting for
/// wide characters that take 2 cells. Control characters have 0 width.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    // Short strings: compute directly (cache overhead not worth it)
    if text.len() < CACHE_MIN_LEN {
        return compute_cell_width(text);
    }

    if let Ok(mut cache) = CELL_LEN_CACHE.lock()
        && let Some(&cached) = cache.get(text)
    {
        return cached;
    }

    let width = compute_cell_width(text);

    if let Ok(mut cache) = CELL_LEN_CACHE.lock() {
        cache.put(text.to_string(), width);
    }

    width
}
