//! Genotype representation
//!
//! A genotype is an immutable, fixed-length sequence of byte symbols. The
//! symbol bytes are reference-counted, so the same genotype can sit in many
//! diagonal groups across dimensions and worker threads without being copied.

use std::fmt;
use std::sync::Arc;

/// An immutable symbol sequence
///
/// Equality, hashing and ordering are structural (lexicographic over the
/// symbol bytes), so sorting a panel of genotypes gives the same order as
/// sorting their textual forms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Genotype {
    symbols: Arc<[u8]>,
}

impl Genotype {
    /// Create a genotype from its symbols
    pub fn new(symbols: impl Into<Arc<[u8]>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Number of positions
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the genotype has no positions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    #[inline]
    pub fn symbol(&self, position: usize) -> u8 {
        self.symbols[position]
    }

    /// All symbols
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbols over the half-open range `[start, end)`
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        &self.symbols[start..end]
    }

    /// Number of positions at which `self` and `other` differ
    ///
    /// Both genotypes must have the same length.
    pub fn hamming_distance(&self, other: &Genotype) -> usize {
        debug_assert_eq!(self.len(), other.len());
        self.symbols
            .iter()
            .zip(other.symbols.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<&str> for Genotype {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<Vec<u8>> for Genotype {
    fn from(symbols: Vec<u8>) -> Self {
        Self::new(symbols)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

impl fmt::Debug for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genotype(\"{}\")", self)
    }
}
