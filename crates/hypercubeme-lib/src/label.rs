//! Transition labels and diagonal keys
//!
//! A [`TransitionLabel`] records one hypercube direction: the position that
//! toggles and the two symbols seen there. A [`DiagonalKey`] is the ordered
//! list of labels collected so far, one per dimension.
//!
//! ## Ordering
//!
//! Result files are sorted by the textual form of the labels, where a label
//! renders as `from ++ decimal(position) ++ to` (e.g. `A12G`). Labels
//! therefore order by that rendering, byte by byte, and not field by field:
//! `A10B` sorts before `A2B`. Keys order label by label, with a key that is
//! a prefix of another sorting first.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use crate::constants::{LABEL_DELIMITER, MAX_LABEL_WIDTH};

/// One hypercube direction: `from` at `position` becomes `to`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionLabel {
    /// Symbol of the lower-sorted endpoint
    pub from: u8,
    /// Toggled position
    pub position: usize,
    /// Symbol of the higher-sorted endpoint
    pub to: u8,
}

impl TransitionLabel {
    /// Create a new label
    #[inline]
    pub fn new(from: u8, position: usize, to: u8) -> Self {
        Self { from, position, to }
    }

    /// Render into a fixed buffer; returns the buffer and the used width
    fn encode(&self) -> ([u8; MAX_LABEL_WIDTH], usize) {
        let (digits, num_digits) = decimal(self.position);
        let mut buf = [0u8; MAX_LABEL_WIDTH];
        buf[0] = self.from;
        buf[1..1 + num_digits].copy_from_slice(&digits[..num_digits]);
        buf[1 + num_digits] = self.to;
        (buf, num_digits + 2)
    }

    /// Write the textual form of the label
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let (buf, width) = self.encode();
        writer.write_all(&buf[..width])
    }
}

impl PartialOrd for TransitionLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TransitionLabel {
    // Same result as comparing the rendered bytes. Symbols are single
    // bytes, so the rendering is injective and this agrees with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.from.cmp(&other.from).then_with(|| {
            if self.position == other.position {
                return self.to.cmp(&other.to);
            }
            let (a, a_len) = decimal(self.position);
            let (b, b_len) = decimal(other.position);
            let common = a_len.min(b_len);
            match a[..common].cmp(&b[..common]) {
                // One position's digits prefix the other's: the shorter
                // label's `to` meets the longer one's next digit.
                Ordering::Equal if a_len < b_len => self.to.cmp(&b[a_len]).then(Ordering::Less),
                Ordering::Equal => a[b_len].cmp(&other.to).then(Ordering::Greater),
                ord => ord,
            }
        })
    }
}

/// Decimal digits of `n`, most significant first
fn decimal(mut n: usize) -> ([u8; MAX_LABEL_WIDTH], usize) {
    let mut digits = [0u8; MAX_LABEL_WIDTH];
    let num_digits = n.checked_ilog10().map_or(1, |log| log as usize + 1);
    for slot in digits[..num_digits].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    (digits, num_digits)
}

impl fmt::Display for TransitionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            char::from(self.from),
            self.position,
            char::from(self.to)
        )
    }
}

impl fmt::Debug for TransitionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionLabel({})", self)
    }
}

/// Ordered list of transition labels, one per discovered dimension
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagonalKey {
    labels: Vec<TransitionLabel>,
}

impl DiagonalKey {
    /// The empty key (dimension 0), which maps to the whole sequence store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels, i.e. the dimension of the diagonal
    #[inline]
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }

    /// Whether this is the empty key
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels, in dimension order
    #[inline]
    pub fn labels(&self) -> &[TransitionLabel] {
        &self.labels
    }

    /// Label of the highest dimension, if any
    #[inline]
    pub fn last(&self) -> Option<&TransitionLabel> {
        self.labels.last()
    }

    /// Copy of this key with `label` appended
    pub fn extended(&self, label: TransitionLabel) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.extend_from_slice(&self.labels);
        labels.push(label);
        Self { labels }
    }

    /// First position the next dimension may toggle
    ///
    /// Positions inside a key strictly increase, so everything up to and
    /// including the last label's position is already accounted for.
    #[inline]
    pub fn next_free_start(&self) -> usize {
        self.last().map_or(0, |label| label.position + 1)
    }

    /// Write the labels joined by `:`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                writer.write_all(&[LABEL_DELIMITER])?;
            }
            label.write_to(writer)?;
        }
        Ok(())
    }
}

impl FromIterator<TransitionLabel> for DiagonalKey {
    fn from_iter<I: IntoIterator<Item = TransitionLabel>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DiagonalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", char::from(LABEL_DELIMITER))?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DiagonalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagonalKey(\"{}\")", self)
    }
}
