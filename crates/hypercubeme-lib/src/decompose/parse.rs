//! Genotype panel parsing
//!
//! Reads one genotype per line. Only the first whitespace-separated token of
//! a line is used, so trailing columns (phenotypes, counts) are ignored.
//! Blank lines are skipped.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::store::SequenceStore;

/// Parse genotypes from a reader and call a function for each one
///
/// # Arguments
/// * `reader` - Buffered source of text lines
/// * `callback` - Function called for each genotype, receives (line number, symbols)
pub fn parse_genotypes<R, F>(reader: R, mut callback: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[u8]) -> Result<()>,
{
    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        if let Some(token) = line.split(|b| b.is_ascii_whitespace()).find(|t| !t.is_empty()) {
            callback(line_no + 1, token)?;
        }
    }
    Ok(())
}

/// Read a genotype panel file into a sorted, validated store
///
/// # Errors
/// Returns error if:
/// - File cannot be opened or read
/// - File contains no genotypes
/// - Genotypes have inconsistent lengths
pub fn load_sequence_store<P: AsRef<Path>>(path: P) -> Result<SequenceStore> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open genotype file: {}", path.display()))?;

    let mut genotypes = Vec::new();
    parse_genotypes(BufReader::new(file), |_line_no, symbols| {
        genotypes.push(symbols.to_vec());
        Ok(())
    })
    .with_context(|| format!("Failed to parse genotype file: {}", path.display()))?;

    SequenceStore::new(genotypes)
        .with_context(|| format!("Invalid genotype panel in {}", path.display()))
}
