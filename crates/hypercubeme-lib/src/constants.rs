//! Constants shared across the library
//!
//! File naming, delimiters and defaults used by the decomposition pipeline
//! and the result writer.

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Default destination directory for per-dimension result files
pub const DEFAULT_DST_DIRNAME: &str = "hypercubes";

/// Prefix of every per-dimension result file (`hypercubes_<d>.txt`)
pub const OUTPUT_FILE_PREFIX: &str = "hypercubes_";

/// Extension of every per-dimension result file
pub const OUTPUT_FILE_EXTENSION: &str = "txt";

/// Separator placed between transition labels of a rendered diagonal key
pub const LABEL_DELIMITER: u8 = b':';

/// Separator between the diagonal key and the genotype on an output line
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Upper bound on the rendered width of a transition label:
/// two symbols plus the decimal digits of a `usize` position.
pub const MAX_LABEL_WIDTH: usize = 2 + 20;

/// File name of the result file for a given dimension
#[inline]
pub fn output_file_name(dimension: usize) -> String {
    format!("{}{}.{}", OUTPUT_FILE_PREFIX, dimension, OUTPUT_FILE_EXTENSION)
}
