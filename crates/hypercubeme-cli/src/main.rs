use clap::{Parser, Subcommand};
use hypercubeme_lib::decompose::load_sequence_store;
use hypercubeme_lib::verify::{compare_datasets, pairwise_edges};
use hypercubeme_lib::{DecomposeConfiguration, HypercubeDecomposer};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hypercubeme")]
#[command(version = "0.1.0")]
#[command(about = "HypercubeME: hypercube decomposition of genotype panels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a genotype panel into hypercubes of every dimension
    Decompose {
        /// File with the list of measured genotypes (first column is used)
        #[arg(short, long)]
        sequences: PathBuf,

        /// Destination folder for the hypercubes_<d>.txt files
        #[arg(short, long, default_value = "hypercubes")]
        dst: PathBuf,

        /// Number of threads (0 = all available cores)
        #[arg(short = 't', long, default_value = "0")]
        threads: usize,

        /// Stop after this dimension even if more structure remains
        #[arg(long)]
        max_dimension: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check dimension 1 against a brute-force pairwise comparison
    Check {
        /// File with the list of measured genotypes (first column is used)
        #[arg(short, long)]
        sequences: PathBuf,

        /// Number of threads (0 = all available cores)
        #[arg(short = 't', long, default_value = "0")]
        threads: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing: use RUST_LOG if set, otherwise default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose { sequences, dst, threads, max_dimension, verbose } => {
            decompose_command(sequences, dst, threads, max_dimension, verbose)?;
        }
        Commands::Check { sequences, threads } => {
            check_command(sequences, threads)?;
        }
    }

    Ok(())
}

/// Run the full decomposition and write one file per dimension
fn decompose_command(
    sequences: PathBuf,
    dst: PathBuf,
    threads: usize,
    max_dimension: Option<usize>,
    verbose: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();
    info!("Decomposing genotype panel...");
    info!("  Input: {}", sequences.display());
    info!("  Output: {}", dst.display());

    let store = load_sequence_store(&sequences)?;
    info!("  Loaded {} genotypes of length {}", store.len(), store.seq_len());

    let config = DecomposeConfiguration {
        num_threads: threads,
        max_dimension,
        dst_dirname: dst,
        verbose,
    };
    let decomposer = HypercubeDecomposer::new(config).map_err(|e| anyhow::anyhow!("{}", e))?;
    let summaries = decomposer.decompose_to_dir(&store)?;

    println!("\n{:>9} {:>12} {:>12}", "dimension", "diagonals", "hypercubes");
    for s in &summaries {
        println!("{:>9} {:>12} {:>12}", s.dimension, s.num_diagonals, s.num_hypercubes);
    }

    info!("Done in {:.3} s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Compare the partitioner's dimension-1 edges with pairwise comparison
fn check_command(sequences: PathBuf, threads: usize) -> anyhow::Result<()> {
    info!("Checking dimension-1 edges...");
    info!("  Input: {}", sequences.display());

    let store = load_sequence_store(&sequences)?;
    info!("  Loaded {} genotypes of length {}", store.len(), store.seq_len());

    let config = DecomposeConfiguration {
        num_threads: threads,
        max_dimension: Some(1),
        ..DecomposeConfiguration::default()
    };
    let decomposer = HypercubeDecomposer::new(config).map_err(|e| anyhow::anyhow!("{}", e))?;
    let computed = decomposer
        .decompose_in_memory(&store)?
        .into_iter()
        .next()
        .map(|(_, dataset)| dataset)
        .ok_or_else(|| anyhow::anyhow!("Decomposition produced no dimension"))?;

    info!("Computing pairwise reference...");
    let reference = pairwise_edges(&store);
    let check = compare_datasets(&reference, &computed);

    println!("\n=== Check Results ===");
    println!("  Expected edges: {}", check.num_expected);
    println!("  Missing: {}", check.missing.len());
    println!("  Unexpected: {}", check.unexpected.len());

    if !check.passed() {
        warn!(
            "CORRECTNESS CHECK FAILED! {} missing, {} unexpected",
            check.missing.len(),
            check.unexpected.len()
        );
        println!("\n✗ CORRECTNESS CHECK FAILED!");
        for (key, genotype) in check.missing.iter().take(10) {
            println!("  missing:    {}\t{}", key, genotype);
        }
        for (key, genotype) in check.unexpected.iter().take(10) {
            println!("  unexpected: {}\t{}", key, genotype);
        }
        std::process::exit(1);
    } else {
        println!("\n✓ CORRECTNESS CHECK PASSED!");
        println!("  Every single-position pair was found exactly once");
    }

    Ok(())
}
