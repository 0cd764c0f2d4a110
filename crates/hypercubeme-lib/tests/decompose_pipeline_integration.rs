//! Integration tests for the decomposition pipeline
//!
//! These tests run the full pipeline from a genotype panel to per-dimension
//! result files and check it against brute-force definitions.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::Write;

use hypercubeme_lib::decompose::load_sequence_store;
use hypercubeme_lib::output::write_dataset;
use hypercubeme_lib::verify::{compare_datasets, pairwise_edges};
use hypercubeme_lib::{
    Dataset, DecomposeConfiguration, DiagonalKey, Genotype, HypercubeDecomposer, SequenceStore,
    TransitionLabel,
};
use tempfile::{tempdir, NamedTempFile};

/// Deterministic panel: every genotype over `alphabet` of length `len` is
/// kept with probability `keep_per_mille / 1000`
fn random_panel(alphabet: &[u8], len: usize, keep_per_mille: u64, seed: u64) -> Vec<String> {
    let mut rng_state = seed;
    let total = alphabet.len().pow(len as u32);
    let mut panel = Vec::new();
    for mut n in 0..total {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        if (rng_state >> 33) % 1000 >= keep_per_mille {
            continue;
        }
        let mut s = vec![0u8; len];
        for slot in s.iter_mut().rev() {
            *slot = alphabet[n % alphabet.len()];
            n /= alphabet.len();
        }
        panel.push(String::from_utf8(s).unwrap());
    }
    panel
}

fn decomposer(num_threads: usize) -> HypercubeDecomposer {
    HypercubeDecomposer::new(DecomposeConfiguration {
        num_threads,
        ..DecomposeConfiguration::default()
    })
    .unwrap()
}

/// All (key, top vertex) entries of dimension `d`, by definition: `g` sits
/// under key `[(f1, p1, g[p1]), ..., (fd, pd, g[pd])]` (p1 < ... < pd,
/// fi < g[pi]) when every genotype obtained by reverting any subset of those
/// positions to their `from` symbols is in the panel.
fn hypercube_reference(
    panel: &[String],
    alphabet: &[u8],
    d: usize,
) -> BTreeSet<(String, String)> {
    let present: HashSet<&[u8]> = panel.iter().map(|s| s.as_bytes()).collect();
    let len = panel[0].len();
    let mut out = BTreeSet::new();

    for g in panel {
        let g = g.as_bytes();
        for positions in subsets(len, d) {
            let choices: Vec<Vec<u8>> = positions
                .iter()
                .map(|&p| alphabet.iter().copied().filter(|&a| a < g[p]).collect())
                .collect();
            for froms in cartesian(&choices) {
                let all_present = (0..1usize << d).all(|mask| {
                    let mut v = g.to_vec();
                    for (bit, &p) in positions.iter().enumerate() {
                        if mask & (1 << bit) != 0 {
                            v[p] = froms[bit];
                        }
                    }
                    present.contains(v.as_slice())
                });
                if all_present {
                    let key: DiagonalKey = positions
                        .iter()
                        .zip(&froms)
                        .map(|(&p, &f)| TransitionLabel::new(f, p, g[p]))
                        .collect();
                    out.insert((key.to_string(), String::from_utf8(g.to_vec()).unwrap()));
                }
            }
        }
    }
    out
}

fn subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for last in (k - 1)..n {
        for mut head in subsets(last, k - 1) {
            head.push(last);
            result.push(head);
        }
    }
    result
}

fn cartesian(choices: &[Vec<u8>]) -> Vec<Vec<u8>> {
    choices.iter().fold(vec![Vec::new()], |acc, options| {
        acc.iter()
            .flat_map(|prefix| {
                options.iter().map(move |&o| {
                    let mut next = prefix.clone();
                    next.push(o);
                    next
                })
            })
            .collect()
    })
}

fn entries(dataset: &Dataset) -> BTreeSet<(String, String)> {
    dataset
        .iter()
        .flat_map(|(k, g)| g.iter().map(move |x| (k.to_string(), x.to_string())))
        .collect()
}

#[test]
fn test_square_example() {
    let store = SequenceStore::new(["000", "001", "010", "011"]).unwrap();
    let dims = decomposer(1).decompose_in_memory(&store).unwrap();

    assert_eq!(dims.len(), 2);

    let mut d1 = Vec::new();
    write_dataset(&mut d1, &dims[0].1).unwrap();
    assert_eq!(
        String::from_utf8(d1).unwrap(),
        "011\t010\n011\t011\n021\t001\n021\t011\n"
    );

    let mut d2 = Vec::new();
    write_dataset(&mut d2, &dims[1].1).unwrap();
    assert_eq!(String::from_utf8(d2).unwrap(), "011:021\t011\n");
    assert!(dims[1].0.is_fixed_point());
}

#[test]
fn test_no_shared_edge_example() {
    let tmp = tempdir().unwrap();
    let store = SequenceStore::new(["00", "11"]).unwrap();
    let config = DecomposeConfiguration::new(tmp.path().join("out")).unwrap();
    let summaries = HypercubeDecomposer::new(config)
        .unwrap()
        .decompose_to_dir(&store)
        .unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].num_diagonals, 0);
    assert_eq!(summaries[0].num_hypercubes, 0);

    let file = tmp.path().join("out").join("hypercubes_1.txt");
    assert_eq!(fs::read(file).unwrap().len(), 0);
    assert!(!tmp.path().join("out").join("hypercubes_2.txt").exists());
}

#[test]
fn test_dimension_one_matches_pairwise_comparison() {
    for (alphabet, len, seed) in [
        (&b"01"[..], 7, 7u64),
        (&b"01"[..], 9, 11),
        (&b"ACGT"[..], 4, 3),
        (&b"ACGT"[..], 5, 5),
    ] {
        let panel = random_panel(alphabet, len, 300, seed);
        let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();

        let reference = pairwise_edges(&store);
        let summaries_and_data = decomposer(2).decompose_in_memory(&store).unwrap();
        let check = compare_datasets(&reference, &summaries_and_data[0].1);

        assert!(
            check.passed(),
            "alphabet {:?}, len {}: missing {:?}, unexpected {:?}",
            alphabet,
            len,
            check.missing,
            check.unexpected
        );
        assert!(check.num_expected > 0);
    }
}

#[test]
fn test_every_dimension_matches_hypercube_definition() {
    for (alphabet, len, keep, seed) in [
        (&b"01"[..], 6, 700u64, 1u64),
        (&b"01"[..], 7, 500, 2),
        (&b"ACG"[..], 4, 600, 3),
    ] {
        let panel = random_panel(alphabet, len, keep, seed);
        let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();
        let dims = decomposer(0).decompose_in_memory(&store).unwrap();

        for (summary, dataset) in &dims {
            let expected = hypercube_reference(&panel, alphabet, summary.dimension);
            assert_eq!(
                entries(dataset),
                expected,
                "alphabet {:?}, dimension {}",
                alphabet,
                summary.dimension
            );
        }

        // Nothing exists one dimension past the fixed point.
        let last = dims.last().unwrap().0;
        assert!(last.is_fixed_point());
        assert!(hypercube_reference(&panel, alphabet, last.dimension + 1).is_empty());
    }
}

#[test]
fn test_fixed_point_reached_within_sequence_length() {
    for seed in 0..5u64 {
        let panel = random_panel(b"01", 6, 800, seed);
        let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();
        let dims = decomposer(0).decompose_in_memory(&store).unwrap();

        assert!(dims.len() <= store.seq_len());
        assert!(dims.last().unwrap().0.is_fixed_point());
        assert!(dims[..dims.len() - 1].iter().all(|(s, _)| !s.is_fixed_point()));
    }
}

#[test]
fn test_keys_grow_one_label_per_dimension() {
    let panel = random_panel(b"01", 6, 900, 42);
    let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();
    let dims = decomposer(0).decompose_in_memory(&store).unwrap();

    for (summary, dataset) in &dims {
        for (key, group) in dataset.iter() {
            assert_eq!(key.dimension(), summary.dimension);
            assert!(key.labels().windows(2).all(|w| w[0].position < w[1].position));
            assert!(key.labels().iter().all(|l| l.from < l.to));
            assert!(group.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn test_full_cube_square_count() {
    // Every genotype of length 4: C(4, d) * 2^(4 - d) hypercubes at dimension d.
    let panel = random_panel(b"01", 4, 1000, 0);
    assert_eq!(panel.len(), 16);
    let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();
    let dims = decomposer(0).decompose_in_memory(&store).unwrap();

    let counts: Vec<usize> = dims.iter().map(|(s, _)| s.num_hypercubes).collect();
    assert_eq!(counts, vec![32, 24, 8, 1]);
    let groups: Vec<usize> = dims.iter().map(|(s, _)| s.num_diagonals).collect();
    assert_eq!(groups, vec![4, 6, 4, 1]);
}

#[test]
fn test_vertex_counts_need_not_shrink() {
    // All 64 genotypes of length 6; dimension 2 holds more entries than
    // dimension 1.
    let panel = random_panel(b"01", 6, 1000, 0);
    assert_eq!(panel.len(), 64);
    let store = SequenceStore::new(panel.iter().map(String::as_str)).unwrap();
    let dims = decomposer(2).decompose_in_memory(&store).unwrap();

    let counts: Vec<usize> = dims.iter().map(|(s, _)| s.num_hypercubes).collect();
    assert_eq!(counts, vec![192, 240, 160, 60, 12, 1]);
    let groups: Vec<usize> = dims.iter().map(|(s, _)| s.num_diagonals).collect();
    assert_eq!(groups, vec![6, 15, 20, 15, 6, 1]);

    for (summary, dataset) in &dims {
        assert_eq!(
            entries(dataset),
            hypercube_reference(&panel, b"01", summary.dimension)
        );
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let panel = random_panel(b"ACGT", 5, 250, 9);
    let mut input = NamedTempFile::new().unwrap();
    for g in panel.iter().rev() {
        writeln!(input, "{}\t1.0", g).unwrap();
    }
    input.flush().unwrap();

    let tmp = tempdir().unwrap();
    let mut outputs = Vec::new();
    for (run, threads) in [(0, 1usize), (1, 4)] {
        let store = load_sequence_store(input.path()).unwrap();
        let config = DecomposeConfiguration {
            num_threads: threads,
            ..DecomposeConfiguration::new(tmp.path().join(format!("run{}", run))).unwrap()
        };
        let summaries = HypercubeDecomposer::new(config)
            .unwrap()
            .decompose_to_dir(&store)
            .unwrap();

        let files: Vec<Vec<u8>> = summaries
            .iter()
            .map(|s| {
                let path = tmp
                    .path()
                    .join(format!("run{}", run))
                    .join(format!("hypercubes_{}.txt", s.dimension));
                fs::read(path).unwrap()
            })
            .collect();
        outputs.push(files);
    }

    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_duplicate_genotypes_are_kept() {
    let store = SequenceStore::new(["01", "00", "00"]).unwrap();
    let dims = decomposer(1).decompose_in_memory(&store).unwrap();

    let key = DiagonalKey::new().extended(TransitionLabel::new(b'0', 1, b'1'));
    assert_eq!(
        dims[0].1.get(&key).unwrap(),
        &[Genotype::from("01"), Genotype::from("01")]
    );
    assert_eq!(dims.len(), 2);
    assert!(dims[1].1.is_empty());
}
