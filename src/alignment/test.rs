use super::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn score_map(symbols: &[&'static str], matched: f64, mismatched: f64) -> ScoreMap<&'static str> {
    let mut scores = ScoreMap::new();
    for &s in symbols {
        for &t in symbols {
            scores.insert((s, t), if s == t { matched } else { mismatched });
        }
    }
    scores
}

fn rendered(seq: &[AlignedSymbol<&str>]) -> Vec<String> {
    seq.iter().map(ToString::to_string).collect()
}

#[test]
fn sonority_bonus_scales_matching_prosodics() {
    let scores = score_map(&["a"], 1.0, -1.0);

    let same =
        align_pairwise(&["a"], &["a"], &[-1.0], &[-1.0], &[0], &[0], "V", "V", &scores, 0.5, 0.5, Mode::Global).unwrap();
    assert!((same.similarity - 1.5).abs() < f64::EPSILON);

    let differing =
        align_pairwise(&["a"], &["a"], &[-1.0], &[-1.0], &[0], &[0], "V", "C", &scores, 0.5, 0.5, Mode::Global).unwrap();
    assert!((differing.similarity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn all_pairs_enumerates_lexicographically() {
    let mut scores = ScoreMap::new();
    scores.insert(("a", "b"), 5.0);
    scores.insert(("a", "c"), 3.0);
    scores.insert(("b", "c"), 1.0);

    let seqs = vec![vec!["a"], vec!["b"], vec!["c"]];
    let weights = vec![vec![-1.0]; 3];
    let restrictions = vec![vec![0]; 3];
    let prosodics = vec!["c".to_string(); 3];

    let alignments =
        align_sequences_pairwise(&seqs, &weights, &restrictions, &prosodics, &scores, 1.0, 0.0, Mode::Global).unwrap();

    let sims: Vec<f64> = alignments.iter().map(|a| a.similarity).collect();
    assert_eq!(alignments.len(), 3);
    assert_eq!(sims, [5.0, 3.0, 1.0]);
}

/// The similarity map above only holds `(first, second)` keys, so this also
/// pins the canonical lookup order for the all-pairs driver.
#[test]
fn all_pairs_uses_canonical_key_order() {
    let mut scores = ScoreMap::new();
    scores.insert(("a", "b"), 2.0);

    let seqs = vec![vec!["a"], vec!["b"]];
    let weights = vec![vec![-1.0]; 2];
    let restrictions = vec![vec![0]; 2];
    let prosodics = vec!["c".to_string(); 2];

    let alignments =
        align_sequences_pairwise(&seqs, &weights, &restrictions, &prosodics, &scores, 1.0, 0.0, Mode::Global).unwrap();
    assert_eq!(alignments.len(), 1);
    assert!((alignments[0].similarity - 2.0).abs() < f64::EPSILON);
}

#[test]
fn explicit_pairs_align_elementwise() {
    let scores = score_map(&["a", "b", "x"], 1.0, -1.0);

    let pairs = vec![(vec!["a", "b"], vec!["a", "x", "b"]), (vec!["a"], vec!["a"])];
    let weights = vec![(vec![-2.0; 2], vec![-2.0; 3]), (vec![-2.0], vec![-2.0])];
    let restrictions = vec![(vec![0; 2], vec![0; 3]), (vec![0], vec![0])];
    let prosodics = vec![("cc".to_string(), "ccc".to_string()), ("c".to_string(), "c".to_string())];

    let alignments =
        align_sequence_pairs(&pairs, &weights, &restrictions, &prosodics, &scores, 1.0, 0.0, Mode::Global).unwrap();

    assert_eq!(alignments.len(), 2);
    assert_eq!(rendered(&alignments[0].seq_a), ["a", "-", "b"]);
    assert_eq!(rendered(&alignments[0].seq_b), ["a", "x", "b"]);
    assert!((alignments[0].similarity - 0.0).abs() < f64::EPSILON);
    assert!((alignments[1].similarity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_sequences_are_rejected() {
    let scores = score_map(&["a"], 1.0, -1.0);
    let empty: [&str; 0] = [];

    let err = align_pairwise(&empty, &["a"], &[], &[-1.0], &[], &[0], "", "V", &scores, 0.5, 0.0, Mode::Global)
        .unwrap_err();
    assert_eq!(err, AlignmentError::EmptySequence);
}

#[test]
fn mismatched_weights_are_rejected() {
    let scores = score_map(&["a"], 1.0, -1.0);

    let err = align_pairwise(
        &["a"],
        &["a"],
        &[-1.0, -1.0],
        &[-1.0],
        &[0],
        &[0],
        "V",
        "V",
        &scores,
        0.5,
        0.0,
        Mode::Global,
    )
    .unwrap_err();
    assert_eq!(
        err,
        AlignmentError::WeightCountMismatch {
            seq_len:    1,
            weight_len: 2,
        }
    );
}

#[test]
fn mismatched_restrictions_are_rejected() {
    let scores = score_map(&["a"], 1.0, -1.0);

    let err = align_pairwise(&["a"], &["a"], &[-1.0], &[-1.0], &[], &[0], "V", "V", &scores, 0.5, 0.0, Mode::Global)
        .unwrap_err();
    assert_eq!(
        err,
        AlignmentError::RestrictionCountMismatch {
            seq_len:         1,
            restriction_len: 0,
        }
    );
}

#[test]
fn mismatched_prosodics_are_rejected() {
    let scores = score_map(&["a"], 1.0, -1.0);

    let err = align_pairwise(&["a"], &["a"], &[-1.0], &[-1.0], &[0], &[0], "VC", "V", &scores, 0.5, 0.0, Mode::Global)
        .unwrap_err();
    assert_eq!(
        err,
        AlignmentError::ProsodicCountMismatch {
            seq_len:      1,
            prosodic_len: 2,
        }
    );
}

#[test]
fn missing_similarity_entries_are_fatal() {
    let scores: ScoreMap<&str> = ScoreMap::new();

    let err = align_pairwise(&["a"], &["b"], &[-1.0], &[-1.0], &[0], &[0], "V", "V", &scores, 0.5, 0.0, Mode::Global)
        .unwrap_err();
    assert!(matches!(err, AlignmentError::MissingScore { .. }));
}

#[test]
fn batch_argument_counts_must_agree() {
    let scores = score_map(&["a"], 1.0, -1.0);

    let seqs = vec![vec!["a"], vec!["a"]];
    let weights = vec![vec![-1.0]];
    let restrictions = vec![vec![0]; 2];
    let prosodics = vec!["c".to_string(); 2];

    let err = align_sequences_pairwise(&seqs, &weights, &restrictions, &prosodics, &scores, 1.0, 0.0, Mode::Global)
        .unwrap_err();
    assert_eq!(err, AlignmentError::SequenceCountMismatch { seq_count: 2, found: 1 });
}

mod random_pairs {
    use super::*;

    fn pair_fixture() -> (
        Vec<(Vec<&'static str>, Vec<&'static str>)>,
        Vec<(Vec<f64>, Vec<f64>)>,
        Vec<(Vec<i32>, Vec<i32>)>,
        Vec<(String, String)>,
    ) {
        let pairs = vec![(vec!["a"], vec!["a"]), (vec!["b"], vec!["b"]), (vec!["a"], vec!["b"])];
        let weights = vec![(vec![-1.0], vec![-1.0]); 3];
        let restrictions = vec![(vec![0], vec![0]); 3];
        let prosodics = vec![("c".to_string(), "c".to_string()); 3];
        (pairs, weights, restrictions, prosodics)
    }

    #[test]
    fn zero_runs_is_rejected() {
        let (pairs, weights, restrictions, prosodics) = pair_fixture();
        let scores = score_map(&["a", "b"], 1.0, -1.0);
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);

        let err = random_align_sequence_pairs(
            &pairs,
            &weights,
            &restrictions,
            &prosodics,
            &scores,
            1.0,
            0.0,
            Mode::Global,
            0,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, AlignmentError::ZeroRuns);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let (pairs, weights, restrictions, prosodics) = pair_fixture();
        let scores = score_map(&["a", "b"], 1.0, -1.0);

        let run = || {
            let mut rng = Xoshiro256StarStar::seed_from_u64(42);
            random_align_sequence_pairs(
                &pairs,
                &weights,
                &restrictions,
                &prosodics,
                &scores,
                1.0,
                0.0,
                Mode::Global,
                10,
                &mut rng,
            )
            .unwrap()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn accumulated_mass_matches_the_column_count() {
        let (pairs, weights, restrictions, prosodics) = pair_fixture();
        let scores = score_map(&["a", "b"], 1.0, -1.0);
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        let corrs = random_align_sequence_pairs(
            &pairs,
            &weights,
            &restrictions,
            &prosodics,
            &scores,
            1.0,
            0.0,
            Mode::Global,
            8,
            &mut rng,
        )
        .unwrap();

        // singleton pairs produce one aligned column each, so every run
        // contributes three observations of weight 1/runs
        let total: f64 = corrs.values().sum();
        assert!((total - 3.0).abs() < 1e-9);
    }

    #[test]
    fn single_identity_pair_accumulates_to_one() {
        let pairs = vec![(vec!["a"], vec!["a"])];
        let weights = vec![(vec![-1.0], vec![-1.0])];
        let restrictions = vec![(vec![0], vec![0])];
        let prosodics = vec![("c".to_string(), "c".to_string())];
        let scores = score_map(&["a"], 1.0, -1.0);
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);

        let corrs = random_align_sequence_pairs(
            &pairs,
            &weights,
            &restrictions,
            &prosodics,
            &scores,
            1.0,
            0.0,
            Mode::Global,
            4,
            &mut rng,
        )
        .unwrap();

        let key = (AlignedSymbol::Symbol("a"), AlignedSymbol::Symbol("a"));
        assert_eq!(corrs.len(), 1);
        assert!((corrs[&key] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn local_mode_filters_excluded_positions() {
        let pairs = vec![(vec!["x", "a", "b", "c", "y"], vec!["a", "b", "c"])];
        let weights = vec![(vec![-5.0; 5], vec![-5.0; 3])];
        let restrictions = vec![(vec![0; 5], vec![0; 3])];
        let prosodics = vec![("ccccc".to_string(), "ccc".to_string())];
        let scores = score_map(&["x", "a", "b", "c", "y"], 1.0, -1.0);
        let mut rng = Xoshiro256StarStar::seed_from_u64(11);

        let corrs = random_align_sequence_pairs(
            &pairs,
            &weights,
            &restrictions,
            &prosodics,
            &scores,
            0.5,
            0.0,
            Mode::Local,
            2,
            &mut rng,
        )
        .unwrap();

        assert_eq!(corrs.len(), 3);
        for symbol in ["a", "b", "c"] {
            let key = (AlignedSymbol::Symbol(symbol), AlignedSymbol::Symbol(symbol));
            assert!((corrs[&key] - 1.0).abs() < 1e-9);
        }
    }
}
