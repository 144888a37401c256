use super::common::*;
use crate::questionnaire::domain::Domain;
use crate::questionnaire::scoring::{
    normalize, ScoringConfig, ScoringConfigError, ScoringError, Verdict,
};
use crate::questionnaire::{standard_engine, AnswerSheet, EngineError, STANDARD_ITEM_COUNT};

#[test]
fn neutral_answers_score_the_midpoint_everywhere() {
    let engine = engine();

    let assessment = engine.score_raw(&uniform(3)).expect("complete answers");

    for score in assessment.scores.iter() {
        assert_eq!(score.score, 50.0, "{:?} midpoint", score.domain);
    }
}

#[test]
fn workload_all_fives_counts_reversed_items_as_ones() {
    let engine = engine();
    let workload = engine.catalog().items_in(Domain::Workload);
    let expected_sum: u32 = workload
        .iter()
        .map(|item| if item.reversed { 1 } else { 5 })
        .sum();

    let assessment = engine.score_raw(&uniform(5)).expect("complete answers");

    assert_eq!(assessment.scores.workload.effective_sum, expected_sum);
    assert_eq!(assessment.scores.workload.score, normalize(expected_sum, 17));
    let by_hand = (((f64::from(expected_sum) - 17.0) / 68.0) * 100.0 * 10.0).round() / 10.0;
    assert_eq!(assessment.scores.workload.score, by_hand);
    assert_eq!(assessment.scores.workload.score, 23.5);
}

#[test]
fn effective_extremes_pin_scores_to_zero_and_hundred() {
    let engine = engine();

    let minimum = engine
        .score_raw(&with_effective(&engine, [1; 4]))
        .expect("complete");
    assert!(minimum.scores.iter().all(|score| score.score == 0.0));

    let maximum = engine
        .score_raw(&with_effective(&engine, [5; 4]))
        .expect("complete");
    assert!(maximum.scores.iter().all(|score| score.score == 100.0));
}

#[test]
fn reaction_all_ones_is_stable_with_calm_context() {
    let engine = engine();
    let answers = with_effective(&engine, [2, 1, 4, 4]);

    let assessment = engine.score_raw(&answers).expect("complete");

    assert_eq!(assessment.scores.reaction.score, 0.0);
    assert!(assessment.scores.workload.score < 55.0);
    assert!(assessment.scores.support.score > 45.0);
    assert_eq!(assessment.verdict, Verdict::Stable);
}

#[test]
fn raising_one_effective_value_never_lowers_its_domain() {
    let engine = engine();
    let base = uniform(3);
    let before = engine.score_raw(&base).expect("complete");

    for item in engine.catalog().items() {
        let mut raised = base.clone();
        // Effective value goes from 3 to 4 whether or not the item is reversed.
        raised[item.index] = Some(if item.reversed { 2 } else { 4 });
        let after = engine.score_raw(&raised).expect("complete");
        assert!(
            after.scores.score(item.domain) > before.scores.score(item.domain),
            "item {} should raise {:?}",
            item.index,
            item.domain
        );
    }
}

#[test]
fn every_valid_sheet_stays_within_bounds() {
    let engine = engine();

    for seed in 0..200u32 {
        let answers: Vec<Option<u8>> = (0..STANDARD_ITEM_COUNT as u32)
            .map(|index| Some(((seed.wrapping_mul(31) + index * 7 + index * index) % 5 + 1) as u8))
            .collect();
        let assessment = engine.score_raw(&answers).expect("complete");
        for score in assessment.scores.iter() {
            assert!((0.0..=100.0).contains(&score.score));
        }
        assert_eq!(assessment.advisories.len(), 4);
    }
}

#[test]
fn incomplete_answers_are_rejected_with_their_positions() {
    let engine = engine();
    let mut answers = uniform(3);
    answers[4] = None;
    answers[56] = None;

    let err = engine.score_raw(&answers).expect_err("two unanswered");

    assert_eq!(
        err,
        ScoringError::IncompleteAnswers {
            missing: vec![4, 56]
        }
    );
    assert_eq!(err.missing_questions(), vec![5, 57]);
    assert!(err.to_string().contains("5, 57"));
}

#[test]
fn missing_items_are_reported_before_out_of_range_values() {
    let engine = engine();
    let mut answers = uniform(3);
    answers[0] = Some(9);
    answers[1] = None;

    let err = engine.score_raw(&answers).expect_err("incomplete");
    assert!(matches!(err, ScoringError::IncompleteAnswers { .. }));
}

#[test]
fn out_of_range_answers_fail_instead_of_clamping() {
    let engine = engine();
    let mut answers = uniform(3);
    answers[20] = Some(0);

    let err = engine.score_raw(&answers).expect_err("zero is off the scale");
    assert_eq!(err, ScoringError::AnswerOutOfRange { item: 20, value: 0 });
}

#[test]
fn wide_raw_values_are_range_checked_without_truncation() {
    let engine = engine();
    let mut answers: Vec<Option<i64>> = vec![Some(3); STANDARD_ITEM_COUNT];
    answers[7] = Some(259);

    let err = engine.score_raw(&answers).expect_err("259 is off the scale");
    assert_eq!(err, ScoringError::AnswerOutOfRange { item: 7, value: 259 });

    answers[7] = Some(-1);
    let err = engine.score_raw(&answers).expect_err("negative is off the scale");
    assert_eq!(err, ScoringError::AnswerOutOfRange { item: 7, value: -1 });
}

#[test]
fn sheet_of_the_wrong_length_is_rejected() {
    let engine = engine();

    let err = engine
        .score(&AnswerSheet::new(STANDARD_ITEM_COUNT - 1))
        .expect_err("short sheet");
    assert_eq!(
        err,
        ScoringError::AnswerCountMismatch {
            expected: STANDARD_ITEM_COUNT,
            actual: STANDARD_ITEM_COUNT - 1
        }
    );
}

#[test]
fn advisories_follow_domain_direction() {
    let engine = engine();
    // Heavy workload and reaction, strong support and satisfaction.
    let assessment = engine
        .score_raw(&with_effective(&engine, [5, 5, 5, 5]))
        .expect("complete");

    assert_eq!(assessment.verdict, Verdict::HighStress);
    let domains: Vec<Domain> = assessment.advisories.iter().map(|advisory| advisory.domain).collect();
    assert_eq!(domains, Domain::ordered().to_vec());
    let workload = assessment.advisory(Domain::Workload);
    assert!(workload.message.contains("reducing"));
    let support = assessment.advisory(Domain::Support);
    assert!(support.message.contains("good support"));
}

#[test]
fn engine_refuses_inverted_thresholds_built_in_code() {
    let mut config = ScoringConfig::standard();
    config.verdict.elevated_reaction = 80.0;

    assert!(matches!(
        standard_engine(config),
        Err(EngineError::Thresholds(ScoringConfigError::Inverted {
            lower_name: "verdict.elevated_reaction",
            ..
        }))
    ));
}
