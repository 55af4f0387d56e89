//! Tests for the alternation open list.

use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use altsearch_config::LearningConfig;
use altsearch_test::{init_test_tracing, FifoFactory, FifoOpenList, KeyedFactory, Verdict};

type Queue = Box<dyn OpenList<u32, ()>>;

fn fifo_queues(count: usize) -> Vec<Queue> {
    (0..count)
        .map(|_| Box::new(FifoOpenList::new()) as Queue)
        .collect()
}

fn prefilled(sizes: &[u32]) -> Vec<Queue> {
    sizes
        .iter()
        .map(|&size| {
            let mut queue = FifoOpenList::new();
            for entry in 0..size {
                OpenList::<u32, ()>::insert(&mut queue, &(), entry).unwrap();
            }
            Box::new(queue) as Queue
        })
        .collect()
}

fn verdict_queues(verdicts: &[Verdict]) -> Vec<Queue> {
    verdicts
        .iter()
        .map(|v| Box::new(FifoOpenList::with_verdict(v.clone())) as Queue)
        .collect()
}

fn weighted_config(probs: Vec<f64>, seed: u64) -> AlternationConfig {
    AlternationConfig::new()
        .with_decision(Decision::WeightedAdaptive)
        .with_probs(probs)
        .with_seed(seed)
}

fn fill(open: &mut AlternationOpenList<u32, ()>, count: u32) {
    for entry in 0..count {
        open.insert(&(), entry).unwrap();
    }
}

// Runs `steps` removals, feeding back `g = step` for each, and returns
// the queue chosen each time.
fn drive_with_feedback(open: &mut AlternationOpenList<u32, ()>, steps: usize) -> Vec<usize> {
    let mut chosen = Vec::with_capacity(steps);
    for step in 0..steps {
        let feedback = open
            .last_selected()
            .map(|q| Feedback::new(q, step as f64, 0.0));
        open.remove_min(feedback).unwrap();
        chosen.push(open.last_selected().unwrap());
    }
    chosen
}

fn assert_weight_invariants(weights: &[f64], learning: &LearningConfig) {
    let sum: f64 = weights.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "weights {:?} sum to {}", weights, sum);
    for &w in weights {
        assert!(
            w >= learning.min_weight && w <= learning.max_weight,
            "weight {} outside [{}, {}]",
            w,
            learning.min_weight,
            learning.max_weight
        );
    }
}

#[test]
fn test_insert_fans_out_to_every_queue() {
    let mut open = AlternationOpenList::from_queues(fifo_queues(3), &AlternationConfig::default())
        .unwrap();

    fill(&mut open, 7);

    for i in 0..3 {
        assert_eq!(open.queue(i).unwrap().len(), 7);
    }
    assert_eq!(OpenList::len(&open), 21);
}

#[test]
fn test_empty_iff_all_queues_empty() {
    let mut open =
        AlternationOpenList::from_queues(prefilled(&[1, 0]), &AlternationConfig::default())
            .unwrap();
    assert!(!open.is_empty());

    open.remove_min(None).unwrap();

    assert!(open.is_empty());
    assert!(open.queue(0).unwrap().is_empty());
    assert!(open.queue(1).unwrap().is_empty());
}

#[test]
fn test_remove_from_exhausted_list_fails() {
    init_test_tracing();
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &AlternationConfig::default()).unwrap();

    let err = open.remove_min(None).unwrap_err();

    assert!(matches!(err, OpenListError::Exhausted));
    assert_eq!(err.exit_code(), altsearch_core::ExitCode::SearchCriticalError);
    assert_eq!(open.last_selected(), None);
}

#[test]
fn test_round_robin_alternates_in_index_order() {
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(3), &AlternationConfig::default()).unwrap();
    fill(&mut open, 10);

    let chosen: Vec<usize> = (0..6)
        .map(|_| {
            open.remove_min(None).unwrap();
            open.last_selected().unwrap()
        })
        .collect();

    assert_eq!(chosen, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(open.priorities(), &[2, 2, 2]);
}

#[test]
fn test_round_robin_is_fair() {
    let k = 4;
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(k), &AlternationConfig::default()).unwrap();
    fill(&mut open, 100);

    for _ in 0..(k * 20) {
        open.remove_min(None).unwrap();
    }

    for i in 0..k {
        assert_eq!(open.statistics().selection_count(i), 20);
    }
    assert_eq!(open.statistics().removals(), 80);
}

#[test]
fn test_round_robin_skips_empty_queue() {
    let mut open =
        AlternationOpenList::from_queues(prefilled(&[1, 4]), &AlternationConfig::default())
            .unwrap();

    let chosen: Vec<usize> = (0..5)
        .map(|_| {
            open.remove_min(None).unwrap();
            open.last_selected().unwrap()
        })
        .collect();

    assert_eq!(chosen, vec![0, 1, 1, 1, 1]);
    assert!(open.is_empty());
}

#[test]
fn test_each_queue_returns_its_own_minimum() {
    let sublists: Vec<Box<dyn OpenListFactory<u32, ()>>> = vec![
        Box::new(KeyedFactory::<u32>::new(|e| *e as i64)),
        Box::new(KeyedFactory::<u32>::new(|e| -(*e as i64))),
    ];
    let mut open =
        AlternationOpenList::from_factories(&sublists, &AlternationConfig::default()).unwrap();
    for entry in [5, 1, 9, 3] {
        open.insert(&(), entry).unwrap();
    }

    let popped: Vec<u32> = (0..4).map(|_| open.remove_min(None).unwrap()).collect();

    assert_eq!(popped, vec![1, 9, 3, 5]);
}

#[test]
fn test_boost_favours_preferred_only_queues() {
    let config = AlternationConfig::new().with_boost(5);
    let queues = verdict_queues(&[Verdict::new(), Verdict::new().preferred_only()]);
    let mut open = AlternationOpenList::from_queues(queues, &config).unwrap();
    fill(&mut open, 10);

    open.boost_preferred();
    assert_eq!(open.priorities(), &[0, -5]);

    let chosen: Vec<usize> = (0..7)
        .map(|_| {
            open.remove_min(None).unwrap();
            open.last_selected().unwrap()
        })
        .collect();

    assert_eq!(chosen, vec![1, 1, 1, 1, 1, 0, 1]);
}

#[test]
fn test_boost_through_open_list_trait() {
    let config = AlternationConfig::new().with_boost(2);
    let queues = verdict_queues(&[Verdict::new().preferred_only(), Verdict::new()]);
    let mut open = AlternationOpenList::from_queues(queues, &config).unwrap();

    OpenList::boost_preferred(&mut open);
    OpenList::boost_preferred(&mut open);

    assert_eq!(open.priorities(), &[-4, 0]);
}

#[test]
fn test_zero_boost_is_a_no_op() {
    let queues = verdict_queues(&[Verdict::new().preferred_only(), Verdict::new()]);
    let mut open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    open.boost_preferred();

    assert_eq!(open.priorities(), &[0, 0]);
}

#[test]
fn test_boost_leaves_weights_alone() {
    let config = weighted_config(vec![0.5, 0.5], 1).with_boost(3);
    let queues = verdict_queues(&[Verdict::new().preferred_only(), Verdict::new()]);
    let mut open = AlternationOpenList::from_queues(queues, &config).unwrap();

    open.boost_preferred();

    assert_eq!(open.weights(), &[0.5, 0.5]);
}

#[test]
fn test_uniform_random_is_deterministic() {
    let config = AlternationConfig::new()
        .with_decision(Decision::UniformRandom)
        .with_seed(1234);
    let mut a = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    let mut b = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    fill(&mut a, 50);
    fill(&mut b, 50);

    let seq_a: Vec<usize> = (0..40)
        .map(|_| {
            a.remove_min(None).unwrap();
            a.last_selected().unwrap()
        })
        .collect();
    let seq_b: Vec<usize> = (0..40)
        .map(|_| {
            b.remove_min(None).unwrap();
            b.last_selected().unwrap()
        })
        .collect();

    assert_eq!(seq_a, seq_b);
    // Priority counters only move under round-robin.
    assert_eq!(a.priorities(), &[0, 0, 0]);
}

#[test]
fn test_uniform_random_reaches_every_queue() {
    let config = AlternationConfig::new()
        .with_decision(Decision::UniformRandom)
        .with_seed(5);
    let mut open = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    fill(&mut open, 200);

    for _ in 0..300 {
        open.remove_min(None).unwrap();
    }

    for i in 0..3 {
        assert!(open.statistics().selection_count(i) > 50);
    }
}

#[test]
fn test_weighted_adaptive_is_deterministic() {
    let config = weighted_config(vec![0.3, 0.3, 0.4], 99);
    let mut a = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    let mut b = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    fill(&mut a, 60);
    fill(&mut b, 60);

    let seq_a = drive_with_feedback(&mut a, 100);
    let seq_b = drive_with_feedback(&mut b, 100);

    assert_eq!(seq_a, seq_b);
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn test_feedback_shifts_weight_by_learning_rate() {
    init_test_tracing();
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &weighted_config(vec![0.5, 0.5], 7))
            .unwrap();
    fill(&mut open, 4);

    open.remove_min(None).unwrap();
    let first = open.last_selected().unwrap();
    open.remove_min(Some(Feedback::new(first, 10.0, 12.0)))
        .unwrap();

    let other = 1 - first;
    assert!((open.weights()[first] - 0.51).abs() < 1e-12);
    assert!((open.weights()[other] - 0.49).abs() < 1e-12);
    assert_eq!(open.statistics().updates_applied(), 1);
}

#[test]
fn test_feedback_before_first_removal_is_ignored() {
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &weighted_config(vec![0.5, 0.5], 7))
            .unwrap();
    fill(&mut open, 2);

    open.remove_min(Some(Feedback::new(0, 10.0, 0.0))).unwrap();

    assert_eq!(open.weights(), &[0.5, 0.5]);
    assert_eq!(open.statistics().updates_applied(), 0);
}

#[test]
fn test_feedback_is_ignored_outside_weighted_mode() {
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &AlternationConfig::default()).unwrap();
    fill(&mut open, 4);

    open.remove_min(None).unwrap();
    open.remove_min(Some(Feedback::new(0, 10.0, 0.0))).unwrap();

    assert_eq!(open.weights(), &[0.5, 0.5]);
    assert_eq!(open.statistics().updates_applied(), 0);
    assert_eq!(open.statistics().updates_skipped(), 0);
}

#[test]
fn test_mismatched_feedback_credits_last_selected() {
    init_test_tracing();
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &weighted_config(vec![0.5, 0.5], 3))
            .unwrap();
    fill(&mut open, 4);

    open.remove_min(None).unwrap();
    let first = open.last_selected().unwrap();
    open.remove_min(Some(Feedback::new(1 - first, 10.0, 0.0)))
        .unwrap();

    assert!((open.weights()[first] - 0.51).abs() < 1e-12);
}

#[test]
fn test_update_skipped_at_weight_bound() {
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &weighted_config(vec![0.8, 0.2], 3))
            .unwrap();
    fill(&mut open, 10);

    open.remove_min(None).unwrap();
    let first = open.last_selected().unwrap();
    open.remove_min(Some(Feedback::new(first, 10.0, 0.0))).unwrap();

    if first == 0 {
        assert_eq!(open.weights(), &[0.8, 0.2]);
        assert_eq!(open.statistics().updates_skipped(), 1);
    } else {
        assert!((open.weights()[1] - 0.21).abs() < 1e-12);
        assert_eq!(open.statistics().updates_applied(), 1);
    }
}

#[test]
fn test_weights_stay_bounded_over_long_search() {
    let config = weighted_config(vec![0.3, 0.3, 0.4], 17);
    let mut open = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    fill(&mut open, 400);

    for step in 0..600 {
        let feedback = open
            .last_selected()
            .map(|q| Feedback::new(q, (q * 7 + step % 5) as f64, 0.0));
        open.remove_min(feedback).unwrap();
        assert_weight_invariants(open.weights(), &config.learning);
    }
}

#[test]
fn test_weighted_never_draws_empty_queue() {
    let config = weighted_config(vec![0.2, 0.6, 0.2], 21);
    let mut open = AlternationOpenList::from_queues(prefilled(&[50, 0, 50]), &config).unwrap();

    for _ in 0..80 {
        open.remove_min(None).unwrap();
    }

    assert_eq!(open.statistics().selection_count(1), 0);
    assert_eq!(open.statistics().removals(), 80);
    // Redistribution is per draw and never touches the stored weights.
    assert_eq!(open.weights(), &[0.2, 0.6, 0.2]);
}

#[test]
fn test_weighted_drains_everything() {
    let config = weighted_config(vec![0.5, 0.5], 8);
    let mut open = AlternationOpenList::from_queues(prefilled(&[3, 1]), &config).unwrap();

    for _ in 0..4 {
        open.remove_min(None).unwrap();
    }

    assert!(open.is_empty());
    assert!(matches!(open.remove_min(None), Err(OpenListError::Exhausted)));
}

#[derive(Debug)]
struct AllOnLast;

impl WeightLearner for AllOnLast {
    fn name(&self) -> &str {
        "all_on_last"
    }

    fn observe(&mut self, _queue: usize, _feedback: &Feedback, weights: &mut [f64]) -> WeightUpdate {
        let last = weights.len() - 1;
        for (i, w) in weights.iter_mut().enumerate() {
            *w = if i == last { 1.0 } else { 0.0 };
        }
        WeightUpdate::Applied { winner: last }
    }

    fn reset(&mut self) {}
}

#[test]
fn test_custom_learner_replaces_rule() {
    let config = weighted_config(vec![0.5, 0.5], 4);
    let mut open = AlternationOpenList::from_queues(fifo_queues(2), &config)
        .unwrap()
        .with_learner(Box::new(AllOnLast));
    fill(&mut open, 30);

    let chosen = drive_with_feedback(&mut open, 20);

    assert_eq!(open.learner().name(), "all_on_last");
    assert!(chosen[1..].iter().all(|&q| q == 1));
}

#[test]
fn test_reliable_dead_end_from_any_queue() {
    let queues = verdict_queues(&[Verdict::new().reliable_dead_end(), Verdict::new()]);
    let open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    assert!(open.is_reliable_dead_end(&()));
    assert!(open.is_dead_end(&()));
}

#[test]
fn test_unreliable_dead_end_needs_consensus() {
    let queues = verdict_queues(&[Verdict::new().dead_end(), Verdict::new()]);
    let open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    assert!(!open.is_reliable_dead_end(&()));
    assert!(!open.is_dead_end(&()));
}

#[test]
fn test_unanimous_unreliable_dead_end() {
    let queues = verdict_queues(&[Verdict::new().dead_end(), Verdict::new().dead_end()]);
    let open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    assert!(!open.is_reliable_dead_end(&()));
    assert!(open.is_dead_end(&()));
}

#[test]
fn test_collects_evaluators_from_all_queues() {
    let queues = verdict_queues(&[
        Verdict::new().with_evaluator(1).with_evaluator(2),
        Verdict::new().with_evaluator(2).with_evaluator(5),
    ]);
    let open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    let mut evals = BTreeSet::new();
    open.collect_path_dependent_evaluators(&mut evals);

    let ids: Vec<u32> = evals.iter().map(|e| e.get()).collect();
    assert_eq!(ids, vec![1, 2, 5]);
}

#[test]
fn test_preferred_only_requires_every_queue() {
    let mixed = verdict_queues(&[Verdict::new().preferred_only(), Verdict::new()]);
    let open = AlternationOpenList::from_queues(mixed, &AlternationConfig::default()).unwrap();
    assert!(!open.only_contains_preferred_entries());

    let all = verdict_queues(&[Verdict::new().preferred_only(), Verdict::new().preferred_only()]);
    let open = AlternationOpenList::from_queues(all, &AlternationConfig::default()).unwrap();
    assert!(open.only_contains_preferred_entries());
}

#[test]
fn test_clear_keeps_selection_state() {
    let config = weighted_config(vec![0.5, 0.5], 7);
    let mut open = AlternationOpenList::from_queues(fifo_queues(2), &config).unwrap();
    fill(&mut open, 4);
    open.remove_min(None).unwrap();
    let first = open.last_selected().unwrap();
    open.remove_min(Some(Feedback::new(first, 10.0, 0.0))).unwrap();
    let weights = open.weights().to_vec();

    open.clear();

    assert!(open.is_empty());
    assert_eq!(open.weights(), weights.as_slice());
    assert!(open.last_selected().is_some());
}

#[test]
fn test_clear_keeps_round_robin_counters() {
    let mut open =
        AlternationOpenList::from_queues(fifo_queues(2), &AlternationConfig::default()).unwrap();
    fill(&mut open, 2);
    open.remove_min(None).unwrap();

    open.clear();
    fill(&mut open, 2);
    open.remove_min(None).unwrap();

    // Queue 0 already served once before the clear.
    assert_eq!(open.last_selected(), Some(1));
}

#[test]
fn test_reset_repeats_selection_sequence() {
    let config = weighted_config(vec![0.25, 0.25, 0.5], 11);
    let mut open = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
    fill(&mut open, 40);
    let first_run = drive_with_feedback(&mut open, 30);
    let first_weights = open.weights().to_vec();

    open.reset();
    assert!(open.is_empty());
    assert_eq!(open.weights(), &[0.25, 0.25, 0.5]);
    assert_eq!(open.statistics().removals(), 0);
    assert_eq!(open.last_selected(), None);

    fill(&mut open, 40);
    let second_run = drive_with_feedback(&mut open, 30);

    assert_eq!(first_run, second_run);
    assert_eq!(open.weights(), first_weights.as_slice());
}

#[test]
fn test_construction_rejects_empty_sublists() {
    let sublists: Vec<Box<dyn OpenListFactory<u32, ()>>> = Vec::new();
    let result = AlternationOpenList::from_factories(&sublists, &AlternationConfig::default());
    assert!(matches!(result, Err(ConfigError::EmptySublists)));
}

#[test]
fn test_construction_rejects_bad_probabilities() {
    let result = AlternationOpenList::<u32, ()>::from_queues(
        fifo_queues(3),
        &weighted_config(vec![0.5, 0.5], 1),
    );
    assert!(matches!(
        result,
        Err(ConfigError::ProbabilityCountMismatch {
            expected: 3,
            actual: 2
        })
    ));

    let result = AlternationOpenList::<u32, ()>::from_queues(
        fifo_queues(2),
        &weighted_config(vec![0.7, 0.7], 1),
    );
    assert!(matches!(result, Err(ConfigError::ProbabilitySum { .. })));
}

#[test]
fn test_factory_creates_independent_lists() {
    let sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> =
        vec![Arc::new(FifoFactory::new()), Arc::new(FifoFactory::new())];
    let factory = AlternationOpenListFactory::new(sublists, AlternationConfig::default()).unwrap();

    let mut a = factory.create();
    let b = factory.create();
    fill(&mut a, 3);

    assert_eq!(OpenList::len(&a), 6);
    assert!(b.is_empty());
    assert_eq!(factory.sublist_count(), 2);
}

#[test]
fn test_factory_validates_once() {
    let sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> = vec![Arc::new(FifoFactory::new())];
    let result = AlternationOpenListFactory::new(
        sublists,
        AlternationConfig::new().with_decision(Decision::WeightedAdaptive),
    );
    assert!(matches!(result, Err(ConfigError::MissingProbabilities)));
}

#[test]
fn test_nested_alternation() {
    let inner_sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> = vec![
        Arc::new(KeyedFactory::<u32>::new(|e| *e as i64)),
        Arc::new(KeyedFactory::<u32>::new(|e| -(*e as i64))),
    ];
    let inner =
        AlternationOpenListFactory::new(inner_sublists, AlternationConfig::default()).unwrap();
    let outer_sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> = vec![
        Arc::new(inner),
        Arc::new(FifoFactory::with_verdict(Verdict::new().with_evaluator(9))),
    ];
    let outer =
        AlternationOpenListFactory::new(outer_sublists, AlternationConfig::default()).unwrap();

    let mut open = outer.create_open_list();
    for entry in [4, 8, 2] {
        open.insert(&(), entry).unwrap();
    }
    assert_eq!(open.len(), 9);

    // outer q0 -> inner q0 (min), outer q1 (fifo), outer q0 -> inner q1 (max)
    let popped: Vec<u32> = (0..3).map(|_| open.remove_min().unwrap()).collect();
    assert_eq!(popped, vec![2, 4, 8]);

    let mut evals = BTreeSet::new();
    open.collect_path_dependent_evaluators(&mut evals);
    assert_eq!(evals.len(), 1);
}

proptest! {
    #[test]
    fn prop_fan_out_preserves_counts(entries in prop::collection::vec(any::<u32>(), 0..64), k in 1usize..6) {
        let mut open = AlternationOpenList::from_queues(fifo_queues(k), &AlternationConfig::default()).unwrap();
        for &entry in &entries {
            open.insert(&(), entry).unwrap();
        }
        for i in 0..k {
            prop_assert_eq!(open.queue(i).unwrap().len(), entries.len());
        }
        prop_assert_eq!(open.is_empty(), entries.is_empty());
    }

    #[test]
    fn prop_weights_respect_bounds(costs in prop::collection::vec(0.0f64..1000.0, 1..150), seed in any::<u64>()) {
        let config = weighted_config(vec![0.3, 0.3, 0.4], seed);
        let mut open = AlternationOpenList::from_queues(fifo_queues(3), &config).unwrap();
        fill(&mut open, 200);
        for &g in &costs {
            let feedback = open.last_selected().map(|q| Feedback::new(q, g, 0.0));
            open.remove_min(feedback).unwrap();
            let sum: f64 = open.weights().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            for &w in open.weights() {
                prop_assert!((0.2..=0.8).contains(&w));
            }
        }
    }

    #[test]
    fn prop_round_robin_fair(k in 1usize..6, rounds in 1usize..20) {
        let mut open = AlternationOpenList::from_queues(fifo_queues(k), &AlternationConfig::default()).unwrap();
        fill(&mut open, (rounds + 1) as u32);
        for _ in 0..(k * rounds) {
            open.remove_min(None).unwrap();
        }
        for i in 0..k {
            prop_assert_eq!(open.statistics().selection_count(i), rounds as u64);
        }
    }
}

#[test]
fn test_uniform_start_below_minimum_weight_is_rejected() {
    let result = AlternationOpenList::<u32, ()>::from_queues(
        fifo_queues(6),
        &weighted_config(vec![1.0 / 6.0; 6], 7),
    );
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_six_queues_learn_with_feasible_bounds() {
    let learning = LearningConfig::default().with_weight_bounds(0.1, 0.8);
    let config = weighted_config(vec![1.0 / 6.0; 6], 7).with_learning(learning.clone());
    let mut open = AlternationOpenList::from_queues(fifo_queues(6), &config).unwrap();
    fill(&mut open, 120);

    drive_with_feedback(&mut open, 100);

    assert!(open.statistics().updates_applied() > 0);
    assert_weight_invariants(open.weights(), &learning);
}

#[test]
fn test_insertion_error_stops_fan_out() {
    let queues = verdict_queues(&[
        Verdict::new(),
        Verdict::new().rejecting_inserts(),
        Verdict::new(),
    ]);
    let mut open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();

    let err = open.insert(&(), 1).unwrap_err();

    assert!(matches!(err, OpenListError::Insertion(_)));
    assert_eq!(open.queue(0).unwrap().len(), 1);
    assert_eq!(open.queue(2).unwrap().len(), 0);
}

#[test]
fn test_insertion_error_passes_through_nesting() {
    let inner_sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> = vec![
        Arc::new(FifoFactory::new()),
        Arc::new(FifoFactory::with_verdict(Verdict::new().rejecting_inserts())),
    ];
    let inner =
        AlternationOpenListFactory::new(inner_sublists, AlternationConfig::default()).unwrap();
    let outer_sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> =
        vec![Arc::new(inner), Arc::new(FifoFactory::new())];
    let mut open = AlternationOpenListFactory::new(outer_sublists, AlternationConfig::default())
        .unwrap()
        .create();

    match open.insert(&(), 3) {
        Err(OpenListError::Insertion(msg)) => assert!(msg.contains("rejects entries")),
        other => panic!("expected insertion error, got {:?}", other),
    }
}

#[test]
fn test_removal_without_feedback_keeps_weights() {
    init_test_tracing();
    let sublists: Vec<Arc<dyn OpenListFactory<u32, ()>>> =
        vec![Arc::new(FifoFactory::new()), Arc::new(FifoFactory::new())];
    let factory =
        AlternationOpenListFactory::new(sublists, weighted_config(vec![0.6, 0.4], 5)).unwrap();
    let mut open = factory.create();
    fill(&mut open, 20);

    for _ in 0..20 {
        OpenList::remove_min(&mut open).unwrap();
    }

    assert_eq!(open.weights(), &[0.6, 0.4]);
    assert_eq!(open.statistics().updates_applied(), 0);
    assert_eq!(open.statistics().removals(), 20);

    let mut boxed = factory.create_open_list();
    boxed.insert(&(), 1).unwrap();
    assert_eq!(boxed.remove_min().unwrap(), 1);
}
