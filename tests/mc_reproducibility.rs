//! End-to-end pipeline tests: simulate, evaluate, discount, gather.

use ferromc::engines::monte_carlo::{ExoticMcEngine, VanillaMcEngine};
use ferromc::instruments::{ArithmeticAsianOption, VanillaOption, VanillaPayoff};
use ferromc::market::ConstantParameter;
use ferromc::math::normal_cdf;
use ferromc::random::{Antithetic, ParkMillerGenerator, VariateGenerator};
use ferromc::stats::{ConvergenceTable, MeanGatherer, StatisticsGatherer};

fn reference_call_price(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = ((s0 / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    s0 * normal_cdf(d1) - k * (-r * t).exp() * normal_cdf(d2)
}

/// The book-style scenario: S0 = 100, K = 90, sigma = 0.5, r = 0.02,
/// T = 30, 20 scenarios, fixed seed.
fn book_scenario_run(seed: u64) -> (Vec<Vec<f64>>, usize) {
    let engine = VanillaMcEngine::new(
        100.0,
        ConstantParameter::new(0.02),
        ConstantParameter::new(0.5),
    );
    let option = VanillaOption::new(VanillaPayoff::call(90.0), 30.0);

    let mut gatherer = ConvergenceTable::new(Box::new(MeanGatherer::new()));
    engine
        .price(
            &option,
            ParkMillerGenerator::new(1, seed),
            &mut gatherer,
            20,
        )
        .expect("pricing succeeds");
    (gatherer.results_so_far(), gatherer.sims_so_far())
}

#[test]
fn same_seed_end_to_end_runs_are_identical() {
    let (rows_a, sims_a) = book_scenario_run(1);
    let (rows_b, sims_b) = book_scenario_run(1);

    assert_eq!(sims_a, 20);
    assert_eq!(sims_a, sims_b);
    assert_eq!(rows_a, rows_b);
}

#[test]
fn different_seeds_change_the_report() {
    let (rows_a, _) = book_scenario_run(1);
    let (rows_b, _) = book_scenario_run(2);
    assert_ne!(rows_a, rows_b);
}

#[test]
fn convergence_rows_hit_every_doubling_checkpoint() {
    let (rows, sims) = book_scenario_run(1);

    let counts: Vec<f64> = rows.iter().map(|r| r[r.len() - 1]).collect();
    assert_eq!(counts, vec![1.0, 2.0, 4.0, 8.0, 16.0, 20.0]);
    assert!(counts.iter().all(|&c| c <= sims as f64));
}

#[test]
fn all_three_generator_choices_price_the_same_contract() {
    let engine = VanillaMcEngine::new(
        100.0,
        ConstantParameter::new(0.05),
        ConstantParameter::new(0.2),
    );
    let option = VanillaOption::new(VanillaPayoff::call(100.0), 1.0);
    let reference = reference_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
    let n = 100_000;

    let mut park_miller = MeanGatherer::new();
    engine
        .price(&option, ParkMillerGenerator::new(1, 1), &mut park_miller, n)
        .expect("pricing succeeds");

    let mut antithetic = MeanGatherer::new();
    engine
        .price(
            &option,
            Antithetic::new(ParkMillerGenerator::new(1, 1)),
            &mut antithetic,
            n,
        )
        .expect("pricing succeeds");

    let mut built_in = MeanGatherer::new();
    engine
        .price_with_default_generator(&option, 1, &mut built_in, n)
        .expect("pricing succeeds");

    for gatherer in [&park_miller, &antithetic, &built_in] {
        let mc = gatherer.results_so_far()[0][0];
        let rel_err = ((mc - reference) / reference).abs();
        assert!(rel_err <= 0.03, "mc={mc} reference={reference}");
    }
}

#[test]
fn asian_pipeline_is_reproducible_and_sane() {
    let fixings: Vec<f64> = (1..=12).map(|m| m as f64 / 12.0).collect();
    let option = ArithmeticAsianOption::new(fixings, 1.0, VanillaPayoff::call(100.0))
        .expect("valid contract");
    let rate = ConstantParameter::new(0.05);
    let vol = ConstantParameter::new(0.2);

    let mut run = |seed: u64| {
        let mut engine = ExoticMcEngine::with_default_generator(&option, 100.0, &rate, &vol, seed)
            .expect("valid engine");
        let mut gatherer = ConvergenceTable::new(Box::new(MeanGatherer::new()));
        engine.run(&mut gatherer, 4_096);
        gatherer.results_so_far()
    };

    let rows = run(42);
    assert_eq!(rows, run(42));

    // Checkpoints 1, 2, ..., 4096 with no trailing row.
    assert_eq!(rows.len(), 13);
    let price = rows[rows.len() - 1][0];
    let vanilla_reference = reference_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
    assert!(price > 0.0 && price < vanilla_reference);
}

#[test]
fn generator_passed_to_one_run_leaves_the_callers_copy_alone() {
    let engine = VanillaMcEngine::new(
        100.0,
        ConstantParameter::new(0.02),
        ConstantParameter::new(0.5),
    );
    let option = VanillaOption::new(VanillaPayoff::call(90.0), 30.0);

    let caller_copy = ParkMillerGenerator::new(1, 9);
    let mut gatherer = MeanGatherer::new();
    engine
        .price(&option, caller_copy.clone(), &mut gatherer, 100)
        .expect("pricing succeeds");

    // The caller's generator still starts its stream from the top.
    let mut replay = caller_copy;
    let mut fresh = ParkMillerGenerator::new(1, 9);
    let mut a = [0.0];
    let mut b = [0.0];
    replay.uniforms(&mut a);
    fresh.uniforms(&mut b);
    assert_eq!(a, b);
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use ferromc::engines::monte_carlo::price_vanilla_parallel;

    #[test]
    fn parallel_pipeline_is_reproducible_and_converges() {
        let option = VanillaOption::new(VanillaPayoff::call(100.0), 1.0);
        let rate = ConstantParameter::new(0.05);
        let vol = ConstantParameter::new(0.2);

        let mut run = |seed: u64| {
            let mut gatherer = ConvergenceTable::new(Box::new(MeanGatherer::new()));
            price_vanilla_parallel(&option, 100.0, &rate, &vol, seed, &mut gatherer, 100_000)
                .expect("pricing succeeds");
            gatherer.results_so_far()
        };

        let rows = run(42);
        assert_eq!(rows, run(42));

        let mc = rows[rows.len() - 1][0];
        let reference = reference_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
        assert!(((mc - reference) / reference).abs() <= 0.02);
    }
}
