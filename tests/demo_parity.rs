//! Demo Parity E2E Tests (Probar methodology)
//!
//! Validates the complexity demos against their operation-count laws and
//! frame invariants across all four classes.
//!
//! # Probar Methodology
//!
//! Each test is designed to falsify a hypothesis about the system:
//! - Tests are deterministic and reproducible
//! - Tests verify invariant properties across the whole frame sequence
//! - Both frontends consume the same sequences, so parity here is parity
//!   everywhere

use bigolab::prelude::*;
use std::time::Duration;

fn frames_json<D: ComplexityDemo>(demo: D) -> String {
    let mut runner = DemoRunner::new(demo);
    let frames = runner.run_to_completion().expect("run");
    serde_json::to_string(&frames).expect("frames serialize")
}

/// Hypothesis to falsify: two demos with the same seed diverge.
#[test]
fn identical_seeds_produce_identical_frame_sequences() {
    for seed in [0, 1, 42, 9999] {
        assert_eq!(
            frames_json(ConstantAccessDemo::new(10, seed)),
            frames_json(ConstantAccessDemo::new(10, seed)),
        );
        assert_eq!(
            frames_json(BinarySearchDemo::new(32, seed)),
            frames_json(BinarySearchDemo::new(32, seed)),
        );
    }
}

/// Hypothesis to falsify: per-demo RNG streams collide, making the O(1)
/// probe and the search target move in lockstep.
#[test]
fn rng_streams_are_independent() {
    let mut constant = ConstantAccessDemo::new(64, 42);
    let mut search = BinarySearchDemo::new(64, 42);
    let mut probes = Vec::new();
    let mut targets = Vec::new();
    for _ in 0..8 {
        constant.begin().expect("begin");
        probes.push(constant.probe().expect("probe"));
        constant.step();
        search.begin().expect("begin");
        targets.push(search.target().expect("target"));
        while search.step() == StepOutcome::Advanced {}
    }
    assert_ne!(probes, targets);
}

/// Hypothesis to falsify: the op counters do not follow their
/// complexity-class laws.
#[test]
fn op_counts_follow_complexity_laws() {
    for n in [2usize, 5, 10, 31, 50] {
        let mut demo = ConstantAccessDemo::new(n, 42);
        demo.begin().expect("begin");
        while demo.step() == StepOutcome::Advanced {}
        assert_eq!(demo.ops_done(), 1, "O(1) with n={n}");

        let mut demo = LinearScanDemo::new(n, 42);
        demo.begin().expect("begin");
        while demo.step() == StepOutcome::Advanced {}
        assert_eq!(demo.ops_done(), n as u64, "O(n) with n={n}");
    }

    for n in [2usize, 3, 7, 12] {
        let mut demo = QuadraticGridDemo::new(n, 42);
        demo.begin().expect("begin");
        while demo.step() == StepOutcome::Advanced {}
        assert_eq!(demo.ops_done(), (n * n) as u64, "O(n\u{b2}) with n={n}");
    }

    for n in [4usize, 16, 33, 64] {
        for seed in 0..20 {
            let mut demo = BinarySearchDemo::new(n, seed);
            demo.begin().expect("begin");
            while demo.step() == StepOutcome::Advanced {}
            let budget = u64::from((n as u64).ilog2()) + 1;
            assert!(
                demo.ops_done() <= budget,
                "O(log n) with n={n} seed={seed}: {} > {budget}",
                demo.ops_done()
            );
        }
    }
}

/// Hypothesis to falsify: the trait object surface and the concrete
/// types report different totals.
#[test]
fn total_ops_matches_class_prediction() {
    let demos: Vec<Box<dyn ComplexityDemo>> = vec![
        Box::new(ConstantAccessDemo::new(20, 42)),
        Box::new(LinearScanDemo::new(20, 42)),
        Box::new(QuadraticGridDemo::new(8, 42)),
        Box::new(BinarySearchDemo::new(32, 42)),
    ];
    for demo in &demos {
        assert_eq!(demo.total_ops(), demo.class().total_ops(demo.size()));
    }
}

/// Hypothesis to falsify: a second run can be armed while one is in
/// flight.
#[test]
fn runs_cannot_overlap() {
    let mut demos: Vec<Box<dyn ComplexityDemo>> = vec![
        Box::new(ConstantAccessDemo::new(10, 42)),
        Box::new(LinearScanDemo::new(10, 42)),
        Box::new(QuadraticGridDemo::new(5, 42)),
        Box::new(BinarySearchDemo::new(16, 42)),
    ];
    for demo in &mut demos {
        demo.begin().expect("first begin");
        let err = demo.begin().expect_err("second begin must fail");
        assert!(err.is_already_running(), "{}", demo.name());
        // Finishing the run frees the guard.
        while demo.step() == StepOutcome::Advanced {}
        demo.begin().expect("begin after finish");
        demo.reset();
    }
}

/// Hypothesis to falsify: resizing mid-run leaves stale run state
/// behind.
#[test]
fn resizing_resets_the_run() {
    let mut demos: Vec<Box<dyn ComplexityDemo>> = vec![
        Box::new(ConstantAccessDemo::new(10, 42)),
        Box::new(LinearScanDemo::new(10, 42)),
        Box::new(QuadraticGridDemo::new(5, 42)),
        Box::new(BinarySearchDemo::new(16, 42)),
    ];
    for demo in &mut demos {
        demo.begin().expect("begin");
        demo.step();
        demo.set_size(7);
        assert!(!demo.is_running(), "{}", demo.name());
        assert_eq!(demo.ops_done(), 0, "{}", demo.name());
        assert_eq!(demo.size(), 7, "{}", demo.name());
    }
}

/// Hypothesis to falsify: frames leak out-of-range highlights.
#[test]
fn frames_stay_in_bounds() {
    let mut demo = LinearScanDemo::new(9, 42);
    demo.begin().expect("begin");
    loop {
        let DemoFrame::Bars(frame) = demo.frame() else {
            panic!("linear demo emits bar frames");
        };
        assert_eq!(frame.slots.len(), 9);
        if demo.step() == StepOutcome::Finished {
            break;
        }
    }

    let mut demo = QuadraticGridDemo::new(4, 42);
    demo.begin().expect("begin");
    loop {
        let DemoFrame::Grid(frame) = demo.frame() else {
            panic!("quadratic demo emits grid frames");
        };
        assert_eq!(frame.cells.len(), 16);
        if demo.step() == StepOutcome::Finished {
            break;
        }
    }
}

/// Hypothesis to falsify: the search window widens or empties during a
/// run.
#[test]
fn search_window_only_narrows() {
    for seed in 0..25 {
        let mut demo = BinarySearchDemo::new(48, seed);
        demo.begin().expect("begin");
        let (mut low, mut high) = demo.window();
        while demo.step() == StepOutcome::Advanced {
            let (l, h) = demo.window();
            assert!(l >= low, "seed {seed}: low moved left");
            assert!(h <= high, "seed {seed}: high moved right");
            assert!(l <= h, "seed {seed}: window emptied");
            (low, high) = (l, h);
        }
        assert_eq!(demo.found(), demo.target(), "seed {seed}");
    }
}

/// Hypothesis to falsify: step delays do not follow the published
/// pacing table.
#[test]
fn pacing_matches_class_delays() {
    assert_eq!(
        ComplexityClass::Constant.step_delay(10),
        Duration::from_millis(500)
    );
    assert_eq!(
        ComplexityClass::Linear.step_delay(10),
        Duration::from_millis(100)
    );
    assert_eq!(
        ComplexityClass::Quadratic.step_delay(10),
        Duration::from_millis(20)
    );
    assert_eq!(
        ComplexityClass::Logarithmic.step_delay(10),
        Duration::from_millis(1000)
    );

    // A linear scan takes about one second end to end regardless of n.
    for n in [5usize, 10, 25, 50] {
        let total = ComplexityClass::Linear.step_delay(n) * u32::try_from(n).expect("small n");
        assert_eq!(total, Duration::from_secs(1), "n={n}");
    }
}

/// Hypothesis to falsify: pacers step faster than their class delay at
/// a realistic tick rate.
#[test]
fn pacer_tick_ratios() {
    let tick = Duration::from_millis(20);
    let cases = [
        (ComplexityClass::Constant, 10, 25),
        (ComplexityClass::Linear, 10, 5),
        (ComplexityClass::Quadratic, 10, 1),
        (ComplexityClass::Logarithmic, 10, 50),
    ];
    for (class, n, ticks) in cases {
        let pacer = StepPacer::new(class, n);
        assert_eq!(pacer.ticks_per_step(tick), ticks, "{class}");
    }
}

/// Hypothesis to falsify: the collected frame sequence misses states or
/// repeats them.
#[test]
fn frame_sequence_lengths() {
    // begin frame + one per step.
    let mut runner = DemoRunner::new(ConstantAccessDemo::new(10, 42));
    assert_eq!(runner.run_to_completion().expect("run").len(), 2);

    let mut runner = DemoRunner::new(LinearScanDemo::new(7, 42));
    assert_eq!(runner.run_to_completion().expect("run").len(), 8);

    let mut runner = DemoRunner::new(QuadraticGridDemo::new(4, 42));
    assert_eq!(runner.run_to_completion().expect("run").len(), 17);

    let mut runner = DemoRunner::new(BinarySearchDemo::new(16, 42));
    let frames = runner.run_to_completion().expect("run");
    let ops = runner.demo().ops_done();
    assert_eq!(frames.len() as u64, ops + 1);
}

/// Hypothesis to falsify: frames serialize asymmetrically between the
/// bar and grid shapes.
#[test]
fn frames_roundtrip_through_serde() {
    let mut runner = DemoRunner::new(BinarySearchDemo::new(16, 42));
    let frames = runner.run_to_completion().expect("run");
    let json = serde_json::to_string(&frames).expect("serialize");
    let restored: Vec<DemoFrame> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(frames, restored);
}
