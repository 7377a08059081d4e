//! Properties that must hold for every reachable session

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skyline_flyer::Settings;
use skyline_flyer::consts::{OBSTACLE_COUNT, OBSTACLE_LAYOUT};
use skyline_flyer::sim::{GamePhase, GameState, Scale, tick};

fn new_state(height: u32, seed: u64) -> GameState {
    let mut state = GameState::new(Vec2::new(1280.0, height as f32), &Settings::default(), seed)
        .expect("default settings");
    state.start();
    state
}

/// Run a jump schedule; stops early when the run ends
fn play(state: &mut GameState, jumps: &[bool], mut check: impl FnMut(&GameState)) {
    for &jump in jumps {
        if jump {
            state.jump();
        }
        tick(state);
        check(state);
        if !state.is_running() {
            break;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn actor_stays_between_ceiling_and_floor(
        seed in any::<u64>(),
        height in 200u32..1200,
        jumps in prop::collection::vec(prop::bool::weighted(0.08), 0..1500),
    ) {
        let mut state = new_state(height, seed);
        let floor = state.floor();
        play(&mut state, &jumps, |s| {
            assert!(s.actor.pos.y >= 0.0, "actor above ceiling: {}", s.actor.pos.y);
            assert!(
                s.actor.pos.y + s.actor.size.y <= floor,
                "actor below floor: {} + {} > {}",
                s.actor.pos.y,
                s.actor.size.y,
                floor
            );
        });
    }

    #[test]
    fn pool_stays_sorted_and_full(
        seed in any::<u64>(),
        height in 200u32..1200,
        jumps in prop::collection::vec(prop::bool::weighted(0.08), 0..1500),
    ) {
        let mut state = new_state(height, seed);
        play(&mut state, &jumps, |s| {
            assert_eq!(s.obstacles.len(), OBSTACLE_COUNT);
            assert_eq!(s.obstacles.iter().count(), OBSTACLE_COUNT);
            assert!(s.obstacles.is_sorted());
        });
    }

    #[test]
    fn pool_recycles_forever_without_a_player(seed in any::<u64>(), ticks in 0usize..5_000) {
        let mut state = new_state(720, seed);
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..ticks {
            state.obstacles.advance(2.0, &mut rng);
            prop_assert!(state.obstacles.is_sorted());
            prop_assert_eq!(state.obstacles.len(), OBSTACLE_COUNT);
        }
    }

    #[test]
    fn score_is_monotonic(
        seed in any::<u64>(),
        jumps in prop::collection::vec(prop::bool::weighted(0.08), 0..1500),
    ) {
        let mut state = new_state(720, seed);
        let mut last = 0;
        play(&mut state, &jumps, |s| {
            assert!(s.score >= last);
            last = s.score;
        });
    }

    #[test]
    fn restart_restores_authored_course(
        seed in any::<u64>(),
        height in 200u32..1200,
        jumps in prop::collection::vec(prop::bool::weighted(0.08), 0..1500),
    ) {
        let mut state = new_state(height, seed);
        let start_pos = state.actor.pos;
        play(&mut state, &jumps, |_| {});

        state.start();
        prop_assert_eq!(state.phase, GamePhase::Running);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.actor.pos, start_pos);
        prop_assert_eq!(state.actor.vel, Vec2::ZERO);

        let scale = Scale::new(height as f32);
        for (o, (x, y)) in state.obstacles.iter().zip(OBSTACLE_LAYOUT) {
            prop_assert_eq!(o.pos, Vec2::new(x, scale.apply(y)));
            prop_assert!(!o.passed);
        }
    }
}

#[test]
fn same_seed_same_course() {
    let jumps: Vec<bool> = (0..3000).map(|i| i % 23 == 0).collect();
    let mut a = new_state(720, 77);
    let mut b = new_state(720, 77);
    play(&mut a, &jumps, |_| {});
    play(&mut b, &jumps, |_| {});

    assert_eq!(a.score, b.score);
    assert_eq!(a.phase, b.phase);
    let xs_a: Vec<f32> = a.obstacles.iter().map(|o| o.pos.x).collect();
    let xs_b: Vec<f32> = b.obstacles.iter().map(|o| o.pos.x).collect();
    assert_eq!(xs_a, xs_b);
}
