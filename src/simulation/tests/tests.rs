use super::*;
use crate::domain::palette::{BLUE, SETTLED};
use crate::systems::shape::SpawnOptions;

fn bounded() -> SimulationCore {
    SimulationCore::new(Vec::new(), Some(Point::new(100.0, 100.0)))
}

fn opts(vx: f64, vy: f64, radius: f64) -> SpawnOptions {
    SpawnOptions::default().velocity(vx, vy).radius(radius)
}

/// Five immune r=3 bodies stacked diagonally from (3,3), all with velocity (2,2)
fn crowded() -> SimulationCore {
    let mut sim = bounded();
    for num in 0..5u32 {
        let p = Point::new(num as f64 / 2.0 + 3.0, num as f64 / 2.0 + 3.0);
        sim.spawn(p, num, opts(2.0, 2.0, 3.0).color(BLUE).immunity(10));
    }
    sim
}

#[test]
fn spawn_appends_in_order_with_given_values() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(10.0, 20.0), 1, opts(1.0, 2.0, 4.0));
    assert_eq!(h.index(), 0);
    let b = sim.body(h).unwrap();
    assert_eq!(b.position, Point::new(10.0, 20.0));
    assert_eq!((b.velocity_x, b.velocity_y), (1.0, 2.0));
    assert_eq!(b.immunity, 10);
    assert_eq!(sim.body_count(), 1);
}

#[test]
fn spawn_defaults_come_from_params() {
    let mut sim = bounded();
    for i in 0..200 {
        sim.spawn(Point::new(50.0, 50.0), i, SpawnOptions::default());
    }
    let params = PhysicsParams::default();
    for b in sim.items() {
        assert!(b.velocity_x.abs() >= 5.0 && b.velocity_x.abs() < 10.0);
        assert!(b.velocity_y.abs() >= 1.0 && b.velocity_y.abs() < 3.0);
        assert!(b.radius() >= 5.0 && b.radius() < 15.0);
        assert_eq!(b.radius(), b.radius().trunc());
        assert!(params.palette.contains(&b.color));
    }
}

#[test]
fn move_applies_own_velocity() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(10.0, 20.0), 99, opts(1.0, 2.0, 1.0));
    sim.move_body(h, None, None, 0);
    assert_eq!(sim.body(h).unwrap().position, Point::new(11.0, 22.0));

    let h = sim.spawn(Point::new(10.0, 20.0), 98, opts(-1.0, -2.0, 1.0));
    sim.move_body(h, None, None, 0);
    assert_eq!(sim.body(h).unwrap().position, Point::new(9.0, 18.0));
}

#[test]
fn immune_neighbour_is_not_pushed() {
    let mut sim = bounded();
    let a = sim.spawn(Point::new(10.0, 20.0), 99, opts(1.0, 2.0, 1.0));
    let b = sim.spawn(Point::new(15.0, 25.0), 99, opts(1.0, 2.0, 1.0));
    sim.move_body(b, None, None, 0);
    sim.move_body(b, None, None, 0);
    assert_eq!(sim.body(a).unwrap().position, Point::new(10.0, 20.0));
    assert_eq!(sim.body(b).unwrap().position, Point::new(17.0, 29.0));
}

#[test]
fn wall_and_floor_reverse_velocity() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(98.0, 20.0), 1, opts(10.0, 2.0, 1.0));
    sim.move_body(h, None, None, 0);
    assert_eq!(sim.body(h).unwrap().velocity_x, -10.0);

    let h = sim.spawn(Point::new(10.0, 98.0), 2, opts(1.0, 10.0, 1.0));
    sim.move_body(h, None, None, 0);
    assert_eq!(sim.body(h).unwrap().velocity_y, -10.0);
}

#[test]
fn without_boundary_velocity_is_untouched() {
    let mut sim = bounded();
    sim.set_boundary(None);
    assert_eq!(sim.body_limit(), None);
    let h = sim.spawn(Point::new(98.0, 98.0), 1, opts(20.0, 10.0, 1.0));
    for step in 1..=3 {
        sim.move_body(h, None, None, 0);
        let b = sim.body(h).unwrap();
        assert_eq!((b.velocity_x, b.velocity_y), (20.0, 10.0));
        assert_eq!(b.position, Point::new(98.0 + 20.0 * step as f64, 98.0 + 10.0 * step as f64));
    }
}

#[test]
fn repeated_moves_stay_inside_boundary() {
    let mut sim = bounded();
    let handles: Vec<BodyHandle> = (0..6)
        .map(|i| {
            let p = Point::new(10.0 + 15.0 * i as f64, 50.0);
            sim.spawn(p, i, opts(7.5 - i as f64 * 2.5, 3.0 + i as f64, 4.0))
        })
        .collect();

    for _ in 0..500 {
        for h in &handles {
            sim.move_body(*h, None, None, 0);
        }
        for b in sim.items() {
            let r = b.radius();
            assert!(b.position.x >= r && b.position.x <= 100.0 - r);
            assert!(b.position.y >= r && b.position.y <= 100.0 - r);
        }
    }
}

#[test]
fn stale_handle_is_ignored() {
    let mut sim = bounded();
    assert!(sim.move_body(BodyHandle(3), None, None, 0).is_none());
    sim.handle_collision(BodyHandle(3), 0);
}

#[test]
fn depth_guard_skips_the_move() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(10.0, 20.0), 1, opts(1.0, 2.0, 1.0));
    sim.move_body(h, None, None, 21);
    assert_eq!(sim.body(h).unwrap().position, Point::new(10.0, 20.0));
    sim.move_body(h, None, None, 20);
    assert_eq!(sim.body(h).unwrap().position, Point::new(11.0, 22.0));
}

#[test]
fn spawned_bodies_are_registered_with_unique_ids() {
    let sim = crowded();
    assert_eq!(sim.body_count(), 5);
    let mut ids: Vec<u32> = sim.items().iter().map(|b| b.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn attenuate_changes_every_moving_body() {
    let mut sim = crowded();
    let before: Vec<(f64, f64)> = sim.items().iter().map(|b| (b.velocity_x, b.velocity_y)).collect();
    sim.attenuate();
    for (b, old) in sim.items().iter().zip(before) {
        assert_ne!((b.velocity_x, b.velocity_y), old);
        assert_eq!(b.immunity, 9);
    }
}

#[test]
fn attenuate_leaves_stopped_bodies_alone() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(50.0, 95.0), 0, opts(0.0, 0.0, 5.0).immunity(3));
    sim.attenuate();
    let b = sim.body(h).unwrap();
    assert_eq!(b.immunity, 3);
    assert_eq!((b.velocity_x, b.velocity_y), (0.0, 0.0));
}

#[test]
fn candidates_exclude_immune_bodies() {
    let mut sim = crowded();
    assert!(sim.find_collision_candidates().is_empty());

    sim.body_mut(BodyHandle(0)).unwrap().immunity = -1;
    sim.body_mut(BodyHandle(1)).unwrap().immunity = -1;
    let ids: Vec<u32> = sim.find_collision_candidates().iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn collisions_for_item_follow_candidate_order() {
    let mut sim = crowded();
    for i in 0..3 {
        sim.body_mut(BodyHandle(i)).unwrap().immunity = -1;
    }
    let item = sim.body(BodyHandle(1)).unwrap().clone();
    let ids: Vec<u32> = sim
        .find_all_collision_items_for_item(&item)
        .iter()
        .map(|b| b.id())
        .collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn handle_collision_does_not_spawn() {
    let mut sim = crowded();
    let h = sim.spawn(Point::new(2.0, 2.0), 5, SpawnOptions::default().velocity(5.0, 2.0));
    let count = sim.body_count();
    sim.handle_collision(h, 1);
    assert_eq!(sim.body_count(), count);
}

#[test]
fn collision_pushes_target_and_bounces_mover() {
    let mut sim = SimulationCore::new(Vec::new(), Some(Point::new(200.0, 200.0)));
    let mover = sim.spawn(Point::new(50.0, 50.0), 0, opts(3.0, 1.0, 5.0).immunity(0));
    let target = sim.spawn(Point::new(58.0, 50.0), 1, opts(0.5, 0.5, 5.0).immunity(0));

    sim.handle_collision(mover, 1);

    // target moved with the mover's velocity, mover bounced back on both axes
    let t = sim.body(target).unwrap();
    assert_eq!(t.position, Point::new(61.0, 51.0));
    let m = sim.body(mover).unwrap();
    assert_eq!((m.velocity_x, m.velocity_y), (-3.0, -1.0));
}

#[test]
fn no_collision_leaves_velocity_alone() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(20.0, 20.0), 0, opts(3.0, 1.0, 5.0).immunity(0));
    sim.spawn(Point::new(80.0, 80.0), 1, opts(1.0, 1.0, 5.0).immunity(0));
    sim.handle_collision(h, 1);
    let b = sim.body(h).unwrap();
    assert_eq!((b.velocity_x, b.velocity_y), (3.0, 1.0));
}

#[test]
fn overlapping_pair_cascade_is_cut_off() {
    // Two bodies on the same spot push each other back and forth until the
    // depth guard stops the chain.
    let mut sim = SimulationCore::new(Vec::new(), Some(Point::new(60.0, 60.0)));
    for i in 0..2 {
        sim.spawn(Point::new(30.0, 30.0), i, opts(4.0, -3.0, 6.0).immunity(0));
    }
    sim.enable_perf_metrics(true);
    sim.set_running(true);
    sim.step(0.0);

    let stats = sim.get_perf_stats();
    assert!(stats.depth_cutoffs() > 0);
    assert!(stats.collisions() > 0);
    for b in sim.items() {
        assert!(b.position.x >= 6.0 && b.position.x <= 54.0);
        assert!(b.position.y >= 6.0 && b.position.y <= 54.0);
    }
}

#[test]
fn slow_body_settles_on_the_floor() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(50.0, 95.0), 0, opts(0.05, 0.3, 5.0));
    sim.move_body(h, None, None, 0);
    let b = sim.body(h).unwrap();
    assert!(b.is_settled());
    assert_eq!(b.color, SETTLED);
    assert_eq!(b.position.y, 95.0);
}

#[test]
fn step_only_runs_while_running_and_attenuates_on_interval() {
    let mut sim = bounded();
    let h = sim.spawn(Point::new(20.0, 20.0), 0, opts(1.0, 1.0, 2.0));

    sim.step(0.0);
    assert_eq!(sim.body(h).unwrap().position, Point::new(20.0, 20.0));

    sim.set_running(true);
    sim.step(0.0);
    assert_eq!(sim.body(h).unwrap().position, Point::new(21.0, 21.0));
    assert_eq!(sim.body(h).unwrap().immunity, 10);

    sim.step(50.0);
    assert_eq!(sim.body(h).unwrap().immunity, 10);

    sim.step(101.0);
    assert_eq!(sim.body(h).unwrap().immunity, 9);
}

#[test]
fn toggle_flips_running() {
    let mut sim = bounded();
    assert!(sim.toggle());
    assert!(sim.is_running());
    assert!(!sim.toggle());
}

#[test]
fn spawn_burst_respects_configured_range_and_starts() {
    let mut sim = SimulationCore::new(Vec::new(), Some(Point::new(1000.0, 1000.0)));
    sim.set_seed(42);
    let spawned = sim.spawn_burst(Point::new(10.0, 10.0));
    assert!((1..10).contains(&spawned));
    assert_eq!(sim.body_count(), spawned as usize);
    assert!(sim.is_running());
    let ids: Vec<u32> = sim.items().iter().map(|b| b.id()).collect();
    assert_eq!(ids, (0..spawned).collect::<Vec<_>>());
}

#[test]
fn spawn_burst_refused_over_limit() {
    let mut sim = SimulationCore::new(Vec::new(), Some(Point::new(100.0, 100.0)));
    // 100 * 100 * 0.3 / 62.83 -> 47
    assert_eq!(sim.body_limit(), Some(47));
    for i in 0..48 {
        sim.spawn(Point::new(50.0, 50.0), i, SpawnOptions::default());
    }
    assert_eq!(sim.spawn_burst(Point::new(10.0, 10.0)), 0);
    assert_eq!(sim.body_count(), 48);
    assert!(!sim.is_running());
}

#[test]
fn restart_clears_everything() {
    let mut sim = bounded();
    sim.spawn_burst(Point::new(10.0, 10.0));
    sim.extract_render_data();
    sim.restart();
    assert_eq!(sim.body_count(), 0);
    assert!(!sim.is_running());
    assert_eq!(sim.render_len(), 0);
}

#[test]
fn resize_drops_settled_bodies_to_new_floor() {
    let mut sim = bounded();
    let settled = sim.spawn(Point::new(50.0, 95.0), 0, opts(0.0, 0.0, 5.0));
    let moving = sim.spawn(Point::new(20.0, 20.0), 1, opts(1.0, 1.0, 5.0));
    sim.cleanup(settled);

    sim.resize(300.0, 200.0);
    assert_eq!(sim.boundary(), Some(Point::new(300.0, 200.0)));
    assert_eq!(sim.body(settled).unwrap().position.y, 195.0);
    assert_eq!(sim.body(moving).unwrap().position.y, 20.0);
}

#[test]
fn load_params_changes_physics() {
    let mut sim = bounded();
    sim.load_params_json(r#"{"gravity": 1.0, "airResistance": 1.0}"#).unwrap();
    let h = sim.spawn(Point::new(20.0, 20.0), 0, opts(1.0, 1.0, 2.0));
    sim.attenuate();
    assert_eq!(sim.body(h).unwrap().velocity_y, 2.0);

    assert!(sim.load_params_json(r#"{"fillRatio": -1}"#).is_err());
    assert_eq!(sim.params().gravity, 1.0);
}

#[test]
fn render_extract_packs_bodies() {
    let mut sim = bounded();
    sim.spawn(Point::new(10.0, 20.0), 0, opts(1.0, 1.0, 3.0).color(BLUE));
    sim.spawn(Point::new(30.0, 40.0), 1, opts(0.0, 0.0, 4.0).color(BLUE));
    sim.cleanup(BodyHandle(1));

    assert_eq!(sim.extract_render_data(), 2);
    let (bodies, colors) = sim.render_data();
    assert_eq!(bodies, &[10.0, 20.0, 3.0, 0.0, 30.0, 40.0, 4.0, 1.0]);
    assert_eq!(colors, &[BLUE, SETTLED]);
    assert_eq!(sim.render_len(), 2 * RENDER_STRIDE);
}

#[test]
fn set_params_validates_before_applying() {
    let mut sim = bounded();
    let mut params = PhysicsParams::default();
    params.max_burst = 0;
    assert!(sim.set_params(params).is_err());
    assert_eq!(sim.params().max_burst, 10);

    let params = PhysicsParams { max_recursion_depth: 0, ..PhysicsParams::default() };
    sim.set_params(params).unwrap();
    let h = sim.spawn(Point::new(10.0, 20.0), 1, opts(1.0, 2.0, 1.0));
    sim.move_body(h, None, None, 1);
    assert_eq!(sim.body(h).unwrap().position, Point::new(10.0, 20.0));
}

#[test]
fn cleanup_uses_loaded_params_like_move() {
    let mut sim = bounded();
    sim.load_params_json(r#"{"settledColor": 16711935, "stopThreshold": 0.5}"#).unwrap();
    let moved = sim.spawn(Point::new(20.0, 95.0), 0, opts(0.3, 0.0, 5.0));
    let cleaned = sim.spawn(Point::new(60.0, 95.0), 1, opts(0.3, 0.0, 5.0));

    sim.move_body(moved, None, None, 0);
    sim.cleanup(cleaned);

    for h in [moved, cleaned] {
        let b = sim.body(h).unwrap();
        assert!(b.is_settled());
        assert_eq!(b.velocity_x, 0.0);
        assert_eq!(b.color, 0xFF00FF);
    }
}

#[test]
fn direct_move_reports_only_its_own_counters() {
    let mut sim = bounded();
    sim.enable_perf_metrics(true);
    let h = sim.spawn(Point::new(20.0, 20.0), 0, opts(1.0, 1.0, 2.0));
    sim.move_body(h, None, None, 0);
    sim.move_body(h, None, None, 0);
    assert_eq!(sim.get_perf_stats().moves(), 1);

    sim.handle_collision(h, 1);
    assert_eq!(sim.get_perf_stats().moves(), 0);
}
