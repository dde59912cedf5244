use tileworld_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new();
    world.enable_perf_metrics(true);
    for _ in 0..120 {
        world.step(1.0 / 60.0, false, true, false);
    }
    world.extract_viewport();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.chunks_loaded() >= 1);
    assert!(world.loaded_chunks() >= 1);
}

#[test]
fn facade_rejects_unknown_tile_ids() {
    let mut world = World::new();
    assert!(world.set_tile(3, 3, 2));
    assert_eq!(world.get_tile(3, 3), 2);

    assert!(!world.set_tile(3, 3, 7));
    assert_eq!(world.get_tile(3, 3), 2);

    assert!(!world.set_tile(3, -1, 1));
    assert_eq!(world.get_tile(3, -1), 0);
}

#[test]
fn facade_viewport_dimensions_match_buffer() {
    let mut world = World::new();
    world.set_viewport_size(640.0, 480.0);
    let n = world.extract_viewport();

    assert_eq!(n, (world.viewport_columns() * world.viewport_rows()) as usize);
    assert!(!world.viewport_ptr().is_null());
    // Camera x = 100 - 320 = -220 -> tile -7, one column of slack
    assert_eq!(world.viewport_min_x(), -8);
}
