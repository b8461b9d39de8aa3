use nest_engine::Engine;

#[test]
fn perf_smoke_step() {
    let mut engine = Engine::new(1280.0, 720.0);
    engine.enable_perf_metrics(true);
    for i in 0..4 {
        engine.add_body(200.0 + 10.0 * i as f32, 140.0, i);
    }
    engine.step(16.0);
    let stats = engine.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.pairs_checked(), 6);
    assert_eq!(engine.body_transforms_len(), 4 * nest_engine::simulation::BODY_STRIDE);
    assert_eq!(engine.egg_count(), 6);
}

#[test]
fn frame_callbacks_follow_visibility() {
    let mut engine = Engine::new(800.0, 600.0);
    engine.add_body(160.0, 100.0, 2);

    assert!(engine.running());
    assert!(engine.frame_at(0.0));
    engine.set_visible(false);
    assert!(!engine.frame_at(16.0));
    engine.set_visible(true);
    assert!(engine.frame_at(32.0));
    assert_eq!(engine.frame(), 2);
}

#[test]
fn snapshot_lists_every_body() {
    let mut engine = Engine::new(800.0, 600.0);
    let a = engine.add_body(160.0, 100.0, 1);
    let b = engine.add_body(120.0, 120.0, 0);
    engine.step(16.0);

    let json: serde_json::Value = serde_json::from_str(&engine.snapshot_json()).unwrap();
    let bodies = json["bodies"].as_array().unwrap();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["id"], a);
    assert_eq!(bodies[1]["id"], b);
    assert_eq!(bodies[0]["eggs"].as_array().unwrap().len(), 1);
    assert_eq!(json["clock"], "Running");
}
