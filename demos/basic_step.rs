use microcosm_physics::*;

fn main() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::default();

    let mut player = Body::new().with_tags(Tags::player());
    player.motion.force = Vec2::new(1.0, 0.0);
    let player = world.spawn(player);

    let enemy = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::new(120.0, 0.0)))
            .with_tags(Tags::enemy()),
    );

    for frame in 0..120 {
        // The caller owns the force accumulators: steer the enemy toward the
        // player each frame, the way an AI system would.
        let chase = world.body(player).unwrap().transform.position
            - world.body(enemy).unwrap().transform.position;
        world.body_mut(enemy).unwrap().motion.force = chase.normalize_or_zero();

        let events = world.step(1000.0 / 60.0, &view);
        for event in &events {
            println!("frame {frame}: {:?}", event.kind);
        }
    }

    let position = world.body(player).unwrap().transform.position;
    println!("player ended at {position:?}");
}
