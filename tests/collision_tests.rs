use microcosm_physics::*;

#[test]
fn player_enemy_contact_attaches_the_event_to_the_player() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::default();

    let player = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::ZERO))
            .with_tags(Tags::player()),
    );
    let enemy = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::new(5.0, 0.0)))
            .with_tags(Tags::enemy()),
    );

    let events = world.step(16.0, &view);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, CollisionKind::PlayerWithEnemy);
    assert_eq!(events[0].entity, player);
    assert_eq!(events[0].other, Some(enemy));
}

#[test]
fn crossing_bullets_emit_one_event_per_side() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::default();

    let mine = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::ZERO))
            .with_tags(Tags::player_bullet()),
    );
    let theirs = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::new(4.0, 0.0)))
            .with_tags(Tags::enemy_bullet()),
    );

    let events = world.step(16.0, &view);
    let bullet_events: Vec<_> = events
        .iter()
        .filter(|event| event.kind == CollisionKind::BulletWithBullet)
        .collect();
    assert_eq!(bullet_events.len(), 2);
    assert!(bullet_events
        .iter()
        .any(|event| event.entity == mine && event.other == Some(theirs)));
    assert!(bullet_events
        .iter()
        .any(|event| event.entity == theirs && event.other == Some(mine)));
}

#[test]
fn an_attachment_never_collides_with_its_parent() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::default();

    // An enemy-tagged boss arm overlapping its enemy-tagged owner would
    // classify as EnemyWithEnemy if the pair were not excluded.
    let boss = world.spawn(Body::new().with_tags(Tags::enemy()));
    let mut arm =
        Body::new().with_attachment(Attachment::new(AttachmentKind::BossArm, boss));
    arm.tags = Tags::enemy();
    world.spawn(arm);

    let events = world.step(16.0, &view);
    assert!(events.is_empty());
}

#[test]
fn distant_pairs_are_culled_but_boundary_still_fires() {
    let mut world = PhysicsWorld::new();
    // Camera parked at the origin; the far pair is way off-screen.
    let view = ViewState::centered_on(Vec2::ZERO);

    let far = Vec2::new(9_996.0, 0.0);
    world.spawn(
        Body::new()
            .with_transform(Transform::from_position(far))
            .with_tags(Tags::enemy()),
    );
    world.spawn(
        Body::new()
            .with_transform(Transform::from_position(far + Vec2::new(4.0, 0.0)))
            .with_tags(Tags::enemy()),
    );

    let events = world.step(16.0, &view);
    assert!(events
        .iter()
        .all(|event| event.kind == CollisionKind::WithBoundary));
    assert_eq!(events.len(), 2);
}

#[test]
fn projectiles_get_their_own_boundary_event() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::centered_on(Vec2::new(9_999.0, 0.0));

    let bullet = world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::new(9_999.0, 0.0)))
            .with_tags(Tags::player_bullet()),
    );

    let events = world.step(16.0, &view);
    assert!(events
        .iter()
        .any(|event| event.kind == CollisionKind::BulletWithBoundary && event.entity == bullet));
}

#[test]
fn cysts_ignore_the_map_boundary() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::centered_on(Vec2::new(9_999.0, 0.0));

    world.spawn(
        Body::new()
            .with_transform(Transform::from_position(Vec2::new(9_999.0, 0.0)))
            .with_tags(Tags {
                cyst: true,
                collides_players: true,
                ..Tags::default()
            }),
    );

    let events = world.step(16.0, &view);
    assert!(events.is_empty());
}

#[test]
fn region_bounce_reports_knockback_during_boss_fight() {
    let mut world = PhysicsWorld::new();
    let mut view = ViewState::centered_on(Vec2::new(500.0, 0.0));
    view.boss_active = true;
    view.region_angles = (0..6)
        .map(|i| i as f32 * std::f32::consts::TAU / 6.0)
        .collect();

    let mut player = Body::new()
        .with_transform(Transform {
            position: Vec2::new(500.0, 4.0),
            scale: Vec2::splat(20.0),
            ..Transform::default()
        })
        .with_tags(Tags::player());
    player.motion.velocity = Vec2::new(0.0, -100.0);
    let player = world.spawn(player);

    let events = world.detect_collisions(&view);
    let bounce = events
        .iter()
        .find(|event| event.kind == CollisionKind::PlayerWithRegionBoundary)
        .expect("player pressed into the wedge edge should bounce");
    assert_eq!(bounce.entity, player);
    let knockback = bounce.knockback.expect("bounce carries a knockback");
    assert!(knockback.y > 0.0);

    // Without an active boss the same setup reports nothing.
    view.boss_active = false;
    assert!(world.detect_collisions(&view).is_empty());
}

#[test]
fn mesh_precision_beats_the_circle_cover() {
    use std::sync::Arc;

    // A thin diagonal sliver whose circle cover would report contact long
    // before the actual geometry does.
    let sliver = Arc::new(CollisionMesh::triangle(
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.5, 0.4),
    ));

    let mut world = PhysicsWorld::new();
    let view = ViewState::default();
    world.spawn(
        Body::new()
            .with_transform(Transform {
                scale: Vec2::splat(40.0),
                ..Transform::default()
            })
            .with_tags(Tags::player())
            .with_mesh(sliver),
    );
    // An enemy sitting inside the mesh's bounding square but away from the
    // diagonal: circles overlap, the mesh does not reach it.
    let enemy_position = Vec2::new(-12.0, 12.0);
    let enemy = world.spawn(
        Body::new()
            .with_transform(Transform {
                position: enemy_position,
                scale: Vec2::splat(4.0),
                ..Transform::default()
            })
            .with_tags(Tags::enemy()),
    );

    let events = world.detect_collisions(&view);
    assert!(events.is_empty());

    // Slide the enemy onto the diagonal and the contact appears.
    world.body_mut(enemy).unwrap().transform.position = Vec2::new(5.0, 5.0);
    let events = world.detect_collisions(&view);
    assert!(events
        .iter()
        .any(|event| event.kind == CollisionKind::PlayerWithEnemy));
}

#[test]
fn hud_entities_never_participate() {
    let mut world = PhysicsWorld::new();
    let view = ViewState::default();

    let mut meter = Body::new().with_tags(Tags::enemy());
    meter.transform.is_screen_coord = true;
    world.spawn(meter);
    world.spawn(Body::new().with_tags(Tags::player()));

    let events = world.step(16.0, &view);
    assert!(events.is_empty());
}
