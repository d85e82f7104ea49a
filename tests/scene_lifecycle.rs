use glam::Vec2;
use tron::config::GameConfig;
use tron::controller::{HostError, SceneController, SceneError, SceneHost, SceneState};
use tron::model::{ScoreEntry, ScoreError};
use tron::view::LocalHost;

fn host(config: &GameConfig) -> LocalHost {
    LocalHost::from_config(config)
}

#[test]
fn create_seeds_roster_and_spawns_at_center() {
    let config = GameConfig::default();
    let mut host = host(&config);
    let scene = SceneController::create(&config, &mut host).unwrap();

    assert_eq!(scene.state(), SceneState::Active);
    assert_eq!(
        scene.registry().list_users(),
        &[ScoreEntry::new("test", "#123"), ScoreEntry::new("test2", "#321")]
    );
    let body = host.body(scene.entity()).unwrap();
    assert_eq!(body.pos, Vec2::new(960.0, 960.0));
    assert_eq!(host.subscriptions, vec![scene.pointer_subscription()]);
}

#[test]
fn roster_is_drawn_fixed_to_camera() {
    let config = GameConfig::default();
    let mut host = host(&config);
    let scene = SceneController::create(&config, &mut host).unwrap();

    assert_eq!(scene.roster_text().len(), 2);
    assert_eq!(host.texts[0].text, "test");
    assert_eq!(host.texts[0].at, Vec2::new(10.0, 0.0));
    assert_eq!(host.texts[1].style.fill, "#321");
    assert!(host.texts.iter().all(|t| t.style.fixed_to_camera));
}

#[test]
fn tick_applies_velocity_from_held_keys() {
    let config = GameConfig::default();
    let mut host = host(&config);
    let mut scene = SceneController::create(&config, &mut host).unwrap();

    host.press("ArrowDown");
    host.press("ArrowRight");
    scene.tick(&mut host);
    assert_eq!(host.velocity_commands.last(), Some(&(scene.entity(), Vec2::new(300.0, 300.0))));

    host.release("ArrowDown");
    host.release("ArrowRight");
    scene.tick(&mut host);
    assert_eq!(host.body(scene.entity()).unwrap().vel, Vec2::ZERO);
}

#[test]
fn pointer_down_ends_scene_once() {
    let config = GameConfig::default();
    let mut host = host(&config);
    let mut scene = SceneController::create(&config, &mut host).unwrap();

    assert!(scene.pointer_down(&mut host));
    assert_eq!(scene.state(), SceneState::Ended);
    assert!(!scene.pointer_down(&mut host));
    assert_eq!(host.scene_switches, vec!["gameover".to_string()]);
}

#[test]
fn ended_scene_ignores_ticks() {
    let config = GameConfig::default();
    let mut host = host(&config);
    let mut scene = SceneController::create(&config, &mut host).unwrap();
    scene.pointer_down(&mut host);

    host.press("ArrowUp");
    scene.tick(&mut host);
    assert!(host.velocity_commands.is_empty());
}

#[test]
fn spawn_failure_fails_scene_creation() {
    let config = GameConfig::default();
    let mut host = host(&config);
    host.fail_spawn = Some("no sprite".into());

    let err = SceneController::create(&config, &mut host).unwrap_err();
    assert!(matches!(err, SceneError::Spawn(HostError::SpawnFailed { .. })));
    assert!(host.subscriptions.is_empty());
}

#[test]
fn empty_seed_name_fails_scene_creation() {
    let config = GameConfig {
        roster: vec![ScoreEntry::new("ok", "#fff"), ScoreEntry::new("", "#000")],
        ..GameConfig::default()
    };
    let mut host = host(&config);
    let err = SceneController::create(&config, &mut host).unwrap_err();
    assert_eq!(err, SceneError::Roster(ScoreError::EmptyName));
    assert_eq!(host.entity_count(), 0);
}

#[test]
fn world_bounds_come_from_config() {
    let config = GameConfig {
        world: tron::model::WorldBounds::new(400.0, 200.0),
        ..GameConfig::default()
    };
    let mut host = host(&config);
    let scene = SceneController::create(&config, &mut host).unwrap();
    assert_eq!(host.body(scene.entity()).unwrap().pos, Vec2::new(200.0, 100.0));
    host.switch_scene("noop");
    assert_eq!(host.scene_switches.len(), 1);
}
