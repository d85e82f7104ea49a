use glam::Vec2;
use tron::app::{ActiveScene, Game};
use tron::config::GameConfig;
use tron::view::LocalHost;

fn game() -> Game<LocalHost> {
    let config = GameConfig::default();
    let host = LocalHost::from_config(&config);
    Game::new(config, host).unwrap()
}

#[test]
fn held_key_moves_entity_and_camera() {
    let mut game = game();
    game.host_mut().press("ArrowLeft");

    // Exactly 0.5s of ticks at 60Hz, one frame per tick
    for _ in 0..30 {
        game.frame(1.0 / 60.0 + 1e-6).unwrap();
    }
    let entity = game.controller().unwrap().entity();
    let pos = game.host().body(entity).unwrap().pos;
    assert!((pos.x - 810.0).abs() < 1.0, "x = {}", pos.x);
    assert_eq!(pos.y, 960.0);
    assert_eq!(game.host().camera.world_to_screen(pos).y, 300.0);
}

#[test]
fn entity_stops_at_world_edge() {
    let mut game = game();
    game.host_mut().press("ArrowUp");
    for _ in 0..400 {
        game.frame(0.05).unwrap();
    }
    let entity = game.controller().unwrap().entity();
    let body = game.host().body(entity).unwrap();
    assert_eq!(body.pos.y, 16.0);
    assert_eq!(game.host().camera.offset.y, 0.0);
}

#[test]
fn click_goes_to_game_over_then_restarts() {
    let mut game = game();
    game.pointer_down().unwrap();
    assert!(matches!(game.scene(), ActiveScene::GameOver(_)));
    assert_eq!(game.scene_name(), "gameover");
    assert_eq!(game.host().entity_count(), 0);
    assert!(game.host().texts.iter().any(|t| t.text == "GAME OVER"));

    game.pointer_down().unwrap();
    assert!(matches!(game.scene(), ActiveScene::Game(_)));
    assert_eq!(game.rounds(), 2);
    assert_eq!(game.controller().unwrap().registry().len(), 2);
    assert_eq!(
        game.host().body(game.controller().unwrap().entity()).unwrap().pos,
        Vec2::new(960.0, 960.0)
    );
    assert_eq!(game.host().scene_switches, vec!["gameover".to_string(), "game".to_string()]);
}

#[test]
fn no_ticks_run_while_game_over() {
    let mut game = game();
    game.pointer_down().unwrap();
    game.host_mut().press("ArrowRight");
    let before = game.host().velocity_commands.len();
    game.frame(0.1).unwrap();
    assert_eq!(game.host().velocity_commands.len(), before);
}

#[test]
fn unsubscribed_game_scene_ignores_pointer() {
    let mut game = game();
    game.host_mut().subscriptions.clear();
    game.pointer_down().unwrap();
    assert!(matches!(game.scene(), ActiveScene::Game(_)));
    assert_eq!(game.scene_name(), "game");
    assert!(game.host().scene_switches.is_empty());
}

#[test]
fn unsubscribed_game_over_screen_ignores_pointer() {
    let mut game = game();
    game.pointer_down().unwrap();
    game.host_mut().subscriptions.clear();
    game.pointer_down().unwrap();
    assert!(matches!(game.scene(), ActiveScene::GameOver(_)));
    assert_eq!(game.rounds(), 1);
    assert_eq!(game.host().scene_switches, vec!["gameover".to_string()]);
}
