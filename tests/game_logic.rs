/// Integration tests for game logic
///
/// These tests drive whole frames through [`Game::tick`] and check how
/// players, enemies, lasers and the session interact.
use space_invader::{
    Enemy, EnemyKind, FrameInput, Game, GameConfig, GameMode, GameState, Laser, LaserColor,
};

fn idle() -> FrameInput {
    FrameInput::default()
}

fn single(lives: i32) -> Game {
    let config = GameConfig {
        lives,
        ..GameConfig::default()
    };
    Game::new(config, GameMode::Single, 7)
}

#[test]
fn test_first_frame_spawns_wave_above_screen() {
    let mut game = single(5);
    game.tick(&idle());

    assert_eq!(game.level(), 1);
    assert_eq!(game.enemies.len(), 10);
    for enemy in &game.enemies {
        // Spawned in [-1500, -100] and moved down once
        assert!((-1499..=-99).contains(&enemy.ship.y), "y = {}", enemy.ship.y);
        assert!(enemy.ship.x >= 0 && enemy.ship.x + enemy.ship.width() <= 750);
    }
}

#[test]
fn test_cleared_roster_spawns_bigger_wave() {
    let mut game = single(5);
    for wave in 1..=4u32 {
        game.enemies.clear();
        let events = game.tick(&idle());
        assert_eq!(events.wave_started, Some(wave));
        assert_eq!(game.enemies.len() as u32, 5 + 5 * wave);
    }
}

#[test]
fn test_same_seed_plays_the_same() {
    let mut a = single(5);
    let mut b = single(5);
    for _ in 0..200 {
        a.tick(&idle());
        b.tick(&idle());
    }
    let positions = |game: &Game| -> Vec<(i32, i32, EnemyKind)> {
        game.enemies
            .iter()
            .map(|e| (e.ship.x, e.ship.y, e.kind))
            .collect()
    };
    assert_eq!(positions(&a), positions(&b));
}

/// Positions of every enemy and laser, plus the HUD counters
fn frozen_state(game: &Game) -> (Vec<(i32, i32)>, Vec<(i32, i32)>, i32, u32, u64) {
    let enemies = game.enemies.iter().map(|e| (e.ship.x, e.ship.y)).collect();
    let lasers = game
        .enemies
        .iter()
        .map(|e| &e.ship)
        .chain(game.players.iter().map(|p| &p.ship))
        .flat_map(|ship| ship.lasers.iter().map(|l| (l.x, l.y)))
        .collect();
    (enemies, lasers, game.lives(), game.level(), game.session.frame)
}

#[test]
fn test_enemy_escaping_costs_last_life_then_grace_period() {
    let mut game = single(1);
    game.enemies.push(Enemy::new(600, 700, EnemyKind::Red));
    let mut survivor = Enemy::new(100, 100, EnemyKind::Blue);
    survivor.ship.lasers.push(Laser::new(100, 200, LaserColor::Blue));
    game.enemies.push(survivor);
    game.players[0]
        .ship
        .lasers
        .push(Laser::new(300, 500, LaserColor::Yellow));

    let events = game.tick(&idle());
    assert_eq!(events.lives_lost, 1);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.state(), GameState::Lost);
    assert!(game.snapshot().is_lost());

    let frozen = frozen_state(&game);
    let mut held = idle();
    held.players[0].fire = true;
    held.players[0].left = true;
    let player = (game.players[0].ship.x, game.players[0].ship.y);

    // Only the loss counter moves; pausing is ignored while the banner is up
    for _ in 0..179 {
        game.tick(&FrameInput {
            pause_toggled: true,
            ..held
        });
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(frozen_state(&game), frozen);
    }
    assert_eq!(
        (game.players[0].ship.x, game.players[0].ship.y),
        player
    );
    assert_eq!(game.session.lost_counter, 179);

    let events = game.tick(&idle());
    assert_eq!(events.state_changed, Some(GameState::Ended));
    assert_eq!(game.state(), GameState::Ended);
    assert_eq!(frozen_state(&game), frozen);
}

#[test]
fn test_escaping_enemy_with_lives_left_keeps_running() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(600, 700, EnemyKind::Green));

    game.tick(&idle());
    assert_eq!(game.lives(), 4);
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn test_player_laser_destroys_enemy() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(300, 400, EnemyKind::Red));
    game.players[0]
        .ship
        .lasers
        .push(Laser::new(300, 420, LaserColor::Yellow));

    let events = game.tick(&idle());

    assert_eq!(events.enemies_destroyed, 1);
    assert!(game.enemies.is_empty());
    assert!(game.players[0].ship.lasers.is_empty());
}

#[test]
fn test_boss_survives_one_hit() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(300, 400, EnemyKind::Boss));
    game.players[0]
        .ship
        .lasers
        .push(Laser::new(300, 420, LaserColor::Yellow));

    let events = game.tick(&idle());

    assert_eq!(events.enemies_destroyed, 0);
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.enemies[0].ship.health, 200);
    assert!(game.players[0].ship.lasers.is_empty());
}

#[test]
fn test_player_laser_leaves_top_of_screen() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(600, 300, EnemyKind::Blue));
    game.players[0]
        .ship
        .lasers
        .push(Laser::new(100, 3, LaserColor::Yellow));

    game.tick(&idle());
    assert!(game.players[0].ship.lasers.is_empty());
}

#[test]
fn test_held_fire_respects_cooldown() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(600, -1000, EnemyKind::Blue));
    let mut input = idle();
    input.players[0].fire = true;

    let shots: u32 = (0..61).map(|_| game.tick(&input).player_shots).sum();
    // Frames 1, 31 and 61
    assert_eq!(shots, 3);
}

#[test]
fn test_two_player_ram_hits_only_first_player() {
    let mut game = Game::new(GameConfig::default(), GameMode::Two, 3);
    for player in &mut game.players {
        player.ship.x = 300;
        player.ship.y = 600;
    }
    game.enemies.push(Enemy::new(300, 590, EnemyKind::Red));

    let events = game.tick(&idle());

    assert_eq!(events.enemies_rammed, 1);
    assert_eq!(game.players[0].ship.health, 90);
    assert_eq!(game.players[1].ship.health, 100);
    assert!(game.enemies.is_empty());
}

#[test]
fn test_two_player_enemy_laser_hits_only_first_player() {
    let mut game = Game::new(GameConfig::default(), GameMode::Two, 3);
    for player in &mut game.players {
        player.ship.x = 300;
        player.ship.y = 630;
    }
    let mut enemy = Enemy::new(300, 100, EnemyKind::Green);
    enemy.ship.lasers.push(Laser::new(300, 600, LaserColor::Green));
    game.enemies.push(enemy);

    let events = game.tick(&idle());

    assert_eq!(events.player_hits, 1);
    assert_eq!(game.players[0].ship.health, 90);
    assert_eq!(game.players[1].ship.health, 100);
}

#[test]
fn test_losing_second_player_loses_run() {
    let mut game = Game::new(GameConfig::default(), GameMode::Two, 3);
    game.players[1].ship.health = 10;
    let (x, y) = (game.players[1].ship.x, game.players[1].ship.y);
    game.enemies.push(Enemy::new(x, y - 10, EnemyKind::Red));

    game.tick(&idle());

    assert_eq!(game.players[1].ship.health, 0);
    assert_eq!(game.state(), GameState::Lost);
}

#[test]
fn test_player_movement_stays_in_bounds() {
    let mut game = single(5);
    game.enemies.push(Enemy::new(600, -1000, EnemyKind::Blue));
    let mut input = idle();
    input.players[0].left = true;
    input.players[0].up = true;

    for _ in 0..400 {
        game.tick(&input);
    }
    let ship = &game.players[0].ship;
    assert!(ship.x > 0 && ship.x <= 5);
    assert!(ship.y > 0 && ship.y <= 5);

    input.players[0] = Default::default();
    input.players[0].right = true;
    input.players[0].down = true;
    for _ in 0..400 {
        game.tick(&input);
    }
    let ship = &game.players[0].ship;
    assert!(ship.x + ship.width() < 750);
    assert!(ship.y + ship.height() + 15 < 750);
}
