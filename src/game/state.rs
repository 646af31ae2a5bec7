//! Game state machine
//!
//! All mutable gameplay state in one struct. The loop feeds it a snapshot of
//! the frame's commands plus the current clock reading; nothing here touches
//! the window, so every rule can be exercised in tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::GameConfig;
use super::obstacle::ObstacleField;
use super::player::Player;

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

/// Input for one frame, already mapped from keys/buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Commands {
    /// Held
    pub move_left: bool,
    /// Held
    pub move_right: bool,
    /// Edge-triggered
    pub jump: bool,
    /// Edge-triggered
    pub restart: bool,
    /// Window close / escape
    pub quit: bool,
}

/// What changed during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A rock hit the player
    GameOver { final_time: u32 },
    /// A new run started
    Restarted,
}

/// Everything that changes while the game runs
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub obstacles: ObstacleField,
    pub phase: Phase,
    /// Whole seconds survived in the current run
    pub score: u32,
    /// Score frozen at the moment of collision
    pub final_time: u32,
    /// Clock reading (seconds) when the current run started
    started_at: f64,
    rng: StdRng,
}

impl GameState {
    /// Start a run at clock time `now`
    pub fn new(config: GameConfig, seed: u64, now: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let obstacles = ObstacleField::new(&config, &mut rng);
        Self {
            player: Player::spawn(&config),
            obstacles,
            phase: Phase::Playing,
            score: 0,
            final_time: 0,
            started_at: now,
            rng,
            config,
        }
    }

    /// Whole seconds since the run started
    fn elapsed_secs(&self, now: f64) -> u32 {
        (now - self.started_at).max(0.0) as u32
    }

    /// Time shown on the HUD
    pub fn display_time(&self) -> u32 {
        match self.phase {
            Phase::Playing => self.score,
            Phase::GameOver => self.final_time,
        }
    }

    /// Accept a jump only while playing and grounded
    pub fn jump(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.player.jump(&self.config)
    }

    /// Reinitialize player, rocks and timer. Only valid after a game over.
    pub fn restart(&mut self, now: f64) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.player = Player::spawn(&self.config);
        self.obstacles = ObstacleField::new(&self.config, &mut self.rng);
        self.score = 0;
        self.final_time = 0;
        self.started_at = now;
        self.phase = Phase::Playing;
        true
    }

    /// Advance one frame: commands, then physics, rocks and collision
    pub fn step(&mut self, commands: &Commands, now: f64) -> Option<Transition> {
        let mut transition = None;

        if commands.jump {
            self.jump();
        }
        if commands.restart && self.restart(now) {
            transition = Some(Transition::Restarted);
        }

        if self.phase != Phase::Playing {
            return transition;
        }

        let elapsed = self.elapsed_secs(now);

        self.player.walk(commands.move_left, commands.move_right, &self.config);
        self.player.fall(&self.config);

        self.obstacles.advance(&self.config, &mut self.rng);

        if self.obstacles.collides_with(&self.player.bounds(&self.config)) {
            self.phase = Phase::GameOver;
            self.final_time = elapsed;
            transition = Some(Transition::GameOver { final_time: elapsed });
        }

        self.score = elapsed;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::obstacle::Rock;

    const FRAME: f64 = 1.0 / 60.0;

    fn idle() -> Commands {
        Commands::default()
    }

    /// Put a rock right on top of the player so the next step collides
    fn rock_at_player(state: &mut GameState) {
        let rock = Rock::new(state.player.x, &state.config);
        state.obstacles = ObstacleField::from_rocks(vec![rock]);
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(GameConfig::default(), 1, 0.0);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.x, 400.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(GameConfig::default(), 99, 0.0);
        let mut b = GameState::new(GameConfig::default(), 99, 0.0);
        for frame in 0..600 {
            let now = frame as f64 * FRAME;
            a.step(&idle(), now);
            b.step(&idle(), now);
        }
        assert_eq!(a.obstacles.rocks(), b.obstacles.rocks());
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn test_score_counts_whole_seconds() {
        let mut state = GameState::new(GameConfig::default(), 5, 10.0);
        state.step(&idle(), 10.5);
        assert_eq!(state.score, 0);
        state.step(&idle(), 12.99);
        assert_eq!(state.score, 2);
        assert_eq!(state.display_time(), 2);
    }

    #[test]
    fn test_invariants_while_playing() {
        let mut state = GameState::new(GameConfig::default(), 7, 0.0);
        let ground = state.config.ground_line();
        let mut frame = 0;
        while state.phase == Phase::Playing && frame < 2000 {
            let commands = Commands {
                jump: frame % 45 == 0,
                move_right: frame % 200 < 100,
                move_left: frame % 200 >= 100,
                ..Default::default()
            };
            let y_before = state.player.y;
            state.step(&commands, frame as f64 * FRAME);
            assert!(state.player.y <= ground);
            if state.player.y == ground && y_before != ground {
                assert_eq!(state.player.velocity_y, 0.0);
            }
            if state.phase == Phase::Playing {
                assert!(state.obstacles.len() >= 1);
            }
            assert!(state.player.x >= 0.0 && state.player.x <= state.config.max_player_x());
            frame += 1;
        }
    }

    #[test]
    fn test_collision_ends_game_once() {
        let mut state = GameState::new(GameConfig::default(), 3, 0.0);
        state.step(&idle(), 4.2);
        rock_at_player(&mut state);

        let transition = state.step(&idle(), 4.5);
        assert_eq!(transition, Some(Transition::GameOver { final_time: 4 }));
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.final_time, 4);

        // Frozen: later frames change nothing
        let player = state.player;
        let rocks = state.obstacles.rocks().to_vec();
        for i in 0..120 {
            assert_eq!(state.step(&idle(), 5.0 + i as f64), None);
        }
        assert_eq!(state.final_time, 4);
        assert_eq!(state.display_time(), 4);
        assert_eq!(state.player, player);
        assert_eq!(state.obstacles.rocks(), rocks.as_slice());
    }

    #[test]
    fn test_two_rocks_hit_same_frame() {
        let mut state = GameState::new(GameConfig::default(), 4, 0.0);
        let x = state.player.x;
        state.obstacles = ObstacleField::from_rocks(vec![
            Rock::new(x - 10.0, &state.config),
            Rock::new(x + 20.0, &state.config),
        ]);

        let transition = state.step(&idle(), 6.3);
        assert_eq!(transition, Some(Transition::GameOver { final_time: 6 }));
        assert_eq!(state.final_time, 6);

        for i in 1..60 {
            assert_eq!(state.step(&idle(), 6.3 + i as f64), None);
        }
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.final_time, 6);
    }

    #[test]
    fn test_jump_ignored_after_game_over() {
        let mut state = GameState::new(GameConfig::default(), 3, 0.0);
        rock_at_player(&mut state);
        state.step(&idle(), 0.1);
        assert_eq!(state.phase, Phase::GameOver);

        assert!(!state.jump());
        let jump = Commands { jump: true, ..Default::default() };
        state.step(&jump, 0.2);
        assert!(!state.player.is_jumping);
        assert_eq!(state.player.velocity_y, 0.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut state = GameState::new(GameConfig::default(), 3, 0.0);
        assert!(state.jump());
        let vy = state.player.velocity_y;
        assert!(!state.jump());
        assert_eq!(state.player.velocity_y, vy);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(GameConfig::default(), 3, 0.0);
        let restart = Commands { restart: true, ..Default::default() };
        assert_ne!(state.step(&restart, 1.0), Some(Transition::Restarted));
        assert!(!state.restart(1.0));
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_restart_after_real_collision() {
        let mut state = GameState::new(GameConfig::default(), 11, 0.0);
        let left_jump = Commands { move_left: true, jump: true, ..Default::default() };
        state.step(&left_jump, 3.0);
        rock_at_player(&mut state);
        state.step(&idle(), 3.5);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.final_time, 3);

        assert!(state.restart(20.0));
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.final_time, 0);
        assert_eq!(state.display_time(), 0);
        assert_eq!(state.player, Player::spawn(&state.config));
        assert_eq!(state.obstacles.len(), 1);

        // A second restart while playing is ignored
        let restart = Commands { restart: true, ..Default::default() };
        assert_ne!(state.step(&restart, 20.0), Some(Transition::Restarted));
    }

    #[test]
    fn test_restart_state_snapshot() {
        let mut state = GameState::new(GameConfig::default(), 8, 0.0);
        state.player.x = 12.0;
        state.player.facing_right = false;
        state.player.is_jumping = true;
        state.player.velocity_y = 4.0;
        state.phase = Phase::GameOver;
        state.final_time = 9;
        state.score = 9;

        assert!(state.restart(50.0));
        assert_eq!(state.player.x, 400.0);
        assert_eq!(state.player.y, state.config.ground_line());
        assert_eq!(state.player.velocity_y, 0.0);
        assert!(!state.player.is_jumping);
        assert!(state.player.facing_right);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 1);
        let rock = state.obstacles.rocks()[0];
        assert!(rock.x >= 900.0 && rock.x < 1100.0);
        assert_eq!(state.phase, Phase::Playing);

        // Timer restarts from the restart instant
        state.step(&idle(), 51.5);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_restart_command_resumes_same_frame() {
        let mut state = GameState::new(GameConfig::default(), 8, 0.0);
        state.phase = Phase::GameOver;
        let restart = Commands { restart: true, ..Default::default() };
        assert_eq!(state.step(&restart, 30.0), Some(Transition::Restarted));
        assert_eq!(state.phase, Phase::Playing);
        // Rocks already moved once this frame
        let rock = state.obstacles.rocks()[0];
        assert!(rock.x >= 895.0 && rock.x < 1095.0);
    }

    #[test]
    fn test_idle_player_eventually_hit() {
        // Standing still on the ground, the first rock must reach the player
        let mut state = GameState::new(GameConfig::default(), 21, 0.0);
        let mut hit = None;
        for frame in 0..400 {
            if let Some(Transition::GameOver { .. }) = state.step(&idle(), frame as f64 * FRAME) {
                hit = Some(frame);
                break;
            }
        }
        assert!(hit.is_some());
        assert_eq!(state.phase, Phase::GameOver);
    }
}
