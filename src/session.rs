use rand::Rng;

use crate::core::{
    generate, score, step, Direction, GameState, GenerationError, GridSnapshot, LevelConfig,
    MoveOutcome, RulesError, Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// level generated, clock not running
    Ready,
    Playing,
    Paused,
    LevelComplete,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Pause,
    NextLevel,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("moves are only accepted while playing, session is {phase:?}")]
    NotPlaying { phase: SessionPhase },

    #[error("cannot {action:?} while {from:?}")]
    InvalidTransition {
        from: SessionPhase,
        action: SessionAction,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    /// set on the move that completes the level
    pub level_score: Option<u32>,
}

/// A run of consecutive levels with a cumulative score.
///
/// Elapsed time only advances through [`Session::tick`], which the caller
/// drives from its own timer.
#[derive(Clone, Debug)]
pub struct Session {
    config: LevelConfig,
    game: GameState,
    phase: SessionPhase,
    level: u32,
    seconds: u32,
    moves: u32,
    total_score: u32,
    /// the opening level may be skipped until play first starts
    can_skip: bool,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: LevelConfig, rng: &mut R) -> Result<Session, SessionError> {
        let game = generate(&config, rng)?;
        Ok(Session::with_level(config, game))
    }

    /// Start a session on a level built elsewhere; later levels are generated from `config`.
    pub fn with_level(config: LevelConfig, game: GameState) -> Session {
        tracing::debug!(level = 1, "session created");
        Session {
            config,
            game,
            phase: SessionPhase::Ready,
            level: 1,
            seconds: 0,
            moves: 0,
            total_score: 0,
            can_skip: true,
        }
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Ready | SessionPhase::Paused => {
                self.can_skip = false;
                self.transition(SessionPhase::Playing);
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: SessionAction::Start,
            }),
        }
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Playing {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: SessionAction::Pause,
            });
        }
        self.transition(SessionPhase::Paused);
        Ok(())
    }

    /// One second of play time. Ignored unless the level is being played.
    pub fn tick(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> Result<MoveReport, SessionError> {
        if self.phase != SessionPhase::Playing {
            return Err(SessionError::NotPlaying { phase: self.phase });
        }

        let outcome = step(&mut self.game, direction)?;
        if !outcome.success() {
            return Ok(MoveReport {
                outcome,
                level_score: None,
            });
        }

        self.moves = self.moves.saturating_add(1);
        let level_score = if self.game.is_won() {
            let gained = score(self.seconds, self.moves);
            self.total_score = self.total_score.saturating_add(gained);
            tracing::debug!(
                level = self.level,
                seconds = self.seconds,
                moves = self.moves,
                gained,
                total = self.total_score,
                "level complete"
            );
            self.transition(SessionPhase::LevelComplete);
            Some(gained)
        } else {
            None
        };

        Ok(MoveReport {
            outcome,
            level_score,
        })
    }

    /// Advance to a freshly generated level. Allowed after completing a level,
    /// or once to skip the opening level before play has started.
    pub fn next_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        let skipping = self.phase == SessionPhase::Ready && self.can_skip;
        if self.phase != SessionPhase::LevelComplete && !skipping {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: SessionAction::NextLevel,
            });
        }
        self.load_level(rng)?;
        self.level += 1;
        self.can_skip = false;
        self.transition(SessionPhase::Ready);
        Ok(())
    }

    pub fn end_game(&mut self) {
        tracing::debug!(level = self.level, total = self.total_score, "game over");
        self.transition(SessionPhase::GameOver);
    }

    /// Reset level and score, then start playing a fresh first level.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.load_level(rng)?;
        self.level = 1;
        self.total_score = 0;
        self.can_skip = false;
        self.transition(SessionPhase::Playing);
        Ok(())
    }

    fn load_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.game = generate(&self.config, rng)?;
        self.seconds = 0;
        self.moves = 0;
        Ok(())
    }

    fn transition(&mut self, to: SessionPhase) {
        tracing::debug!(from = ?self.phase, ?to, level = self.level, "session transition");
        self.phase = to;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn player(&self) -> Vec2 {
        self.game.player()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.game.snapshot()
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }
}
