//! Caller-owned session state.
//!
//! The host (UI layer) owns a `GameState` value and passes it into these
//! methods explicitly; the engine functions themselves never read or
//! mutate it. There is deliberately no global singleton here — screens,
//! navigation and persistence live entirely on the host side.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::bias::calculate_bias;
use crate::models::{Athlete, BestOfThreeResult, FightResult, GamePart, TrainingSession};
use crate::stats::AllocationVector;

/// Mutable per-playthrough state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Selected athlete id, `None` before the choose-athlete step
    pub selected_athlete_id: Option<String>,

    /// Talent rolled once at athlete selection, fixed for the playthrough
    pub fixed_talent: Option<f32>,

    /// Opponent currently being prepared for
    pub current_opponent_id: Option<u32>,

    /// Which part of the game is active
    pub game_part: GamePart,

    /// Part 1 training allocation
    pub allocation: AllocationVector,

    /// Part 1 last fight outcome
    pub last_fight_result: Option<FightResult>,

    /// Part 1 unlock path / cleared opponents (by id)
    pub unlocked_opponents: Vec<u32>,
    pub beaten_opponents: Vec<u32>,

    /// Part 2 sessions (always exactly three)
    pub sessions: Vec<TrainingSession>,

    /// Part 2 last aggregate outcome
    pub last_best_of_three: Option<BestOfThreeResult>,

    /// Part 2 progress, tracked separately from Part 1
    pub unlocked_opponents_part2: Vec<u32>,
    pub beaten_opponents_part2: Vec<u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state: first opponent unlocked in both parts, everything else empty.
    pub fn new() -> Self {
        Self {
            selected_athlete_id: None,
            fixed_talent: None,
            current_opponent_id: None,
            game_part: GamePart::One,
            allocation: AllocationVector::default(),
            last_fight_result: None,
            unlocked_opponents: vec![1],
            beaten_opponents: Vec::new(),
            sessions: TrainingSession::empty_trio(),
            last_best_of_three: None,
            unlocked_opponents_part2: vec![1],
            beaten_opponents_part2: Vec::new(),
        }
    }

    /// Select an athlete and fix their talent for the playthrough.
    ///
    /// If the athlete config carries a fixed talent it is adopted as-is,
    /// otherwise one value is drawn uniformly from `bias_range`. The roll
    /// happens exactly once; re-selecting the same athlete re-rolls only
    /// because it starts a new playthrough.
    pub fn select_athlete<R: Rng + ?Sized>(&mut self, athlete: &Athlete, rng: &mut R) {
        self.selected_athlete_id = Some(athlete.id.clone());
        let (min, max) = athlete.bias_range;
        self.fixed_talent =
            Some(athlete.fixed_talent.unwrap_or_else(|| rng.gen_range(min..=max)));
    }

    /// Reset the Part 1 allocation to all-zero.
    pub fn reset_allocation(&mut self) {
        self.allocation = AllocationVector::default();
    }

    /// Roll a fresh mood for every Part 2 session (independent draws).
    /// Uses the rolled talent; call after `select_athlete`.
    pub fn roll_session_moods<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let talent = self.fixed_talent.unwrap_or(0.0);
        for session in &mut self.sessions {
            session.mood = calculate_bias(talent, rng);
            session.fight_result = None;
        }
    }

    /// Record a Part 1 fight outcome and advance progress on a win.
    pub fn record_fight(&mut self, opponent_id: u32, result: FightResult) {
        let won = result.won;
        self.last_fight_result = Some(result);
        if won {
            mark_beaten(&mut self.beaten_opponents, opponent_id);
            unlock(&mut self.unlocked_opponents, opponent_id + 1);
        }
    }

    /// Record a Part 2 best-of-three outcome and advance Part 2 progress.
    pub fn record_best_of_three(&mut self, opponent_id: u32, result: BestOfThreeResult) {
        let won = result.won;
        self.sessions = result.sessions.clone();
        self.last_best_of_three = Some(result);
        if won {
            mark_beaten(&mut self.beaten_opponents_part2, opponent_id);
            unlock(&mut self.unlocked_opponents_part2, opponent_id + 1);
        }
    }

    pub fn is_unlocked(&self, opponent_id: u32) -> bool {
        match self.game_part {
            GamePart::One => self.unlocked_opponents.contains(&opponent_id),
            GamePart::Two => self.unlocked_opponents_part2.contains(&opponent_id),
        }
    }

    pub fn is_beaten(&self, opponent_id: u32) -> bool {
        match self.game_part {
            GamePart::One => self.beaten_opponents.contains(&opponent_id),
            GamePart::Two => self.beaten_opponents_part2.contains(&opponent_id),
        }
    }

    /// Back to a fresh playthrough (athlete deselected, progress cleared).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn mark_beaten(beaten: &mut Vec<u32>, opponent_id: u32) {
    if !beaten.contains(&opponent_id) {
        beaten.push(opponent_id);
    }
}

fn unlock(unlocked: &mut Vec<u32>, opponent_id: u32) {
    if !unlocked.contains(&opponent_id) {
        unlocked.push(opponent_id);
    }
}
