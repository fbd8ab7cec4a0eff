//! AI mood and animation payload for the frontend robot.
//!
//! The mood is derived per decision from how the chosen move relates to the
//! opponent's last one; clients use the animation name and effects for display
//! only, nothing here feeds back into resolution.

use serde::Serialize;

use crate::domain::{resolve, Move, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Neutral,
    Confident,
    Victorious,
    Focused,
    Determined,
}

impl Mood {
    /// Mood after choosing `chosen` against the opponent's last known move.
    pub fn after_move(chosen: Move, opponent_last: Option<Move>) -> Mood {
        let Some(opponent) = opponent_last else {
            return Mood::Confident;
        };
        match resolve(chosen, opponent) {
            Outcome::Player1 => Mood::Victorious,
            Outcome::Tie => Mood::Focused,
            Outcome::Player2 => Mood::Determined,
        }
    }

    pub fn animation(self) -> &'static str {
        match self {
            Mood::Confident => "power_up",
            Mood::Victorious => "celebration",
            Mood::Focused => "thinking",
            Mood::Determined => "battle_stance",
            Mood::Neutral => "idle",
        }
    }

    fn glow(self) -> (&'static str, f32) {
        match self {
            Mood::Confident => ("blue", 0.8),
            Mood::Victorious => ("gold", 1.0),
            Mood::Focused => ("purple", 0.6),
            Mood::Determined => ("red", 0.9),
            Mood::Neutral => ("white", 0.4),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodEffects {
    pub glow: &'static str,
    pub intensity: f32,
    pub particles: bool,
}

/// Presentation payload attached to AI move responses.
#[derive(Debug, Clone, Serialize)]
pub struct AnimationData {
    pub animation: &'static str,
    pub mood: Mood,
    /// Suggested playback duration in milliseconds.
    pub duration_ms: u32,
    pub effects: MoodEffects,
}

impl AnimationData {
    pub fn for_mood(mood: Mood) -> Self {
        let (glow, intensity) = mood.glow();
        Self {
            animation: mood.animation(),
            mood,
            duration_ms: 2000,
            effects: MoodEffects {
                glow,
                intensity,
                particles: mood == Mood::Victorious,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_is_confident() {
        assert_eq!(Mood::after_move(Move::Rock, None), Mood::Confident);
    }

    #[test]
    fn mood_follows_the_hypothetical_outcome() {
        assert_eq!(
            Mood::after_move(Move::Paper, Some(Move::Rock)),
            Mood::Victorious
        );
        assert_eq!(
            Mood::after_move(Move::Rock, Some(Move::Rock)),
            Mood::Focused
        );
        assert_eq!(
            Mood::after_move(Move::Scissors, Some(Move::Rock)),
            Mood::Determined
        );
    }

    #[test]
    fn victorious_is_the_only_particle_mood() {
        for mood in [
            Mood::Neutral,
            Mood::Confident,
            Mood::Victorious,
            Mood::Focused,
            Mood::Determined,
        ] {
            let data = AnimationData::for_mood(mood);
            assert_eq!(data.effects.particles, mood == Mood::Victorious);
            assert_eq!(data.animation, mood.animation());
        }
    }
}
