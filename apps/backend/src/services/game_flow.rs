//! Round orchestration: AI move acquisition, resolution, store write-back.
//!
//! The service owns the sequencing; all game rules stay in `domain`. The
//! configured move provider gets one attempt per round, then the local
//! strategic fallback takes over; there are no retries.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ai::{AnimationData, Mood, MoveProvider, OpponentView, ProvidedMove};
use crate::domain::{advance_round, GameMode, MatchState, RawMove, RoundRecord};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Everything a client needs to render one resolved round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub state: MatchState,
    pub record: RoundRecord,
    pub ai: ProvidedMove,
    pub animation: AnimationData,
}

pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Play one round of a single-player match to completion.
    ///
    /// Normalizes the player's move, obtains the AI move, advances the match
    /// through the domain, and writes the new state back to the store.
    pub async fn play_round(
        &self,
        app_state: &AppState,
        game_id: Uuid,
        player_move: RawMove,
    ) -> Result<RoundReport, AppError> {
        let state = app_state.sessions.get(game_id)?;

        if state.mode != GameMode::Single {
            return Err(crate::errors::DomainError::mode_unsupported(
                "rounds against the AI are only available in single mode",
            )
            .into());
        }

        let view = OpponentView::from_moves(state.player1_moves());
        let ai = self
            .choose_with_fallback(&app_state.ai, &app_state.ai_fallback, &view)
            .await?;

        // Mood reflects how the AI's pick fares against the player's previous
        // move; it is presentation only.
        let mood = Mood::after_move(ai.mv, state.last_player1_move());

        let player1 = player_move.normalized(app_state.rules.default_move);
        let next = advance_round(
            &state,
            &app_state.rules,
            player1,
            ai.mv,
            OffsetDateTime::now_utc(),
        )?;
        app_state.sessions.update(next.clone())?;

        let record = *next
            .rounds
            .last()
            .ok_or_else(|| AppError::internal("advanced match has no rounds"))?;

        debug!(
            game_id = %game_id,
            round = record.round,
            outcome = ?record.outcome,
            status = ?next.status,
            "round resolved"
        );

        Ok(RoundReport {
            state: next,
            record,
            ai,
            animation: AnimationData::for_mood(mood),
        })
    }

    /// Standalone AI move for a caller-supplied history (oldest first).
    pub async fn ai_move(
        &self,
        app_state: &AppState,
        opponent_moves: Vec<crate::domain::Move>,
    ) -> Result<(ProvidedMove, AnimationData), AppError> {
        let last = opponent_moves.last().copied();
        let view = OpponentView::from_moves(opponent_moves);
        let chosen = self
            .choose_with_fallback(&app_state.ai, &app_state.ai_fallback, &view)
            .await?;
        let mood = Mood::after_move(chosen.mv, last);
        Ok((chosen, AnimationData::for_mood(mood)))
    }

    async fn choose_with_fallback(
        &self,
        provider: &Arc<dyn MoveProvider>,
        fallback: &Arc<dyn MoveProvider>,
        view: &OpponentView,
    ) -> Result<ProvidedMove, AppError> {
        match provider.choose(view).await {
            Ok(chosen) => Ok(chosen),
            Err(err) => {
                warn!(
                    provider = provider.name(),
                    fallback = fallback.name(),
                    error = %err,
                    "move provider failed; using fallback"
                );
                Ok(fallback.choose(view).await?)
            }
        }
    }
}

impl Default for GameFlowService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::ai::AiError;
    use crate::domain::{MatchStatus, Move, Outcome};
    use crate::services::sessions::SessionService;

    /// Always plays one fixed move.
    struct FixedProvider(Move);

    #[async_trait]
    impl MoveProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn choose(&self, _view: &OpponentView) -> Result<ProvidedMove, AiError> {
            Ok(ProvidedMove::bare(self.0))
        }
    }

    /// Always fails, to exercise the fallback path.
    struct BrokenProvider;

    #[async_trait]
    impl MoveProvider for BrokenProvider {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn choose(&self, _view: &OpponentView) -> Result<ProvidedMove, AiError> {
            Err(AiError::Upstream("model offline".into()))
        }
    }

    fn app_state(ai: Arc<dyn MoveProvider>, fallback: Arc<dyn MoveProvider>) -> AppState {
        AppState::new(crate::domain::MatchRules::best_of_three(), ai, fallback)
            .with_gesture(Arc::new(crate::gesture::DisabledClassifier))
    }

    #[tokio::test]
    async fn a_full_match_runs_to_finished() {
        let state = app_state(
            Arc::new(FixedProvider(Move::Scissors)),
            Arc::new(FixedProvider(Move::Scissors)),
        );
        let game = SessionService::new().create(&state.sessions, GameMode::Single);
        let flow = GameFlowService::new();

        // Rock beats scissors twice: player 1 takes the match 2-0.
        let r1 = flow
            .play_round(&state, game.id, RawMove::Rock)
            .await
            .unwrap();
        assert_eq!(r1.record.outcome, Outcome::Player1);
        assert_eq!(r1.state.status, MatchStatus::Active);

        let r2 = flow
            .play_round(&state, game.id, RawMove::Rock)
            .await
            .unwrap();
        assert_eq!(r2.state.status, MatchStatus::Finished);
        assert_eq!(r2.state.player1_score, 2);

        // Store observed the final state.
        let stored = state.sessions.get(game.id).unwrap();
        assert_eq!(stored, r2.state);

        // A finished match rejects further rounds.
        let err = flow
            .play_round(&state, game.id, RawMove::Rock)
            .await
            .unwrap_err();
        assert_eq!(err.code(), crate::errors::ErrorCode::MatchFinished);
    }

    #[tokio::test]
    async fn broken_provider_falls_back() {
        let state = app_state(Arc::new(BrokenProvider), Arc::new(FixedProvider(Move::Paper)));
        let game = SessionService::new().create(&state.sessions, GameMode::Single);

        let report = GameFlowService::new()
            .play_round(&state, game.id, RawMove::Scissors)
            .await
            .unwrap();
        assert_eq!(report.ai.mv, Move::Paper);
        assert_eq!(report.record.outcome, Outcome::Player1);
    }

    #[tokio::test]
    async fn multiplayer_sessions_reject_ai_rounds() {
        let state = app_state(
            Arc::new(FixedProvider(Move::Rock)),
            Arc::new(FixedProvider(Move::Rock)),
        );
        let game = SessionService::new().create(&state.sessions, GameMode::Multiplayer);

        let err = GameFlowService::new()
            .play_round(&state, game.id, RawMove::Rock)
            .await
            .unwrap_err();
        assert_eq!(err.code(), crate::errors::ErrorCode::ModeUnsupported);
    }

    #[tokio::test]
    async fn none_moves_are_normalized_before_recording() {
        let state = app_state(
            Arc::new(FixedProvider(Move::Scissors)),
            Arc::new(FixedProvider(Move::Scissors)),
        );
        let game = SessionService::new().create(&state.sessions, GameMode::Single);

        let report = GameFlowService::new()
            .play_round(&state, game.id, RawMove::None)
            .await
            .unwrap();
        // Default move is rock; the record must hold it, not `none`.
        assert_eq!(report.record.player1_move, Move::Rock);
        assert_eq!(report.record.outcome, Outcome::Player1);
    }

    #[tokio::test]
    async fn standalone_ai_move_reports_mood() {
        let state = app_state(
            Arc::new(FixedProvider(Move::Paper)),
            Arc::new(FixedProvider(Move::Paper)),
        );
        let (chosen, animation) = GameFlowService::new()
            .ai_move(&state, vec![Move::Rock])
            .await
            .unwrap();
        assert_eq!(chosen.mv, Move::Paper);
        // Paper over the opponent's last rock reads as a winning pick.
        assert_eq!(animation.mood, Mood::Victorious);
    }
}
