//! Opponent move-history analysis.
//!
//! Pure helpers shared by the strategic AI and the standalone AI-move endpoint:
//! move frequencies, simple sequence detection, and a next-move prediction with
//! a capped confidence.

use serde::Serialize;

use crate::domain::moves::Move;

/// How many trailing moves the confidence window considers.
pub const RECENT_WINDOW: usize = 5;

/// Confidence ceiling for predictions; matches are short, so never claim more.
pub const MAX_CONFIDENCE: f32 = 0.8;

/// Confidence assigned when there is no history to analyze (uniform chance).
pub const BASELINE_CONFIDENCE: f32 = 0.33;

/// Repeating structures detectable in a move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePattern {
    /// a-b-a-b over the last four moves.
    Alternating,
    /// The last three moves repeat the three before them.
    ThreeCycle,
}

/// Outcome of analyzing a player's move history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveAnalysis {
    /// Counts over the full history, indexed as [rock, paper, scissors].
    pub counts: [u8; 3],
    pub most_common: Option<Move>,
    pub sequences: Vec<SequencePattern>,
    /// Best guess for the player's next move.
    pub prediction: Option<Move>,
    /// Strength of the prediction in [BASELINE_CONFIDENCE, MAX_CONFIDENCE].
    pub confidence: f32,
}

fn move_index(m: Move) -> usize {
    match m {
        Move::Rock => 0,
        Move::Paper => 1,
        Move::Scissors => 2,
    }
}

fn count_moves(moves: &[Move]) -> [u8; 3] {
    let mut counts = [0u8; 3];
    for &m in moves {
        counts[move_index(m)] += 1;
    }
    counts
}

fn most_common(counts: [u8; 3]) -> Option<Move> {
    if counts.iter().all(|&c| c == 0) {
        return None;
    }
    // max_by_key keeps the last maximum, so ties break toward scissors.
    let best = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &c)| c)
        .map(|(i, _)| i)?;
    Some(Move::ALL[best])
}

fn detect_sequences(moves: &[Move]) -> Vec<SequencePattern> {
    let mut sequences = Vec::new();
    let n = moves.len();
    if n >= 4 && moves[n - 1] == moves[n - 3] && moves[n - 2] == moves[n - 4] {
        sequences.push(SequencePattern::Alternating);
    }
    if n >= 6 && moves[n - 3..] == moves[n - 6..n - 3] {
        sequences.push(SequencePattern::ThreeCycle);
    }
    sequences
}

fn predict(moves: &[Move], counts: [u8; 3], sequences: &[SequencePattern]) -> Option<Move> {
    if moves.is_empty() {
        return None;
    }
    if sequences.contains(&SequencePattern::Alternating) && moves.len() >= 2 {
        return Some(moves[moves.len() - 2]);
    }
    if sequences.contains(&SequencePattern::ThreeCycle) && moves.len() >= 3 {
        let cycle = &moves[moves.len() - 3..];
        return Some(cycle[moves.len() % 3]);
    }
    most_common(counts)
}

fn confidence_for(moves: &[Move], prediction: Option<Move>) -> f32 {
    let Some(predicted) = prediction else {
        return BASELINE_CONFIDENCE;
    };
    let recent = recent_window(moves);
    if recent.is_empty() {
        return BASELINE_CONFIDENCE;
    }
    let hits = recent.iter().filter(|&&m| m == predicted).count() as f32;
    (hits / recent.len() as f32).min(MAX_CONFIDENCE)
}

fn recent_window(moves: &[Move]) -> &[Move] {
    let start = moves.len().saturating_sub(RECENT_WINDOW);
    &moves[start..]
}

/// Analyze a full move history (oldest first).
///
/// Frequencies and prediction look at the whole history; only the prediction
/// confidence is scored against the recent window.
pub fn analyze(moves: &[Move]) -> MoveAnalysis {
    let counts = count_moves(moves);
    let sequences = detect_sequences(moves);
    let prediction = predict(moves, counts, &sequences);
    let confidence = confidence_for(moves, prediction);
    MoveAnalysis {
        counts,
        most_common: most_common(counts),
        sequences,
        prediction,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_prediction() {
        let a = analyze(&[]);
        assert_eq!(a.counts, [0, 0, 0]);
        assert_eq!(a.prediction, None);
        assert!((a.confidence - BASELINE_CONFIDENCE).abs() < f32::EPSILON);
    }

    #[test]
    fn frequencies_count_the_whole_history() {
        // Five rocks then scissors twice: all seven moves are tallied, not
        // just the trailing confidence window.
        let moves = [
            Move::Rock,
            Move::Rock,
            Move::Rock,
            Move::Rock,
            Move::Rock,
            Move::Scissors,
            Move::Scissors,
        ];
        let a = analyze(&moves);
        assert_eq!(a.counts, [5, 0, 2]);
        assert_eq!(a.most_common, Some(Move::Rock));
    }

    #[test]
    fn confidence_scores_against_the_recent_window() {
        // Six rocks then paper, paper, scissors. Full-history counts pick
        // rock; the confidence is the rock hit rate over the last five moves
        // (two of five), not over the whole history.
        let mut moves = vec![Move::Rock; 6];
        moves.extend([Move::Paper, Move::Paper, Move::Scissors]);
        let a = analyze(&moves);
        assert_eq!(a.counts, [6, 2, 1]);
        assert_eq!(a.prediction, Some(Move::Rock));
        assert!((a.confidence - 0.4).abs() < 1e-6);
    }

    #[test]
    fn alternating_pattern_predicts_the_repeat() {
        let moves = [Move::Rock, Move::Paper, Move::Rock, Move::Paper];
        let a = analyze(&moves);
        assert!(a.sequences.contains(&SequencePattern::Alternating));
        // Next in a rock/paper alternation is rock.
        assert_eq!(a.prediction, Some(Move::Rock));
    }

    #[test]
    fn three_cycle_is_detected() {
        let moves = [
            Move::Rock,
            Move::Paper,
            Move::Scissors,
            Move::Rock,
            Move::Paper,
            Move::Scissors,
        ];
        let a = analyze(&moves);
        assert!(a.sequences.contains(&SequencePattern::ThreeCycle));
        assert!(a.prediction.is_some());
    }

    #[test]
    fn confidence_is_capped() {
        let moves = [Move::Rock; 10];
        let a = analyze(&moves);
        assert_eq!(a.prediction, Some(Move::Rock));
        assert!(a.confidence <= MAX_CONFIDENCE);
    }
}
