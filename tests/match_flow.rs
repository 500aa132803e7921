//! Full match flow: sessions, scripted opponents, and the repository loop

use std::{cmp::Ordering, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use roshambo::{
    ChainState, MatchConfig, MatchSession, MatchVerdict, Move, RoundOutcome, TransitionMatrix,
    adapters::InMemoryRepository,
    opponents::{OpponentKind, OpponentPolicy},
    ports::MatrixRepository,
};

fn session_at(position: ChainState, config: MatchConfig) -> MatchSession {
    MatchSession::new(TransitionMatrix::uniform(), config, position)
        .expect("Failed to create session")
}

#[test]
fn all_tie_match_draws_at_the_round_limit() {
    // A uniform matrix predicts the first category everywhere, so the
    // engine answers paper every round; an always-paper opponent ties
    // every one of them.
    let mut session = session_at(ChainState::WonScissors, MatchConfig::default());
    let mut rng = StdRng::seed_from_u64(0);
    let mut opponent = OpponentKind::Paper.into_policy();

    while !session.is_finished() {
        let throw = opponent.next_throw(&mut rng);
        let report = session.play_round(throw);
        opponent.observe(report.engine_move);

        assert_eq!(report.outcome, RoundOutcome::Tie);
        assert!(report.transition.is_none());
    }

    let summary = session.summary();
    assert_eq!(summary.rounds_played, 30);
    assert_eq!(summary.engine_score, 0);
    assert_eq!(summary.opponent_score, 0);
    assert_eq!(summary.verdict, MatchVerdict::Drawn);
    assert_eq!(session.position(), ChainState::WonScissors);
    assert_eq!(session.matrix(), &TransitionMatrix::uniform());
}

#[test]
fn opening_round_counters_the_uniform_prediction() {
    let mut session = session_at(ChainState::LostPaper, MatchConfig::default());

    let report = session.play_round(Move::Rock);

    assert_eq!(report.engine_move, Move::Paper);
    assert_eq!(report.outcome, RoundOutcome::Win);
    assert_eq!(
        report.transition,
        Some((ChainState::LostPaper, ChainState::LostRock))
    );
    assert_eq!(session.engine_score(), 1);
    assert_eq!(session.opponent_score(), 0);
    assert_eq!(session.position(), ChainState::LostRock);
}

#[test]
fn target_score_ends_the_match_immediately() {
    let config = MatchConfig {
        target_score: 1,
        ..MatchConfig::default()
    };
    let mut session = session_at(ChainState::WonRock, config);

    // The engine opens with paper; scissors takes the round and the match.
    let report = session.play_round(Move::Scissors);

    assert_eq!(report.outcome, RoundOutcome::Loss);
    assert!(session.is_finished());
    assert_eq!(session.rounds_played(), 1);
    assert_eq!(session.summary().verdict, MatchVerdict::OpponentWin);
}

#[test]
fn every_scripted_opponent_reaches_a_consistent_verdict() {
    let kinds = [
        OpponentKind::Random,
        OpponentKind::Rock,
        OpponentKind::Paper,
        OpponentKind::Scissors,
        OpponentKind::Cycle,
        OpponentKind::Mirror,
    ];

    for (offset, kind) in kinds.into_iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(100 + offset as u64);
        let config = MatchConfig::default();
        let mut session =
            MatchSession::with_random_start(TransitionMatrix::uniform(), config, &mut rng)
                .expect("Failed to create session");
        let mut opponent = kind.into_policy();

        while !session.is_finished() {
            let throw = opponent.next_throw(&mut rng);
            let report = session.play_round(throw);
            opponent.observe(report.engine_move);
        }

        let summary = session.summary();
        assert!(summary.rounds_played <= config.max_rounds);
        let expected = match summary.engine_score.cmp(&summary.opponent_score) {
            Ordering::Greater => MatchVerdict::EngineWin,
            Ordering::Less => MatchVerdict::OpponentWin,
            Ordering::Equal => MatchVerdict::Drawn,
        };
        assert_eq!(summary.verdict, expected, "opponent {}", opponent.name());
        assert!(session.matrix().is_row_stochastic());
    }
}

#[test]
fn seeded_simulations_reproduce_exactly() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut matrix = TransitionMatrix::uniform();
        let mut opponent = OpponentKind::Random.into_policy();
        let mut verdicts = Vec::new();

        for _ in 0..5 {
            let mut session =
                MatchSession::with_random_start(matrix, MatchConfig::default(), &mut rng)
                    .expect("Failed to create session");
            while !session.is_finished() {
                let throw = opponent.next_throw(&mut rng);
                let report = session.play_round(throw);
                opponent.observe(report.engine_move);
            }
            verdicts.push(session.summary().verdict);
            matrix = session.into_matrix();
        }
        (matrix, verdicts)
    };

    let (matrix_a, verdicts_a) = run(42);
    let (matrix_b, verdicts_b) = run(42);
    assert_eq!(matrix_a, matrix_b);
    assert_eq!(verdicts_a, verdicts_b);
}

#[test]
fn repository_wraps_a_session_load_play_save() {
    let repo = InMemoryRepository::new();
    let storage = Path::new("engine_matrix");

    // Nothing stored yet: the session starts from the uniform prior.
    let matrix = repo.load_or_uniform(storage);
    assert_eq!(matrix, TransitionMatrix::uniform());

    let mut rng = StdRng::seed_from_u64(9);
    let mut session = MatchSession::new(matrix, MatchConfig::default(), ChainState::LostRock)
        .expect("Failed to create session");
    let mut opponent = OpponentKind::Cycle.into_policy();

    while !session.is_finished() {
        let throw = opponent.next_throw(&mut rng);
        let report = session.play_round(throw);
        opponent.observe(report.engine_move);
    }

    let learned = session.into_matrix();
    repo.save(&learned, storage).expect("Failed to save");

    // The next session picks up exactly what the last one learned.
    assert_eq!(repo.load_or_uniform(storage), learned);
}
