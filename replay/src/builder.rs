//! Building a replay log from a story of plays

use sandlot_game::{GameError, PlayEvent, Side, TrackedGame};
use sandlot_protocol::GamePayload;
use thiserror::Error;

use crate::log::{HistoryEntry, ReplayLog};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Play {index} ({event}) could not be applied: {source}")]
    Event {
        index: usize,
        event: PlayEvent,
        source: GameError,
    },

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Where a story starts: the half-inning number and the batting side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    pub round: u32,
    pub offense: Side,
}

impl RoundContext {
    pub fn new(round: u32, offense: Side) -> Result<Self, GameError> {
        if round == 0 {
            return Err(GameError::MalformedInput(
                "round must be positive".to_string(),
            ));
        }
        Ok(Self { round, offense })
    }

    /// Round and batting side of a game payload
    pub fn from_protocol(payload: &GamePayload) -> Result<Self, GameError> {
        payload.validate()?;

        let offense = if payload.offense_team.team_name == payload.home_team {
            Side::Home
        } else {
            Side::Away
        };

        Self::new(payload.round_info.round as u32, offense)
    }
}

/// Fold a story into a replay log, starting from an empty count at `ctx.round`
///
/// Produces exactly one entry per play, in input order. An empty story gives
/// an empty log.
pub fn build(ctx: RoundContext, events: &[PlayEvent]) -> Result<ReplayLog, ReplayError> {
    if ctx.round == 0 {
        return Err(GameError::MalformedInput("round must be positive".to_string()).into());
    }
    build_from(TrackedGame::new(ctx.round, ctx.offense), events)
}

/// Fold a story into a replay log, resuming from an existing tracker
pub fn build_from(mut game: TrackedGame, events: &[PlayEvent]) -> Result<ReplayLog, ReplayError> {
    let mut log = ReplayLog {
        start: game.state(),
        start_batting: game.batting(),
        start_score: game.score(),
        entries: Vec::with_capacity(events.len()),
    };

    for (index, event) in events.iter().enumerate() {
        let batting = game.batting();
        let transition = game.update(event).map_err(|source| ReplayError::Event {
            index,
            event: *event,
            source,
        })?;

        log.entries.push(HistoryEntry {
            event: *event,
            state: transition.state,
            batting,
            runs_scored: transition.runs_scored,
            inning_ended: transition.inning_ended,
            appearance: transition.appearance,
            score: game.score(),
        });
    }

    Ok(log)
}

/// Build the replay log for a game payload's story
///
/// The whole story is converted before any play is applied, so a malformed
/// entry anywhere fails the load.
pub fn load(payload: &GamePayload) -> Result<ReplayLog, ReplayError> {
    let ctx = RoundContext::from_protocol(payload)?;
    let events = PlayEvent::from_story(payload.story())?;
    build(ctx, &events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use sandlot_game::{
        CountBaseState, PlateAppearance, PlayKind, PlayerId, Score, apply,
    };
    use sandlot_protocol::parse_game;

    fn story(kinds: &[PlayKind]) -> Vec<PlayEvent> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| PlayEvent::new(PlayerId(i as u32 % 9), *kind))
            .collect()
    }

    fn random_story(rng: &mut StdRng, len: usize) -> Vec<PlayEvent> {
        (0..len)
            .map(|_| {
                let kind = PlayKind::ALL[rng.gen_range(0..PlayKind::ALL.len())];
                PlayEvent::new(PlayerId(rng.gen_range(1..=9)), kind)
            })
            .collect()
    }

    fn ctx() -> RoundContext {
        RoundContext::new(1, Side::Away).unwrap()
    }

    #[test]
    fn test_empty_story() {
        let log = build(ctx(), &[]).unwrap();
        assert!(log.is_empty());
        assert_eq!(log.final_state(), CountBaseState::new(1));
        assert_eq!(log.final_score(), Score::default());
    }

    #[test]
    fn test_zero_round_is_malformed() {
        assert!(matches!(
            RoundContext::new(0, Side::Home),
            Err(GameError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_four_balls() {
        let log = build(ctx(), &story(&[PlayKind::Ball; 4])).unwrap();

        assert_eq!(log.len(), 4);
        let last = log.last().unwrap();
        assert_eq!(last.appearance, Some(PlateAppearance::Walk));
        assert!(last.state.first_base);
        assert_eq!((last.state.strikes, last.state.balls), (0, 0));
        assert_eq!(log.appearances().count(), 1);
        assert_eq!(log.final_score(), Score::default());
    }

    #[test]
    fn test_three_outs_flip_sides() {
        let kinds = [PlayKind::Out, PlayKind::Out, PlayKind::Out, PlayKind::HomeRun];
        let log = build(ctx(), &story(&kinds)).unwrap();

        assert!(log.get(2).unwrap().inning_ended);
        assert_eq!(log.get(2).unwrap().state, CountBaseState::new(2));
        assert_eq!(log.get(2).unwrap().batting, Side::Away);

        let homer = log.get(3).unwrap();
        assert_eq!(homer.batting, Side::Home);
        assert_eq!(homer.score, Score::new(1, 0));
        assert_eq!(homer.accumulated_score(), (1, 0));
        assert_eq!(log.half_innings(), vec![0..3, 3..4]);
        assert_eq!(log.batting_after(), Side::Home);
    }

    #[test]
    fn test_runs_credit_side_at_bat() {
        let kinds = [
            PlayKind::Single,
            PlayKind::HomeRun,
            PlayKind::Out,
            PlayKind::Out,
            PlayKind::Out,
            PlayKind::Double,
            PlayKind::Double,
        ];
        let log = build(ctx(), &story(&kinds)).unwrap();

        assert_eq!(log.final_score(), Score::new(1, 2));
        assert_eq!(log.runs_for(Side::Away), 2);
        assert_eq!(log.runs_for(Side::Home), 1);
    }

    #[test]
    fn test_single_moves_runner_one_base() {
        let log = build(ctx(), &story(&[PlayKind::Double, PlayKind::Single])).unwrap();

        assert_eq!(log.final_score(), Score::default());
        assert!(log.final_state().first_base && log.final_state().third_base);
        assert!(!log.final_state().second_base);

        let log = build(ctx(), &story(&[PlayKind::Double, PlayKind::Double])).unwrap();
        assert_eq!(log.final_score().away, 1);
    }

    #[test]
    fn test_build_from_unsettled_state() {
        let broken = CountBaseState {
            outs: 3,
            ..CountBaseState::new(1)
        };
        let game = TrackedGame::resume(broken, Side::Away, Score::default());
        let err = build_from(game, &story(&[PlayKind::Ball])).unwrap_err();

        assert!(matches!(
            err,
            ReplayError::Event {
                index: 0,
                source: GameError::InvalidState { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_build_from_keeps_prior_score() {
        let game = TrackedGame::resume(
            CountBaseState::new(5).with_bases(false, false, true),
            Side::Home,
            Score::new(2, 3),
        );
        let log = build_from(game, &story(&[PlayKind::Single])).unwrap();
        assert_eq!(log.final_score(), Score::new(3, 3));
    }

    #[test]
    fn test_load_payload() {
        let body = r#"{
            "playTeam": "Marvel",
            "roundInfo": { "round": 2, "strike": 0, "ball": 0, "out": 0,
                           "firstBase": false, "secondBase": false, "thirdBase": false },
            "offenseTeam": { "teamName": "Marvel" },
            "defenseTeam": { "teamName": "Captin" },
            "homeTeam": "Marvel",
            "awayTeam": "Captin",
            "story": [
                { "playerId": 3, "play": "single" },
                { "playerId": 4, "play": "home_run" }
            ]
        }"#;
        let payload = parse_game(body).unwrap();
        let log = load(&payload).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.start_state().round, 2);
        assert_eq!(log.get(0).unwrap().batting, Side::Home);
        assert_eq!(log.final_score(), Score::new(2, 0));
    }

    #[test]
    fn test_random_stories_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5a9d_107);

        for _ in 0..200 {
            let len = rng.gen_range(0..80);
            let events = random_story(&mut rng, len);
            let log = build(ctx(), &events).unwrap();

            assert_eq!(log.len(), events.len());

            // No stored boundary values
            for entry in &log {
                assert!(entry.state.strikes < 3);
                assert!(entry.state.balls < 4);
                assert!(entry.state.outs < 3);
            }

            // Final score equals runs partitioned by the side at bat
            let mut expected = Score::default();
            let mut state = CountBaseState::new(1);
            let mut batting = Side::Away;
            for (event, entry) in events.iter().zip(log.iter()) {
                assert_eq!(entry.event, *event);
                let t = apply(state, event).unwrap();
                expected = expected.credit(batting, t.runs_scored);
                state = t.state;
                if t.inning_ended {
                    batting = batting.opposite();
                }
            }
            assert_eq!(log.final_score(), expected);
            assert_eq!(log.final_state(), state);

            // Pure: rebuilding yields the same log
            assert_eq!(build(ctx(), &events).unwrap(), log);
        }
    }
}
