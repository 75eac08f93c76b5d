//! Prints a game's replay and scoreboard from saved responses.
//!
//! Usage: `cargo run --example replay_printer -- <dir>`
//!
//! `<dir>` holds `game.json`, `score.json`, `home.json` and `away.json`.
//! Without a directory a built-in sample game is printed. `SANDLOT_TEAM`
//! picks the team whose view is shown.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sandlot_client::{
    Request, Session, SessionConfig, Snapshot, SnapshotHandler, StaticSource,
};
use sandlot_game::Side;
use sandlot_protocol::parse_game;
use sandlot_replay::Playback;
use sandlot_team::{Roster, aggregate_appearances};

const SAMPLE_GAME: &str = r#"{
    "playTeam": "Marvel",
    "roundInfo": { "round": 3, "strike": 0, "ball": 0, "out": 0,
                   "firstBase": false, "secondBase": false, "thirdBase": false },
    "offenseTeam": { "teamName": "Captin" },
    "defenseTeam": { "teamName": "Marvel" },
    "homeTeam": "Marvel",
    "awayTeam": "Captin",
    "story": [
        { "playerId": 11, "play": "ball" },
        { "playerId": 11, "play": "double" },
        { "playerId": 12, "play": "strike" },
        { "playerId": 12, "play": "foul" },
        { "playerId": 12, "play": "strike" },
        { "playerId": 13, "play": "walk" },
        { "playerId": 14, "play": "homerun" },
        { "playerId": 15, "play": "out" },
        { "playerId": 16, "play": "out" }
    ]
}"#;

const SAMPLE_SCORE: &str = r#"{
    "homeTeam": { "teamName": "Marvel", "scores": [1] },
    "awayTeam": { "teamName": "Captin", "scores": [0, 3] }
}"#;

const SAMPLE_HOME: &str = r#"[
    { "id": 1, "name": "Kim", "tpa": 1, "hits": 1, "out": 0 },
    { "id": 2, "name": "Lee", "tpa": 1, "hits": 0, "out": 1 }
]"#;

const SAMPLE_AWAY: &str = r#"[
    { "id": 11, "name": "Ryu", "tpa": 1, "hits": 1, "out": 0 },
    { "id": 12, "name": "Choo", "tpa": 1, "hits": 0, "out": 1 },
    { "id": 13, "name": "Park", "tpa": 1, "hits": 0, "out": 0 },
    { "id": 14, "name": "Oh", "tpa": 1, "hits": 1, "out": 0 }
]"#;

struct Printer;

#[async_trait]
impl SnapshotHandler for Printer {
    async fn on_snapshot(&mut self, snapshot: Arc<Snapshot>) {
        print_snapshot(&snapshot);
    }

    async fn on_closed(&mut self) {
        println!("-- session closed --");
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    println!(
        "{} {} - {} {}  [{}]",
        snapshot.away_team, snapshot.score.away, snapshot.score.home, snapshot.home_team,
        snapshot.state
    );
    if snapshot.is_user_batting() {
        println!("Your team is batting");
    }

    let mut playback = Playback::new(&snapshot.replay);
    while !playback.is_at_end() {
        let Some(entry) = playback.step() else { break };
        let (offense, defense) = entry.accumulated_score();
        println!(
            "  {:>3} {:<10} -> {}  ({}-{})",
            entry.event.player, entry.event.kind, entry.state, offense, defense
        );
    }

    for side in [Side::Away, Side::Home] {
        let team = snapshot.scoreboard.team(side);
        let innings: Vec<String> = team.inning_runs.iter().map(u32::to_string).collect();
        let total = team.total();
        println!(
            "{:<8} {}  R {}  TPA {} H {} O {}",
            team.team_name,
            innings.join(" "),
            team.runs(),
            total.tpa,
            total.hits,
            total.out
        );
    }

    let batting = snapshot.scoreboard.team(snapshot.batting);
    let roster = batting
        .players
        .iter()
        .fold(Roster::new(batting.team_name.clone()), |roster, p| {
            roster.with_player(p.id, p.name.clone())
        });
    let this_inning = roster.label(aggregate_appearances(
        snapshot
            .replay
            .appearances()
            .map(|(player, _, appearance)| (player, appearance)),
    ));
    for board in this_inning.iter().filter(|b| b.tpa > 0) {
        println!("  {} {:<6} {}/{}", board.id, board.name, board.hits, board.tpa);
    }
}

fn load_source(team: &str, dir: Option<&Path>) -> Result<StaticSource> {
    let read = |name: &str, sample: &str| -> Result<String> {
        match dir {
            Some(dir) => {
                let path = dir.join(name);
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
            None => Ok(sample.to_string()),
        }
    };

    let game = read("game.json", SAMPLE_GAME)?;
    let parsed = parse_game(&game).context("Failed to parse game.json")?;

    Ok(StaticSource::new(team)
        .with_body(Request::GameStart(team.to_string()), game)
        .with_body(Request::GameScore, read("score.json", SAMPLE_SCORE)?)
        .with_body(Request::PlayerScore(parsed.home_team), read("home.json", SAMPLE_HOME)?)
        .with_body(Request::PlayerScore(parsed.away_team), read("away.json", SAMPLE_AWAY)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_env();
    let team = config.team.clone().unwrap_or_else(|| "Marvel".to_string());
    let dir = std::env::args().nth(1);
    let source = load_source(&team, dir.as_deref().map(Path::new))?;

    let session = Session::new(config, source);
    let subscription = session.subscribe();
    let printer = tokio::spawn(async move { subscription.run(&mut Printer).await });

    session.refresh().await?;
    drop(session);
    printer.await?;

    Ok(())
}
