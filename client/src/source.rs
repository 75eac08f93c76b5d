use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use sandlot_protocol::{
    GamePayload, PlayerScoreRow, Request, ScoreBoardPayload, TeamPair, parse_game,
    parse_player_scores, parse_scoreboard, parse_team_list,
};

/// Where game payloads come from.
///
/// Transport is left to the implementor. Each method returns a parsed
/// payload for one [`Request`].
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Current game state and story (`GET /games/start/TEAM`)
    async fn game(&self) -> Result<GamePayload>;

    /// Inning-by-inning scores for both teams (`GET /games/score`)
    async fn scoreboard(&self) -> Result<ScoreBoardPayload>;

    /// Player rows of one team (`GET /games/score/TEAM`)
    async fn player_scores(&self, team: &str) -> Result<Vec<PlayerScoreRow>>;

    /// Games available to join (`GET /games`)
    async fn games(&self) -> Result<Vec<TeamPair>> {
        Err(anyhow!("Game list not available from this source"))
    }
}

/// A source answering from JSON bodies held in memory
///
/// Bodies are keyed by request and can be replaced at any time, which makes
/// this useful for replays of saved responses and for tests.
pub struct StaticSource {
    team: String,
    bodies: Mutex<HashMap<Request, String>>,
}

impl StaticSource {
    /// Source for the game `team` is playing in
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            bodies: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_body(self, request: Request, body: impl Into<String>) -> Self {
        self.set_body(request, body);
        self
    }

    /// Replace the body returned for `request`
    pub fn set_body(&self, request: Request, body: impl Into<String>) {
        if let Ok(mut bodies) = self.bodies.lock() {
            bodies.insert(request, body.into());
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    fn body(&self, request: &Request) -> Result<String> {
        let bodies = self
            .bodies
            .lock()
            .map_err(|_| anyhow!("Response table poisoned"))?;
        bodies
            .get(request)
            .cloned()
            .ok_or_else(|| anyhow!("No response for {}", request))
    }
}

#[async_trait]
impl GameSource for StaticSource {
    async fn game(&self) -> Result<GamePayload> {
        let request = Request::GameStart(self.team.clone());
        let body = self.body(&request)?;
        parse_game(&body).with_context(|| format!("Failed to parse {}", request))
    }

    async fn scoreboard(&self) -> Result<ScoreBoardPayload> {
        let body = self.body(&Request::GameScore)?;
        parse_scoreboard(&body).with_context(|| format!("Failed to parse {}", Request::GameScore))
    }

    async fn player_scores(&self, team: &str) -> Result<Vec<PlayerScoreRow>> {
        let request = Request::PlayerScore(team.to_string());
        let body = self.body(&request)?;
        parse_player_scores(&body).with_context(|| format!("Failed to parse {}", request))
    }

    async fn games(&self) -> Result<Vec<TeamPair>> {
        let body = self.body(&Request::GameList)?;
        parse_team_list(&body).with_context(|| format!("Failed to parse {}", Request::GameList))
    }
}
