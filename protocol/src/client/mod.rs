/// Requests the client can make against the game service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// GET /games
    GameList,

    /// GET /games/start/TEAM
    GameStart(String),

    /// GET /games/score
    GameScore,

    /// GET /games/score/TEAM
    PlayerScore(String),
}

impl Request {
    /// Path of the endpoint serving this request
    pub fn path(&self) -> String {
        match self {
            Self::GameList => "/games".to_string(),
            Self::GameStart(team) => format!("/games/start/{}", team),
            Self::GameScore => "/games/score".to_string(),
            Self::PlayerScore(team) => format!("/games/score/{}", team),
        }
    }

    /// Team name this request is scoped to, if any
    pub fn team(&self) -> Option<&str> {
        match self {
            Self::GameStart(team) | Self::PlayerScore(team) => Some(team),
            Self::GameList | Self::GameScore => None,
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_paths() {
        assert_eq!(Request::GameList.path(), "/games");
        assert_eq!(Request::GameStart("Marvel".into()).path(), "/games/start/Marvel");
        assert_eq!(Request::GameScore.path(), "/games/score");
        assert_eq!(Request::PlayerScore("Captin".into()).path(), "/games/score/Captin");
    }

    #[test]
    fn test_request_team() {
        assert_eq!(Request::PlayerScore("Marvel".into()).team(), Some("Marvel"));
        assert_eq!(Request::GameScore.team(), None);
    }
}
