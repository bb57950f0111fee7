//! End-of-game scoring and ranking.

use serde::Serialize;

use crate::players::Player;

/// One player's final line on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Player display name.
    pub name: String,
    /// Final victory point total.
    pub victory_points: i64,
    /// Turns the player started.
    pub turns_taken: u32,
    /// Competition rank, 1-based. Ties share a rank and the next rank
    /// skips: scores 30/30/25 rank 1, 1, 3.
    pub rank: usize,
}

/// The final scoreboard, best score first.
#[derive(Clone, Debug, Serialize)]
pub struct Scoreboard {
    standings: Vec<Standing>,
}

impl Scoreboard {
    /// Finalize every player's collection and rank them.
    ///
    /// Each player's owned cards are gathered and their victory points
    /// banked, so this consumes the playable game state.
    #[must_use]
    pub fn tally(players: &mut [Player]) -> Self {
        for player in players.iter_mut() {
            player.finalize_for_scoring();
        }

        let mut standings: Vec<Standing> = players
            .iter()
            .map(|player| Standing {
                name: player.name().to_string(),
                victory_points: player.victory_points(),
                turns_taken: player.turns_taken(),
                rank: 0,
            })
            .collect();
        standings.sort_by(|a, b| b.victory_points.cmp(&a.victory_points));

        // Competition ranking: a player's rank is one more than the number
        // of strictly better scores.
        for i in 0..standings.len() {
            let better = standings
                .iter()
                .filter(|s| s.victory_points > standings[i].victory_points)
                .count();
            standings[i].rank = better + 1;
        }

        Self { standings }
    }

    /// The standings, best score first.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// The winners (every standing sharing rank 1).
    #[must_use]
    pub fn winners(&self) -> Vec<&Standing> {
        self.standings.iter().filter(|s| s.rank == 1).collect()
    }
}
