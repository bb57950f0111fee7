//! Whole-game setup and the round-robin loop.

use crate::cards::Catalog;
use crate::core::GameRng;
use crate::decision::DecisionProvider;
use crate::engine::{run_turn, Flow, GameContext};
use crate::errors::GameError;
use crate::players::Player;
use crate::zones::{KingdomSetup, Supply, Zone};

use super::scoring::Scoreboard;

/// How a game ended.
#[derive(Debug)]
pub enum GameOutcome {
    /// The supply's end condition fired; scores were tallied.
    Completed {
        /// Final standings.
        scoreboard: Scoreboard,
        /// Rounds started before the game ended.
        rounds: u32,
    },
    /// A player quit mid-game. Nothing is scored.
    Abandoned {
        /// Rounds started before the quit.
        rounds: u32,
    },
}

/// Builder for a [`Game`].
///
/// Seating order is randomized at build time from the game seed; the
/// provider given for a name stays attached to that player through the
/// shuffle.
pub struct GameBuilder {
    names: Vec<String>,
    setup: KingdomSetup,
    seed: u64,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            setup: KingdomSetup::default(),
            seed: 0,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player by display name.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Select the kingdom setup (ignored for 1 player, which always plays
    /// the solo kingdom).
    pub fn kingdom(mut self, setup: KingdomSetup) -> Self {
        self.setup = setup;
        self
    }

    /// Seed for every random event in the game.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the game, pairing `providers[i]` with the i-th added player.
    ///
    /// Panics unless 1-4 players were added and `providers` matches them
    /// one to one.
    pub fn build(self, providers: Vec<Box<dyn DecisionProvider>>) -> Game {
        assert!(
            (1..=4).contains(&self.names.len()),
            "Player count must be 1-4, got {}",
            self.names.len()
        );
        assert_eq!(
            self.names.len(),
            providers.len(),
            "each player needs a decision provider"
        );

        let catalog = Catalog::standard();
        let mut rng = GameRng::new(self.seed);

        let mut seats: Vec<(Player, Box<dyn DecisionProvider>)> = self
            .names
            .into_iter()
            .zip(providers)
            .map(|(name, provider)| (Player::new(name, &catalog, &mut rng), provider))
            .collect();
        rng.shuffle(&mut seats);

        let supply = Supply::new(&catalog, seats.len(), self.setup, &mut rng);
        let (players, providers) = seats.into_iter().unzip();

        Game {
            players,
            providers,
            supply,
            trash: Zone::new(),
            rng,
        }
    }
}

/// A fully set up game, ready to run.
pub struct Game {
    players: Vec<Player>,
    providers: Vec<Box<dyn DecisionProvider>>,
    supply: Supply,
    trash: Zone,
    rng: GameRng,
}

impl Game {
    /// The players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The shared supply.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Play the game to its end.
    ///
    /// Turns run round-robin in seating order. The supply's end condition
    /// is checked before every turn, so a pile emptied mid-round ends the
    /// game before the next player acts. Consumes the game: scoring
    /// dismantles the player collections.
    pub fn run(mut self) -> Result<GameOutcome, GameError> {
        let mut rounds = 0u32;
        loop {
            rounds += 1;
            for seat in 0..self.players.len() {
                if self.supply.is_end_of_game() {
                    return Ok(GameOutcome::Completed {
                        scoreboard: Scoreboard::tally(&mut self.players),
                        rounds,
                    });
                }

                let mut ctx = GameContext::new(
                    &mut self.players,
                    &mut self.providers,
                    seat,
                    &mut self.supply,
                    &mut self.trash,
                    &mut self.rng,
                );
                if run_turn(&mut ctx)? == Flow::Quit {
                    return Ok(GameOutcome::Abandoned { rounds });
                }
            }
        }
    }
}
