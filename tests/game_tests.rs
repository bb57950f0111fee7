//! Whole-game tests through the public API.
//!
//! A simple "big money" provider (never plays actions, buys the best
//! affordable treasure or a Province) is enough to drive complete games:
//! it drains the Province pile and exercises setup, the turn loop, deck
//! cycling, and scoring end to end.

use dominion_core::{
    Choice, DecisionProvider, GameBuilder, GameOutcome, KingdomSetup, ScriptedDecisions, Supply,
    Zone,
};

/// Buys Province > Gold > Silver, passes everything else.
struct BigMoney;

impl DecisionProvider for BigMoney {
    fn choose_card_to_discard(&mut self, hand: &Zone) -> Choice {
        // Only reached under attack: discard from the front.
        Choice::Card(hand.id_start())
    }

    fn choose_card_to_trash(
        &mut self,
        _hand: &Zone,
        _required: Option<dominion_core::CardClass>,
    ) -> Choice {
        Choice::Pass
    }

    fn choose_action_card_to_play(&mut self, _hand: &Zone) -> Choice {
        Choice::Pass
    }

    fn choose_card_to_buy(
        &mut self,
        _supply: &Supply,
        available_coins: i64,
        _available_buys: i64,
    ) -> Choice {
        // Base pile identifiers: Silver 1, Gold 2, Province 5.
        match available_coins {
            c if c >= 8 => Choice::Card(5),
            c if c >= 6 => Choice::Card(2),
            c if c >= 3 => Choice::Card(1),
            _ => Choice::Pass,
        }
    }

    fn choose_card_to_gain(
        &mut self,
        _supply: &Supply,
        _max_cost: i64,
        _required: Option<dominion_core::CardClass>,
        _destination: dominion_core::GainDestination,
    ) -> Choice {
        Choice::Pass
    }
}

/// Big money plus one Smithy: buys a single Smithy and plays any action
/// card it draws, listing the hand by identifier to find it.
struct SmithyMoney {
    owns_smithy: bool,
}

impl DecisionProvider for SmithyMoney {
    fn choose_card_to_discard(&mut self, hand: &Zone) -> Choice {
        Choice::Card(hand.id_start())
    }

    fn choose_card_to_trash(
        &mut self,
        _hand: &Zone,
        _required: Option<dominion_core::CardClass>,
    ) -> Choice {
        Choice::Pass
    }

    fn choose_action_card_to_play(&mut self, hand: &Zone) -> Choice {
        match hand.iter_with_ids().find(|(_, card)| card.is_action()) {
            Some((id, _)) => Choice::Card(id),
            None => Choice::Pass,
        }
    }

    fn choose_card_to_buy(
        &mut self,
        _supply: &Supply,
        available_coins: i64,
        _available_buys: i64,
    ) -> Choice {
        // Pile identifiers: Silver 1, Gold 2, Province 5, Smithy 13 in the
        // first-game kingdom.
        if available_coins >= 8 {
            Choice::Card(5)
        } else if available_coins >= 6 {
            Choice::Card(2)
        } else if !self.owns_smithy && available_coins >= 4 {
            self.owns_smithy = true;
            Choice::Card(13)
        } else if available_coins >= 3 {
            Choice::Card(1)
        } else {
            Choice::Pass
        }
    }

    fn choose_card_to_gain(
        &mut self,
        _supply: &Supply,
        _max_cost: i64,
        _required: Option<dominion_core::CardClass>,
        _destination: dominion_core::GainDestination,
    ) -> Choice {
        Choice::Pass
    }
}

fn big_money_game(names: &[&str], setup: KingdomSetup, seed: u64) -> GameOutcome {
    let mut builder = GameBuilder::new().kingdom(setup).seed(seed);
    for name in names {
        builder = builder.player(*name);
    }
    let providers = names
        .iter()
        .map(|_| Box::new(BigMoney) as Box<dyn DecisionProvider>)
        .collect();
    builder.build(providers).run().expect("game runs to the end")
}

#[test]
fn test_two_player_game_runs_to_completion() {
    let outcome = big_money_game(&["Alice", "Bob"], KingdomSetup::FirstGame, 42);

    let GameOutcome::Completed { scoreboard, rounds } = outcome else {
        panic!("big money never quits");
    };

    assert!(rounds > 1);
    let standings = scoreboard.standings();
    assert_eq!(standings.len(), 2);

    // Best score first, competition ranks starting at 1.
    assert!(standings[0].victory_points >= standings[1].victory_points);
    assert_eq!(standings[0].rank, 1);
    assert!(!scoreboard.winners().is_empty());

    // Big money piles up Provinces: both players should far outscore the
    // 3 points a starting deck is worth.
    assert!(standings[0].victory_points > 3);
    for standing in standings {
        assert!(standing.turns_taken > 0);
    }
}

#[test]
fn test_same_seed_reproduces_the_game() {
    let run = |seed| match big_money_game(&["Alice", "Bob"], KingdomSetup::FirstGame, seed) {
        GameOutcome::Completed { scoreboard, rounds } => (
            rounds,
            scoreboard
                .standings()
                .iter()
                .map(|s| (s.name.clone(), s.victory_points, s.rank))
                .collect::<Vec<_>>(),
        ),
        GameOutcome::Abandoned { .. } => panic!("big money never quits"),
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn test_solo_game_completes() {
    // 1 player always gets the solo kingdom, whatever the builder says.
    let outcome = big_money_game(&["Alice"], KingdomSetup::FirstGame, 7);

    let GameOutcome::Completed { scoreboard, .. } = outcome else {
        panic!("big money never quits");
    };
    assert_eq!(scoreboard.standings().len(), 1);
    assert_eq!(scoreboard.standings()[0].rank, 1);
}

#[test]
fn test_four_player_random_kingdom_completes() {
    let outcome = big_money_game(
        &["a", "b", "c", "d"],
        KingdomSetup::Random,
        99,
    );

    let GameOutcome::Completed { scoreboard, .. } = outcome else {
        panic!("big money never quits");
    };
    assert_eq!(scoreboard.standings().len(), 4);

    // Ranks are a valid competition ranking over 4 players.
    let ranks: Vec<usize> = scoreboard.standings().iter().map(|s| s.rank).collect();
    assert_eq!(ranks[0], 1);
    for window in ranks.windows(2) {
        assert!(window[0] <= window[1]);
    }
}

#[test]
fn test_game_with_played_actions_completes() {
    let game = GameBuilder::new()
        .player("Draw")
        .player("Money")
        .kingdom(KingdomSetup::FirstGame)
        .seed(42)
        .build(vec![
            Box::new(SmithyMoney { owns_smithy: false }),
            Box::new(BigMoney),
        ]);

    let GameOutcome::Completed { scoreboard, rounds } = game.run().expect("game runs to the end")
    else {
        panic!("neither strategy quits");
    };

    assert!(rounds > 1);
    let standings = scoreboard.standings();
    assert_eq!(standings.len(), 2);
    // The winner bought Provinces; nobody scores below a starting deck.
    assert!(standings[0].victory_points > 3);
    assert!(standings.iter().all(|s| s.victory_points >= 3));
}

#[test]
fn test_quit_on_first_prompt_abandons() {
    let game = GameBuilder::new()
        .player("Alice")
        .player("Bob")
        .seed(42)
        .build(vec![
            Box::new(ScriptedDecisions::new()),
            Box::new(ScriptedDecisions::new()),
        ]);

    match game.run().expect("quit is not an error") {
        GameOutcome::Abandoned { rounds } => assert_eq!(rounds, 1),
        GameOutcome::Completed { .. } => panic!("empty scripts quit immediately"),
    }
}
