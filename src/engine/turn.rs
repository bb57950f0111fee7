//! The three-phase turn state machine.
//!
//! A turn is strictly linear: action phase, buy phase, cleanup. There are
//! no backward transitions; passing a phase moves forward, and Quit unwinds
//! the whole turn. Validation failures (bad identifier, unaffordable card)
//! never consume anything - the same prompt is simply asked again.

use crate::decision::Choice;
use crate::errors::GameError;
use crate::zones::transfer;

use super::context::{Flow, GameContext};
use super::effects::play_card;

/// Run one complete turn for the context's active seat.
pub fn run_turn(ctx: &mut GameContext<'_>) -> Result<Flow, GameError> {
    ctx.players[ctx.current].begin_turn();

    if action_phase(ctx)? == Flow::Quit {
        return Ok(Flow::Quit);
    }
    if buy_phase(ctx)? == Flow::Quit {
        return Ok(Flow::Quit);
    }

    // Cleanup is unconditional: no player choice involved.
    ctx.players[ctx.current].cleanup(ctx.rng)?;
    Ok(Flow::Continues)
}

/// Action phase: play action cards while action points last, or pass.
fn action_phase(ctx: &mut GameContext<'_>) -> Result<Flow, GameError> {
    while ctx.players[ctx.current].actions > 0 {
        let choice =
            ctx.providers[ctx.current].choose_action_card_to_play(&ctx.players[ctx.current].hand);

        match choice {
            Choice::Pass => {
                ctx.players[ctx.current].actions = 0;
                break;
            }
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => {
                let Some(card) = ctx.players[ctx.current].hand.get(id).copied() else {
                    continue;
                };
                if !card.is_action() {
                    continue;
                }

                // The action point is spent before the effect runs; the
                // card sits in the play area until cleanup.
                let player = &mut ctx.players[ctx.current];
                player.actions -= 1;
                transfer(&mut player.hand, &mut player.play_area, Some(&[id]))
                    .expect("identifier validated against hand");
                player.recompute_coins();

                if play_card(ctx, card)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
    }
    Ok(Flow::Continues)
}

/// Buy phase: purchase from the supply while buy points last, or pass.
fn buy_phase(ctx: &mut GameContext<'_>) -> Result<Flow, GameError> {
    while ctx.players[ctx.current].buys > 0 {
        ctx.players[ctx.current].recompute_coins();
        let coins = ctx.players[ctx.current].coins();
        let buys = ctx.players[ctx.current].buys;

        match ctx.providers[ctx.current].choose_card_to_buy(ctx.supply, coins, buys) {
            Choice::Pass => {
                ctx.players[ctx.current].buys = 0;
                break;
            }
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => match ctx.supply.resolve_purchase(id, coins, None) {
                Ok(card) => {
                    let player = &mut ctx.players[ctx.current];
                    player.debit_coins(card.cost);
                    player.add_buys(-1);
                    player.discard.add([card]);
                    player.recompute_coins();
                }
                // Validation failure: state untouched, ask again.
                Err(_) => continue,
            },
        }
    }
    Ok(Flow::Continues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Catalog};
    use crate::core::GameRng;
    use crate::decision::{DecisionProvider, ScriptedDecisions};
    use crate::players::Player;
    use crate::zones::{KingdomSetup, Supply, Zone};

    struct Table {
        players: Vec<Player>,
        providers: Vec<Box<dyn DecisionProvider>>,
        supply: Supply,
        trash: Zone,
        rng: GameRng,
    }

    fn table(names: &[&str], scripts: Vec<ScriptedDecisions>, seed: u64) -> Table {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(seed);
        let players: Vec<Player> = names
            .iter()
            .map(|name| Player::new(*name, &catalog, &mut rng))
            .collect();
        let supply = Supply::new(&catalog, names.len(), KingdomSetup::FirstGame, &mut rng);
        Table {
            players,
            providers: scripts
                .into_iter()
                .map(|s| Box::new(s) as Box<dyn DecisionProvider>)
                .collect(),
            supply,
            trash: Zone::new(),
            rng,
        }
    }

    fn run(table: &mut Table, current: usize) -> Result<Flow, GameError> {
        let mut ctx = GameContext::new(
            &mut table.players,
            &mut table.providers,
            current,
            &mut table.supply,
            &mut table.trash,
            &mut table.rng,
        );
        run_turn(&mut ctx)
    }

    #[test]
    fn test_pass_pass_turn_reaches_cleanup() {
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([Choice::Pass, Choice::Pass]),
                ScriptedDecisions::new(),
            ],
            42,
        );

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Continues);
        let p = &table.players[0];
        assert_eq!(p.turns_taken(), 1);
        assert_eq!(p.hand.len(), 5);
        assert!(p.play_area.is_empty());
        assert_eq!(p.actions, 1);
    }

    #[test]
    fn test_buy_copper_with_starting_hand() {
        // Starting hands always afford Copper (cost 0); pile id 0.
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([
                    Choice::Pass,    // action phase
                    Choice::Card(0), // buy Copper
                    Choice::Pass,    // end buy phase
                ]),
                ScriptedDecisions::new(),
            ],
            42,
        );
        let copper_before = table.supply.base_piles()[0].remaining();

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Continues);
        assert_eq!(table.supply.base_piles()[0].remaining(), copper_before - 1);
        // The bought card went to discard, then cleanup swept the old hand
        // on top; the player now owns 11 cards.
        let p = &table.players[0];
        let owned = p.deck.len() + p.hand.len() + p.discard.len();
        assert_eq!(owned, 11);
    }

    #[test]
    fn test_failed_buy_leaves_state_unchanged_and_reprompts() {
        // Province (id 5) costs 8; a starting hand holds at most 5 coins.
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([
                    Choice::Pass,    // action phase
                    Choice::Card(5), // too expensive, re-prompt
                    Choice::Pass,    // give up
                ]),
                ScriptedDecisions::new(),
            ],
            42,
        );
        let provinces_before = table.supply.provinces_remaining();

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Continues);
        assert_eq!(table.supply.provinces_remaining(), provinces_before);
        // Cleanup ran, so the turn ended normally with nothing bought.
        let p = &table.players[0];
        assert_eq!(p.deck.len() + p.hand.len() + p.discard.len(), 10);
    }

    #[test]
    fn test_playing_festival_spends_point_before_grants() {
        // Quit right after the play freezes the counters mid-phase, so the
        // decrement-then-grant ordering is observable: 1 - 1 + 2 actions.
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([Choice::Card(0), Choice::Quit]),
                ScriptedDecisions::new(),
            ],
            42,
        );
        let catalog = Catalog::standard();
        let festival = catalog.card(CardType::Festival);
        let copper = catalog.card(CardType::Copper);
        table.players[0].hand =
            Zone::from_cards(vec![festival, copper, copper, copper, copper]);
        table.players[0].recompute_coins();

        let mut ctx = GameContext::new(
            &mut table.players,
            &mut table.providers,
            0,
            &mut table.supply,
            &mut table.trash,
            &mut table.rng,
        );
        let flow = action_phase(&mut ctx).unwrap();

        assert_eq!(flow, Flow::Quit);
        let p = &table.players[0];
        assert_eq!(p.actions, 2);
        assert_eq!(p.buys, 2);
        assert_eq!(p.turn_coins(), 2);
        assert_eq!(p.hand.len(), 4);
        assert_eq!(p.play_area.len(), 1);
        assert_eq!(p.play_area.get(0).unwrap().ty, CardType::Festival);
    }

    #[test]
    fn test_played_smithy_swept_at_cleanup() {
        let mut table = table(
            &["a", "b"],
            vec![
                // Playing Smithy leaves 0 actions, so the phase ends on
                // its own; the Pass ends the buy phase.
                ScriptedDecisions::from_choices([Choice::Card(0), Choice::Pass]),
                ScriptedDecisions::new(),
            ],
            42,
        );
        let catalog = Catalog::standard();
        let smithy = catalog.card(CardType::Smithy);
        let copper = catalog.card(CardType::Copper);
        table.players[0].hand = Zone::from_cards(vec![smithy, copper, copper, copper, copper]);
        table.players[0].recompute_coins();

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Continues);
        let p = &table.players[0];
        // Smithy drew 3, then cleanup swept play area and hand to discard
        // and dealt a fresh 5.
        assert_eq!(p.hand.len(), 5);
        assert!(p.play_area.is_empty());
        assert!(p.discard.cards().iter().any(|c| c.ty == CardType::Smithy));
        assert_eq!(p.actions, 1);
    }

    #[test]
    fn test_quit_unwinds_without_cleanup() {
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([Choice::Quit]),
                ScriptedDecisions::new(),
            ],
            42,
        );

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Quit);
        // Turn was abandoned mid-action-phase: no cleanup happened.
        assert_eq!(table.players[0].turns_taken(), 1);
    }

    #[test]
    fn test_invalid_action_selection_reprompts() {
        // Identifier 99 is not in hand; a treasure is not an action card.
        let mut table = table(
            &["a", "b"],
            vec![
                ScriptedDecisions::from_choices([
                    Choice::Card(99),
                    Choice::Card(0), // starting hands hold no action cards
                    Choice::Pass,
                    Choice::Pass, // buy phase
                ]),
                ScriptedDecisions::new(),
            ],
            42,
        );

        let flow = run(&mut table, 0).unwrap();

        assert_eq!(flow, Flow::Continues);
        // No action point was consumed by the invalid attempts.
        assert_eq!(table.players[0].actions, 1);
    }
}
