//! Interpretation of played action cards.
//!
//! Cards carry data, this module carries the behavior: the numeric grants
//! of an [`ActionProfile`] are applied unconditionally, then the scripted
//! [`SpecialEffect`] (if any) runs, prompting the relevant providers for its
//! sub-choices. Attack cards route their special through every opponent
//! instead of the player who played them.

use crate::cards::{Card, CardClass, CardType, GainDestination, SpecialEffect};
use crate::decision::Choice;
use crate::errors::GameError;
use crate::zones::transfer;

use super::context::{Flow, GameContext};

/// Resolve a card already moved to the active player's play area.
///
/// The caller has validated the card and spent the action point; this
/// applies the profile's grants and dispatches its special effect.
pub fn play_card(ctx: &mut GameContext<'_>, card: Card) -> Result<Flow, GameError> {
    let profile = *card
        .action_profile()
        .expect("only action cards reach play_card");

    if profile.cards > 0 {
        ctx.players[ctx.current].draw(profile.cards as usize, ctx.rng)?;
    }
    let player = &mut ctx.players[ctx.current];
    player.add_actions(profile.actions);
    player.add_buys(profile.buys);
    player.add_coins(profile.coin);
    player.recompute_coins();

    if profile.attack {
        return resolve_attack(ctx, profile.special);
    }
    if let Some(special) = profile.special {
        return apply_special(ctx, special);
    }
    Ok(Flow::Continues)
}

/// Run a special effect for the active player.
fn apply_special(ctx: &mut GameContext<'_>, special: SpecialEffect) -> Result<Flow, GameError> {
    match special {
        SpecialEffect::DiscardThenDraw => discard_then_draw(ctx),
        SpecialEffect::CoinPerSilverInHand => {
            let player = &mut ctx.players[ctx.current];
            let silver_in_hand = player
                .hand
                .cards()
                .iter()
                .any(|card| card.ty == CardType::Silver);
            if silver_in_hand {
                player.add_coins(1);
                player.recompute_coins();
            }
            Ok(Flow::Continues)
        }
        // Only meaningful under an attack; a non-attack card never forces
        // its own player's hand down.
        SpecialEffect::ForceDiscardDown { .. } => Ok(Flow::Continues),
        SpecialEffect::TrashAndUpgrade {
            cost_bonus,
            required,
            destination,
        } => trash_and_upgrade(ctx, cost_bonus, required, destination),
        SpecialEffect::GainUpTo { max_cost } => {
            gain(ctx, max_cost, None, GainDestination::Discard)
        }
    }
}

/// Discard any number of cards, then draw that many.
fn discard_then_draw(ctx: &mut GameContext<'_>) -> Result<Flow, GameError> {
    let mut discarded = 0usize;
    loop {
        let choice =
            ctx.providers[ctx.current].choose_card_to_discard(&ctx.players[ctx.current].hand);
        match choice {
            Choice::Pass => break,
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => {
                let player = &mut ctx.players[ctx.current];
                if !player.hand.contains_id(id) {
                    continue;
                }
                transfer(&mut player.hand, &mut player.discard, Some(&[id]))
                    .expect("identifier validated against hand");
                discarded += 1;
            }
        }
    }

    if discarded > 0 {
        ctx.players[ctx.current].draw(discarded, ctx.rng)?;
    }
    ctx.players[ctx.current].recompute_coins();
    Ok(Flow::Continues)
}

/// Trash one card from hand, then gain one costing up to the trashed card's
/// cost plus `cost_bonus`. Declining the trash skips the whole effect.
fn trash_and_upgrade(
    ctx: &mut GameContext<'_>,
    cost_bonus: i64,
    required: Option<CardClass>,
    destination: GainDestination,
) -> Result<Flow, GameError> {
    let trashed_cost = loop {
        let choice = ctx.providers[ctx.current]
            .choose_card_to_trash(&ctx.players[ctx.current].hand, required);
        match choice {
            Choice::Pass => return Ok(Flow::Continues),
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => {
                let player = &mut ctx.players[ctx.current];
                let Some(card) = player.hand.get(id) else {
                    continue;
                };
                if required.is_some_and(|class| card.class() != class) {
                    continue;
                }
                let cost = card.cost;
                transfer(&mut player.hand, ctx.trash, Some(&[id]))
                    .expect("identifier validated against hand");
                player.recompute_coins();
                break cost;
            }
        }
    };

    gain(ctx, trashed_cost + cost_bonus, required, destination)
}

/// Prompt the active player to gain a supply card costing at most
/// `max_cost`. No coin or buy is spent; invalid picks re-prompt.
fn gain(
    ctx: &mut GameContext<'_>,
    max_cost: i64,
    required: Option<CardClass>,
    destination: GainDestination,
) -> Result<Flow, GameError> {
    loop {
        let choice = ctx.providers[ctx.current].choose_card_to_gain(
            ctx.supply,
            max_cost,
            required,
            destination,
        );
        match choice {
            Choice::Pass => return Ok(Flow::Continues),
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => match ctx.supply.resolve_purchase(id, max_cost, required) {
                Ok(card) => {
                    let player = &mut ctx.players[ctx.current];
                    match destination {
                        GainDestination::Hand => {
                            player.hand.add([card]);
                            player.recompute_coins();
                        }
                        GainDestination::Discard => player.discard.add([card]),
                    }
                    return Ok(Flow::Continues);
                }
                Err(_) => continue,
            },
        }
    }
}

/// Apply an attack's special to every opponent in play order.
///
/// An opponent holding a reaction card in hand is skipped entirely.
fn resolve_attack(
    ctx: &mut GameContext<'_>,
    special: Option<SpecialEffect>,
) -> Result<Flow, GameError> {
    let Some(special) = special else {
        return Ok(Flow::Continues);
    };

    let targets: Vec<usize> = ctx.opponent_indices().collect();
    for seat in targets {
        if ctx.players[seat].holds_reaction() {
            continue;
        }
        if let SpecialEffect::ForceDiscardDown { hand_limit } = special {
            if force_discard_down(ctx, seat, hand_limit)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }
    Ok(Flow::Continues)
}

/// Force `seat` to discard down to `hand_limit` cards.
///
/// Pass is not an escape here: the prompt repeats until the hand is small
/// enough. Only Quit breaks out.
fn force_discard_down(
    ctx: &mut GameContext<'_>,
    seat: usize,
    hand_limit: usize,
) -> Result<Flow, GameError> {
    while ctx.players[seat].hand.len() > hand_limit {
        match ctx.providers[seat].choose_card_to_discard(&ctx.players[seat].hand) {
            Choice::Pass => continue,
            Choice::Quit => return Ok(Flow::Quit),
            Choice::Card(id) => {
                let player = &mut ctx.players[seat];
                if !player.hand.contains_id(id) {
                    continue;
                }
                transfer(&mut player.hand, &mut player.discard, Some(&[id]))
                    .expect("identifier validated against hand");
            }
        }
    }
    ctx.players[seat].recompute_coins();
    Ok(Flow::Continues)
}
