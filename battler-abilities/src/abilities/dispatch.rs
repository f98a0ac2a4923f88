use battler_prng::PseudoRandomNumberGenerator;
use log::{
    debug,
    trace,
};

use crate::{
    abilities::{
        AbAttrHook,
        Ability,
        AbilityAttribute,
        AbilityCatalog,
        DecisionContext,
        EffectContext,
    },
    battle::{
        Battle,
        MonHandle,
    },
    error::Error,
};

/// Options for a single dispatch of a hook.
#[derive(Default)]
pub struct DispatchOptions<'m> {
    simulated: bool,
    show_ability_instant: bool,
    messages: Option<&'m mut Vec<String>>,
}

impl<'m> DispatchOptions<'m> {
    pub fn new(simulated: bool) -> Self {
        Self {
            simulated,
            ..Default::default()
        }
    }

    /// Shows ability indicators immediately, rather than queueing them in turn order.
    pub fn show_ability_instant(mut self) -> Self {
        self.show_ability_instant = true;
        self
    }

    /// Collects the trigger message of every applied attribute, even in simulated dispatch.
    pub fn with_messages(mut self, messages: Option<&'m mut Vec<String>>) -> Self {
        self.messages = messages;
        self
    }
}

/// Resolves the ability in a slot, if the Mon can currently apply it.
fn ability_for_slot<'c>(
    battle: &Battle,
    catalog: &'c AbilityCatalog,
    mon: MonHandle,
    passive: bool,
) -> Result<Option<&'c Ability>, Error> {
    if !battle.can_apply_ability(mon, passive)? {
        return Ok(None);
    }
    let mon_ref = battle.mon(mon)?;
    let Some(id) = mon_ref.ability_in_slot(passive) else {
        return Ok(None);
    };
    // The same ability in both slots only applies once.
    if passive && mon_ref.ability_in_slot(false) == Some(id) {
        return Ok(None);
    }
    let ability = catalog.ability(id)?;
    if !ability.conditions_met(battle, mon) {
        return Ok(None);
    }
    Ok(Some(ability))
}

/// Applies every attribute for a hook on the abilities of a Mon.
///
/// The primary ability is always evaluated before the passive ability. Attributes are evaluated in
/// the order they were declared on the ability.
///
/// Returns `true` if any attribute applied.
pub fn apply_ab_attrs<A>(
    battle: &mut Battle,
    mon: MonHandle,
    args: &mut A::Args<'_>,
    options: DispatchOptions<'_>,
) -> Result<bool, Error>
where
    A: AbAttrHook,
{
    if options.simulated {
        let mut prng = battle.fork_prng();
        return simulate_ab_attrs::<A>(battle, prng.as_mut(), mon, args, options.messages);
    }

    let DispatchOptions {
        show_ability_instant,
        mut messages,
        ..
    } = options;
    let catalog = battle.catalog_handle();
    let mut applied = false;
    for passive in [false, true] {
        let Some(ability) = ability_for_slot(battle, &catalog, mon, passive)? else {
            continue;
        };
        for (attribute, attr) in ability.attributes_for::<A>() {
            if !attribute.conditions_met(battle, mon) {
                continue;
            }
            battle.queue_mut().begin_splice();
            let result = apply_attr_live(
                battle,
                mon,
                ability,
                passive,
                attribute,
                attr,
                args,
                show_ability_instant,
                messages.as_deref_mut(),
            );
            battle.queue_mut().end_splice();
            applied |= result?;
        }
    }
    Ok(applied)
}

#[allow(clippy::too_many_arguments)]
fn apply_attr_live<A>(
    battle: &mut Battle,
    mon: MonHandle,
    ability: &Ability,
    passive: bool,
    attribute: &AbilityAttribute,
    attr: &A,
    args: &mut A::Args<'_>,
    show_ability_instant: bool,
    messages: Option<&mut Vec<String>>,
) -> Result<bool, Error>
where
    A: AbAttrHook,
{
    let mut prng = battle.fork_prng();
    let applies = {
        let mut context =
            DecisionContext::new(battle, prng.as_mut(), mon, ability, passive, false);
        attr.can_apply(&mut context, args)
    };
    battle.commit_prng(prng);
    if !applies {
        return Ok(false);
    }

    // The indicator and message resolve before any phases queued by the effect.
    let first_in_battle = !battle.mon(mon)?.ledger.applied_in_battle(ability.id());
    battle.mon_mut(mon)?.ledger.record(ability.id());
    if attribute.show_ability() {
        battle.show_ability(mon, ability.id(), passive, show_ability_instant)?;
    }
    if let Some(message) = attr.trigger_message(battle, mon, ability.name(), args) {
        battle.queue_message(message.clone());
        if let Some(messages) = messages {
            messages.push(message);
        }
    }

    attr.apply(
        &mut EffectContext::new(battle, mon, ability, passive, first_in_battle),
        args,
    )?;
    debug!(
        "{} applied {} for {}",
        battle.mon_name(mon),
        ability.name(),
        A::HOOK
    );
    Ok(true)
}

/// Runs every attribute for a hook on the abilities of a Mon, without any side effects.
///
/// Decisions are made exactly as in live dispatch, drawing random numbers from the given
/// generator. No effects run, and nothing is written to the battle.
pub fn simulate_ab_attrs<A>(
    battle: &Battle,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: MonHandle,
    args: &mut A::Args<'_>,
    mut messages: Option<&mut Vec<String>>,
) -> Result<bool, Error>
where
    A: AbAttrHook,
{
    let catalog = battle.catalog();
    let mut applied = false;
    for passive in [false, true] {
        let Some(ability) = ability_for_slot(battle, catalog, mon, passive)? else {
            continue;
        };
        for (attribute, attr) in ability.attributes_for::<A>() {
            if !attribute.conditions_met(battle, mon) {
                continue;
            }
            let mut context = DecisionContext::new(battle, &mut *prng, mon, ability, passive, true);
            if !attr.can_apply(&mut context, args) {
                continue;
            }
            applied = true;
            if let Some(messages) = messages.as_deref_mut() {
                if let Some(message) = attr.trigger_message(battle, mon, ability.name(), args) {
                    messages.push(message);
                }
            }
            trace!(
                "{} would apply {} for {}",
                battle.mon_name(mon),
                ability.name(),
                A::HOOK
            );
        }
    }
    Ok(applied)
}
