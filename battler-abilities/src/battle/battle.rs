use std::{
    cell::Cell,
    sync::Arc,
};

use battler_prng::{
    PrngState,
    PseudoRandomNumberGenerator,
};
use log::debug;

use crate::{
    abilities::{
        Ability,
        AbilityCatalog,
        AbilityId,
        hooks,
    },
    battle::{
        AbilityLedger,
        BattleOptions,
        Field,
        Mon,
        MonHandle,
        Phase,
        PhaseQueue,
        WeatherType,
        actions,
    },
    error::{
        Error,
        WrapOptionError,
    },
    log::EventLog,
    log_event,
};

/// A battle, which owns every Mon, the field, and the sinks that abilities write to.
///
/// The battle is the only state the ability engine reads or writes. Ability dispatch in simulated
/// mode only ever borrows the battle immutably.
pub struct Battle {
    options: BattleOptions,
    catalog: Arc<AbilityCatalog>,
    mons: Vec<Mon>,
    pub field: Field,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
    queue: PhaseQueue,
    turn: u32,
    checking_weather_suppression: Cell<bool>,
}

impl Battle {
    pub(crate) fn new(
        options: BattleOptions,
        catalog: Arc<AbilityCatalog>,
        mons: Vec<Mon>,
        field: Field,
    ) -> Self {
        let prng = (options.rng_factory)(options.seed);
        Self {
            options,
            catalog,
            mons,
            field,
            prng,
            log: EventLog::new(),
            queue: PhaseQueue::new(),
            turn: 0,
            checking_weather_suppression: Cell::new(false),
        }
    }

    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    /// The ability catalog used by the battle.
    pub fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    /// A shared handle to the ability catalog, for holding across mutations of the battle.
    pub fn catalog_handle(&self) -> Arc<AbilityCatalog> {
        self.catalog.clone()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Looks up a Mon by handle.
    pub fn mon(&self, mon: MonHandle) -> Result<&Mon, Error> {
        self.mons
            .get(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    /// Looks up a Mon by handle, for mutation.
    pub fn mon_mut(&mut self, mon: MonHandle) -> Result<&mut Mon, Error> {
        self.mons
            .get_mut(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    /// The name of a Mon, or an empty string if the handle is invalid.
    pub fn mon_name(&self, mon: MonHandle) -> &str {
        self.mon(mon).map(|mon| mon.name.as_str()).unwrap_or_default()
    }

    /// All Mons in the battle, in handle order.
    pub fn mon_handles(&self) -> impl Iterator<Item = MonHandle> + use<> {
        (0..self.mons.len()).map(MonHandle::new)
    }

    /// All Mons on the field that have not fainted, in handle order.
    pub fn active_mons(&self) -> Vec<MonHandle> {
        self.mons
            .iter()
            .enumerate()
            .filter(|(_, mon)| mon.on_field())
            .map(|(index, _)| MonHandle::new(index))
            .collect()
    }

    /// Active Mons on the opposing side.
    pub fn opponents(&self, mon: MonHandle) -> Vec<MonHandle> {
        let Ok(side) = self.mon(mon).map(|mon| mon.side) else {
            return Vec::new();
        };
        self.active_mons()
            .into_iter()
            .filter(|other| self.mons[other.index()].side != side)
            .collect()
    }

    /// Active Mons on the same side, excluding the Mon itself.
    pub fn allies(&self, mon: MonHandle) -> Vec<MonHandle> {
        let Ok(side) = self.mon(mon).map(|mon| mon.side) else {
            return Vec::new();
        };
        self.active_mons()
            .into_iter()
            .filter(|other| *other != mon && self.mons[other.index()].side == side)
            .collect()
    }

    /// The battle's random number generator.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// The current position in the random number generation sequence.
    pub fn prng_state(&self) -> PrngState {
        self.prng.state()
    }

    /// Moves random number generation to a saved position.
    pub fn restore_prng_state(&mut self, state: PrngState) {
        self.prng.restore(state)
    }

    /// Creates an independent copy of the random number generator at its current position.
    pub(crate) fn fork_prng(&self) -> Box<dyn PseudoRandomNumberGenerator> {
        self.prng.fork()
    }

    /// Replaces the random number generator with a fork that has advanced past it.
    pub(crate) fn commit_prng(&mut self, prng: Box<dyn PseudoRandomNumberGenerator>) {
        self.prng = prng;
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    pub fn queue(&self) -> &PhaseQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut PhaseQueue {
        &mut self.queue
    }

    /// Queues a message for display.
    pub fn queue_message<S>(&mut self, message: S)
    where
        S: Into<String>,
    {
        self.queue.unshift(Phase::Message(message.into()));
    }

    /// Shows the ability indicator for a Mon.
    ///
    /// Instant indicators are written to the event log immediately. Otherwise, the indicator is
    /// queued to show in turn order.
    pub fn show_ability(
        &mut self,
        mon: MonHandle,
        ability: AbilityId,
        passive: bool,
        instant: bool,
    ) -> Result<(), Error> {
        if instant {
            self.log_ability(mon, ability)
        } else {
            self.queue.unshift(Phase::ShowAbility {
                mon,
                ability,
                passive,
            });
            Ok(())
        }
    }

    pub(crate) fn log_ability(&mut self, mon: MonHandle, ability: AbilityId) -> Result<(), Error> {
        let name = self.catalog.ability(ability)?.name();
        let mon = self.mon(mon)?;
        let event = if self.options.reveal_abilities {
            log_event!("ability", mon.log_details(), format!("name:{name}"))
        } else {
            log_event!("ability", mon.log_details())
        };
        self.log.push(event);
        Ok(())
    }

    /// The ability in the given slot, if the slot is filled.
    pub fn ability(&self, mon: MonHandle, passive: bool) -> Result<Option<&Ability>, Error> {
        match self.mon(mon)?.ability_in_slot(passive) {
            Some(id) => self.catalog.ability(id).map(Some),
            None => Ok(None),
        }
    }

    /// Checks if the Mon can currently apply the ability in the given slot.
    ///
    /// Accounts for fainting, per-Mon and field-wide suppression, ability ignoring, and whether
    /// passive abilities are enabled.
    pub fn can_apply_ability(&self, mon: MonHandle, passive: bool) -> Result<bool, Error> {
        let mon_ref = self.mon(mon)?;
        if passive && !self.options.passive_abilities {
            return Ok(false);
        }
        let Some(ability) = self.ability(mon, passive)? else {
            return Ok(false);
        };
        if mon_ref.fainted() && !ability.bypasses_faint() {
            return Ok(false);
        }
        if !ability.unsuppressable()
            && (mon_ref.ledger.summon_data.ability_suppressed || self.field.abilities_suppressed())
        {
            return Ok(false);
        }
        if ability.ignorable()
            && self.field.ignore_abilities
            && self.field.ignoring_source != Some(mon)
        {
            return Ok(false);
        }
        Ok(true)
    }

    /// The ledger of a Mon.
    pub fn ledger(&self, mon: MonHandle) -> Result<&AbilityLedger, Error> {
        Ok(&self.mon(mon)?.ledger)
    }

    /// Replaces the ledger of a Mon with a saved one.
    pub fn restore_ledger(&mut self, mon: MonHandle, ledger: AbilityLedger) -> Result<(), Error> {
        self.mon_mut(mon)?.ledger = ledger;
        Ok(())
    }

    /// Is the effect of weather currently suppressed by an ability on the field?
    ///
    /// Conditions evaluated while suppression is being checked see the weather as unsuppressed.
    pub fn weather_suppressed(&self) -> bool {
        let Some(weather) = self.field.weather_type() else {
            return false;
        };
        if self.checking_weather_suppression.replace(true) {
            return false;
        }
        let mut prng = self.fork_prng();
        let suppressed = self.active_mons().into_iter().any(|mon| {
            let mut cancelled = false;
            hooks::query_pre_weather_effect(self, prng.as_mut(), mon, weather, &mut cancelled);
            cancelled
        });
        self.checking_weather_suppression.set(false);
        suppressed
    }

    /// The weather whose effects are currently active.
    pub fn effective_weather(&self) -> Option<WeatherType> {
        if self.weather_suppressed() {
            return None;
        }
        self.field.weather_type()
    }

    /// Starts a new turn, resetting turn-scoped state.
    pub fn start_turn(&mut self) {
        self.turn += 1;
        for mon in &mut self.mons {
            mon.start_turn();
        }
        self.log.push(log_event!("turn", self.turn));
        debug!("Started turn {}", self.turn);
    }

    /// Resets battle-scoped state for a new battle with the same Mons.
    pub fn new_battle(&mut self) {
        self.turn = 0;
        for mon in &mut self.mons {
            mon.start_battle();
        }
        self.field.ability_suppressors.clear();
        self.field.loot.clear();
    }

    /// Runs every queued phase until the queue is empty.
    pub fn run_phases(&mut self) -> Result<(), Error> {
        while let Some(phase) = self.queue.pop() {
            actions::run_phase(self, phase)?;
        }
        Ok(())
    }
}
