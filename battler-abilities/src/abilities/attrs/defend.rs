use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
        attrs::{
            can_set_any_status,
            roll_percent,
            set_random_status,
        },
    },
    battle::{
        Battle,
        BattlerTag,
        BattlerTagType,
        MonHandle,
        Phase,
        WeatherType,
        actions,
    },
    error::Error,
    mons::{
        Boost,
        Status,
        Type,
    },
    moves::{
        HitResult,
        MoveData,
        MoveFilter,
    },
};

/// Arguments for [`PreDefendAttr`].
pub struct PreDefendArgs<'a> {
    pub attacker: MonHandle,
    pub move_data: &'a MoveData,
    /// Type effectiveness multiplier of the move against the Mon.
    pub effectiveness: f64,
    /// Set when the move should have no effect on the Mon.
    pub cancelled: &'a mut bool,
    pub damage_multiplier: &'a mut f64,
}

/// Attributes that apply when the Mon is about to be hit by a move.
#[derive(Debug, Clone, PartialEq)]
pub enum PreDefendAttr {
    /// Grants immunity to moves of a type.
    TypeImmunity(Type),
    /// Grants immunity to moves of a type, healing a ratio of maximum HP instead.
    TypeImmunityHeal { typ: Type, ratio: f64 },
    /// Grants immunity to moves of a type, raising a stat instead.
    TypeImmunityStatStageChange { typ: Type, boost: Boost, stages: i8 },
    /// Grants immunity to moves of a type, adding a tag instead.
    TypeImmunityAddTag { typ: Type, tag_type: BattlerTagType },
    /// Multiplies damage from matching moves.
    DamageMultiplier { filter: MoveFilter, multiplier: f64 },
    /// Grants immunity to matching moves.
    MoveImmunity(MoveFilter),
    /// Only super effective moves can hit the Mon.
    NonSuperEffectiveImmunity,
    /// Multiplies damage taken while at full HP.
    FullHpDamageMultiplier(f64),
}

impl PreDefendAttr {
    fn immune_type(&self) -> Option<Type> {
        match self {
            Self::TypeImmunity(typ)
            | Self::TypeImmunityHeal { typ, .. }
            | Self::TypeImmunityStatStageChange { typ, .. }
            | Self::TypeImmunityAddTag { typ, .. } => Some(*typ),
            _ => None,
        }
    }
}

impl AbAttrHook for PreDefendAttr {
    type Args<'a> = PreDefendArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        if let Some(typ) = self.immune_type() {
            if args.attacker == context.mon_handle() || args.move_data.typ != typ {
                return false;
            }
            *args.cancelled = true;
            return true;
        }
        match self {
            Self::DamageMultiplier { filter, multiplier } => {
                if !filter.matches(args.move_data, args.effectiveness) {
                    return false;
                }
                *args.damage_multiplier *= multiplier;
                true
            }
            Self::MoveImmunity(filter) => {
                if args.attacker == context.mon_handle()
                    || !filter.matches(args.move_data, args.effectiveness)
                {
                    return false;
                }
                *args.cancelled = true;
                true
            }
            Self::NonSuperEffectiveImmunity => {
                if !args.move_data.is_damaging() || args.effectiveness > 1.0 {
                    return false;
                }
                *args.cancelled = true;
                true
            }
            Self::FullHpDamageMultiplier(multiplier) => {
                if !args.move_data.is_damaging() || !context.mon().is_some_and(|mon| mon.full_hp())
                {
                    return false;
                }
                *args.damage_multiplier *= multiplier;
                true
            }
            _ => false,
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::TypeImmunityHeal { ratio, .. } => {
                let mon_ref = context.mon()?;
                if !mon_ref.full_hp() {
                    let amount = mon_ref.hp_fraction(*ratio);
                    context
                        .battle_mut()
                        .queue_mut()
                        .unshift(Phase::Heal {
                            target: mon,
                            amount,
                        });
                }
            }
            Self::TypeImmunityStatStageChange { boost, stages, .. } => {
                actions::queue_stat_stage_change(
                    context.battle_mut(),
                    mon,
                    vec![*boost],
                    *stages,
                    true,
                    Some(mon),
                );
            }
            Self::TypeImmunityAddTag { tag_type, .. } => {
                actions::try_add_tag(
                    context.battle_mut(),
                    mon,
                    BattlerTag::new(*tag_type).with_source(mon),
                )?;
            }
            _ => (),
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        ability_name: &str,
        _: &Self::Args<'_>,
    ) -> Option<String> {
        match self {
            Self::NonSuperEffectiveImmunity => Some(format!(
                "{} avoided damage with {ability_name}!",
                battle.mon_name(mon)
            )),
            _ => None,
        }
    }

    fn shows_ability(&self) -> bool {
        !matches!(
            self,
            Self::DamageMultiplier { .. } | Self::FullHpDamageMultiplier(_)
        )
    }
}

/// Arguments for [`PostDefendAttr`].
pub struct PostDefendArgs<'a> {
    pub attacker: MonHandle,
    pub move_data: &'a MoveData,
    pub hit_result: HitResult,
}

impl PostDefendArgs<'_> {
    fn damaged_by_contact(&self) -> bool {
        self.hit_result.dealt_damage() && self.move_data.makes_contact()
    }
}

/// Attributes that apply after the Mon was hit by a move.
#[derive(Debug, Clone, PartialEq)]
pub enum PostDefendAttr {
    /// Damages the attacker by a ratio of its maximum HP on contact.
    ContactDamage(f64),
    /// Has a percent chance to set one of the statuses on the attacker on contact.
    ContactStatus { chance: u64, statuses: Vec<Status> },
    /// Has a percent chance to add a tag to the attacker on contact.
    ContactTag { chance: u64, tag_type: BattlerTagType },
    /// Changes stat stages when hit by a matching move.
    StatStageChangeOnHit {
        filter: MoveFilter,
        boost: Boost,
        stages: i8,
        self_target: bool,
    },
    /// Sets weather when hit.
    WeatherChangeOnHit(WeatherType),
    /// Changes the Mon's type to the type of the move that hit it.
    TypeChangeOnHit,
    /// Steals the attacker's item on contact.
    StealItemOnContact,
}

impl AbAttrHook for PostDefendAttr {
    type Args<'a> = PostDefendArgs<'a>;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let battle = context.battle();
        let mon = context.mon_handle();
        if args.attacker == mon {
            return false;
        }
        let Ok(attacker) = battle.mon(args.attacker) else {
            return false;
        };
        match self {
            Self::ContactDamage(_) => args.damaged_by_contact() && attacker.on_field(),
            Self::ContactStatus { chance, statuses } => {
                args.damaged_by_contact()
                    && attacker.status.is_none()
                    && roll_percent(context, *chance)
                    && can_set_any_status(context, args.attacker, statuses)
            }
            Self::ContactTag { chance, tag_type } => {
                args.damaged_by_contact()
                    && roll_percent(context, *chance)
                    && context.can_add_tag(args.attacker, *tag_type)
            }
            Self::StatStageChangeOnHit { filter, .. } => {
                let effectiveness = if args.hit_result == HitResult::SuperEffective {
                    2.0
                } else {
                    1.0
                };
                args.hit_result.dealt_damage() && filter.matches(args.move_data, effectiveness)
            }
            Self::WeatherChangeOnHit(weather) => {
                args.hit_result.dealt_damage()
                    && battle.field.weather_type() != Some(*weather)
                    && battle.field.can_set_weather(*weather)
            }
            Self::TypeChangeOnHit => {
                args.hit_result.dealt_damage()
                    && context
                        .mon()
                        .is_some_and(|mon| mon.types() != [args.move_data.typ])
            }
            Self::StealItemOnContact => {
                args.damaged_by_contact()
                    && attacker.item.is_some()
                    && context.mon().is_some_and(|mon| mon.item.is_none())
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::ContactDamage(ratio) => {
                let amount = context.battle().mon(args.attacker)?.hp_fraction(*ratio);
                context.battle_mut().queue_mut().unshift(Phase::Damage {
                    target: args.attacker,
                    amount,
                    source: Some(mon),
                });
            }
            Self::ContactStatus { statuses, .. } => {
                set_random_status(context, args.attacker, statuses)?;
            }
            Self::ContactTag { tag_type, .. } => {
                actions::try_add_tag(
                    context.battle_mut(),
                    args.attacker,
                    BattlerTag::new(*tag_type).with_source(mon),
                )?;
            }
            Self::StatStageChangeOnHit {
                boost,
                stages,
                self_target,
                ..
            } => {
                let target = if *self_target { mon } else { args.attacker };
                actions::queue_stat_stage_change(
                    context.battle_mut(),
                    target,
                    vec![*boost],
                    *stages,
                    *self_target,
                    Some(mon),
                );
            }
            Self::WeatherChangeOnHit(weather) => {
                actions::set_weather(context.battle_mut(), *weather, Some(5))?;
            }
            Self::TypeChangeOnHit => {
                context.mon_mut()?.ledger.summon_data.types = Some(vec![args.move_data.typ]);
            }
            Self::StealItemOnContact => {
                actions::transfer_item(context.battle_mut(), args.attacker, mon)?;
            }
        }
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        mon: MonHandle,
        ability_name: &str,
        args: &Self::Args<'_>,
    ) -> Option<String> {
        match self {
            Self::ContactDamage(_) => Some(format!(
                "{} was hurt by {}'s {ability_name}!",
                battle.mon_name(args.attacker),
                battle.mon_name(mon)
            )),
            Self::TypeChangeOnHit => Some(format!(
                "{}'s {ability_name} made it the {} type!",
                battle.mon_name(mon),
                args.move_data.typ
            )),
            _ => None,
        }
    }
}
