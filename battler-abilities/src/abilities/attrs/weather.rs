use log::warn;

use crate::{
    abilities::{
        AbAttrHook,
        DecisionContext,
        EffectContext,
    },
    battle::{
        Battle,
        BattlerTag,
        BattlerTagType,
        MonHandle,
        Phase,
        TerrainType,
        WeatherType,
        actions,
    },
    error::Error,
};

/// Arguments for [`PreWeatherEffectAttr`].
pub struct PreWeatherEffectArgs<'a> {
    pub weather: WeatherType,
    /// Set when the weather should have no effect.
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when weather is about to take effect.
#[derive(Debug, Clone, PartialEq)]
pub enum PreWeatherEffectAttr {
    /// Suppresses the effects of weather. Weather that cannot be replaced by other abilities is
    /// only suppressed if `affects_immutable` is set.
    SuppressWeatherEffect { affects_immutable: bool },
}

impl AbAttrHook for PreWeatherEffectAttr {
    type Args<'a> = PreWeatherEffectArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::SuppressWeatherEffect { affects_immutable } => {
                if args.weather.is_immutable() && !affects_immutable {
                    return false;
                }
                *args.cancelled = true;
                true
            }
        }
    }
}

/// Arguments for [`PreWeatherDamageAttr`].
pub struct PreWeatherDamageArgs<'a> {
    pub weather: WeatherType,
    pub cancelled: &'a mut bool,
}

/// Attributes that apply when the Mon is about to take damage from weather.
#[derive(Debug, Clone, PartialEq)]
pub enum PreWeatherDamageAttr {
    /// Blocks damage from the given weathers, or from all weather if empty.
    BlockWeatherDamage(Vec<WeatherType>),
}

impl AbAttrHook for PreWeatherDamageAttr {
    type Args<'a> = PreWeatherDamageArgs<'a>;

    fn can_apply(&self, _: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        match self {
            Self::BlockWeatherDamage(weathers) => {
                if !weathers.is_empty() && !weathers.contains(&args.weather) {
                    return false;
                }
                *args.cancelled = true;
                true
            }
        }
    }

    fn shows_ability(&self) -> bool {
        false
    }
}

/// Arguments for [`PostWeatherChangeAttr`].
pub struct PostWeatherChangeArgs {
    /// The new weather, if any.
    pub weather: Option<WeatherType>,
}

/// Attributes that apply after the weather changed.
#[derive(Debug, Clone, PartialEq)]
pub enum PostWeatherChangeAttr {
    /// Changes form based on the weather. Weathers with no form mapped change the Mon to its base
    /// form.
    FormChange(Vec<(WeatherType, usize)>),
    /// Adds a tag while one of the weathers is active.
    AddTag {
        weathers: Vec<WeatherType>,
        tag_type: BattlerTagType,
    },
}

impl PostWeatherChangeAttr {
    fn target_form(forms: &[(WeatherType, usize)], weather: Option<WeatherType>) -> Option<usize> {
        let weather = weather?;
        forms
            .iter()
            .find(|(form_weather, _)| *form_weather == weather)
            .map(|(_, form)| *form)
    }

    fn active_weather(battle: &Battle, weather: Option<WeatherType>) -> Option<WeatherType> {
        weather.filter(|_| !battle.weather_suppressed())
    }
}

impl AbAttrHook for PostWeatherChangeAttr {
    type Args<'a> = PostWeatherChangeArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let mon = context.mon_handle();
        let weather = Self::active_weather(context.battle(), args.weather);
        match self {
            Self::FormChange(forms) => {
                let form = Self::target_form(forms, weather).unwrap_or_default();
                context.mon().is_some_and(|mon| mon.form != form)
            }
            Self::AddTag { weathers, tag_type } => {
                weather.is_some_and(|weather| weathers.contains(&weather))
                    && context.can_add_tag(mon, *tag_type)
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, args: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        let weather = Self::active_weather(context.battle(), args.weather);
        match self {
            Self::FormChange(forms) => {
                let form = match Self::target_form(forms, weather) {
                    Some(form) => form,
                    None => {
                        if let Some(weather) = weather {
                            warn!(
                                "{} has no form for {weather}, using base form",
                                context.mon_name()
                            );
                        }
                        0
                    }
                };
                context
                    .battle_mut()
                    .queue_mut()
                    .unshift(Phase::FormChange { mon, form });
            }
            Self::AddTag { tag_type, .. } => {
                actions::try_add_tag(
                    context.battle_mut(),
                    mon,
                    BattlerTag::new(*tag_type).with_source(mon),
                )?;
            }
        }
        Ok(())
    }
}

/// Arguments for [`PostWeatherLapseAttr`].
pub struct PostWeatherLapseArgs {
    pub weather: WeatherType,
}

/// Attributes that apply when the weather lasts another turn.
#[derive(Debug, Clone, PartialEq)]
pub enum PostWeatherLapseAttr {
    /// Heals a ratio of maximum HP in the given weathers.
    Heal {
        weathers: Vec<WeatherType>,
        ratio: f64,
    },
    /// Takes damage as a ratio of maximum HP in the given weathers.
    Damage {
        weathers: Vec<WeatherType>,
        ratio: f64,
    },
}

impl AbAttrHook for PostWeatherLapseAttr {
    type Args<'a> = PostWeatherLapseArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let Some(mon) = context.mon() else {
            return false;
        };
        match self {
            Self::Heal { weathers, .. } => weathers.contains(&args.weather) && !mon.full_hp(),
            Self::Damage { weathers, .. } => weathers.contains(&args.weather),
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let target = context.mon_handle();
        let phase = match self {
            Self::Heal { ratio, .. } => Phase::Heal {
                target,
                amount: context.mon()?.hp_fraction(*ratio),
            },
            Self::Damage { ratio, .. } => Phase::Damage {
                target,
                amount: context.mon()?.hp_fraction(*ratio),
                source: None,
            },
        };
        context.battle_mut().queue_mut().unshift(phase);
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
            Self::Heal { .. } => None,
            Self::Damage { .. } => Some(format!(
                "{} was hurt by its {ability_name}!",
                battle.mon_name(mon)
            )),
        }
    }
}

/// Arguments for [`PostTerrainChangeAttr`].
pub struct PostTerrainChangeArgs {
    /// The new terrain, if any.
    pub terrain: Option<TerrainType>,
}

/// Attributes that apply after the terrain changed.
#[derive(Debug, Clone, PartialEq)]
pub enum PostTerrainChangeAttr {
    /// Adds a tag while one of the terrains is active.
    AddTag {
        terrains: Vec<TerrainType>,
        tag_type: BattlerTagType,
    },
}

impl AbAttrHook for PostTerrainChangeAttr {
    type Args<'a> = PostTerrainChangeArgs;

    fn can_apply(&self, context: &mut DecisionContext, args: &mut Self::Args<'_>) -> bool {
        let mon = context.mon_handle();
        match self {
            Self::AddTag { terrains, tag_type } => {
                args.terrain
                    .is_some_and(|terrain| terrains.contains(&terrain))
                    && context.can_add_tag(mon, *tag_type)
            }
        }
    }

    fn apply(&self, context: &mut EffectContext, _: &Self::Args<'_>) -> Result<(), Error> {
        let mon = context.mon_handle();
        match self {
            Self::AddTag { tag_type, .. } => {
                actions::try_add_tag(
                    context.battle_mut(),
                    mon,
                    BattlerTag::new(*tag_type).with_source(mon),
                )?;
            }
        }
        Ok(())
    }
}
