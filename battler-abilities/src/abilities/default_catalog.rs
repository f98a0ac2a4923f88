use crate::{
    abilities::{
        Ability,
        AbilityAttribute,
        AbilityCatalog,
        AbilityId,
        Condition,
        attrs::{
            AllyStatMultiplierAttr,
            CheckTrappedAttr,
            CriticalHitAttr,
            FieldStatMultiplierAttr,
            IntimidatedAttr,
            PostAttackAttr,
            PostBattleAttr,
            PostBattleInitAttr,
            PostDamageAttr,
            PostDefendAttr,
            PostFaintAttr,
            PostItemLostAttr,
            PostKnockOutAttr,
            PostSetStatusAttr,
            PostStatStageChangeAttr,
            PostSummonAttr,
            PostTerrainChangeAttr,
            PostTurnAttr,
            PostVictoryAttr,
            PostWeatherChangeAttr,
            PostWeatherLapseAttr,
            PreApplyBattlerTagAttr,
            PreAttackAttr,
            PreDefendAttr,
            PreLeaveFieldAttr,
            PreRecoilDamageAttr,
            PreSetStatusAttr,
            PreStatStageChangeAttr,
            PreSwitchOutAttr,
            PreWeatherDamageAttr,
            PreWeatherEffectAttr,
            StatMultiplierAttr,
            TrapKind,
        },
    },
    battle::{
        BattlerTagType,
        TerrainType,
        WeatherType,
    },
    mons::{
        Boost,
        Stat,
        Status,
        Type,
    },
    moves::{
        MoveCategory,
        MoveFilter,
        MoveFlag,
    },
};

const SUN: [WeatherType; 2] = [WeatherType::Sunny, WeatherType::HarshSun];
const RAIN: [WeatherType; 2] = [WeatherType::Rain, WeatherType::HeavyRain];

/// Builds the catalog of every ability implemented by this crate.
pub(crate) fn build_default_catalog() -> AbilityCatalog {
    [
        weather_abilities(),
        stat_abilities(),
        defensive_abilities(),
        offensive_abilities(),
        status_abilities(),
        field_abilities(),
    ]
    .into_iter()
    .flatten()
    .fold(AbilityCatalog::builder(), |builder, ability| {
        builder.ability(ability)
    })
    .build()
}

fn weather_setter(id: AbilityId, name: &str, weather: WeatherType) -> Ability {
    Ability::builder(id, name)
        .attr(PostSummonAttr::WeatherChange(weather))
        .build()
}

/// Strong weathers last until no Mon with the ability is on the field.
fn strong_weather_setter(id: AbilityId, name: &str, weather: WeatherType) -> Ability {
    Ability::builder(id, name)
        .attr(PostSummonAttr::WeatherChange(weather))
        .attr(PreSwitchOutAttr::ClearWeather(vec![weather]))
        .attr(PostFaintAttr::ClearWeather(vec![weather]))
        .bypass_faint()
        .build()
}

fn weather_suppressor(id: AbilityId, name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(PostSummonAttr::Message(
            "The effects of the weather disappeared.".to_owned(),
        ))
        .attr(PreWeatherEffectAttr::SuppressWeatherEffect {
            affects_immutable: true,
        })
        .build()
}

fn weather_speed(id: AbilityId, name: &str, weathers: &[WeatherType]) -> Ability {
    Ability::builder(id, name)
        .conditional_attr(
            Condition::weather_is(weathers),
            StatMultiplierAttr {
                stat: Stat::Spe,
                multiplier: 2.0,
            },
        )
        .build()
}

fn weather_abilities() -> Vec<Ability> {
    vec![
        weather_setter(AbilityId::Drizzle, "Drizzle", WeatherType::Rain),
        weather_setter(AbilityId::Drought, "Drought", WeatherType::Sunny),
        weather_setter(AbilityId::SandStream, "Sand Stream", WeatherType::Sandstorm),
        weather_setter(AbilityId::SnowWarning, "Snow Warning", WeatherType::Snow),
        strong_weather_setter(
            AbilityId::PrimordialSea,
            "Primordial Sea",
            WeatherType::HeavyRain,
        ),
        strong_weather_setter(
            AbilityId::DesolateLand,
            "Desolate Land",
            WeatherType::HarshSun,
        ),
        strong_weather_setter(
            AbilityId::DeltaStream,
            "Delta Stream",
            WeatherType::StrongWinds,
        ),
        weather_suppressor(AbilityId::CloudNine, "Cloud Nine"),
        weather_suppressor(AbilityId::AirLock, "Air Lock"),
        weather_speed(AbilityId::SwiftSwim, "Swift Swim", &RAIN),
        weather_speed(AbilityId::Chlorophyll, "Chlorophyll", &SUN),
        Ability::builder(AbilityId::SandRush, "Sand Rush")
            .conditional_attr(
                Condition::weather_is(&[WeatherType::Sandstorm]),
                StatMultiplierAttr {
                    stat: Stat::Spe,
                    multiplier: 2.0,
                },
            )
            .attr(PreWeatherDamageAttr::BlockWeatherDamage(vec![
                WeatherType::Sandstorm,
            ]))
            .build(),
        // Evasion in sandstorm is not modeled.
        Ability::builder(AbilityId::SandVeil, "Sand Veil")
            .attr(PreWeatherDamageAttr::BlockWeatherDamage(vec![
                WeatherType::Sandstorm,
            ]))
            .ignorable()
            .partial()
            .build(),
        Ability::builder(AbilityId::SandSpit, "Sand Spit")
            .attr(PostDefendAttr::WeatherChangeOnHit(WeatherType::Sandstorm))
            .build(),
        Ability::builder(AbilityId::RainDish, "Rain Dish")
            .attr(PostWeatherLapseAttr::Heal {
                weathers: RAIN.to_vec(),
                ratio: 1.0 / 16.0,
            })
            .build(),
        Ability::builder(AbilityId::IceBody, "Ice Body")
            .attr(PostWeatherLapseAttr::Heal {
                weathers: vec![WeatherType::Hail, WeatherType::Snow],
                ratio: 1.0 / 16.0,
            })
            .attr(PreWeatherDamageAttr::BlockWeatherDamage(vec![
                WeatherType::Hail,
            ]))
            .build(),
        Ability::builder(AbilityId::DrySkin, "Dry Skin")
            .attr(PreDefendAttr::TypeImmunityHeal {
                typ: Type::Water,
                ratio: 0.25,
            })
            .attr(PreDefendAttr::DamageMultiplier {
                filter: MoveFilter::OfType(Type::Fire),
                multiplier: 1.25,
            })
            .attr(PostWeatherLapseAttr::Heal {
                weathers: RAIN.to_vec(),
                ratio: 1.0 / 8.0,
            })
            .attr(PostWeatherLapseAttr::Damage {
                weathers: SUN.to_vec(),
                ratio: 1.0 / 8.0,
            })
            .ignorable()
            .build(),
        Ability::builder(AbilityId::SolarPower, "Solar Power")
            .conditional_attr(
                Condition::weather_is(&SUN),
                StatMultiplierAttr {
                    stat: Stat::SpAtk,
                    multiplier: 1.5,
                },
            )
            .attr(PostWeatherLapseAttr::Damage {
                weathers: SUN.to_vec(),
                ratio: 1.0 / 8.0,
            })
            .build(),
        Ability::builder(AbilityId::Forecast, "Forecast")
            .attr(PostWeatherChangeAttr::FormChange(vec![
                (WeatherType::Sunny, 1),
                (WeatherType::HarshSun, 1),
                (WeatherType::Rain, 2),
                (WeatherType::HeavyRain, 2),
                (WeatherType::Hail, 3),
                (WeatherType::Snow, 3),
            ]))
            .build(),
        Ability::builder(AbilityId::FlowerGift, "Flower Gift")
            .conditional_attr(
                Condition::weather_is(&SUN),
                StatMultiplierAttr {
                    stat: Stat::Atk,
                    multiplier: 1.5,
                },
            )
            .conditional_attr(
                Condition::weather_is(&SUN),
                StatMultiplierAttr {
                    stat: Stat::SpDef,
                    multiplier: 1.5,
                },
            )
            .conditional_attr(
                Condition::weather_is(&SUN),
                AllyStatMultiplierAttr {
                    stat: Stat::Atk,
                    multiplier: 1.5,
                },
            )
            .conditional_attr(
                Condition::weather_is(&SUN),
                AllyStatMultiplierAttr {
                    stat: Stat::SpDef,
                    multiplier: 1.5,
                },
            )
            .ignorable()
            .build(),
        Ability::builder(AbilityId::LeafGuard, "Leaf Guard")
            .conditional_attr(
                Condition::weather_is(&SUN),
                PreSetStatusAttr::StatusImmunity(Vec::new()),
            )
            .ignorable()
            .build(),
        Ability::builder(AbilityId::Protosynthesis, "Protosynthesis")
            .conditional_attr(
                Condition::weather_is(&SUN),
                PostSummonAttr::AddTag(BattlerTagType::Protosynthesis),
            )
            .attr(PostWeatherChangeAttr::AddTag {
                weathers: SUN.to_vec(),
                tag_type: BattlerTagType::Protosynthesis,
            })
            .partial()
            .build(),
        Ability::builder(AbilityId::Overcoat, "Overcoat")
            .attr(PreWeatherDamageAttr::BlockWeatherDamage(Vec::new()))
            .attr(PreDefendAttr::MoveImmunity(MoveFilter::Flag(MoveFlag::Powder)))
            .ignorable()
            .build(),
    ]
}

fn stat_multiplier(id: AbilityId, name: &str, stat: Stat, multiplier: f64) -> Ability {
    Ability::builder(id, name)
        .attr(StatMultiplierAttr { stat, multiplier })
        .build()
}

fn stat_protector(id: AbilityId, name: &str, boost: Option<Boost>) -> Ability {
    Ability::builder(id, name)
        .attr(PreStatStageChangeAttr::ProtectStat(boost))
        .ignorable()
        .build()
}

fn stat_change_on_lowered(id: AbilityId, name: &str, boost: Boost) -> Ability {
    Ability::builder(id, name)
        .attr(PostStatStageChangeAttr::StatStageChangeOnLowered { boost, stages: 2 })
        .build()
}

fn ruin(id: AbilityId, name: &str, stat: Stat, stat_name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(PostSummonAttr::Message(format!(
            "{{mon}}'s {{ability}} weakened the {stat_name} of all surrounding Pokémon!"
        )))
        .attr(FieldStatMultiplierAttr {
            stat,
            multiplier: 0.75,
        })
        .build()
}

fn stat_abilities() -> Vec<Ability> {
    vec![
        stat_multiplier(AbilityId::HugePower, "Huge Power", Stat::Atk, 2.0),
        Ability::builder(AbilityId::Guts, "Guts")
            .conditional_attr(
                Condition::has_status(),
                StatMultiplierAttr {
                    stat: Stat::Atk,
                    multiplier: 1.5,
                },
            )
            .build(),
        stat_protector(AbilityId::ClearBody, "Clear Body", None),
        stat_protector(AbilityId::WhiteSmoke, "White Smoke", None),
        stat_protector(AbilityId::HyperCutter, "Hyper Cutter", Some(Boost::Atk)),
        stat_protector(AbilityId::KeenEye, "Keen Eye", Some(Boost::Accuracy)),
        stat_change_on_lowered(AbilityId::Defiant, "Defiant", Boost::Atk),
        stat_change_on_lowered(AbilityId::Competitive, "Competitive", Boost::SpAtk),
        Ability::builder(AbilityId::Intimidate, "Intimidate")
            .attr(PostSummonAttr::StatStageChange {
                boosts: vec![Boost::Atk],
                stages: -1,
                self_target: false,
                intimidate: true,
            })
            .build(),
        Ability::builder(AbilityId::SpeedBoost, "Speed Boost")
            .attr(PostTurnAttr::StatStageChange {
                boosts: vec![Boost::Spe],
                stages: 1,
            })
            .build(),
        Ability::builder(AbilityId::Moxie, "Moxie")
            .attr(PostVictoryAttr::StatStageChange {
                boosts: vec![Boost::Atk],
                stages: 1,
            })
            .build(),
        Ability::builder(AbilityId::SoulHeart, "Soul-Heart")
            .attr(PostKnockOutAttr::StatStageChange {
                boosts: vec![Boost::SpAtk],
                stages: 1,
            })
            .build(),
        Ability::builder(AbilityId::Justified, "Justified")
            .attr(PostDefendAttr::StatStageChangeOnHit {
                filter: MoveFilter::OfType(Type::Dark),
                boost: Boost::Atk,
                stages: 1,
                self_target: true,
            })
            .build(),
        Ability::builder(AbilityId::Stamina, "Stamina")
            .attr(PostDefendAttr::StatStageChangeOnHit {
                filter: MoveFilter::Any,
                boost: Boost::Def,
                stages: 1,
                self_target: true,
            })
            .build(),
        Ability::builder(AbilityId::WeakArmor, "Weak Armor")
            .attr(PostDefendAttr::StatStageChangeOnHit {
                filter: MoveFilter::Category(MoveCategory::Physical),
                boost: Boost::Def,
                stages: -1,
                self_target: true,
            })
            .attr(PostDefendAttr::StatStageChangeOnHit {
                filter: MoveFilter::Category(MoveCategory::Physical),
                boost: Boost::Spe,
                stages: 2,
                self_target: true,
            })
            .build(),
        Ability::builder(AbilityId::Rattled, "Rattled")
            .attr(PostDefendAttr::StatStageChangeOnHit {
                filter: MoveFilter::AnyOfTypes(vec![Type::Dark, Type::Bug, Type::Ghost]),
                boost: Boost::Spe,
                stages: 1,
                self_target: true,
            })
            .attr(IntimidatedAttr::StatStageChange {
                boost: Boost::Spe,
                stages: 1,
            })
            .build(),
        ruin(AbilityId::SwordOfRuin, "Sword of Ruin", Stat::Def, "Defense"),
        ruin(AbilityId::TabletsOfRuin, "Tablets of Ruin", Stat::Atk, "Attack"),
        Ability::builder(AbilityId::Unburden, "Unburden")
            .attr(PostItemLostAttr::AddTag(BattlerTagType::Unburden))
            .conditional_attr(
                Condition::has_tag(BattlerTagType::Unburden),
                StatMultiplierAttr {
                    stat: Stat::Spe,
                    multiplier: 2.0,
                },
            )
            .build(),
    ]
}

fn type_immunity(id: AbilityId, name: &str, typ: Type) -> Ability {
    Ability::builder(id, name)
        .attr(PreDefendAttr::TypeImmunity(typ))
        .ignorable()
        .build()
}

fn absorb(id: AbilityId, name: &str, typ: Type) -> Ability {
    Ability::builder(id, name)
        .attr(PreDefendAttr::TypeImmunityHeal { typ, ratio: 0.25 })
        .ignorable()
        .build()
}

fn super_effective_reduction(id: AbilityId, name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(PreDefendAttr::DamageMultiplier {
            filter: MoveFilter::SuperEffective,
            multiplier: 0.75,
        })
        .ignorable()
        .build()
}

fn contact_damage(id: AbilityId, name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(PostDefendAttr::ContactDamage(1.0 / 8.0))
        .build()
}

fn crit_blocker(id: AbilityId, name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(CriticalHitAttr::BlockCrit)
        .ignorable()
        .build()
}

fn defensive_abilities() -> Vec<Ability> {
    vec![
        type_immunity(AbilityId::Levitate, "Levitate", Type::Ground),
        absorb(AbilityId::VoltAbsorb, "Volt Absorb", Type::Electric),
        absorb(AbilityId::WaterAbsorb, "Water Absorb", Type::Water),
        Ability::builder(AbilityId::MotorDrive, "Motor Drive")
            .attr(PreDefendAttr::TypeImmunityStatStageChange {
                typ: Type::Electric,
                boost: Boost::Spe,
                stages: 1,
            })
            .ignorable()
            .build(),
        Ability::builder(AbilityId::FlashFire, "Flash Fire")
            .attr(PreDefendAttr::TypeImmunityAddTag {
                typ: Type::Fire,
                tag_type: BattlerTagType::FlashFire,
            })
            .conditional_attr(
                Condition::has_tag(BattlerTagType::FlashFire),
                PreAttackAttr::PowerBoost {
                    filter: MoveFilter::OfType(Type::Fire),
                    multiplier: 1.5,
                },
            )
            .ignorable()
            .build(),
        super_effective_reduction(AbilityId::Filter, "Filter"),
        super_effective_reduction(AbilityId::SolidRock, "Solid Rock"),
        Ability::builder(AbilityId::ThickFat, "Thick Fat")
            .attr(PreDefendAttr::DamageMultiplier {
                filter: MoveFilter::AnyOfTypes(vec![Type::Fire, Type::Ice]),
                multiplier: 0.5,
            })
            .ignorable()
            .build(),
        Ability::builder(AbilityId::Multiscale, "Multiscale")
            .attr(PreDefendAttr::FullHpDamageMultiplier(0.5))
            .ignorable()
            .build(),
        Ability::builder(AbilityId::WonderGuard, "Wonder Guard")
            .attr(PreDefendAttr::NonSuperEffectiveImmunity)
            .ignorable()
            .build(),
        crit_blocker(AbilityId::BattleArmor, "Battle Armor"),
        crit_blocker(AbilityId::ShellArmor, "Shell Armor"),
        Ability::builder(AbilityId::RockHead, "Rock Head")
            .attr(PreRecoilDamageAttr::BlockRecoil)
            .build(),
        contact_damage(AbilityId::RoughSkin, "Rough Skin"),
        contact_damage(AbilityId::IronBarbs, "Iron Barbs"),
        Ability::builder(AbilityId::Aftermath, "Aftermath")
            .attr(PostFaintAttr::DamageAttacker(0.25))
            .bypass_faint()
            .build(),
        Ability::builder(AbilityId::ColorChange, "Color Change")
            .attr(PostDefendAttr::TypeChangeOnHit)
            .build(),
        Ability::builder(AbilityId::Pickpocket, "Pickpocket")
            .attr(PostDefendAttr::StealItemOnContact)
            .build(),
        Ability::builder(AbilityId::EmergencyExit, "Emergency Exit")
            .attr(PostDamageAttr::ForceSwitchOnLowHp(0.5))
            .build(),
        Ability::builder(AbilityId::WimpOut, "Wimp Out")
            .attr(PostDamageAttr::ForceSwitchOnLowHp(0.5))
            .build(),
        Ability::builder(AbilityId::Regenerator, "Regenerator")
            .attr(PreSwitchOutAttr::Heal(1.0 / 3.0))
            .build(),
    ]
}

fn type_change(id: AbilityId, name: &str, to: Type) -> Ability {
    Ability::builder(id, name)
        .attr(PreAttackAttr::TypeChange {
            from: Type::Normal,
            to,
            multiplier: 1.2,
        })
        .build()
}

fn trapper(id: AbilityId, name: &str, kind: TrapKind) -> Ability {
    Ability::builder(id, name)
        .attr(CheckTrappedAttr::Trap(kind))
        .build()
}

fn offensive_abilities() -> Vec<Ability> {
    vec![
        type_change(AbilityId::Aerilate, "Aerilate", Type::Flying),
        type_change(AbilityId::Pixilate, "Pixilate", Type::Fairy),
        type_change(AbilityId::Refrigerate, "Refrigerate", Type::Ice),
        Ability::builder(AbilityId::IronFist, "Iron Fist")
            .attr(PreAttackAttr::PowerBoost {
                filter: MoveFilter::Flag(MoveFlag::Punch),
                multiplier: 1.2,
            })
            .build(),
        Ability::builder(AbilityId::Technician, "Technician")
            .attr(PreAttackAttr::PowerBoost {
                filter: MoveFilter::PowerAtMost(60),
                multiplier: 1.5,
            })
            .build(),
        Ability::builder(AbilityId::SuperLuck, "Super Luck")
            .attr(CriticalHitAttr::BonusCritStage(1))
            .build(),
        Ability::builder(AbilityId::PoisonTouch, "Poison Touch")
            .attr(PostAttackAttr::StatusOnAttack {
                contact_required: true,
                chance: 30,
                statuses: vec![Status::Poison],
            })
            .build(),
        Ability::builder(AbilityId::Magician, "Magician")
            .attr(PostAttackAttr::StealItem)
            .build(),
        Ability::builder(AbilityId::BadDreams, "Bad Dreams")
            .attr(PostTurnAttr::HurtSleepingFoes(1.0 / 8.0))
            .build(),
        trapper(AbilityId::ShadowTag, "Shadow Tag", TrapKind::All),
        trapper(AbilityId::ArenaTrap, "Arena Trap", TrapKind::Grounded),
        trapper(AbilityId::MagnetPull, "Magnet Pull", TrapKind::Steel),
    ]
}

fn contact_status(id: AbilityId, name: &str, statuses: Vec<Status>) -> Ability {
    Ability::builder(id, name)
        .attr(PostDefendAttr::ContactStatus {
            chance: 30,
            statuses,
        })
        .build()
}

fn status_immunity(id: AbilityId, name: &str, statuses: Vec<Status>) -> Ability {
    Ability::builder(id, name)
        .attr(PreSetStatusAttr::StatusImmunity(statuses))
        .ignorable()
        .build()
}

fn sleep_immunity(id: AbilityId, name: &str) -> Ability {
    Ability::builder(id, name)
        .attr(PreSetStatusAttr::StatusImmunity(vec![Status::Sleep]))
        .attr(PreApplyBattlerTagAttr::TagImmunity(vec![
            BattlerTagType::Drowsy,
        ]))
        .ignorable()
        .build()
}

fn tag_immunity(id: AbilityId, name: &str, tag_types: Vec<BattlerTagType>) -> Ability {
    Ability::builder(id, name)
        .attr(PreApplyBattlerTagAttr::TagImmunity(tag_types))
        .attr(IntimidatedAttr::Immunity)
        .ignorable()
        .build()
}

fn status_abilities() -> Vec<Ability> {
    vec![
        contact_status(AbilityId::Static, "Static", vec![Status::Paralysis]),
        contact_status(AbilityId::FlameBody, "Flame Body", vec![Status::Burn]),
        contact_status(AbilityId::PoisonPoint, "Poison Point", vec![Status::Poison]),
        contact_status(
            AbilityId::EffectSpore,
            "Effect Spore",
            vec![Status::Poison, Status::Paralysis, Status::Sleep],
        ),
        Ability::builder(AbilityId::CuteCharm, "Cute Charm")
            .attr(PostDefendAttr::ContactTag {
                chance: 30,
                tag_type: BattlerTagType::Infatuated,
            })
            .build(),
        status_immunity(
            AbilityId::Immunity,
            "Immunity",
            vec![Status::Poison, Status::BadPoison],
        ),
        status_immunity(AbilityId::Limber, "Limber", vec![Status::Paralysis]),
        status_immunity(AbilityId::WaterVeil, "Water Veil", vec![Status::Burn]),
        sleep_immunity(AbilityId::Insomnia, "Insomnia"),
        sleep_immunity(AbilityId::VitalSpirit, "Vital Spirit"),
        tag_immunity(
            AbilityId::InnerFocus,
            "Inner Focus",
            vec![BattlerTagType::Flinched],
        ),
        tag_immunity(
            AbilityId::Oblivious,
            "Oblivious",
            vec![BattlerTagType::Infatuated, BattlerTagType::Taunt],
        ),
        tag_immunity(
            AbilityId::OwnTempo,
            "Own Tempo",
            vec![BattlerTagType::Confused],
        ),
        // Allies are not protected from poison.
        Ability::builder(AbilityId::PastelVeil, "Pastel Veil")
            .attr(PreSetStatusAttr::StatusImmunity(vec![
                Status::Poison,
                Status::BadPoison,
            ]))
            .attr(PostSummonAttr::CureAlliesStatus(vec![
                Status::Poison,
                Status::BadPoison,
            ]))
            .ignorable()
            .partial()
            .build(),
        Ability::builder(AbilityId::Synchronize, "Synchronize")
            .attr(PostSetStatusAttr::Synchronize)
            .build(),
        Ability::builder(AbilityId::NaturalCure, "Natural Cure")
            .attr(PreSwitchOutAttr::CureStatus)
            .build(),
        Ability::builder(AbilityId::ShedSkin, "Shed Skin")
            .attr(PostTurnAttr::CureStatus(30))
            .build(),
    ]
}

fn terrain_setter(id: AbilityId, name: &str, terrain: TerrainType) -> Ability {
    Ability::builder(id, name)
        .attr(PostSummonAttr::TerrainChange(terrain))
        .build()
}

fn field_abilities() -> Vec<Ability> {
    vec![
        terrain_setter(AbilityId::ElectricSurge, "Electric Surge", TerrainType::Electric),
        terrain_setter(AbilityId::GrassySurge, "Grassy Surge", TerrainType::Grassy),
        Ability::builder(AbilityId::QuarkDrive, "Quark Drive")
            .conditional_attr(
                Condition::terrain_is(&[TerrainType::Electric]),
                PostSummonAttr::AddTag(BattlerTagType::QuarkDrive),
            )
            .attr(PostTerrainChangeAttr::AddTag {
                terrains: vec![TerrainType::Electric],
                tag_type: BattlerTagType::QuarkDrive,
            })
            .partial()
            .build(),
        Ability::builder(AbilityId::Pressure, "Pressure")
            .attr(PostSummonAttr::Message(
                "{mon} is exerting its pressure!".to_owned(),
            ))
            .partial()
            .build(),
        // Ignoring abilities is started by the move engine when the Mon attacks.
        Ability::builder(AbilityId::MoldBreaker, "Mold Breaker")
            .attr(PostSummonAttr::Message("{mon} breaks the mold!".to_owned()))
            .build(),
        Ability::builder(AbilityId::NeutralizingGas, "Neutralizing Gas")
            .attr(PostSummonAttr::SuppressAbilities)
            .attr(PreLeaveFieldAttr::EndAbilitySuppression)
            .bypass_faint()
            .unsuppressable()
            .build(),
        // Does not retry later if no opponent has a copyable ability on entry.
        Ability::builder(AbilityId::Trace, "Trace")
            .attr(PostSummonAttr::Trace)
            .edge_case()
            .build(),
        Ability::builder(AbilityId::Receiver, "Receiver")
            .attr(PostKnockOutAttr::CopyFaintedAllyAbility)
            .build(),
        Ability::builder(AbilityId::Pickup, "Pickup")
            .attr(PostBattleAttr::Loot)
            .partial()
            .build(),
        // Only the form on entering battle is set.
        Ability::builder(AbilityId::Schooling, "Schooling")
            .attr(PostBattleInitAttr::FormChangeByHp {
                ratio: 0.25,
                min_level: 20,
                form: 1,
            })
            .attribute(
                AbilityAttribute::new(PostSummonAttr::Message(
                    "{mon} formed a school!".to_owned(),
                ))
                .with_condition(Condition::new(|battle, mon| {
                    battle.mon(mon).is_ok_and(|mon| mon.form == 1)
                })),
            )
            .unsuppressable()
            .partial()
            .build(),
    ]
}
