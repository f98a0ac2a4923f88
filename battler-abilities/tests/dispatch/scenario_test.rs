use std::sync::Arc;

use battler_abilities::{
    abilities::{
        Ability,
        AbilityCatalog,
        AbilityId,
        Condition,
        attrs::{
            PostSummonAttr,
            PreWeatherEffectAttr,
        },
        hooks,
    },
    battle::{
        Battle,
        BattlerTagType,
        MonData,
        MonHandle,
        Phase,
        Weather,
        WeatherType,
        actions,
    },
    common::Id,
    mons::{
        Boost,
        Stat,
        Type,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    assert_queue_eq,
};

fn make_weather_battle(catalog: Option<AbilityCatalog>) -> Battle {
    let mut builder = TestBattleBuilder::new().with_seed(0).add_mon_to_side_1(
        "Golduck",
        vec![Type::Water],
        AbilityId::CloudNine,
    );
    if let Some(catalog) = catalog {
        builder = builder.with_catalog(Arc::new(catalog));
    }
    builder.build().unwrap()
}

#[test]
fn weather_suppression_respects_immutable_weather() {
    let catalog = AbilityCatalog::builder()
        .ability(
            Ability::builder(AbilityId::CloudNine, "Cloud Nine")
                .conditional_attr(
                    Condition::new(|_, _| true),
                    PreWeatherEffectAttr::SuppressWeatherEffect {
                        affects_immutable: false,
                    },
                )
                .build(),
        )
        .build();
    let mut battle = make_weather_battle(Some(catalog));
    let golduck = MonHandle::new(0);

    let mut cancelled = false;
    assert_matches::assert_matches!(
        hooks::apply_pre_weather_effect(
            &mut battle,
            golduck,
            WeatherType::Rain,
            &mut cancelled,
            false,
        ),
        Ok(true)
    );
    assert!(cancelled);
    assert!(battle.queue().is_empty());
    assert_new_logs_eq(&mut battle, &["ability|mon:Golduck,0|name:Cloud Nine"]);

    let mut cancelled = false;
    assert_matches::assert_matches!(
        hooks::apply_pre_weather_effect(
            &mut battle,
            golduck,
            WeatherType::HeavyRain,
            &mut cancelled,
            false,
        ),
        Ok(false)
    );
    assert!(!cancelled);
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn default_weather_suppression_affects_immutable_weather() {
    let mut battle = make_weather_battle(None);
    let mut cancelled = false;
    assert_matches::assert_matches!(
        hooks::apply_pre_weather_effect(
            &mut battle,
            MonHandle::new(0),
            WeatherType::HeavyRain,
            &mut cancelled,
            false,
        ),
        Ok(true)
    );
    assert!(cancelled);
}

fn rain_gated_swift_swim() -> Ability {
    Ability::builder(AbilityId::SwiftSwim, "Swift Swim")
        .condition(Condition::weather_is(&[WeatherType::Rain]))
        .attr(PostSummonAttr::Message("{mon}'s {ability} is ready!".to_owned()))
        .build()
}

#[test]
fn ability_condition_on_weather_sees_raw_weather_during_suppression_check() {
    let catalog = AbilityCatalog::builder()
        .ability(rain_gated_swift_swim())
        .build();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_catalog(Arc::new(catalog))
        .with_weather(WeatherType::Rain)
        .add_mon_to_side_1("Lotad", vec![Type::Water, Type::Grass], AbilityId::SwiftSwim)
        .build()
        .unwrap();
    let lotad = MonHandle::new(0);

    assert!(!battle.weather_suppressed());
    assert_matches::assert_matches!(hooks::apply_post_summon(&mut battle, lotad, false), Ok(true));
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Lotad,0|name:Swift Swim",
            "message|Lotad's Swift Swim is ready!",
        ],
    );
}

#[test]
fn ability_condition_on_weather_respects_suppressor() {
    let catalog = AbilityCatalog::builder()
        .ability(rain_gated_swift_swim())
        .ability(
            Ability::builder(AbilityId::CloudNine, "Cloud Nine")
                .attr(PreWeatherEffectAttr::SuppressWeatherEffect {
                    affects_immutable: true,
                })
                .build(),
        )
        .build();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_catalog(Arc::new(catalog))
        .with_weather(WeatherType::Rain)
        .add_mon_to_side_1("Lotad", vec![Type::Water, Type::Grass], AbilityId::SwiftSwim)
        .add_mon_to_side_2("Golduck", vec![Type::Water], AbilityId::CloudNine)
        .build()
        .unwrap();

    assert!(battle.weather_suppressed());
    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, MonHandle::new(0), false),
        Ok(false)
    );
    assert!(battle.queue().is_empty());
}

#[test]
fn weather_gated_suppressor_sees_raw_weather() {
    let catalog = AbilityCatalog::builder()
        .ability(
            Ability::builder(AbilityId::CloudNine, "Cloud Nine")
                .conditional_attr(
                    Condition::weather_is(&[WeatherType::Rain]),
                    PreWeatherEffectAttr::SuppressWeatherEffect {
                        affects_immutable: true,
                    },
                )
                .build(),
        )
        .build();
    let mut battle = make_weather_battle(Some(catalog));
    assert!(!battle.weather_suppressed());

    battle.field.weather = Some(Weather {
        weather_type: WeatherType::Rain,
        turns_left: None,
    });
    assert!(battle.weather_suppressed());
    assert!(battle.weather_suppressed());
    assert_eq!(battle.effective_weather(), None);

    battle.field.weather = Some(Weather {
        weather_type: WeatherType::Sunny,
        turns_left: None,
    });
    assert!(!battle.weather_suppressed());
    assert_eq!(battle.effective_weather(), Some(WeatherType::Sunny));
}

fn make_intimidate_battle(first_opponent_ability: AbilityId) -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(
            "Gyarados",
            vec![Type::Water, Type::Flying],
            AbilityId::Intimidate,
        )
        .add_mon_to_side_2("Abra", vec![Type::Psychic], first_opponent_ability)
        .add_mon_to_side_2("Eevee", vec![Type::Normal], AbilityId::Pressure)
        .build()
        .unwrap()
}

#[test]
fn intimidate_lowers_attack_of_every_opponent() {
    let mut battle = make_intimidate_battle(AbilityId::Pressure);
    let gyarados = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, true),
        Ok(true)
    );
    assert!(battle.queue().is_empty());

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, false),
        Ok(true)
    );
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Gyarados,0|name:Intimidate",
            "message|Abra's Attack fell!",
            "message|Eevee's Attack fell!",
        ],
    );
    assert_eq!(battle.mon(MonHandle::new(1)).unwrap().boosts.get(Boost::Atk), -1);
    assert_eq!(battle.mon(MonHandle::new(2)).unwrap().boosts.get(Boost::Atk), -1);
}

#[test]
fn intimidate_immunity_resolves_before_remaining_effects() {
    let mut battle = make_intimidate_battle(AbilityId::InnerFocus);
    let gyarados = MonHandle::new(0);
    let abra = MonHandle::new(1);
    let eevee = MonHandle::new(2);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, false),
        Ok(true)
    );
    assert_eq!(
        battle.queue().iter().cloned().collect::<Vec<_>>(),
        vec![
            Phase::ShowAbility {
                mon: gyarados,
                ability: AbilityId::Intimidate,
                passive: false,
            },
            Phase::ShowAbility {
                mon: abra,
                ability: AbilityId::InnerFocus,
                passive: false,
            },
            Phase::Message("Abra's Inner Focus prevents it from being intimidated!".to_owned()),
            Phase::StatStageChange {
                target: eevee,
                boosts: vec![Boost::Atk],
                stages: -1,
                self_inflicted: false,
                source: Some(gyarados),
            },
        ]
    );

    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Gyarados,0|name:Intimidate",
            "ability|mon:Abra,1|name:Inner Focus",
            "message|Abra's Inner Focus prevents it from being intimidated!",
            "message|Eevee's Attack fell!",
        ],
    );
    assert_eq!(battle.mon(abra).unwrap().boosts.get(Boost::Atk), 0);
    assert!(
        battle
            .ledger(abra)
            .unwrap()
            .applied_in_battle(AbilityId::InnerFocus)
    );
}

#[test]
fn lost_item_speeds_up_once() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(
            MonData::new("Sceptile", vec![Type::Grass], 100, AbilityId::Unburden)
                .with_item("Sitrus Berry")
                .on_side(0),
        )
        .build()
        .unwrap();
    let sceptile = MonHandle::new(0);

    assert_matches::assert_matches!(
        actions::stat_multiplier(&mut battle, sceptile, Stat::Spe, true),
        Ok(multiplier) => assert_eq!(multiplier, 1.0)
    );

    assert_matches::assert_matches!(
        actions::lose_item(&mut battle, sceptile),
        Ok(Some(item)) => assert_eq!(item, Id::from("sitrusberry"))
    );
    assert!(battle.mon(sceptile).unwrap().has_tag(BattlerTagType::Unburden));
    assert_eq!(battle.field.loot, vec![Id::from("Sitrus Berry")]);
    assert_queue_eq(
        &mut battle,
        &[Phase::ShowAbility {
            mon: sceptile,
            ability: AbilityId::Unburden,
            passive: false,
        }],
    );

    assert_matches::assert_matches!(
        hooks::apply_post_item_lost(&mut battle, sceptile, false),
        Ok(false)
    );
    assert!(battle.queue().is_empty());

    assert_matches::assert_matches!(
        actions::stat_multiplier(&mut battle, sceptile, Stat::Spe, false),
        Ok(multiplier) => assert_eq!(multiplier, 2.0)
    );
    assert!(battle.queue().is_empty());
}
