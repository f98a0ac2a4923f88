use battler_abilities::{
    abilities::AbilityId,
    battle::{
        Battle,
        MonData,
        MonHandle,
        WeatherType,
        actions,
    },
    mons::{
        Stat,
        Status,
        Type,
    },
};
use battler_test_utils::TestBattleBuilder;

fn multiplier(battle: &mut Battle, mon: usize, stat: Stat) -> f64 {
    actions::stat_multiplier(battle, MonHandle::new(mon), stat, false).unwrap()
}

#[test]
fn huge_power_doubles_attack_only() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Azumarill", vec![Type::Water, Type::Fairy], AbilityId::HugePower)
        .build()
        .unwrap();

    assert_eq!(multiplier(&mut battle, 0, Stat::Atk), 2.0);
    assert_eq!(multiplier(&mut battle, 0, Stat::SpAtk), 1.0);
    assert!(battle.queue().is_empty());
}

#[test]
fn guts_boosts_attack_with_status() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Heracross", vec![Type::Bug, Type::Fighting], AbilityId::Guts)
        .add_mon(
            MonData::new("Ursaring", vec![Type::Normal], 100, AbilityId::Guts)
                .with_status(Status::Burn)
                .on_side(1),
        )
        .build()
        .unwrap();

    assert_eq!(multiplier(&mut battle, 0, Stat::Atk), 1.0);
    assert_eq!(multiplier(&mut battle, 1, Stat::Atk), 1.5);
}

#[test]
fn ruin_abilities_do_not_stack() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Chien-Pao", vec![Type::Dark, Type::Ice], AbilityId::SwordOfRuin)
        .add_mon_to_side_1("Chien-Pao", vec![Type::Dark, Type::Ice], AbilityId::SwordOfRuin)
        .add_mon_to_side_2("Eevee", vec![Type::Normal], AbilityId::Pressure)
        .build()
        .unwrap();

    assert_eq!(multiplier(&mut battle, 2, Stat::Def), 0.75);
    assert_eq!(multiplier(&mut battle, 2, Stat::SpDef), 1.0);
}

#[test]
fn flower_gift_boosts_allies_in_sun() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_weather(WeatherType::Sunny)
        .add_mon_to_side_1("Cherrim", vec![Type::Grass], AbilityId::FlowerGift)
        .add_mon_to_side_1("Eevee", vec![Type::Normal], AbilityId::Pressure)
        .add_mon_to_side_2("Pidgey", vec![Type::Normal, Type::Flying], AbilityId::KeenEye)
        .build()
        .unwrap();

    assert_eq!(multiplier(&mut battle, 0, Stat::Atk), 1.5);
    assert_eq!(multiplier(&mut battle, 1, Stat::Atk), 1.5);
    assert_eq!(multiplier(&mut battle, 1, Stat::SpDef), 1.5);
    assert_eq!(multiplier(&mut battle, 1, Stat::Def), 1.0);
    assert_eq!(multiplier(&mut battle, 2, Stat::Atk), 1.0);
}
