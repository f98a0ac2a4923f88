use battler_abilities::{
    abilities::{
        AbilityId,
        hooks,
    },
    battle::{
        Battle,
        MonHandle,
        Phase,
    },
    mons::{
        Boost,
        Type,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_queue_eq,
};

fn make_battle(opponent_ability: AbilityId) -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Gardevoir", vec![Type::Psychic, Type::Fairy], AbilityId::Trace)
        .add_mon_to_side_2("Gyarados", vec![Type::Water, Type::Flying], opponent_ability)
        .build()
        .unwrap()
}

#[test]
fn trace_copies_and_applies_opponent_ability() {
    let mut battle = make_battle(AbilityId::Intimidate);
    let gardevoir = MonHandle::new(0);
    let gyarados = MonHandle::new(1);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gardevoir, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: gardevoir,
                ability: AbilityId::Trace,
                passive: false,
            },
            Phase::Message("Gardevoir traced Gyarados's Intimidate!".to_owned()),
            Phase::ShowAbility {
                mon: gardevoir,
                ability: AbilityId::Intimidate,
                passive: false,
            },
            Phase::StatStageChange {
                target: gyarados,
                boosts: vec![Boost::Atk],
                stages: -1,
                self_inflicted: false,
                source: Some(gardevoir),
            },
        ],
    );

    let mon = battle.mon(gardevoir).unwrap();
    assert_eq!(mon.ability, AbilityId::Trace);
    assert_eq!(mon.ability_in_slot(false), Some(AbilityId::Intimidate));
    assert!(mon.ledger.applied_since_summon(AbilityId::Trace));
    assert!(mon.ledger.applied_since_summon(AbilityId::Intimidate));
}

#[test]
fn traced_ability_is_lost_on_switch_in() {
    let mut battle = make_battle(AbilityId::Intimidate);
    let gardevoir = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gardevoir, false),
        Ok(true)
    );
    battle.mon_mut(gardevoir).unwrap().switch_out();
    battle.mon_mut(gardevoir).unwrap().switch_in();

    let mon = battle.mon(gardevoir).unwrap();
    assert_eq!(mon.ability_in_slot(false), Some(AbilityId::Trace));
    assert!(!mon.ledger.applied_since_summon(AbilityId::Trace));
    assert!(mon.ledger.applied_in_battle(AbilityId::Trace));
}

#[test]
fn trace_announces_copied_ability_once_per_battle() {
    let mut battle = make_battle(AbilityId::Intimidate);
    let gardevoir = MonHandle::new(0);
    let gyarados = MonHandle::new(1);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gardevoir, false),
        Ok(true)
    );
    battle.queue_mut().drain();
    battle.mon_mut(gardevoir).unwrap().switch_out();
    battle.mon_mut(gardevoir).unwrap().switch_in();

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gardevoir, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: gardevoir,
                ability: AbilityId::Trace,
                passive: false,
            },
            Phase::ShowAbility {
                mon: gardevoir,
                ability: AbilityId::Intimidate,
                passive: false,
            },
            Phase::StatStageChange {
                target: gyarados,
                boosts: vec![Boost::Atk],
                stages: -1,
                self_inflicted: false,
                source: Some(gardevoir),
            },
        ],
    );
    assert_eq!(
        battle.mon(gardevoir).unwrap().ability_in_slot(false),
        Some(AbilityId::Intimidate)
    );
}

#[test]
fn trace_cannot_copy_uncopyable_abilities() {
    for ability in [
        AbilityId::Trace,
        AbilityId::NeutralizingGas,
        AbilityId::Schooling,
    ] {
        let mut battle = make_battle(ability);
        assert_matches::assert_matches!(
            hooks::apply_post_summon(&mut battle, MonHandle::new(0), false),
            Ok(false),
            "{ability}"
        );
        assert!(battle.queue().is_empty());
    }
}
