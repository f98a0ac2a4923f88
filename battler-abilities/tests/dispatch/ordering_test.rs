use battler_abilities::{
    abilities::{
        AbilityId,
        DispatchOptions,
        attrs::PostSummonAttr,
        dispatch,
        hooks,
    },
    battle::{
        Battle,
        MonData,
        MonHandle,
        Phase,
    },
    mons::Type,
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    assert_queue_eq,
};

fn make_battle(passive_abilities: bool, passive: AbilityId) -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_passive_abilities(passive_abilities)
        .add_mon(
            MonData::new(
                "Excadrill",
                vec![Type::Ground, Type::Steel],
                100,
                AbilityId::Pressure,
            )
            .with_passive(passive)
            .on_side(0),
        )
        .add_mon_to_side_2("Eevee", vec![Type::Normal], AbilityId::InnerFocus)
        .build()
        .unwrap()
}

#[test]
fn primary_ability_applies_before_passive_ability() {
    let mut battle = make_battle(true, AbilityId::MoldBreaker);
    let excadrill = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, excadrill, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: excadrill,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Excadrill is exerting its pressure!".to_owned()),
            Phase::ShowAbility {
                mon: excadrill,
                ability: AbilityId::MoldBreaker,
                passive: true,
            },
            Phase::Message("Excadrill breaks the mold!".to_owned()),
        ],
    );
}

#[test]
fn queued_indicators_resolve_in_order() {
    let mut battle = make_battle(true, AbilityId::MoldBreaker);
    let excadrill = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, excadrill, false),
        Ok(true)
    );
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Excadrill,0|name:Pressure",
            "message|Excadrill is exerting its pressure!",
            "ability|mon:Excadrill,0|name:Mold Breaker",
            "message|Excadrill breaks the mold!",
        ],
    );
}

#[test]
fn simulated_dispatch_collects_messages_in_order() {
    let mut battle = make_battle(true, AbilityId::MoldBreaker);
    let excadrill = MonHandle::new(0);

    let mut messages = Vec::new();
    assert_matches::assert_matches!(
        dispatch::apply_ab_attrs::<PostSummonAttr>(
            &mut battle,
            excadrill,
            &mut (),
            DispatchOptions::new(true).with_messages(Some(&mut messages)),
        ),
        Ok(true)
    );
    pretty_assertions::assert_eq!(
        messages,
        vec![
            "Excadrill is exerting its pressure!",
            "Excadrill breaks the mold!",
        ]
    );
    assert!(battle.queue().is_empty());
}

#[test]
fn same_ability_in_both_slots_applies_once() {
    let mut battle = make_battle(true, AbilityId::Pressure);
    let excadrill = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, excadrill, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: excadrill,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Excadrill is exerting its pressure!".to_owned()),
        ],
    );
}

#[test]
fn passive_ability_skipped_when_disabled() {
    let mut battle = make_battle(false, AbilityId::MoldBreaker);
    let excadrill = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, excadrill, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: excadrill,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Excadrill is exerting its pressure!".to_owned()),
        ],
    );
    assert!(
        !battle
            .ledger(excadrill)
            .unwrap()
            .applied_in_battle(AbilityId::MoldBreaker)
    );
}

#[test]
fn hidden_ability_indicator_omits_name() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_reveal_abilities(false)
        .add_mon_to_side_1("Dusclops", vec![Type::Ghost], AbilityId::Pressure)
        .build()
        .unwrap();

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, MonHandle::new(0), false),
        Ok(true)
    );
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Dusclops,0",
            "message|Dusclops is exerting its pressure!",
        ],
    );
}
