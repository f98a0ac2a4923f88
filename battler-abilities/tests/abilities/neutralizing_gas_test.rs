use battler_abilities::{
    abilities::{
        AbilityId,
        hooks,
    },
    battle::{
        Battle,
        MonHandle,
        Phase,
        actions,
    },
    mons::Type,
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    assert_queue_eq,
};

fn make_battle() -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Weezing", vec![Type::Poison], AbilityId::NeutralizingGas)
        .add_mon_to_side_2(
            "Gyarados",
            vec![Type::Water, Type::Flying],
            AbilityId::Intimidate,
        )
        .build()
        .unwrap()
}

#[test]
fn neutralizing_gas_suppresses_other_abilities() {
    let mut battle = make_battle();
    let weezing = MonHandle::new(0);
    let gyarados = MonHandle::new(1);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, weezing, false),
        Ok(true)
    );
    assert_eq!(battle.field.ability_suppressors, vec![weezing]);
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: weezing,
                ability: AbilityId::NeutralizingGas,
                passive: false,
            },
            Phase::Message("Neutralizing gas filled the area!".to_owned()),
        ],
    );

    assert_matches::assert_matches!(battle.can_apply_ability(gyarados, false), Ok(false));
    assert_matches::assert_matches!(battle.can_apply_ability(weezing, false), Ok(true));
    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, false),
        Ok(false)
    );
    assert!(battle.queue().is_empty());

    // Suppression only starts once.
    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, weezing, false),
        Ok(false)
    );
}

#[test]
fn suppressed_abilities_resume_when_neutralizing_gas_leaves() {
    let mut battle = make_battle();
    let weezing = MonHandle::new(0);
    let gyarados = MonHandle::new(1);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, weezing, false),
        Ok(true)
    );
    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, false),
        Ok(false)
    );
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Weezing,0|name:Neutralizing Gas",
            "message|Neutralizing gas filled the area!",
        ],
    );

    assert_matches::assert_matches!(actions::switch_out(&mut battle, weezing), Ok(()));
    assert!(battle.field.ability_suppressors.is_empty());
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Weezing,0|name:Neutralizing Gas",
            "message|The effects of the neutralizing gas wore off!",
            "ability|mon:Gyarados,1|name:Intimidate",
        ],
    );
    assert!(
        battle
            .ledger(gyarados)
            .unwrap()
            .applied_in_battle(AbilityId::Intimidate)
    );
}

#[test]
fn suppression_ends_when_neutralizing_gas_faints() {
    let mut battle = make_battle();
    let weezing = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, weezing, false),
        Ok(true)
    );
    battle.mon_mut(weezing).unwrap().hp = 0;
    assert_matches::assert_matches!(actions::faint(&mut battle, weezing, None, None, None), Ok(()));
    assert!(battle.field.ability_suppressors.is_empty());
}
