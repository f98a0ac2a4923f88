use std::sync::{
    Arc,
    atomic::{
        AtomicUsize,
        Ordering,
    },
};

use battler_abilities::{
    abilities::{
        Ability,
        AbilityCatalog,
        AbilityId,
        Condition,
        attrs::PostSummonAttr,
        hooks,
    },
    battle::{
        AbilityLedger,
        Battle,
        MonData,
        MonHandle,
        Phase,
        actions,
    },
    mons::{
        Status,
        Type,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_queue_eq,
};

#[test]
fn ability_recorded_once_for_many_attributes() {
    let catalog = AbilityCatalog::builder()
        .ability(
            Ability::builder(AbilityId::Pressure, "Pressure")
                .attr(PostSummonAttr::Message("{mon} is exerting its pressure!".to_owned()))
                .attr(PostSummonAttr::Message("{mon} is still exerting it!".to_owned()))
                .build(),
        )
        .build();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_catalog(Arc::new(catalog))
        .add_mon_to_side_1("Dusclops", vec![Type::Ghost], AbilityId::Pressure)
        .build()
        .unwrap();
    let dusclops = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, dusclops, false),
        Ok(true)
    );

    let ledger = battle.ledger(dusclops).unwrap();
    assert_eq!(ledger.summon_data.abilities_applied.len(), 1);
    assert_eq!(ledger.battle_data.abilities_applied.len(), 1);
    assert_eq!(ledger.turn_data.abilities_applied.len(), 1);
    assert!(ledger.applied_this_turn(AbilityId::Pressure));
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: dusclops,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Dusclops is exerting its pressure!".to_owned()),
            Phase::ShowAbility {
                mon: dusclops,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Dusclops is still exerting it!".to_owned()),
        ],
    );
}

#[test]
fn failed_condition_skips_ability_entirely() {
    let evaluations = Arc::new(AtomicUsize::new(0));
    let condition = {
        let evaluations = evaluations.clone();
        Condition::new(move |_, _| {
            evaluations.fetch_add(1, Ordering::Relaxed);
            false
        })
    };
    let catalog = AbilityCatalog::builder()
        .ability(
            Ability::builder(AbilityId::Pressure, "Pressure")
                .attr(PostSummonAttr::Message("{mon} is exerting its pressure!".to_owned()))
                .attr(PostSummonAttr::Message("{mon} is still exerting it!".to_owned()))
                .condition(condition)
                .build(),
        )
        .build();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_catalog(Arc::new(catalog))
        .add_mon_to_side_1("Dusclops", vec![Type::Ghost], AbilityId::Pressure)
        .build()
        .unwrap();
    let dusclops = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, dusclops, false),
        Ok(false)
    );
    assert_eq!(evaluations.load(Ordering::Relaxed), 1);
    assert!(battle.queue().is_empty());
    assert_eq!(battle.ledger(dusclops).unwrap(), &AbilityLedger::default());
}

#[test]
fn attribute_condition_skips_only_that_attribute() {
    let catalog = AbilityCatalog::builder()
        .ability(
            Ability::builder(AbilityId::Pressure, "Pressure")
                .conditional_attr(
                    Condition::has_status(),
                    PostSummonAttr::Message("{mon} is exerting its pressure!".to_owned()),
                )
                .attr(PostSummonAttr::Message("{mon} is still exerting it!".to_owned()))
                .build(),
        )
        .build();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_catalog(Arc::new(catalog))
        .add_mon_to_side_1("Dusclops", vec![Type::Ghost], AbilityId::Pressure)
        .build()
        .unwrap();
    let dusclops = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, dusclops, false),
        Ok(true)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: dusclops,
                ability: AbilityId::Pressure,
                passive: false,
            },
            Phase::Message("Dusclops is still exerting it!".to_owned()),
        ],
    );
}

fn make_residual_battle() -> Battle {
    TestBattleBuilder::new()
        .with_seed(12345)
        .add_mon_to_side_1("Ninjask", vec![Type::Bug, Type::Flying], AbilityId::SpeedBoost)
        .add_mon(
            MonData::new("Dunsparce", vec![Type::Normal], 100, AbilityId::ShedSkin)
                .with_status(Status::Burn)
                .on_side(1),
        )
        .build()
        .unwrap()
}

fn run_turns(battle: &mut Battle, turns: usize) {
    for _ in 0..turns {
        assert_matches::assert_matches!(actions::end_turn(battle), Ok(()));
        assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    }
}

#[test]
fn restored_ledger_continues_identically() {
    let ninjask = MonHandle::new(0);
    let dunsparce = MonHandle::new(1);

    let mut uninterrupted = make_residual_battle();
    run_turns(&mut uninterrupted, 8);

    let mut first_half = make_residual_battle();
    run_turns(&mut first_half, 4);
    let saved_ledgers = [ninjask, dunsparce].map(|mon| {
        serde_json::to_string(first_half.ledger(mon).unwrap()).unwrap()
    });
    let prng_state = first_half.prng_state();

    let mut resumed = make_residual_battle();
    resumed.restore_prng_state(prng_state);
    for (mon, ledger) in [ninjask, dunsparce].into_iter().zip(saved_ledgers) {
        let ledger = serde_json::from_str::<AbilityLedger>(&ledger).unwrap();
        assert_matches::assert_matches!(resumed.restore_ledger(mon, ledger), Ok(()));
        let state = first_half.mon(mon).unwrap().clone();
        let resumed_mon = resumed.mon_mut(mon).unwrap();
        resumed_mon.status = state.status;
        resumed_mon.boosts = state.boosts;
        resumed_mon.hp = state.hp;
    }
    run_turns(&mut resumed, 4);

    for mon in [ninjask, dunsparce] {
        let want = uninterrupted.mon(mon).unwrap();
        let got = resumed.mon(mon).unwrap();
        pretty_assertions::assert_eq!(got.ledger, want.ledger);
        assert_eq!(got.status, want.status);
        assert_eq!(got.boosts, want.boosts);
    }
    assert_eq!(resumed.prng_state(), uninterrupted.prng_state());
}
