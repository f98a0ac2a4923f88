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
        BoostTable,
        Status,
        Type,
    },
    moves::{
        HitResult,
        MoveCategory,
        MoveData,
        MoveFlag,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_queue_eq,
    get_controlled_rng_for_battle,
};

fn make_intimidate_battle() -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(
            "Gyarados",
            vec![Type::Water, Type::Flying],
            AbilityId::Intimidate,
        )
        .add_mon_to_side_2("Pikachu", vec![Type::Electric], AbilityId::Static)
        .add_mon_to_side_2("Raichu", vec![Type::Electric], AbilityId::Static)
        .build()
        .unwrap()
}

fn make_static_battle(seed: u64, controlled_rng: bool) -> Battle {
    TestBattleBuilder::new()
        .with_seed(seed)
        .with_controlled_rng(controlled_rng)
        .add_mon_to_side_1("Pikachu", vec![Type::Electric], AbilityId::Static)
        .add_mon_to_side_2("Eevee", vec![Type::Normal], AbilityId::Pressure)
        .build()
        .unwrap()
}

fn tackle() -> MoveData {
    MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

#[test]
fn simulated_dispatch_leaves_battle_untouched() {
    let mut battle = make_intimidate_battle();
    let gyarados = MonHandle::new(0);
    let prng_state = battle.prng_state();

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, true),
        Ok(true)
    );

    assert!(battle.queue().is_empty());
    assert!(battle.log().is_empty());
    assert_eq!(battle.prng_state(), prng_state);
    assert!(
        !battle
            .ledger(gyarados)
            .unwrap()
            .applied_in_battle(AbilityId::Intimidate)
    );
    for opponent in [1, 2] {
        assert_eq!(
            battle.mon(MonHandle::new(opponent)).unwrap().boosts,
            BoostTable::default()
        );
    }
}

#[test]
fn live_dispatch_queues_effects_and_records_ability() {
    let mut battle = make_intimidate_battle();
    let gyarados = MonHandle::new(0);

    assert_matches::assert_matches!(
        hooks::apply_post_summon(&mut battle, gyarados, false),
        Ok(true)
    );

    assert!(
        battle
            .ledger(gyarados)
            .unwrap()
            .applied_in_battle(AbilityId::Intimidate)
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: gyarados,
                ability: AbilityId::Intimidate,
                passive: false,
            },
            Phase::StatStageChange {
                target: MonHandle::new(1),
                boosts: vec![Boost::Atk],
                stages: -1,
                self_inflicted: false,
                source: Some(gyarados),
            },
            Phase::StatStageChange {
                target: MonHandle::new(2),
                boosts: vec![Boost::Atk],
                stages: -1,
                self_inflicted: false,
                source: Some(gyarados),
            },
        ],
    );
}

#[test]
fn simulated_decision_matches_live_decision() {
    let pikachu = MonHandle::new(0);
    let eevee = MonHandle::new(1);
    for seed in 0..20 {
        let mut battle = make_static_battle(seed, false);
        let prng_state = battle.prng_state();
        let simulated = hooks::apply_post_defend(
            &mut battle,
            pikachu,
            eevee,
            &tackle(),
            HitResult::Effective,
            true,
        )
        .unwrap();
        assert_eq!(battle.prng_state(), prng_state, "seed {seed}");

        let live = hooks::apply_post_defend(
            &mut battle,
            pikachu,
            eevee,
            &tackle(),
            HitResult::Effective,
            false,
        )
        .unwrap();
        assert_eq!(simulated, live, "seed {seed}");
        assert_eq!(
            battle.mon(eevee).unwrap().status == Some(Status::Paralysis),
            live,
            "seed {seed}"
        );
    }
}

#[test]
fn contact_status_applies_on_successful_roll() {
    let mut battle = make_static_battle(0, true);
    let pikachu = MonHandle::new(0);
    let eevee = MonHandle::new(1);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 0);

    assert_matches::assert_matches!(
        hooks::apply_post_defend(
            &mut battle,
            pikachu,
            eevee,
            &tackle(),
            HitResult::Effective,
            true,
        ),
        Ok(true)
    );
    assert!(battle.queue().is_empty());

    assert_matches::assert_matches!(
        hooks::apply_post_defend(
            &mut battle,
            pikachu,
            eevee,
            &tackle(),
            HitResult::Effective,
            false,
        ),
        Ok(true)
    );
    assert_eq!(battle.mon(eevee).unwrap().status, Some(Status::Paralysis));
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        1
    );
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: pikachu,
                ability: AbilityId::Static,
                passive: false,
            },
            Phase::Message("Eevee was paralyzed!".to_owned()),
        ],
    );
}

#[test]
fn contact_status_fails_on_unsuccessful_roll() {
    let mut battle = make_static_battle(0, true);
    let pikachu = MonHandle::new(0);
    let eevee = MonHandle::new(1);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 99);

    assert_matches::assert_matches!(
        hooks::apply_post_defend(
            &mut battle,
            pikachu,
            eevee,
            &tackle(),
            HitResult::Effective,
            false,
        ),
        Ok(false)
    );
    assert_eq!(battle.mon(eevee).unwrap().status, None);
    assert!(battle.queue().is_empty());
    assert!(
        !battle
            .ledger(pikachu)
            .unwrap()
            .applied_in_battle(AbilityId::Static)
    );
}
