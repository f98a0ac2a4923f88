use battler_abilities::{
    abilities::{
        AbilityId,
        hooks,
    },
    battle::{
        Battle,
        MonData,
        MonHandle,
        Phase,
    },
    common::Id,
    mons::{
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

fn make_battle(attacker: MonData, target: MonData) -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon(attacker.on_side(0))
        .add_mon(target.on_side(1))
        .build()
        .unwrap()
}

fn tackle() -> MoveData {
    MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

fn eevee() -> MonData {
    MonData::new("Eevee", vec![Type::Normal], 100, AbilityId::Pressure)
}

#[test]
fn critical_hit_abilities_write_result_holders_silently() {
    let mut battle = make_battle(
        MonData::new("Absol", vec![Type::Dark], 100, AbilityId::SuperLuck),
        MonData::new("Kabutops", vec![Type::Rock, Type::Water], 100, AbilityId::BattleArmor),
    );

    let mut blocked = false;
    let mut crit_stage = 0;
    assert_matches::assert_matches!(
        hooks::apply_critical_hit(
            &mut battle,
            MonHandle::new(0),
            &mut blocked,
            &mut crit_stage,
            false,
        ),
        Ok(true)
    );
    assert!(!blocked);
    assert_eq!(crit_stage, 1);

    assert_matches::assert_matches!(
        hooks::apply_critical_hit(
            &mut battle,
            MonHandle::new(1),
            &mut blocked,
            &mut crit_stage,
            false,
        ),
        Ok(true)
    );
    assert!(blocked);
    assert_eq!(crit_stage, 1);
    assert!(battle.queue().is_empty());
}

#[test]
fn rock_head_blocks_recoil() {
    let mut battle = make_battle(
        MonData::new("Aerodactyl", vec![Type::Rock, Type::Flying], 100, AbilityId::RockHead),
        eevee(),
    );

    let mut cancelled = false;
    assert_matches::assert_matches!(
        hooks::apply_pre_recoil_damage(&mut battle, MonHandle::new(0), &mut cancelled, false),
        Ok(true)
    );
    assert!(cancelled);

    let mut cancelled = false;
    assert_matches::assert_matches!(
        hooks::apply_pre_recoil_damage(&mut battle, MonHandle::new(1), &mut cancelled, false),
        Ok(false)
    );
    assert!(!cancelled);
}

#[test]
fn poison_touch_poisons_target_on_contact() {
    let mut battle = make_battle(
        MonData::new("Grimer", vec![Type::Poison], 100, AbilityId::PoisonTouch),
        eevee(),
    );
    let grimer = MonHandle::new(0);
    let eevee = MonHandle::new(1);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values([(1, 0), (2, 0)]);

    let swift = MoveData::new("Swift", Type::Normal, MoveCategory::Special, 60);
    assert_matches::assert_matches!(
        hooks::apply_post_attack(&mut battle, grimer, eevee, &swift, HitResult::Effective, false),
        Ok(false)
    );
    assert_matches::assert_matches!(
        hooks::apply_post_attack(&mut battle, grimer, eevee, &tackle(), HitResult::NoEffect, false),
        Ok(false)
    );

    assert_matches::assert_matches!(
        hooks::apply_post_attack(
            &mut battle,
            grimer,
            eevee,
            &tackle(),
            HitResult::Effective,
            false,
        ),
        Ok(true)
    );
    assert_eq!(battle.mon(eevee).unwrap().status, Some(Status::Poison));
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: grimer,
                ability: AbilityId::PoisonTouch,
                passive: false,
            },
            Phase::Message("Eevee was poisoned!".to_owned()),
        ],
    );

    // Already poisoned.
    assert_matches::assert_matches!(
        hooks::apply_post_attack(
            &mut battle,
            grimer,
            eevee,
            &tackle(),
            HitResult::Effective,
            false,
        ),
        Ok(false)
    );
}

#[test]
fn magician_steals_item_after_damaging_target() {
    let mut battle = make_battle(
        MonData::new("Delphox", vec![Type::Fire, Type::Psychic], 100, AbilityId::Magician),
        eevee().with_item("Leftovers"),
    );
    let delphox = MonHandle::new(0);
    let eevee = MonHandle::new(1);

    let psychic = MoveData::new("Psychic", Type::Psychic, MoveCategory::Special, 90);
    assert_matches::assert_matches!(
        hooks::apply_post_attack(&mut battle, delphox, eevee, &psychic, HitResult::Effective, true),
        Ok(true)
    );
    assert_eq!(battle.mon(delphox).unwrap().item, None);

    assert_matches::assert_matches!(
        hooks::apply_post_attack(
            &mut battle,
            delphox,
            eevee,
            &psychic,
            HitResult::Effective,
            false,
        ),
        Ok(true)
    );
    assert_eq!(battle.mon(delphox).unwrap().item, Some(Id::from("leftovers")));
    assert_eq!(battle.mon(eevee).unwrap().item, None);
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: delphox,
                ability: AbilityId::Magician,
                passive: false,
            },
            Phase::Message("Delphox stole Eevee's leftovers!".to_owned()),
        ],
    );
}
