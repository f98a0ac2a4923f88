use battler_abilities::{
    abilities::{
        AbilityId,
        hooks,
    },
    battle::{
        Battle,
        BattlerTagType,
        MonHandle,
        Phase,
        actions,
    },
    mons::{
        Status,
        Type,
    },
    moves::{
        MoveCategory,
        MoveData,
    },
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_queue_eq,
};

fn make_battle(defender: (&str, Vec<Type>, AbilityId)) -> Battle {
    let (name, types, ability) = defender;
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(name, types, ability)
        .add_mon_to_side_2("Eevee", vec![Type::Normal], AbilityId::Pressure)
        .build()
        .unwrap()
}

struct PreDefendResult {
    applied: bool,
    cancelled: bool,
    damage_multiplier: f64,
}

fn pre_defend(battle: &mut Battle, move_data: &MoveData, effectiveness: f64) -> PreDefendResult {
    let mut cancelled = false;
    let mut damage_multiplier = 1.0;
    let applied = hooks::apply_pre_defend(
        battle,
        MonHandle::new(0),
        MonHandle::new(1),
        move_data,
        effectiveness,
        &mut cancelled,
        &mut damage_multiplier,
        false,
    )
    .unwrap();
    PreDefendResult {
        applied,
        cancelled,
        damage_multiplier,
    }
}

fn earthquake() -> MoveData {
    MoveData::new("Earthquake", Type::Ground, MoveCategory::Physical, 100)
}

fn thunderbolt() -> MoveData {
    MoveData::new("Thunderbolt", Type::Electric, MoveCategory::Special, 90)
}

#[test]
fn levitate_grants_ground_immunity() {
    let mut battle = make_battle(("Gengar", vec![Type::Ghost, Type::Poison], AbilityId::Levitate));

    let result = pre_defend(&mut battle, &earthquake(), 2.0);
    assert!(result.applied);
    assert!(result.cancelled);
    assert_queue_eq(
        &mut battle,
        &[Phase::ShowAbility {
            mon: MonHandle::new(0),
            ability: AbilityId::Levitate,
            passive: false,
        }],
    );

    let result = pre_defend(&mut battle, &thunderbolt(), 1.0);
    assert!(!result.applied);
    assert!(!result.cancelled);
}

#[test]
fn ignored_abilities_do_not_apply() {
    let mut battle = make_battle(("Gengar", vec![Type::Ghost, Type::Poison], AbilityId::Levitate));
    battle.field.ignore_abilities = true;
    battle.field.ignoring_source = Some(MonHandle::new(1));

    let result = pre_defend(&mut battle, &earthquake(), 2.0);
    assert!(!result.applied);
    assert!(!result.cancelled);
    assert!(battle.queue().is_empty());
}

#[test]
fn volt_absorb_heals_only_when_damaged() {
    let mut battle = make_battle(("Jolteon", vec![Type::Electric], AbilityId::VoltAbsorb));
    let jolteon = MonHandle::new(0);

    let result = pre_defend(&mut battle, &thunderbolt(), 0.5);
    assert!(result.applied);
    assert!(result.cancelled);
    assert_queue_eq(
        &mut battle,
        &[Phase::ShowAbility {
            mon: jolteon,
            ability: AbilityId::VoltAbsorb,
            passive: false,
        }],
    );

    battle.mon_mut(jolteon).unwrap().hp = 50;
    let result = pre_defend(&mut battle, &thunderbolt(), 0.5);
    assert!(result.cancelled);
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: jolteon,
                ability: AbilityId::VoltAbsorb,
                passive: false,
            },
            Phase::Heal {
                target: jolteon,
                amount: 25,
            },
        ],
    );
}

#[test]
fn wonder_guard_blocks_moves_that_are_not_super_effective() {
    let mut battle = make_battle((
        "Shedinja",
        vec![Type::Bug, Type::Ghost],
        AbilityId::WonderGuard,
    ));

    let result = pre_defend(&mut battle, &thunderbolt(), 1.0);
    assert!(result.cancelled);
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: MonHandle::new(0),
                ability: AbilityId::WonderGuard,
                passive: false,
            },
            Phase::Message("Shedinja avoided damage with Wonder Guard!".to_owned()),
        ],
    );

    let flamethrower = MoveData::new("Flamethrower", Type::Fire, MoveCategory::Special, 90);
    let result = pre_defend(&mut battle, &flamethrower, 2.0);
    assert!(!result.applied);
    assert!(!result.cancelled);
}

#[test]
fn damage_multipliers_apply_silently() {
    let mut battle = make_battle(("Snorlax", vec![Type::Normal], AbilityId::ThickFat));
    let ice_beam = MoveData::new("Ice Beam", Type::Ice, MoveCategory::Special, 90);
    let result = pre_defend(&mut battle, &ice_beam, 1.0);
    assert!(result.applied);
    assert!(!result.cancelled);
    assert_eq!(result.damage_multiplier, 0.5);
    assert!(battle.queue().is_empty());

    let mut battle = make_battle(("Mr. Mime", vec![Type::Psychic, Type::Fairy], AbilityId::Filter));
    let shadow_ball = MoveData::new("Shadow Ball", Type::Ghost, MoveCategory::Special, 80);
    assert_eq!(pre_defend(&mut battle, &shadow_ball, 2.0).damage_multiplier, 0.75);
    assert_eq!(pre_defend(&mut battle, &shadow_ball, 1.0).damage_multiplier, 1.0);
}

#[test]
fn flash_fire_powers_up_fire_moves_after_absorbing_one() {
    let mut battle = make_battle(("Arcanine", vec![Type::Fire], AbilityId::FlashFire));
    let arcanine = MonHandle::new(0);
    let ember = MoveData::new("Ember", Type::Fire, MoveCategory::Special, 40);

    let mut move_type = Type::Fire;
    let mut power_multiplier = 1.0;
    assert_matches::assert_matches!(
        hooks::apply_pre_attack(
            &mut battle,
            arcanine,
            Some(MonHandle::new(1)),
            &ember,
            &mut move_type,
            &mut power_multiplier,
            false,
        ),
        Ok(false)
    );

    let result = pre_defend(&mut battle, &ember, 0.5);
    assert!(result.cancelled);
    assert!(battle.mon(arcanine).unwrap().has_tag(BattlerTagType::FlashFire));

    assert_matches::assert_matches!(
        hooks::apply_pre_attack(
            &mut battle,
            arcanine,
            Some(MonHandle::new(1)),
            &ember,
            &mut move_type,
            &mut power_multiplier,
            false,
        ),
        Ok(true)
    );
    assert_eq!(power_multiplier, 1.5);
}

#[test]
fn status_immunity_prevents_status() {
    let mut battle = make_battle(("Persian", vec![Type::Normal], AbilityId::Limber));
    let persian = MonHandle::new(0);

    assert_matches::assert_matches!(
        actions::try_set_status(&mut battle, persian, Status::Paralysis, Some(MonHandle::new(1))),
        Ok(false)
    );
    assert_eq!(battle.mon(persian).unwrap().status, None);

    assert_matches::assert_matches!(
        actions::try_set_status(&mut battle, persian, Status::Burn, Some(MonHandle::new(1))),
        Ok(true)
    );
    assert_eq!(battle.mon(persian).unwrap().status, Some(Status::Burn));
}
