use battler_abilities::{
    abilities::AbilityId,
    battle::{
        AbilityLedger,
        Battle,
        MonHandle,
        actions,
    },
    mons::Type,
};
use battler_test_utils::TestBattleBuilder;

fn make_battle(
    trapper: (&str, Vec<Type>, AbilityId),
    others: Vec<(&str, Vec<Type>, AbilityId)>,
) -> Battle {
    let (name, types, ability) = trapper;
    others
        .into_iter()
        .fold(
            TestBattleBuilder::new()
                .with_seed(0)
                .add_mon_to_side_1(name, types, ability),
            |builder, (name, types, ability)| builder.add_mon_to_side_2(name, types, ability),
        )
        .build()
        .unwrap()
}

#[test]
fn arena_trap_traps_grounded_mons() {
    let mut battle = make_battle(
        ("Dugtrio", vec![Type::Ground], AbilityId::ArenaTrap),
        vec![
            ("Eevee", vec![Type::Normal], AbilityId::Pressure),
            ("Pidgey", vec![Type::Normal, Type::Flying], AbilityId::KeenEye),
            ("Bronzor", vec![Type::Steel, Type::Psychic], AbilityId::Levitate),
            ("Gastly", vec![Type::Ghost, Type::Poison], AbilityId::Pressure),
        ],
    );

    assert_matches::assert_matches!(
        actions::check_trapped(&mut battle, MonHandle::new(1)),
        Ok((true, messages)) => {
            pretty_assertions::assert_eq!(
                messages,
                vec!["Eevee can't escape because of Dugtrio's Arena Trap!"]
            );
        }
    );
    for mon in [2, 3, 4] {
        assert_matches::assert_matches!(
            actions::check_trapped(&mut battle, MonHandle::new(mon)),
            Ok((false, messages)) => assert!(messages.is_empty())
        );
    }

    // Checking for traps has no side effects.
    assert!(battle.queue().is_empty());
    assert!(battle.log().is_empty());
    assert_eq!(
        battle.ledger(MonHandle::new(0)).unwrap(),
        &AbilityLedger::default()
    );
}

#[test]
fn shadow_tag_does_not_trap_shadow_tag() {
    let mut battle = make_battle(
        ("Wobbuffet", vec![Type::Psychic], AbilityId::ShadowTag),
        vec![
            ("Wynaut", vec![Type::Psychic], AbilityId::ShadowTag),
            ("Pidgey", vec![Type::Normal, Type::Flying], AbilityId::KeenEye),
        ],
    );

    assert_matches::assert_matches!(
        actions::check_trapped(&mut battle, MonHandle::new(1)),
        Ok((false, _))
    );
    assert_matches::assert_matches!(
        actions::check_trapped(&mut battle, MonHandle::new(2)),
        Ok((true, _))
    );
}

#[test]
fn magnet_pull_traps_steel_types() {
    let mut battle = make_battle(
        ("Magnezone", vec![Type::Electric, Type::Steel], AbilityId::MagnetPull),
        vec![
            ("Skarmory", vec![Type::Steel, Type::Flying], AbilityId::KeenEye),
            ("Eevee", vec![Type::Normal], AbilityId::Pressure),
        ],
    );

    assert_matches::assert_matches!(
        actions::check_trapped(&mut battle, MonHandle::new(1)),
        Ok((true, messages)) => {
            pretty_assertions::assert_eq!(
                messages,
                vec!["Skarmory can't escape because of Magnezone's Magnet Pull!"]
            );
        }
    );
    assert_matches::assert_matches!(
        actions::check_trapped(&mut battle, MonHandle::new(2)),
        Ok((false, _))
    );
}
