use std::sync::Arc;

use battler_abilities::{
    abilities::{
        AbilityCatalog,
        AbilityId,
        hooks,
    },
    battle::MonHandle,
    mons::Type,
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_error_message,
    assert_error_message_contains,
};

#[test]
fn battle_fails_to_build_with_ability_missing_from_catalog() {
    assert_error_message(
        TestBattleBuilder::new()
            .with_catalog(Arc::new(AbilityCatalog::builder().build()))
            .add_mon_to_side_1("Gyarados", vec![Type::Water, Type::Flying], AbilityId::Intimidate)
            .build(),
        "invalid mon Gyarados: ability intimidate not found",
    );
}

#[test]
fn dispatch_fails_for_unknown_mon() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Gyarados", vec![Type::Water, Type::Flying], AbilityId::Intimidate)
        .build()
        .unwrap();

    assert_error_message(
        hooks::apply_post_summon(&mut battle, MonHandle::new(5), false),
        "mon 5 not found",
    );
    assert_error_message_contains(
        hooks::apply_post_summon(&mut battle, MonHandle::new(5), true),
        "not found",
    );
    assert!(battle.queue().is_empty());
    assert!(battle.log().is_empty());
}
