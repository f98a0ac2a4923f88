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
        actions,
    },
    common::Id,
    mons::Type,
};
use battler_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    assert_queue_eq,
};

fn make_schooling_battle(level: u8) -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(
            MonData::new("Wishiwashi", vec![Type::Water], 100, AbilityId::Schooling)
                .with_level(level)
                .on_side(0),
        )
        .build()
        .unwrap()
}

#[test]
fn schooling_sets_form_when_battle_starts() {
    let mut battle = make_schooling_battle(50);
    let wishiwashi = MonHandle::new(0);

    assert_matches::assert_matches!(actions::start_battle(&mut battle), Ok(()));
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: wishiwashi,
                ability: AbilityId::Schooling,
                passive: false,
            },
            Phase::FormChange {
                mon: wishiwashi,
                form: 1,
            },
        ],
    );

    assert_matches::assert_matches!(actions::start_battle(&mut battle), Ok(()));
    assert_matches::assert_matches!(battle.run_phases(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Wishiwashi,0|name:Schooling",
            "formechange|mon:Wishiwashi,0|form:1",
        ],
    );
    assert_eq!(battle.mon(wishiwashi).unwrap().form, 1);

    // Already in the right form.
    assert_matches::assert_matches!(
        hooks::apply_post_battle_init(&mut battle, wishiwashi, false),
        Ok(false)
    );
}

#[test]
fn schooling_requires_minimum_level() {
    let mut battle = make_schooling_battle(10);
    assert_matches::assert_matches!(
        hooks::apply_post_battle_init(&mut battle, MonHandle::new(0), false),
        Ok(false)
    );
    assert!(battle.queue().is_empty());
}

fn make_pickup_battle() -> Battle {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1("Zigzagoon", vec![Type::Normal], AbilityId::Pickup)
        .add_mon(
            MonData::new("Sceptile", vec![Type::Grass], 100, AbilityId::Pressure)
                .with_item("Sitrus Berry")
                .on_side(1),
        )
        .build()
        .unwrap()
}

#[test]
fn pickup_collects_loot_after_victory() {
    let mut battle = make_pickup_battle();
    let zigzagoon = MonHandle::new(0);

    assert_matches::assert_matches!(
        actions::lose_item(&mut battle, MonHandle::new(1)),
        Ok(Some(_))
    );
    assert_matches::assert_matches!(actions::end_battle(&mut battle, Some(0)), Ok(()));
    assert_eq!(battle.mon(zigzagoon).unwrap().item, Some(Id::from("sitrusberry")));
    assert!(battle.field.loot.is_empty());
    assert_queue_eq(
        &mut battle,
        &[
            Phase::ShowAbility {
                mon: zigzagoon,
                ability: AbilityId::Pickup,
                passive: false,
            },
            Phase::Message("Zigzagoon picked up sitrusberry!".to_owned()),
        ],
    );
}

#[test]
fn pickup_does_nothing_after_loss() {
    let mut battle = make_pickup_battle();
    assert_matches::assert_matches!(
        actions::lose_item(&mut battle, MonHandle::new(1)),
        Ok(Some(_))
    );
    assert_matches::assert_matches!(actions::end_battle(&mut battle, Some(1)), Ok(()));
    assert_eq!(battle.mon(MonHandle::new(0)).unwrap().item, None);
    assert_eq!(battle.field.loot, vec![Id::from("sitrusberry")]);
    assert!(battle.queue().is_empty());
}
