use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    abilities::{
        AbAttr,
        AbilityAttribute,
        AbilityHook,
        AbilityId,
        Condition,
        HookAttr,
    },
    battle::{
        Battle,
        MonHandle,
    },
    common::FastHashSet,
};

/// Flags that describe how an ability interacts with the rest of the battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum AbilityFlag {
    /// The ability can apply while the Mon is fainted.
    #[string = "BypassFaint"]
    BypassFaint,
    /// The ability can be ignored by moves that ignore abilities.
    #[string = "Ignorable"]
    Ignorable,
    /// The ability cannot be suppressed.
    #[string = "Unsuppressable"]
    Unsuppressable,
    /// The ability only implements part of its effect.
    #[string = "Partial"]
    Partial,
    /// The ability has no effect.
    #[string = "Unimplemented"]
    Unimplemented,
    /// The ability has known edge cases that are not handled.
    #[string = "EdgeCase"]
    EdgeCase,
}

/// An ability, which is an ordered collection of attributes that hook into battle events.
///
/// Abilities are immutable once built.
#[derive(Debug, Clone)]
pub struct Ability {
    id: AbilityId,
    name: String,
    description: String,
    attributes: Vec<AbilityAttribute>,
    conditions: Vec<Condition>,
    flags: FastHashSet<AbilityFlag>,
}

impl Ability {
    /// Starts building a new ability.
    pub fn builder(id: AbilityId, name: &str) -> AbilityBuilder {
        AbilityBuilder::new(id, name)
    }

    pub fn id(&self) -> AbilityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// All attributes, in application order.
    pub fn attributes(&self) -> &[AbilityAttribute] {
        &self.attributes
    }

    /// Attributes that implement the given hook, in application order.
    pub fn attributes_for<'a, A>(&'a self) -> impl Iterator<Item = (&'a AbilityAttribute, &'a A)>
    where
        A: HookAttr + 'a,
    {
        self.attributes.iter().filter_map(|attribute| {
            A::select(attribute.attr()).map(|attr| (attribute, attr))
        })
    }

    /// Does any attribute implement the given hook?
    pub fn has_hook(&self, hook: AbilityHook) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.hook() == hook)
    }

    pub fn has_flag(&self, flag: AbilityFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn bypasses_faint(&self) -> bool {
        self.has_flag(AbilityFlag::BypassFaint)
    }

    pub fn ignorable(&self) -> bool {
        self.has_flag(AbilityFlag::Ignorable)
    }

    pub fn unsuppressable(&self) -> bool {
        self.has_flag(AbilityFlag::Unsuppressable)
    }

    /// Checks if all conditions on the ability hold.
    pub fn conditions_met(&self, battle: &Battle, mon: MonHandle) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.evaluate(battle, mon))
    }
}

/// Object for building an [`Ability`].
#[derive(Debug, Clone)]
pub struct AbilityBuilder {
    ability: Ability,
}

impl AbilityBuilder {
    /// Creates a new [`AbilityBuilder`].
    pub fn new(id: AbilityId, name: &str) -> Self {
        Self {
            ability: Ability {
                id,
                name: name.to_owned(),
                description: String::new(),
                attributes: Vec::new(),
                conditions: Vec::new(),
                flags: FastHashSet::default(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ability.description = description.to_owned();
        self
    }

    /// Appends an attribute.
    pub fn attr<A>(self, attr: A) -> Self
    where
        A: Into<AbAttr>,
    {
        self.attribute(AbilityAttribute::new(attr))
    }

    /// Appends an attribute that only applies while the condition holds.
    pub fn conditional_attr<A>(self, condition: Condition, attr: A) -> Self
    where
        A: Into<AbAttr>,
    {
        self.attribute(AbilityAttribute::new(attr).with_condition(condition))
    }

    /// Appends a fully configured attribute.
    pub fn attribute(mut self, attribute: AbilityAttribute) -> Self {
        self.ability.attributes.push(attribute);
        self
    }

    /// Adds a condition that must hold for any attribute of the ability to apply.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.ability.conditions.push(condition);
        self
    }

    fn flag(mut self, flag: AbilityFlag) -> Self {
        self.ability.flags.insert(flag);
        self
    }

    pub fn bypass_faint(self) -> Self {
        self.flag(AbilityFlag::BypassFaint)
    }

    pub fn ignorable(self) -> Self {
        self.flag(AbilityFlag::Ignorable)
    }

    pub fn unsuppressable(self) -> Self {
        self.flag(AbilityFlag::Unsuppressable)
    }

    pub fn partial(self) -> Self {
        self.flag(AbilityFlag::Partial)
    }

    pub fn unimplemented(self) -> Self {
        self.flag(AbilityFlag::Unimplemented)
    }

    pub fn edge_case(self) -> Self {
        self.flag(AbilityFlag::EdgeCase)
    }

    pub fn build(self) -> Ability {
        self.ability
    }
}
