mod ability;
mod ability_id;
mod attribute;
pub mod attrs;
mod catalog;
mod condition;
mod context;
mod default_catalog;
pub mod dispatch;
pub mod hooks;

pub use ability::{
    Ability,
    AbilityBuilder,
    AbilityFlag,
};
pub use ability_id::AbilityId;
pub use attribute::{
    AbAttr,
    AbAttrHook,
    AbilityAttribute,
    AbilityHook,
    HookAttr,
};
pub use catalog::{
    AbilityCatalog,
    AbilityCatalogBuilder,
};
pub use condition::Condition;
pub use context::{
    DecisionContext,
    EffectContext,
};
pub use dispatch::DispatchOptions;
