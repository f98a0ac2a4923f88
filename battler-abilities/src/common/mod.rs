mod hash;
mod id;
mod test_util;

pub use hash::{
    FastHashMap,
    FastHashSet,
};
pub use id::Id;
#[cfg(test)]
pub use test_util::{
    round_trip,
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
