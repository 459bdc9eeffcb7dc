use crate::types::VId;
use itertools::Itertools;
use std::any::Any;

/// Merges two ascending id slices into one ascending list without duplicates.
pub fn merge_dedup(a: &[VId], b: &[VId]) -> Vec<VId> {
    a.iter().merge(b.iter()).dedup().copied().collect()
}

/// Sorts `ids` and removes duplicates in place.
pub fn sort_dedup(ids: &mut Vec<VId>) {
    ids.sort_unstable();
    ids.dedup();
}

/// Extracts the message carried by a panic payload.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        String::from(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("compute panicked")
    }
}
