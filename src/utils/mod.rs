//! Some utility functions

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::CalendarEntry;

pub mod comparison;
pub use comparison::{compare_events_alpha, compare_events_by_start};

/// A debug utility that pretty-prints a list of events, chronologically
pub fn print_event_list<'a, E, I>(events: I)
where
    E: CalendarEntry + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut events: Vec<&E> = events.into_iter().collect();
    events.sort_by(|l, r| compare_events_by_start(*l, *r));
    for event in events {
        print_event(event);
    }
}

pub fn print_event<E: CalendarEntry + ?Sized>(event: &E) {
    let blocking = if event.blocks_time() { "#" } else { " " };
    println!("    {} {}\t{}\t{}", blocking, event.start_date(), event.description(), event.id());
}

/// Whether two maps (e.g. events indexed by their IDs) have the same set of keys.
///
/// Mismatching event IDs are logged
pub fn keys_are_the_same<T, U, V>(left: &HashMap<T, U>, right: &HashMap<T, V>) -> bool
where
    T: Hash + Eq + std::fmt::Display,
{
    let only_left: Vec<&T> = left.keys().filter(|k| right.contains_key(*k) == false).collect();
    let only_right: Vec<&T> = right.keys().filter(|k| left.contains_key(*k) == false).collect();

    for id in &only_left {
        log::debug!("Event {} is missing from the right-hand calendar", id);
    }
    for id in &only_right {
        log::debug!("Event {} is missing from the left-hand calendar", id);
    }
    only_left.is_empty() && only_right.is_empty()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_the_same() {
        let left: HashMap<String, u32> = vec![("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
        let same: HashMap<String, &str> = vec![("b".to_string(), "x"), ("a".to_string(), "y")].into_iter().collect();
        let other: HashMap<String, &str> = vec![("a".to_string(), "x"), ("c".to_string(), "y")].into_iter().collect();

        assert!(keys_are_the_same(&left, &same));
        assert!(keys_are_the_same(&left, &other) == false);
        assert!(keys_are_the_same(&left, &HashMap::<String, u8>::new()) == false);

        let bigger: HashMap<String, ()> = vec![("a".to_string(), ()), ("b".to_string(), ()), ("c".to_string(), ())].into_iter().collect();
        assert!(keys_are_the_same(&left, &bigger) == false);
        assert!(keys_are_the_same(&bigger, &left) == false);
    }
}
