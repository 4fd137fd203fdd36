use crate::types::{EventRecord, RegistrationSet};

/// Seats still free once this browser's own registration is counted.
///
/// Never negative, whatever the catalog says about capacity and registrations.
pub fn seats_left(event: &EventRecord, registrations: &RegistrationSet) -> i64 {
    let own = i64::from(registrations.contains_event(event));
    let taken = event.registered.saturating_add(own);

    event.capacity.saturating_sub(taken).max(0)
}

pub fn is_full(event: &EventRecord, registrations: &RegistrationSet) -> bool {
    seats_left(event, registrations) <= 0
}
