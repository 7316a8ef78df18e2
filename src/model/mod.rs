//! iCalendar component model.
//!
//! Components are kept generic: a name, an ordered list of properties and
//! nested children. Only the handful of names the transforms care about are
//! given constants here.

mod component;
mod property;
mod uid;

pub use component::Component;
pub use property::{Parameter, Property};
pub use uid::{Uid, UidError};

/// Name of the unique-identifier property.
pub const UID: &str = "UID";
/// Name of the summary property.
pub const SUMMARY: &str = "SUMMARY";
/// Opens a component on the wire.
pub const BEGIN: &str = "BEGIN";
/// Closes a component on the wire.
pub const END: &str = "END";
/// Root calendar object.
pub const VCALENDAR: &str = "VCALENDAR";

/// Component kinds that are required to carry a `UID` (RFC 5545 §3.6).
pub const UID_BEARING_KINDS: [&str; 4] = ["VEVENT", "VTODO", "VJOURNAL", "VFREEBUSY"];

/// Returns `true` if components of this kind are expected to carry a `UID`.
#[must_use]
pub fn carries_uid(kind: &str) -> bool {
    UID_BEARING_KINDS.iter().any(|k| k.eq_ignore_ascii_case(kind))
}

#[cfg(test)]
mod tests {
    use super::carries_uid;

    #[test]
    fn uid_bearing_kinds() {
        assert!(carries_uid("VEVENT"));
        assert!(carries_uid("vtodo"));
        assert!(carries_uid("VJOURNAL"));
        assert!(carries_uid("VFREEBUSY"));
        assert!(!carries_uid("VTIMEZONE"));
        assert!(!carries_uid("VALARM"));
        assert!(!carries_uid("VCALENDAR"));
    }
}
