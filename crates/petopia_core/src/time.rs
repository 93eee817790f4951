//! crates/petopia_core/src/time.rs
//!
//! Clock-time utilities: converting `HH:MM` strings to comparable
//! minutes-of-day, and half-open interval overlap.

/// The input was not a zero-padded 24-hour `HH:MM` clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid HH:MM time")]
pub struct TimeError(pub String);

/// Parses an `HH:MM` clock time into minutes since midnight.
pub fn to_minutes(time: &str) -> Result<u16, TimeError> {
    let err = || TimeError(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(err)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(err());
    }
    let hours: u16 = hours.parse().map_err(|_| err())?;
    let minutes: u16 = minutes.parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }
    Ok(hours * 60 + minutes)
}

/// Half-open interval intersection over minutes-of-day: intervals that merely
/// touch at an endpoint do not overlap.
pub fn overlaps(a_from: u16, a_to: u16, b_from: u16, b_to: u16) -> bool {
    a_from < b_to && a_to > b_from
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_minutes_parses_valid_times() {
        assert_eq!(to_minutes("00:00"), Ok(0));
        assert_eq!(to_minutes("09:30"), Ok(570));
        assert_eq!(to_minutes("23:59"), Ok(1439));
    }

    #[test]
    fn to_minutes_rejects_malformed_input() {
        for bad in ["", "9:00", "09:5", "24:00", "12:60", "ab:cd", "12-30", "12:30:00"] {
            assert!(to_minutes(bad).is_err(), "expected failure for {bad:?}");
        }
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let nine = to_minutes("09:00").unwrap();
        let ten = to_minutes("10:00").unwrap();
        let eleven = to_minutes("11:00").unwrap();
        assert!(!overlaps(nine, ten, ten, eleven));
        assert!(!overlaps(ten, eleven, nine, ten));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = (to_minutes("09:00").unwrap(), to_minutes("10:00").unwrap());
        let b = (to_minutes("09:30").unwrap(), to_minutes("10:30").unwrap());
        assert!(overlaps(a.0, a.1, b.0, b.1));
        assert!(overlaps(b.0, b.1, a.0, a.1));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = (to_minutes("09:00").unwrap(), to_minutes("12:00").unwrap());
        let inner = (to_minutes("10:00").unwrap(), to_minutes("11:00").unwrap());
        assert!(overlaps(outer.0, outer.1, inner.0, inner.1));
        assert!(overlaps(inner.0, inner.1, outer.0, outer.1));
    }
}
