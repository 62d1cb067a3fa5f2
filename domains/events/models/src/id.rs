/// Parses a submitted event identifier.
///
/// Only strictly positive integers are identifiers; anything else (empty,
/// non-numeric, zero, negative) yields `None`.
pub fn parse_event_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
