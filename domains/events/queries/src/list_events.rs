/// All events, earliest `event_date` first; same-day events newest id first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEventsQuery;

impl ListEventsQuery {
    pub const ORDER_BY: &'static str = "ORDER BY event_date ASC, id DESC";
}
