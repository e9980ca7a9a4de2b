use anyhow::Result;
use chrono::{Days, NaiveDate, NaiveTime};
use events_dao::SessionHandle;
use events_models::{EventId, NewEvent};

use crate::test_today;

/// A date `days` after the test session's today.
pub fn days_from_today(days: u64) -> NaiveDate {
    test_today()
        .checked_add_days(Days::new(days))
        .expect("date within range")
}

/// A date `days` before the test session's today.
pub fn days_before_today(days: u64) -> NaiveDate {
    test_today()
        .checked_sub_days(Days::new(days))
        .expect("date within range")
}

pub fn evening() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).expect("valid time of day")
}

/// A valid submission one week out at 18:00.
pub fn new_test_event(name: &str, interest: &str) -> NewEvent {
    NewEvent::builder()
        .name(name)
        .date(days_from_today(7))
        .time(evening())
        .interest(interest)
        .description(format!("{name} description"))
        .build()
}

/// Adds a valid event straight to the session's catalog.
pub async fn seed_event(
    session: &SessionHandle, name: &str, interest: &str,
) -> Result<EventId> {
    let id = session
        .write()
        .await
        .catalog
        .add(new_test_event(name, interest))?;
    Ok(id)
}

/// Seeds `(name, interest)` pairs in order.
pub async fn seed_events(
    session: &SessionHandle, events: &[(&str, &str)],
) -> Result<Vec<EventId>> {
    let mut ids = Vec::with_capacity(events.len());
    for (name, interest) in events {
        ids.push(seed_event(session, name, interest).await?);
    }
    Ok(ids)
}
