use std::{collections::HashSet, sync::Arc};

use events_errors::ValidationError;
use events_models::{Event, EventId, Interest, NewEvent};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};

/// Append-only, insertion-ordered collection of events.
///
/// Events are never mutated or removed once added. Queries borrow the
/// collection and never change it.
pub struct EventCatalog {
    events: Vec<Event>,
    clock: Arc<dyn Clock>,
}

impl EventCatalog {
    pub fn new() -> Self { Self::with_clock(Arc::new(SystemClock)) }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: Vec::new(),
            clock,
        }
    }

    /// Validates and appends a new event, returning its id.
    ///
    /// Rejects an unknown interest or a date before the clock's today.
    /// Empty names and descriptions are accepted.
    pub fn add(
        &mut self, new_event: NewEvent,
    ) -> Result<EventId, ValidationError> {
        self.insert(new_event).map(|event| event.id)
    }

    /// Same as [`EventCatalog::add`], returning the stored event.
    #[instrument(skip_all, fields(name = %new_event.name))]
    pub fn insert(
        &mut self, new_event: NewEvent,
    ) -> Result<&Event, ValidationError> {
        let interest: Interest = new_event.interest.parse()?;

        let today = self.clock.today();
        if new_event.date < today {
            return Err(ValidationError::DateInPast {
                date: new_event.date,
                today,
            });
        }

        let id = Uuid::now_v7();
        self.events.push(Event {
            id,
            name: new_event.name,
            date: new_event.date,
            time: new_event.time,
            interest,
            description: new_event.description,
        });
        debug!(%id, total = self.events.len(), "event appended");

        Ok(&self.events[self.events.len() - 1])
    }

    /// Events whose interest is in `interests`, in insertion order.
    /// An empty selection yields nothing.
    pub fn query(&self, interests: &HashSet<Interest>) -> Vec<&Event> {
        if interests.is_empty() {
            return Vec::new();
        }
        self.events
            .iter()
            .filter(|event| interests.contains(&event.interest))
            .collect()
    }

    pub fn all(&self) -> &[Event] { &self.events }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize { self.events.len() }

    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}

impl Default for EventCatalog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, NaiveTime};

    use super::*;
    use crate::clock::FixedClock;

    fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2030, 6, 1).unwrap() }

    fn catalog() -> EventCatalog {
        EventCatalog::with_clock(Arc::new(FixedClock(today())))
    }

    fn submission(name: &str, interest: &str) -> NewEvent {
        NewEvent::builder()
            .name(name)
            .date(today().checked_add_days(Days::new(7)).unwrap())
            .time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
            .interest(interest)
            .description(format!("{name} description"))
            .build()
    }

    fn select(interests: &[Interest]) -> HashSet<Interest> {
        interests.iter().copied().collect()
    }

    #[test]
    fn test_add_appends_last_with_verbatim_fields() {
        let mut catalog = catalog();
        catalog.add(submission("Morning Flow", "Yoga")).unwrap();

        let new_event = submission("Book Night", "Book Club");
        let id = catalog.add(new_event.clone()).unwrap();

        assert_eq!(catalog.len(), 2);
        let last = catalog.all().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, new_event.name);
        assert_eq!(last.date, new_event.date);
        assert_eq!(last.time, new_event.time);
        assert_eq!(last.interest, Interest::BookClub);
        assert_eq!(last.description, new_event.description);
    }

    #[test]
    fn test_add_accepts_today_and_empty_fields() {
        let mut catalog = catalog();
        let new_event = NewEvent::builder()
            .name("")
            .date(today())
            .time(NaiveTime::from_hms_opt(0, 0, 0).unwrap())
            .interest("Music")
            .build();

        assert!(catalog.add(new_event).is_ok());
        assert_eq!(catalog.all()[0].name, "");
        assert_eq!(catalog.all()[0].description, "");
    }

    #[test]
    fn test_add_rejects_past_date_and_leaves_catalog_unchanged() {
        let mut catalog = catalog();
        catalog.add(submission("Existing", "Yoga")).unwrap();

        let mut new_event = submission("Too Late", "Yoga");
        new_event.date = today().pred_opt().unwrap();

        assert_eq!(
            catalog.add(new_event),
            Err(ValidationError::DateInPast {
                date: today().pred_opt().unwrap(),
                today: today(),
            })
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].name, "Existing");
    }

    #[test]
    fn test_add_rejects_unknown_interest() {
        let mut catalog = catalog();

        let result = catalog.add(submission("Chess Club", "Chess"));

        assert_eq!(
            result,
            Err(ValidationError::UnknownInterest("Chess".to_string()))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_requires_exact_interest_name() {
        let mut catalog = catalog();

        for raw in ["yoga", " Yoga", "  yOgA "] {
            assert_eq!(
                catalog.add(submission("Flow", raw)),
                Err(ValidationError::UnknownInterest(raw.to_string()))
            );
        }
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_query_empty_selection_returns_nothing() {
        let mut catalog = catalog();
        catalog.add(submission("Morning Flow", "Yoga")).unwrap();

        assert!(catalog.query(&HashSet::new()).is_empty());
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let mut catalog = catalog();
        catalog.add(submission("Dumplings", "Cooking")).unwrap();
        catalog.add(submission("Jam Session", "Music")).unwrap();
        catalog.add(submission("Morning Flow", "Yoga")).unwrap();
        catalog.add(submission("Pasta", "Cooking")).unwrap();

        let names: Vec<&str> = catalog
            .query(&select(&[Interest::Yoga, Interest::Cooking]))
            .into_iter()
            .map(|event| event.name.as_str())
            .collect();

        assert_eq!(names, vec!["Dumplings", "Morning Flow", "Pasta"]);
    }

    #[test]
    fn test_query_is_subsequence_of_all() {
        let mut catalog = catalog();
        for (name, interest) in [
            ("a", "Fitness"),
            ("b", "Mental Health"),
            ("c", "Fitness"),
            ("d", "Study Group"),
        ] {
            catalog.add(submission(name, interest)).unwrap();
        }

        let selection = select(&[Interest::Fitness, Interest::StudyGroup]);
        let expected: Vec<&Event> = catalog
            .all()
            .iter()
            .filter(|event| selection.contains(&event.interest))
            .collect();

        assert_eq!(catalog.query(&selection), expected);
    }

    #[test]
    fn test_book_club_scenario() {
        let mut catalog = catalog();
        let id = catalog
            .add(
                NewEvent::builder()
                    .name("Book Night")
                    .date(today().checked_add_days(Days::new(30)).unwrap())
                    .time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
                    .interest("Book Club")
                    .description("desc")
                    .build(),
            )
            .unwrap();

        let matches = catalog.query(&select(&[Interest::BookClub]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, id);
        assert!(catalog.query(&select(&[Interest::Yoga])).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let mut catalog = catalog();
        let id = catalog.add(submission("Jam Session", "Music")).unwrap();

        assert_eq!(
            catalog.get(id).map(|e| e.name.as_str()),
            Some("Jam Session")
        );
        assert!(catalog.get(Uuid::now_v7()).is_none());
    }
}
