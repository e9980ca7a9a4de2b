use std::sync::Arc;

use events_models::{Event, Interest};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    catalog::EventCatalog,
    clock::{Clock, SystemClock},
    interactions::InteractionLog,
};

/// State of one interactive session: the event catalog and the interaction
/// log. Built once at startup and handed to every request handler.
#[derive(Default)]
pub struct Session {
    pub catalog: EventCatalog,
    pub interactions: InteractionLog,
}

impl Session {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: EventCatalog::with_clock(clock),
            interactions: InteractionLog::new(),
        }
    }

    /// Events recommended for `interest`: the catalog events tagged with it,
    /// in insertion order.
    pub fn recommend(&self, interest: Interest) -> Vec<&Event> {
        self.catalog
            .all()
            .iter()
            .filter(|event| event.interest == interest)
            .collect()
    }
}

/// Cloneable handle to a [`Session`] shared by the request handlers.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(Session::with_clock(clock))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().await
    }
}

impl Default for SessionHandle {
    fn default() -> Self { Self::with_clock(Arc::new(SystemClock)) }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use events_models::NewEvent;

    use super::*;
    use crate::clock::FixedClock;

    fn handle() -> SessionHandle {
        SessionHandle::with_clock(Arc::new(FixedClock(
            NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        )))
    }

    fn submission(name: &str, interest: &str) -> NewEvent {
        NewEvent::builder()
            .name(name)
            .date(NaiveDate::from_ymd_opt(2030, 6, 2).unwrap())
            .time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .interest(interest)
            .build()
    }

    #[tokio::test]
    async fn test_recommend_matches_interest_in_order() {
        let session = handle();
        {
            let mut guard = session.write().await;
            guard.catalog.add(submission("Morning Flow", "Yoga")).unwrap();
            guard.catalog.add(submission("Dumplings", "Cooking")).unwrap();
            guard.catalog.add(submission("Evening Flow", "Yoga")).unwrap();
        }

        let guard = session.read().await;
        let names: Vec<&str> = guard
            .recommend(Interest::Yoga)
            .into_iter()
            .map(|event| event.name.as_str())
            .collect();

        assert_eq!(names, vec!["Morning Flow", "Evening Flow"]);
        assert!(guard.recommend(Interest::Music).is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let session = handle();
        let other = session.clone();

        session
            .write()
            .await
            .catalog
            .add(submission("Jam Session", "Music"))
            .unwrap();

        assert_eq!(other.read().await.catalog.len(), 1);
    }
}
