use events_models::Interest;
use events_queries::{
    ListAllEventsQueryHandler, ListEventsQuery, ListEventsQueryHandler,
};
use test_utils::*;

fn names(events: &[events_responses::EventResponse]) -> Vec<&str> {
    events.iter().map(|event| event.name.as_str()).collect()
}

#[tokio::test]
async fn test_empty_selection_returns_nothing() {
    let session = test_session();
    seed_events(&session, &[("Morning Flow", "Yoga"), ("Jam", "Music")])
        .await
        .unwrap();
    let handler = ListEventsQueryHandler::new(session);

    let result = handler.execute(ListEventsQuery::default()).await;

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_empty_catalog_returns_nothing() {
    let handler = ListEventsQueryHandler::new(test_session());

    let result = handler.execute(ListEventsQuery::new(Interest::ALL)).await;

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_book_club_scenario() {
    let session = test_session();
    let id = seed_event(&session, "Book Night", "Book Club").await.unwrap();
    let handler = ListEventsQueryHandler::new(session);

    let book_club = handler
        .execute(ListEventsQuery::new([Interest::BookClub]))
        .await;
    assert_eq!(book_club.len(), 1);
    assert_eq!(book_club[0].id, id);

    let yoga = handler.execute(ListEventsQuery::new([Interest::Yoga])).await;
    assert!(yoga.is_empty());
}

#[tokio::test]
async fn test_multiple_interests_in_insertion_order() {
    let session = test_session();
    seed_event(&session, "Earlier", "Study Group").await.unwrap();
    seed_events(&session, &[("Morning Flow", "Yoga"), ("Dumplings", "Cooking")])
        .await
        .unwrap();
    let handler = ListEventsQueryHandler::new(session.clone());
    let all_handler = ListAllEventsQueryHandler::new(session);

    let result = handler
        .execute(ListEventsQuery::new([Interest::Cooking, Interest::Yoga]))
        .await;
    assert_eq!(names(&result), vec!["Morning Flow", "Dumplings"]);

    let all = all_handler.execute().await;
    assert_eq!(names(&all), vec!["Earlier", "Morning Flow", "Dumplings"]);
}

#[tokio::test]
async fn test_query_is_ordered_subsequence_of_all() {
    let session = test_session();
    seed_events(
        &session,
        &[
            ("a", "Fitness"),
            ("b", "Music"),
            ("c", "Mental Health"),
            ("d", "Fitness"),
            ("e", "Music"),
        ],
    )
    .await
    .unwrap();
    let handler = ListEventsQueryHandler::new(session.clone());
    let all = ListAllEventsQueryHandler::new(session).execute().await;

    let selection = [Interest::Fitness, Interest::Music];
    let result = handler.execute(ListEventsQuery::new(selection)).await;

    let expected: Vec<_> = all
        .into_iter()
        .filter(|event| selection.contains(&event.interest))
        .collect();
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_query_does_not_mutate_catalog() {
    let session = test_session();
    seed_events(&session, &[("a", "Yoga"), ("b", "Cooking")])
        .await
        .unwrap();
    let handler = ListEventsQueryHandler::new(session.clone());

    handler.execute(ListEventsQuery::new([Interest::Yoga])).await;
    handler.execute(ListEventsQuery::default()).await;

    assert_eq!(session.read().await.catalog.len(), 2);
}
