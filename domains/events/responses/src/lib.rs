use events_models::{DATE_FORMAT, Event, Interaction, Interest, TIME_FORMAT};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const SELECT_INTEREST_NOTICE: &str =
    "Please select an interest to view available events.";
pub const NO_MATCHING_EVENTS_NOTICE: &str =
    "No events found for the selected interests.";
pub const NO_EVENTS_NOTICE: &str = "No events created yet.";
pub const EVENT_CREATED_MESSAGE: &str = "Event created successfully!";

/// Read-only event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "2030-06-01")]
    pub date: String,
    #[schema(example = "18:00")]
    pub time: String,
    pub interest: Interest,
    pub description: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date.format(DATE_FORMAT).to_string(),
            time: event.time.format(TIME_FORMAT).to_string(),
            interest: event.interest,
            description: event.description.clone(),
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self { Self::from(&event) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionResponse {
    pub user: String,
    pub event: String,
    pub interest: Interest,
}

impl From<&Interaction> for InteractionResponse {
    fn from(interaction: &Interaction) -> Self {
        Self {
            user: interaction.user.clone(),
            event: interaction.event.clone(),
            interest: interaction.interest,
        }
    }
}

/// A list of event cards, with the message shown in place of the list when
/// there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventsSection {
    pub events: Vec<EventResponse>,
    pub notice: Option<String>,
}

/// Render model for the events page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventsPage {
    pub interests: Vec<Interest>,
    pub selected: Vec<Interest>,
    pub available: EventsSection,
    pub all_events: EventsSection,
}

impl EventsPage {
    pub fn render<'a>(
        selected: Vec<Interest>, matching: impl IntoIterator<Item = &'a Event>,
        all: impl IntoIterator<Item = &'a Event>,
    ) -> Self {
        let matching: Vec<EventResponse> =
            matching.into_iter().map(Into::into).collect();
        let all: Vec<EventResponse> = all.into_iter().map(Into::into).collect();

        let available_notice = if selected.is_empty() {
            Some(SELECT_INTEREST_NOTICE.to_string())
        }
        else if matching.is_empty() {
            Some(NO_MATCHING_EVENTS_NOTICE.to_string())
        }
        else {
            None
        };
        let all_notice = all.is_empty().then(|| NO_EVENTS_NOTICE.to_string());

        Self {
            interests: Interest::ALL.to_vec(),
            selected,
            available: EventsSection {
                events: matching,
                notice: available_notice,
            },
            all_events: EventsSection {
                events: all,
                notice: all_notice,
            },
        }
    }
}
