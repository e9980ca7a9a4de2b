use std::{borrow::Cow, fmt, str::FromStr};

use events_errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr, Schema,
        schema::{ObjectBuilder, Type},
    },
};

/// The fixed set of community interests an event can be tagged with.
///
/// Variants are declared in display order. [`Interest::name`] is the only
/// textual form: it is what gets displayed, serialized and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interest {
    BookClub,
    Yoga,
    StudyGroup,
    Music,
    Cooking,
    Fitness,
    MentalHealth,
}

impl Interest {
    pub const ALL: [Interest; 7] = [
        Interest::BookClub,
        Interest::Yoga,
        Interest::StudyGroup,
        Interest::Music,
        Interest::Cooking,
        Interest::Fitness,
        Interest::MentalHealth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Interest::BookClub => "Book Club",
            Interest::Yoga => "Yoga",
            Interest::StudyGroup => "Study Group",
            Interest::Music => "Music",
            Interest::Cooking => "Cooking",
            Interest::Fitness => "Fitness",
            Interest::MentalHealth => "Mental Health",
        }
    }

    /// Parses a comma-separated list of interest names. Whitespace around
    /// the commas is list syntax and is dropped, as are blank entries. Each
    /// entry must then be an exact display name.
    pub fn parse_list(raw: &str) -> Result<Vec<Interest>, ValidationError> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<Interest>)
            .collect()
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.name() == s)
            .ok_or_else(|| ValidationError::UnknownInterest(s.to_string()))
    }
}

impl Serialize for Interest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Interest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl PartialSchema for Interest {
    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .enum_values(Some(Interest::ALL.map(Interest::name)))
                .build(),
        ))
    }
}

impl ToSchema for Interest {
    fn name() -> Cow<'static, str> { Cow::Borrowed("Interest") }
}
