use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, io};

/// Maximum number of `char`s kept in a status text.
pub const CUSTOM_STATUS_TEXT_MAX_RUNES: usize = 100;

/// Emoji name used when the status text carries no recognizable emoji.
pub const DEFAULT_CUSTOM_STATUS_EMOJI: &str = "speech_balloon";

// `time.Time{}` as written by older encoders; read back as "no expiry".
const LEGACY_ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// How long a custom status stays set before it is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusDuration {
    /// The status never clears on its own.
    DontClear,
    /// Clears after thirty minutes.
    ThirtyMinutes,
    /// Clears after one hour.
    OneHour,
    /// Clears after four hours.
    FourHours,
    /// Clears at the end of the day.
    Today,
    /// Clears at the end of the week.
    ThisWeek,
    /// Clears at an explicitly chosen date and time.
    DateAndTime,
    /// A tag outside the known set, kept verbatim so it survives a round trip.
    Unrecognized(UnrecognizedDuration),
}

/// A non-empty duration tag outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnrecognizedDuration(String);

impl UnrecognizedDuration {
    /// Returns the tag as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StatusDuration {
    /// Every recognized duration, in display order.
    pub const ALL: [StatusDuration; 7] = [
        StatusDuration::DontClear,
        StatusDuration::ThirtyMinutes,
        StatusDuration::OneHour,
        StatusDuration::FourHours,
        StatusDuration::Today,
        StatusDuration::ThisWeek,
        StatusDuration::DateAndTime,
    ];

    /// Reads a wire tag. The empty tag means "no duration" and yields `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.is_empty() {
            return None;
        }
        let known = StatusDuration::ALL.iter().find(|d| d.as_str() == tag).cloned();
        Some(known.unwrap_or_else(|| {
            StatusDuration::Unrecognized(UnrecognizedDuration(tag.to_owned()))
        }))
    }

    /// Returns the wire tag of this duration.
    pub fn as_str(&self) -> &str {
        match self {
            StatusDuration::DontClear => "dont_clear",
            StatusDuration::ThirtyMinutes => "thirty_minutes",
            StatusDuration::OneHour => "one_hour",
            StatusDuration::FourHours => "four_hours",
            StatusDuration::Today => "today",
            StatusDuration::ThisWeek => "this_week",
            StatusDuration::DateAndTime => "date_and_time",
            StatusDuration::Unrecognized(tag) => tag.as_str(),
        }
    }

    /// Returns whether this duration belongs to the recognized set.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, StatusDuration::Unrecognized(_))
    }
}

impl TryFrom<String> for StatusDuration {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self> {
        StatusDuration::from_tag(&tag).ok_or(Error::EmptyDurationTag)
    }
}

impl From<StatusDuration> for String {
    fn from(d: StatusDuration) -> Self {
        match d {
            StatusDuration::Unrecognized(UnrecognizedDuration(tag)) => tag,
            d => d.as_str().to_owned(),
        }
    }
}

impl fmt::Display for StatusDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured custom status: an emoji name, a message and optional expiry.
///
/// Two statuses are equal only when every field is equal, which is also
/// the identity used by [`RecentStatuses`](crate::RecentStatuses) for
/// containment and removal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomStatus {
    /// Emoji name without the surrounding colons, e.g. `cactus`.
    #[serde(default)]
    pub emoji: String,
    /// Status message.
    #[serde(default)]
    pub text: String,
    /// When the status clears, if chosen.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_tag_as_none"
    )]
    pub duration: Option<StatusDuration>,
    /// Instant the status expires at, if any.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_expiry",
        deserialize_with = "legacy_zero_time_as_none"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

fn empty_tag_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<StatusDuration>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.as_deref().and_then(StatusDuration::from_tag))
}

fn serialize_expiry<S>(
    expires_at: &Option<DateTime<Utc>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match expires_at {
        Some(t) => {
            let mut raw = t.to_rfc3339_opts(SecondsFormat::AutoSi, true);
            // spelled out so it is not mistaken for the legacy zero value
            if raw == LEGACY_ZERO_TIME {
                raw = t.to_rfc3339_opts(SecondsFormat::Nanos, true);
            }
            serializer.serialize_str(&raw)
        }
        None => serializer.serialize_none(),
    }
}

fn legacy_zero_time_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if raw != LEGACY_ZERO_TIME => {
            raw.parse::<DateTime<Utc>>().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Truncates `s` to at most `max` `char`s, always at a `char` boundary.
pub(crate) fn truncate_runes(s: &mut String, max: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
}

impl CustomStatus {
    /// Creates a status without duration or expiry.
    pub fn new(emoji: impl Into<String>, text: impl Into<String>) -> Self {
        CustomStatus {
            emoji: emoji.into(),
            text: text.into(),
            duration: None,
            expires_at: None,
        }
    }

    /// Returns whether both the emoji and the text are empty.
    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty() && self.text.is_empty()
    }

    /// Cuts the text down to [`CUSTOM_STATUS_TEXT_MAX_RUNES`] `char`s.
    pub fn trim_message(&mut self) {
        self.trim_message_to(CUSTOM_STATUS_TEXT_MAX_RUNES);
    }

    /// Cuts the text down to `max_runes` `char`s.
    pub fn trim_message_to(&mut self, max_runes: usize) {
        truncate_runes(&mut self.text, max_runes);
    }

    /// Fills in [`DEFAULT_CUSTOM_STATUS_EMOJI`] if no emoji is set.
    pub fn set_default_emoji(&mut self) {
        if self.emoji.is_empty() {
            self.emoji = DEFAULT_CUSTOM_STATUS_EMOJI.to_owned();
        }
    }

    /// Returns the emoji name wrapped in colons, e.g. `:cactus:`.
    pub fn emoji_with_colons(&self) -> String {
        format!(":{}:", self.emoji)
    }

    /// Returns whether the duration is set and recognized.
    pub fn is_duration_valid(&self) -> bool {
        self.duration
            .as_ref()
            .is_some_and(StatusDuration::is_recognized)
    }

    /// Returns whether the expiry is consistent with the duration, as of now.
    pub fn is_expiration_time_valid(&self) -> bool {
        self.is_expiration_time_valid_at(Utc::now())
    }

    /// Returns whether the expiry is consistent with the duration as of `now`.
    ///
    /// A status that never clears needs no expiry; any other status needs an
    /// expiry that has not passed yet.
    pub fn is_expiration_time_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.duration == Some(StatusDuration::DontClear) {
            return true;
        }
        matches!(self.expires_at, Some(expires_at) if expires_at >= now)
    }

    /// Encodes this status as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a status from JSON.
    pub fn try_from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decodes a status from JSON, returning `None` if the input is malformed.
    pub fn from_json(s: &str) -> Option<Self> {
        Self::try_from_json(s)
            .map_err(|e| tracing::debug!("Discarding malformed custom status: {e}"))
            .ok()
    }

    /// Decodes a status from a JSON reader, returning `None` if the input is malformed.
    pub fn from_reader<R: io::Read>(reader: R) -> Option<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| tracing::debug!("Discarding malformed custom status: {e}"))
            .ok()
    }
}
