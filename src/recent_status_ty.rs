use crate::config::Config;
use crate::error::Result;
use crate::status_ty::CustomStatus;
use serde::{Deserialize, Serialize};
use std::{io, ops, slice};

/// Maximum number of statuses kept by [`RecentStatuses::add`].
pub const MAX_RECENT_CUSTOM_STATUSES: usize = 5;

/// Recently used custom statuses, most recent first.
///
/// No two entries share the same text, and the list never grows past its
/// cap. Every operation leaves `self` untouched and returns the updated list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentStatuses(Vec<CustomStatus>);

impl RecentStatuses {
    /// Creates an empty list.
    pub const fn new() -> Self {
        RecentStatuses(Vec::new())
    }

    /// Returns whether an entry equal to `cs` in every field is present.
    ///
    /// An empty status is never contained.
    pub fn contains(&self, cs: &CustomStatus) -> bool {
        !cs.is_empty() && self.0.iter().any(|status| status == cs)
    }

    /// Puts `cs` at the front, replacing any entry with the same text, and
    /// keeps at most [`MAX_RECENT_CUSTOM_STATUSES`] entries.
    pub fn add(&self, cs: &CustomStatus) -> Self {
        self.add_capped(cs, MAX_RECENT_CUSTOM_STATUSES)
    }

    /// Like [`add`](Self::add), keeping at most `cap` entries.
    pub fn add_capped(&self, cs: &CustomStatus, cap: usize) -> Self {
        let mut statuses = Vec::with_capacity(cap.min(self.0.len() + 1));
        statuses.push(cs.clone());
        statuses.extend(
            self.0
                .iter()
                .filter(|status| status.text != cs.text)
                .cloned(),
        );
        statuses.truncate(cap);
        RecentStatuses(statuses)
    }

    /// Like [`add`](Self::add), keeping at most [`Config::max_recent`] entries.
    pub fn add_with(&self, cs: &CustomStatus, config: &Config) -> Self {
        self.add_capped(cs, config.max_recent)
    }

    /// Drops every entry equal to `cs` in every field.
    ///
    /// Removing an empty status changes nothing.
    pub fn remove(&self, cs: &CustomStatus) -> Self {
        if cs.is_empty() {
            return self.clone();
        }
        RecentStatuses(
            self.0
                .iter()
                .filter(|status| *status != cs)
                .cloned()
                .collect(),
        )
    }

    /// Consumes the list, returning its entries.
    pub fn into_inner(self) -> Vec<CustomStatus> {
        self.0
    }

    /// Encodes the list as a JSON array.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a list from JSON.
    pub fn try_from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decodes a list from JSON, returning `None` if the input is malformed.
    pub fn from_json(s: &str) -> Option<Self> {
        Self::try_from_json(s)
            .map_err(|e| tracing::debug!("Discarding malformed recent custom statuses: {e}"))
            .ok()
    }

    /// Decodes a list from a JSON reader, returning `None` if the input is malformed.
    pub fn from_reader<R: io::Read>(reader: R) -> Option<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| tracing::debug!("Discarding malformed recent custom statuses: {e}"))
            .ok()
    }
}

impl ops::Deref for RecentStatuses {
    type Target = [CustomStatus];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<CustomStatus>> for RecentStatuses {
    fn from(statuses: Vec<CustomStatus>) -> Self {
        RecentStatuses(statuses)
    }
}

impl FromIterator<CustomStatus> for RecentStatuses {
    fn from_iter<T: IntoIterator<Item = CustomStatus>>(iter: T) -> Self {
        RecentStatuses(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecentStatuses {
    type Item = &'a CustomStatus;
    type IntoIter = slice::Iter<'a, CustomStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
