#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Custom status text normalization and recent status history.
//!
//! A custom status is a short message such as "🏄 Surfing", optionally led by
//! an emoji. [`parse`] splits raw text into a [`CustomStatus`]: the emoji name
//! and the remaining text. [`RecentStatuses`] keeps the last few statuses a
//! user picked.
//!
//! # Emoji recognition
//!
//! A status may start with a `:shortcode:` token, in which case the shortcode
//! becomes the emoji name and whatever follows becomes the text. Otherwise the
//! first whitespace-separated word is treated as a candidate emoji: its
//! `char`s are rendered as a *unicode key* (lowercase hex code points joined
//! by `-`, e.g. `1f44d-1f3ff`) and looked up through an [`EmojiNameLookup`].
//! When that fails and the key carries a skin-tone modifier (U+1F3FB to
//! U+1F3FF), the lookup is retried with the modifier dropped and then with
//! the modifier replaced by the variation selector U+FE0F.
//!
//! An emoji glued to the text that follows it, e.g. "👙Swimming", is not
//! recognized. Text without a recognized emoji gets the default emoji
//! `speech_balloon`.
//!
//! The status text keeps at most 100 `char`s; longer text is cut at a `char`
//! boundary.
//!
//! # Recent statuses
//!
//! [`RecentStatuses`] is ordered most recent first, holds at most five
//! entries and never two entries with the same text. Adding a status whose
//! text is already present moves it to the front. Containment and removal
//! compare every field, including duration and expiry.
//!
//! # Encoding
//!
//! Both types encode to JSON. The `from_json` decoders never fail loudly:
//! malformed input yields `None`, and the discarded error is logged through
//! `tracing` at debug level. Use `try_from_json` to get the [`Error`].

pub(crate) mod config;

pub(crate) mod error;

pub(crate) mod status_ty;

pub(crate) mod recent_status_ty;

pub(crate) mod emoji_lookup;

pub(crate) mod unicode_key;

pub(crate) mod status_parser;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;

pub use error::{Error, Result};

pub use status_ty::{
    CustomStatus, StatusDuration, UnrecognizedDuration, CUSTOM_STATUS_TEXT_MAX_RUNES,
    DEFAULT_CUSTOM_STATUS_EMOJI,
};

pub use recent_status_ty::{RecentStatuses, MAX_RECENT_CUSTOM_STATUSES};

pub use emoji_lookup::{
    EmojiNameLookup, EmojiTable, GemojiLookup, ShortcodePattern, ShortcodeValidator,
};

pub use unicode_key::{
    code_point_to_hex, unicode_key, unicode_key_to_string, UNICODE_KEY_SEPARATOR,
};

pub use status_parser::{parse, StatusCommand, StatusParser, CLEAR_COMMAND};
