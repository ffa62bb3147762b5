use crate::config::Config;
use crate::emoji_lookup::{EmojiNameLookup, GemojiLookup, ShortcodePattern, ShortcodeValidator};
use crate::status_ty::{CustomStatus, DEFAULT_CUSTOM_STATUS_EMOJI};
use crate::unicode_key::{skin_tone_alternatives, unicode_key};
use std::sync::LazyLock;

/// Command input that clears the custom status instead of setting one.
pub const CLEAR_COMMAND: &str = "clear";

static DEFAULT_PARSER: LazyLock<StatusParser> = LazyLock::new(StatusParser::default);

/// Parse `raw` with the bundled gemoji names and the default limits.
///
/// ```
/// let status = custom_status::parse(":cactus: Hurt");
/// assert_eq!("cactus", status.emoji);
/// assert_eq!("Hurt", status.text);
///
/// let status = custom_status::parse("Hey");
/// assert_eq!("speech_balloon", status.emoji);
/// assert_eq!("Hey", status.text);
/// ```
pub fn parse(raw: &str) -> CustomStatus {
    DEFAULT_PARSER.parse(raw)
}

/// What a custom status command asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusCommand {
    /// Clear the current status: the input was exactly `clear`.
    Clear,
    /// Set the status parsed from the input.
    Set(CustomStatus),
}

impl StatusCommand {
    /// Classify `message` using the default parser.
    pub fn parse(message: &str) -> Self {
        DEFAULT_PARSER.parse_command(message)
    }
}

/// Turns free text into a [`CustomStatus`].
///
/// A status may lead with an emoji, spelled either as a `:shortcode:` or as
/// the literal emoji followed by whitespace. Whatever follows becomes the
/// status text. Text without a recognizable emoji gets the configured
/// default emoji. Parsing never fails.
#[derive(Debug)]
pub struct StatusParser<L = GemojiLookup, V = ShortcodePattern> {
    lookup: L,
    validator: V,
    config: Config,
}

impl Default for StatusParser {
    fn default() -> Self {
        StatusParser::new(GemojiLookup, ShortcodePattern)
    }
}

impl<L: EmojiNameLookup, V: ShortcodeValidator> StatusParser<L, V> {
    /// Creates a parser with the default [`Config`].
    pub fn new(lookup: L, validator: V) -> Self {
        StatusParser {
            lookup,
            validator,
            config: Config::default(),
        }
    }

    /// Replaces the limits and defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the limits and defaults in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `raw` into a status.
    pub fn parse(&self, raw: &str) -> CustomStatus {
        let message = raw.trim();
        let default_emoji = match self.config.default_emoji.as_str() {
            "" => DEFAULT_CUSTOM_STATUS_EMOJI,
            name => name,
        };
        let mut status = CustomStatus::new(default_emoji, message);

        if let Some((emoji, rest)) = self.leading_shortcode(message) {
            status.emoji = emoji.to_owned();
            status.text = rest.trim().to_owned();
        } else if let Some((emoji, text)) = self.leading_unicode_emoji(message) {
            status.emoji = emoji;
            status.text = text;
        }

        status.trim_message_to(self.config.text_max_runes);
        status
    }

    /// Classify `message` as a clear request or a status to set.
    pub fn parse_command(&self, message: &str) -> StatusCommand {
        if message.trim() == CLEAR_COMMAND {
            StatusCommand::Clear
        } else {
            StatusCommand::Set(self.parse(message))
        }
    }

    fn leading_shortcode<'a>(&self, message: &'a str) -> Option<(&'a str, &'a str)> {
        let span = self.validator.leading_shortcode(message)?;
        if span.start != 0 {
            return None;
        }
        let name = message.get(span.start + 1..span.end.checked_sub(1)?)?;
        let rest = message.get(span.end..)?;
        if name.is_empty() {
            return None;
        }
        Some((name, rest))
    }

    fn leading_unicode_emoji(&self, message: &str) -> Option<(String, String)> {
        let mut words = message.split_whitespace();
        let candidate = words.next()?;
        let emoji = self.resolve_unicode_key(&unicode_key(candidate))?;
        let text = words.collect::<Vec<_>>().join(" ");
        Some((emoji, text))
    }

    fn resolve_unicode_key(&self, key: &str) -> Option<String> {
        if let Some(name) = self.lookup_name(key) {
            tracing::trace!(unicode = %key, emoji = %name, "Resolved leading emoji");
            return Some(name);
        }
        let [without_tone, with_selector] = skin_tone_alternatives(key)?;
        let name = self
            .lookup_name(&without_tone)
            .or_else(|| self.lookup_name(&with_selector));
        match &name {
            Some(name) => tracing::trace!(
                unicode = %key,
                emoji = %name,
                "Resolved leading emoji without skin tone"
            ),
            None => tracing::trace!(unicode = %key, "Leading word is not a known emoji"),
        }
        name
    }

    fn lookup_name(&self, key: &str) -> Option<String> {
        self.lookup
            .emoji_name_from_unicode(key)
            .filter(|name| !name.is_empty())
    }
}
