use crate::unicode_key::unicode_key_to_string;
use regex::Regex;
use std::{collections::HashMap, ops::Range, sync::LazyLock};

/// Resolves unicode keys (hyphen-joined hex code points, e.g. `1f44d-1f3ff`)
/// to canonical emoji names.
pub trait EmojiNameLookup: Send + Sync {
    /// Returns the emoji name for `unicode`, or `None` if it names no emoji.
    fn emoji_name_from_unicode(&self, unicode: &str) -> Option<String>;
}

/// Finds a `:shortcode:` token at the very start of a text.
pub trait ShortcodeValidator: Send + Sync {
    /// Returns the byte span of the token, colons included, if `text`
    /// starts with one.
    fn leading_shortcode(&self, text: &str) -> Option<Range<usize>>;
}

impl<T: EmojiNameLookup + ?Sized> EmojiNameLookup for &T {
    fn emoji_name_from_unicode(&self, unicode: &str) -> Option<String> {
        (**self).emoji_name_from_unicode(unicode)
    }
}

impl<T: ShortcodeValidator + ?Sized> ShortcodeValidator for &T {
    fn leading_shortcode(&self, text: &str) -> Option<Range<usize>> {
        (**self).leading_shortcode(text)
    }
}

static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[a-zA-Z0-9_+\-]+:").unwrap());

/// Accepts any syntactically valid shortcode, system or custom.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortcodePattern;

impl ShortcodeValidator for ShortcodePattern {
    fn leading_shortcode(&self, text: &str) -> Option<Range<usize>> {
        SHORTCODE_RE.find(text).map(|m| m.range())
    }
}

/// Looks names up in the gemoji database bundled with the `emojis` crate.
///
/// Names are the crate's primary gemoji shortcodes, which can differ from
/// other emoji databases: U+26F9 U+1F3FE U+200D U+2640 U+FE0F resolves to
/// `bouncing_ball_woman` rather than `basketball_woman`. Use an
/// [`EmojiTable`] when a particular naming must be matched.
#[derive(Clone, Copy, Debug, Default)]
pub struct GemojiLookup;

impl EmojiNameLookup for GemojiLookup {
    fn emoji_name_from_unicode(&self, unicode: &str) -> Option<String> {
        let text = unicode_key_to_string(unicode)?;
        emojis::get(&text)?.shortcode().map(str::to_owned)
    }
}

/// An in-memory table from unicode keys to emoji names.
///
/// Keys are matched case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct EmojiTable {
    names: HashMap<String, String>,
}

impl EmojiTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `unicode` to `name`, returning the name it replaced.
    pub fn insert(&mut self, unicode: impl AsRef<str>, name: impl Into<String>) -> Option<String> {
        self.names
            .insert(unicode.as_ref().to_ascii_lowercase(), name.into())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl EmojiNameLookup for EmojiTable {
    fn emoji_name_from_unicode(&self, unicode: &str) -> Option<String> {
        self.names.get(&unicode.to_ascii_lowercase()).cloned()
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for EmojiTable {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (unicode, name) in iter {
            self.insert(unicode, name);
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for EmojiTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}
