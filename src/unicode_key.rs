use regex::Regex;
use std::sync::LazyLock;

/// Separator between the code points of a unicode key.
pub const UNICODE_KEY_SEPARATOR: char = '-';

const VARIATION_SELECTOR_SEGMENT: &str = "-fe0f";

/// Matches the first skin-tone modifier that follows another code point.
static SKIN_TONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("-(1f3fb|1f3fc|1f3fd|1f3fe|1f3ff)").unwrap());

/// Renders a single code point the way it appears inside a unicode key.
pub fn code_point_to_hex(ch: char) -> String {
    format!("{:04x}", ch as u32)
}

/// Builds the unicode key of `word`: every `char`, in order, as lowercase hex
/// joined by [`UNICODE_KEY_SEPARATOR`].
///
/// ```
/// assert_eq!("1f44d-1f3ff", custom_status::unicode_key("\u{1F44D}\u{1F3FF}"));
/// assert_eq!("0041", custom_status::unicode_key("A"));
/// ```
pub fn unicode_key(word: &str) -> String {
    let mut key = String::with_capacity(word.len() * 3);
    for (idx, ch) in word.chars().enumerate() {
        if idx > 0 {
            key.push(UNICODE_KEY_SEPARATOR);
        }
        key.push_str(&code_point_to_hex(ch));
    }
    key
}

/// Turns a unicode key back into the text it describes.
///
/// Returns `None` when a segment is not hex or not a Unicode scalar value.
pub fn unicode_key_to_string(key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    key.split(UNICODE_KEY_SEPARATOR)
        .map(|segment| {
            let cp = u32::from_str_radix(segment, 16).ok()?;
            char::from_u32(cp)
        })
        .collect()
}

/// Returns the two skin-tone-neutral spellings of `key`, if it carries a
/// skin-tone modifier after its first code point: the modifier dropped, and
/// the modifier replaced by a variation selector. Only the first modifier is
/// considered.
pub(crate) fn skin_tone_alternatives(key: &str) -> Option<[String; 2]> {
    let found = SKIN_TONE_RE.find(key)?;
    let (head, tail) = (&key[..found.start()], &key[found.end()..]);
    Some([
        format!("{}{}", head, tail),
        format!("{}{}{}", head, VARIATION_SELECTOR_SEGMENT, tail),
    ])
}

#[cfg(test)]
mod tests {
    use super::{code_point_to_hex, skin_tone_alternatives, unicode_key, unicode_key_to_string};

    #[test]
    fn test_unicode_key() {
        assert_eq!("", unicode_key(""));
        assert_eq!("1f445", unicode_key("\u{1F445}"));
        assert_eq!(
            "1f468-200d-1f468-200d-1f466-200d-1f466",
            unicode_key("\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F466}\u{200D}\u{1F466}")
        );
        assert_eq!("1f459-0053-0077", unicode_key("\u{1F459}Sw"));
        assert_eq!("00e9", code_point_to_hex('é'));
    }

    #[test]
    fn test_unicode_key_to_string() {
        assert_eq!(Some("\u{1F44D}".to_owned()), unicode_key_to_string("1f44d"));
        assert_eq!(
            Some("\u{26F9}\u{FE0F}".to_owned()),
            unicode_key_to_string("26F9-fe0f")
        );
        assert_eq!(None, unicode_key_to_string(""));
        assert_eq!(None, unicode_key_to_string("1f44d-"));
        assert_eq!(None, unicode_key_to_string("zz"));
        assert_eq!(None, unicode_key_to_string("d800"));
        assert_eq!(None, unicode_key_to_string("110000"));
    }

    #[test]
    fn test_skin_tone_alternatives() {
        assert_eq!(
            Some(["1f44d".to_owned(), "1f44d-fe0f".to_owned()]),
            skin_tone_alternatives("1f44d-1f3ff")
        );
        assert_eq!(
            Some([
                "26f9-200d-2640-fe0f".to_owned(),
                "26f9-fe0f-200d-2640-fe0f".to_owned()
            ]),
            skin_tone_alternatives("26f9-1f3fe-200d-2640-fe0f")
        );
        // only the first modifier is rewritten
        assert_eq!(
            Some([
                "1f9d1-200d-1f91d-200d-1f9d1-1f3fc".to_owned(),
                "1f9d1-fe0f-200d-1f91d-200d-1f9d1-1f3fc".to_owned()
            ]),
            skin_tone_alternatives("1f9d1-1f3fb-200d-1f91d-200d-1f9d1-1f3fc")
        );
        assert_eq!(None, skin_tone_alternatives("1f3ff"));
        assert_eq!(None, skin_tone_alternatives("1f445"));
    }
}
