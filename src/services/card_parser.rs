use crate::models::ParsedInfo;

const AUDIO_URL_PREFIX: &str = "audio url:";
const DESCRIPTION_PREFIX: &str = "description:";
const TAGS_PREFIX: &str = "tags:";

/// Scans a card description line by line and pulls out the `Audio URL:`,
/// `Description:` and `Tags:` values.
///
/// Prefixes match case-insensitively and a later line overwrites an earlier
/// one. Lines without any colon are kept as description candidates and, when
/// no usable `Description:` value was found, joined with single spaces.
pub fn extract_fields(text: &str) -> ParsedInfo {
    let mut info = ParsedInfo::default();
    let mut description_lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = trim_line(line);

        if let Some(value) = strip_prefix_ignore_case(trimmed, AUDIO_URL_PREFIX) {
            info.audio_url = Some(value.to_string());
        } else if let Some(value) = strip_prefix_ignore_case(trimmed, DESCRIPTION_PREFIX) {
            info.description = value.to_string();
        } else if let Some(value) = strip_prefix_ignore_case(trimmed, TAGS_PREFIX) {
            info.tags = value.to_string();
        } else if !trimmed.is_empty() && !trimmed.contains(':') {
            description_lines.push(trimmed);
        }
    }

    if info.description.is_empty() && !description_lines.is_empty() {
        info.description = description_lines.join(" ");
    }

    info
}

/// Returns the trimmed remainder of `line` if it starts with `prefix`,
/// ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(trim_line(&line[prefix.len()..]))
    } else {
        None
    }
}

/// Trims whitespace and byte order marks from both ends.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_audio_url_regardless_of_prefix_case() {
        for text in [
            "Audio URL: https://x.test/a.mp3",
            "audio url: https://x.test/a.mp3",
            "AUDIO URL:https://x.test/a.mp3",
            "   aUdIo UrL:    https://x.test/a.mp3   ",
        ] {
            assert_eq!(
                extract_fields(text).audio_url.as_deref(),
                Some("https://x.test/a.mp3"),
                "input: {text:?}"
            );
        }
    }

    #[test]
    fn last_audio_url_line_wins() {
        let info = extract_fields(
            "Audio URL: https://x.test/first.mp3\nsome text\nAudio URL: https://x.test/second.ogg",
        );
        assert_eq!(info.audio_url.as_deref(), Some("https://x.test/second.ogg"));
    }

    #[test]
    fn missing_audio_url_is_none_not_empty() {
        let info = extract_fields("Just a note\nTags: a, b");
        assert_eq!(info.audio_url, None);
        assert_eq!(info.tags, "a, b");
    }

    #[test]
    fn empty_audio_url_value_is_kept_as_empty() {
        let info = extract_fields("Audio URL:   ");
        assert_eq!(info.audio_url.as_deref(), Some(""));
    }

    #[test]
    fn plain_lines_become_description() {
        let info = extract_fields(
            "First line\n\n  Second line  \nAudio URL: https://h/s.wav\nTags: chill, lofi",
        );
        assert_eq!(info.description, "First line Second line");
        assert_eq!(info.audio_url.as_deref(), Some("https://h/s.wav"));
        assert_eq!(info.tags, "chill, lofi");
    }

    #[test]
    fn explicit_description_overrides_plain_lines() {
        let info = extract_fields("Loose text\nDescription: The real one\nMore loose text");
        assert_eq!(info.description, "The real one");
    }

    #[test]
    fn empty_explicit_description_falls_back_to_plain_lines() {
        let info = extract_fields("Description:\nLoose text");
        assert_eq!(info.description, "Loose text");
    }

    #[test]
    fn unknown_keyed_lines_are_dropped() {
        let info = extract_fields("Artist: Someone\nNote at 10:30\nkept");
        assert_eq!(info.description, "kept");
        assert_eq!(info.audio_url, None);
        assert_eq!(info.tags, "");
    }

    #[test]
    fn handles_crlf_and_empty_input() {
        let info = extract_fields("Tags: x\r\nhello\r\n");
        assert_eq!(info.tags, "x");
        assert_eq!(info.description, "hello");

        assert_eq!(extract_fields(""), ParsedInfo::default());
    }

    #[test]
    fn non_ascii_lines_do_not_panic() {
        let info = extract_fields("é\nüñí\n日本語の説明");
        assert_eq!(info.description, "é üñí 日本語の説明");
    }

    #[test]
    fn last_description_and_tags_lines_win() {
        let info = extract_fields("Description: first\nTags: a\nDescription: second\nTags: b, c");
        assert_eq!(info.description, "second");
        assert_eq!(info.tags, "b, c");
    }

    #[test]
    fn first_matching_prefix_claims_the_line() {
        let info = extract_fields("Audio URL: description: x\nloose");
        assert_eq!(info.audio_url.as_deref(), Some("description: x"));
        assert_eq!(info.description, "loose");
        assert_eq!(info.tags, "");
    }

    #[test]
    fn leading_byte_order_mark_is_trimmed() {
        let info = extract_fields("\u{feff}Audio URL: https://x.test/a.mp3\u{feff}");
        assert_eq!(info.audio_url.as_deref(), Some("https://x.test/a.mp3"));
    }
}
