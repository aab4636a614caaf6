use url::Url;

const AUDIO_EXTENSIONS: [&str; 6] = [".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a"];

/// Checks that `url` is an absolute http(s) URL whose path ends with a known
/// audio file extension. Purely syntactic.
pub fn validate_audio_url(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let path = parsed.path().to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
