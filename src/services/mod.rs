pub mod audio_url;
pub mod card_parser;
pub mod processor;
