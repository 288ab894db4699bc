//! Voice-line mapping extractor.
//!
//! A voice source is a `.json` file holding a single object that maps voice
//! keys to bundle paths:
//!
//! ```json
//! { "Scav_Kill_01": "assets/voices/scav/kill_01.bundle" }
//! ```

pub mod voice;

pub use voice::VoiceExtractor;
