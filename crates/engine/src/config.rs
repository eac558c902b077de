//! Engine configuration.

use std::time::Duration;

use crate::types::{BACKGROUND_GLYPH, DEFAULT_HEIGHT, DEFAULT_WIDTH, QUIT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    /// Glyph the grid is reset to every frame
    pub background: char,
    /// Lower-case key that stops the loop
    pub quit_key: char,
    /// Minimum time between frames; `None` runs the loop flat out
    pub frame_interval: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: BACKGROUND_GLYPH,
            quit_key: QUIT_KEY,
            frame_interval: None,
        }
    }
}

impl EngineConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_background(mut self, background: char) -> Self {
        self.background = background;
        self
    }

    pub fn with_quit_key(mut self, key: char) -> Self {
        self.quit_key = lower(key);
        self
    }

    pub fn with_frame_interval(mut self, interval: Option<Duration>) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Cap the loop at `fps` frames per second; 0 removes the cap.
    pub fn with_fps(self, fps: u32) -> Self {
        let interval = (fps > 0).then(|| Duration::from_secs(1) / fps);
        self.with_frame_interval(interval)
    }
}

/// Lower-case a key, keeping it unchanged when it has no single-char lower form.
pub(crate) fn lower(key: char) -> char {
    let mut lowered = key.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!((config.width, config.height), (20, 10));
        assert_eq!(config.background, '.');
        assert_eq!(config.quit_key, 'q');
        assert_eq!(config.frame_interval, None);
    }

    #[test]
    fn fps_converts_to_interval() {
        let config = EngineConfig::default().with_fps(20);
        assert_eq!(config.frame_interval, Some(Duration::from_millis(50)));
        assert_eq!(config.with_fps(0).frame_interval, None);
    }

    #[test]
    fn quit_key_is_stored_lower_case() {
        assert_eq!(EngineConfig::default().with_quit_key('X').quit_key, 'x');
    }

    #[test]
    fn lower_keeps_multi_char_lowercase_as_is() {
        assert_eq!(lower('D'), 'd');
        assert_eq!(lower('1'), '1');
        // 'İ' lower-cases to two chars
        assert_eq!(lower('İ'), 'İ');
    }
}
