//! The input-source contract and a scripted implementation.

use std::collections::VecDeque;

use crate::error::InputError;

/// Supplies at most one key per poll without ever blocking.
pub trait InputSource {
    /// Return the next pending key, or `None` immediately if there is none.
    fn poll(&mut self) -> Option<char>;

    /// Give back any exclusively held terminal state.
    ///
    /// Must be safe to call more than once.
    fn release(&mut self) -> Result<(), InputError> {
        Ok(())
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Option<char> {
        (**self).poll()
    }

    fn release(&mut self) -> Result<(), InputError> {
        (**self).release()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll(&mut self) -> Option<char> {
        (**self).poll()
    }

    fn release(&mut self) -> Result<(), InputError> {
        (**self).release()
    }
}

/// A fixed queue of keys, one handed out per poll.
///
/// `None` entries stand for frames without a keypress. Useful for headless
/// runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Option<char>>,
    polls: usize,
    released: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// One key per frame, in order.
    pub fn from_keys(keys: impl IntoIterator<Item = char>) -> Self {
        Self::from_frames(keys.into_iter().map(Some))
    }

    pub fn from_frames(frames: impl IntoIterator<Item = Option<char>>) -> Self {
        Self {
            keys: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, key: char) {
        self.keys.push_back(Some(key));
    }

    /// Queue a frame with no keypress.
    pub fn push_idle(&mut self) {
        self.keys.push_back(None);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<char> {
        self.polls += 1;
        self.keys.pop_front().flatten()
    }

    fn release(&mut self) -> Result<(), InputError> {
        self.released = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_come_out_in_order() {
        let mut input = ScriptedInput::from_frames([Some('d'), None, Some('q')]);
        assert_eq!(input.poll(), Some('d'));
        assert_eq!(input.poll(), None);
        assert_eq!(input.poll(), Some('q'));
        assert_eq!(input.poll(), None);
        assert_eq!(input.polls(), 4);
    }

    #[test]
    fn release_is_repeatable() {
        let mut input = ScriptedInput::new();
        assert!(input.release().is_ok());
        assert!(input.release().is_ok());
        assert!(input.is_released());
    }

    #[test]
    fn borrowed_source_forwards() {
        let mut input = ScriptedInput::from_keys(['w']);
        input.push_idle();
        input.push('s');
        {
            let mut borrowed: &mut ScriptedInput = &mut input;
            assert_eq!(InputSource::poll(&mut borrowed), Some('w'));
        }
        assert_eq!(input.remaining(), 2);
    }
}
