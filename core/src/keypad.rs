use log::warn;

use crate::constants::KEY_COUNT;

/// # Keypad
/// 16 hexadecimal keys `0..F`.
///
/// Besides the pressed state of every key, the keypad remembers the most
/// recently pressed key that is still held; that is what resolves a wait for
/// a key press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    held: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: u8) {
        match self.pressed.get_mut(key as usize) {
            Some(pressed) => {
                *pressed = true;
                self.held = Some(key);
            }
            None => warn!("ignoring press of unknown key {:#x}", key),
        }
    }

    /// Releasing a key only clears the held key if it's the same key.
    pub fn release(&mut self, key: u8) {
        match self.pressed.get_mut(key as usize) {
            Some(pressed) => {
                *pressed = false;
                if self.held == Some(key) {
                    self.held = None;
                }
            }
            None => warn!("ignoring release of unknown key {:#x}", key),
        }
    }

    /// Keys outside `0..F` are never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    pub fn held(&self) -> Option<u8> {
        self.held
    }

    pub fn pressed(&self) -> &[bool; KEY_COUNT] {
        &self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = Keypad::new();
        keys.press(0xE);
        assert!(keys.is_pressed(0xE));
        assert_eq!(keys.held(), Some(0xE));
        keys.release(0xE);
        assert!(!keys.is_pressed(0xE));
        assert_eq!(keys.held(), None);
    }

    #[test]
    fn test_releasing_another_key_keeps_held() {
        let mut keys = Keypad::new();
        keys.press(0x1);
        keys.press(0x2);
        keys.release(0x1);
        assert_eq!(keys.held(), Some(0x2));
        assert!(keys.is_pressed(0x2));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut keys = Keypad::new();
        keys.press(0x10);
        assert_eq!(keys.held(), None);
        assert!(!keys.is_pressed(0x10));
    }
}
