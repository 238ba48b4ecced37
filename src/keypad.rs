use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::KEY_COUNT;
use crate::error::InvalidKey;

/// # Keypad
/// The pressed status of the hexadecimal keys 0..F.
///
/// Each key is an independent atomic flag so an input source on another thread can press and
/// release keys through a shared handle while the machine reads them mid-cycle.
#[derive(Debug, Default)]
pub struct Keypad {
    keys: [AtomicBool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the index of the key, 0x0..=0xF
    /// * `pressed` whether the key is now held down
    pub fn set(&self, key: usize, pressed: bool) -> Result<(), InvalidKey> {
        let slot = self.keys.get(key).ok_or(InvalidKey(key))?;
        slot.store(pressed, Ordering::Release);
        Ok(())
    }

    /// Whether `key` is held down; `None` when `key` is not on the keypad.
    pub fn is_pressed(&self, key: usize) -> Option<bool> {
        self.keys.get(key).map(|slot| slot.load(Ordering::Acquire))
    }

    /// The lowest-indexed key currently held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys
            .iter()
            .position(|slot| slot.load(Ordering::Acquire))
            .map(|key| key as u8)
    }

    /// Releases every key, e.g. when the input source stops delivering key-up events.
    pub fn release_all(&self) {
        for slot in &self.keys {
            slot.store(false, Ordering::Release);
        }
    }
}
