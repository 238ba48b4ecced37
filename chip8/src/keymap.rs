use sdl2::keyboard::Keycode;

/// Keyboard keys for keypad keys 0x0..=0xF, in keypad order.
///
/// The 4x4 hex keypad sits on the 1234/QWER/ASDF/ZXCV block:
/// ```text
/// 1 2 3 C      1 2 3 4
/// 4 5 6 D  ->  Q W E R
/// 7 8 9 E      A S D F
/// A 0 B F      Z X C V
/// ```
const KEYS: [Keycode; 16] = [
    Keycode::X,
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Q,
    Keycode::W,
    Keycode::E,
    Keycode::A,
    Keycode::S,
    Keycode::D,
    Keycode::Z,
    Keycode::C,
    Keycode::Num4,
    Keycode::R,
    Keycode::F,
    Keycode::V,
];

/// The keypad index for a keyboard key, if it is on the keypad block.
pub fn keymap(key: Keycode) -> Option<usize> {
    KEYS.iter().position(|&k| k == key)
}
