use sdl2::keyboard::Keycode;

/// # Keymap
/// The 16 keypad keys are laid out as the four left alphanumeric columns,
/// numbered left to right, top to bottom.
/// ```text
/// |1|2|3|4|      |0|1|2|3|
/// |Q|W|E|R|  ->  |4|5|6|7|
/// |A|S|D|F|  ->  |8|9|A|B|
/// |Z|X|C|V|      |C|D|E|F|
/// ```
const KEYMAP: [Keycode; 16] = [
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Num4,
    Keycode::Q,
    Keycode::W,
    Keycode::E,
    Keycode::R,
    Keycode::A,
    Keycode::S,
    Keycode::D,
    Keycode::F,
    Keycode::Z,
    Keycode::X,
    Keycode::C,
    Keycode::V,
];

pub fn keymap(key: Keycode) -> Option<u8> {
    KEYMAP
        .iter()
        .position(|&mapped| mapped == key)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        assert_eq!(keymap(Keycode::Num1), Some(0x0));
        assert_eq!(keymap(Keycode::R), Some(0x7));
        assert_eq!(keymap(Keycode::A), Some(0x8));
        assert_eq!(keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Num5), None);
    }
}
