use minifb::Key;

// COSMAC VIP keypad     QWERTY
//   1 2 3 C             1 2 3 4
//   4 5 6 D             Q W E R
//   7 8 9 E             A S D F
//   A 0 B F             Z X C V
pub fn key_to_num(key: Key) -> Option<u8> {
    match key {
        Key::Key1 => Some(0x1),
        Key::Key2 => Some(0x2),
        Key::Key3 => Some(0x3),
        Key::Key4 => Some(0xC),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}

/// Hex keypad state from the set of physical keys currently held.
pub fn keypad_state(held: &[Key]) -> [bool; 16] {
    let mut keys = [false; 16];
    for n in held.iter().filter_map(|key| key_to_num(*key)) {
        keys[n as usize] = true;
    }
    keys
}
