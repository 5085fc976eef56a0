use std::fmt;

use crate::memory::TypeAddr;

/// A raw 16-bit instruction word, fetched big-endian.
///
/// Field layout, by nibble: `[class][x][y][n]`, where `nn` is the low byte
/// and `nnn` the low twelve bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInstruction {
    code: u16,
}

impl RawInstruction {
    pub fn new(code: u16) -> Self {
        RawInstruction { code }
    }

    pub fn from_bytes(high: u8, low: u8) -> Self {
        Self::new(((high as u16) << 8) | low as u16)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    // n is starting digit (1-based), m is length; digits past the word read as 0
    pub fn nth_m_digits(&self, n: u8, m: u8) -> u16 {
        // 0110 1100 1111 0001
        // -------------------
        // 1111 1111 1111 1111
        //      1111 1111 1111
        //           1111 1111
        //                1111
        if n == 0 || m == 0 || n + m > 5 {
            return 0;
        }
        let shift_places = (4 - m - (n - 1)) * 4;
        let mask: u16 = if m == 4 { 0xFFFF } else { (1 << (m * 4)) - 1 };
        (self.code >> shift_places) & mask
    }

    pub fn class(&self) -> u8 {
        self.nth_m_digits(1, 1) as u8
    }

    /// Register index from bits 8-11, always in `0..=15`.
    pub fn x(&self) -> u8 {
        self.nth_m_digits(2, 1) as u8
    }

    /// Register index from bits 4-7, always in `0..=15`.
    pub fn y(&self) -> u8 {
        self.nth_m_digits(3, 1) as u8
    }

    pub fn n(&self) -> u8 {
        self.nth_m_digits(4, 1) as u8
    }

    pub fn nn(&self) -> u8 {
        self.nth_m_digits(3, 2) as u8
    }

    pub fn nnn(&self) -> TypeAddr {
        self.nth_m_digits(2, 3)
    }
}

impl PartialEq<u16> for RawInstruction {
    fn eq(&self, ins: &u16) -> bool {
        ins.eq(&self.code)
    }
}

impl fmt::Display for RawInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCodes {
    // 00E0
    // turn all pixels to 0
    ClearScreen,
    // 00EE
    PopSubroutine,
    // 1NNN
    // set PC to address NNN, "jump" to memory location
    Jump(TypeAddr),
    // 2NNN
    PushSubroutine(TypeAddr),

    // 3XNN
    SkipEqualConstant(u8, u8),
    // 4XNN
    SkipNotEqualConstant(u8, u8),
    // 5XY0
    SkipEqualRegister(u8, u8),
    // 9XY0
    SkipNotEqualRegister(u8, u8),

    // 6XNN
    // set register VX to value NN
    SetRegister(u8, u8),
    // 7XNN
    // add value NN to VX, VF untouched
    AddToRegister(u8, u8),

    // 8XY0
    CopyRegister(u8, u8),
    // 8XY1
    Or(u8, u8),
    // 8XY2
    And(u8, u8),
    // 8XY3
    XOr(u8, u8),
    // 8XY4
    Add(u8, u8),
    // 8XY5
    SubtractForward(u8, u8),
    // 8XY6
    RightShift(u8),
    // 8XY7
    SubtractBackward(u8, u8),
    // 8XYE
    LeftShift(u8),

    // ANNN
    // set index register I to address NNN
    SetIndexRegister(TypeAddr),
    // BNNN
    JumpWithOffset(TypeAddr),
    // CXNN
    Random(u8, u8),
    // DXYN
    // draw an N pixel tall sprite starting at I
    // at Coordinates (VX, VY)
    // XOR pixels on screen using sprite data
    // if pixels on screen were switched OFF: VF set to 1
    Display(u8, u8, u8),

    Extension(ExtensionOp),
}

/// Instruction families of the classical ISA that decode to a known shape
/// but have no handler in this interpreter yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionOp {
    // 0NNN
    MachineRoutine(TypeAddr),
    // EX9E
    SkipIfPressed(u8),
    // EXA1
    SkipIfNotPressed(u8),
    // FX07
    CopyDelayToRegister(u8),
    // FX0A
    GetKey(u8),
    // FX15
    CopyRegisterToDelay(u8),
    // FX18
    CopyRegisterToSound(u8),
    // FX1E
    AddToIndex(u8),
    // FX29
    PointChar(u8),
    // FX33
    ToDecimal(u8),
    // FX55
    StoreRegisterToMemory(u8),
    // FX65
    LoadRegisterFromMemory(u8),
}

impl OpCodes {
    /// Decodes one instruction word. `None` means the word matches no
    /// instruction family at all.
    pub fn decode_raw(ins: u16) -> Option<Self> {
        let raw = RawInstruction::new(ins);
        let (x, y) = (raw.x(), raw.y());

        let op = match raw.class() {
            0x0 => match ins {
                0x00E0 => Self::ClearScreen,
                0x00EE => Self::PopSubroutine,
                0x0000 => return None,
                _ => Self::Extension(ExtensionOp::MachineRoutine(raw.nnn())),
            },
            0x1 => Self::Jump(raw.nnn()),
            0x2 => Self::PushSubroutine(raw.nnn()),
            0x3 => Self::SkipEqualConstant(x, raw.nn()),
            0x4 => Self::SkipNotEqualConstant(x, raw.nn()),
            0x5 if raw.n() == 0 => Self::SkipEqualRegister(x, y),
            0x6 => Self::SetRegister(x, raw.nn()),
            0x7 => Self::AddToRegister(x, raw.nn()),
            0x8 => match raw.n() {
                0x0 => Self::CopyRegister(x, y),
                0x1 => Self::Or(x, y),
                0x2 => Self::And(x, y),
                0x3 => Self::XOr(x, y),
                0x4 => Self::Add(x, y),
                0x5 => Self::SubtractForward(x, y),
                0x6 => Self::RightShift(x),
                0x7 => Self::SubtractBackward(x, y),
                0xE => Self::LeftShift(x),
                _ => return None,
            },
            0x9 if raw.n() == 0 => Self::SkipNotEqualRegister(x, y),
            0xA => Self::SetIndexRegister(raw.nnn()),
            0xB => Self::JumpWithOffset(raw.nnn()),
            0xC => Self::Random(x, raw.nn()),
            0xD => Self::Display(x, y, raw.n()),
            0xE => match raw.nn() {
                0x9E => Self::Extension(ExtensionOp::SkipIfPressed(x)),
                0xA1 => Self::Extension(ExtensionOp::SkipIfNotPressed(x)),
                _ => return None,
            },
            0xF => match raw.nn() {
                0x07 => Self::Extension(ExtensionOp::CopyDelayToRegister(x)),
                0x0A => Self::Extension(ExtensionOp::GetKey(x)),
                0x15 => Self::Extension(ExtensionOp::CopyRegisterToDelay(x)),
                0x18 => Self::Extension(ExtensionOp::CopyRegisterToSound(x)),
                0x1E => Self::Extension(ExtensionOp::AddToIndex(x)),
                0x29 => Self::Extension(ExtensionOp::PointChar(x)),
                0x33 => Self::Extension(ExtensionOp::ToDecimal(x)),
                0x55 => Self::Extension(ExtensionOp::StoreRegisterToMemory(x)),
                0x65 => Self::Extension(ExtensionOp::LoadRegisterFromMemory(x)),
                _ => return None,
            },
            _ => return None,
        };
        Some(op)
    }
}
