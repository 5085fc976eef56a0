// 16 8-bit data registers named V0 to VF
// I -> address register (12 bits)
//
// Stack of 16 return addresses
//
// Delay timer & Sound timer: count down at 60 times / s until 0,
// independent of how fast instructions run
//
// Display res: 64 width, 32 height
//
// Opcodes are 2 bytes (big-endian)
//      NNN: address
//      NN: 8-bit constant
//      N: 4-bit constant
//      X and Y: 4-bit register identifier

pub mod decode;
pub mod display;
pub mod emulator;
pub mod error;
pub mod keyboard;
pub mod memory;
pub mod registers;
pub mod timer;

pub use decode::{ExtensionOp, OpCodes, RawInstruction};
pub use display::{Frame, HEIGHT as DISPLAY_HEIGHT, WIDTH as DISPLAY_WIDTH};
pub use emulator::Emulator;
pub use error::{CycleError, LoadError};
pub use memory::{FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, STACK_DEPTH};
pub use timer::{TimerDriver, TIMER_DEC_PER_SECOND as TIMER_HZ};
