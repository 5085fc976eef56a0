use std::path::Path;
use std::time::Instant;

use log::{debug, error, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::{
    decode::OpCodes,
    display::{Frame, FrameBuffer},
    error::{CycleError, LoadError},
    keyboard::Keypad,
    memory::{Memory, TypeAddr, ADDRESS_MASK},
    registers::{Registers, FLAG_REGISTER},
    timer::{Timer, TimerDriver},
};

/// One interpreter instance: exclusive owner of all machine state.
///
/// The host drives it by calling [`Emulator::cycle`] at whatever instruction
/// rate it likes and [`Emulator::sync_timers`] (or [`Emulator::tick_timers`])
/// on the 60Hz wall-clock cadence. Display and timer state is only ever
/// handed out as copies or shared borrows.
pub struct Emulator {
    fb: FrameBuffer,
    regs: Registers,
    mem: Memory,
    delay_timer: Timer,
    sound_timer: Timer,
    timer_driver: TimerDriver,
    keypad: Keypad,
    rng: Box<dyn RngCore>,
    halted: bool,
}

impl Emulator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Builds an emulator whose `RND` instruction draws from `rng`.
    pub fn with_rng<R: RngCore + 'static>(rng: R) -> Self {
        Self {
            fb: FrameBuffer::new(),
            regs: Registers::new(),
            mem: Memory::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            timer_driver: TimerDriver::new(Instant::now()),
            keypad: Keypad::new(),
            rng: Box::new(rng),
            halted: false,
        }
    }

    /// Zeroes all state, reloads the font and sets PC back to 0x200. The
    /// random source is kept.
    pub fn reset(&mut self) {
        self.fb = FrameBuffer::new();
        self.regs = Registers::new();
        self.mem.reset();
        self.delay_timer = Timer::default();
        self.sound_timer = Timer::default();
        self.timer_driver = TimerDriver::new(Instant::now());
        self.keypad.reset();
        self.halted = false;
        debug!("emulator reset");
    }

    pub fn load_rom(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        self.mem.load_rom(bytes)
    }

    pub fn load_rom_by_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        self.mem.load_rom_by_file(path)
    }

    pub fn fetch_decode(&mut self) -> Result<OpCodes, CycleError> {
        let pc = self.mem.pc.0;
        let word = self.mem.next_instruction();
        trace!("{pc:03X}: {word:04X}");
        OpCodes::decode_raw(word).ok_or(CycleError::UnknownInstruction { word, pc })
    }

    /// Runs one fetch-decode-execute step.
    ///
    /// Recoverable errors are logged and returned with PC already past the
    /// offending word. A fatal error halts the emulator; every later call
    /// returns [`CycleError::Halted`] without touching state.
    pub fn cycle(&mut self) -> Result<(), CycleError> {
        if self.halted {
            return Err(CycleError::Halted);
        }
        let result = self
            .fetch_decode()
            .and_then(|operation| self.execute_ins(operation));
        if let Err(err) = result {
            if err.is_fatal() {
                error!("{err}");
                self.halted = true;
            } else {
                warn!("{err}");
            }
        }
        result
    }

    /// Applies a decoded instruction. PC must already point past it.
    pub fn execute_ins(&mut self, ins: OpCodes) -> Result<(), CycleError> {
        match ins {
            OpCodes::ClearScreen => self.fb.clear_buffer(),
            OpCodes::PopSubroutine => {
                let addr = self.mem.stack.pop().ok_or(CycleError::StackUnderflow {
                    pc: self.current_pc(),
                })?;
                self.mem.set_pc(addr);
            }
            OpCodes::Jump(addr) => self.mem.set_pc(addr),
            OpCodes::PushSubroutine(addr) => {
                // the return address is the instruction after the call
                if !self.mem.stack.push(self.mem.pc.0) {
                    return Err(CycleError::StackOverflow {
                        pc: self.current_pc(),
                    });
                }
                self.mem.set_pc(addr);
            }
            OpCodes::SkipEqualConstant(vx, nn) => self.skip_if(self.regs.get(vx) == nn),
            OpCodes::SkipNotEqualConstant(vx, nn) => self.skip_if(self.regs.get(vx) != nn),
            OpCodes::SkipEqualRegister(vx, vy) => {
                self.skip_if(self.regs.get(vx) == self.regs.get(vy))
            }
            OpCodes::SkipNotEqualRegister(vx, vy) => {
                self.skip_if(self.regs.get(vx) != self.regs.get(vy))
            }
            OpCodes::SetRegister(vx, nn) => self.regs.set_register(vx, nn),
            OpCodes::AddToRegister(vx, nn) => self.regs.add_to_register(vx, nn),
            OpCodes::CopyRegister(vx, vy) => self.regs.set_register(vx, self.regs.get(vy)),
            OpCodes::Or(vx, vy) => {
                self.regs
                    .set_register(vx, self.regs.get(vx) | self.regs.get(vy));
            }
            OpCodes::And(vx, vy) => {
                self.regs
                    .set_register(vx, self.regs.get(vx) & self.regs.get(vy));
            }
            OpCodes::XOr(vx, vy) => {
                self.regs
                    .set_register(vx, self.regs.get(vx) ^ self.regs.get(vy));
            }
            OpCodes::Add(vx, vy) => {
                let (sum, carry) = self.regs.get(vx).overflowing_add(self.regs.get(vy));
                self.regs.set_register(vx, sum);
                self.regs.set_flag(carry);
            }
            OpCodes::SubtractForward(vx, vy) => {
                let (x, y) = (self.regs.get(vx), self.regs.get(vy));
                self.regs.set_register(vx, x.wrapping_sub(y));
                self.regs.set_flag(x >= y); // no borrow
            }
            OpCodes::RightShift(vx) => {
                let vx_value = self.regs.get(vx);
                self.regs.set_register(vx, vx_value >> 1);
                self.regs.set_register(FLAG_REGISTER, vx_value & 1);
            }
            OpCodes::SubtractBackward(vx, vy) => {
                let (x, y) = (self.regs.get(vx), self.regs.get(vy));
                self.regs.set_register(vx, y.wrapping_sub(x));
                self.regs.set_flag(y >= x); // no borrow
            }
            OpCodes::LeftShift(vx) => {
                let vx_value = self.regs.get(vx);
                self.regs.set_register(vx, vx_value << 1);
                self.regs.set_register(FLAG_REGISTER, (vx_value >> 7) & 1);
            }
            OpCodes::SetIndexRegister(addr) => self.mem.set_index(addr),
            OpCodes::JumpWithOffset(addr) => {
                self.mem.set_pc(addr.wrapping_add(self.regs.get(0) as TypeAddr));
            }
            OpCodes::Random(vx, nn) => {
                let ransuu: u8 = self.rng.gen();
                self.regs.set_register(vx, nn & ransuu);
            }
            OpCodes::Display(reg_x, reg_y, height) => {
                let (x, y) = (self.regs.get(reg_x), self.regs.get(reg_y));
                // From I to I + N, one row (8 pixels) per byte
                let start = self.mem.index.0;
                let sprite: Vec<u8> = (0..height as TypeAddr)
                    .map(|row| self.mem.get(start.wrapping_add(row)))
                    .collect();
                let collision = self.fb.paint(x, y, &sprite);
                self.regs.set_flag(collision);
            }
            OpCodes::Extension(op) => {
                return Err(CycleError::Unimplemented {
                    op,
                    pc: self.current_pc(),
                });
            }
        }
        Ok(())
    }

    fn skip_if(&mut self, predicate: bool) {
        if predicate {
            self.mem.increment_pc();
        }
    }

    // address of the instruction being executed
    fn current_pc(&self) -> TypeAddr {
        self.mem.pc.0.wrapping_sub(2) & ADDRESS_MASK
    }

    /// One 60Hz tick: both timers count down once, stopping at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer.decrement();
        self.sound_timer.decrement();
    }

    /// Applies every tick owed for wall-clock time up to `now`; returns how
    /// many were applied.
    pub fn sync_timers(&mut self, now: Instant) -> u32 {
        let ticks = self.timer_driver.due_ticks(now);
        for _ in 0..ticks {
            self.tick_timers();
        }
        ticks
    }

    /// Moves the 60Hz reference point to `now` without ticking.
    pub fn restart_timers(&mut self, now: Instant) {
        self.timer_driver = TimerDriver::new(now);
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.count
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.count
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer.set(value);
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer.set(value);
    }

    /// True while the host should be emitting a tone.
    pub fn sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    pub fn frame(&self) -> Frame {
        self.fb.frame()
    }

    pub fn is_dirty(&self) -> bool {
        self.fb.is_dirty()
    }

    pub fn clear_dirty(&mut self) {
        self.fb.clear_dirty();
    }

    /// The current frame if it changed since the last call, clearing the
    /// dirty flag.
    pub fn take_frame(&mut self) -> Option<Frame> {
        if !self.fb.is_dirty() {
            return None;
        }
        self.fb.clear_dirty();
        Some(self.fb.frame())
    }

    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.keypad.update_key(key, pressed);
    }

    pub fn keys(&self) -> &[bool; 16] {
        self.keypad.as_slice()
    }

    /// State of hex key `key` (masked to 0..=15), as the key-test
    /// instructions will read it.
    pub fn is_key_pressed(&self, key: u8) -> bool {
        self.keypad.get_key_status_from_num(key)
    }

    pub fn registers(&self) -> &[u8; 16] {
        self.regs.as_slice()
    }

    pub fn set_register(&mut self, reg_num: u8, value: u8) {
        self.regs.set_register(reg_num, value);
    }

    pub fn index(&self) -> TypeAddr {
        self.mem.index.0
    }

    pub fn pc(&self) -> TypeAddr {
        self.mem.pc.0
    }

    pub fn stack_depth(&self) -> usize {
        self.mem.stack.depth()
    }

    pub fn memory(&self) -> &[u8] {
        self.mem.as_slice()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ExtensionOp;
    use crate::memory::{PROGRAM_START, STACK_DEPTH};
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rstest::rstest;
    use std::time::Duration;

    fn emulator_with(program: &[u16]) -> Emulator {
        let mut emu = Emulator::with_rng(StepRng::new(0xAB, 0));
        let bytes: Vec<u8> = program.iter().flat_map(|w| w.to_be_bytes()).collect();
        emu.load_rom(&bytes).unwrap();
        emu
    }

    fn run(emu: &mut Emulator, cycles: usize) {
        for _ in 0..cycles {
            emu.cycle().unwrap();
        }
    }

    #[test]
    fn test_cycle_advances_pc() {
        let mut emu = emulator_with(&[0x00E0]);
        emu.cycle().unwrap();
        assert_eq!(emu.pc(), PROGRAM_START + 2);
    }

    #[test]
    fn jump_is_not_double_incremented() {
        let mut emu = emulator_with(&[0x1300]);
        emu.cycle().unwrap();
        assert_eq!(emu.pc(), 0x300);
    }

    #[test]
    fn jump_with_offset_adds_v0() {
        let mut emu = emulator_with(&[0x6010, 0xB300]);
        run(&mut emu, 2);
        assert_eq!(emu.pc(), 0x310);
    }

    #[test]
    fn jump_with_offset_wraps_to_address_space() {
        let mut emu = emulator_with(&[0x60FF, 0xBFF0]);
        run(&mut emu, 2);
        assert_eq!(emu.pc(), (0xFF0 + 0xFF) & 0xFFF);
    }

    #[rstest]
    #[case(&[0x6A12, 0x3A12], true)]
    #[case(&[0x6A12, 0x3A13], false)]
    #[case(&[0x6A12, 0x4A13], true)]
    #[case(&[0x6A12, 0x4A12], false)]
    #[case(&[0x6A12, 0x6B12, 0x5AB0], true)]
    #[case(&[0x6A12, 0x6B13, 0x5AB0], false)]
    #[case(&[0x6A12, 0x6B13, 0x9AB0], true)]
    #[case(&[0x6A12, 0x6B12, 0x9AB0], false)]
    fn conditional_skips(#[case] program: &[u16], #[case] skipped: bool) {
        let mut emu = emulator_with(program);
        run(&mut emu, program.len());
        let after = PROGRAM_START + 2 * program.len() as TypeAddr;
        let expected = if skipped { after + 2 } else { after };
        assert_eq!(emu.pc(), expected);
    }

    #[test]
    fn load_and_copy_registers() {
        let mut emu = emulator_with(&[0x6A42, 0x8BA0]);
        run(&mut emu, 2);
        assert_eq!(emu.registers()[0xA], 0x42);
        assert_eq!(emu.registers()[0xB], 0x42);
    }

    #[test]
    fn bitwise_ops() {
        let mut emu = emulator_with(&[
            0x60F0, 0x613C, 0x8011, // V0 |= V1
            0x623C, 0x63F0, 0x8232, // V2 &= V3
            0x6455, 0x65FF, 0x8453, // V4 ^= V5
        ]);
        run(&mut emu, 9);
        assert_eq!(emu.registers()[0x0], 0xFC);
        assert_eq!(emu.registers()[0x2], 0x30);
        assert_eq!(emu.registers()[0x4], 0xAA);
    }

    #[test]
    fn add_immediate_leaves_flag_alone() {
        let mut emu = emulator_with(&[0x6F05, 0x60FF, 0x7002]);
        run(&mut emu, 3);
        assert_eq!(emu.registers()[0x0], 0x01);
        assert_eq!(emu.registers()[0xF], 0x05);
    }

    #[rstest]
    #[case(0x8006, 0x81, 0x40, 1)]
    #[case(0x8006, 0x80, 0x40, 0)]
    #[case(0x800E, 0x81, 0x02, 1)]
    #[case(0x800E, 0x01, 0x02, 0)]
    fn shifts(#[case] shift: u16, #[case] value: u8, #[case] expected: u8, #[case] flag: u8) {
        let mut emu = emulator_with(&[0x6000 | value as u16, shift]);
        run(&mut emu, 2);
        assert_eq!(emu.registers()[0x0], expected);
        assert_eq!(emu.registers()[0xF], flag);
    }

    #[test]
    fn subtract_backward_sets_no_borrow() {
        let mut emu = emulator_with(&[0x6005, 0x6108, 0x8017]);
        run(&mut emu, 3);
        assert_eq!(emu.registers()[0x0], 0x03);
        assert_eq!(emu.registers()[0xF], 1);

        let mut emu = emulator_with(&[0x6008, 0x6105, 0x8017]);
        run(&mut emu, 3);
        assert_eq!(emu.registers()[0x0], 0xFD);
        assert_eq!(emu.registers()[0xF], 0);
    }

    #[test]
    fn random_is_masked_by_immediate() {
        let mut emu = emulator_with(&[0xC30F, 0xC4FF]);
        run(&mut emu, 2);
        assert_eq!(emu.registers()[0x3], 0xAB & 0x0F);
        assert_eq!(emu.registers()[0x4], 0xAB);
    }

    #[test]
    fn set_index_register() {
        let mut emu = emulator_with(&[0xA22A]);
        emu.cycle().unwrap();
        assert_eq!(emu.index(), 0x22A);
    }

    #[test]
    fn call_then_return_resumes_after_call() {
        // 200: CALL 206; 202: LD V0,1; 204: JP 204; 206: RET
        let mut emu = emulator_with(&[0x2206, 0x6001, 0x1204, 0x00EE]);
        emu.cycle().unwrap();
        assert_eq!(emu.pc(), 0x206);
        assert_eq!(emu.stack_depth(), 1);
        emu.cycle().unwrap();
        assert_eq!(emu.pc(), 0x202);
        assert_eq!(emu.stack_depth(), 0);
        emu.cycle().unwrap();
        assert_eq!(emu.registers()[0], 1);
    }

    #[test]
    fn seventeenth_call_overflows_and_halts() {
        // 200: CALL 200, recursing forever
        let mut emu = emulator_with(&[0x2200]);
        run(&mut emu, STACK_DEPTH);
        assert_eq!(
            emu.cycle(),
            Err(CycleError::StackOverflow { pc: PROGRAM_START })
        );
        assert!(emu.is_halted());
        let pc = emu.pc();
        assert_eq!(emu.cycle(), Err(CycleError::Halted));
        assert_eq!(emu.pc(), pc);
    }

    #[test]
    fn return_without_call_underflows() {
        let mut emu = emulator_with(&[0x00EE]);
        assert_eq!(
            emu.cycle(),
            Err(CycleError::StackUnderflow { pc: PROGRAM_START })
        );
        assert!(emu.is_halted());
    }

    #[test]
    fn unknown_word_is_skipped() {
        let mut emu = emulator_with(&[0x5AB1, 0x6007]);
        assert_eq!(
            emu.cycle(),
            Err(CycleError::UnknownInstruction {
                word: 0x5AB1,
                pc: PROGRAM_START
            })
        );
        assert!(!emu.is_halted());
        emu.cycle().unwrap();
        assert_eq!(emu.registers()[0], 7);
    }

    #[test]
    fn extension_families_are_reported() {
        let mut emu = emulator_with(&[0xF233]);
        assert_eq!(
            emu.cycle(),
            Err(CycleError::Unimplemented {
                op: ExtensionOp::ToDecimal(2),
                pc: PROGRAM_START
            })
        );
        assert_eq!(emu.pc(), PROGRAM_START + 2);
        assert!(!emu.is_halted());
    }

    #[test]
    fn draw_font_glyph_and_collide() {
        // I = 0 (glyph "0"), draw at (0,0) twice
        let mut emu = emulator_with(&[0xA000, 0xD005, 0xD005]);
        run(&mut emu, 2);
        let frame = emu.take_frame().unwrap();
        assert!(frame.pixel(0, 0) && frame.pixel(3, 0));
        assert!(frame.pixel(0, 1) && !frame.pixel(1, 1));
        assert_eq!(emu.registers()[0xF], 0);
        assert!(!emu.is_dirty());

        emu.cycle().unwrap();
        assert_eq!(emu.registers()[0xF], 1);
        assert_eq!(emu.frame().lit(), 0);
        assert!(emu.is_dirty());
    }

    #[test]
    fn draw_reduces_coordinates_and_wraps() {
        // V0 = 124 (60 mod 64), V1 = 32 (0 mod 32), sprite 0xFF at 0x300
        let mut emu = emulator_with(&[0x607C, 0x6120, 0xA300, 0xD011]);
        emu.mem.set(0x300, 0xFF);
        run(&mut emu, 4);
        let frame = emu.frame();
        for x in [60, 61, 62, 63, 0, 1, 2, 3] {
            assert!(frame.pixel(x, 0));
        }
        assert_eq!(frame.lit(), 8);
    }

    #[test]
    fn sprite_read_wraps_past_end_of_memory() {
        // I = 0xFFE, four rows: 0xFFE, 0xFFF, then glyph "0" bytes at 0x000, 0x001
        let mut emu = emulator_with(&[0xAFFE, 0xD014]);
        emu.mem.set(0xFFE, 0x80);
        emu.mem.set(0xFFF, 0x40);
        run(&mut emu, 2);
        let frame = emu.frame();
        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(1, 1));
        // 0xF0
        assert!((0..4).all(|x| frame.pixel(x, 2)));
        // 0x90
        assert!(frame.pixel(0, 3) && frame.pixel(3, 3));
        assert!(!frame.pixel(1, 3) && !frame.pixel(2, 3));
        assert_eq!(frame.lit(), 8);
        assert_eq!(emu.registers()[0xF], 0);
    }

    #[test]
    fn zero_height_sprite_draws_nothing() {
        let mut emu = emulator_with(&[0x6F01, 0xA000, 0xD010]);
        run(&mut emu, 3);
        assert_eq!(emu.frame().lit(), 0);
        assert_eq!(emu.registers()[0xF], 0);
        assert!(emu.is_dirty());
    }

    #[test]
    fn key_state_is_visible_to_readers() {
        let mut emu = emulator_with(&[]);
        emu.set_key(0xB, true);
        assert!(emu.is_key_pressed(0xB));
        assert!(emu.is_key_pressed(0x1B));
        assert!(!emu.is_key_pressed(0xA));
        emu.set_key(0xB, false);
        assert!(!emu.is_key_pressed(0xB));
    }

    #[test]
    fn clear_screen_turns_everything_off() {
        let mut emu = emulator_with(&[0xA000, 0xD00F, 0x00E0]);
        run(&mut emu, 2);
        emu.clear_dirty();
        emu.cycle().unwrap();
        assert_eq!(emu.frame().lit(), 0);
        assert!(emu.is_dirty());
    }

    #[test]
    fn timers_tick_down_and_clamp() {
        let mut emu = emulator_with(&[]);
        emu.set_delay_timer(2);
        emu.set_sound_timer(1);
        assert!(emu.sound_active());
        emu.tick_timers();
        assert_eq!((emu.delay_timer(), emu.sound_timer()), (1, 0));
        assert!(!emu.sound_active());
        emu.tick_timers();
        emu.tick_timers();
        assert_eq!((emu.delay_timer(), emu.sound_timer()), (0, 0));
    }

    #[test]
    fn timers_follow_wall_clock_not_cycles() {
        let mut emu = emulator_with(&[0x1200]);
        let start = Instant::now();
        emu.restart_timers(start);
        emu.set_delay_timer(200);
        run(&mut emu, 10_000);
        assert_eq!(emu.delay_timer(), 200);
        assert_eq!(emu.sync_timers(start + Duration::from_millis(500)), 30);
        assert_eq!(emu.delay_timer(), 170);
    }

    #[test]
    fn reset_restores_power_on_state() {
        let mut emu = emulator_with(&[0x6A01, 0xA300, 0xD005, 0x2200]);
        run(&mut emu, 4);
        emu.set_delay_timer(9);
        emu.set_key(3, true);
        emu.reset();
        assert_eq!(emu.pc(), PROGRAM_START);
        assert_eq!(emu.registers(), &[0; 16]);
        assert_eq!(emu.index(), 0);
        assert_eq!(emu.stack_depth(), 0);
        assert_eq!(emu.delay_timer(), 0);
        assert_eq!(emu.frame().lit(), 0);
        assert_eq!(emu.keys(), &[false; 16]);
        assert_eq!(emu.memory()[0x200], 0);
        assert_eq!(emu.memory()[0], 0xF0);
    }

    proptest! {
        #[test]
        fn add_immediate_wraps(vx in any::<u8>(), nn in any::<u8>()) {
            let mut emu = emulator_with(&[]);
            emu.set_register(0x1, vx);
            emu.execute_ins(OpCodes::AddToRegister(0x1, nn)).unwrap();
            prop_assert_eq!(emu.registers()[0x1], vx.wrapping_add(nn));
        }

        #[test]
        fn add_registers_sets_carry(vx in any::<u8>(), vy in any::<u8>()) {
            let mut emu = emulator_with(&[]);
            emu.set_register(0x1, vx);
            emu.set_register(0x2, vy);
            emu.execute_ins(OpCodes::Add(0x1, 0x2)).unwrap();
            prop_assert_eq!(emu.registers()[0x1], vx.wrapping_add(vy));
            prop_assert_eq!(emu.registers()[0xF] == 1, vx as u16 + vy as u16 > 255);
        }

        #[test]
        fn subtract_sets_no_borrow(vx in any::<u8>(), vy in any::<u8>()) {
            let mut emu = emulator_with(&[]);
            emu.set_register(0x1, vx);
            emu.set_register(0x2, vy);
            emu.execute_ins(OpCodes::SubtractForward(0x1, 0x2)).unwrap();
            prop_assert_eq!(emu.registers()[0x1], vx.wrapping_sub(vy));
            prop_assert_eq!(emu.registers()[0xF] == 1, vx >= vy);
        }

        #[test]
        fn subtract_backward_sets_no_borrow_for_all(vx in any::<u8>(), vy in any::<u8>()) {
            let mut emu = emulator_with(&[]);
            emu.set_register(0x1, vx);
            emu.set_register(0x2, vy);
            emu.execute_ins(OpCodes::SubtractBackward(0x1, 0x2)).unwrap();
            prop_assert_eq!(emu.registers()[0x1], vy.wrapping_sub(vx));
            prop_assert_eq!(emu.registers()[0xF] == 1, vy >= vx);
        }

        #[test]
        fn arbitrary_words_never_panic(word in any::<u16>()) {
            let mut emu = emulator_with(&[word]);
            let _ = emu.cycle();
            prop_assert!(emu.pc() <= 0xFFF);
        }
    }
}
