// Input module - controller state and the $4016/$4017 serial protocol
//
// The NES reads its two controllers through one-bit serial ports:
//
// 1. The game writes 1 then 0 to $4016. The falling edge latches the live
//    button state of both controllers into per-controller shift registers.
// 2. Eight reads of $4016 (controller 1) or $4017 (controller 2) then
//    return one button per read in bit 0, least significant button first:
//    A, B, Select, Start, Up, Down, Left, Right.
//
// While the strobe is held high, reads reflect the live A button and the
// shift registers do not advance.

pub mod keyboard;

pub use keyboard::{KeyboardHandler, KeyboardMapping, Player};

/// NES controller buttons, one per bit of the snapshot byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// A button (bit 0)
    A,
    /// B button (bit 1)
    B,
    /// Select button (bit 2)
    Select,
    /// Start button (bit 3)
    Start,
    /// Up on the D-pad (bit 4)
    Up,
    /// Down on the D-pad (bit 5)
    Down,
    /// Left on the D-pad (bit 6)
    Left,
    /// Right on the D-pad (bit 7)
    Right,
}

impl Button {
    /// The snapshot bit assigned to this button
    #[inline]
    pub fn mask(self) -> u8 {
        match self {
            Button::A => 0x01,
            Button::B => 0x02,
            Button::Select => 0x04,
            Button::Start => 0x08,
            Button::Up => 0x10,
            Button::Down => 0x20,
            Button::Left => 0x40,
            Button::Right => 0x80,
        }
    }
}

/// Live button state of one controller
///
/// The host keeps this snapshot current through `set_button`/`clear_button`;
/// the serial protocol samples it when the game strobes $4016.
#[derive(Debug, Clone, Copy, Default)]
pub struct Controller {
    /// Packed button bits, A in bit 0 through Right in bit 7
    status: u8,
}

impl Controller {
    /// Create a controller with every button released
    pub fn new() -> Self {
        Controller { status: 0 }
    }

    /// Press a button
    pub fn set_button(&mut self, button: Button) {
        self.status |= button.mask();
    }

    /// Release a button
    pub fn clear_button(&mut self, button: Button) {
        self.status &= !button.mask();
    }

    /// Whether a button is currently held
    pub fn is_pressed(&self, button: Button) -> bool {
        self.status & button.mask() != 0
    }

    /// The packed snapshot byte
    #[inline]
    pub fn snapshot(&self) -> u8 {
        self.status
    }
}

/// The two controller ports and their shift registers
///
/// `ctrl1_status`/`ctrl2_status` hold the serialized snapshots; each read
/// of $4016/$4017 returns bit 0 and shifts the register right, so a ninth
/// read of an exhausted register returns 0.
pub struct ControllerIO {
    /// Controller 1 live state
    controller1: Controller,
    /// Controller 2 live state
    controller2: Controller,
    /// Latched shift register for port $4016
    ctrl1_status: u8,
    /// Latched shift register for port $4017
    ctrl2_status: u8,
    /// Strobe line; while high, reads see the live A button
    strobe: bool,
}

impl ControllerIO {
    /// Create both ports with released buttons and cleared shift registers
    pub fn new() -> Self {
        ControllerIO {
            controller1: Controller::new(),
            controller2: Controller::new(),
            ctrl1_status: 0,
            ctrl2_status: 0,
            strobe: false,
        }
    }

    /// Reset the serial state (snapshots are host-owned and survive)
    pub fn reset(&mut self) {
        self.ctrl1_status = 0;
        self.ctrl2_status = 0;
        self.strobe = false;
    }

    /// Write to the strobe port ($4016)
    ///
    /// Writing bit 0 = 0 latches both live snapshots into the shift
    /// registers; writing bit 0 = 1 raises the strobe.
    pub fn write_strobe(&mut self, data: u8) {
        let new_strobe = data & 0x01 != 0;
        if !new_strobe {
            self.ctrl1_status = self.controller1.snapshot();
            self.ctrl2_status = self.controller2.snapshot();
        }
        self.strobe = new_strobe;
    }

    /// Read controller 1 ($4016): bit 0 of the shift register, then shift
    pub fn read_controller1(&mut self) -> u8 {
        if self.strobe {
            return self.controller1.snapshot() & 0x01;
        }
        let value = self.ctrl1_status & 0x01;
        self.ctrl1_status >>= 1;
        value
    }

    /// Read controller 2 ($4017): bit 0 of the shift register, then shift
    pub fn read_controller2(&mut self) -> u8 {
        if self.strobe {
            return self.controller2.snapshot() & 0x01;
        }
        let value = self.ctrl2_status & 0x01;
        self.ctrl2_status >>= 1;
        value
    }

    /// Replace controller 1's live snapshot (host input path)
    pub fn set_controller1(&mut self, controller: Controller) {
        self.controller1 = controller;
    }

    /// Replace controller 2's live snapshot (host input path)
    pub fn set_controller2(&mut self, controller: Controller) {
        self.controller2 = controller;
    }

    /// Mutable access to controller 1 for `set_button`/`clear_button`
    pub fn controller1_mut(&mut self) -> &mut Controller {
        &mut self.controller1
    }

    /// Mutable access to controller 2 for `set_button`/`clear_button`
    pub fn controller2_mut(&mut self) -> &mut Controller {
        &mut self.controller2
    }
}

impl Default for ControllerIO {
    fn default() -> Self {
        Self::new()
    }
}
