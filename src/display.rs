use embedded_hal::i2c::I2c;

use crate::command as cmd;
use crate::framebuffer::{Color, Framebuffer};
use crate::{Error, HEIGHT, PAGES, WIDTH};

/// Stack scratch frame for one data transmission: control byte plus up to
/// one full page row. The bound keeps bus-capacity assumptions portable;
/// larger transfers must be chunked by the caller.
const DATA_WRITE_BUFFER_SIZE: usize = 129;

// A page row must fit in a single data frame; `update` depends on it.
const _: () = assert!((WIDTH as usize) < DATA_WRITE_BUFFER_SIZE);

/// Hardware scroll animation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Right,
    Left,
    VerticalRight,
    VerticalLeft,
}

impl ScrollDirection {
    fn command(self) -> u8 {
        match self {
            ScrollDirection::Right => cmd::RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => cmd::LEFT_HORIZONTAL_SCROLL,
            ScrollDirection::VerticalRight => cmd::VERTICAL_RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::VerticalLeft => cmd::VERTICAL_LEFT_HORIZONTAL_SCROLL,
        }
    }
}

/// Time between scroll steps in display frame periods.
///
/// The values are the controller's own encoding, which is not monotonic in
/// the number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScrollInterval {
    Frames5 = 0x00,
    Frames64 = 0x01,
    Frames128 = 0x02,
    Frames256 = 0x03,
    Frames3 = 0x04,
    Frames4 = 0x05,
    Frames25 = 0x06,
    Frames2 = 0x07,
}

/// One SSD1306 display session.
///
/// Owns the bus handle and the framebuffer; drawing mutates only the buffer,
/// hardware-affecting calls transmit immediately. The session must be brought
/// up with [`Ssd1306::init`] before any other operation.
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    pub(crate) cursor_x: u8,
    pub(crate) cursor_y: u8,
    pub(crate) inverted: bool,
    scrolling: bool,
    initialized: bool,
    pub(crate) buffer: Framebuffer,
}

/// Configuration burst issued once during `init`, caller-prefixed with the
/// command control byte so it goes out as one atomic transmission.
const INIT_CONFIG: [u8; 25] = [
    cmd::CMD_CONTROL_BYTE,
    cmd::RESUME_TO_RAM,
    cmd::SET_MEMORY_ADDRESSING_MODE,
    cmd::MEM_ADDR_MODE_HORIZONTAL,
    cmd::SET_COLUMN_ADDRESS,
    0x00, // Column start address.
    0x7F, // Column end address.
    cmd::SET_PAGE_ADDRESS,
    0x00, // Page start address.
    0x07, // Page end address.
    cmd::DISPLAY_START_LINE,
    cmd::SEGMENT_REMAP_COL127_SEG0,
    cmd::SET_MULTIPLEX_RATIO,
    0x3F,
    cmd::COM_SCAN_DIRECTION_REMAPPED,
    cmd::SET_DISPLAY_OFFSET,
    0x00, // No display offset.
    cmd::SET_COM_PINS_HW_CONFIG,
    0x12, // Alternative config, no COM left/right remap.
    cmd::SET_CLK_OSC_FREQ,
    0x80,
    cmd::SET_PRECHARGE_PERIOD,
    0x22,
    cmd::SET_VCOMH_DESELECT_LEVEL,
    0x20, // 0.77 x Vcc.
];

impl<I2C: I2c> Ssd1306<I2C> {
    /// Creates an uninitialized session talking to the display at the given
    /// 7-bit I2C address. Every operation fails with
    /// [`Error::NotInitialized`] until [`Ssd1306::init`] has run.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            cursor_x: 0,
            cursor_y: 0,
            inverted: false,
            scrolling: false,
            initialized: false,
            buffer: Framebuffer::new(),
        }
    }

    /// Consumes the session and hands the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Read-only view of the framebuffer bytes in page order.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub(crate) fn ensure_init(&self) -> Result<(), Error<I2C::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Frames one command byte with the command control byte and transmits.
    fn cmd_write(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        self.i2c
            .write(self.address, &[cmd::CMD_CONTROL_BYTE, command])
            .map_err(Error::Comm)
    }

    /// Transmits a command burst. The slice must already carry the command
    /// control byte as its first element so the burst stays atomic.
    fn cmd_write_multi(&mut self, commands: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        self.i2c.write(self.address, commands).map_err(Error::Comm)
    }

    /// Prefixes the data control byte and transmits one data frame. Payloads
    /// that do not fit the scratch frame are rejected, not chunked.
    fn data_write(&mut self, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        if data.len() + 1 > DATA_WRITE_BUFFER_SIZE {
            return Err(Error::InvalidArgument);
        }
        let mut frame = [0u8; DATA_WRITE_BUFFER_SIZE];
        frame[0] = cmd::DATA_CONTROL_BYTE;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &frame[..data.len() + 1])
            .map_err(Error::Comm)
    }

    /// Brings the panel up: soft reset, fixed 128x64 configuration, display
    /// on, cleared screen. The first failing transmission aborts the
    /// sequence and is returned; the hardware state is then undefined.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.inverted = false;
        self.scrolling = false;
        self.buffer.clear();
        // The bring-up steps below go through the command writers, which
        // gate on this flag.
        self.initialized = true;

        self.display_off()?;
        self.set_inversion(false)?;
        self.set_contrast(0xFF)?;
        self.set_scroll_status(false)?;
        self.cmd_write_multi(&INIT_CONFIG)?;
        self.display_on()?;
        self.clear_display()
    }

    /// Enables the charge pump and turns the panel on.
    pub fn display_on(&mut self) -> Result<(), Error<I2C::Error>> {
        self.cmd_write_multi(&[
            cmd::CMD_CONTROL_BYTE,
            cmd::CHARGE_PUMP_SETTING,
            cmd::CHARGE_PUMP_ENABLE,
            cmd::DISPLAY_ON,
        ])
    }

    /// Disables the charge pump and turns the panel off.
    pub fn display_off(&mut self) -> Result<(), Error<I2C::Error>> {
        self.cmd_write_multi(&[
            cmd::CMD_CONTROL_BYTE,
            cmd::CHARGE_PUMP_SETTING,
            cmd::CHARGE_PUMP_DISABLE,
            cmd::DISPLAY_OFF,
        ])
    }

    /// Sets the output current level, 0x00 dimmest to 0xFF brightest.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I2C::Error>> {
        self.cmd_write_multi(&[cmd::CMD_CONTROL_BYTE, cmd::SET_CONTRAST, contrast])
    }

    /// Switches the panel's color inversion. The local flag changes only
    /// after the transmission succeeds; bytes already in the buffer are
    /// never rewritten.
    pub fn set_inversion(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        self.cmd_write_multi(&[
            cmd::CMD_CONTROL_BYTE,
            if inverted {
                cmd::INVERT_DISPLAY
            } else {
                cmd::NORMAL_DISPLAY
            },
        ])?;
        self.inverted = inverted;
        Ok(())
    }

    /// Starts or stops the scroll animation configured by [`Ssd1306::scroll`].
    pub fn set_scroll_status(&mut self, scrolling: bool) -> Result<(), Error<I2C::Error>> {
        self.cmd_write_multi(&[
            cmd::CMD_CONTROL_BYTE,
            if scrolling {
                cmd::ACTIVATE_SCROLL
            } else {
                cmd::DEACTIVATE_SCROLL
            },
        ])?;
        self.scrolling = scrolling;
        Ok(())
    }

    /// Configures a hardware scroll over the page range and starts it.
    pub fn scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        interval: ScrollInterval,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        if start_page >= PAGES || end_page >= PAGES {
            return Err(Error::InvalidArgument);
        }

        self.cmd_write_multi(&[
            cmd::CMD_CONTROL_BYTE,
            direction.command(),
            0x00, // Dummy byte.
            start_page,
            interval as u8,
            end_page,
        ])?;

        match direction {
            ScrollDirection::Right | ScrollDirection::Left => {
                self.cmd_write(0x00)?;
                self.cmd_write(0xFF)?;
            }
            ScrollDirection::VerticalRight | ScrollDirection::VerticalLeft => {
                // Fixed vertical scrolling offset of one row.
                self.cmd_write(0x01)?;
            }
        }

        self.set_scroll_status(true)
    }

    /// Moves the glyph cursor. Unlike pixel writes, an out-of-bounds cursor
    /// is an error.
    pub fn goto_xy(&mut self, x: u8, y: u8) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        if x >= WIDTH || y >= HEIGHT {
            return Err(Error::InvalidArgument);
        }
        self.cursor_x = x;
        self.cursor_y = y;
        Ok(())
    }

    /// Flushes the framebuffer to the panel, one page per data frame in
    /// ascending page order. Horizontal addressing mode set at init lets the
    /// controller advance column and page on its own between frames.
    pub fn update(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        for page in 0..PAGES {
            let mut row = [0u8; WIDTH as usize];
            row.copy_from_slice(self.buffer.page(page));
            self.data_write(&row)?;
        }
        Ok(())
    }

    /// Resets inversion, fills the buffer black and flushes it.
    pub fn clear_display(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_inversion(false)?;
        self.draw_fill(Color::Black)?;
        self.update()
    }

    /// Zeroes the framebuffer without touching the hardware.
    pub fn clear_buffer(&mut self) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        self.buffer.clear();
        Ok(())
    }

    /// Fills the whole buffer with one logical color, honoring the current
    /// inversion state. A byte-level fill: a uniform display has every bit
    /// of a byte equal.
    pub fn draw_fill(&mut self, color: Color) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let resolved = if self.inverted { color.inverse() } else { color };
        let byte = match resolved {
            Color::White => 0xFF,
            Color::Black => 0x00,
        };
        self.buffer.fill(byte);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ready_display, MockBus, MockBusError};

    fn new_display() -> Ssd1306<MockBus> {
        Ssd1306::new(MockBus::new(), 0x3C)
    }

    #[test]
    fn init_transmits_the_full_bringup_sequence() {
        let mut display = new_display();
        display.init().unwrap();
        let writes = display.release().writes;

        assert_eq!(writes.len(), 15);
        assert!(writes.iter().all(|(addr, _)| *addr == 0x3C));

        assert_eq!(writes[0].1, [0x00, 0x8D, 0x10, 0xAE]); // display off
        assert_eq!(writes[1].1, [0x00, 0xA6]); // inversion off
        assert_eq!(writes[2].1, [0x00, 0x81, 0xFF]); // max contrast
        assert_eq!(writes[3].1, [0x00, 0x2E]); // scroll off
        assert_eq!(writes[4].1, INIT_CONFIG);
        assert_eq!(writes[5].1, [0x00, 0x8D, 0x14, 0xAF]); // display on
        assert_eq!(writes[6].1, [0x00, 0xA6]); // clear_display inversion reset

        // clear_display flush: one zeroed frame per page, data control byte
        // first.
        for page in 0..PAGES as usize {
            let frame = &writes[7 + page].1;
            assert_eq!(frame.len(), 1 + WIDTH as usize);
            assert_eq!(frame[0], 0x40);
            assert!(frame[1..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn operations_before_init_are_rejected_and_leave_buffer_untouched() {
        let mut display = new_display();

        assert_eq!(display.display_on(), Err(Error::NotInitialized));
        assert_eq!(display.set_contrast(10), Err(Error::NotInitialized));
        assert_eq!(display.set_inversion(true), Err(Error::NotInitialized));
        assert_eq!(display.goto_xy(0, 0), Err(Error::NotInitialized));
        assert_eq!(display.update(), Err(Error::NotInitialized));
        assert_eq!(display.clear_buffer(), Err(Error::NotInitialized));
        assert_eq!(display.draw_fill(Color::White), Err(Error::NotInitialized));
        assert_eq!(
            display.scroll(ScrollDirection::Right, 0, 7, ScrollInterval::Frames5),
            Err(Error::NotInitialized)
        );

        assert!(!display.is_inverted());
        assert!(display.buffer().iter().all(|&b| b == 0));
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn init_aborts_on_first_bus_failure() {
        let mut display = Ssd1306::new(MockBus::failing_after(0), 0x3C);
        assert_eq!(display.init(), Err(Error::Comm(MockBusError)));
        // The session stays marked initialized; the hardware state is the
        // caller's problem at this point.
        assert!(display.is_initialized());
        assert!(display.release().writes.is_empty());

        let mut display = Ssd1306::new(MockBus::failing_after(3), 0x3C);
        assert_eq!(display.init(), Err(Error::Comm(MockBusError)));
        assert_eq!(display.release().writes.len(), 3);
    }

    #[test]
    fn inversion_flag_follows_successful_transmissions_only() {
        let mut display = ready_display();
        display.set_inversion(true).unwrap();
        assert!(display.is_inverted());
        assert_eq!(display.bus_mut().writes.pop().unwrap().1, [0x00, 0xA7]);

        display.bus_mut().fail_after = Some(0);
        assert_eq!(display.set_inversion(false), Err(Error::Comm(MockBusError)));
        assert!(display.is_inverted());
    }

    #[test]
    fn horizontal_scroll_emits_setup_dummy_bytes_and_activation() {
        let mut display = ready_display();
        display
            .scroll(ScrollDirection::Left, 2, 5, ScrollInterval::Frames25)
            .unwrap();
        let writes = &display.bus_mut().writes;

        assert_eq!(writes[0].1, [0x00, 0x27, 0x00, 0x02, 0x06, 0x05]);
        assert_eq!(writes[1].1, [0x00, 0x00]);
        assert_eq!(writes[2].1, [0x00, 0xFF]);
        assert_eq!(writes[3].1, [0x00, 0x2F]);
        assert_eq!(writes.len(), 4);
        assert!(display.is_scrolling());
    }

    #[test]
    fn vertical_scroll_emits_row_offset() {
        let mut display = ready_display();
        display
            .scroll(ScrollDirection::VerticalRight, 0, 7, ScrollInterval::Frames2)
            .unwrap();
        let writes = &display.bus_mut().writes;

        assert_eq!(writes[0].1, [0x00, 0x29, 0x00, 0x00, 0x07, 0x07]);
        assert_eq!(writes[1].1, [0x00, 0x01]);
        assert_eq!(writes[2].1, [0x00, 0x2F]);
        assert_eq!(writes.len(), 3);
    }

    #[test]
    fn scroll_rejects_out_of_range_pages() {
        let mut display = ready_display();
        assert_eq!(
            display.scroll(ScrollDirection::Right, 8, 7, ScrollInterval::Frames5),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            display.scroll(ScrollDirection::Right, 0, 8, ScrollInterval::Frames5),
            Err(Error::InvalidArgument)
        );
        assert!(display.bus_mut().writes.is_empty());
    }

    #[test]
    fn goto_xy_validates_bounds() {
        let mut display = ready_display();
        display.goto_xy(127, 63).unwrap();
        assert_eq!(display.goto_xy(128, 0), Err(Error::InvalidArgument));
        assert_eq!(display.goto_xy(0, 64), Err(Error::InvalidArgument));
    }

    #[test]
    fn update_flushes_pages_in_ascending_order() {
        let mut display = ready_display();
        display.draw_pixel(0, 8, Color::White).unwrap(); // page 1, bit 0
        display.draw_pixel(127, 63, Color::White).unwrap(); // page 7, bit 7
        display.update().unwrap();

        let writes = &display.bus_mut().writes;
        assert_eq!(writes.len(), PAGES as usize);
        for (page, (_, frame)) in writes.iter().enumerate() {
            assert_eq!(frame[0], 0x40);
            assert_eq!(frame.len(), 1 + WIDTH as usize);
            match page {
                1 => assert_eq!(frame[1], 0x01),
                7 => assert_eq!(frame[1 + 127], 0x80),
                _ => assert!(frame[1..].iter().all(|&b| b == 0)),
            }
        }
    }

    #[test]
    fn data_write_rejects_payloads_beyond_frame_capacity() {
        let mut display = ready_display();
        let too_big = [0u8; DATA_WRITE_BUFFER_SIZE];
        assert_eq!(display.data_write(&too_big), Err(Error::InvalidArgument));

        let max = [0u8; DATA_WRITE_BUFFER_SIZE - 1];
        display.data_write(&max).unwrap();
        assert_eq!(display.bus_mut().writes[0].1.len(), DATA_WRITE_BUFFER_SIZE);
    }

    #[test]
    fn draw_fill_resolves_inversion_at_call_time() {
        let mut display = ready_display();
        display.draw_fill(Color::White).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
        display.draw_fill(Color::Black).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0x00));

        display.set_inversion(true).unwrap();
        display.draw_fill(Color::White).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0x00));
        display.draw_fill(Color::Black).unwrap();
        assert!(display.buffer().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn clear_buffer_is_idempotent_and_local() {
        let mut display = ready_display();
        display.draw_fill(Color::White).unwrap();
        display.clear_buffer().unwrap();
        let first: Vec<u8> = display.buffer().to_vec();
        display.clear_buffer().unwrap();
        assert_eq!(display.buffer(), &first[..]);
        assert!(display.bus_mut().writes.is_empty());
    }

    #[test]
    fn toggling_inversion_does_not_rewrite_the_buffer() {
        let mut display = ready_display();
        display.draw_pixel(10, 10, Color::White).unwrap();
        let before: Vec<u8> = display.buffer().to_vec();
        display.set_inversion(true).unwrap();
        assert_eq!(display.buffer(), &before[..]);
    }
}
