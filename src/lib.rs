#![cfg_attr(not(test), no_std)]

//! Buffered driver for SSD1306-based 128x64 monochrome OLED displays.
//!
//! Every drawing primitive renders into a local one-bit framebuffer laid out
//! the way the controller pages its GDDRAM; nothing reaches the bus until
//! [`Ssd1306::update`] flushes the buffer one page at a time. The bus is any
//! [`embedded_hal::i2c::I2c`] implementation, so the driver runs unchanged on
//! every platform with an I2C HAL.
//!
//! ```rust,ignore
//! let mut display = Ssd1306::new(i2c, 0x3C);
//! display.init()?;
//! display.draw_line(0, 0, 127, 63, Color::White)?;
//! display.goto_xy(10, 20)?;
//! display.draw_str("hello", &font::FONT_7X10, Color::White)?;
//! display.update()?;
//! ```
//!
//! With the default `graphics` feature the display is also an
//! `embedded-graphics` [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget),
//! again drawing into the local buffer only.

mod command;
mod display;
pub mod font;
mod framebuffer;
mod graphics;

pub use display::{ScrollDirection, ScrollInterval, Ssd1306};
pub use framebuffer::Color;

/// Display width in pixels.
pub const WIDTH: u8 = 128;
/// Display height in pixels.
pub const HEIGHT: u8 = 64;
/// Number of 8-row pages the framebuffer is divided into.
pub const PAGES: u8 = HEIGHT / 8;
/// Framebuffer size in bytes, one bit per pixel.
pub const BUFFER_SIZE: usize = WIDTH as usize * HEIGHT as usize / 8;

/// Errors returned by display operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The session has not been brought up with [`Ssd1306::init`] yet.
    NotInitialized,
    /// An argument was outside its valid range.
    InvalidArgument,
    /// The bus transport failed; carries the underlying bus error verbatim.
    Comm(E),
}

#[cfg(test)]
pub(crate) mod testutil {
    use embedded_hal::i2c::{self, ErrorType, I2c, Operation};

    /// Bus stub that records every write transaction and can be told to
    /// start failing after a given number of them.
    pub struct MockBus {
        pub writes: Vec<(u8, Vec<u8>)>,
        pub fail_after: Option<usize>,
    }

    impl MockBus {
        pub fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_after: None,
            }
        }

        pub fn failing_after(n: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_after: Some(n),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockBusError;

    impl i2c::Error for MockBusError {
        fn kind(&self) -> i2c::ErrorKind {
            i2c::ErrorKind::Other
        }
    }

    impl ErrorType for MockBus {
        type Error = MockBusError;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(n) = self.fail_after {
                if self.writes.len() >= n {
                    return Err(MockBusError);
                }
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(_) => return Err(MockBusError),
                }
            }
            Ok(())
        }
    }

    /// A display that has gone through `init` with the transcript cleared,
    /// ready for per-test assertions.
    pub fn ready_display() -> crate::Ssd1306<MockBus> {
        let mut display = crate::Ssd1306::new(MockBus::new(), 0x3C);
        display.init().unwrap();
        display.bus_mut().writes.clear();
        display
    }
}
