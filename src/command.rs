//! SSD1306 command set.
//!
//! Every bus transmission starts with a control byte telling the controller
//! whether the remaining bytes are commands or GDDRAM data.

/// First byte of a command transmission.
pub const CMD_CONTROL_BYTE: u8 = 0x00;
/// First byte of a data transmission.
pub const DATA_CONTROL_BYTE: u8 = 0x40;

// Addressing setting commands.
pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;
pub const SET_COLUMN_ADDRESS: u8 = 0x21;
pub const SET_PAGE_ADDRESS: u8 = 0x22;
/// Addressing mode where the controller advances column then page on its
/// own as data bytes arrive; `update` relies on it.
pub const MEM_ADDR_MODE_HORIZONTAL: u8 = 0x00;

// Hardware configuration commands.
pub const DISPLAY_START_LINE: u8 = 0x40;
pub const SEGMENT_REMAP_COL127_SEG0: u8 = 0xA1;
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
pub const COM_SCAN_DIRECTION_REMAPPED: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS_HW_CONFIG: u8 = 0xDA;

// Timing and driving scheme setting commands.
pub const SET_CLK_OSC_FREQ: u8 = 0xD5;
pub const SET_PRECHARGE_PERIOD: u8 = 0xD9;
pub const SET_VCOMH_DESELECT_LEVEL: u8 = 0xDB;

// Scrolling commands.
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
pub const ACTIVATE_SCROLL: u8 = 0x2F;

// Fundamental commands.
pub const SET_CONTRAST: u8 = 0x81;
pub const CHARGE_PUMP_SETTING: u8 = 0x8D;
pub const RESUME_TO_RAM: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
