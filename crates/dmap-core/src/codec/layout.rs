pub const CODE_LEN: usize = 4;
pub const LENGTH_LEN: usize = 4;
pub const HEADER_LEN: usize = CODE_LEN + LENGTH_LEN;

pub const BYTE_LEN: usize = 1;
pub const BOOL_LEN: usize = 1;
pub const U16_LEN: usize = 2;
pub const U32_LEN: usize = 4;
pub const U64_LEN: usize = 8;
pub const DATE_LEN: usize = 4;
pub const VERSION_LEN: usize = 4;

// Printable ASCII range used by the unknown-value heuristic.
pub const PRINTABLE_MIN: u8 = 0x20;
pub const PRINTABLE_MAX: u8 = 0x7e;
