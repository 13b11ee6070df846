/// DoggyApp colors
use iced::{color, Color};

/// Header bar
pub const COLOR_1: Color = color!(0x402b30);
/// Window background
pub const COLOR_2: Color = color!(0xfaddb4);
/// Button pressed
pub const COLOR_3: Color = color!(0xf4c790);
/// Button hover
pub const COLOR_4: Color = color!(0xf2977e);
/// Error text
pub const COLOR_5: Color = color!(0xba6868);
