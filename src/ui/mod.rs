/// User interface module
///
/// - The color palette (palette.rs)
/// - The screen layout and styling (screen.rs)

pub mod palette;
pub mod screen;
