// Presentation layer: everything color-, label- and layout-shaped lives here,
// never in core.

pub mod palette;
pub mod report;
