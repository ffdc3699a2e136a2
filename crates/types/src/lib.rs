pub mod breakpoint;
pub mod responsive;
pub mod width;

pub use breakpoint::{Breakpoint, ParseBreakpointError};
pub use responsive::{ResolvedBreakpoints, ResponsiveValues};
pub use width::{ColumnWidth, GRID_COLUMNS};
