use serde::{Deserialize, Serialize};

/// Number of columns in the layout grid.
pub const GRID_COLUMNS: u8 = 12;

/// How much horizontal space a node asks for when placed inside a grid row.
///
/// This is a sizing hint only. It travels with a node through modifier chains and is
/// read by whatever container lays the node out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ColumnWidth {
    /// Share the row equally with other uniform siblings.
    #[default]
    Uniform,
    /// Size to content.
    Automatic,
    /// Span a fixed number of grid columns, clamped to `1..=GRID_COLUMNS`.
    Count(u8),
}

impl ColumnWidth {
    pub fn count(columns: u8) -> Self {
        ColumnWidth::Count(columns.clamp(1, GRID_COLUMNS))
    }

    /// The grid class for this width: `col`, `col-auto` or `col-<n>`.
    pub fn class_name(&self) -> String {
        match self {
            ColumnWidth::Uniform => "col".to_string(),
            ColumnWidth::Automatic => "col-auto".to_string(),
            ColumnWidth::Count(n) => format!("col-{}", (*n).clamp(1, GRID_COLUMNS)),
        }
    }
}
