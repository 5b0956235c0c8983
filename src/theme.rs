// ---------------------------------------------------------------------------
// Figure style
// ---------------------------------------------------------------------------

/// Visual style for the rendered figure, passed explicitly into figure
/// construction and drawing instead of living in process-global state.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Draw axis tick marks on the plot borders.
    pub show_ticks: bool,
    /// Draw the background grid.
    pub show_grid: bool,
    /// Width of each series line, in points.
    pub line_width: f32,
    /// Radius of each series marker, in points (8-point diameter).
    pub marker_radius: f32,
}

impl Theme {
    /// The style the viewer uses: border ticks, no grid.
    pub fn ticks() -> Self {
        Theme {
            show_ticks: true,
            show_grid: false,
            line_width: 2.5,
            marker_radius: 4.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ticks()
    }
}
