//! Interactive 3D scatter chart
//!
//! This crate puts the chartxyz geometry on screen:
//! - [`InteractiveChartXyz`], a chart item with rotate, spin, zoom, pan and
//!   canonical views
//! - the view transforms the chart composes every frame
//! - the [`Painter`]/[`Context3D`] drawing seam, with recording and SVG
//!   implementations
//! - selection links shared between views

pub mod axis;
pub mod chart;
pub mod config;
pub mod context;
pub mod events;
pub mod interaction;
pub mod recording;
pub mod scene;
pub mod selection;
pub mod svg_export;
pub mod view;

pub use axis::*;
pub use chart::*;
pub use config::*;
pub use context::*;
pub use events::*;
pub use interaction::*;
pub use recording::*;
pub use scene::*;
pub use selection::*;
pub use svg_export::*;
pub use view::*;

use chartxyz_core::Result;
use std::path::Path;

/// Paint `chart` into an SVG file the size of its scene
pub fn save_chart_svg<P: AsRef<Path>>(chart: &mut InteractiveChartXyz, path: P) -> Result<()> {
    let scene = chart.scene();
    let mut painter = SvgPainter::new(scene.width(), scene.height());
    if !chart.paint(&mut painter) {
        log::warn!(target: "chartxyz", "chart painted nothing");
    }
    painter.save(path)
}
