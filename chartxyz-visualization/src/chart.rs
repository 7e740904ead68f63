//! Interactive 3D scatter chart
//!
//! [`InteractiveChartXyz`] owns its points (normalized into the unit cube on
//! ingestion), the view state and the per-frame buffers. Each paint composes
//! the point and box transforms, derives clip planes from the box, filters
//! the points, then draws points, the highlighted selection, the box
//! wireframe and the axis titles.

use crate::axis::{axes_for_rect, Axis, Rect};
use crate::config::{ChartConfig, ClipSpace};
use crate::context::{Justification, Painter};
use crate::events::{KeyEvent, MouseEvent};
use crate::interaction::{ChartItem, InteractionController};
use crate::scene::{InteractionEvent, InteractionObservers, Scene};
use crate::selection::{ModifiedTime, SelectionLink};
use crate::view::{unit_cube_to_axes, CanonicalView, ViewState};
use chartxyz_core::{
    ClipPlanes, Column, ColorLookup, HueLookupTable, Point3d, Point3f, PointCloud, Result, Table,
    Transform3D, VisibilityFilter, VisibleSet,
};

/// The 12 edges of the unit cube: bottom square, top square, then verticals
const BOX_EDGES: [([f32; 3], [f32; 3]); 12] = [
    ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
    ([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
    ([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 1.0]),
    ([1.0, 0.0, 1.0], [1.0, 1.0, 1.0]),
    ([1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
    ([0.0, 1.0, 1.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([1.0, 0.0, 0.0], [1.0, 0.0, 1.0]),
    ([1.0, 1.0, 0.0], [1.0, 1.0, 1.0]),
    ([0.0, 1.0, 0.0], [0.0, 1.0, 1.0]),
];

/// Unit-space midpoints of the x, y and z edges through the box origin
const LABEL_ANCHORS: [[f64; 3]; 3] = [[0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]];

/// Map a column onto [0, 1] by its finite min/max. A column without spread
/// lands in the middle.
fn normalize(column: &Column) -> (Vec<f32>, (f64, f64)) {
    let (lo, hi) = column.range().unwrap_or((0.0, 0.0));
    let width = hi - lo;
    let values = column
        .values
        .iter()
        .map(|&v| {
            if width > 0.0 {
                ((v - lo) / width) as f32
            } else if v.is_nan() {
                f32::NAN
            } else {
                0.5
            }
        })
        .collect();
    (values, (lo, hi))
}

/// An interactive 3D scatter plot
#[derive(Debug)]
pub struct InteractiveChartXyz {
    config: ChartConfig,
    controller: InteractionController,
    points: PointCloud<Point3f>,
    colors: Option<Vec<u8>>,
    points_mtime: ModifiedTime,
    visible_set: VisibleSet,
    selected_points: Vec<Point3f>,
    selection_build_time: ModifiedTime,
    selection_rebuilds: usize,
    link: Option<SelectionLink>,
    axes: [Axis; 3],
    view: ViewState,
    point_transform: Transform3D,
    box_transform: Transform3D,
    clip_planes: ClipPlanes,
    scene: Scene,
    observers: InteractionObservers,
    visible: bool,
    interactive: bool,
}

impl Default for InteractiveChartXyz {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveChartXyz {
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        let mut chart = Self {
            controller: InteractionController::from_config(&config),
            interactive: config.interactive,
            config,
            points: PointCloud::new(),
            colors: None,
            points_mtime: ModifiedTime::NEVER,
            visible_set: VisibleSet::new(),
            selected_points: Vec::new(),
            selection_build_time: ModifiedTime::NEVER,
            selection_rebuilds: 0,
            link: None,
            axes: Default::default(),
            view: ViewState::new(),
            point_transform: Transform3D::identity(),
            box_transform: Transform3D::identity(),
            clip_planes: ClipPlanes::default(),
            scene: Scene::default(),
            observers: InteractionObservers::new(),
            visible: true,
        };
        chart.set_geometry(Rect::new(0.0, 0.0, 1.0, 1.0));
        chart
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replace the configuration. The interactive flag is left as is.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.controller = InteractionController::from_config(&config);
        self.config = config;
        self.scene.set_dirty(true);
    }

    /// Place the chart box over `rect` and fit the unit cube to it
    pub fn set_geometry(&mut self, rect: Rect) {
        let titled = self.axes.clone();
        self.axes = axes_for_rect(&rect);
        for (axis, old) in self.axes.iter_mut().zip(titled) {
            axis.title = old.title;
            axis.range = old.range;
        }
        self.view.base = unit_cube_to_axes(&self.axes);
        self.scene.set_dirty(true);
    }

    /// Override the transform from normalized point space into chart space
    pub fn set_base_transform(&mut self, base: Transform3D) {
        self.view.base = base;
        self.scene.set_dirty(true);
    }

    pub fn axes(&self) -> &[Axis; 3] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axis; 3] {
        &mut self.axes
    }

    /// Plot columns `x`, `y` and `z` of `table`, each normalized to [0, 1].
    /// Axis titles and ranges follow the columns. Any previous colors are
    /// dropped.
    pub fn set_input(&mut self, table: &Table, x: &str, y: &str, z: &str) -> Result<()> {
        let columns = [
            table.require_column(x)?,
            table.require_column(y)?,
            table.require_column(z)?,
        ];
        let mut normalized = Vec::with_capacity(3);
        for (axis, column) in self.axes.iter_mut().zip(columns) {
            let (values, range) = normalize(column);
            axis.title = column.name.clone();
            axis.range = range;
            normalized.push(values);
        }
        self.points = (0..table.number_of_rows())
            .map(|i| Point3f::new(normalized[0][i], normalized[1][i], normalized[2][i]))
            .collect();
        self.colors = None;
        self.points_mtime.modified();
        self.scene.set_dirty(true);
        log::debug!(
            target: "chartxyz",
            "ingested {} points from columns {}, {}, {}",
            self.points.len(),
            x,
            y,
            z
        );
        Ok(())
    }

    /// As [`set_input`](Self::set_input), coloring each point by `color`
    /// through a [`HueLookupTable`] spanning the column's range.
    ///
    /// # Panics
    ///
    /// Panics if `table` has no column named `color`.
    pub fn set_input_with_colors(
        &mut self,
        table: &Table,
        x: &str,
        y: &str,
        z: &str,
        color: &str,
    ) -> Result<()> {
        let mut lookup = HueLookupTable::default();
        self.set_input_with_lookup(table, x, y, z, color, &mut lookup)
    }

    /// As [`set_input_with_colors`](Self::set_input_with_colors) with a
    /// caller-supplied lookup. The lookup's range is set to the column's.
    ///
    /// # Panics
    ///
    /// Panics if `table` has no column named `color`.
    pub fn set_input_with_lookup(
        &mut self,
        table: &Table,
        x: &str,
        y: &str,
        z: &str,
        color: &str,
        lookup: &mut dyn ColorLookup,
    ) -> Result<()> {
        let Some(color_column) = table.column_by_name(color) else {
            panic!("color column {:?} not found", color);
        };
        self.set_input(table, x, y, z)?;
        assert_eq!(
            color_column.len(),
            self.points.len(),
            "color column {:?} does not match the point count",
            color
        );
        let (lo, hi) = color_column.range().unwrap_or((0.0, 0.0));
        lookup.set_range(lo, hi);
        self.colors = Some(lookup.map_values(&color_column.values));
        Ok(())
    }

    pub fn points(&self) -> &PointCloud<Point3f> {
        &self.points
    }

    /// Per-point RGB, 3 bytes per point, when a color column was given
    pub fn colors(&self) -> Option<&[u8]> {
        self.colors.as_deref()
    }

    /// Follow `link` for highlighted points, or stop following with `None`
    pub fn set_link(&mut self, link: Option<SelectionLink>) {
        self.link = link;
        self.selected_points.clear();
        self.selection_build_time = ModifiedTime::NEVER;
        self.scene.set_dirty(true);
    }

    pub fn link(&self) -> Option<&SelectionLink> {
        self.link.as_ref()
    }

    /// Rebuild the highlighted points if the selection or the points changed
    /// since the last rebuild.
    ///
    /// # Panics
    ///
    /// Panics if the selection holds an index past the last point.
    pub fn update(&mut self) {
        let Some(link) = self.link.clone() else {
            return;
        };
        link.with_selection(|selection| {
            let Some(selection) = selection else {
                return;
            };
            if selection.modified_time() > self.selection_build_time
                || self.points_mtime > self.selection_build_time
            {
                self.points
                    .gather_into(selection.indices(), &mut self.selected_points);
                self.selection_build_time = ModifiedTime::now();
                self.selection_rebuilds += 1;
                log::debug!(
                    target: "chartxyz",
                    "rebuilt selection: {} points",
                    self.selected_points.len()
                );
            }
        });
    }

    pub fn selected_points(&self) -> &[Point3f] {
        &self.selected_points
    }

    /// How many times the highlighted points have been rebuilt
    pub fn selection_rebuild_count(&self) -> usize {
        self.selection_rebuilds
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Replace the view state, e.g. to restore a saved camera
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
        self.scene.set_dirty(true);
    }

    /// Switch to a canonical view as if its key had been pressed
    pub fn look(&mut self, view: CanonicalView) {
        self.view.look(view);
        self.interacted(InteractionEvent::ViewChanged(view));
    }

    /// Transform points were last drawn with
    pub fn point_transform(&self) -> &Transform3D {
        &self.point_transform
    }

    /// Transform the box was last drawn with
    pub fn box_transform(&self) -> &Transform3D {
        &self.box_transform
    }

    pub fn clip_planes(&self) -> &ClipPlanes {
        &self.clip_planes
    }

    /// Points that survived clipping on the last paint
    pub fn visible_set(&self) -> &VisibleSet {
        &self.visible_set
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Call `observer` after every successful interaction
    pub fn add_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&InteractionEvent) + 'static,
    {
        self.observers.add(observer);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.scene.set_dirty(true);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Compose this frame's transforms and clip planes, then filter points
    fn prepare_frame(&mut self) {
        self.point_transform = self.view.point_transform(&self.axes);
        self.box_transform = self.view.box_transform(&self.axes);
        self.clip_planes = ClipPlanes::from_box_transform(&self.box_transform);

        let to_clip_space = match self.config.clip_space {
            ClipSpace::PointTransform => self.point_transform,
            ClipSpace::Unscaled => self.view.unscaled_point_transform(&self.axes),
        };
        VisibilityFilter::new(&to_clip_space, &self.clip_planes).filter_into(
            self.points.as_slice(),
            self.colors.as_deref(),
            &mut self.visible_set,
        );
    }

    fn paint_axis_labels(&self, painter: &mut dyn Painter) {
        let offset = self.config.label_offset;
        for (i, (axis, anchor)) in self.axes.iter().zip(LABEL_ANCHORS).enumerate() {
            if axis.title.is_empty() {
                continue;
            }
            let at = self
                .box_transform
                .transform_point(&Point3d::new(anchor[0], anchor[1], anchor[2]));
            let (x, y) = (at.x as f32, at.y as f32);
            let mut prop = self.config.label_text.clone();
            if i == 0 {
                // Centered under the x edge
                prop.justification = Justification::Centered;
                painter.apply_text_prop(&prop);
                let bounds = painter.compute_string_bounds(&axis.title);
                painter.draw_string(x, y - bounds[3] - offset, &axis.title);
            } else {
                // Left of the y and z edges, vertically centered
                prop.justification = Justification::Left;
                painter.apply_text_prop(&prop);
                let bounds = painter.compute_string_bounds(&axis.title);
                painter.draw_string(x - bounds[2] - offset, y - bounds[3] / 2.0, &axis.title);
            }
        }
    }

    /// Mark the scene for redraw and tell observers what changed
    fn interacted(&mut self, change: InteractionEvent) {
        log::trace!(target: "chartxyz", "interaction: {:?}", change);
        self.scene.set_dirty(true);
        self.observers.notify(&change);
    }
}

impl ChartItem for InteractiveChartXyz {
    fn paint(&mut self, painter: &mut dyn Painter) -> bool {
        if !self.visible || self.points.is_empty() {
            return false;
        }
        if painter.context_3d().is_none() {
            log::debug!(target: "chartxyz", "painter has no 3D context, skipping frame");
            return false;
        }

        self.update();
        self.prepare_frame();

        let Some(context) = painter.context_3d() else {
            return false;
        };
        if !self.visible_set.is_empty() {
            context.push_matrix();
            context.append_transform(&self.point_transform);
            context.apply_pen(&self.config.point_pen);
            let colors = self
                .colors
                .as_ref()
                .map(|_| self.visible_set.colors.as_slice());
            context.draw_points(&self.visible_set.points, colors);
            if !self.selected_points.is_empty() {
                context.apply_pen(&self.config.selected_pen);
                context.draw_points(&self.selected_points, None);
            }
            context.pop_matrix();
        }

        context.push_matrix();
        context.append_transform(&self.box_transform);
        context.apply_pen(&self.config.axis_pen);
        for (start, end) in BOX_EDGES {
            context.draw_line(&Point3f::from(start), &Point3f::from(end));
        }
        context.pop_matrix();

        self.paint_axis_labels(painter);

        log::debug!(
            target: "chartxyz",
            "painted {} of {} points, {} selected",
            self.visible_set.len(),
            self.points.len(),
            self.selected_points.len()
        );
        true
    }

    fn hit(&self, _event: &MouseEvent) -> bool {
        self.interactive
    }

    fn mouse_button_press_event(&mut self, event: &MouseEvent) -> bool {
        self.controller.button_press(event)
    }

    fn mouse_move_event(&mut self, event: &MouseEvent) -> bool {
        match self.controller.drag(event, &self.scene, &mut self.view) {
            Some(change) => {
                self.interacted(change);
                true
            }
            None => false,
        }
    }

    fn mouse_wheel_event(&mut self, _event: &MouseEvent, delta: i32) -> bool {
        let change = self.controller.wheel(delta, &mut self.view);
        self.interacted(change);
        true
    }

    fn key_press_event(&mut self, event: &KeyEvent) -> bool {
        match self.controller.key(event, &mut self.view) {
            Some(change) => {
                self.interacted(change);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MouseButton;
    use crate::recording::{DrawCommand, RecordingPainter};
    use approx::assert_relative_eq;
    use chartxyz_core::Vector2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ramp_table(n: usize) -> Table {
        let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
        Table::new()
            .with_column("x", values.clone())
            .unwrap()
            .with_column("y", values.clone())
            .unwrap()
            .with_column("z", values)
            .unwrap()
    }

    fn chart_with(table: &Table) -> InteractiveChartXyz {
        let mut chart = InteractiveChartXyz::new();
        chart.set_geometry(Rect::new(0.0, 0.0, 100.0, 100.0));
        chart.set_input(table, "x", "y", "z").unwrap();
        chart
    }

    #[test]
    fn test_ingestion_normalizes_columns() {
        let table = Table::new()
            .with_column("a", vec![10.0, 20.0, 30.0])
            .unwrap()
            .with_column("b", vec![-1.0, 1.0, 0.0])
            .unwrap()
            .with_column("c", vec![4.0, 4.0, 4.0])
            .unwrap();
        let chart = chart_with(&table);
        let points = chart.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point3f::new(0.0, 0.0, 0.5));
        assert_eq!(points[1], Point3f::new(0.5, 1.0, 0.5));
        assert_eq!(points[2], Point3f::new(1.0, 0.5, 0.5));
        assert_eq!(chart.axes()[0].title, "a");
        assert_eq!(chart.axes()[0].range, (10.0, 30.0));
        assert_eq!(chart.axes()[2].range, (4.0, 4.0));
        assert!(chart.colors().is_none());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut chart = InteractiveChartXyz::new();
        let err = chart.set_input(&ramp_table(3), "x", "y", "w").unwrap_err();
        assert!(matches!(err, chartxyz_core::Error::MissingColumn(name) if name == "w"));
        assert!(chart.points().is_empty());
    }

    #[test]
    fn test_colors_follow_color_column() {
        let table = ramp_table(4).with_column("c", vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let mut chart = InteractiveChartXyz::new();
        chart.set_input_with_colors(&table, "x", "y", "z", "c").unwrap();
        let colors = chart.colors().unwrap();
        assert_eq!(colors.len(), 12);
        // Low end of the hue sweep is red, high end blue
        assert_eq!(&colors[0..3], &[255, 0, 0]);
        assert_eq!(colors[11], 255);
    }

    #[test]
    #[should_panic]
    fn test_missing_color_column_panics() {
        let mut chart = InteractiveChartXyz::new();
        let _ = chart.set_input_with_colors(&ramp_table(4), "x", "y", "z", "c");
    }

    #[test]
    fn test_selection_rebuilds_only_when_newer() {
        let table = ramp_table(10);
        let mut chart = chart_with(&table);
        let link = SelectionLink::new();
        chart.set_link(Some(link.clone()));
        link.set_selection(vec![2, 5, 7]);

        chart.update();
        let expected = vec![chart.points()[2], chart.points()[5], chart.points()[7]];
        assert_eq!(chart.selected_points(), expected.as_slice());
        assert_eq!(chart.selection_rebuild_count(), 1);

        chart.update();
        let mut painter = RecordingPainter::new();
        assert!(chart.paint(&mut painter));
        assert_eq!(chart.selection_rebuild_count(), 1);

        link.set_selection(vec![0]);
        chart.update();
        assert_eq!(chart.selection_rebuild_count(), 2);
        assert_eq!(chart.selected_points(), &[chart.points()[0]]);

        chart.set_input(&table, "x", "y", "z").unwrap();
        chart.update();
        assert_eq!(chart.selection_rebuild_count(), 3);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_selection_panics() {
        let mut chart = chart_with(&ramp_table(3));
        let link = SelectionLink::new();
        chart.set_link(Some(link.clone()));
        link.set_selection(vec![3]);
        chart.update();
    }

    #[test]
    fn test_paint_without_context_or_points() {
        let mut chart = InteractiveChartXyz::new();
        let mut painter = RecordingPainter::new();
        assert!(!chart.paint(&mut painter));

        chart.set_input(&ramp_table(3), "x", "y", "z").unwrap();
        let mut headless = RecordingPainter::without_context();
        assert!(!chart.paint(&mut headless));
        assert!(headless.text_commands().is_empty());

        chart.set_visible(false);
        assert!(!chart.paint(&mut painter));
        assert!(painter.commands_3d().is_empty());
    }

    #[test]
    fn test_paint_draws_points_box_and_labels() {
        let table = ramp_table(5);
        let mut chart = chart_with(&table);
        let link = SelectionLink::new();
        chart.set_link(Some(link.clone()));
        link.set_selection(vec![1, 3]);

        let mut painter = RecordingPainter::new();
        assert!(chart.paint(&mut painter));
        assert_eq!(painter.lines().count(), 12);

        let batches: Vec<_> = painter.point_batches().collect();
        assert_eq!(batches.len(), 2);
        match batches[1] {
            DrawCommand::Points { points, pen, .. } => {
                assert_eq!(points.len(), 2);
                assert_eq!(*pen, chart.config().selected_pen);
            }
            other => panic!("unexpected {:?}", other),
        }

        let titles: Vec<_> = painter
            .text_commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["x", "y", "z"]);
        assert_eq!(painter.context().unwrap().stack_depth(), 0);
    }

    #[test]
    fn test_box_spans_geometry() {
        let mut chart = chart_with(&ramp_table(2));
        chart.set_geometry(Rect::new(10.0, 20.0, 200.0, 100.0));
        let mut painter = RecordingPainter::new();
        chart.paint(&mut painter);
        let (lo, hi) = painter.projected_lines().iter().fold(
            (Point3d::new(f64::MAX, f64::MAX, f64::MAX), Point3d::new(f64::MIN, f64::MIN, f64::MIN)),
            |(lo, hi), (a, b)| (lo.inf(a).inf(b), hi.sup(a).sup(b)),
        );
        assert_relative_eq!(lo, Point3d::new(10.0, 20.0, 20.0), epsilon = 1e-9);
        assert_relative_eq!(hi, Point3d::new(210.0, 120.0, 120.0), epsilon = 1e-9);
    }

    #[test]
    fn test_clipping_follows_zoom_by_default() {
        let table = Table::new()
            .with_column("x", vec![0.0, 0.9, 1.0])
            .unwrap()
            .with_column("y", vec![0.0, 0.9, 1.0])
            .unwrap()
            .with_column("z", vec![0.0, 0.9, 1.0])
            .unwrap();
        let probe = Point3f::new(0.9, 0.9, 0.9);
        let mouse = MouseEvent::default();

        for (clip_space, kept_zoomed) in [(ClipSpace::PointTransform, false), (ClipSpace::Unscaled, true)] {
            let config = ChartConfig {
                clip_space,
                ..ChartConfig::default()
            };
            let mut chart = InteractiveChartXyz::with_config(config);
            chart.set_geometry(Rect::new(0.0, 0.0, 100.0, 100.0));
            chart.set_input(&table, "x", "y", "z").unwrap();
            assert_eq!(chart.points()[1], probe);

            let mut painter = RecordingPainter::new();
            chart.paint(&mut painter);
            assert!(chart.visible_set().points.contains(&probe));

            // Ten notches double the zoom
            chart.mouse_wheel_event(&mouse, 10);
            chart.paint(&mut painter);
            assert_eq!(chart.visible_set().points.contains(&probe), kept_zoomed);
        }
    }

    #[test]
    fn test_interactions_mark_dirty_and_notify() {
        let mut chart = chart_with(&ramp_table(3));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        chart.add_observer(move |e| sink.borrow_mut().push(*e));
        chart.scene_mut().take_dirty();

        let drag = MouseEvent::drag(Vector2::new(0.0, 0.0), Vector2::new(5.0, -3.0), MouseButton::Left);
        assert!(chart.mouse_move_event(&drag));
        assert!(chart.scene_mut().take_dirty());
        assert!(chart.key_press_event(&KeyEvent::new('z')));
        assert!(chart.view().rotation.is_identity(1e-12));
        assert!(!chart.key_press_event(&KeyEvent::new('q')));
        assert!(chart.mouse_wheel_event(&drag, -10));
        assert_relative_eq!(chart.view().zoom_factor(), 0.5, epsilon = 1e-12);

        let middle = MouseEvent::drag(Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0), MouseButton::Middle);
        assert!(!chart.mouse_move_event(&middle));
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(
            seen.borrow()[1],
            InteractionEvent::ViewChanged(CanonicalView::LookDownZ)
        );
    }

    #[test]
    fn test_hit_and_press() {
        let mut chart = InteractiveChartXyz::new();
        let event = MouseEvent::new(Vector2::new(1.0, 1.0), MouseButton::Left);
        assert!(chart.hit(&event));
        assert!(chart.mouse_button_press_event(&event));
        assert!(!chart.mouse_button_press_event(&MouseEvent::new(Vector2::new(1.0, 1.0), MouseButton::Right)));
        chart.set_interactive(false);
        assert!(!chart.hit(&event));
    }
}
