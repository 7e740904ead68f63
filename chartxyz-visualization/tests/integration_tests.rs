//! Integration tests for chartxyz-visualization
//!
//! These drive charts the way a host would: through the `ChartItem` trait
//! object, shared selection links and the shipped painters.

use approx::assert_relative_eq;
use chartxyz_core::{Point3d, Table, Vector2};
use chartxyz_visualization::*;

/// A 4x4x4 lattice over [0, 3]^3 plus a value column
fn create_lattice_table() -> Table {
    let (mut x, mut y, mut z, mut v) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                x.push(i as f64);
                y.push(j as f64);
                z.push(k as f64);
                v.push((i + j + k) as f64);
            }
        }
    }
    Table::new()
        .with_column("x", x)
        .unwrap()
        .with_column("y", y)
        .unwrap()
        .with_column("z", z)
        .unwrap()
        .with_column("v", v)
        .unwrap()
}

fn create_chart(table: &Table) -> InteractiveChartXyz {
    let mut chart = InteractiveChartXyz::new();
    chart.scene_mut().set_size(400.0, 400.0);
    chart.set_geometry(Rect::new(100.0, 100.0, 200.0, 200.0));
    chart.set_input_with_colors(table, "x", "y", "z", "v").unwrap();
    chart
}

#[test]
fn test_dispatch_through_trait_object() {
    let table = create_lattice_table();
    let mut items: Vec<Box<dyn ChartItem>> = vec![Box::new(create_chart(&table))];
    let mut painter = RecordingPainter::new();

    let center = Vector2::new(200.0, 200.0);
    for item in items.iter_mut() {
        let press = MouseEvent::new(center, MouseButton::Left);
        assert!(item.hit(&press));
        assert!(item.mouse_button_press_event(&press));
        let drag = MouseEvent::drag(center, center + Vector2::new(30.0, 10.0), MouseButton::Left);
        assert!(item.mouse_move_event(&drag));
        assert!(item.paint(&mut painter));
    }
    assert_eq!(painter.lines().count(), 12);
    assert_eq!(painter.text_commands().len(), 3);
}

#[test]
fn test_linked_charts_share_selection() {
    let table = create_lattice_table();
    let link = SelectionLink::new();
    let mut first = create_chart(&table);
    let mut second = create_chart(&table);
    first.set_link(Some(link.clone()));
    second.set_link(Some(link.clone()));

    link.set_selection(vec![0, 21, 63]);
    let mut painter = RecordingPainter::new();
    first.paint(&mut painter);
    second.paint(&mut painter);
    assert_eq!(first.selected_points(), second.selected_points());
    assert_eq!(first.selected_points().len(), 3);
    assert_eq!(first.selected_points()[2], first.points()[63]);

    link.clear_selection();
    first.paint(&mut painter);
    assert!(first.selected_points().is_empty());
    assert_eq!(second.selected_points().len(), 3);
}

#[test]
fn test_canonical_views_keep_box_on_geometry() {
    let table = create_lattice_table();
    let mut chart = create_chart(&table);
    let mut painter = RecordingPainter::new();

    for key in ['x', 'X', 'y', 'Y', 'z', 'Z'] {
        assert!(chart.key_press_event(&KeyEvent::new(key)));
        painter.clear();
        assert!(chart.paint(&mut painter));
        // Quarter and half turns about the box center map the box onto itself
        for (a, b) in painter.projected_lines() {
            for p in [a, b] {
                for c in [p.x, p.y, p.z] {
                    assert!((c - 100.0).abs() < 1e-6 || (c - 300.0).abs() < 1e-6, "{:?}", p);
                }
            }
        }
        // Away from the edges nothing is clipped
        assert!(chart.visible_set().len() >= 8);
    }
}

#[test]
fn test_zoom_pushes_points_out_of_the_box() {
    let table = create_lattice_table();
    let mut chart = create_chart(&table);
    let mut painter = RecordingPainter::new();
    chart.mouse_wheel_event(&MouseEvent::default(), -10);
    chart.paint(&mut painter);
    assert_eq!(chart.visible_set().len(), 64);
    assert_eq!(chart.visible_set().colors.len(), 64 * 3);

    // Back to 2x: the outer lattice layer leaves the box, the inner 2x2x2 stays
    chart.mouse_wheel_event(&MouseEvent::default(), 20);
    chart.paint(&mut painter);
    assert_eq!(chart.visible_set().len(), 8);
    let center = Point3d::new(200.0, 200.0, 200.0);
    for p in &chart.visible_set().points {
        let screen = chart.point_transform().transform_point(&chartxyz_core::to_point3d(p));
        assert!((screen - center).abs().max() <= 100.0 + 1e-6);
    }
}

#[test]
fn test_observer_sees_interactions() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let table = create_lattice_table();
    let mut chart = create_chart(&table);
    let zoom = Rc::new(RefCell::new(1.0_f64));
    let sink = zoom.clone();
    chart.add_observer(move |event| {
        if let InteractionEvent::Zoomed { factor } = event {
            *sink.borrow_mut() *= factor;
        }
    });
    chart.mouse_wheel_event(&MouseEvent::default(), 10);
    let drag = MouseEvent::drag(Vector2::new(0.0, 300.0), Vector2::new(0.0, 200.0), MouseButton::Right);
    chart.mouse_move_event(&drag);
    assert_relative_eq!(*zoom.borrow(), chart.view().zoom_factor(), epsilon = 1e-12);
}

#[test]
fn test_svg_export() {
    let table = create_lattice_table();
    let mut chart = create_chart(&table);
    chart.look(CanonicalView::LookDownX);

    let path = "test_chart_export.svg";
    save_chart_svg(&mut chart, path).unwrap();
    let svg = std::fs::read_to_string(path).unwrap();
    let _ = std::fs::remove_file(path);

    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<line").count(), 12);
    assert_eq!(svg.matches("<circle").count(), chart.visible_set().len());
    assert_eq!(svg.matches("<text").count(), 3);
}
