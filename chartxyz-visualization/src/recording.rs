//! A painter that records draw calls instead of rasterizing them

use crate::context::{estimate_string_bounds, Context3D, MatrixStack, Painter, Pen, TextProperty};
use chartxyz_core::{to_point3d, Point3d, Point3f, Transform3D};

/// One recorded call, with the transform that was current when it was made
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Points {
        points: Vec<Point3f>,
        colors: Option<Vec<u8>>,
        pen: Pen,
        transform: Transform3D,
    },
    Line {
        start: Point3f,
        end: Point3f,
        pen: Pen,
        transform: Transform3D,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        prop: TextProperty,
    },
}

/// The recording [`Context3D`]
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    stack: MatrixStack,
    pen: Pen,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }
}

impl Context3D for RecordingContext {
    fn push_matrix(&mut self) {
        self.stack.push();
    }

    fn pop_matrix(&mut self) {
        self.stack.pop();
    }

    fn append_transform(&mut self, transform: &Transform3D) {
        self.stack.append(transform);
    }

    fn apply_pen(&mut self, pen: &Pen) {
        self.pen = *pen;
    }

    fn draw_points(&mut self, points: &[Point3f], colors: Option<&[u8]>) {
        self.commands.push(DrawCommand::Points {
            points: points.to_vec(),
            colors: colors.map(<[u8]>::to_vec),
            pen: self.pen,
            transform: *self.stack.current(),
        });
    }

    fn draw_line(&mut self, start: &Point3f, end: &Point3f) {
        self.commands.push(DrawCommand::Line {
            start: *start,
            end: *end,
            pen: self.pen,
            transform: *self.stack.current(),
        });
    }
}

/// The recording [`Painter`]. Text goes into its own command list, 3D calls
/// into the context's.
#[derive(Debug, Clone)]
pub struct RecordingPainter {
    context: Option<RecordingContext>,
    text_prop: TextProperty,
    text: Vec<DrawCommand>,
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self {
            context: Some(RecordingContext::new()),
            text_prop: TextProperty::default(),
            text: Vec::new(),
        }
    }

    /// A painter without 3D support
    pub fn without_context() -> Self {
        Self {
            context: None,
            ..Self::new()
        }
    }

    pub fn context(&self) -> Option<&RecordingContext> {
        self.context.as_ref()
    }

    /// Recorded 3D commands, empty without a context
    pub fn commands_3d(&self) -> &[DrawCommand] {
        match &self.context {
            Some(context) => context.commands(),
            None => &[],
        }
    }

    pub fn text_commands(&self) -> &[DrawCommand] {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point3f, &Point3f, &Transform3D)> {
        self.commands_3d().iter().filter_map(|c| match c {
            DrawCommand::Line {
                start,
                end,
                transform,
                ..
            } => Some((start, end, transform)),
            _ => None,
        })
    }

    /// Point batches in draw order
    pub fn point_batches(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands_3d()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Points { .. }))
    }

    /// Drawn lines with both ends pushed through their transforms
    pub fn projected_lines(&self) -> Vec<(Point3d, Point3d)> {
        self.lines()
            .map(|(a, b, t)| (t.transform_point(&to_point3d(a)), t.transform_point(&to_point3d(b))))
            .collect()
    }

    pub fn clear(&mut self) {
        if let Some(context) = &mut self.context {
            *context = RecordingContext::new();
        }
        self.text.clear();
    }
}

impl Painter for RecordingPainter {
    fn context_3d(&mut self) -> Option<&mut dyn Context3D> {
        match &mut self.context {
            Some(context) => Some(context),
            None => None,
        }
    }

    fn apply_text_prop(&mut self, prop: &TextProperty) {
        self.text_prop = prop.clone();
    }

    fn compute_string_bounds(&mut self, text: &str) -> [f32; 4] {
        estimate_string_bounds(text, &self.text_prop)
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.text.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            prop: self.text_prop.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartxyz_core::Vector3;

    #[test]
    fn test_records_transform_and_pen() {
        let mut painter = RecordingPainter::new();
        let pen = Pen::new([1, 2, 3, 255], 4.0);
        {
            let ctx = painter.context_3d().unwrap();
            ctx.push_matrix();
            ctx.append_transform(&Transform3D::translation(Vector3::new(1.0, 0.0, 0.0)));
            ctx.apply_pen(&pen);
            ctx.draw_line(&Point3f::origin(), &Point3f::new(0.0, 1.0, 0.0));
            ctx.pop_matrix();
        }
        let lines = painter.projected_lines();
        assert_eq!(lines, vec![(Point3d::new(1.0, 0.0, 0.0), Point3d::new(1.0, 1.0, 0.0))]);
        match &painter.commands_3d()[0] {
            DrawCommand::Line { pen: p, .. } => assert_eq!(*p, pen),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(painter.context().unwrap().stack_depth(), 0);
    }

    #[test]
    fn test_without_context() {
        let mut painter = RecordingPainter::without_context();
        assert!(painter.context_3d().is_none());
        painter.draw_string(1.0, 2.0, "x");
        assert_eq!(painter.text_commands().len(), 1);
        assert!(painter.commands_3d().is_empty());
    }
}
