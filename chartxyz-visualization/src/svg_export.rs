//! SVG output
//!
//! [`SvgPainter`] projects the 3D matrix stack orthographically: the
//! transformed x and y become document coordinates and z is dropped. Scene
//! coordinates have y up, so y is flipped against the document height.

use crate::context::{
    estimate_string_bounds, Context3D, Justification, MatrixStack, Painter, Pen, TextProperty,
};
use chartxyz_core::{color_at, Point3f, Result, Transform3D};
use std::path::Path;
use svg::node::element::{Circle, Group, Line, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

fn rgb_string(color: [u8; 3]) -> String {
    format!("rgb({},{},{})", color[0], color[1], color[2])
}

/// 3D context writing into an SVG group
#[derive(Debug, Clone)]
pub struct SvgContext {
    stack: MatrixStack,
    pen: Pen,
    height: f32,
    group: Group,
    elements: usize,
}

impl SvgContext {
    fn new(height: f32) -> Self {
        Self {
            stack: MatrixStack::new(),
            pen: Pen::default(),
            height,
            group: Group::new(),
            elements: 0,
        }
    }

    fn project(&self, point: &Point3f) -> (f64, f64) {
        let p = self.stack.transform_point(point);
        (p.x, self.height as f64 - p.y)
    }

    fn push_element(&mut self, group: Group) {
        let current = std::mem::replace(&mut self.group, Group::new());
        self.group = current.add(group);
        self.elements += 1;
    }
}

impl Context3D for SvgContext {
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
        let radius = self.pen.width / 2.0;
        let mut batch = Group::new()
            .set("stroke", "none")
            .set("fill-opacity", self.pen.opacity());
        for (i, point) in points.iter().enumerate() {
            let (cx, cy) = self.project(point);
            let fill = colors.map_or(self.pen.rgb(), |c| color_at(c, i));
            batch = batch.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", radius)
                    .set("fill", rgb_string(fill)),
            );
        }
        self.push_element(batch);
    }

    fn draw_line(&mut self, start: &Point3f, end: &Point3f) {
        let (x1, y1) = self.project(start);
        let (x2, y2) = self.project(end);
        let line = Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", rgb_string(self.pen.rgb()))
            .set("stroke-opacity", self.pen.opacity())
            .set("stroke-width", self.pen.width);
        self.push_element(Group::new().add(line));
    }
}

/// A painter producing an SVG document of the given pixel size
#[derive(Debug, Clone)]
pub struct SvgPainter {
    width: f32,
    height: f32,
    background: Option<[u8; 3]>,
    context: SvgContext,
    text_prop: TextProperty,
    text: Group,
}

impl SvgPainter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: Some([255, 255, 255]),
            context: SvgContext::new(height),
            text_prop: TextProperty::default(),
            text: Group::new(),
        }
    }

    /// Fill the page before drawing, or leave it transparent with `None`
    pub fn with_background(mut self, background: Option<[u8; 3]>) -> Self {
        self.background = background;
        self
    }

    /// Number of point batches and lines drawn so far
    pub fn element_count(&self) -> usize {
        self.context.elements
    }

    pub fn document(&self) -> Document {
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .set("width", self.width)
            .set("height", self.height);
        if let Some(background) = self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("fill", rgb_string(background)),
            );
        }
        document
            .add(self.context.group.clone())
            .add(self.text.clone())
    }

    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        svg::save(path, &self.document())?;
        log::debug!(target: "chartxyz", "wrote {} elements to {}", self.element_count(), path.display());
        Ok(())
    }
}

impl Painter for SvgPainter {
    fn context_3d(&mut self) -> Option<&mut dyn Context3D> {
        Some(&mut self.context)
    }

    fn apply_text_prop(&mut self, prop: &TextProperty) {
        self.text_prop = prop.clone();
    }

    fn compute_string_bounds(&mut self, text: &str) -> [f32; 4] {
        estimate_string_bounds(text, &self.text_prop)
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        let prop = &self.text_prop;
        let anchor = match prop.justification {
            Justification::Left => "start",
            Justification::Centered => "middle",
            Justification::Right => "end",
        };
        let [r, g, b] = prop.color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        let y = self.height - y;
        let mut element = Text::new()
            .set("x", x)
            .set("y", y)
            .set("font-family", prop.font_family.as_str())
            .set("font-size", prop.font_size)
            .set("text-anchor", anchor)
            .set("fill", rgb_string([r, g, b]))
            .add(TextNode::new(text));
        if prop.orientation != 0.0 {
            element = element.set(
                "transform",
                format!("rotate({} {} {})", -prop.orientation, x, y),
            );
        }
        let current = std::mem::replace(&mut self.text, Group::new());
        self.text = current.add(element);
    }
}
