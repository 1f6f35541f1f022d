//! SVG rendering of a mesh.
//!
//! Every element is drawn as a black outline: an open polyline for
//! two-vertex elements, a closed polygon otherwise. Elements selected with
//! [`SvgRenderer::highlight`] are overdrawn with one arrow per edge in
//! traversal direction, coloured by element position. With
//! [`DrawOptions::annotate`] the vertices are marked and numbered and a
//! legend lists each highlighted edge as `position: (from, to)`.
//!
//! The view is square, centred on the mesh, with half-extent equal to the
//! larger side of the bounding box.

use std::io::Write;

use crate::geometry::bounds::BoundingBox;
use crate::io::MeshWriter;
use crate::mesh_error::MeshError;
use crate::topology::mesh::Mesh;

const TITLE_HEIGHT: f64 = 28.0;
const LEGEND_WIDTH: f64 = 150.0;
const LEGEND_LINE: f64 = 16.0;
const OUTLINE_WIDTH: f64 = 1.0;
const ARROW_WIDTH: f64 = 3.0;
const ARROW_HEAD: f64 = 10.0;
const VERTEX_RADIUS: f64 = 3.0;

/// Named colour schemes for highlighted elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Cividis,
    Viridis,
    Plasma,
    Gray,
}

impl Colormap {
    /// Look up a scheme by its usual name.
    pub fn from_name(name: &str) -> Result<Self, MeshError> {
        match name.to_ascii_lowercase().as_str() {
            "cividis" => Ok(Colormap::Cividis),
            "viridis" => Ok(Colormap::Viridis),
            "plasma" => Ok(Colormap::Plasma),
            "gray" | "grey" => Ok(Colormap::Gray),
            _ => Err(MeshError::UnknownColormap(name.to_string())),
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Cividis => &[
                [0x00, 0x20, 0x4d],
                [0x41, 0x4d, 0x6b],
                [0x7c, 0x7b, 0x78],
                [0xbc, 0xaf, 0x6f],
                [0xff, 0xea, 0x46],
            ],
            Colormap::Viridis => &[
                [0x44, 0x01, 0x54],
                [0x3b, 0x52, 0x8b],
                [0x21, 0x91, 0x8c],
                [0x5e, 0xc9, 0x62],
                [0xfd, 0xe7, 0x25],
            ],
            Colormap::Plasma => &[
                [0x0d, 0x08, 0x87],
                [0x7e, 0x03, 0xa8],
                [0xcc, 0x47, 0x78],
                [0xf8, 0x95, 0x40],
                [0xf0, 0xf9, 0x21],
            ],
            Colormap::Gray => &[[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]],
        }
    }

    /// Colour at `t` in `[0, 1]` (clamped), linearly interpolated between stops.
    pub fn rgb(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lo as f64;
        let mut out = [0u8; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let a = f64::from(stops[lo][c]);
            let b = f64::from(stops[lo + 1][c]);
            *slot = (a + (b - a) * frac).round() as u8;
        }
        out
    }

    /// Colour for element `position` among `count` elements, as `#rrggbb`.
    pub fn hex_for(self, position: usize, count: usize) -> String {
        let t = if count > 1 {
            position as f64 / (count - 1) as f64
        } else {
            0.0
        };
        let [r, g, b] = self.rgb(t);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Display options for [`SvgRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    pub colormap: Colormap,
    pub title: String,
    /// Mark and number vertices, and list highlighted edges in a legend.
    pub annotate: bool,
    /// Side length of the square plot area in pixels.
    pub size_px: f64,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            colormap: Colormap::default(),
            title: String::new(),
            annotate: false,
            size_px: 480.0,
        }
    }
}

/// Renders a mesh, optionally highlighting an element set, as SVG.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    options: DrawOptions,
    highlight: Vec<usize>,
}

impl SvgRenderer {
    pub fn new(options: DrawOptions) -> Self {
        Self {
            options,
            highlight: Vec::new(),
        }
    }

    /// Highlight the elements at `positions` (typically an element set).
    pub fn highlight(mut self, positions: &[usize]) -> Self {
        self.highlight = positions.to_vec();
        self
    }

    /// Render into a string.
    pub fn render(&self, mesh: &Mesh) -> Result<String, MeshError> {
        let mut buf = Vec::new();
        self.write(&mut buf, mesh)?;
        String::from_utf8(buf).map_err(|e| MeshError::Io(e.to_string()))
    }
}

/// Maps mesh coordinates into the SVG plot area.
struct Frame {
    view: BoundingBox,
    scale: f64,
    top: f64,
}

impl Frame {
    fn project(&self, p: [f64; 2]) -> [f64; 2] {
        [
            (p[0] - self.view.min[0]) * self.scale,
            self.top + (self.view.max[1] - p[1]) * self.scale,
        ]
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn points_attr(points: &[[f64; 2]]) -> String {
    points
        .iter()
        .map(|[x, y]| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Consecutive vertex pairs of an element; closed unless it has two vertices.
fn element_edges(element: &[usize]) -> Vec<(usize, usize)> {
    let n = element.len();
    let edges = if n == 2 { 1 } else { n };
    (0..edges)
        .map(|j| (element[j], element[(j + 1) % n]))
        .collect()
}

fn write_arrow<W: Write>(
    writer: &mut W,
    from: [f64; 2],
    to: [f64; 2],
    color: &str,
) -> Result<(), MeshError> {
    let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return Ok(());
    }
    let head = ARROW_HEAD.min(0.4 * len);
    let (ux, uy) = (dx / len, dy / len);
    let base = [to[0] - ux * head, to[1] - uy * head];
    let half = 0.5 * head;
    let wing_a = [base[0] - uy * half, base[1] + ux * half];
    let wing_b = [base[0] + uy * half, base[1] - ux * half];
    writeln!(
        writer,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="{ARROW_WIDTH}"/>"#,
        from[0], from[1], base[0], base[1]
    )?;
    writeln!(
        writer,
        r#"<polygon points="{}" fill="{color}"/>"#,
        points_attr(&[to, wing_a, wing_b])
    )?;
    Ok(())
}

impl MeshWriter for SvgRenderer {
    fn write<W: Write>(&self, mut writer: W, mesh: &Mesh) -> Result<(), MeshError> {
        let options = &self.options;
        let size = options.size_px;
        let top = if options.title.is_empty() {
            0.0
        } else {
            TITLE_HEIGHT
        };

        let view = mesh
            .bounding_box()
            .unwrap_or(BoundingBox {
                min: [0.0, 0.0],
                max: [0.0, 0.0],
            })
            .square_viewport();
        let frame = Frame {
            view,
            scale: size / view.width(),
            top,
        };

        let mut selected = vec![false; mesh.nelements()];
        for &pos in &self.highlight {
            match selected.get_mut(pos) {
                Some(flag) => *flag = true,
                None => log::warn!(
                    "svg: highlighted element {pos} outside 0..{}",
                    mesh.nelements()
                ),
            }
        }
        let show_legend = options.annotate && selected.iter().any(|&s| s);
        let width = if show_legend { size + LEGEND_WIDTH } else { size };
        let height = size + top;

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            writer,
            r#"<rect width="{width}" height="{height}" fill="white"/>"#
        )?;
        if !options.title.is_empty() {
            writeln!(
                writer,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="16">{}</text>"#,
                0.5 * size,
                0.7 * TITLE_HEIGHT,
                escape(&options.title)
            )?;
        }

        writeln!(writer, r#"<g id="elements" fill="none" stroke="black" stroke-width="{OUTLINE_WIDTH}">"#)?;
        for element in mesh.elements() {
            let points: Vec<[f64; 2]> = element
                .iter()
                .map(|&v| frame.project(mesh.vertices()[v]))
                .collect();
            let tag = if element.len() == 2 { "polyline" } else { "polygon" };
            writeln!(writer, r#"<{tag} points="{}"/>"#, points_attr(&points))?;
        }
        writeln!(writer, "</g>")?;

        let mut legend = Vec::new();
        writeln!(writer, r#"<g id="highlight">"#)?;
        for (pos, element) in mesh.elements().iter().enumerate() {
            if !selected[pos] {
                continue;
            }
            let color = options.colormap.hex_for(pos, mesh.nelements());
            for (a, b) in element_edges(element) {
                let from = frame.project(mesh.vertices()[a]);
                let to = frame.project(mesh.vertices()[b]);
                write_arrow(&mut writer, from, to, &color)?;
                legend.push((format!("{pos:2}: ({a}, {b})"), color.clone()));
            }
        }
        writeln!(writer, "</g>")?;

        if options.annotate {
            writeln!(writer, r#"<g id="vertices" font-size="11">"#)?;
            for (idx, &v) in mesh.vertices().iter().enumerate() {
                let [x, y] = frame.project(v);
                writeln!(
                    writer,
                    r#"<circle cx="{x:.2}" cy="{y:.2}" r="{VERTEX_RADIUS}" fill="black"/>"#
                )?;
                writeln!(
                    writer,
                    r#"<text x="{:.2}" y="{:.2}">{idx}</text>"#,
                    x + VERTEX_RADIUS + 1.0,
                    y - VERTEX_RADIUS - 1.0
                )?;
            }
            writeln!(writer, "</g>")?;
        }

        if show_legend {
            writeln!(writer, r#"<g id="legend" font-size="12" font-family="monospace">"#)?;
            for (line, (label, color)) in legend.iter().enumerate() {
                let y = top + LEGEND_LINE * (line + 1) as f64;
                writeln!(
                    writer,
                    r#"<text x="{:.2}" y="{y:.2}" fill="{color}" xml:space="preserve">{}</text>"#,
                    size + 10.0,
                    escape(label)
                )?;
            }
            writeln!(writer, "</g>")?;
        }

        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_and_segment() -> Mesh {
        Mesh::new(
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [2.0, 2.0]],
            vec![vec![0, 1, 2], vec![2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn colormap_lookup() {
        assert_eq!(Colormap::from_name("Viridis"), Ok(Colormap::Viridis));
        assert_eq!(Colormap::from_name("grey"), Ok(Colormap::Gray));
        assert_eq!(
            Colormap::from_name("jet"),
            Err(MeshError::UnknownColormap("jet".into()))
        );
    }

    #[test]
    fn colormap_endpoints() {
        assert_eq!(Colormap::Gray.rgb(0.0), [0, 0, 0]);
        assert_eq!(Colormap::Gray.rgb(1.0), [255, 255, 255]);
        assert_eq!(Colormap::Gray.rgb(2.0), [255, 255, 255]);
        assert_eq!(Colormap::Cividis.hex_for(0, 12), "#00204d");
        assert_eq!(Colormap::Cividis.hex_for(11, 12), "#ffea46");
        assert_eq!(Colormap::Viridis.hex_for(0, 1), "#440154");
    }

    #[test]
    fn outlines_every_element() {
        let svg = SvgRenderer::default().render(&triangle_and_segment()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon points").count(), 1);
        assert_eq!(svg.matches("<polyline points").count(), 1);
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn highlight_draws_one_arrow_per_edge() {
        let options = DrawOptions {
            annotate: true,
            title: "a < b".into(),
            ..Default::default()
        };
        let svg = SvgRenderer::new(options)
            .highlight(&[0, 7])
            .render(&triangle_and_segment())
            .unwrap();
        assert_eq!(svg.matches("<line ").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains(" 0: (2, 0)"));
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains(r#"width="630""#));
    }
}
