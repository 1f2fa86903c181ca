//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::{FILL_OPACITY, OUTLINE_OPACITY};
use crate::sim::square::Square;
use crate::sketches::tentacle::Tentacle;

/// Corners of a square of edge `size`, turned by `spin` and centered on `center`.
///
/// Counter-clockwise from the bottom-left corner before rotation.
pub fn square_corners(center: Vec2, size: f32, spin: f32) -> [Vec2; 4] {
    let half = size / 2.0;
    let rot = Vec2::from_angle(spin);
    [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// Filled square as two triangles (translucent)
pub fn square_fill(square: &Square) -> Vec<Vertex> {
    let color = square.color.with_alpha(FILL_OPACITY);
    let [a, b, c, d] = square_corners(square.pos, square.size, square.spin);

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Square outline as a line list (four edges)
pub fn square_outline(square: &Square) -> Vec<Vertex> {
    let color = square.color.with_alpha(OUTLINE_OPACITY);
    let corners = square_corners(square.pos, square.size, square.spin);

    let mut vertices = Vec::with_capacity(8);
    for i in 0..4 {
        let p1 = corners[i];
        let p2 = corners[(i + 1) % 4];
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

/// Fill triangles and outline lines for a whole population
pub fn population(squares: &[Square]) -> (Vec<Vertex>, Vec<Vertex>) {
    let mut fill = Vec::with_capacity(squares.len() * 6);
    let mut outline = Vec::with_capacity(squares.len() * 8);
    for square in squares {
        fill.extend(square_fill(square));
        outline.extend(square_outline(square));
    }
    (fill, outline)
}

/// Tentacle links as a line list projected onto the xy plane
pub fn tentacle_lines(tentacle: &Tentacle) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(tentacle.segments.len() * 2);
    for (seg, next) in tentacle.links() {
        // Each link takes the color of the segment it starts from
        let color = seg.rgba();
        vertices.push(Vertex::new(seg.loc.x, seg.loc.y, color));
        vertices.push(Vertex::new(next.loc.x, next.loc.y, color));
    }
    vertices
}
