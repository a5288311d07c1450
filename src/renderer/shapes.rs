//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in field pixels (origin top-left,
//! y down). `RenderState` maps them to clip space.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::field::FieldSize;
use crate::sim::{GameState, Player, Wall};
use crate::starfield::{Meteor, Starfield};

/// Segments used for the pig's circles
const CIRCLE_SEGMENTS: usize = 32;
/// Meteor streak thickness in pixels
const METEOR_LINE_WIDTH: f32 = 2.0;

/// Axis-aligned rectangle from its top-left corner
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let (x1, y1) = (x + w, y + h);
    out.extend_from_slice(&[
        Vertex::new(x, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x, y, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x, y1, color),
    ]);
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radius;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p0.x, p0.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
    }
}

/// Line segment with a color gradient from `from` to `to`
fn gradient_line(
    out: &mut Vec<Vertex>,
    start: Vec2,
    end: Vec2,
    width: f32,
    from: [f32; 4],
    to: [f32; 4],
) {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let offset = Vec2::new(-dir.y, dir.x) * (width * 0.5);
    let (a, b) = (start + offset, start - offset);
    let (c, d) = (end + offset, end - offset);
    out.extend_from_slice(&[
        Vertex::new(a.x, a.y, from),
        Vertex::new(b.x, b.y, from),
        Vertex::new(c.x, c.y, to),
        Vertex::new(b.x, b.y, from),
        Vertex::new(d.x, d.y, to),
        Vertex::new(c.x, c.y, to),
    ]);
}

/// Meteor streak: bright head fading to a transparent tail
pub fn meteor(out: &mut Vec<Vertex>, meteor: &Meteor) {
    let (tx, ty) = meteor.tail();
    let mut head = colors::METEOR;
    head[3] = meteor.opacity;
    let mut tail = colors::METEOR;
    tail[3] = 0.0;
    gradient_line(
        out,
        Vec2::new(meteor.x, meteor.y),
        Vec2::new(tx, ty),
        METEOR_LINE_WIDTH,
        head,
        tail,
    );
}

/// Both segments of a wall; the gap is left empty
pub fn wall(out: &mut Vec<Vertex>, wall: &Wall, field: FieldSize) {
    rect(out, wall.x, 0.0, wall.width, wall.top_height, colors::WALL);
    rect(
        out,
        wall.x,
        wall.bottom_y,
        wall.width,
        field.height() - wall.bottom_y,
        colors::WALL,
    );
}

/// The pig: body, snout on the leading side, one eye
pub fn pig(out: &mut Vec<Vertex>, player: &Player) {
    let pos = player.pos;
    let r = player.radius;
    circle(out, pos, r, colors::PIG_BODY);
    circle(out, pos + Vec2::new(r - 5.0, 0.0), r / 3.0, colors::PIG_SNOUT);
    circle(out, pos + Vec2::new(5.0, -5.0), 3.0, colors::PIG_EYE);
}

/// Full frame, back to front
pub fn scene(state: &GameState, starfield: &Starfield) -> Vec<Vertex> {
    let field = state.field;
    let mut out = Vec::with_capacity(
        6 + starfield.meteors.len() * 6 + state.walls.len() * 12 + CIRCLE_SEGMENTS * 9 + 6,
    );

    rect(
        &mut out,
        0.0,
        0.0,
        field.width(),
        field.height(),
        colors::BACKGROUND,
    );
    for m in &starfield.meteors {
        meteor(&mut out, m);
    }
    for w in &state.walls {
        wall(&mut out, w, field);
    }
    pig(&mut out, &state.player);

    if state.is_game_over() {
        rect(
            &mut out,
            0.0,
            0.0,
            field.width(),
            field.height(),
            colors::GAME_OVER_SHADE,
        );
    }

    out
}

/// Map field pixels (y down) to normalized device coordinates (y up)
#[inline]
pub fn field_to_ndc(x: f32, y: f32, field: FieldSize) -> (f32, f32) {
    (
        x / field.width() * 2.0 - 1.0,
        1.0 - y / field.height() * 2.0,
    )
}
