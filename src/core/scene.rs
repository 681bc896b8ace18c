use crate::core::constants::PERSPECTIVE_PX;
use crate::core::primitive::{Interaction, Primitive};
use crate::core::view::WorldPose;
use glam::{Mat4, Vec2, Vec3};

/// A primitive resolved against the scene root.
///
/// Nodes are stored in depth-first pre-order; the position in that order is
/// shared with anything that mirrors the tree (the DOM).
#[derive(Clone, Debug)]
pub struct Placed {
    /// Box coordinates → world-root coordinates (before the camera pose).
    pub matrix: Mat4,
    pub size: Vec2,
    /// Nearest ancestor-or-self interaction that is not `Inert`.
    pub interaction: Interaction,
    /// Set when this node or an ancestor ignores the pointer.
    pub passthrough: bool,
    /// Nearest ancestor-or-self carrying a hover lift.
    pub lift_owner: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub interaction: Interaction,
    pub lift_owner: Option<usize>,
    /// Ray parameter; 1.0 is the screen plane, smaller is closer to the eye.
    pub distance: f32,
}

pub struct Scene {
    roots: Vec<Primitive>,
    placed: Vec<Placed>,
}

impl Scene {
    pub fn new(roots: Vec<Primitive>) -> Self {
        let mut placed = Vec::new();
        for root in &roots {
            flatten_into(root, None, Mat4::IDENTITY, &mut placed);
        }
        Self { roots, placed }
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Depth-first walk handing each primitive its pre-order index and parent.
    pub fn walk<F: FnMut(usize, Option<usize>, &Primitive)>(&self, mut visit: F) {
        let mut next = 0usize;
        for root in &self.roots {
            walk_node(root, None, &mut next, &mut visit);
        }
    }

    /// Nearest pointer-receiving surface under a viewport-centred point,
    /// evaluated against `pose` (which may be mid-transition).
    pub fn hit_test(&self, pose: &WorldPose, point: Vec2) -> Option<Hit> {
        let world = pose.matrix();
        let eye = Vec3::new(0.0, 0.0, PERSPECTIVE_PX);
        let dir = Vec3::new(point.x, point.y, -PERSPECTIVE_PX);
        let mut best: Option<Hit> = None;
        for p in &self.placed {
            if p.passthrough || p.size.x <= 0.0 || p.size.y <= 0.0 {
                continue;
            }
            let m = world * p.matrix;
            let quad = [
                m.transform_point3(Vec3::ZERO),
                m.transform_point3(Vec3::new(p.size.x, 0.0, 0.0)),
                m.transform_point3(Vec3::new(p.size.x, p.size.y, 0.0)),
                m.transform_point3(Vec3::new(0.0, p.size.y, 0.0)),
            ];
            if let Some(t) = ray_quad(eye, dir, &quad) {
                match best {
                    Some(b) if t >= b.distance => {}
                    _ => {
                        best = Some(Hit {
                            interaction: p.interaction,
                            lift_owner: p.lift_owner,
                            distance: t,
                        })
                    }
                }
            }
        }
        best
    }
}

#[cfg(test)]
impl Scene {
    /// Pre-order index of the first primitive called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let mut found = None;
        self.walk(|i, _, prim| {
            if found.is_none() && prim.name == name {
                found = Some(i);
            }
        });
        found
    }

    /// Screen position (viewport-centred px) of a node's box centre, or
    /// `None` when it lies at or behind the eye.
    pub fn project_center(&self, pose: &WorldPose, node: usize) -> Option<Vec2> {
        let p = self.placed.get(node)?;
        let centre = (p.size * 0.5).extend(0.0);
        project_point((pose.matrix() * p.matrix).transform_point3(centre))
    }
}

fn flatten_into(prim: &Primitive, parent: Option<usize>, parent_m: Mat4, out: &mut Vec<Placed>) {
    let index = out.len();
    let (inherited, passthrough, lift) = match parent.map(|i| &out[i]) {
        Some(pp) => (pp.interaction, pp.passthrough, pp.lift_owner),
        None => (Interaction::Inert, false, None),
    };
    let interaction = match prim.interaction {
        Interaction::Inert => inherited,
        own => own,
    };
    let lift_owner = if prim.hover_lift.is_some() {
        Some(index)
    } else {
        lift
    };
    let matrix = parent_m * prim.local_matrix();
    out.push(Placed {
        matrix,
        size: Vec2::new(prim.width, prim.height),
        interaction,
        passthrough: passthrough || prim.passthrough,
        lift_owner,
    });
    for child in &prim.children {
        flatten_into(child, Some(index), matrix, out);
    }
}

fn walk_node<F: FnMut(usize, Option<usize>, &Primitive)>(
    prim: &Primitive,
    parent: Option<usize>,
    next: &mut usize,
    visit: &mut F,
) {
    let index = *next;
    *next += 1;
    visit(index, parent, prim);
    for child in &prim.children {
        walk_node(child, Some(index), next, visit);
    }
}

/// Perspective projection onto the z=0 screen plane with the eye at
/// `(0, 0, PERSPECTIVE_PX)`.
#[cfg(test)]
pub fn project_point(v: Vec3) -> Option<Vec2> {
    let w = PERSPECTIVE_PX - v.z;
    if w <= 1e-3 {
        return None;
    }
    let s = PERSPECTIVE_PX / w;
    Some(Vec2::new(v.x * s, v.y * s))
}

#[inline]
pub fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-9 {
        return None;
    }
    let inv = 1.0 / det;
    let s = origin - a;
    let u = s.dot(p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv;
    (t > 1e-6).then_some(t)
}

/// Ray against a planar quad given as four corners in winding order.
#[inline]
pub fn ray_quad(origin: Vec3, dir: Vec3, quad: &[Vec3; 4]) -> Option<f32> {
    let t1 = ray_triangle(origin, dir, quad[0], quad[1], quad[2]);
    let t2 = ray_triangle(origin, dir, quad[0], quad[2], quad[3]);
    match (t1, t2) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
