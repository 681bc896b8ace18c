use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::fmt;

/// One CSS transform function. Translations are in px, rotations in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    TranslateX(f32),
    TranslateY(f32),
    TranslateZ(f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
}

impl TransformOp {
    pub fn matrix(self) -> Mat4 {
        match self {
            TransformOp::TranslateX(px) => Mat4::from_translation(Vec3::new(px, 0.0, 0.0)),
            TransformOp::TranslateY(px) => Mat4::from_translation(Vec3::new(0.0, px, 0.0)),
            TransformOp::TranslateZ(px) => Mat4::from_translation(Vec3::new(0.0, 0.0, px)),
            TransformOp::RotateX(deg) => Mat4::from_rotation_x(deg.to_radians()),
            TransformOp::RotateY(deg) => Mat4::from_rotation_y(deg.to_radians()),
            TransformOp::RotateZ(deg) => Mat4::from_rotation_z(deg.to_radians()),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::TranslateX(px) => write!(f, "translateX({}px)", px),
            TransformOp::TranslateY(px) => write!(f, "translateY({}px)", px),
            TransformOp::TranslateZ(px) => write!(f, "translateZ({}px)", px),
            TransformOp::RotateX(deg) => write!(f, "rotateX({}deg)", deg),
            TransformOp::RotateY(deg) => write!(f, "rotateY({}deg)", deg),
            TransformOp::RotateZ(deg) => write!(f, "rotateZ({}deg)", deg),
        }
    }
}

/// Ordered list of transform functions applied to a surface.
///
/// Composition follows CSS: the list `a b c` yields the matrix `A * B * C`,
/// so the last operation is the first one applied to a point. Operations are
/// never reordered or merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformChain {
    ops: SmallVec<[TransformOp; 4]>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, op: TransformOp) {
        self.ops.push(op);
    }

    pub fn translate_x(mut self, px: f32) -> Self {
        self.push(TransformOp::TranslateX(px));
        self
    }

    pub fn translate_y(mut self, px: f32) -> Self {
        self.push(TransformOp::TranslateY(px));
        self
    }

    pub fn translate_z(mut self, px: f32) -> Self {
        self.push(TransformOp::TranslateZ(px));
        self
    }

    pub fn rotate_x(mut self, deg: f32) -> Self {
        self.push(TransformOp::RotateX(deg));
        self
    }

    pub fn rotate_y(mut self, deg: f32) -> Self {
        self.push(TransformOp::RotateY(deg));
        self
    }

    pub fn rotate_z(mut self, deg: f32) -> Self {
        self.push(TransformOp::RotateZ(deg));
        self
    }

    /// Appends `other` after this chain.
    pub fn then(&self, other: &TransformChain) -> TransformChain {
        let mut out = self.clone();
        out.ops.extend(other.ops.iter().copied());
        out
    }

    pub fn matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |acc, op| acc * op.matrix())
    }

    /// CSS `transform` value; an empty chain renders as `none`.
    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.to_string()
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
