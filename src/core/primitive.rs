use crate::core::surface::SurfaceId;
use crate::core::theme::Fade;
use crate::core::transform::TransformChain;
use crate::core::ui::Action;
use crate::core::view::ViewState;
use glam::{Mat4, Vec3};

/// What a click on a primitive (or any of its descendants) asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    #[default]
    Inert,
    Navigate(ViewState),
    ToggleTheme,
}

impl Interaction {
    pub fn action(self) -> Option<Action> {
        match self {
            Interaction::Inert => None,
            Interaction::Navigate(view) => Some(Action::Navigate(view)),
            Interaction::ToggleTheme => Some(Action::ToggleTheme),
        }
    }
}

/// Opaque fill description, emitted as inline CSS.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paint {
    pub background: Option<String>,
    pub radius: Option<&'static str>,
    pub shadow: Option<&'static str>,
    pub extra: Option<&'static str>,
}

impl Paint {
    pub fn color(color: &str) -> Self {
        Self {
            background: Some(color.to_string()),
            ..Self::default()
        }
    }

    pub fn image(url: &str) -> Self {
        Self {
            background: Some(format!("url(\"{}\") center / cover no-repeat", url)),
            ..Self::default()
        }
    }

    pub fn radius(mut self, radius: &'static str) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn shadow(mut self, shadow: &'static str) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn extra(mut self, css: &'static str) -> Self {
        self.extra = Some(css);
        self
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(bg) = &self.background {
            css.push_str("background:");
            css.push_str(bg);
            css.push(';');
        }
        if let Some(r) = self.radius {
            css.push_str("border-radius:");
            css.push_str(r);
            css.push(';');
        }
        if let Some(s) = self.shadow {
            css.push_str("box-shadow:");
            css.push_str(s);
            css.push(';');
        }
        if let Some(x) = self.extra {
            css.push_str(x);
            if !x.ends_with(';') {
                css.push(';');
            }
        }
        css
    }
}

/// A positioned, sized and transformed rectangle: the atomic piece of the room.
///
/// The box spans `(left, top)..(left + width, top + height)` in the parent's
/// coordinates and is transformed about its own centre. Groups are 0x0 boxes
/// at the origin whose chain positions their children.
#[derive(Clone, Debug, Default)]
pub struct Primitive {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
    pub chain: TransformChain,
    pub paint: Paint,
    pub fade: Option<Fade>,
    pub interaction: Interaction,
    pub passthrough: bool,
    pub surface: Option<SurfaceId>,
    /// Extra transform appended to `chain` while the pointer rests on this subtree.
    pub hover_lift: Option<TransformChain>,
    pub children: Vec<Primitive>,
}

impl Primitive {
    pub fn group(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Box centred on the local origin.
    pub fn centered(name: &'static str, width: f32, height: f32) -> Self {
        Self::rect(name, -width * 0.5, -height * 0.5, width, height)
    }

    pub fn rect(name: &'static str, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            name,
            width,
            height,
            left,
            top,
            ..Self::default()
        }
    }

    pub fn chain(mut self, chain: TransformChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    pub fn fill(self, color: &str) -> Self {
        self.paint(Paint::color(color))
    }

    pub fn faded(mut self, fade: Fade) -> Self {
        self.fade = Some(fade);
        self
    }

    /// Stacks a full-size night variant over this primitive's day paint.
    pub fn night(self, color: &str) -> Self {
        let overlay = Primitive::rect("night", 0.0, 0.0, self.width, self.height)
            .paint(Paint {
                background: Some(color.to_string()),
                radius: self.paint.radius,
                ..Paint::default()
            })
            .faded(Fade::NIGHT_OVERLAY)
            .passthrough();
        self.child(overlay)
    }

    pub fn interactive(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    pub fn surface(mut self, id: SurfaceId) -> Self {
        self.surface = Some(id);
        self
    }

    pub fn hover_lift(mut self, lift: TransformChain) -> Self {
        self.hover_lift = Some(lift);
        self
    }

    pub fn child(mut self, child: Primitive) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Primitive>) -> Self {
        self.children.extend(children);
        self
    }

    /// Maps this box's own coordinates (origin at its top-left corner) into
    /// the parent's box coordinates.
    pub fn local_matrix(&self) -> Mat4 {
        let half = Vec3::new(self.width * 0.5, self.height * 0.5, 0.0);
        let origin = Vec3::new(self.left, self.top, 0.0) + half;
        Mat4::from_translation(origin) * self.chain.matrix() * Mat4::from_translation(-half)
    }

    /// Inline CSS for the box: placement, transform and paint.
    pub fn to_css(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;transform:{};{}",
            self.left,
            self.top,
            self.width,
            self.height,
            self.chain.to_css(),
            self.paint.to_css()
        )
    }
}
