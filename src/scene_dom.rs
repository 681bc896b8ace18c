use crate::core::constants::PERSPECTIVE_PX;
use crate::core::{Fade, Primitive, Scene, SurfaceId, WorldPose};
use crate::dom;
use web_sys as web;

struct NodeEl {
    el: web::HtmlElement,
    /// Transform at rest and, for lift owners, while hovered.
    rest: String,
    lifted: Option<String>,
}

/// DOM mirror of a [`Scene`]: one absolutely positioned element per
/// primitive, nested like the primitives, under a single world element.
pub struct SceneDom {
    viewport: web::HtmlElement,
    world: web::HtmlElement,
    nodes: Vec<NodeEl>,
    faded: Vec<(web::HtmlElement, Fade)>,
    mounts: Vec<(SurfaceId, web::HtmlElement)>,
    hovered: Option<usize>,
}

impl SceneDom {
    pub fn build(
        document: &web::Document,
        parent: &web::Element,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let viewport = dom::create_div(document, "room-viewport")?;
        dom::set_style_property(&viewport, "perspective", &format!("{}px", PERSPECTIVE_PX));
        let world = dom::create_div(document, "room-world")?;
        viewport.append_child(&world).map_err(dom::js_err)?;

        let mut nodes: Vec<NodeEl> = Vec::with_capacity(scene.len());
        let mut faded = Vec::new();
        let mut surfaces: Vec<(SurfaceId, usize)> = Vec::new();
        let mut failure: Option<anyhow::Error> = None;

        scene.walk(|index, parent_index, prim| {
            if failure.is_some() {
                return;
            }
            match element_for(document, prim) {
                Ok(el) => {
                    let host: &web::HtmlElement = match parent_index {
                        Some(p) => &nodes[p].el,
                        None => &world,
                    };
                    if let Err(e) = host.append_child(&el) {
                        failure = Some(dom::js_err(e));
                        return;
                    }
                    if let Some(fade) = prim.fade {
                        faded.push((el.clone(), fade));
                    }
                    if let Some(id) = prim.surface {
                        surfaces.push((id, index));
                    }
                    nodes.push(NodeEl {
                        el,
                        rest: prim.chain.to_css(),
                        lifted: prim
                            .hover_lift
                            .as_ref()
                            .map(|lift| prim.chain.then(lift).to_css()),
                    });
                }
                Err(e) => failure = Some(e),
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }

        // Mounted last so the content sits above the primitive's own children.
        let mut mounts = Vec::with_capacity(surfaces.len());
        for (id, index) in surfaces {
            let mount = dom::create_div(document, "surface-mount")?;
            _ = mount.set_attribute("data-mount", id.as_str());
            nodes[index].el.append_child(&mount).map_err(dom::js_err)?;
            mounts.push((id, mount));
        }

        parent.append_child(&viewport).map_err(dom::js_err)?;
        log::info!("scene mounted: {} primitives", nodes.len());

        let dom = Self {
            viewport,
            world,
            nodes,
            faded,
            mounts,
            hovered: None,
        };
        dom.apply_night(0.0);
        Ok(dom)
    }

    pub fn viewport(&self) -> &web::HtmlElement {
        &self.viewport
    }

    pub fn mount(&self, id: SurfaceId) -> Option<&web::HtmlElement> {
        self.mounts.iter().find(|(m, _)| *m == id).map(|(_, el)| el)
    }

    pub fn apply_pose(&self, pose: &WorldPose) {
        dom::set_style_property(&self.world, "transform", &pose.to_css());
    }

    pub fn apply_night(&self, level: f32) {
        for (el, fade) in &self.faded {
            dom::set_style_property(el, "opacity", &format!("{:.3}", fade.at(level)));
        }
    }

    /// Moves the hover lift to `owner`, restoring the previous one.
    pub fn set_hover(&mut self, owner: Option<usize>) {
        if self.hovered == owner {
            return;
        }
        if let Some(prev) = self.hovered.and_then(|i| self.nodes.get(i)) {
            dom::set_style_property(&prev.el, "transform", &prev.rest);
        }
        if let Some(next) = owner.and_then(|i| self.nodes.get(i)) {
            if let Some(lifted) = &next.lifted {
                dom::set_style_property(&next.el, "transform", lifted);
            }
        }
        self.hovered = owner;
    }

    pub fn remove(&self) {
        self.viewport.remove();
    }
}

fn element_for(document: &web::Document, prim: &Primitive) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_div(document, "object-3d")?;
    _ = el.class_list().add_1(prim.name);
    let mut css = prim.to_css();
    if prim.passthrough {
        css.push_str("pointer-events:none;");
    }
    dom::set_style(&el, &css);
    if let Some(action) = prim.interaction.action() {
        _ = el.class_list().add_1("interactive");
        _ = el.set_attribute("data-action", &action.encode());
    }
    Ok(el)
}
