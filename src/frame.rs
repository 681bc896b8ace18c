use crate::constants::{HOVER_CLASS, HOVER_MIN_MOVE_PX, NIGHT_CLASS};
use crate::core::modal::{ModalFrame, CARD_TRANSITION, MODAL_TRANSITION};
use crate::core::pinboard::CARDS;
use crate::core::theme::THEME_TRANSITION;
use crate::core::{
    Action, Animator, AppState, Changes, ClockReading, Config, ContentContext, IconResolver,
    Scene, SurfaceId, WorldPose,
};
use crate::overlay::{ModalView, TopBar};
use crate::scene_dom::SceneDom;
use crate::surfaces::Surfaces;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animated scalar channels driven by the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimKey {
    Night,
    Modal,
    Card(u16),
}

/// Everything a mounted room needs between events and frames.
pub struct RoomContext {
    pub root: web::HtmlElement,
    pub state: AppState,
    pub scene: Scene,
    pub config: Config,
    pub icons: IconResolver,
    pub scene_dom: SceneDom,
    pub surfaces: Surfaces,
    pub top_bar: TopBar,
    pub modal: ModalView,
    pub animator: Animator<AnimKey>,
    epoch: Instant,
    last_pose: Option<WorldPose>,
    pointer: Option<Vec2>,
    last_pick: Option<Vec2>,
}

impl RoomContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root: web::HtmlElement,
        state: AppState,
        scene: Scene,
        config: Config,
        scene_dom: SceneDom,
        surfaces: Surfaces,
        top_bar: TopBar,
        modal: ModalView,
    ) -> Self {
        let mut animator = Animator::new();
        animator.set(AnimKey::Night, state.theme().night_level());
        animator.set(AnimKey::Modal, 0.0);
        for card in CARDS.iter() {
            let shown = state.pinboard().is_visible(card);
            animator.set(AnimKey::Card(card.id), if shown { 1.0 } else { 0.0 });
        }
        let mut ctx = Self {
            root,
            state,
            scene,
            config,
            icons: IconResolver::new(),
            scene_dom,
            surfaces,
            top_bar,
            modal,
            animator,
            epoch: Instant::now(),
            last_pose: None,
            pointer: None,
            last_pick: None,
        };
        ctx.top_bar.set_view(ctx.state.view());
        ctx.render_surfaces(&SurfaceId::ALL);
        ctx
    }

    /// Seconds since mount; the single clock for camera and animator.
    pub fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    pub fn dispatch(&mut self, action: Action) {
        let now = self.now();
        let changes = self.state.dispatch(action, now);
        self.apply(changes, now);
    }

    pub fn escape(&mut self) {
        let now = self.now();
        let changes = self.state.escape(now);
        self.apply(changes, now);
    }

    pub fn background_click(&mut self) {
        let now = self.now();
        let changes = self.state.background_click(now);
        self.apply(changes, now);
    }

    pub fn tick_clock(&mut self, reading: ClockReading) {
        let now = self.now();
        let changes = self.state.tick_clock(reading);
        self.apply(changes, now);
    }

    /// Viewport-centred pointer position, or `None` once it leaves.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    fn render_surfaces(&mut self, ids: &[SurfaceId]) {
        let ctx = ContentContext {
            catalog: self.state.catalog(),
            config: &self.config,
            icons: &self.icons,
        };
        for id in ids {
            self.surfaces.render(*id, &self.state, &ctx);
        }
        // Re-rendered cards must pick up in-flight presence values.
        let now = self.epoch.elapsed().as_secs_f64();
        for card in CARDS.iter() {
            if let Some(p) = self.animator.value(AnimKey::Card(card.id), now) {
                self.surfaces.apply_card(card.id, p);
            }
        }
    }

    fn apply(&mut self, changes: Changes, now: f64) {
        if changes.is_empty() {
            return;
        }
        if changes.view {
            self.top_bar.set_view(self.state.view());
        }
        if changes.theme {
            let theme = self.state.theme();
            self.animator
                .animate_to(AnimKey::Night, theme.night_level(), THEME_TRANSITION, now);
            let list = self.root.class_list();
            if theme.is_night() {
                _ = list.add_1(NIGHT_CLASS);
            } else {
                _ = list.remove_1(NIGHT_CLASS);
            }
        }
        if changes.project {
            match self.state.active_project() {
                Some(project) => {
                    self.modal.open(project);
                    self.animator
                        .animate_to(AnimKey::Modal, 1.0, MODAL_TRANSITION, now);
                }
                None => self
                    .animator
                    .animate_to(AnimKey::Modal, 0.0, MODAL_TRANSITION, now),
            }
        }
        if changes.filter {
            for card in CARDS.iter() {
                let target = if self.state.pinboard().is_visible(card) {
                    1.0
                } else {
                    0.0
                };
                self.animator
                    .animate_to(AnimKey::Card(card.id), target, CARD_TRANSITION, now);
            }
        }
        let mut dirty: Vec<SurfaceId> = Vec::new();
        if changes.monitor {
            dirty.push(SurfaceId::Monitor);
        }
        if changes.pinboard {
            dirty.push(SurfaceId::Pinboard);
        }
        if !dirty.is_empty() {
            self.render_surfaces(&dirty);
        }
        if changes.clock && !changes.monitor {
            self.surfaces.update_clock(&self.state.monitor().clock_text());
        }
    }

    pub fn frame(&mut self) {
        let now = self.now();

        let pose = self.state.camera().pose_at(now);
        let moved = self.last_pose != Some(pose);
        if moved {
            self.scene_dom.apply_pose(&pose);
            self.last_pose = Some(pose);
        }

        for (key, value) in self.animator.step(now) {
            match key {
                AnimKey::Night => self.scene_dom.apply_night(value),
                AnimKey::Modal => {
                    if value <= 0.0 && self.state.active_project().is_none() {
                        self.modal.close();
                    } else {
                        self.modal.apply_frame(&ModalFrame::at(value));
                    }
                }
                AnimKey::Card(id) => self.surfaces.apply_card(id, value),
            }
        }

        self.update_hover(&pose, moved);
    }

    // Picks against the pose being drawn this frame so hover follows the
    // geometry while the camera is still moving.
    fn update_hover(&mut self, pose: &WorldPose, moved: bool) {
        let pointer_moved = match (self.pointer, self.last_pick) {
            (Some(p), Some(q)) => p.distance(q) >= HOVER_MIN_MOVE_PX,
            (a, b) => a.is_some() != b.is_some(),
        };
        if !moved && !pointer_moved {
            return;
        }
        self.last_pick = self.pointer;
        let hit = self
            .pointer
            .and_then(|p| self.scene.hit_test(pose, p));
        self.scene_dom.set_hover(hit.and_then(|h| h.lift_owner));
        let clickable = hit.map_or(false, |h| h.interaction.action().is_some());
        let list = self.scene_dom.viewport().class_list();
        if clickable {
            _ = list.add_1(HOVER_CLASS);
        } else {
            _ = list.remove_1(HOVER_CLASS);
        }
    }

    pub fn remove(&self) {
        self.scene_dom.remove();
        self.surfaces.remove();
        self.top_bar.remove();
        self.modal.remove();
    }
}

/// `requestAnimationFrame` loop that stops and releases its closure on drop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<i32>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<RoomContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(0));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                return;
            }
            ctx.borrow_mut().frame();
            if let Some(id) = request_frame(&tick_clone) {
                handle_tick.set(id);
            }
        }) as Box<dyn FnMut()>));

        if let Some(id) = request_frame(&tick) {
            handle.set(id);
        }
        Self {
            tick,
            handle,
            running,
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.handle.get());
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}
