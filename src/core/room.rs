use crate::core::config::Config;
use crate::core::constants::{CONTACT_SHADOW, MONITOR_SIZE, PINBOARD_SIZE};
use crate::core::primitive::{Interaction, Paint, Primitive};
use crate::core::scene::Scene;
use crate::core::surface::SurfaceId;
use crate::core::theme::Fade;
use crate::core::transform::TransformChain as T;
use crate::core::view::ViewState;

impl Scene {
    /// The fixed room composition, offsets relative to the room origin.
    pub fn room(config: &Config) -> Scene {
        Scene::new(vec![
            back_wall(),
            window_wall(config),
            left_wall(),
            floor(),
            ceiling(),
            desk(),
            chair(),
            notebook(),
            pen_holder(),
            mouse(),
            plant(),
            lamp_base(),
            lamp_stem(),
            lamp_shade(),
            contact_shadow("monitor-shadow", 800.0, 200.0, Fade::new(0.6, 0.2)).chain(
                T::new()
                    .translate_x(-50.0)
                    .translate_y(200.0)
                    .translate_z(-600.0)
                    .rotate_x(90.0),
            ),
            monitor(),
            pinboard(),
        ])
    }
}

fn contact_shadow(name: &'static str, w: f32, h: f32, fade: Fade) -> Primitive {
    Primitive::centered(name, w, h)
        .paint(Paint::color(CONTACT_SHADOW))
        .faded(fade)
        .passthrough()
}

// Flat shadow lying on the surface below a group: rotated onto the floor
// plane, nudged back and sideways.
fn floor_shadow(name: &'static str, w: f32, h: f32, dx: f32, fade: Fade) -> Primitive {
    contact_shadow(name, w, h, fade).chain(
        T::new()
            .rotate_x(90.0)
            .translate_z(-1.0)
            .translate_x(dx),
    )
}

fn wainscot(count: usize, wall_width: f32, wall_height: f32) -> Vec<Primitive> {
    let panel_w = wall_width / count as f32;
    let panel_h = 1000.0;
    (0..count)
        .map(|i| {
            let frame_w = panel_w - 64.0;
            let frame_h = panel_h - 64.0;
            Primitive::rect(
                "wainscot-panel",
                i as f32 * panel_w,
                wall_height - panel_h,
                panel_w,
                panel_h,
            )
            .paint(Paint::color("#3a4f5e").shadow("inset 0 4px 0 #4a6274"))
            .night("#2a3b47")
            .child(
                Primitive::rect("wainscot-frame", 32.0, 32.0, frame_w, frame_h).paint(
                    Paint::default()
                        .radius("2px")
                        .shadow("inset 0 0 20px rgba(0,0,0,0.2)")
                        .extra("border:12px solid #2c3d4a"),
                ),
            )
            .child(
                Primitive::rect("wainscot-frame-night", 32.0, 32.0, frame_w, frame_h)
                    .paint(
                        Paint::default()
                            .radius("2px")
                            .shadow("inset 0 0 20px rgba(0,0,0,0.5)")
                            .extra("border:12px solid #1d2a33"),
                    )
                    .faded(Fade::NIGHT_OVERLAY)
                    .passthrough(),
            )
        })
        .collect()
}

fn back_wall() -> Primitive {
    Primitive::centered("back-wall", 4000.0, 2000.0)
        .chain(T::new().translate_z(-1000.0))
        .fill("#f0ebe1")
        .night("#1a1817")
        .children(wainscot(12, 4000.0, 2000.0))
}

fn left_wall() -> Primitive {
    Primitive::centered("left-wall", 2000.0, 2000.0)
        .chain(T::new().translate_x(-2000.0).rotate_y(90.0))
        .fill("#f0ebe1")
        .night("#1a1817")
        .children(wainscot(6, 2000.0, 2000.0))
}

fn window_wall(config: &Config) -> Primitive {
    let frame = 40.0;
    let inner = 2000.0 - 2.0 * frame;
    let mullion = |name, x: f32| {
        Primitive::rect(name, x, frame, 20.0, inner)
            .fill("#222")
            .passthrough()
    };
    Primitive::centered("window-wall", 2000.0, 2000.0)
        .chain(T::new().translate_x(2000.0).rotate_y(-90.0))
        .fill("#d0d5db")
        .night("#0a0b10")
        .child(
            Primitive::rect("skyline-day", frame, frame, inner, inner)
                .paint(Paint::image(&config.window_day_url))
                .faded(Fade::new(0.8, 0.0))
                .passthrough(),
        )
        .child(
            Primitive::rect("skyline-night", frame, frame, inner, inner)
                .paint(Paint::image(&config.window_night_url))
                .faded(Fade::new(0.0, 0.8))
                .passthrough(),
        )
        .child(mullion("mullion-left", frame + inner / 3.0))
        .child(mullion("mullion-right", frame + inner * 2.0 / 3.0))
        .child(
            Primitive::rect("window-frame", 0.0, 0.0, 2000.0, 2000.0)
                .paint(Paint::default().extra("border:40px solid #222"))
                .passthrough(),
        )
}

fn floor() -> Primitive {
    Primitive::centered("floor", 4000.0, 3000.0)
        .chain(T::new().translate_y(1000.0).rotate_x(90.0))
        .fill("#8a8c8e")
        .night("#111")
        .child(
            Primitive::rect("rug", 600.0, 500.0, 2800.0, 2000.0)
                .paint(
                    Paint::color("#c2b8a3")
                        .radius("20px")
                        .shadow("0 10px 30px rgba(0,0,0,0.5)"),
                )
                .night("#222"),
        )
}

fn ceiling() -> Primitive {
    Primitive::centered("ceiling", 4000.0, 3000.0)
        .chain(T::new().translate_y(-1000.0).rotate_x(-90.0))
        .fill("#f8fafc")
        .night("#0a0a0c")
}

fn desk() -> Primitive {
    const EDGE: &str = "#96683c";
    const PANEL: &str = "#8c5e35";
    const DARK: &str = "#754d29";
    let side = |x: f32, inner_x: f32, outer_x: f32, inner_rot: f32| {
        [
            Primitive::rect("desk-side-inner", -350.0, 30.0, 700.0, 770.0)
                .chain(T::new().translate_x(inner_x).translate_z(0.0).rotate_y(inner_rot))
                .fill(PANEL),
            Primitive::rect("desk-side-outer", -350.0, 30.0, 700.0, 770.0)
                .chain(T::new().translate_x(outer_x).translate_z(0.0).rotate_y(-inner_rot))
                .fill(PANEL),
            Primitive::rect("desk-side-front", -30.0, 30.0, 60.0, 770.0)
                .chain(T::new().translate_x(x).translate_z(350.0))
                .fill(DARK),
            Primitive::rect("desk-side-back", -30.0, 30.0, 60.0, 770.0)
                .chain(T::new().translate_x(x).translate_z(-350.0).rotate_y(180.0))
                .fill(DARK),
        ]
    };
    Primitive::group("desk")
        .chain(T::new().translate_y(200.0).translate_z(-400.0))
        .child(
            contact_shadow("desk-shadow", 1900.0, 900.0, Fade::new(0.6, 0.3)).chain(
                T::new()
                    .translate_y(800.0)
                    .rotate_x(90.0)
                    .translate_z(-1.0)
                    .translate_x(-100.0),
            ),
        )
        .child(
            Primitive::centered("desk-top", 1800.0, 800.0)
                .chain(T::new().rotate_x(90.0))
                .paint(
                    Paint::color("#b88655")
                        .radius("10px")
                        .shadow("inset 0 0 100px rgba(0,0,0,0.3)"),
                ),
        )
        .child(
            Primitive::centered("desk-front", 1800.0, 60.0)
                .chain(T::new().translate_z(400.0))
                .fill(EDGE),
        )
        .child(
            Primitive::centered("desk-back", 1800.0, 60.0)
                .chain(T::new().translate_z(-400.0).rotate_y(180.0))
                .fill(EDGE),
        )
        .child(
            Primitive::centered("desk-right", 800.0, 60.0)
                .chain(T::new().translate_x(900.0).rotate_y(90.0))
                .fill(EDGE),
        )
        .child(
            Primitive::centered("desk-left", 800.0, 60.0)
                .chain(T::new().translate_x(-900.0).rotate_y(-90.0))
                .fill(EDGE),
        )
        .child(
            Primitive::centered("desk-bottom", 1800.0, 800.0)
                .chain(T::new().translate_y(30.0).rotate_x(-90.0))
                .fill(DARK),
        )
        .children(side(-900.0, -870.0, -930.0, 90.0))
        .children(side(900.0, 870.0, 930.0, -90.0))
        .child(
            Primitive::rect("desk-modesty", -870.0, 30.0, 1740.0, 600.0)
                .chain(T::new().translate_z(-200.0))
                .fill(PANEL),
        )
        .child(
            Primitive::rect("desk-modesty-back", -870.0, 30.0, 1740.0, 600.0)
                .chain(T::new().translate_z(-240.0).rotate_y(180.0))
                .fill(DARK),
        )
}

fn chair() -> Primitive {
    const SEAT_SHADOW: &str = "inset 0 0 40px rgba(0,0,0,0.8)";
    let edge = |chain: T| {
        Primitive::centered("seat-edge", 400.0, 40.0)
            .chain(chain)
            .paint(Paint::color("#1a1a1a").radius("10px"))
    };
    let arm = |x: f32| {
        [
            Primitive::rect("arm-post", -10.0, -150.0, 20.0, 150.0)
                .chain(T::new().translate_x(x).translate_z(0.0))
                .fill("#111"),
            Primitive::rect("arm-pad", -20.0, -125.0, 40.0, 250.0)
                .chain(
                    T::new()
                        .translate_x(x)
                        .translate_y(-150.0)
                        .translate_z(0.0)
                        .rotate_x(90.0),
                )
                .paint(Paint::color("#222").radius("20px")),
        ]
    };
    Primitive::group("chair")
        .chain(
            T::new()
                .translate_x(-200.0)
                .translate_y(400.0)
                .translate_z(600.0)
                .rotate_y(20.0),
        )
        .child(
            contact_shadow("chair-shadow", 500.0, 500.0, Fade::new(0.5, 0.2)).chain(
                T::new()
                    .translate_y(600.0)
                    .rotate_x(90.0)
                    .translate_z(-1.0)
                    .translate_x(-150.0),
            ),
        )
        .child(
            Primitive::centered("seat-top", 400.0, 400.0)
                .chain(T::new().translate_y(-20.0).rotate_x(90.0))
                .paint(Paint::color("#222").radius("40px").shadow(SEAT_SHADOW)),
        )
        .child(
            Primitive::centered("seat-bottom", 400.0, 400.0)
                .chain(T::new().translate_y(20.0).rotate_x(-90.0))
                .paint(Paint::color("#111").radius("40px")),
        )
        .child(edge(T::new().translate_z(200.0)))
        .child(edge(T::new().translate_z(-200.0).rotate_y(180.0)))
        .child(edge(T::new().translate_x(-200.0).rotate_y(-90.0)))
        .child(edge(T::new().translate_x(200.0).rotate_y(90.0)))
        .child(
            Primitive::rect("backrest-front", -180.0, -500.0, 360.0, 500.0)
                .chain(T::new().translate_z(-180.0).rotate_x(10.0))
                .paint(
                    Paint::color("#222")
                        .radius("40px 40px 10px 10px")
                        .shadow(SEAT_SHADOW),
                ),
        )
        .child(
            Primitive::rect("backrest-back", -180.0, -500.0, 360.0, 500.0)
                .chain(T::new().translate_z(-220.0).rotate_x(10.0).rotate_y(180.0))
                .paint(Paint::color("#111").radius("40px 40px 10px 10px")),
        )
        .child(
            Primitive::rect("backrest-top", -180.0, -20.0, 360.0, 40.0)
                .chain(
                    T::new()
                        .translate_y(-500.0)
                        .translate_z(-200.0)
                        .rotate_x(100.0),
                )
                .paint(Paint::color("#1a1a1a").radius("10px")),
        )
        .child(
            Primitive::rect("backrest-left", -20.0, -500.0, 40.0, 500.0)
                .chain(
                    T::new()
                        .translate_x(-180.0)
                        .translate_z(-200.0)
                        .rotate_y(-90.0)
                        .rotate_x(10.0),
                )
                .paint(Paint::color("#1a1a1a").radius("10px")),
        )
        .child(
            Primitive::rect("backrest-right", -20.0, -500.0, 40.0, 500.0)
                .chain(
                    T::new()
                        .translate_x(180.0)
                        .translate_z(-200.0)
                        .rotate_y(90.0)
                        .rotate_x(10.0),
                )
                .paint(Paint::color("#1a1a1a").radius("10px")),
        )
        .children(arm(-210.0))
        .children(arm(210.0))
        .child(Primitive::rect("chair-pole", -20.0, 20.0, 40.0, 380.0).fill("#111"))
        .child(
            Primitive::centered("wheel-base-x", 400.0, 40.0)
                .chain(T::new().translate_y(400.0).rotate_x(90.0))
                .paint(Paint::color("#222").radius("20px")),
        )
        .child(
            Primitive::centered("wheel-base-z", 40.0, 400.0)
                .chain(T::new().translate_y(400.0).rotate_x(90.0))
                .paint(Paint::color("#222").radius("20px")),
        )
}

fn notebook() -> Primitive {
    const PAGE_RADIUS: &str = "4px 12px 12px 4px";
    let page = |z: f32, color: &str| {
        Primitive::centered("notebook-page", 180.0, 240.0)
            .chain(T::new().rotate_x(90.0).translate_z(z))
            .paint(Paint::color(color).radius(PAGE_RADIUS))
    };
    Primitive::group("notebook")
        .chain(
            T::new()
                .translate_x(-400.0)
                .translate_y(200.0)
                .translate_z(100.0),
        )
        .child(floor_shadow(
            "notebook-shadow",
            200.0,
            260.0,
            -40.0,
            Fade::new(0.4, 0.1),
        ))
        .child(
            Primitive::group("notebook-body")
                .hover_lift(T::new().translate_y(-10.0).rotate_z(5.0))
                .child(page(2.0, "#f8fafc"))
                .child(page(0.0, "#e2e8f0"))
                .child(page(-2.0, "#cbd5e1"))
                .child(
                    Primitive::centered("notebook-cover", 185.0, 245.0)
                        .chain(T::new().rotate_x(90.0).translate_z(-4.0))
                        .paint(
                            Paint::color("#1e293b")
                                .radius(PAGE_RADIUS)
                                .shadow("0 10px 20px rgba(0,0,0,0.5)"),
                        ),
                )
                .child(
                    Primitive::rect("notebook-spine", -95.0, -122.5, 10.0, 245.0)
                        .chain(T::new().rotate_x(90.0).translate_z(-1.0))
                        .paint(Paint::color("#0f172a").radius("4px 0 0 4px")),
                )
                .child(
                    Primitive::rect("notebook-bookmark", 20.0, -120.0, 10.0, 260.0)
                        .chain(T::new().rotate_x(90.0).translate_z(3.0))
                        .fill("#ef4444"),
                ),
        )
}

fn pen(color: &str, chain: T) -> Primitive {
    Primitive::group("pen").chain(chain).child(
        Primitive::group("pen-body")
            .hover_lift(T::new().translate_y(-20.0))
            .child(
                Primitive::rect("pen-barrel", -4.0, -50.0, 8.0, 100.0)
                    .paint(Paint::color(color).radius("4px")),
            )
            .child(
                Primitive::rect("pen-cap", -4.0, -50.0, 8.0, 20.0)
                    .paint(Paint::color("#111").radius("4px 4px 0 0")),
            ),
    )
}

fn pen_holder() -> Primitive {
    let face = |color: &str, chain: T| {
        Primitive::rect("holder-face", -30.0, -80.0, 60.0, 80.0)
            .chain(chain)
            .paint(Paint::color(color).radius("10px"))
    };
    Primitive::group("pen-holder")
        .chain(
            T::new()
                .translate_x(-300.0)
                .translate_y(200.0)
                .translate_z(-200.0),
        )
        .child(floor_shadow(
            "holder-shadow",
            100.0,
            100.0,
            -40.0,
            Fade::new(0.5, 0.1),
        ))
        .child(face("#334155", T::new().translate_z(30.0)))
        .child(face("#1e293b", T::new().translate_z(-30.0).rotate_y(180.0)))
        .child(face("#0f172a", T::new().translate_x(-30.0).rotate_y(-90.0)))
        .child(face("#475569", T::new().translate_x(30.0).rotate_y(90.0)))
        .child(
            Primitive::centered("holder-bottom", 60.0, 60.0)
                .chain(T::new().translate_y(0.0).rotate_x(90.0))
                .paint(Paint::color("#0f172a").radius("10px")),
        )
        .child(pen(
            "#eab308",
            T::new()
                .translate_x(-10.0)
                .translate_y(-40.0)
                .translate_z(10.0)
                .rotate_x(15.0)
                .rotate_z(-10.0),
        ))
        .child(pen(
            "#ef4444",
            T::new()
                .translate_x(15.0)
                .translate_y(-40.0)
                .translate_z(-10.0)
                .rotate_x(-10.0)
                .rotate_z(15.0),
        ))
        .child(pen(
            "#3b82f6",
            T::new()
                .translate_x(0.0)
                .translate_y(-40.0)
                .translate_z(-15.0)
                .rotate_x(-20.0)
                .rotate_z(0.0),
        ))
}

fn mouse() -> Primitive {
    Primitive::group("mouse")
        .chain(
            T::new()
                .translate_x(300.0)
                .translate_y(200.0)
                .translate_z(200.0)
                .rotate_y(0.0),
        )
        .hover_lift(T::new().translate_x(-20.0).translate_z(-20.0).rotate_y(-15.0))
        .child(floor_shadow(
            "mouse-shadow",
            80.0,
            120.0,
            -20.0,
            Fade::new(0.4, 0.1),
        ))
        .child(
            Primitive::centered("mouse-shell", 60.0, 100.0)
                .chain(T::new().rotate_x(90.0))
                .paint(
                    Paint::color("#111")
                        .radius("30px")
                        .shadow("0 10px 20px rgba(0,0,0,0.5)"),
                )
                .child(
                    Primitive::rect("mouse-wheel", 28.0, 15.0, 4.0, 15.0)
                        .paint(Paint::color("#333").radius("9999px")),
                ),
        )
}

fn plant() -> Primitive {
    const POT_RADIUS: &str = "20px 20px 150px 150px";
    let pot = |color: &str, chain: T| {
        Primitive::rect("pot-face", -150.0, -400.0, 300.0, 400.0)
            .chain(chain)
            .paint(Paint::color(color).radius(POT_RADIUS))
    };
    let stem = |left: f32, top: f32, w: f32, h: f32, color: &str, chain: T| {
        Primitive::rect("stem", left, top, w, h)
            .chain(chain)
            .paint(Paint::color(color).radius("10px"))
    };
    let leaf = |left: f32, top: f32, w: f32, h: f32, color: &str, radius: &'static str, chain: T| {
        Primitive::rect("leaf", left, top, w, h)
            .chain(chain)
            .paint(Paint::color(color).radius(radius))
    };
    Primitive::group("plant")
        .chain(
            T::new()
                .translate_x(1400.0)
                .translate_y(1000.0)
                .translate_z(-600.0),
        )
        .child(floor_shadow(
            "plant-shadow",
            500.0,
            500.0,
            -200.0,
            Fade::new(0.6, 0.1),
        ))
        .child(
            pot("#e5e5e5", T::new().translate_z(150.0)).paint(
                Paint::color("#e5e5e5")
                    .radius(POT_RADIUS)
                    .shadow("inset -20px -20px 50px rgba(0,0,0,0.2)"),
            ),
        )
        .child(pot("#d4d4d4", T::new().translate_z(-150.0).rotate_y(180.0)))
        .child(pot("#a3a3a3", T::new().translate_x(-150.0).rotate_y(-90.0)))
        .child(pot("#f5f5f5", T::new().translate_x(150.0).rotate_y(90.0)))
        .child(
            Primitive::centered("soil", 300.0, 300.0)
                .chain(T::new().translate_y(-380.0).rotate_x(90.0))
                .paint(Paint::color("#1a110c").radius("50%")),
        )
        .child(stem(-10.0, -900.0, 20.0, 600.0, "#2f4f4f", T::new().rotate_z(5.0).rotate_x(5.0)))
        .child(stem(-8.0, -800.0, 16.0, 500.0, "#355e3b", T::new().rotate_z(-10.0).rotate_x(-5.0)))
        .child(stem(-6.0, -700.0, 12.0, 400.0, "#4a7c59", T::new().rotate_z(15.0).rotate_x(10.0)))
        .child(
            leaf(
                -100.0,
                -1000.0,
                200.0,
                250.0,
                "#1e4d2e",
                "100px 100px 20px 100px",
                T::new().translate_z(50.0).rotate_x(40.0).rotate_z(-20.0),
            )
            .paint(
                Paint::color("#1e4d2e")
                    .radius("100px 100px 20px 100px")
                    .shadow("inset -10px -10px 30px rgba(0,0,0,0.3)"),
            ),
        )
        .child(leaf(
            -90.0,
            -950.0,
            180.0,
            220.0,
            "#2d6a4f",
            "100px 100px 100px 20px",
            T::new().translate_z(-80.0).rotate_x(-30.0).rotate_z(30.0),
        ))
        .child(leaf(
            -110.0,
            -850.0,
            220.0,
            280.0,
            "#1b4332",
            "100px 20px 100px 100px",
            T::new().translate_x(-100.0).rotate_y(-40.0).rotate_z(-40.0),
        ))
        .child(leaf(
            -95.0,
            -750.0,
            190.0,
            240.0,
            "#40916c",
            "20px 100px 100px 100px",
            T::new().translate_x(120.0).rotate_y(50.0).rotate_z(25.0),
        ))
        .child(leaf(
            -80.0,
            -650.0,
            160.0,
            200.0,
            "#52b788",
            "100px",
            T::new().translate_z(120.0).rotate_x(60.0).rotate_z(-10.0),
        ))
        .child(leaf(
            -75.0,
            -550.0,
            150.0,
            180.0,
            "#2d6a4f",
            "100px",
            T::new().translate_z(-100.0).rotate_x(-50.0).rotate_z(15.0),
        ))
}

fn lamp_base() -> Primitive {
    Primitive::centered("lamp", 150.0, 150.0)
        .chain(
            T::new()
                .translate_x(-400.0)
                .translate_y(200.0)
                .translate_z(-600.0)
                .rotate_x(90.0),
        )
        .paint(Paint::color("#333").radius("50%"))
        .interactive(Interaction::ToggleTheme)
        .child(
            Primitive::rect("lamp-halo", 0.0, 0.0, 150.0, 150.0)
                .paint(
                    Paint::default()
                        .radius("50%")
                        .shadow("0 0 100px 50px rgba(255,200,100,0.5)"),
                )
                .faded(Fade::NIGHT_OVERLAY)
                .passthrough(),
        )
        .child(
            Primitive::rect("lamp-shadow", 0.0, 0.0, 150.0, 150.0)
                .chain(T::new().translate_z(-1.0).translate_x(-40.0))
                .paint(Paint::color(CONTACT_SHADOW).radius("50%"))
                .faded(Fade::new(0.5, 0.1))
                .passthrough(),
        )
}

fn lamp_stem() -> Primitive {
    Primitive::centered("lamp-stem", 20.0, 200.0)
        .chain(
            T::new()
                .translate_x(-400.0)
                .translate_y(100.0)
                .translate_z(-600.0),
        )
        .fill("#444")
        .passthrough()
}

fn lamp_shade() -> Primitive {
    Primitive::centered("lamp-shade", 100.0, 80.0)
        .chain(
            T::new()
                .translate_x(-400.0)
                .translate_y(0.0)
                .translate_z(-600.0)
                .rotate_x(-30.0),
        )
        .paint(Paint::color("#222").radius("50% 50% 0 0"))
        .passthrough()
        .child(Primitive::rect("lamp-bulb", 10.0, 60.0, 80.0, 20.0).fill("#eee"))
        .child(
            Primitive::rect("lamp-bulb-lit", 10.0, 60.0, 80.0, 20.0)
                .paint(
                    Paint::color("#ffddaa").shadow("0 50px 100px 50px rgba(255,200,100,0.8)"),
                )
                .faded(Fade::NIGHT_OVERLAY),
        )
}

fn monitor() -> Primitive {
    let [w, h] = MONITOR_SIZE;
    Primitive::centered("monitor", w, h)
        .chain(T::new().translate_x(0.0).translate_y(75.0).translate_z(220.0))
        .paint(Paint::color("#0f111a").radius("6px"))
        .interactive(Interaction::Navigate(ViewState::Computer))
        .surface(SurfaceId::Monitor)
        .child(
            Primitive::rect("monitor-bezel", -16.0, -16.0, w + 32.0, h + 32.0)
                .chain(T::new().translate_z(-2.0))
                .paint(
                    Paint::color("#111")
                        .radius("18px")
                        .shadow("0 30px 60px rgba(0,0,0,0.45)"),
                ),
        )
        .child(
            Primitive::rect("monitor-back", -16.0, -16.0, w + 32.0, h + 32.0)
                .chain(T::new().translate_z(-30.0).rotate_y(180.0))
                .paint(Paint::color("#1a1a1a").radius("18px")),
        )
        .child(
            Primitive::rect("monitor-neck", w * 0.5 - 30.0, h, 60.0, 110.0)
                .chain(T::new().translate_z(-40.0))
                .fill("#1f2937"),
        )
        .child(
            Primitive::rect("monitor-foot", w * 0.5 - 120.0, h + 110.0 - 80.0, 240.0, 160.0)
                .chain(T::new().translate_z(-40.0).rotate_x(90.0))
                .paint(Paint::color("#111827").radius("16px")),
        )
}

fn pinboard() -> Primitive {
    let [w, h] = PINBOARD_SIZE;
    let leg = |x: f32| {
        Primitive::rect("pinboard-leg", x, h, 40.0, 700.0)
            .chain(T::new().translate_z(-6.0))
            .fill("#4a2f18")
    };
    Primitive::centered("pinboard", w, h)
        .chain(
            T::new()
                .translate_x(-1000.0)
                .translate_y(-200.0)
                .translate_z(-980.0),
        )
        .paint(
            Paint::color("#c8a97e")
                .radius("8px")
                .shadow("inset 0 0 60px rgba(0,0,0,0.25)"),
        )
        .night("#5c4a33")
        .interactive(Interaction::Navigate(ViewState::Pinboard))
        .surface(SurfaceId::Pinboard)
        .child(
            Primitive::rect("pinboard-frame", -24.0, -24.0, w + 48.0, h + 48.0)
                .chain(T::new().translate_z(-2.0))
                .paint(Paint::color("#5b3a1e").radius("12px")),
        )
        .child(leg(100.0))
        .child(leg(w - 140.0))
}
