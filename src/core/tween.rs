use fnv::FnvHashMap;
use std::hash::Hash;

/// Values that can be interpolated by a [`Tween`].
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed end points (0,0) and (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub const fn from_points(p: [f32; 4]) -> Self {
        Easing::CubicBezier(p[0], p[1], p[2], p[3])
    }

    /// Map linear progress in [0, 1] to eased progress.
    pub fn apply(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Easing::Linear => x,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if x <= 0.0 {
                    return 0.0;
                }
                if x >= 1.0 {
                    return 1.0;
                }
                let s = solve_bezier_param(x1, x2, x);
                bezier(y1, y2, s)
            }
        }
    }
}

#[inline]
fn bezier(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * a1 + 3.0 * u * s * s * a2 + s * s * s
}

#[inline]
fn bezier_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a1 + 6.0 * u * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

// Newton first, bisection when the slope flattens out.
fn solve_bezier_param(x1: f32, x2: f32, x: f32) -> f32 {
    const EPS: f32 = 1e-6;
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < EPS {
            return s;
        }
        let d = bezier_slope(x1, x2, s);
        if d.abs() < EPS {
            break;
        }
        let next = s - err / d;
        if !(0.0..=1.0).contains(&next) {
            break;
        }
        s = next;
    }
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..40 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

/// Duration (seconds) and easing of one animated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Interpolates a value from `from` to `to` starting at `start` (seconds).
///
/// `retarget` begins the new leg at the currently sampled value, so an
/// interrupted animation continues from where it visually is instead of
/// snapping or running a second animation on the same property.
#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: f64,
    transition: Transition,
}

impl<T: Lerp> Tween<T> {
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            from: value,
            to: value,
            start: f64::NEG_INFINITY,
            transition,
        }
    }

    pub fn jump(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.start = f64::NEG_INFINITY;
    }

    pub fn retarget(&mut self, to: T, now: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
    }

    pub fn retarget_with(&mut self, to: T, transition: Transition, now: f64) {
        self.retarget(to, now);
        self.transition = transition;
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.transition.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.transition.duration).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now: f64) -> T {
        let t = self.transition.easing.apply(self.progress(now));
        self.from.lerp(self.to, t)
    }

    pub fn target(&self) -> T {
        self.to
    }
}

struct Channel {
    tween: Tween<f32>,
    emitted: Option<f32>,
}

/// Keyed scalar animation channels.
///
/// Callers only describe targets; `step` reports the channels whose value
/// moved since the previous step, which is all a renderer needs to write.
pub struct Animator<K> {
    channels: FnvHashMap<K, Channel>,
}

impl<K: Copy + Eq + Hash> Default for Animator<K> {
    fn default() -> Self {
        Self {
            channels: FnvHashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> Animator<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `key` towards `target`. A channel seen for the first time
    /// jumps straight to its target; an unchanged target is a no-op.
    pub fn animate_to(&mut self, key: K, target: f32, transition: Transition, now: f64) {
        match self.channels.get_mut(&key) {
            Some(ch) => {
                if ch.tween.target() == target {
                    return;
                }
                ch.tween.retarget_with(target, transition, now);
            }
            None => {
                self.channels.insert(
                    key,
                    Channel {
                        tween: Tween::new(target, transition),
                        emitted: None,
                    },
                );
            }
        }
    }

    pub fn set(&mut self, key: K, value: f32) {
        match self.channels.get_mut(&key) {
            Some(ch) => {
                ch.tween.jump(value);
                ch.emitted = None;
            }
            None => {
                self.channels.insert(
                    key,
                    Channel {
                        tween: Tween::new(value, Transition::new(0.0, Easing::Linear)),
                        emitted: None,
                    },
                );
            }
        }
    }

    pub fn value(&self, key: K, now: f64) -> Option<f32> {
        self.channels.get(&key).map(|ch| ch.tween.sample(now))
    }

    pub fn step(&mut self, now: f64) -> Vec<(K, f32)> {
        let mut out = Vec::new();
        for (key, ch) in self.channels.iter_mut() {
            let v = ch.tween.sample(now);
            if ch.emitted != Some(v) {
                ch.emitted = Some(v);
                out.push((*key, v));
            }
        }
        out
    }
}
