/// Animation math: damped springs, easing curves and entrance-reveal plans.
///
/// Reveal plans are rendered by the server into CSS custom properties and
/// read by the stylesheet; the springs are stepped by the client each frame.
use crate::viewport::CursorPosition;

/// Fixed integration step. Large frame gaps are split into substeps.
const SPRING_SUBSTEP: f64 = 1.0 / 120.0;
const REST_SPEED: f64 = 0.01;
const REST_DELTA: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Cursor-following glow in the hero background.
    pub const CURSOR_GLOW: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping: 25.0,
        mass: 1.0,
    };

    /// Modal open/close.
    pub const MODAL: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() < REST_SPEED && (self.value - self.target).abs() < REST_DELTA
    }

    /// Advance by `dt` seconds. Semi-implicit Euler over fixed substeps.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 || self.is_at_rest() {
            if self.is_at_rest() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return self.value;
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }
}

/// Two springs tracking a cursor with lag.
#[derive(Debug, Clone, Copy)]
pub struct SpringFollower {
    x: Spring,
    y: Spring,
}

impl SpringFollower {
    pub fn new(config: SpringConfig, start: CursorPosition) -> Self {
        Self {
            x: Spring::new(config, start.x),
            y: Spring::new(config, start.y),
        }
    }

    pub fn set_target(&mut self, target: CursorPosition) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn step(&mut self, dt: f64) -> CursorPosition {
        CursorPosition::new(self.x.step(dt), self.y.step(dt))
    }

    pub fn position(&self) -> CursorPosition {
        CursorPosition::new(self.x.value(), self.y.value())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out.
    PowerTwoOut,
    /// Overshooting ease-out with the given overshoot amount.
    BackOut(f64),
}

impl Easing {
    /// Closest CSS timing function.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::PowerTwoOut => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut(_) => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        }
    }
}

/// A one-time entrance animation, triggered when the element scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from_x: f64,
    pub from_y: f64,
    pub rotate_y: f64,
    pub scale_from: f64,
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Reveal {
    pub const fn fade(duration: f64) -> Self {
        Self {
            from_x: 0.0,
            from_y: 0.0,
            rotate_y: 0.0,
            scale_from: 1.0,
            delay: 0.0,
            duration,
            easing: Easing::Linear,
        }
    }

    /// Section wrappers fade in over one second.
    pub const fn section() -> Self {
        Self::fade(1.0)
    }

    /// Headings drop in from above.
    pub fn heading() -> Self {
        Self {
            from_y: -50.0,
            easing: Easing::PowerTwoOut,
            ..Self::fade(1.0)
        }
    }

    pub fn rise(index: usize, step: f64) -> Self {
        Self {
            from_y: 20.0,
            delay: index as f64 * step,
            duration: 0.5,
            ..Self::fade(0.5)
        }
    }

    /// Project cards enter from alternating sides.
    pub fn project_card(index: usize) -> Self {
        let side = if index % 2 == 0 { -1.0 } else { 1.0 };
        Self {
            from_x: 50.0 * side,
            rotate_y: 10.0 * side,
            delay: index as f64 * 0.2,
            duration: 1.0,
            easing: Easing::PowerTwoOut,
            ..Self::fade(1.0)
        }
    }

    pub fn tech_tag(index: usize) -> Self {
        Self {
            scale_from: 0.0,
            delay: index as f64 * 0.1,
            duration: 0.5,
            easing: Easing::BackOut(1.7),
            ..Self::fade(0.5)
        }
    }

    /// Inline custom properties consumed by the stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--reveal-x:{:.0}px;--reveal-y:{:.0}px;--reveal-rotate:{:.0}deg;--reveal-scale:{};\
             --reveal-delay:{:.2}s;--reveal-duration:{:.2}s;--reveal-ease:{}",
            self.from_x,
            self.from_y,
            self.rotate_y,
            self.scale_from,
            self.delay,
            self.duration,
            self.easing.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::CURSOR_GLOW, 0.0);
        spring.set_target(100.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert!((spring.value() - 100.0).abs() < 0.05, "value {}", spring.value());
    }

    #[test]
    fn spring_lags_behind_target() {
        let mut spring = Spring::new(SpringConfig::CURSOR_GLOW, 0.0);
        spring.set_target(100.0);
        let after_one_frame = spring.step(1.0 / 60.0);
        assert!(after_one_frame > 0.0 && after_one_frame < 10.0);
    }

    #[test]
    fn large_frame_gap_stays_stable() {
        let mut spring = Spring::new(SpringConfig::CURSOR_GLOW, 0.0);
        spring.set_target(1.0);
        let v = spring.step(5.0);
        assert!(v.is_finite());
        assert!((v - 1.0).abs() < 0.01);
    }

    #[test]
    fn follower_tracks_both_axes() {
        let mut f = SpringFollower::new(SpringConfig::CURSOR_GLOW, CursorPosition::default());
        f.set_target(CursorPosition::new(300.0, 200.0));
        for _ in 0..600 {
            f.step(1.0 / 60.0);
        }
        let p = f.position();
        assert!((p.x - 300.0).abs() < 0.1);
        assert!((p.y - 200.0).abs() < 0.1);
    }

    #[test]
    fn tech_tags_overshoot() {
        let vars = Reveal::tech_tag(2).css_vars();
        assert!(vars.contains("--reveal-scale:0;"));
        assert!(vars.contains("--reveal-delay:0.20s"));
        assert!(vars.contains(Easing::BackOut(1.7).css()));
    }

    #[test]
    fn project_cards_alternate_sides() {
        let even = Reveal::project_card(0);
        let odd = Reveal::project_card(1);
        assert_eq!(even.from_x, -50.0);
        assert_eq!(even.rotate_y, -10.0);
        assert_eq!(odd.from_x, 50.0);
        assert_eq!(odd.rotate_y, 10.0);
        assert!((Reveal::project_card(3).delay - 0.6).abs() < 1e-9);
    }

    #[test]
    fn heading_drops_from_above() {
        let vars = Reveal::heading().css_vars();
        assert!(vars.contains("--reveal-y:-50px"));
        assert!(vars.contains("--reveal-duration:1.00s"));
    }

    #[test]
    fn css_vars_are_rounded() {
        let vars = Reveal::project_card(3).css_vars();
        assert!(vars.contains("--reveal-x:50px"));
        assert!(vars.contains("--reveal-delay:0.60s"));
        assert!(vars.contains("--reveal-rotate:10deg"));
    }
}
