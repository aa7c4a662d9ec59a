use eframe::egui;
use rand::Rng;

const CONFETTI_DURATION: f64 = 2.5;
const CONFETTI_PARTICLES: usize = 80;
const CONFETTI_COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(255, 215, 0),
    egui::Color32::from_rgb(255, 165, 0),
    egui::Color32::from_rgb(255, 99, 71),
    egui::Color32::from_rgb(0, 206, 209),
    egui::Color32::from_rgb(255, 105, 180),
];
const GRAVITY: f32 = 420.0;

struct Particle {
    /// Launch position as a fraction of screen width.
    x: f32,
    velocity: egui::Vec2,
    size: f32,
    color: egui::Color32,
    delay: f32,
}

/// Celebration burst drawn over everything after a spin settles.
#[derive(Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    started_at: Option<f64>,
}

impl Confetti {
    pub fn burst(&mut self, now: f64) {
        let mut rng = rand::rng();
        self.particles = (0..CONFETTI_PARTICLES)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                velocity: egui::Vec2::new(rng.random_range(-120.0..120.0), rng.random_range(-520.0..-260.0)),
                size: rng.random_range(3.0..7.0),
                color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
                delay: rng.random_range(0.0..0.6),
            })
            .collect();
        self.started_at = Some(now);
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.started_at.is_some_and(|start| now - start < CONFETTI_DURATION)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.started_at = None;
    }

    pub fn paint(&mut self, ctx: &egui::Context, now: f64) {
        let Some(start) = self.started_at else {
            return;
        };
        if !self.is_active(now) {
            self.clear();
            return;
        }

        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("confetti")));
        let elapsed = (now - start) as f32;
        let fade = 1.0 - (elapsed / CONFETTI_DURATION as f32).clamp(0.0, 1.0);

        for particle in &self.particles {
            let t = elapsed - particle.delay;
            if t < 0.0 {
                continue;
            }
            let origin = egui::Pos2::new(screen.min.x + screen.width() * particle.x, screen.max.y);
            let pos = origin + particle.velocity * t + egui::Vec2::new(0.0, 0.5 * GRAVITY * t * t);
            if screen.contains(pos) {
                painter.circle_filled(pos, particle.size, particle.color.gamma_multiply(fade));
            }
        }
    }
}
