//! Ambient canvas visuals.
//!
//! Widgets sit behind [`DecorativeWidget`] so pages never depend on how a visual is
//! drawn. Input only nudges visual parameters; nothing here touches content or
//! navigation.

use std::f32::consts::TAU;

use serde::Serialize;

/// Pointer and hover input; pointer coordinates are normalized to `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Perturbation {
    pub pointer: Option<(f32, f32)>,
    pub hovered: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualParams {
    /// Degrees on the color wheel.
    pub hue: f32,
    pub distortion: f32,
    pub rotation_speed: f32,
    pub tilt: (f32, f32),
}

/// How the client animates a widget's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Points circle the origin on fixed orbits.
    Orbit,
    /// Points sit in a row and bob in place.
    Bob,
}

impl Motion {
    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Orbit => "orbit",
            Motion::Bob => "bob",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetMount {
    pub id: &'static str,
    pub markup: String,
    pub params: VisualParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub points: Vec<[f32; 3]>,
    pub rotation: f32,
}

pub trait DecorativeWidget: Send + Sync {
    fn id(&self) -> &'static str;
    fn motion(&self) -> Motion;
    /// Points drawn per frame.
    fn count(&self) -> usize;
    fn mount(&mut self) -> WidgetMount;
    fn unmount(&mut self);
    fn is_mounted(&self) -> bool;
    fn params(&self) -> VisualParams;
    /// Ignored while unmounted.
    fn perturb(&mut self, input: Perturbation);
    fn frame(&self, elapsed_secs: f32) -> Frame;
}

fn canvas_markup(widget: &dyn DecorativeWidget, label: &str) -> String {
    let id = widget.id();
    let params = widget.params();
    format!(
        "<canvas class=\"widget widget-{id}\" data-widget=\"{id}\" data-motion=\"{}\" data-count=\"{}\" data-hue=\"{:.0}\" data-distortion=\"{:.2}\" data-speed=\"{:.2}\" role=\"presentation\" aria-hidden=\"true\" title=\"{label}\"></canvas>",
        widget.motion().as_str(),
        widget.count(),
        params.hue,
        params.distortion,
        params.rotation_speed
    )
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Floating particles drifting on fixed orbits.
#[derive(Debug, Clone)]
pub struct ParticleField {
    count: usize,
    base: VisualParams,
    params: VisualParams,
    mounted: bool,
}

impl ParticleField {
    pub const MAX_RADIUS: f32 = 1.2;

    pub fn new(count: usize) -> Self {
        let base = VisualParams {
            hue: 239.0,
            distortion: 0.0,
            rotation_speed: 0.15,
            tilt: (0.0, 0.0),
        };
        Self {
            count,
            base,
            params: base,
            mounted: false,
        }
    }
}

impl DecorativeWidget for ParticleField {
    fn id(&self) -> &'static str {
        "particle-field"
    }

    fn motion(&self) -> Motion {
        Motion::Orbit
    }

    fn count(&self) -> usize {
        self.count
    }

    fn mount(&mut self) -> WidgetMount {
        self.mounted = true;
        WidgetMount {
            id: self.id(),
            markup: canvas_markup(&*self, "Floating particles"),
            params: self.params,
        }
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.params = self.base;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn params(&self) -> VisualParams {
        self.params
    }

    fn perturb(&mut self, input: Perturbation) {
        if !self.mounted {
            return;
        }
        let (x, y) = input
            .pointer
            .map(|(x, y)| (clamp_unit(x), clamp_unit(y)))
            .unwrap_or((0.0, 0.0));
        self.params.tilt = (x * 0.2, y * 0.2);
        self.params.rotation_speed = if input.active {
            self.base.rotation_speed * 3.0
        } else {
            self.base.rotation_speed
        };
        self.params.hue = if input.hovered {
            self.base.hue + 40.0
        } else {
            self.base.hue
        };
    }

    fn frame(&self, elapsed_secs: f32) -> Frame {
        let t = if elapsed_secs.is_finite() {
            elapsed_secs
        } else {
            0.0
        };
        // golden angle spreads the orbits evenly
        let spread = TAU * 0.381_966;
        let points = (0..self.count)
            .map(|i| {
                let phase = i as f32 * spread;
                let radius = Self::MAX_RADIUS * (0.35 + 0.65 * ((i % 7) as f32 / 6.0));
                let angle = phase + t * self.params.rotation_speed;
                [
                    radius * angle.cos(),
                    0.3 * (t * 0.5 + phase).sin(),
                    radius * angle.sin(),
                ]
            })
            .collect();
        Frame {
            points,
            rotation: (t * self.params.rotation_speed).rem_euclid(TAU),
        }
    }
}

/// A handful of glass shapes bobbing and turning in place.
#[derive(Debug, Clone)]
pub struct GlassShapes {
    shapes: usize,
    base: VisualParams,
    params: VisualParams,
    mounted: bool,
}

impl GlassShapes {
    pub fn new(shapes: usize) -> Self {
        let base = VisualParams {
            hue: 180.0,
            distortion: 0.25,
            rotation_speed: 0.4,
            tilt: (0.0, 0.0),
        };
        Self {
            shapes,
            base,
            params: base,
            mounted: false,
        }
    }
}

impl DecorativeWidget for GlassShapes {
    fn id(&self) -> &'static str {
        "glass-shapes"
    }

    fn motion(&self) -> Motion {
        Motion::Bob
    }

    fn count(&self) -> usize {
        self.shapes
    }

    fn mount(&mut self) -> WidgetMount {
        self.mounted = true;
        WidgetMount {
            id: self.id(),
            markup: canvas_markup(&*self, "Floating glass shapes"),
            params: self.params,
        }
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.params = self.base;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn params(&self) -> VisualParams {
        self.params
    }

    fn perturb(&mut self, input: Perturbation) {
        if !self.mounted {
            return;
        }
        self.params.distortion = match (input.hovered, input.active) {
            (_, true) => 0.9,
            (true, false) => 0.6,
            (false, false) => self.base.distortion,
        };
        if let Some((x, y)) = input.pointer {
            self.params.tilt = (clamp_unit(y) * 0.3, clamp_unit(x) * 0.3);
        }
    }

    fn frame(&self, elapsed_secs: f32) -> Frame {
        let t = if elapsed_secs.is_finite() {
            elapsed_secs
        } else {
            0.0
        };
        let points = (0..self.shapes)
            .map(|i| {
                let offset = i as f32;
                let column = offset - (self.shapes.saturating_sub(1)) as f32 / 2.0;
                [
                    column * 0.8 + self.params.tilt.1,
                    0.25 * (t + offset).sin(),
                    -0.5 * (t * 0.3 + offset).cos().abs(),
                ]
            })
            .collect();
        Frame {
            points,
            rotation: (t * self.params.rotation_speed).rem_euclid(TAU),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_frames_stay_bounded() {
        let field = ParticleField::new(64);
        for step in 0..200 {
            let frame = field.frame(step as f32 * 0.37);
            assert_eq!(frame.points.len(), 64);
            for [x, y, z] in frame.points {
                assert!((x * x + z * z).sqrt() <= ParticleField::MAX_RADIUS + 1e-4);
                assert!(y.abs() <= 0.3 + 1e-4);
            }
            assert!((0.0..TAU).contains(&frame.rotation));
        }
    }

    #[test]
    fn perturbation_is_ignored_until_mounted() {
        let mut field = ParticleField::new(8);
        let before = field.params();
        field.perturb(Perturbation {
            pointer: Some((1.0, 1.0)),
            hovered: true,
            active: true,
        });
        assert_eq!(field.params(), before);

        let mount = field.mount();
        assert!(mount.markup.contains("data-widget=\"particle-field\""));
        field.perturb(Perturbation {
            pointer: Some((5.0, f32::NAN)),
            hovered: true,
            active: false,
        });
        assert_eq!(field.params().tilt, (0.2, 0.0));
        assert_eq!(field.params().hue, before.hue + 40.0);
    }

    #[test]
    fn unmount_restores_base_params() {
        let mut shapes = GlassShapes::new(3);
        let base = shapes.params();
        shapes.mount();
        shapes.perturb(Perturbation {
            active: true,
            ..Perturbation::default()
        });
        assert_eq!(shapes.params().distortion, 0.9);
        shapes.unmount();
        assert!(!shapes.is_mounted());
        assert_eq!(shapes.params(), base);
    }

    #[test]
    fn mount_markup_tells_the_client_how_to_draw() {
        let mut field = ParticleField::new(120);
        let markup = field.mount().markup;
        assert!(markup.contains("data-motion=\"orbit\""));
        assert!(markup.contains("data-count=\"120\""));

        let mut shapes = GlassShapes::new(3);
        let markup = shapes.mount().markup;
        assert!(markup.contains("data-motion=\"bob\""));
        assert!(markup.contains("data-count=\"3\""));
        assert!(markup.contains("data-distortion=\"0.25\""));
    }

    #[test]
    fn non_finite_time_does_not_poison_frames() {
        let shapes = GlassShapes::new(3);
        let frame = shapes.frame(f32::INFINITY);
        assert!(frame
            .points
            .iter()
            .all(|point| point.iter().all(|v| v.is_finite())));
    }
}
