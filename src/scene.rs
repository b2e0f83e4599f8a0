use glam::Vec3;

use crate::light::{Light, LightForm, LightKind, LightUpdate};
use crate::rng::Dice;
use crate::shapes::{make_cube, make_tetrahedron, Shape, ShapeKind};

/// Bounds on the generated shape count.
pub const MIN_SHAPES: i32 = 5;
pub const MAX_SHAPES: i32 = 30;

/// Per-axis bound k for the shared spin roll `roll(-k, k) / 100`.
const SPIN_RANGE: i32 = 5;

/// The ordered shape collection plus the single optional light. Insertion
/// order is draw order, and the shape count never changes after generation.
pub struct Scene {
    shapes: Vec<Shape>,
    light: Option<Light>,
    /// Rotation added to every shape each tick. Rolled once per scene and
    /// shared by all shapes, not scaled by frame time.
    spin: Vec3,
}

impl Scene {
    /// Populates a fresh scene: a random shape count, a fair coin flip per
    /// slot between cube and tetrahedron, the default ambient light, and one
    /// shared spin vector.
    pub fn generate(dice: &mut dyn Dice) -> Self {
        let count = dice.roll(MIN_SHAPES, MAX_SHAPES);
        let shapes = (0..count)
            .map(|_| {
                if dice.roll(0, 1) == 0 {
                    make_cube(dice)
                } else {
                    make_tetrahedron(dice)
                }
            })
            .collect::<Vec<_>>();

        let spin = Vec3::new(
            dice.roll(-SPIN_RANGE, SPIN_RANGE) as f32 / 100.0,
            dice.roll(-SPIN_RANGE, SPIN_RANGE) as f32 / 100.0,
            dice.roll(-SPIN_RANGE, SPIN_RANGE) as f32 / 100.0,
        );

        log::info!("scene generated: {} shapes, spin {:?}", shapes.len(), spin);

        Self {
            shapes,
            light: Some(Light::default_ambient()),
            spin,
        }
    }

    /// An empty scene for callers that control contents directly.
    pub fn empty() -> Self {
        Self {
            shapes: Vec::new(),
            light: None,
            spin: Vec3::ZERO,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn light(&self) -> Option<&Light> {
        self.light.as_ref()
    }

    pub fn light_kind(&self) -> Option<LightKind> {
        self.light.as_ref().map(Light::kind)
    }

    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    /// Kinds in draw order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.shapes.iter().map(|s| s.kind)
    }

    /// One render tick worth of animation: the fixed spin increment on every
    /// shape's three angles. No delta-time scaling and no angle wrapping, so
    /// the effective speed is whatever the host's redraw rate makes it.
    pub fn advance(&mut self) {
        for shape in &mut self.shapes {
            shape.rotation += self.spin;
        }
    }

    /// Applies the light panel form. A form missing any field required for
    /// its kind leaves the current light untouched and reports why; a valid
    /// form replaces the light wholesale, so the scene holds exactly one.
    pub fn apply_light_form(&mut self, form: &LightForm) -> LightUpdate {
        match form.parse() {
            Ok(light) => {
                let kind = light.kind();
                self.light = Some(light);
                log::info!("light replaced: {:?}", kind);
                LightUpdate::Applied(kind)
            }
            Err(reason) => {
                log::debug!("light form ignored: {:?}", reason);
                LightUpdate::Ignored(reason)
            }
        }
    }

    /// Directly installs a light, bypassing form validation.
    pub fn set_light(&mut self, light: Light) {
        self.light = Some(light);
    }
}
