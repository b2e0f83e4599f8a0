use glam::Vec3;

/// The two configurable light kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
}

/// The single scene light. The scene owns at most one of these; applying a
/// valid form replaces the previous instance outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Directional {
        color: [f32; 3],
        position: Vec3,
        target: Vec3,
    },
}

impl Light {
    /// The light every freshly built scene starts with.
    pub fn default_ambient() -> Self {
        Light::Ambient {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Ambient { .. } => LightKind::Ambient,
            Light::Directional { .. } => LightKind::Directional,
        }
    }
}

/// Raw state of the light panel. Text fields stay strings until Apply so the
/// user can leave them half-edited without the scene reacting.
#[derive(Debug, Clone)]
pub struct LightForm {
    pub kind: LightKind,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub intensity: String,
    pub sun_x: String,
    pub sun_y: String,
    pub sun_z: String,
    pub target_x: String,
    pub target_y: String,
    pub target_z: String,
}

impl Default for LightForm {
    fn default() -> Self {
        Self {
            kind: LightKind::Ambient,
            red: String::new(),
            green: String::new(),
            blue: String::new(),
            intensity: String::new(),
            sun_x: String::new(),
            sun_y: String::new(),
            sun_z: String::new(),
            target_x: String::new(),
            target_y: String::new(),
            target_z: String::new(),
        }
    }
}

/// Why an incomplete form was dropped. Dropping stays silent toward the user;
/// the reason exists so callers and tests can observe the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    MissingColor,
    MissingSunPosition,
    MissingTarget,
}

/// Outcome of applying a light form to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightUpdate {
    Applied(LightKind),
    Ignored(IgnoreReason),
}

impl LightForm {
    /// Validates the form into a light. Incomplete fields for the selected
    /// kind yield the ignore reason instead; the current scene light is not
    /// consulted or touched here.
    pub fn parse(&self) -> Result<Light, IgnoreReason> {
        let color = self
            .parse_color()
            .ok_or(IgnoreReason::MissingColor)?;

        match self.kind {
            LightKind::Ambient => {
                // Intensity is optional on the form; absent means full.
                let intensity = parse_number(&self.intensity).unwrap_or(1.0);
                Ok(Light::Ambient { color, intensity })
            }
            LightKind::Directional => {
                let position = parse_vec3(&self.sun_x, &self.sun_y, &self.sun_z)
                    .ok_or(IgnoreReason::MissingSunPosition)?;
                // Each target axis reads its own field. An earlier version of
                // this demo fed the Z coordinate from the Y input.
                let target = parse_vec3(&self.target_x, &self.target_y, &self.target_z)
                    .ok_or(IgnoreReason::MissingTarget)?;
                Ok(Light::Directional {
                    color,
                    position,
                    target,
                })
            }
        }
    }

    /// RGB channels are entered as 0-255 and normalized for the shader.
    fn parse_color(&self) -> Option<[f32; 3]> {
        let r = parse_channel(&self.red)?;
        let g = parse_channel(&self.green)?;
        let b = parse_channel(&self.blue)?;
        Some([r, g, b])
    }
}

fn parse_number(field: &str) -> Option<f32> {
    field.trim().parse::<f32>().ok()
}

fn parse_channel(field: &str) -> Option<f32> {
    let value = parse_number(field)?;
    if (0.0..=255.0).contains(&value) {
        Some(value / 255.0)
    } else {
        None
    }
}

fn parse_vec3(x: &str, y: &str, z: &str) -> Option<Vec3> {
    Some(Vec3::new(
        parse_number(x)?,
        parse_number(y)?,
        parse_number(z)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_ambient() -> LightForm {
        LightForm {
            kind: LightKind::Ambient,
            red: "255".into(),
            green: "128".into(),
            blue: "0".into(),
            ..LightForm::default()
        }
    }

    #[test]
    fn ambient_defaults_intensity_to_one() {
        let light = filled_ambient().parse().expect("complete ambient form");
        assert_eq!(
            light,
            Light::Ambient {
                color: [1.0, 128.0 / 255.0, 0.0],
                intensity: 1.0
            }
        );
    }

    #[test]
    fn zero_channel_is_a_valid_color() {
        let form = filled_ambient();
        assert!(form.parse().is_ok(), "channel 0 must not count as missing");
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        let mut form = filled_ambient();
        form.red = "300".into();
        assert_eq!(form.parse(), Err(IgnoreReason::MissingColor));
    }

    #[test]
    fn directional_requires_sun_and_target() {
        let mut form = filled_ambient();
        form.kind = LightKind::Directional;
        assert_eq!(form.parse(), Err(IgnoreReason::MissingSunPosition));

        form.sun_x = "1".into();
        form.sun_y = "2".into();
        form.sun_z = "3".into();
        assert_eq!(form.parse(), Err(IgnoreReason::MissingTarget));
    }

    #[test]
    fn directional_target_axes_are_independent() {
        let mut form = filled_ambient();
        form.kind = LightKind::Directional;
        form.sun_x = "1".into();
        form.sun_y = "2".into();
        form.sun_z = "3".into();
        form.target_x = "4".into();
        form.target_y = "5".into();
        form.target_z = "6".into();

        match form.parse().expect("complete directional form") {
            Light::Directional { target, .. } => {
                assert_eq!(target, Vec3::new(4.0, 5.0, 6.0), "each field drives its own axis");
            }
            other => panic!("expected directional light, got {:?}", other),
        }
    }
}
