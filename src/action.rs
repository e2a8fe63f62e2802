//! Motion primitives and poses, the gene-level building blocks of a genome.
use std::fmt;
use std::hash::{Hash, Hasher};

/// A robot pose on the grid, position in cell coordinates, heading in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub theta_deg: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, theta_deg: f32) -> Self {
        Self {
            x,
            y,
            theta_deg: normalize_angle_deg(theta_deg),
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.1}deg)", self.x, self.y, self.theta_deg)
    }
}

/// One discrete motion primitive in a genome.
///
/// `Straight` and `Curve` travel at clean-speed and count as coverage,
/// `CStraight` and `CCurve` travel at drive-speed (fast transfer, no
/// coverage), `Rotate` turns in place and costs rotation-time only.
///
/// Distances and radii are non-negative, angles are normalized into
/// `(-180, 180]`.
#[derive(Clone, Copy, Debug)]
pub enum Action {
    Straight { distance_cm: f32 },
    CStraight { distance_cm: f32 },
    Rotate { angle_deg: f32 },
    Curve { angle_deg: f32, radius_cm: f32 },
    CCurve { angle_deg: f32, radius_cm: f32 },
}

impl Action {
    /// Clamp distance/radius to non-negative and fold the angle into `(-180, 180]`.
    pub fn normalized(self) -> Self {
        match self {
            Action::Straight { distance_cm } => Action::Straight {
                distance_cm: distance_cm.max(0.0),
            },
            Action::CStraight { distance_cm } => Action::CStraight {
                distance_cm: distance_cm.max(0.0),
            },
            Action::Rotate { angle_deg } => Action::Rotate {
                angle_deg: normalize_angle_deg(angle_deg),
            },
            Action::Curve {
                angle_deg,
                radius_cm,
            } => Action::Curve {
                angle_deg: normalize_angle_deg(angle_deg),
                radius_cm: radius_cm.max(0.0),
            },
            Action::CCurve {
                angle_deg,
                radius_cm,
            } => Action::CCurve {
                angle_deg: normalize_angle_deg(angle_deg),
                radius_cm: radius_cm.max(0.0),
            },
        }
    }

    /// The angle field, if the variant carries one.
    pub fn angle_deg(&self) -> Option<f32> {
        match self {
            Action::Rotate { angle_deg }
            | Action::Curve { angle_deg, .. }
            | Action::CCurve { angle_deg, .. } => Some(*angle_deg),
            _ => None,
        }
    }

    /// Overwrite the angle field. Returns false for angle-less variants.
    pub fn set_angle_deg(&mut self, value: f32) -> bool {
        match self {
            Action::Rotate { angle_deg }
            | Action::Curve { angle_deg, .. }
            | Action::CCurve { angle_deg, .. } => {
                *angle_deg = normalize_angle_deg(value);
                true
            }
            _ => false,
        }
    }

    /// Multiply the distance magnitude by a non-negative factor. For curves
    /// this scales the radius (and thereby the arc length). Returns false
    /// for `Rotate`.
    pub fn scale_distance(&mut self, factor: f32) -> bool {
        let factor = factor.max(0.0);
        match self {
            Action::Straight { distance_cm } | Action::CStraight { distance_cm } => {
                *distance_cm *= factor;
                true
            }
            Action::Curve { radius_cm, .. } | Action::CCurve { radius_cm, .. } => {
                *radius_cm *= factor;
                true
            }
            Action::Rotate { .. } => false,
        }
    }

    /// Path length of the primitive in centimeters. Zero for `Rotate`.
    pub fn travel_cm(&self) -> f32 {
        match self {
            Action::Straight { distance_cm } | Action::CStraight { distance_cm } => *distance_cm,
            Action::Rotate { .. } => 0.0,
            Action::Curve {
                angle_deg,
                radius_cm,
            }
            | Action::CCurve {
                angle_deg,
                radius_cm,
            } => angle_deg.abs().to_radians() * radius_cm,
        }
    }

    /// Travels at clean-speed and counts as coverage.
    pub fn is_clean(&self) -> bool {
        matches!(self, Action::Straight { .. } | Action::Curve { .. })
    }

    /// A zero-action: a distance-bearing primitive whose cell displacement
    /// rounds to zero at the given map resolution. `Rotate` carries no
    /// distance and is never a zero-action.
    pub fn is_zero(&self, map_resolution_cm: f32) -> bool {
        match self {
            Action::Rotate { .. } => false,
            _ => (self.travel_cm() / map_resolution_cm).round() as u32 == 0,
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Action::Straight { .. } => 0,
            Action::CStraight { .. } => 1,
            Action::Rotate { .. } => 2,
            Action::Curve { .. } => 3,
            Action::CCurve { .. } => 4,
        }
    }

    fn field_bits(&self) -> (u32, u32) {
        match self {
            Action::Straight { distance_cm } | Action::CStraight { distance_cm } => {
                (distance_cm.to_bits(), 0)
            }
            Action::Rotate { angle_deg } => (angle_deg.to_bits(), 0),
            Action::Curve {
                angle_deg,
                radius_cm,
            }
            | Action::CCurve {
                angle_deg,
                radius_cm,
            } => (angle_deg.to_bits(), radius_cm.to_bits()),
        }
    }
}

// Content equality over exact bit patterns, so actions can participate in
// hashing and multiset comparisons.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.discriminant() == other.discriminant() && self.field_bits() == other.field_bits()
    }
}
impl Eq for Action {}

impl Hash for Action {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.discriminant());
        let (a, b) = self.field_bits();
        state.write_u32(a);
        state.write_u32(b);
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Straight { distance_cm } => write!(f, "S:{}", distance_cm),
            Action::CStraight { distance_cm } => write!(f, "F:{}", distance_cm),
            Action::Rotate { angle_deg } => write!(f, "R:{}", angle_deg),
            Action::Curve {
                angle_deg,
                radius_cm,
            } => write!(f, "C:{}:{}", angle_deg, radius_cm),
            Action::CCurve {
                angle_deg,
                radius_cm,
            } => write!(f, "V:{}:{}", angle_deg, radius_cm),
        }
    }
}

/// Fold an angle into `(-180, 180]`.
pub fn normalize_angle_deg(angle_deg: f32) -> f32 {
    let mut a = angle_deg % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}
