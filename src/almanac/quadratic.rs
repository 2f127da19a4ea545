//! Three-point parabolic interpolation for horizon crossings
//!
//! A segment of the rise/set sweep is described by three equally spaced
//! samples `y₋, y₀, y₊` taken at `x = -1, 0, +1` (hours from the segment
//! centre). The unique parabola through them is solved for its roots inside
//! `[-1, 1]`, and each root is classified as a rising or a setting crossing.

/// Parabola `y = a·x² + b·x + c` through `(-1, y₋)`, `(0, y₀)`, `(1, y₊)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Sample at the start of the segment, `x = -1`
    start: f64,
}

/// Horizon crossings found inside one segment, as offsets in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    None,
    Rising(f64),
    Setting(f64),
    Both { rise: f64, set: f64 },
}

impl Crossing {
    pub fn rise(&self) -> Option<f64> {
        match *self {
            Crossing::Rising(x) | Crossing::Both { rise: x, .. } => Some(x),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<f64> {
        match *self {
            Crossing::Setting(x) | Crossing::Both { set: x, .. } => Some(x),
            _ => None,
        }
    }
}

impl Parabola {
    pub fn through(y_minus: f64, y_zero: f64, y_plus: f64) -> Self {
        Parabola {
            a: 0.5 * (y_plus + y_minus) - y_zero,
            b: 0.5 * (y_plus - y_minus),
            c: y_zero,
            start: y_minus,
        }
    }

    pub fn value(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Abscissa of the extremum
    pub fn vertex(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Classify the roots lying in `[-1, 1]`
    ///
    /// With one root the sign at the segment start decides the direction.
    /// With two, the value at the vertex does: a minimum below the horizon
    /// means the body sets first and rises again.
    pub fn crossing(&self) -> Crossing {
        if self.a == 0.0 {
            return self.linear_crossing();
        }

        let discriminant = self.discriminant();
        if discriminant < 0.0 {
            return Crossing::None;
        }

        let xe = self.vertex();
        let ye = self.value(xe);
        let dx = 0.5 * discriminant.sqrt() / self.a.abs();
        let (z1, z2) = (xe - dx, xe + dx);

        match (z1.abs() <= 1.0, z2.abs() <= 1.0) {
            (true, true) if ye < 0.0 => Crossing::Both { rise: z2, set: z1 },
            (true, true) => Crossing::Both { rise: z1, set: z2 },
            (true, false) => self.single(z1),
            (false, true) => self.single(z2),
            (false, false) => Crossing::None,
        }
    }

    fn single(&self, root: f64) -> Crossing {
        if self.start < 0.0 {
            Crossing::Rising(root)
        } else {
            Crossing::Setting(root)
        }
    }

    // Three collinear samples
    fn linear_crossing(&self) -> Crossing {
        if self.b == 0.0 {
            return Crossing::None;
        }
        let root = -self.c / self.b;
        if root.abs() <= 1.0 {
            self.single(root)
        } else {
            Crossing::None
        }
    }
}
