use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// The all-ones vector.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Create a vector from components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A 3D point or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vector3 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
    /// Depth component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// The all-ones vector.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Create a vector from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drop the depth component.
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Straight-alpha ARGB color with `0..=1` channels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Alpha channel.
    pub a: f64,
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_floats(1.0, 0.0, 0.0, 0.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_floats(0.0, 0.0, 0.0, 0.0);

    /// Create a color from `0..=1` channel values.
    pub const fn from_floats(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self { a, r, g, b }
    }

    /// Create a color from `0..=255` byte channels.
    pub fn from_argb_bytes(a: u8, r: u8, g: u8, b: u8) -> Self {
        fn channel(v: u8) -> f64 {
            f64::from(v) / 255.0
        }

        Self::from_floats(channel(a), channel(r), channel(g), channel(b))
    }

    /// Channel values rounded to bytes, alpha first.
    pub fn to_argb_bytes(self) -> [u8; 4] {
        fn byte(v: f64) -> u8 {
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        }

        [byte(self.a), byte(self.r), byte(self.g), byte(self.b)]
    }

    /// Uppercase `AARRGGBB` hex form, e.g. `FFFF0000` for opaque red.
    pub fn to_hex(self) -> String {
        let [a, r, g, b] = self.to_argb_bytes();
        format!("{a:02X}{r:02X}{g:02X}{b:02X}")
    }

    /// Multiply alpha by the given opacity.
    pub fn multiplied_by_opacity(self, opacity: Opacity) -> Self {
        Self {
            a: self.a * opacity.fraction(),
            ..self
        }
    }

    /// Well-known name for this color, if it has one. Used to make
    /// generated identifiers more descriptive.
    pub fn name(self) -> Option<&'static str> {
        const NAMED: [([u8; 4], &str); 10] = [
            ([0xFF, 0x00, 0x00, 0x00], "Black"),
            ([0xFF, 0xFF, 0xFF, 0xFF], "White"),
            ([0xFF, 0xFF, 0x00, 0x00], "Red"),
            ([0xFF, 0x00, 0xFF, 0x00], "Green"),
            ([0xFF, 0x00, 0x00, 0xFF], "Blue"),
            ([0xFF, 0xFF, 0xFF, 0x00], "Yellow"),
            ([0xFF, 0x00, 0xFF, 0xFF], "Cyan"),
            ([0xFF, 0xFF, 0x00, 0xFF], "Magenta"),
            ([0xFF, 0x80, 0x80, 0x80], "Gray"),
            ([0x00, 0x00, 0x00, 0x00], "Transparent"),
        ];

        let bytes = self.to_argb_bytes();
        NAMED
            .iter()
            .find(|(argb, _)| *argb == bytes)
            .map(|(_, name)| *name)
    }
}

/// An opacity stored as a `0..=1` fraction.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Opacity(f64);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);

    /// Create from a `0..=1` fraction.
    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Create from a `0..=100` percentage, as stored in Lottie files.
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// The `0..=1` fraction.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// The `0..=100` percentage.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// The `0..=255` byte value, rounded.
    pub fn to_byte(self) -> u8 {
        (self.0 * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// `true` when exactly opaque.
    pub fn is_opaque(self) -> bool {
        self.0 == 1.0
    }

    /// `true` when exactly transparent.
    pub fn is_transparent(self) -> bool {
        self.0 == 0.0
    }
}

impl Mul for Opacity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

/// An angle carried in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// The angle in degrees.
    pub degrees: f64,
}

impl Rotation {
    /// No rotation.
    pub const NONE: Self = Self { degrees: 0.0 };

    /// Create from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Create from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// The angle in radians.
    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }
}

impl Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            degrees: self.degrees + rhs.degrees,
        }
    }
}

impl Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            degrees: -self.degrees,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
