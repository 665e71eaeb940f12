//! Color types, packed pixel layout and HSV gradient interpolation.
//!
//! Pixels are stored as packed `u32` values with channel order
//! (blue, green, red, alpha) from least- to most-significant byte, which reads
//! as `0xAARRGGBB` in hex. [`Rgba::from_packed`] and [`Rgba::to_packed`] are
//! the only place that layout is spelled out.
//!
//! Gradients are interpolated in a byte HSV space computed with integer
//! shift arithmetic, so hue sweeps around the color wheel instead of through
//! gray.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation (`[r, g, b, a]`).
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation (`[r, g, b, a]`).
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Unpack a `0xAARRGGBB` pixel value.
    ///
    /// ```
    /// use trueno_grapher::color::Rgba;
    ///
    /// let c = Rgba::from_packed(0xFF23_D6FF);
    /// assert_eq!(c, Rgba::new(0x23, 0xD6, 0xFF, 0xFF));
    /// ```
    #[must_use]
    pub const fn from_packed(pixel: u32) -> Self {
        Self::new(
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
            (pixel >> 24) as u8,
        )
    }

    /// Pack into a `0xAARRGGBB` pixel value.
    #[must_use]
    pub const fn to_packed(self) -> u32 {
        (self.b as u32) | ((self.g as u32) << 8) | ((self.r as u32) << 16) | ((self.a as u32) << 24)
    }
}

impl From<u32> for Rgba {
    fn from(pixel: u32) -> Self {
        Self::from_packed(pixel)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.to_packed()
    }
}

/// HSV color with every channel scaled to a byte.
///
/// Hue covers the full wheel in 0-255 (six regions of 43 steps), saturation
/// and value are 0-255. Hue is reported as 0 when saturation is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    /// Hue (0-255 around the wheel).
    pub h: u8,
    /// Saturation (0-255).
    pub s: u8,
    /// Value (0-255).
    pub v: u8,
}

impl Hsv {
    /// Create a new HSV color.
    #[must_use]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Convert the RGB channels of a color (alpha is ignored).
    #[must_use]
    pub fn from_rgba(color: Rgba) -> Self {
        let r = i32::from(color.r);
        let g = i32::from(color.g);
        let b = i32::from(color.b);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == 0 {
            return Self::new(0, 0, 0);
        }

        let v = max as u8;
        let s = (255 * (max - min) / max) as u8;
        if s == 0 {
            return Self::new(0, 0, v);
        }

        let span = max - min;
        let h = if max == r {
            43 * (g - b) / span
        } else if max == g {
            85 + 43 * (b - r) / span
        } else {
            171 + 43 * (r - g) / span
        };

        // Negative hues wrap around the byte wheel.
        Self::new(h as u8, s, v)
    }

    /// Convert to an opaque RGBA color.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        if self.s == 0 {
            return Rgba::rgb(self.v, self.v, self.v);
        }

        let h = u32::from(self.h);
        let s = u32::from(self.s);
        let v = u32::from(self.v);

        let region = h / 43;
        let remainder = (h - region * 43) * 6;

        let p = ((v * (255 - s)) >> 8) as u8;
        let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
        let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
        let v = self.v;

        match region {
            0 => Rgba::rgb(v, t, p),
            1 => Rgba::rgb(q, v, p),
            2 => Rgba::rgb(p, v, t),
            3 => Rgba::rgb(p, q, v),
            4 => Rgba::rgb(t, p, v),
            _ => Rgba::rgb(v, p, q),
        }
    }
}

impl From<Rgba> for Hsv {
    fn from(color: Rgba) -> Self {
        Self::from_rgba(color)
    }
}

impl From<Hsv> for Rgba {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgba()
    }
}

/// Interpolate between two colors in HSV space.
///
/// Each HSV channel is blended independently as `a * (1 - t) + b * t` and
/// truncated. `t` is not clamped: values outside `[0, 1]` extrapolate and
/// saturate at the byte limits. Alpha of the result is always 255.
///
/// ```
/// use trueno_grapher::color::{interpolate, Rgba};
///
/// assert_eq!(interpolate(Rgba::RED, Rgba::BLACK, 0.0), Rgba::RED);
/// assert_eq!(interpolate(Rgba::RED, Rgba::BLACK, 1.0), Rgba::BLACK);
/// ```
#[must_use]
pub fn interpolate(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let from = Hsv::from_rgba(a);
    let to = Hsv::from_rgba(b);

    let mix = |x: u8, y: u8| -> u8 { (f32::from(x) * (1.0 - t) + f32::from(y) * t) as u8 };

    Hsv::new(mix(from.h, to.h), mix(from.s, to.s), mix(from.v, to.v)).to_rgba()
}

/// Two-color gradient used by height-mapped plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Color at normalized height 0.
    pub low: Rgba,
    /// Color at normalized height 1.
    pub high: Rgba,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(Rgba::BLACK, Rgba::WHITE)
    }
}

impl Gradient {
    /// Create a gradient from its endpoint colors.
    #[must_use]
    pub const fn new(low: Rgba, high: Rgba) -> Self {
        Self { low, high }
    }

    /// Color at normalized position `t` (see [`interpolate`]).
    #[must_use]
    pub fn at(&self, t: f32) -> Rgba {
        interpolate(self.low, self.high, t)
    }
}
