//! RGBA colors for action backgrounds and icons

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn alpha(&self) -> f32 {
        self.3
    }

    /// Returns the color with its alpha multiplied by `factor`.
    ///
    /// Used for the icon peek, where the icon fades in as the region opens.
    pub fn fade(&self, factor: f32) -> Self {
        Self(self.0, self.1, self.2, self.3 * factor.clamp(0.0, 1.0))
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    /// Default action background.
    pub const NEUTRAL: Color = Color::from_rgb_u8(142, 142, 147);
}

impl Default for Color {
    fn default() -> Self {
        Color::NEUTRAL
    }
}
