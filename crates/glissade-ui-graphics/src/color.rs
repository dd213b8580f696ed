//! Color representation for default styles

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self(self.0, self.1, self.2, a)
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const BLUE: Color = Color::rgb(0.0, 0.3, 0.9);
    pub const YELLOW: Color = Color::rgb(1.0, 0.85, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.55, 0.0);
    pub const PURPLE: Color = Color::rgb(0.55, 0.2, 0.8);
}
