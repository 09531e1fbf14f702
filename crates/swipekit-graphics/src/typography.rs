//! Font tokens for action icons (data only, no rendering)

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Size and weight of an action's icon glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionFont {
    pub size: f32,
    pub weight: FontWeight,
}

impl ActionFont {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }
}

impl Default for ActionFont {
    fn default() -> Self {
        Self::new(17.0, FontWeight::NORMAL)
    }
}
