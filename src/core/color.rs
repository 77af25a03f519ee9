/// RGB-Farbe eines Polygons (je Kanal 0..=255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Rot-Anteil
    pub r: u8,
    /// Grün-Anteil
    pub g: u8,
    /// Blau-Anteil
    pub b: u8,
}

impl Rgb {
    /// Standardfarbe, wenn keine Farbe gewählt wurde.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Weiß (Standard-Hintergrund der Zeichenfläche).
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Erstellt eine Farbe aus drei Kanälen.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Kanäle als Array `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn default_is_black() {
        assert_eq!(Rgb::default(), Rgb::BLACK);
    }

    #[test]
    fn display_lists_all_channels() {
        assert_eq!(Rgb::new(12, 200, 7).to_string(), "rgb(12, 200, 7)");
        assert_eq!(Rgb::from([1, 2, 3]).to_array(), [1, 2, 3]);
    }
}
