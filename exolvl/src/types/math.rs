use crate::codec::wire_struct;

wire_struct! {
    /// 2D vector (positions, scales, gravity)
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

wire_struct! {
    /// Linear RGBA colour, components in 0..=1
    #[derive(Debug, Clone, Copy, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Colour {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }
}

impl Colour {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// Opaque black
impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};

    #[test]
    fn test_colour_layout() {
        let colour = Colour::new(0.25, 0.5, 0.75, 1.0);
        let bytes = encode_to_vec(&colour).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &0.25f32.to_le_bytes());
        assert_eq!(&bytes[12..16], &1.0f32.to_le_bytes());
        assert_eq!(decode_from_slice::<Colour>(&bytes).unwrap(), colour);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Colour::default().a, 1.0);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }
}
