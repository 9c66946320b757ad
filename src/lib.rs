//! # Colour Code Conversion
//!
//! This crate validates and converts textual colour codes in the three
//! conventional forms: hexadecimal (`#rrggbb`), RGB (`rgb(r, g, b)`) and
//! HSL (`hsl(h, s%, l%)`).
//!
//! The central chain is hex → RGB → HSL. Validators gate the fallible
//! conversions, so a malformed input is reported as a [`ParseError`]
//! carrying the offending string rather than producing a numeric result.
//!
//! ```
//! use colorcode::{hex_to_hsl, hex_to_rgb};
//!
//! assert_eq!(hex_to_rgb("#f9e6e1"), "rgb(249, 230, 225)");
//! assert_eq!(hex_to_hsl("#f9e6e1").unwrap(), "hsl(13, 67%, 93%)");
//! ```
//!
//! The string functions are thin layers over the typed values [`Rgb`]
//! and [`Hsl`], whose `Display` impls render the canonical forms with a
//! comma and a single space between components.

mod error;
mod parse;

pub use error::ParseError;
pub use parse::{is_hex_code, is_hsl_code, is_rgb_code, split_hsl};

use core::fmt::{self, Display};
use core::str::FromStr;

/// A colour in the RGB space, one byte per channel.
///
/// # Examples
///
/// ```
/// use colorcode::Rgb;
///
/// let salmon = Rgb::from_hex("#f9e6e1")?;
/// assert_eq!(salmon.to_string(), "rgb(249, 230, 225)");
/// # Ok::<(), colorcode::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black (`#000000`).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (`#ffffff`).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a colour from its three channel bytes.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` code into its channel bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFormat`] carrying the input if it is
    /// not a well-formed hex code.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        if !is_hex_code(hex) {
            tracing::debug!("rejected hex colour code: {:?}", hex);
            return Err(ParseError::InvalidFormat(hex.to_owned()));
        }
        let [r, g, b] = parse::hex_channels(hex);
        Ok(Self { r, g, b })
    }

    /// Renders the colour as a `#rrggbb` hex code.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the colour into HSL space.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorcode::{Hsl, Rgb};
    ///
    /// assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
    /// ```
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        hsl_from_unit(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A colour in the HSL space.
///
/// Hue is measured in degrees, nominally in `[0, 360)`; saturation and
/// lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: u16,
    /// Saturation percentage (0-100).
    pub s: u8,
    /// Lightness percentage (0-100).
    pub l: u8,
}

impl Hsl {
    /// Creates a colour from its hue, saturation and lightness
    /// components.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Converts a hex colour code to its `rgb(r, g, b)` form.
///
/// This is the unchecked fast path: the input must already be a valid
/// hex code (see [`is_hex_code`]).
///
/// # Panics
///
/// Panics if `hex` is not a `#` marker followed by six hexadecimal
/// digits. Use [`Rgb::from_hex`] or [`hex_to_hsl`] where the input has
/// not been validated.
///
/// # Examples
///
/// ```
/// use colorcode::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#000000"), "rgb(0, 0, 0)");
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> String {
    let [r, g, b] = parse::hex_channels(hex);
    Rgb::new(r, g, b).to_string()
}

/// Converts an `rgb(r, g, b)` code to its `hsl(h, s%, l%)` form.
///
/// The shape of the input is validated first; the numeric range of the
/// components is not (matching [`is_rgb_code`]), so channels above 255
/// are accepted and produce unspecified output.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormat`] carrying the input if it is
/// not a well-formed RGB code.
///
/// # Examples
///
/// ```
/// use colorcode::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl("rgb(255, 0, 0)").unwrap(), "hsl(0, 100%, 50%)");
/// ```
pub fn rgb_to_hsl(rgb: &str) -> Result<String, ParseError> {
    if !is_rgb_code(rgb) {
        tracing::debug!("rejected RGB colour code: {:?}", rgb);
        return Err(ParseError::InvalidFormat(rgb.to_owned()));
    }

    let inner = &rgb[4..rgb.len() - 1];
    let mut channels = [0.0_f64; 3];
    for (slot, token) in channels.iter_mut().zip(inner.split(',')) {
        let value = token
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(rgb.to_owned()))?;
        *slot = f64::from(value) / 255.0;
    }

    let [r, g, b] = channels;
    Ok(hsl_from_unit(r, g, b).to_string())
}

/// Converts a hex colour code to its `hsl(h, s%, l%)` form.
///
/// Validates the hex code, extracts the channel bytes and runs the HSL
/// derivation. The intermediate RGB value is well-formed by
/// construction, so no second validation takes place.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormat`] carrying the input if it is
/// not a well-formed hex code.
///
/// # Examples
///
/// ```
/// use colorcode::hex_to_hsl;
///
/// assert_eq!(hex_to_hsl("#f9e6e1").unwrap(), "hsl(13, 67%, 93%)");
/// assert!(hex_to_hsl("not-a-hex").is_err());
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<String, ParseError> {
    let rgb = Rgb::from_hex(hex)?;
    Ok(rgb.to_hsl().to_string())
}

/// Piecewise RGB→HSL derivation over unit-range channels. Hue comes out
/// in turns, saturation and lightness as fractions.
#[allow(clippy::many_single_char_names, clippy::suboptimal_flops)]
fn hsl_components(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let difference = max - min;
    let s = if l > 0.5 {
        difference / (2.0 - max - min)
    } else {
        difference / (max + min)
    };

    // Red is checked first, so ties between channels resolve in
    // red-green-blue order. The +6 term keeps hue non-negative when the
    // wheel wraps past red.
    let h = if max == r {
        (g - b) / difference + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / difference + 2.0
    } else {
        (r - g) / difference + 4.0
    };

    (h / 6.0, s, l)
}

/// Rounds unit-range components into an [`Hsl`] value. Half-way cases
/// round away from zero; out-of-range components saturate at the
/// integer bounds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_from_unit(r: f64, g: f64, b: f64) -> Hsl {
    let (h, s, l) = hsl_components(r, g, b);
    Hsl::new(
        (h * 360.0).round() as u16,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_extracts_channel_bytes() {
        assert_eq!(hex_to_rgb("#000000"), "rgb(0, 0, 0)");
        assert_eq!(hex_to_rgb("#ff8001"), "rgb(255, 128, 1)");
        assert_eq!(hex_to_rgb("#FFFFFF"), "rgb(255, 255, 255)");
    }

    #[test]
    #[should_panic(expected = "hexadecimal")]
    fn hex_to_rgb_panics_on_unvalidated_garbage() {
        hex_to_rgb("#zzzzzz");
    }

    #[test]
    fn rgb_to_hsl_achromatic_inputs() {
        assert_eq!(rgb_to_hsl("rgb(0, 0, 0)").unwrap(), "hsl(0, 0%, 0%)");
        assert_eq!(rgb_to_hsl("rgb(255, 255, 255)").unwrap(), "hsl(0, 0%, 100%)");
        assert_eq!(rgb_to_hsl("rgb(128, 128, 128)").unwrap(), "hsl(0, 0%, 50%)");
    }

    #[test]
    fn rgb_to_hsl_primary_hues() {
        assert_eq!(rgb_to_hsl("rgb(255, 0, 0)").unwrap(), "hsl(0, 100%, 50%)");
        assert_eq!(rgb_to_hsl("rgb(0, 255, 0)").unwrap(), "hsl(120, 100%, 50%)");
        assert_eq!(rgb_to_hsl("rgb(0, 0, 255)").unwrap(), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn rgb_to_hsl_wraps_hue_when_blue_exceeds_green() {
        assert_eq!(rgb_to_hsl("rgb(255, 0, 128)").unwrap(), "hsl(330, 100%, 50%)");
    }

    #[test]
    fn rgb_to_hsl_rejects_malformed_codes() {
        let err = rgb_to_hsl("rgb(255, 0)").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("rgb(255, 0)".into()));
        assert!(rgb_to_hsl("hsl(1, 2%, 3%)").is_err());
        assert!(rgb_to_hsl("").is_err());
    }

    #[test]
    fn rgb_to_hsl_accepts_out_of_range_channels() {
        // The validator checks shape only, so three-digit channels above
        // 255 still convert; the output is unspecified but stable.
        assert!(rgb_to_hsl("rgb(256,0,0)").is_ok());
        assert!(rgb_to_hsl("rgb(999, 999, 999)").is_ok());
    }

    #[test]
    fn hex_to_hsl_converts_the_full_chain() {
        assert_eq!(hex_to_hsl("#f9e6e1").unwrap(), "hsl(13, 67%, 93%)");
        assert_eq!(hex_to_hsl("#000000").unwrap(), "hsl(0, 0%, 0%)");
        assert_eq!(hex_to_hsl("#ff0000").unwrap(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn hex_to_hsl_rejects_invalid_codes() {
        let err = hex_to_hsl("not-a-hex").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("not-a-hex".into()));
        assert!(hex_to_hsl("#12345").is_err());
        assert!(hex_to_hsl("123456").is_err());
    }

    #[test]
    fn typed_values_round_trip_hex() {
        let rgb = Rgb::from_hex("#1a2b3c").unwrap();
        assert_eq!(rgb, Rgb::new(26, 43, 60));
        assert_eq!(rgb.to_hex(), "#1a2b3c");
        assert_eq!("#1A2B3C".parse::<Rgb>().unwrap(), rgb);
    }

    #[test]
    fn display_renders_canonical_forms() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Hsl::new(13, 66, 93).to_string(), "hsl(13, 66%, 93%)");
        assert_eq!(Rgb::from([4, 5, 6]).to_string(), "rgb(4, 5, 6)");
        assert_eq!(Rgb::from((7, 8, 9)), Rgb::new(7, 8, 9));
    }

    #[test]
    fn constants_match_their_hex_codes() {
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE, Rgb::from_hex("#ffffff").unwrap());
    }

    #[test]
    fn typed_conversion_matches_string_pipeline() {
        let rgb = Rgb::new(249, 230, 225);
        assert_eq!(rgb.to_hsl(), Hsl::new(13, 67, 93));
        assert_eq!(
            rgb_to_hsl(&rgb.to_string()).unwrap(),
            rgb.to_hsl().to_string()
        );
    }
}
