//! Conversion routing between tagged color spaces.
//!
//! A [`Conversion`] is a sequence of [`Step`]s, each an edge of the space
//! graph, applied in order. Routes are computed, not hand-assembled: the
//! colorimetric chain Lab — XYZ — Linear RGB — sRGB is walked directly, and
//! the cylindrical spaces hang off the sRGB hub, so every route is minimal
//! and deterministic.

use chroma_core::{Space, Triple};
use chroma_spaces::{
    hsl_to_rgb, hsv_to_rgb, lab_to_xyz, linear_to_xyz, rgb_to_hsl, rgb_to_hsv, xyz_to_lab,
    xyz_to_linear,
};
use chroma_transfer::srgb;

/// A single edge of the conversion graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// sRGB -> linear RGB (per-channel EOTF).
    Decode,
    /// Linear RGB -> sRGB (per-channel OETF).
    Encode,
    /// Linear RGB -> XYZ (D65 matrix).
    LinearToXyz,
    /// XYZ -> linear RGB (inverse matrix).
    XyzToLinear,
    /// XYZ -> CIELAB.
    XyzToLab,
    /// CIELAB -> XYZ.
    LabToXyz,
    /// sRGB -> HSV.
    RgbToHsv,
    /// HSV -> sRGB.
    HsvToRgb,
    /// sRGB -> HSL.
    RgbToHsl,
    /// HSL -> sRGB.
    HslToRgb,
}

impl Step {
    /// Applies this step to a triple.
    #[inline]
    pub fn apply(self, value: Triple) -> Triple {
        match self {
            Step::Decode => srgb::eotf_rgb(value),
            Step::Encode => srgb::oetf_rgb(value),
            Step::LinearToXyz => linear_to_xyz(value),
            Step::XyzToLinear => xyz_to_linear(value),
            Step::XyzToLab => xyz_to_lab(value),
            Step::LabToXyz => lab_to_xyz(value),
            Step::RgbToHsv => rgb_to_hsv(value),
            Step::HsvToRgb => hsv_to_rgb(value),
            Step::RgbToHsl => rgb_to_hsl(value),
            Step::HslToRgb => hsl_to_rgb(value),
        }
    }
}

/// Position of a space along the colorimetric chain; cylindrical spaces
/// are not on the chain and route via the sRGB hub.
#[inline]
fn chain_pos(space: Space) -> Option<usize> {
    match space {
        Space::Lab => Some(0),
        Space::Xyz => Some(1),
        Space::LinearRgb => Some(2),
        Space::Srgb => Some(3),
        Space::Hsv | Space::Hsl => None,
    }
}

/// Step from chain position `i` toward `i + 1` (Lab-to-sRGB direction).
#[inline]
fn step_up(i: usize) -> Step {
    match i {
        0 => Step::LabToXyz,
        1 => Step::XyzToLinear,
        _ => Step::Encode,
    }
}

/// Step from chain position `i` toward `i - 1` (sRGB-to-Lab direction).
#[inline]
fn step_down(i: usize) -> Step {
    match i {
        3 => Step::Decode,
        2 => Step::LinearToXyz,
        _ => Step::XyzToLab,
    }
}

/// A routed conversion between two tagged spaces.
///
/// Construction is total: every pair of spaces has a route, so there is no
/// failure mode. An identity route (`from == to`) has no steps.
///
/// # Example
///
/// ```rust
/// use chroma_color::{Conversion, Space, Step};
///
/// let conv = Conversion::route(Space::Srgb, Space::Lab);
/// assert_eq!(
///     conv.steps(),
///     &[Step::Decode, Step::LinearToXyz, Step::XyzToLab]
/// );
///
/// let lab = conv.apply([1.0, 1.0, 1.0]);
/// assert!((lab[0] - 100.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    steps: Vec<Step>,
}

impl Conversion {
    /// Computes the route from `from` to `to`.
    pub fn route(from: Space, to: Space) -> Self {
        let mut steps = Vec::new();
        if from == to {
            return Self { steps };
        }

        // Step off the cylinder onto the sRGB hub
        let start = match from {
            Space::Hsv => {
                steps.push(Step::HsvToRgb);
                Space::Srgb
            }
            Space::Hsl => {
                steps.push(Step::HslToRgb);
                Space::Srgb
            }
            other => other,
        };

        // Cylindrical targets are reached from the hub by one final step
        let (line_target, last) = match to {
            Space::Hsv => (Space::Srgb, Some(Step::RgbToHsv)),
            Space::Hsl => (Space::Srgb, Some(Step::RgbToHsl)),
            other => (other, None),
        };

        let mut pos = chain_pos(start).unwrap_or(3);
        let target = chain_pos(line_target).unwrap_or(3);
        while pos < target {
            steps.push(step_up(pos));
            pos += 1;
        }
        while pos > target {
            steps.push(step_down(pos));
            pos -= 1;
        }

        if let Some(step) = last {
            // Identity HSV -> HSV etc. was handled above; a cylinder-to-
            // cylinder route still re-expresses through sRGB
            steps.push(step);
        }

        Self { steps }
    }

    /// The steps of this route, in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps in the route.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether this is the identity route.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies the route to a triple.
    #[inline]
    pub fn apply(&self, mut value: Triple) -> Triple {
        for step in &self.steps {
            value = step.apply(value);
        }
        value
    }
}

/// One-shot conversion of a triple between two tagged spaces.
///
/// # Example
///
/// ```rust
/// use chroma_color::{convert, Space};
///
/// let hsl = convert([0.0, 1.0, 0.0], Space::Srgb, Space::Hsl);
/// assert_eq!(hsl, [120.0, 1.0, 0.5]);
/// ```
#[inline]
pub fn convert(value: Triple, from: Space, to: Space) -> Triple {
    Conversion::route(from, to).apply(value)
}
