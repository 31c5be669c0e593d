//! The fixed render parameters.  Everything here is chosen at build
//! time; nothing in the render path reads configuration at runtime.

// Render target and domain.

/// Output image width in pixels.
pub const WIDTH: usize = 1920;
/// Output image height in pixels.
pub const HEIGHT: usize = 1080;
/// Left edge of the rendered slice of the complex plane.
pub const XMIN: f64 = -2.5;
/// Right edge of the rendered slice of the complex plane.
pub const XMAX: f64 = 1.0;
/// Bottom edge of the rendered slice of the complex plane.
pub const YMIN: f64 = -1.0;
/// Top edge of the rendered slice of the complex plane.
pub const YMAX: f64 = 1.0;

// Classifier budgets.

/// Iteration budget per orbit before a point is given up on as
/// unresolved.
pub const MAX_ITERATIONS: usize = 10000;
/// Size of the cycle-detection window; cycles longer than this are
/// reported as unresolved.
pub const MAX_PERIOD: usize = 30;
/// Distance within which two iterates count as the same point.  1e-9
/// is too tight and turns the bulb interiors into noise.
pub const THRESHOLD: f64 = 1e-6;
/// Precomputed square of [`THRESHOLD`]; all distance comparisons work
/// on squared magnitudes.
pub const THRESHOLD_SQUARED: f64 = THRESHOLD * THRESHOLD;
/// Escapes at or before this iteration draw white; slower escapes
/// draw black, which keeps the filaments near the boundary dark.
pub const FAST_ESCAPE_CUTOFF: usize = 100;

// Palette.

/// Stride for the palette interleave.  A prime keeps structurally
/// related periods visually apart: the bulbs hanging off the period-2
/// bulb all have even periods, so any even stride would band them.
pub const INTERLEAVE_FACTOR: usize = 17;
/// Hue, in degrees, of the first gradient stop.
pub const HUE_START: f32 = 200.0;
/// Hue, in degrees, of the last gradient stop.
pub const HUE_STOP: f32 = 330.0;

// Anti-aliasing.

/// Enables jittered sub-pixel sampling.
pub const AA: bool = true;
/// Number of jittered samples averaged per pixel when [`AA`] is set.
pub const AA_SAMPLES: usize = 30;

// Output paths.

/// Where the palette export for the viewer frontend lands.
pub const COLOR_OUTPUT: &str = "gui/colors.ts";
/// Where the rendered bitmap lands.
pub const RENDER_OUTPUT: &str = "render.bmp";
