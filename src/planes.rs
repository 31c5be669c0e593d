//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the real plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the real
//! plane.
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.  For that reason,
/// the lower-left-hand corner is not included.
#[derive(Copy, Clone, Debug)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the x, y of a point in a region.  Yes, it's the exact
/// same. Names are important.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// We don't need a Point, as a single Complex number is a Point.

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex, real cartesian plane.  Maps pixels on one to points
/// on the other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper where {
    /// Constructor.  Takes a width and height describing the integral
    /// plane, and two points describing the complex plane.  The
    /// integral plane must be non-empty and the complex corners must
    /// be strictly ordered on both axes; a degenerate plane would
    /// leave the per-pixel jitter ranges empty.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if width == 0 || height == 0 {
            return Err("The integral plane has no pixels.".to_string());
        }

        if rightupper.re <= leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im <= leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner".to_string(),
            );
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// corresponding point on the complex cartesian plane.
    ///
    /// The arithmetic is written out as `min + (pixel / extent) *
    /// (max - min)` on each axis, in exactly that association, and
    /// the function is kept out of its callers' codegen.  Builds that
    /// enable reassociating float optimizations elsewhere must not
    /// reorder this computation: doing so shifts the pixel-to-point
    /// correspondence visibly at the image edges.
    #[inline(never)]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let IntegralPlane(width, height) = self.integral_plane;
        let ComplexPlane(leftlower, rightupper) = self.complex_plane;
        Complex::new(
            leftlower.re + ((pixel.0 as f64) / (width as f64)) * (rightupper.re - leftlower.re),
            leftlower.im + ((pixel.1 as f64) / (height as f64)) * (rightupper.im - leftlower.im),
        )
    }

    /// The width and height of a single pixel in complex-plane units.
    /// The anti-aliasing jitter draws its offsets from half this on
    /// either side of a pixel's center.
    pub fn pixel_size(&self) -> (f64, f64) {
        let IntegralPlane(width, height) = self.integral_plane;
        let ComplexPlane(leftlower, rightupper) = self.complex_plane;
        (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        )
    }
}
