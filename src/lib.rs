#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Period-colored Mandelbrot renderer
//!
//! The familiar picture of the Mandelbrot set colors the points
//! *outside* the set by how fast they fly off to infinity, and leaves
//! the interior a featureless black heart.  This renderer looks the
//! other way: for every point whose orbit stays bounded, it watches
//! the orbit until it revisits somewhere it has recently been, and
//! colors the point by the length of that cycle.  The cardioid lights
//! up as the period-1 region, the big bulb to its left as period 2,
//! and every smaller bulb gets the color of its own cycle length,
//! turning the black heart into an anatomy chart.
//!
//! The work is brute force: every pixel is mapped to a point on the
//! complex plane, classified by direct iteration, anti-aliased by
//! averaging a handful of jittered re-classifications, and written
//! into a shared image buffer by a pool of worker threads that claim
//! one full row at a time off an atomic counter.

extern crate crossbeam;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod brute;
pub mod config;
pub mod orbit;
pub mod palette;
pub mod planes;

pub use brute::{color_point, BruteRenderer, Sampler};
pub use orbit::{classify, OrbitClass, OrbitHistory};
pub use palette::{Palette, Rgb};
pub use planes::{ComplexPlane, IntegralPlane, Pixel, PlaneMapper};
