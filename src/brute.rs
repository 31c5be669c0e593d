// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The brute-force renderer.  Every pixel of the image is classified
//! independently, so the work is sharded by row: workers pull row
//! indices off a shared atomic cursor and each owns its row outright,
//! which keeps the hot path free of locks.

extern crate crossbeam;
extern crate rand;

use num::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::io;
use std::io::Write;
use std::slice;
use std::sync::atomic::{AtomicUsize, Ordering};

use config;
use orbit::{classify, OrbitClass};
use palette::{Palette, Rgb};
use planes::{IntegralPlane, Pixel, PlaneMapper};

/// Maps a classification verdict to a pixel color.  Points that leave
/// the set quickly draw the bright exterior; slow escapees and
/// undecided points fall to black; everything else is colored by its
/// cycle length.
pub fn color_point(class: OrbitClass, palette: &Palette) -> Rgb {
    match class {
        OrbitClass::Escaped { time } if time <= config::FAST_ESCAPE_CUTOFF => Rgb::WHITE,
        OrbitClass::Escaped { .. } => Rgb::BLACK,
        OrbitClass::Unresolved => Rgb::BLACK,
        OrbitClass::Periodic { period } => palette.color(period),
    }
}

/// Classifies and colors one pixel, optionally anti-aliased.  With
/// anti-aliasing, each sample is the pixel center plus a jitter drawn
/// uniformly from the pixel's own footprint, and the channels are
/// averaged with truncating division.  The RNG comes from the caller:
/// every render worker owns its own, so samplers can be shared freely.
pub struct Sampler<'a> {
    palette: &'a Palette,
    jitter: Option<Jitter>,
}

struct Jitter {
    ux: Uniform<f64>,
    uy: Uniform<f64>,
    samples: usize,
}

impl<'a> Sampler<'a> {
    /// `samples` of `None` turns anti-aliasing off entirely;
    /// `Some(n)` draws and averages `n` jittered samples per pixel.
    /// `Some(1)` still jitters, it just has nothing to average.
    pub fn new(plane: &PlaneMapper, palette: &'a Palette, samples: Option<usize>) -> Sampler<'a> {
        let jitter = samples.map(|samples| {
            let (dx, dy) = plane.pixel_size();
            Jitter {
                ux: Uniform::new(-dx / 2.0, dx / 2.0),
                uy: Uniform::new(-dy / 2.0, dy / 2.0),
                samples,
            }
        });
        Sampler { palette, jitter }
    }

    /// Produces the color for the pixel centered at `center`.
    pub fn sample<R: Rng>(&self, center: Complex<f64>, rng: &mut R) -> Rgb {
        match self.jitter {
            None => color_point(classify(center), self.palette),
            Some(ref jitter) => {
                let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
                for _ in 0..jitter.samples {
                    let c = Complex::new(
                        center.re + jitter.ux.sample(rng),
                        center.im + jitter.uy.sample(rng),
                    );
                    let color = color_point(classify(c), self.palette);
                    r += u32::from(color.r);
                    g += u32::from(color.g);
                    b += u32::from(color.b);
                }
                let samples = jitter.samples as u32;
                Rgb {
                    r: (r / samples) as u8,
                    g: (g / samples) as u8,
                    b: (b / samples) as u8,
                }
            }
        }
    }
}

/// Hands out exclusive row views of the shared image buffer.  The row
/// cursor guarantees every index is claimed by exactly one worker, so
/// no two live views ever alias.
struct RowSlots {
    base: *mut Rgb,
    width: usize,
    height: usize,
}

unsafe impl Sync for RowSlots {}

impl RowSlots {
    fn new(buffer: &mut [Rgb], width: usize, height: usize) -> RowSlots {
        assert_eq!(buffer.len(), width * height);
        RowSlots {
            base: buffer.as_mut_ptr(),
            width,
            height,
        }
    }

    /// The caller must hold the unique claim on `row` for as long as
    /// the returned slice lives.
    unsafe fn row(&self, row: usize) -> &mut [Rgb] {
        assert!(row < self.height);
        slice::from_raw_parts_mut(self.base.add(row * self.width), self.width)
    }
}

/// Renders the whole image by per-pixel iteration.  Construction
/// freezes the palette and the plane; `render` may then be called
/// from any thread.
pub struct BruteRenderer {
    plane: PlaneMapper,
    palette: Palette,
    samples: Option<usize>,
}

impl BruteRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane, the frozen palette,
    /// and the anti-aliasing sample count (`None` to disable).
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        palette: Palette,
        samples: Option<usize>,
    ) -> Result<Self, String> {
        match PlaneMapper::new(width, height, leftlower, rightupper) {
            Ok(plane) => Ok(BruteRenderer {
                plane,
                palette,
                samples,
            }),
            Err(u) => Err(u),
        }
    }

    /// The plane this renderer draws.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Renders on `threads` workers and returns the row-major pixel
    /// buffer.  Workers claim rows off one relaxed atomic counter; a
    /// claim at or past the image height means there is no work left.
    /// When `progress` is set the first worker overwrites a
    /// percentage line on stdout as it goes; that output is advisory
    /// and nothing downstream depends on it.
    pub fn render(&self, threads: usize, progress: bool) -> Result<Vec<Rgb>, String> {
        let IntegralPlane(width, height) = self.plane.integral_plane;
        debug!(
            "rendering {}x{} on {} threads, anti-aliasing {:?}",
            width, height, threads, self.samples
        );
        let mut buffer = vec![Rgb::BLACK; self.plane.len()];
        let cursor = AtomicUsize::new(0);
        {
            let slots = &RowSlots::new(&mut buffer, width, height);
            let cursor = &cursor;
            let sampler = &Sampler::new(&self.plane, &self.palette, self.samples);
            let plane = &self.plane;
            crossbeam::scope(|spawner| {
                for id in 0..threads {
                    spawner.spawn(move |_| {
                        let mut rng = rand::thread_rng();
                        loop {
                            let row = cursor.fetch_add(1, Ordering::Relaxed);
                            if row >= height {
                                break;
                            }
                            if progress && id == 0 {
                                print!("\x1b[1K\r{:.2}%", (row as f64) / (height as f64) * 100.0);
                                io::stdout().flush().ok();
                            }
                            let slot = unsafe { slots.row(row) };
                            for column in 0..width {
                                let center = plane.pixel_to_point(&Pixel(column, row));
                                slot[column] = sampler.sample(center, &mut rng);
                            }
                        }
                    });
                }
            })
            .map_err(|_| "a render worker panicked".to_string())?;
        }
        Ok(buffer)
    }
}
