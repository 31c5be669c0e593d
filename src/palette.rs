//! The period color table.  Built once before rendering starts and
//! read-only afterward: a hue gradient between two stops, shuffled by
//! an interleave stride so that structurally related periods land on
//! visually distant colors.

use itertools::Itertools;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use config;

/// One 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Full white, the color of fast-escaping exterior points.
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    /// Full black, the color of everything unclassifiable.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

/// Sextant HSL to RGB conversion.  Hue in degrees, saturation and
/// lightness in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h % 360.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
    }
}

/// The in-order gradient: entry `i` sits at hue
/// `HUE_STOP - (MAX_PERIOD - 1 - i) * dh`, so the last entry lands
/// exactly on the stop hue.
pub fn gradient() -> Vec<Rgb> {
    let dh = (config::HUE_STOP - config::HUE_START) / (config::MAX_PERIOD as f32);
    (0..config::MAX_PERIOD)
        .map(|i| {
            let j = (config::MAX_PERIOD - 1 - i) as f32;
            hsl_to_rgb(config::HUE_STOP - j * dh, 0.7, 0.5)
        })
        .collect()
}

/// Reorders a gradient by an interleave stride.  The first
/// `stride * W` entries (`W = len / stride`) are read as `stride`
/// blocks of width `W` and emitted round-robin across the blocks;
/// whatever the division left over is appended in order.  For every
/// stride this is a permutation: each input entry appears exactly
/// once in the output.
pub fn interleave(swatches: &[Rgb], stride: usize) -> Vec<Rgb> {
    assert!(stride >= 1, "interleave stride must be at least 1");
    let width = swatches.len() / stride;
    let mut colors = Vec::with_capacity(swatches.len());
    for j in 0..width {
        for k in 0..stride {
            colors.push(swatches[k * width + j]);
        }
    }
    colors.extend_from_slice(&swatches[stride * width..]);
    colors
}

/// The frozen color table, one entry per detectable period.
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Builds the table from the configured hue range and interleave
    /// factor.
    pub fn new() -> Palette {
        Palette {
            colors: interleave(&gradient(), config::INTERLEAVE_FACTOR),
        }
    }

    /// The number of entries, always [`config::MAX_PERIOD`].
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color for a detected period.  A period outside
    /// `[1, MAX_PERIOD]` means the classifier broke its contract, and
    /// that is not a recoverable condition.
    pub fn color(&self, period: usize) -> Rgb {
        assert!(
            period >= 1 && period <= self.colors.len(),
            "period {} outside the palette",
            period
        );
        self.colors[period - 1]
    }

    /// Writes the color list as a TypeScript array literal for the
    /// viewer frontend: uppercase hex strings, tab-indented, a comma
    /// after every entry but the last.
    pub fn export<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "export const colors = [")?;
        let body = self
            .colors
            .iter()
            .map(|c| format!("\t\"#{:02X}{:02X}{:02X}\"", c.r, c.g, c.b))
            .join(",\n");
        writeln!(sink, "{}", body)?;
        writeln!(sink, "];")?;
        Ok(())
    }

    /// Exports to a file path, creating the parent directory if it
    /// does not exist yet.  Regenerated on every run; rendering never
    /// reads it back.
    pub fn export_to_path(&self, path: &str) -> io::Result<()> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)?;
        self.export(&mut file)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}
