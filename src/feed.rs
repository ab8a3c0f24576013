/// Picture-in-picture feed shown in the top-left corner of the playfield.
///
/// Purely decorative: a source that has nothing to show returns `None` and
/// the renderer skips the inset.  Nothing here touches the simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const THUMB_COLS: usize = 18;
pub const THUMB_ROWS: usize = 6;

/// A tiny greyscale frame, row-major, one luminance byte per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumbnail {
    pub cols: usize,
    pub rows: usize,
    pub luma: Vec<u8>,
}

impl Thumbnail {
    pub fn at(&self, col: usize, row: usize) -> u8 {
        self.luma[row * self.cols + col]
    }
}

pub trait VideoFeed {
    /// Grab the next frame, or `None` when no frame is available.
    fn read(&mut self) -> Option<Thumbnail>;
}

/// No camera attached.
#[derive(Debug, Default)]
pub struct NoFeed;

impl VideoFeed for NoFeed {
    fn read(&mut self) -> Option<Thumbnail> {
        None
    }
}

/// Random static, for terminals where a real camera makes no sense.
#[derive(Debug)]
pub struct NoiseFeed {
    rng: StdRng,
}

impl NoiseFeed {
    pub fn new(seed: u64) -> Self {
        NoiseFeed {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl VideoFeed for NoiseFeed {
    fn read(&mut self) -> Option<Thumbnail> {
        let luma = (0..THUMB_COLS * THUMB_ROWS).map(|_| self.rng.gen()).collect();
        Some(Thumbnail {
            cols: THUMB_COLS,
            rows: THUMB_ROWS,
            luma,
        })
    }
}
