//! Row-partitioned rendering.
//!
//! The image rows are split into one contiguous span per worker before any
//! thread starts. Each worker renders its span into its own slice of the
//! pixel buffer, so no two workers ever touch the same channel slot.

use crate::renderer::{color_to_rgb, render_pixel, RenderContext};
use crate::sampler::PixelSampler;
use log::debug;
use std::ops::Range;

/// Channels stored per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// A contiguous range of image rows owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// First row of the span
    pub start: u32,
    /// Number of rows in the span
    pub count: u32,
}

impl RowSpan {
    pub fn new(start: u32, count: u32) -> Self {
        Self { start, count }
    }

    /// One past the last row.
    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    pub fn rows(&self) -> Range<u32> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buffer slots this span covers in an image `width` pixels wide.
    pub fn channel_len(&self, width: u32) -> usize {
        self.count as usize * width as usize * CHANNELS
    }
}

/// Split `rows` image rows into `workers` contiguous spans.
///
/// Every span gets `rows / workers` rows and the last one also takes the
/// remainder. Spans are returned in ascending row order and cover
/// `0..rows` exactly once. `workers` must be non-zero.
pub fn partition_rows(rows: u32, workers: u32) -> Vec<RowSpan> {
    assert!(workers > 0, "row partition needs at least one worker");

    let chunk = rows / workers;
    let mut spans: Vec<RowSpan> = (0..workers).map(|i| RowSpan::new(i * chunk, chunk)).collect();

    if let Some(last) = spans.last_mut() {
        last.count = rows - last.start;
    }

    spans
}

/// Render every pixel of `span` into `out`.
///
/// `out` must be exactly the span's slice of the pixel buffer; pixel
/// (row, col) lands at `((row - span.start) * width + col) * 3`.
pub fn render_rows<S: PixelSampler>(span: RowSpan, out: &mut [u8], ctx: &RenderContext<'_, S>) {
    let width = ctx.config.width;
    debug_assert_eq!(out.len(), span.channel_len(width));

    if span.is_empty() {
        debug!("Worker has no rows to render");
        return;
    }
    debug!("Rendering rows {}..{}", span.start, span.end());

    let row_len = width as usize * CHANNELS;
    for (row, line) in span.rows().zip(out.chunks_exact_mut(row_len)) {
        for (col, pixel) in (0..width).zip(line.chunks_exact_mut(CHANNELS)) {
            let mut rng = ctx.sampler.pixel_rng(row, col);
            let color = render_pixel(ctx.camera, ctx.world, row, col, ctx.config, &mut rng);
            pixel.copy_from_slice(&color_to_rgb(color));
        }
    }

    debug!("Finished rows {}..{}", span.start, span.end());
}
