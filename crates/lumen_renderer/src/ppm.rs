//! Plain-text PPM (P3) output.

use crate::PixelBuffer;
use std::io::{self, Write};

/// Write `image` as a P3 pixmap.
///
/// One `R G B` line per pixel, top row first, left to right. Row 0 of the
/// buffer is the bottom of the image, so rows are emitted in reverse.
pub fn write_ppm<W: Write>(mut writer: W, image: &PixelBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for row in (0..image.height()).rev() {
        for rgb in image.row(row).chunks_exact(3) {
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
    }

    writer.flush()
}
