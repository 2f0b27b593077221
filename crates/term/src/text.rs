//! Plain-text display sink.

use std::io::{self, Write};

use crate::core::Surface;

/// Write the surface one row per line, each terminated by `\n`.
pub fn write_surface<W: Write>(surface: &Surface, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(surface.width() as usize + 1);
    for row in surface.rows() {
        line.clear();
        line.extend(row.iter());
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}
