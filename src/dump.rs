
//! Text dumps of a view for offline diffing.
//! A dump contains the checksum on the first line,
//! followed by one tab-separated `red green blue` line per pixel,
//! using the raw packed sample values.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::info;
use crate::checksum::Checksum;
use crate::error::{Result, UnitResult};
use crate::format::ChannelKind;
use crate::image::GetPixel;
use crate::math::Vec2;


/// Describes the build that produced a dump, for example `_dbg_x64_rustc`,
/// so that dumps of different builds can be compared side by side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BuildTag {

    /// Whether debug assertions were enabled.
    pub debug: bool,

    /// Width of a pointer in bits.
    pub pointer_width: u32,
}

impl BuildTag {

    /// The tag of the currently running build.
    pub fn current() -> Self {
        BuildTag {
            debug: cfg!(debug_assertions),
            pointer_width: if cfg!(target_pointer_width = "64") { 64 } else { 32 },
        }
    }
}

impl fmt::Display for BuildTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optimization = if self.debug { "_dbg" } else { "_opt" };
        let architecture = if self.pointer_width == 64 { "_x64" } else { "_x32" };
        write!(formatter, "{}{}_rustc", optimization, architecture)
    }
}


/// The file name of a dump: `<case>_<width>x<height><tag>.txt`.
pub fn dump_file_name(case: &str, resolution: Vec2<usize>, tag: BuildTag) -> String {
    format!("{}_{}x{}{}.txt", case, resolution.width(), resolution.height(), tag)
}

/// Write the checksum and all pixels of the view.
pub fn write_dump(write: &mut impl Write, view: &impl GetPixel, checksum: Checksum) -> UnitResult {
    let format = view.format();
    writeln!(write, "{}", checksum)?;

    for pixel in view.pixels() {
        let sample = |kind| pixel.sample(format, kind).unwrap_or(0);

        writeln!(
            write, "{}\t{}\t{}",
            sample(ChannelKind::Red), sample(ChannelKind::Green), sample(ChannelKind::Blue)
        )?;
    }

    Ok(())
}

/// Create a dump file for the view inside the directory, named after the case.
/// Returns the path of the new file.
pub fn save_dump(directory: impl AsRef<Path>, case: &str, view: &impl GetPixel, checksum: Checksum) -> Result<PathBuf> {
    let path = directory.as_ref().join(dump_file_name(case, view.resolution(), BuildTag::current()));
    info!("dump: {} ({})", path.display(), checksum);

    let mut write = BufWriter::new(File::create(&path)?);
    write_dump(&mut write, view, checksum)?;
    write.flush()?;

    Ok(path)
}
