use crate::{mcm, raster, Error, GlyphTable, GLYPH_COUNT};
use image::ImageFormat;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

const SLOT_PREFIX: &str = "0x";
const IMAGE_EXTENSION: &str = ".png";
const FONT_EXTENSION: &str = ".mcm";

/// Converts a font file into a directory of glyph images and back.
pub trait Converter {
    /// Splits the font at `file` into one image per glyph.
    ///
    /// Returns the directory the images were written to, or `None` when the file was empty.
    fn decode(&self, file: &Path) -> Result<Option<PathBuf>, Error>;

    /// Packs the glyph images in `directory` into a single font file written inside it.
    fn encode(&self, directory: &Path) -> Result<PathBuf, Error>;
}

/// [`Converter`] between `.mcm` files and directories of `0x??.png` images.
#[derive(Clone, Copy, Debug, Default)]
pub struct McmConverter;

impl McmConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for McmConverter {
    fn decode(&self, file: &Path) -> Result<Option<PathBuf>, Error> {
        let path = absolute(file)?;
        info!(file = %path.display(), "decoding font");

        let font = File::open(&path)
            .map_err(|e| Error::read(format!("can't open file {}", path.display()), e))?;
        let table = match mcm::read_mcm(BufReader::new(font))? {
            Some(table) => table,
            None => {
                info!(file = %path.display(), "file is empty, nothing to decode");
                return Ok(None);
            }
        };

        let stem = path.file_stem().ok_or_else(|| no_name(&path))?;
        let directory = path.parent().unwrap_or(Path::new("")).join(stem);
        fs::create_dir_all(&directory).map_err(|e| {
            Error::write(
                format!("can't create directory {}", directory.display()),
                e,
            )
        })?;

        for (slot, glyph) in table.iter() {
            let image_path = directory.join(glyph_file_name(slot));
            raster::glyph_to_image(glyph)
                .save_with_format(&image_path, ImageFormat::Png)
                .map_err(|e| {
                    Error::write(format!("can't write image {}", image_path.display()), e)
                })?;
        }

        info!(directory = %directory.display(), "wrote glyph images");
        Ok(Some(directory))
    }

    fn encode(&self, directory: &Path) -> Result<PathBuf, Error> {
        let directory = absolute(directory)?;
        info!(directory = %directory.display(), "encoding font");

        let entries = fs::read_dir(&directory).map_err(|e| {
            Error::read(format!("can't read directory {}", directory.display()), e)
        })?;

        let mut table = GlyphTable::new();
        let mut seen = [false; GLYPH_COUNT];
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::read(format!("can't read directory {}", directory.display()), e)
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let slot = match parse_slot(&name)? {
                Some(slot) => slot,
                None => continue,
            };

            let image_path = entry.path();
            let image = image::open(&image_path)
                .map_err(|e| Error::read(format!("can't decode image {}", image_path.display()), e))?
                .to_rgba8();
            let glyph = raster::image_to_glyph(&image).map_err(|size| Error::DimensionMismatch {
                entry: image_path.clone(),
                width: size.width,
                height: size.height,
            })?;

            if seen[usize::from(slot)] {
                warn!(slot, file = %name, "slot was already set, overwriting");
            }
            seen[usize::from(slot)] = true;
            table.set(slot, glyph);
            debug!(slot, file = %name, "read glyph");
        }

        let mut file_name = directory
            .file_name()
            .ok_or_else(|| no_name(&directory))?
            .to_os_string();
        file_name.push(FONT_EXTENSION);
        let output = directory.join(file_name);
        let file = File::create(&output)
            .map_err(|e| Error::write(format!("can't create file {}", output.display()), e))?;
        mcm::write_mcm(&table, BufWriter::new(file))?;

        let n_glyphs = seen.iter().filter(|seen| **seen).count();
        info!(file = %output.display(), glyphs = n_glyphs, "wrote font");
        Ok(output)
    }
}

/// `0x0A.png` style name for a slot.
pub fn glyph_file_name(slot: u8) -> String {
    format!("{}{:02X}{}", SLOT_PREFIX, slot, IMAGE_EXTENSION)
}

/// Slot index encoded in a directory entry name.
///
/// Names that don't look like glyph images give `Ok(None)`, as do indexes above 255.
fn parse_slot(name: &str) -> Result<Option<u8>, Error> {
    let Some(hex) = name
        .strip_prefix(SLOT_PREFIX)
        .and_then(|rest| rest.strip_suffix(IMAGE_EXTENSION))
    else {
        return Ok(None);
    };

    let index = u64::from_str_radix(hex, 16).map_err(|source| Error::MalformedFilename {
        name: name.to_string(),
        source,
    })?;
    match u8::try_from(index) {
        Ok(slot) => Ok(Some(slot)),
        Err(_) => {
            debug!(file = name, index, "slot index out of range, skipping");
            Ok(None)
        }
    }
}

/// Absolute form of `path` with `.` and `..` resolved lexically, so the last component is a real
/// name whenever there is one.
fn absolute(path: &Path) -> Result<PathBuf, Error> {
    let path = std::path::absolute(path).map_err(|e| {
        Error::read(
            format!("can't get absolute path of {}", path.display()),
            e,
        )
    })?;

    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other),
        }
    }
    Ok(clean)
}

fn no_name(path: &Path) -> Error {
    Error::write(
        format!("can't derive an output name from {}", path.display()),
        io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    )
}
