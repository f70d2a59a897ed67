use crate::controllers::interactive::data::frame_data::{Frame, RenderStage};
use crate::controllers::interactive::ports::display::DisplayPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let resolution = buffer.resolution();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", resolution.width(), resolution.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

/// Display that saves every delivered frame as `<directory>/<stage>.ppm`.
///
/// Each stage overwrites the file of the previous request's same stage.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    directory: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn path_for(&self, stage: RenderStage) -> PathBuf {
        self.directory.join(format!("{stage}.ppm"))
    }

    fn save(&self, path: &Path, buffer: &PixelBuffer) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.directory)?;
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl DisplayPort for PpmFilePresenter {
    fn present(&self, frame: Frame) {
        let path = self.path_for(frame.stage);

        match self.save(&path, &frame.pixel_buffer) {
            Ok(()) => log::info!(
                "Wrote {} frame for generation {} to {}",
                frame.stage,
                frame.generation,
                path.display()
            ),
            Err(err) => log::error!("Failed to write {}: {err}", path.display()),
        }
    }
}
