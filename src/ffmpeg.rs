use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use hero_carousel::{Media, MediaError};

type FrameSlot = Arc<Mutex<Option<Vec<u8>>>>;

/// A video slide decoded by an `ffmpeg` child process into RGBA frames.
///
/// Frames are read on a background thread; the render loop picks up the
/// latest one with [`VideoClip::take_frame`].
pub struct VideoClip {
    path: PathBuf,
    width: i32,
    height: i32,
    process: Option<Child>,
    frame: FrameSlot,
}

impl VideoClip {
    pub fn new(path: PathBuf, width: i32, height: i32) -> Self {
        Self {
            path,
            width,
            height,
            process: None,
            frame: Arc::new(Mutex::new(None)),
        }
    }

    /// Latest decoded frame, if a new one arrived since the last call.
    pub fn take_frame(&self) -> Option<Vec<u8>> {
        self.frame.lock().ok()?.take()
    }

    fn frame_len(&self) -> usize {
        (self.width * self.height * 4) as usize // 4 bytes per pixel (RGBA)
    }
}

impl Media for VideoClip {
    fn play(&mut self) -> Result<(), MediaError> {
        if self.process.is_some() {
            return Ok(());
        }

        // Letterbox into the fixed frame size so every frame has the same length
        let filter = format!(
            "scale={w}:{h}:force_original_aspect_ratio=decrease,pad={w}:{h}:(ow-iw)/2:(oh-ih)/2",
            w = self.width,
            h = self.height
        );
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .args(["-loglevel", "error"])
            .arg("-re")
            .args(["-stream_loop", "-1"])
            .arg("-i")
            .arg(&self.path)
            .arg("-an")
            .args(["-vf", &filter])
            .args(["-f", "rawvideo"])
            .args(["-pix_fmt", "rgba"])
            .arg("-")
            .spawn()
            .map_err(|source| MediaError::Spawn { path: self.path.clone(), source })?;

        let Some(mut stdout) = process.stdout.take() else {
            let _ = process.kill();
            let _ = process.wait();
            return Err(MediaError::MissingOutput(self.path.clone()));
        };

        let frame = Arc::clone(&self.frame);
        let frame_len = self.frame_len();
        thread::spawn(move || {
            let mut buffer = vec![0u8; frame_len];
            // Runs until the process is killed and the pipe closes
            while stdout.read_exact(&mut buffer).is_ok() {
                if let Ok(mut slot) = frame.lock() {
                    *slot = Some(buffer.clone());
                }
            }
        });

        self.process = Some(process);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }

    // A fresh slot detaches any reader still draining the old process.
    // Decoding always restarts from the first frame on the next play.
    fn rewind(&mut self) {
        self.frame = Arc::new(Mutex::new(None));
    }
}

impl Drop for VideoClip {
    fn drop(&mut self) {
        self.pause();
    }
}
