//! Looping background music (feature `audio`)

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// Keeps the output stream alive while the track loops
pub struct MusicPlayer {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

impl MusicPlayer {
    /// Open the default output device and start looping the track at `path`
    pub fn start(path: &Path, volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Couldn't open audio output")?;

        let file = File::open(path).with_context(|| format!("Couldn't load {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Couldn't decode {}", path.display()))?;

        let channels = source.channels();
        log::info!(
            "Opened audio output at {} Hz {} (looping)",
            source.sample_rate(),
            match channels {
                1 => "mono",
                2 => "stereo",
                _ => "surround",
            }
        );

        let sink = Sink::try_new(&handle).context("Couldn't create audio sink")?;
        sink.set_volume(volume);
        sink.append(source.repeat_infinite());

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.sink.stop();
    }
}
