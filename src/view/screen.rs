use anyhow::{anyhow, Result};
use crossterm::tty::IsTty;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output sink shared by all terminal views.
#[derive(Clone)]
pub struct Screen {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    styled: bool,
}

impl Screen {
    /// Standard output. Colors are only emitted when stdout is a terminal.
    pub fn stdout() -> Self {
        let styled = io::stdout().is_tty();
        Self {
            sink: Arc::new(Mutex::new(Box::new(io::stdout()))),
            styled,
        }
    }

    /// In-memory screen without colors, plus a handle to read what was shown.
    pub fn capture() -> (Self, Capture) {
        let capture = Capture::default();
        let screen = Self {
            sink: Arc::new(Mutex::new(Box::new(capture.clone()))),
            styled: false,
        };
        (screen, capture)
    }

    pub fn styled(&self) -> bool {
        self.styled
    }

    pub fn show(&self, text: &str) -> Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| anyhow!("Screen lock poisoned"))?;
        writeln!(sink, "{}", text)?;
        sink.flush()?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buffer| String::from_utf8_lossy(&buffer).into_owned())
            .unwrap_or_default()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture lock poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
