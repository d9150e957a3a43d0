//! Display capability: how a composed frame becomes visible.
//!
//! The view depends on this trait only, which keeps frame composition
//! testable without a TTY. [`crate::TerminalRenderer`] is the real backend;
//! [`CaptureDisplay`] records what would have been shown.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// The outbound capability set of the presentation backend.
///
/// `present` is the atomic flip: nothing composed into a framebuffer is
/// visible until it is called, and it either shows the whole frame or
/// fails the frame.
pub trait Display {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Update the window caption / diagnostic readout.
    fn set_caption(&mut self, caption: &str) -> Result<()>;
}

/// Headless backend that keeps the last presented frame and every caption.
///
/// Used by tests and benches to observe the view's output.
#[derive(Default)]
pub struct CaptureDisplay {
    presents: usize,
    captions: Vec<String>,
    last: Option<FrameBuffer>,
}

impl CaptureDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `present` calls so far.
    pub fn presents(&self) -> usize {
        self.presents
    }

    /// Captions in the order they were set.
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// The most recently presented frame, if any.
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }
}

impl Display for CaptureDisplay {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.presents += 1;
        match &mut self.last {
            Some(prev) => prev.copy_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.captions.push(caption.to_string());
        Ok(())
    }
}
