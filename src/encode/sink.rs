use crate::{
    foundation::{core::FrameIndex, error::HexGifResult},
    render::frame::IndexedFrame,
};

/// Destination for rendered frames, fed strictly in frame order.
pub trait FrameSink {
    fn emit(&mut self, index: FrameIndex, frame: &IndexedFrame) -> HexGifResult<()>;
}

/// Keeps every emitted frame in memory.
#[derive(Clone, Debug, Default)]
pub struct FrameCollector {
    pub frames: Vec<(FrameIndex, IndexedFrame)>,
}

impl FrameSink for FrameCollector {
    fn emit(&mut self, index: FrameIndex, frame: &IndexedFrame) -> HexGifResult<()> {
        self.frames.push((index, frame.clone()));
        Ok(())
    }
}
