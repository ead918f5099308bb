//! Per-frame drawing context

/// Canvas dimensions and frame counter for one frame
///
/// `width` and `height` are in scene units; effect bounds (cloud wrap,
/// ground level, prop placement) are derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub width: f32,
    pub height: f32,
    pub frame_count: u64,
}

impl FrameContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            frame_count: 0,
        }
    }

    /// Ground level (Y grows downward)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height / 5.0
    }

    /// Advance to the next frame
    pub fn advance(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// Frame counter as a float for animation phases
    #[inline]
    pub fn frame(&self) -> f32 {
        self.frame_count as f32
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_and_advance() {
        let mut ctx = FrameContext::new(1000.0, 500.0);
        assert_eq!(ctx.ground_y(), 100.0);
        ctx.advance();
        ctx.advance();
        assert_eq!(ctx.frame_count, 2);
        assert_eq!(ctx.frame(), 2.0);
    }
}
