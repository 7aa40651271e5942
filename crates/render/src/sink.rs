use gravfield_common::Pose;

/// Consumer of the per-frame camera pose. All hosts implement this trait.
///
/// The sink reads the pose after each simulation step. It never mutates
/// simulation state.
pub trait PoseSink {
    /// Receive the pose produced by `frame`.
    fn present(&mut self, frame: u64, pose: &Pose);
}

/// Debug text sink, a stand-in for a GPU camera.
///
/// Records one human-readable line per presented frame. Every `stride`-th
/// frame is kept so long runs stay readable.
#[derive(Debug)]
pub struct DebugTextSink {
    stride: u64,
    lines: Vec<String>,
}

impl DebugTextSink {
    pub fn new() -> Self {
        Self::every(1)
    }

    /// Keep only frames that are multiples of `stride` (0 is treated as 1).
    pub fn every(stride: u64) -> Self {
        Self {
            stride: stride.max(1),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All recorded lines joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn format_pose(frame: u64, pose: &Pose) -> String {
        let p = pose.position;
        let u = pose.up;
        let f = pose.forward();
        format!(
            "[{frame:>6}] pos=({:.2}, {:.2}, {:.2}) up=({:.2}, {:.2}, {:.2}) fwd=({:.2}, {:.2}, {:.2})",
            p.x, p.y, p.z, u.x, u.y, u.z, f.x, f.y, f.z
        )
    }
}

impl Default for DebugTextSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseSink for DebugTextSink {
    fn present(&mut self, frame: u64, pose: &Pose) {
        if frame % self.stride != 0 {
            return;
        }
        let line = Self::format_pose(frame, pose);
        tracing::trace!(%line, "pose presented");
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn records_every_frame_by_default() {
        let mut sink = DebugTextSink::new();
        let pose = Pose::at(Vec3::new(1.0, 2.0, 3.0));
        sink.present(1, &pose);
        sink.present(2, &pose);
        assert_eq!(sink.lines().len(), 2);
        assert!(sink.lines()[0].contains("pos=(1.00, 2.00, 3.00)"));
        assert!(sink.lines()[0].contains("up=(0.00, 1.00, 0.00)"));
    }

    #[test]
    fn stride_skips_frames() {
        let mut sink = DebugTextSink::every(10);
        let pose = Pose::default();
        for frame in 1..=35 {
            sink.present(frame, &pose);
        }
        assert_eq!(sink.lines().len(), 3);
        assert!(sink.output().contains("[    30]"));
    }

    #[test]
    fn zero_stride_keeps_everything() {
        let mut sink = DebugTextSink::every(0);
        sink.present(7, &Pose::default());
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn forward_is_reported() {
        let line = DebugTextSink::format_pose(0, &Pose::default());
        assert!(line.contains("fwd=(0.00, 0.00, -1.00)"));
    }
}
