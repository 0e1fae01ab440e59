//! Per-frame draw pass selection

/// A draw issued inside the frame's render pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPass {
    /// Field line segments over the sample grid
    FieldLines,
    /// Charge markers on top of the field
    ChargeMarkers,
}

/// The draws for one frame, in order
///
/// Field lines are always drawn; markers only while they are shown.
pub fn draw_passes(show_markers: bool) -> &'static [DrawPass] {
    if show_markers {
        &[DrawPass::FieldLines, DrawPass::ChargeMarkers]
    } else {
        &[DrawPass::FieldLines]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_shown() {
        assert_eq!(
            draw_passes(true),
            &[DrawPass::FieldLines, DrawPass::ChargeMarkers]
        );
    }

    #[test]
    fn test_markers_hidden() {
        let passes = draw_passes(false);
        assert_eq!(passes, &[DrawPass::FieldLines]);
        assert!(!passes.contains(&DrawPass::ChargeMarkers));
    }
}
