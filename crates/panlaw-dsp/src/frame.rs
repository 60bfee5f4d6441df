use crate::pan::PanPosition;

/// One frame of channel output before it reaches the stereo bus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    Mono(f32),
    /// left, right
    Stereo(f32, f32),
}

/// Applies channel volume, then the pan pair for `pan`.
///
/// Mono input is spread across both sides; stereo input keeps its channels
/// and each side is scaled by its own gain.
#[inline]
pub fn pan_frame(frame: Frame, volume: f32, pan: PanPosition) -> (f32, f32) {
    let volume = volume.clamp(0.0, 1.0);
    let (gl, gr) = pan.gains();
    match frame {
        Frame::Mono(s) => {
            let s = s * volume;
            (s * gl, s * gr)
        }
        Frame::Stereo(l, r) => (l * volume * gl, r * volume * gr),
    }
}

/// Interleaved stereo variant of [`pan_frame`]. Processes as many whole
/// frames as both buffers hold and returns that count.
pub fn pan_block(input: &[f32], output: &mut [f32], volume: f32, pan: PanPosition) -> usize {
    let frames = input.len().min(output.len()) / 2;
    for (src, dst) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
        let (l, r) = pan_frame(Frame::Stereo(src[0], src[1]), volume, pan);
        dst[0] = l;
        dst[1] = r;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_center_splits_evenly() {
        let (l, r) = pan_frame(Frame::Mono(1.0), 1.0, PanPosition::CENTER);
        assert_eq!(l, r);
        assert!((l - 0.708).abs() < 1e-6);
    }

    #[test]
    fn hard_pan_silences_one_side() {
        let (l, r) = pan_frame(Frame::Mono(0.5), 1.0, PanPosition::HARD_LEFT);
        assert_eq!((l, r), (0.5, 0.0));
        let (l, r) = pan_frame(Frame::Stereo(0.25, 0.5), 1.0, PanPosition::HARD_RIGHT);
        assert_eq!((l, r), (0.0, 0.5));
    }

    #[test]
    fn volume_is_clamped_and_applied() {
        let loud = pan_frame(Frame::Mono(1.0), 4.0, PanPosition::HARD_LEFT);
        assert_eq!(loud, (1.0, 0.0));
        let muted = pan_frame(Frame::Stereo(1.0, 1.0), -1.0, PanPosition::CENTER);
        assert_eq!(muted, (0.0, 0.0));
        let half = pan_frame(Frame::Mono(1.0), 0.5, PanPosition::HARD_LEFT);
        assert_eq!(half, (0.5, 0.0));
    }

    #[test]
    fn block_stops_at_shorter_buffer() {
        let input = [1.0f32; 8];
        let mut output = [9.0f32; 5];
        let frames = pan_block(&input, &mut output, 1.0, PanPosition::HARD_RIGHT);
        assert_eq!(frames, 2);
        assert_eq!(output, [0.0, 1.0, 0.0, 1.0, 9.0]);
    }
}
