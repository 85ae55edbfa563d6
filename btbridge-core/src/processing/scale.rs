/// Scale interleaved signed 16-bit PCM samples in place.
///
/// `channels` must be 1 or 2. Mono applies `scale_left` to every sample;
/// stereo applies `scale_left` to even-indexed (left) samples and
/// `scale_right` to odd-indexed (right) samples. The frame count is
/// `samples.len() / channels`.
///
/// A scale of exactly 1.0 leaves samples bit-identical and 0.0 produces
/// exact zeros; other factors multiply in f64, clamp into the i16 range,
/// and truncate toward zero. Used by the volume/mute logic on blocks held
/// in a staging buffer; never blocks and performs no I/O.
pub fn scale_s16le(samples: &mut [i16], channels: usize, scale_left: f64, scale_right: f64) {
    assert!(
        channels == 1 || channels == 2,
        "unsupported channel count: {}",
        channels
    );

    match channels {
        1 => {
            for sample in samples.iter_mut() {
                *sample = scale_sample(*sample, scale_left);
            }
        }
        _ => {
            for frame in samples.chunks_exact_mut(2) {
                frame[0] = scale_sample(frame[0], scale_left);
                frame[1] = scale_sample(frame[1], scale_right);
            }
        }
    }
}

fn scale_sample(value: i16, scale: f64) -> i16 {
    // Identity and mute bypass the float path so they stay bit-exact.
    if scale == 1.0 {
        value
    } else if scale == 0.0 {
        0
    } else {
        (f64::from(value) * scale).clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: [i16; 4] = [0x1234, 0x2345, 0xBCDEu16 as i16, 0xCDEFu16 as i16];

    #[test]
    fn mute_zeroes_all_samples() {
        let mut samples = INPUT;
        scale_s16le(&mut samples, 1, 0.0, 0.0);
        assert_eq!(samples, [0, 0, 0, 0]);
    }

    #[test]
    fn identity_is_bit_exact() {
        let mut samples = INPUT;
        scale_s16le(&mut samples, 1, 1.0, 1.0);
        assert_eq!(samples, INPUT);
    }

    #[test]
    fn half_scale_truncates_toward_zero() {
        let mut samples = INPUT;
        scale_s16le(&mut samples, 1, 0.5, 0.5);
        assert_eq!(
            samples,
            [0x1234 / 2, 0x2345 / 2, (0xBCDEu16 as i16) / 2, (0xCDEFu16 as i16) / 2]
        );
    }

    #[test]
    fn stereo_left_only() {
        let mut samples = INPUT;
        scale_s16le(&mut samples, 2, 0.5, 1.0);
        assert_eq!(
            samples,
            [0x1234 / 2, 0x2345, (0xBCDEu16 as i16) / 2, 0xCDEFu16 as i16]
        );
    }

    #[test]
    fn stereo_right_only() {
        let mut samples = INPUT;
        scale_s16le(&mut samples, 2, 1.0, 0.5);
        assert_eq!(
            samples,
            [0x1234, 0x2345 / 2, 0xBCDEu16 as i16, (0xCDEFu16 as i16) / 2]
        );
    }

    #[test]
    fn overdrive_clamps_instead_of_wrapping() {
        let mut samples = [i16::MAX, i16::MIN, 1000, -1000];
        scale_s16le(&mut samples, 1, 4.0, 4.0);
        assert_eq!(samples, [i16::MAX, i16::MIN, 4000, -4000]);
    }

    #[test]
    fn empty_block_is_fine() {
        let mut samples: [i16; 0] = [];
        scale_s16le(&mut samples, 2, 0.5, 0.5);
    }
}
