#![no_main]

use libfuzzer_sys::fuzz_target;
use panlaw_dsp::{pan_block, PanPosition};

fuzz_target!(|data: &[u8]| {
    let Some((&pan, rest)) = data.split_first() else {
        return;
    };
    let input: Vec<f32> = rest
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let mut output = vec![0.0f32; input.len()];
    let frames = pan_block(&input, &mut output, 1.0, PanPosition::clamped(pan as i8));
    assert_eq!(frames, input.len() / 2);
});
