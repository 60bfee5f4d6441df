#![no_main]

use libfuzzer_sys::fuzz_target;
use panlaw_dsp::{pan_gains, PanPosition};

fuzz_target!(|data: &[u8]| {
    for &byte in data {
        let raw = byte as i8;
        match pan_gains(raw) {
            Some((l, r)) => {
                assert!((0.0..=1.0).contains(&l) && (0.0..=1.0).contains(&r));
                assert_eq!(PanPosition::clamped(raw).value(), raw);
            }
            None => assert!(PanPosition::new(raw).is_err()),
        }
    }
});
