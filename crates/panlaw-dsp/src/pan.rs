use once_cell::sync::Lazy;

use crate::error::PanError;

/// Number of discrete pan positions, -32 through 32.
pub const POSITIONS: usize = 65;

/// A tracker channel pan position in `-32..=32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanPosition(i8);

impl PanPosition {
    pub const MIN: i8 = -32;
    pub const MAX: i8 = 32;

    pub const HARD_LEFT: Self = Self(Self::MIN);
    pub const CENTER: Self = Self(0);
    pub const HARD_RIGHT: Self = Self(Self::MAX);

    #[inline]
    pub fn new(value: i8) -> Result<Self, PanError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PanError::OutOfRange { value })
        }
    }

    /// Saturates to the nearest valid position.
    #[inline]
    pub fn clamped(value: i8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn value(self) -> i8 {
        self.0
    }

    /// Index into [`PAN_TABLE`].
    #[inline]
    pub fn index(self) -> usize {
        (self.0 as i16 - Self::MIN as i16) as usize
    }

    /// Every position, hard left to hard right.
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        (Self::MIN..=Self::MAX).map(Self)
    }

    #[inline]
    pub fn gains(self) -> (f32, f32) {
        PAN_TABLE[self.index()]
    }
}

impl TryFrom<i8> for PanPosition {
    type Error = PanError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PanPosition> for i8 {
    fn from(pos: PanPosition) -> Self {
        pos.0
    }
}

/// Gain pair for one pan position, left first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGains {
    pub left: f64,
    pub right: f64,
}

impl PanGains {
    #[inline]
    pub fn to_f32(self) -> (f32, f32) {
        (self.left as f32, self.right as f32)
    }
}

/// Centre-detented quadratic pan law.
///
/// At the centre both channels sit at `center_gain`. Moving away from the
/// centre the far channel loses `p * center_gain` and the near channel gains
/// `p * (1 - center_gain)`, where `p = (x / half_range)^2`, so a hard pan
/// ends at exactly 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanLaw {
    center_gain: f64,
    half_range: i8,
}

impl PanLaw {
    /// -3 dB at the centre over 32 steps per side.
    pub const TRACKER: Self = Self {
        center_gain: 0.708,
        half_range: PanPosition::MAX,
    };

    /// Normalised squared pan magnitude, `0.0` at the centre and `1.0` at
    /// either hard pan.
    #[inline]
    pub fn pan_pow(&self, pos: PanPosition) -> f64 {
        (f64::from(pos.value()) / f64::from(self.half_range)).powi(2)
    }

    /// Gain of the channel the signal moves away from.
    #[inline]
    pub fn attenuated(&self, pan_pow: f64) -> f64 {
        self.center_gain - pan_pow * self.center_gain
    }

    /// Gain of the channel the signal moves towards.
    #[inline]
    pub fn boosted(&self, pan_pow: f64) -> f64 {
        self.center_gain + pan_pow * (1.0 - self.center_gain)
    }

    pub fn gains(&self, pos: PanPosition) -> PanGains {
        let p = self.pan_pow(pos);
        let less = self.attenuated(p);
        let more = self.boosted(p);
        if pos.value() > 0 {
            PanGains {
                left: less,
                right: more,
            }
        } else {
            PanGains {
                left: more,
                right: less,
            }
        }
    }
}

/// Per-position `(left, right)` gains indexed by `position + 32`.
pub static PAN_TABLE: Lazy<[(f32, f32); POSITIONS]> = Lazy::new(|| {
    let law = PanLaw::TRACKER;
    core::array::from_fn(|i| {
        let pos = PanPosition(i as i8 + PanPosition::MIN);
        law.gains(pos).to_f32()
    })
});

/// Builds [`PAN_TABLE`] up front. Call from setup code so the first lookup
/// on the audio thread never pays for initialisation.
pub fn prepare_table() -> &'static [(f32, f32); POSITIONS] {
    if Lazy::get(&PAN_TABLE).is_none() {
        tracing::debug!(entries = POSITIONS, "building pan table");
    }
    Lazy::force(&PAN_TABLE)
}

/// Table lookup for a raw mixer pan value. `None` outside `-32..=32`.
#[inline]
pub fn pan_gains(pan: i8) -> Option<(f32, f32)> {
    PanPosition::new(pan).ok().map(PanPosition::gains)
}
