//! RGB <-> HLS conversion on unit floats.
//!
//! Hue is a fraction of a full turn in `[0, 1)`, lightness and saturation are in `[0, 1]`.

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Hue / lightness / saturation triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

impl Hls {
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let l = sum / 2.0;

        // Achromatic: hue and saturation are meaningless, pin them to zero.
        if min == max {
            return Self { h: 0.0, l, s: 0.0 };
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - max - min)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            h: (h / 6.0).rem_euclid(1.0),
            l,
            s,
        }
    }

    /// Same hue and saturation at another lightness
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn to_rgb(self) -> [f64; 3] {
        if self.s == 0.0 {
            return [self.l, self.l, self.l];
        }

        let m2 = if self.l <= 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - (self.l * self.s)
        };
        let m1 = 2.0 * self.l - m2;

        [
            channel(m1, m2, self.h + ONE_THIRD),
            channel(m1, m2, self.h),
            channel(m1, m2, self.h - ONE_THIRD),
        ]
    }
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}
