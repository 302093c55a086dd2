//! Tick helpers shared by the continuous scales.

const SQRT_50: f32 = 7.0710678;
const SQRT_10: f32 = 3.1622777;
const SQRT_2: f32 = 1.4142135;

/// Rounds a raw step up to the nearest 1/2/5/10 multiple of a power of ten.
fn tick_factor(error: f32) -> f32 {
    if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    }
}

/// Computes the first tick index, last tick index, and increment for a
/// span. A negative increment encodes a fractional step of `1 / -inc`,
/// which keeps small steps exact in floating point.
fn tick_spec(start: f32, stop: f32, count: f32) -> (f32, f32, f32) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    let factor = tick_factor(error);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let denom = 10.0_f32.powf(-power) / factor;
        i1 = (start * denom).round();
        i2 = (stop * denom).round();
        if i1 / denom < start {
            i1 += 1.0;
        }
        if i2 / denom > stop {
            i2 -= 1.0;
        }
        inc = -denom;
    } else {
        inc = 10.0_f32.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        // Too coarse to produce any tick; retry at double resolution.
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

/// Generates approximately `count` round tick values covering
/// `[start, stop]`.
///
/// Matches d3's tick placement: values are multiples of 1, 2, or 5 times a
/// power of ten, and the list is reversed when `stop < start`.
pub fn ticks(start: f32, stop: f32, count: f32) -> Vec<f32> {
    if count <= 0.0 || count.is_nan() || count.is_infinite() {
        return vec![];
    }
    if start.is_nan() || stop.is_nan() {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if i2 < i1 {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let index = if reverse { i2 - i as f32 } else { i1 + i as f32 };
        out.push(if inc < 0.0 { index / -inc } else { index * inc });
    }
    out
}

/// Returns the tick step that `ticks` would use for the given span.
///
/// NaN when no step exists; negative infinity for a zero-width span.
pub fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    if !(count > 0.0) || count.is_infinite() {
        return f32::NAN;
    }
    if start.is_nan() || stop.is_nan() {
        return f32::NAN;
    }
    if start == stop {
        return f32::NEG_INFINITY;
    }

    let step = (stop - start) / count;
    if step == 0.0 {
        return f32::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    10.0_f32.powf(power) * tick_factor(error)
}
