pub(super) const AXIS_TICK_TARGET_SPACING_IN: f64 = 0.75;
pub(super) const AXIS_MIN_TICKS: usize = 3;
pub const AXIS_MAX_TICKS: usize = 9;

const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Smallest step from the 1/2/2.5/5 × 10ⁿ family that splits `span` into at
/// most `max_intervals` intervals.
pub(super) fn nice_step(span: f64, max_intervals: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || max_intervals == 0 {
        return 1.0;
    }

    let raw = span / max_intervals as f64;
    let magnitude = 10_f64.powf(raw.log10().floor());
    NICE_MULTIPLIERS
        .iter()
        .map(|multiplier| multiplier * magnitude)
        .find(|step| *step >= raw * (1.0 - 1e-12))
        .unwrap_or(10.0 * magnitude)
}

/// Tick values on multiples of `step` inside `[min, max]`, at most `max_ticks`.
///
/// Far from the origin consecutive multiples can round to the same `f64`;
/// repeats are skipped and the walk stops after `max_ticks + 1` candidates.
pub(super) fn tick_values(min: f64, max: f64, step: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() || step <= 0.0 || max < min {
        return Vec::new();
    }

    let tolerance = step * 1e-9;
    let first = (min / step - 1e-9).ceil();
    let mut ticks: Vec<f64> = Vec::with_capacity(max_ticks);
    for offset in 0..=max_ticks {
        let value = (first + offset as f64) * step;
        if value > max + tolerance || ticks.len() == max_ticks {
            break;
        }
        if value < min - tolerance {
            continue;
        }
        let value = if value.abs() < tolerance { 0.0 } else { value };
        if ticks.last() != Some(&value) {
            ticks.push(value);
        }
    }
    ticks
}

/// Number of decimals needed to print every multiple of `step` exactly.
pub(super) fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (0..=12)
        .find(|&decimals| {
            let scaled = step * 10_f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() <= 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(12)
}

pub(super) fn format_tick(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

/// Rough label width used to keep axis titles clear of tick labels.
pub(super) fn estimate_label_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * 0.6
}
