//! Uniform shrink factor for content that should fit without scrolling.

/// Content is never shrunk below half size; past that, clipping wins.
pub const MIN_SHRINK: f64 = 0.5;

/// The factor to scale content by so it fits the available space.
///
/// Returns 1.0 when the content already fits; otherwise the smaller of the
/// per-axis ratios, clamped to [[`MIN_SHRINK`], 1.0].
pub fn shrink_factor(natural_w: usize, natural_h: usize, avail_w: usize, avail_h: usize) -> f64 {
    if natural_w == 0 || natural_h == 0 {
        return 1.0;
    }
    if natural_w <= avail_w && natural_h <= avail_h {
        return 1.0;
    }
    let sx = avail_w as f64 / natural_w as f64;
    let sy = avail_h as f64 / natural_h as f64;
    sx.min(sy).min(1.0).max(MIN_SHRINK)
}
