use super::Sample;

/// Indicator value aligned with a sample position; `None` where undefined.
pub type IndicatorPoint = Option<f64>;

/// Simple moving average of `close`, one point per input sample.
///
/// The first `window - 1` points are `None`. When the input is shorter than
/// the window (or the window is zero) every point is `None`. Each mean sums
/// its window left to right, so results match the textbook definition exactly.
pub fn moving_average(samples: &[Sample], window: usize) -> Vec<IndicatorPoint> {
    if window == 0 || samples.len() < window {
        return vec![None; samples.len()];
    }

    let mut out = Vec::with_capacity(samples.len());
    out.extend(std::iter::repeat_n(None, window - 1));

    for end in window..=samples.len() {
        let sum: f64 = samples[end - window..end].iter().map(Sample::close).sum();
        out.push(Some(sum / window as f64));
    }

    out
}

/// Moving averages for several windows, returned in the order given.
pub fn moving_averages(samples: &[Sample], windows: &[usize]) -> Vec<(usize, Vec<IndicatorPoint>)> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        windows
            .par_iter()
            .map(|&window| (window, moving_average(samples, window)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        windows
            .iter()
            .map(|&window| (window, moving_average(samples, window)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{OHLCV, Price, Timestamp, Volume};

    fn closes(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Sample::new(
                    Timestamp::from_millis(i as u64),
                    format!("{}", i),
                    OHLCV::new(
                        Price::from(c),
                        Price::from(c),
                        Price::from(c),
                        Price::from(c),
                        Volume::from(1),
                    ),
                )
            })
            .collect()
    }

    #[test]
    fn window_of_three() {
        let samples = closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(
            moving_average(&samples, 3),
            vec![None, None, Some(20.0), Some(30.0), Some(40.0)]
        );
    }

    #[test]
    fn window_of_one_is_identity() {
        let samples = closes(&[1.5, 2.5]);
        assert_eq!(moving_average(&samples, 1), vec![Some(1.5), Some(2.5)]);
    }

    #[test]
    fn zero_window_degrades_to_absent() {
        let samples = closes(&[1.0, 2.0]);
        assert_eq!(moving_average(&samples, 0), vec![None, None]);
    }

    #[test]
    fn several_windows_keep_request_order() {
        let samples = closes(&[1.0, 2.0, 3.0]);
        let out = moving_averages(&samples, &[3, 2]);
        assert_eq!(out[0].0, 3);
        assert_eq!(out[1], (2, vec![None, Some(1.5), Some(2.5)]));
    }
}
