use price_chart_engine::domain::market_data::{OHLCV, Price, Sample, Timestamp, Volume};
use price_chart_engine::moving_average;
use quickcheck_macros::quickcheck;

fn make_sample(i: usize, close: f64) -> Sample {
    Sample::new(
        Timestamp::from_millis(i as u64 * 86_400_000),
        format!("day-{}", i),
        OHLCV::new(
            Price::from(close),
            Price::from(close),
            Price::from(close),
            Price::from(close),
            Volume::from(1u64),
        ),
    )
}

fn samples(closes: &[f64]) -> Vec<Sample> {
    closes.iter().enumerate().map(|(i, &c)| make_sample(i, c)).collect()
}

#[test]
fn window_of_three_over_five_closes() {
    let s = samples(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    assert_eq!(moving_average(&s, 3), vec![None, None, Some(20.0), Some(30.0), Some(40.0)]);
}

#[test]
fn short_input_is_all_absent() {
    let s = samples(&[1.0, 2.0, 3.0]);
    assert_eq!(moving_average(&s, 5), vec![None; 3]);
    assert!(moving_average(&[], 20).is_empty());
}

#[test]
fn window_one_echoes_closes() {
    let s = samples(&[3.5, 4.25, 9.0]);
    assert_eq!(moving_average(&s, 1), vec![Some(3.5), Some(4.25), Some(9.0)]);
}

#[test]
fn input_is_left_untouched() {
    let s = samples(&[5.0, 6.0, 7.0]);
    let before = s.clone();
    let _ = moving_average(&s, 2);
    assert_eq!(s, before);
}

fn closes_from(raw: &[u16]) -> Vec<f64> {
    raw.iter().map(|&v| f64::from(v) / 4.0 + 1.0).collect()
}

#[quickcheck]
fn output_length_matches_input(raw: Vec<u16>, window: u8) -> bool {
    let window = usize::from(window % 40) + 1;
    let s = samples(&closes_from(&raw));
    moving_average(&s, window).len() == s.len()
}

#[quickcheck]
fn defined_points_equal_window_mean(raw: Vec<u16>, window: u8) -> bool {
    let window = usize::from(window % 40) + 1;
    let closes = closes_from(&raw);
    let result = moving_average(&samples(&closes), window);

    if closes.len() < window {
        return result.iter().all(Option::is_none);
    }
    result.iter().enumerate().all(|(i, point)| {
        if i + 1 < window {
            point.is_none()
        } else {
            let mean = closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            *point == Some(mean)
        }
    })
}
