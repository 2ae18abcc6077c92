use pylongrid::{FilterConfig, ImageView, PixelFilter, PylonGridError, QuantileFilter};

#[test]
fn median_ignores_single_outlier() {
    let data = [10u8, 10, 10, 10, 50, 10, 10, 10, 10];
    let view = ImageView::from_slice(&data, 3, 3).unwrap();
    let filter = QuantileFilter::new(1, 0.5, 1).unwrap();
    assert_eq!(filter.calculate(view, 1, 1), 10);
}

#[test]
fn median_of_distinct_values_is_middle_sample() {
    let data = [9u8, 1, 8, 2, 7, 3, 6, 4, 5];
    let view = ImageView::from_slice(&data, 3, 3).unwrap();
    let filter = QuantileFilter::median(1);
    assert_eq!(filter.calculate(view, 1, 1), 5);
}

#[test]
fn quantile_selects_order_statistic() {
    // 5x5 kernel holding 0..25 in scrambled order.
    let data: Vec<u8> = (0u8..25).map(|v| (v * 7) % 25).collect();
    let view = ImageView::from_slice(&data, 5, 5).unwrap();

    // target = round(25 * q); the result is the sample with that many smaller ones
    let low = QuantileFilter::new(2, 0.2, 1).unwrap();
    assert_eq!(low.calculate(view, 2, 2), 5);
    let high = QuantileFilter::new(2, 0.8, 1).unwrap();
    assert_eq!(high.calculate(view, 2, 2), 20);
    let min = QuantileFilter::new(2, 0.0, 1).unwrap();
    assert_eq!(min.calculate(view, 2, 2), 0);
    let max = QuantileFilter::new(2, 1.0, 1).unwrap();
    assert_eq!(max.calculate(view, 2, 2), 24);
}

#[test]
fn kernel_follows_view_stride() {
    // 3x3 kernel inside a 4-wide buffer whose padding column holds zeros.
    let data = [
        30u8, 30, 30, 0, //
        30, 30, 30, 0, //
        30, 30, 30, 0,
    ];
    let view = ImageView::new(&data, 3, 3, 4).unwrap();
    let min = QuantileFilter::new(1, 0.0, 1).unwrap();
    assert_eq!(min.calculate(view, 1, 1), 30);
}

#[test]
fn kernel_is_centered_on_query_point() {
    let mut data = vec![100u8; 7 * 7];
    for y in 3..6 {
        for x in 3..6 {
            data[y * 7 + x] = 20;
        }
    }
    let view = ImageView::from_slice(&data, 7, 7).unwrap();
    let filter = QuantileFilter::median(1);
    assert_eq!(filter.calculate(view, 4, 4), 20);
    assert_eq!(filter.calculate(view, 2, 2), 100);
    // Corner of the block: 4 of 9 samples are low, the median is high.
    assert_eq!(filter.calculate(view, 3, 3), 100);
}

#[test]
fn invalid_parameters_are_rejected() {
    for quantile in [-0.1, 1.01, f64::NAN] {
        let err = QuantileFilter::new(2, quantile, 1).err().unwrap();
        assert!(matches!(err, PylonGridError::InvalidFilterConfig { .. }));
    }
    let err = QuantileFilter::new(2, 0.5, 0).err().unwrap();
    assert_eq!(
        err,
        PylonGridError::InvalidFilterConfig {
            reason: "step must be at least 1",
        }
    );
}

#[test]
fn config_builds_equivalent_filter() {
    let cfg = FilterConfig {
        radius: 7,
        quantile: 0.2,
        step: 2,
    };
    let filter = cfg.build().unwrap();
    assert_eq!(filter.radius(), 7);
    assert_eq!(filter.step(), 2);
    assert_eq!(filter.probed_area(), 64);
    assert_eq!(filter.target_count(), 13);
}
