use winscan::{
    Configurable, DummySelector, Evaluator, ExhaustiveConfig, ExhaustiveExplorer, OptionValue,
    Rect, ScaleFailure, ScanConfig, ScanContext, ScanError, ScanResult, ScanStats, Scanner, Size,
    Verdict,
};

/// Accepts a window when its top-left corner is on a fixed lattice and
/// records every call.
struct LatticeEvaluator {
    period: usize,
    prepared: Vec<Size>,
    calls: Vec<Rect>,
    fail_on: Option<Size>,
}

impl LatticeEvaluator {
    fn new(period: usize) -> Self {
        Self {
            period,
            prepared: Vec::new(),
            calls: Vec::new(),
            fail_on: None,
        }
    }
}

impl Evaluator for LatticeEvaluator {
    fn prepare_scale(&mut self, size: Size) -> ScanResult<()> {
        if self.fail_on == Some(size) {
            return Err(ScanError::DegenerateTemplate {
                reason: "test failure",
            });
        }
        self.prepared.push(size);
        Ok(())
    }

    fn evaluate(&mut self, window: Rect) -> Verdict {
        self.calls.push(window);
        if window.x % 7 == 3 {
            return Verdict::Pruned;
        }
        if window.x % self.period == 0 && window.y % self.period == 0 {
            Verdict::accept(window.width as f32)
        } else {
            Verdict::Rejected { score: 0.0 }
        }
    }
}

fn scanner(stride: f32) -> Scanner {
    Scanner::new(
        ExhaustiveExplorer::new(ExhaustiveConfig {
            stride_x: stride,
            stride_y: stride,
        }),
        DummySelector::new(),
    )
}

#[test]
fn multi_scale_scan_sums_stats_and_selects_everything() {
    let image = Size::new(48, 32);
    let scales = [Size::square(8), Size::square(16), Size::new(24, 12)];
    let mut evaluator = LatticeEvaluator::new(4);
    let mut scanner = scanner(0.25);

    let report = scanner
        .scan(image, Rect::full(image), &mut evaluator, &scales)
        .unwrap();

    assert_eq!(report.scales.len(), 3);
    assert!(report.failed.is_empty());
    assert!(!report.stopped_early);
    assert_eq!(evaluator.prepared, scales.to_vec());

    let mut summed = ScanStats::default();
    for (scale, size) in report.scales.iter().zip(scales) {
        assert_eq!(scale.size, size);
        assert_eq!(scale.visited, scale.stats.visited());
        summed += scale.stats;
    }
    assert_eq!(report.stats, summed);
    assert_eq!(report.stats.visited(), evaluator.calls.len());
    assert!(report.stats.accepted <= report.stats.scanned);
    assert!(report.stats.pruned > 0);

    assert_eq!(report.selected, report.stats.accepted);
    let detections = scanner.detections();
    assert_eq!(detections.len(), report.stats.accepted);
    // selector output follows acceptance order: scale by scale
    let sizes: Vec<Size> = detections.iter().map(|c| c.window.size()).collect();
    let mut sorted_by_scale = sizes.clone();
    sorted_by_scale.sort_by_key(|s| scales.iter().position(|x| x == s));
    assert_eq!(sizes, sorted_by_scale);
}

#[test]
fn every_window_stays_inside_the_roi() {
    let image = Size::new(64, 40);
    let roi = Rect::new(9, 5, 37, 29);
    let scales = [Size::square(5), Size::new(13, 7), Size::square(29), Size::square(30)];
    let mut evaluator = LatticeEvaluator::new(3);

    let report = scanner(0.3)
        .scan(image, roi, &mut evaluator, &scales)
        .unwrap();

    assert!(!evaluator.calls.is_empty());
    for window in &evaluator.calls {
        assert!(roi.contains(window), "{window:?} outside {roi:?}");
    }
    // 30 rows do not fit in a 29-pixel-high roi
    assert_eq!(report.scales[3].visited, 0);
}

#[test]
fn global_stop_ends_after_first_detecting_scale() {
    let image = Size::new(40, 40);
    let scales = [Size::square(50), Size::square(10), Size::square(20)];
    let mut evaluator = LatticeEvaluator::new(1);
    let mut scanner = scanner(0.1).with_config(ScanConfig {
        stop_at_first_detection: true,
        verbose: true,
    });

    let report = scanner
        .scan(image, Rect::full(image), &mut evaluator, &scales)
        .unwrap();

    assert!(report.stopped_early);
    assert_eq!(report.scales.len(), 2);
    assert_eq!(report.scales[0].visited, 0);
    assert!(report.scales[1].stopped_early);
    assert_eq!(report.stats.accepted, 1);
    assert_eq!(report.stats.scanned, 1);
    assert_eq!(evaluator.calls, vec![Rect::new(0, 0, 10, 10)]);
    assert_eq!(scanner.detections().len(), 1);
}

#[test]
fn failed_scale_is_reported_and_scan_continues() {
    let image = Size::new(32, 32);
    let scales = [Size::square(8), Size::new(0, 4), Size::square(12), Size::square(16)];
    let mut evaluator = LatticeEvaluator::new(4);
    evaluator.fail_on = Some(Size::square(12));

    let report = scanner(0.5)
        .scan(image, Rect::full(image), &mut evaluator, &scales)
        .unwrap();

    assert_eq!(report.scales.len(), 2);
    assert_eq!(
        report.failed,
        vec![
            ScaleFailure {
                size: Size::new(0, 4),
                error: ScanError::InvalidDimensions {
                    width: 0,
                    height: 4
                },
            },
            ScaleFailure {
                size: Size::square(12),
                error: ScanError::DegenerateTemplate {
                    reason: "test failure"
                },
            },
        ]
    );
    assert!(evaluator.calls.iter().all(|w| w.width == 8 || w.width == 16));
}

#[test]
fn invalid_roi_fails_the_whole_scan() {
    let mut evaluator = LatticeEvaluator::new(2);
    let mut scanner: Scanner = Scanner::default();
    let err = scanner
        .scan(
            Size::new(10, 10),
            Rect::new(5, 5, 6, 2),
            &mut evaluator,
            &[Size::square(2)],
        )
        .unwrap_err();
    assert!(matches!(err, ScanError::RoiOutOfBounds { .. }));
    assert!(evaluator.calls.is_empty());
}

#[test]
fn selector_output_is_replaced_between_scans() {
    let image = Size::new(20, 20);
    let mut scanner = scanner(0.5);
    let mut accept_origin = |w: Rect| {
        if w.x == 0 && w.y == 0 {
            Verdict::accept(1.0)
        } else {
            Verdict::Rejected { score: 0.0 }
        }
    };

    scanner
        .scan(image, Rect::full(image), &mut accept_origin, &[Size::square(4)])
        .unwrap();
    assert_eq!(scanner.detections().len(), 1);

    let mut reject = |_: Rect| Verdict::Rejected { score: 0.0 };
    let report = scanner
        .scan(image, Rect::full(image), &mut reject, &[Size::square(4)])
        .unwrap();
    assert_eq!(report.selected, 0);
    assert!(scanner.detections().is_empty());
}

#[test]
fn scan_with_context_keeps_existing_candidates() {
    let image = Size::new(16, 16);
    let mut ctx = ScanContext::for_image(image).unwrap();
    let mut scanner = scanner(0.5);
    let mut accept_origin = |w: Rect| {
        if w.x == 0 && w.y == 0 {
            Verdict::accept(1.0)
        } else {
            Verdict::Rejected { score: 0.0 }
        }
    };

    scanner
        .scan_with_context(&mut ctx, &mut accept_origin, &[Size::square(4)])
        .unwrap();
    let report = scanner
        .scan_with_context(&mut ctx, &mut accept_origin, &[Size::square(8)])
        .unwrap();

    assert_eq!(report.stats.accepted, 1);
    assert_eq!(ctx.candidates().len(), 2);
    assert_eq!(scanner.detections().len(), 2);
    assert_eq!(ctx.stats().accepted, 2);
}

#[test]
fn named_options_configure_scanner() {
    let mut explorer = ExhaustiveExplorer::default();
    let mut scan_cfg = ScanConfig::default();
    let options = [
        ("dx", OptionValue::Float(0.5)),
        ("dy", OptionValue::Float(0.25)),
        ("stop_at_first_detection", OptionValue::Bool(true)),
        ("unknown", OptionValue::Int(3)),
    ];
    assert_eq!(explorer.config_mut().apply_options(options), 2);
    assert_eq!(scan_cfg.apply_options(options), 1);

    let mut scanner = Scanner::new(explorer, DummySelector::new())
        .with_config(scan_cfg);
    assert!(scanner.config().stop_at_first_detection);
    assert_eq!(scanner.explorer().strides(Size::square(8)), (4, 2));

    let mut evaluator = |_: Rect| Verdict::Rejected { score: 0.0 };
    let report = scanner
        .scan(
            Size::new(16, 16),
            Rect::new(0, 0, 16, 16),
            &mut evaluator,
            &[Size::square(8)],
        )
        .unwrap();
    // x in {0, 4, 8}, y in {0, 2, 4, 6, 8}
    assert_eq!(report.stats.visited(), 15);
}
