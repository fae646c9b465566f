// ═══════════════════════════════════════════════════════════════════
// Service Tests — HistoryService, ChartService, CurrencyService,
// DistributionService, AnalyticsService
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use royalstats_core::errors::CoreError;
use royalstats_core::i18n::TranslationTable;
use royalstats_core::models::fleet::{AnchorPrices, FleetCatalog, ShipClass};
use royalstats_core::models::pricing::{AnnualClassSeries, AnnualPriceTable};
use royalstats_core::models::record::{PriceHistory, PriceRecord};
use royalstats_core::models::view::{Currency, Language, Selection};
use royalstats_core::services::analytics_service::AnalyticsService;
use royalstats_core::services::chart_service::ChartService;
use royalstats_core::services::currency_service::{CurrencyService, CAD_PER_USD};
use royalstats_core::services::distribution_service::DistributionService;
use royalstats_core::services::history_service::{HistoryService, OFFSET_MAX, OFFSET_MIN};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn record(class: &str, ship: &str, date: NaiveDate, price: f64) -> PriceRecord {
    PriceRecord {
        class: class.to_string(),
        ship: ship.to_string(),
        date,
        price,
    }
}

fn small_catalog() -> FleetCatalog {
    FleetCatalog::new(vec![
        ShipClass::new("Alpha", vec!["One".into(), "Two".into(), "Three".into()]),
        ShipClass::new("Beta", vec!["Four".into()]),
    ])
    .unwrap()
}

fn small_anchors() -> AnchorPrices {
    AnchorPrices::from_tables(
        &[
            ("One", 1000.0),
            ("Two", 1100.0),
            ("Three", 1200.0),
            ("Four", 900.0),
        ],
        &[("One", 1500.0), ("Two", 1600.0), ("Three", 1700.0)],
    )
    .unwrap()
}

fn three_dates() -> Vec<NaiveDate> {
    vec![d(2024, 1, 1), d(2024, 7, 1), d(2025, 7, 18)]
}

// ═══════════════════════════════════════════════════════════════════
// HistoryService
// ═══════════════════════════════════════════════════════════════════

mod history_service {
    use super::*;

    #[test]
    fn record_count_is_ships_times_dates() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        assert_eq!(history.len(), 4 * 3);
    }

    #[test]
    fn last_date_uses_current_price_exactly() {
        let mut rng = StdRng::seed_from_u64(2);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        assert_eq!(history.price_of("One", d(2025, 7, 18)), Some(1500.0));
        assert_eq!(history.price_of("Two", d(2025, 7, 18)), Some(1600.0));
    }

    #[test]
    fn last_date_without_current_falls_back_to_offset_rule() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        // "Four" has no current price anchor; base is 900
        let price = history.price_of("Four", d(2025, 7, 18)).unwrap();
        assert!(price >= 900.0 + f64::from(OFFSET_MIN));
        assert!(price <= 900.0 + f64::from(OFFSET_MAX));
    }

    #[test]
    fn interior_dates_stay_within_offset_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let anchors = small_anchors();
        for record in history.records() {
            if record.date == d(2025, 7, 18) {
                continue;
            }
            let base = anchors.base(&record.ship).unwrap();
            assert!(
                record.price >= base + f64::from(OFFSET_MIN)
                    && record.price <= base + f64::from(OFFSET_MAX),
                "price {} for {} out of range around base {base}",
                record.price,
                record.ship
            );
        }
    }

    #[test]
    fn same_seed_reproduces_history() {
        let svc = HistoryService::new();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = svc
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng_a)
            .unwrap();
        let b = svc
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng_b)
            .unwrap();
        assert_eq!(a.records(), b.records());
    }

    #[test]
    fn missing_base_price_fails_generation() {
        let catalog = FleetCatalog::new(vec![ShipClass::new("Alpha", vec!["Ghost".into()])])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let result = HistoryService::new().generate(
            &catalog,
            &AnchorPrices::new(),
            &three_dates(),
            &mut rng,
        );
        match result.unwrap_err() {
            CoreError::MissingAnchorPrice { ship } => assert_eq!(ship, "Ghost"),
            other => panic!("Expected MissingAnchorPrice, got {other:?}"),
        }
    }

    #[test]
    fn single_date_with_current_price_never_needs_base() {
        let catalog =
            FleetCatalog::new(vec![ShipClass::new("Alpha", vec!["Pinned".into()])]).unwrap();
        let mut anchors = AnchorPrices::new();
        anchors.set_current("Pinned", 500.0).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let history = HistoryService::new()
            .generate(&catalog, &anchors, &[d(2025, 7, 18)], &mut rng)
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.price_of("Pinned", d(2025, 7, 18)), Some(500.0));
    }

    #[test]
    fn empty_date_sequence_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result =
            HistoryService::new().generate(&small_catalog(), &small_anchors(), &[], &mut rng);
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CurrencyService
// ═══════════════════════════════════════════════════════════════════

mod currency_service {
    use super::*;

    #[test]
    fn chart_mean_rounds_usd_to_integer() {
        let svc = CurrencyService::new();
        assert_eq!(svc.chart_mean(216.6667, Currency::Usd), 217.0);
        assert_eq!(svc.chart_mean(200.0, Currency::Usd), 200.0);
    }

    #[test]
    fn chart_mean_converts_then_rounds_cad() {
        let svc = CurrencyService::new();
        // 200 * 1.35 = 270
        assert_eq!(svc.chart_mean(200.0, Currency::Cad), 270.0);
    }

    #[test]
    fn chart_price_passes_usd_through_raw() {
        let svc = CurrencyService::new();
        assert_eq!(svc.chart_price(1234.5, Currency::Usd), 1234.5);
    }

    #[test]
    fn chart_price_rounds_only_when_converting() {
        let svc = CurrencyService::new();
        // 1234.5 * 1.35 = 1666.575 → 1667
        assert_eq!(svc.chart_price(1234.5, Currency::Cad), 1667.0);
    }

    #[test]
    fn table_value_keeps_two_decimals_in_cad() {
        let svc = CurrencyService::new();
        let converted = svc.table_value(950.0, Currency::Cad);
        assert!((converted - 1282.5).abs() < 1e-9);
    }

    #[test]
    fn table_value_passes_usd_through_raw() {
        let svc = CurrencyService::new();
        assert_eq!(svc.table_value(950.0, Currency::Usd), 950.0);
    }

    #[test]
    fn round2() {
        assert!((CurrencyService::round2(1315.2857) - 1315.29).abs() < 1e-9);
        assert!((CurrencyService::round2(1.005) - 1.0).abs() < 0.01);
    }

    #[test]
    fn rate_constant() {
        assert!((CAD_PER_USD - 1.35).abs() < f64::EPSILON);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService — overview
// ═══════════════════════════════════════════════════════════════════

mod overview_series {
    use super::*;

    fn one_class_history() -> PriceHistory {
        PriceHistory::new(vec![
            record("Alpha", "One", d(2024, 1, 1), 100.0),
            record("Alpha", "Two", d(2024, 1, 1), 200.0),
            record("Alpha", "Three", d(2024, 1, 1), 300.0),
        ])
    }

    fn one_class_catalog() -> FleetCatalog {
        FleetCatalog::new(vec![ShipClass::new(
            "Alpha",
            vec!["One".into(), "Two".into(), "Three".into()],
        )])
        .unwrap()
    }

    #[test]
    fn class_average_of_three_ships() {
        let set = ChartService::new()
            .overview_series(
                &one_class_history(),
                &one_class_catalog(),
                Currency::Usd,
                &TranslationTable::new(),
                Language::En,
            )
            .unwrap();
        assert_eq!(set.series.len(), 1);
        assert_eq!(set.series[0].points, vec![Some(200.0)]);
    }

    #[test]
    fn cad_average_converts_before_rounding() {
        let set = ChartService::new()
            .overview_series(
                &one_class_history(),
                &one_class_catalog(),
                Currency::Cad,
                &TranslationTable::new(),
                Language::En,
            )
            .unwrap();
        assert_eq!(set.series[0].points, vec![Some(270.0)]);
    }

    #[test]
    fn usd_value_times_rate_matches_cad_within_one() {
        let mut rng = StdRng::seed_from_u64(11);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let svc = ChartService::new();
        let translations = TranslationTable::new();
        let usd = svc
            .overview_series(
                &history,
                &small_catalog(),
                Currency::Usd,
                &translations,
                Language::En,
            )
            .unwrap();
        let cad = svc
            .overview_series(
                &history,
                &small_catalog(),
                Currency::Cad,
                &translations,
                Language::En,
            )
            .unwrap();
        for (u_series, c_series) in usd.series.iter().zip(&cad.series) {
            for (u, c) in u_series.points.iter().zip(&c_series.points) {
                let expected = (u.unwrap() * CAD_PER_USD).round();
                assert!((expected - c.unwrap()).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn series_follow_catalog_order() {
        let mut rng = StdRng::seed_from_u64(12);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let set = ChartService::new()
            .overview_series(
                &history,
                &small_catalog(),
                Currency::Usd,
                &TranslationTable::new(),
                Language::En,
            )
            .unwrap();
        let names: Vec<&str> = set.series.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn axis_is_sorted_distinct_dates() {
        let mut rng = StdRng::seed_from_u64(13);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let set = ChartService::new()
            .overview_series(
                &history,
                &small_catalog(),
                Currency::Usd,
                &TranslationTable::new(),
                Language::En,
            )
            .unwrap();
        assert_eq!(
            set.axis_labels,
            vec!["2024-01-01", "2024-07-01", "2025-07-18"]
        );
    }

    #[test]
    fn class_without_records_is_a_data_integrity_error() {
        // Catalog knows two classes, but the record set only covers Alpha
        let history = one_class_history();
        let catalog = FleetCatalog::new(vec![
            ShipClass::new("Alpha", vec!["One".into(), "Two".into(), "Three".into()]),
            ShipClass::new("Beta", vec!["Four".into()]),
        ])
        .unwrap();
        let result = ChartService::new().overview_series(
            &history,
            &catalog,
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        match result.unwrap_err() {
            CoreError::EmptyAggregationGroup { class, date } => {
                assert_eq!(class, "Beta");
                assert_eq!(date, d(2024, 1, 1));
            }
            other => panic!("Expected EmptyAggregationGroup, got {other:?}"),
        }
    }

    #[test]
    fn overview_points_are_never_gaps() {
        let mut rng = StdRng::seed_from_u64(14);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let set = ChartService::new()
            .overview_series(
                &history,
                &small_catalog(),
                Currency::Usd,
                &TranslationTable::new(),
                Language::En,
            )
            .unwrap();
        for series in &set.series {
            assert!(series.points.iter().all(Option::is_some));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChartService — drill-down
// ═══════════════════════════════════════════════════════════════════

mod drill_down_series {
    use super::*;

    fn sparse_history() -> PriceHistory {
        // "Two" has no record on the middle date
        PriceHistory::new(vec![
            record("Alpha", "One", d(2024, 1, 1), 1000.0),
            record("Alpha", "One", d(2024, 7, 1), 1050.5),
            record("Alpha", "One", d(2025, 7, 18), 1500.0),
            record("Alpha", "Two", d(2024, 1, 1), 1100.0),
            record("Alpha", "Two", d(2025, 7, 18), 1600.0),
            record("Beta", "Four", d(2024, 1, 1), 900.0),
            record("Beta", "Four", d(2024, 7, 1), 910.0),
            record("Beta", "Four", d(2025, 7, 18), 920.0),
        ])
    }

    fn select(classes: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for class in classes {
            selection.toggle(class);
        }
        selection
    }

    #[test]
    fn one_series_per_ship_of_selected_classes() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Alpha"]),
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        let names: Vec<&str> = set.series.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(names, vec!["One", "Two"]);
    }

    #[test]
    fn missing_record_becomes_a_gap_not_an_error() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Alpha"]),
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        let two = &set.series[1];
        assert_eq!(two.points, vec![Some(1100.0), None, Some(1600.0)]);
    }

    #[test]
    fn usd_prices_pass_through_unrounded() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Alpha"]),
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        // 1050.5 stays exactly 1050.5 — drill-down USD is raw
        assert_eq!(set.series[0].points[1], Some(1050.5));
    }

    #[test]
    fn cad_prices_convert_and_round() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Alpha"]),
            Currency::Cad,
            &TranslationTable::new(),
            Language::En,
        );
        // 1050.5 * 1.35 = 1418.175 → 1418
        assert_eq!(set.series[0].points[1], Some(1418.0));
    }

    #[test]
    fn series_never_exceed_axis_length() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Alpha", "Beta"]),
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        for series in &set.series {
            assert_eq!(series.points.len(), set.axis_labels.len());
        }
    }

    #[test]
    fn unselected_classes_are_excluded() {
        let set = ChartService::new().drill_down_series(
            &sparse_history(),
            &select(&["Beta"]),
            Currency::Usd,
            &TranslationTable::new(),
            Language::En,
        );
        assert_eq!(set.series.len(), 1);
        assert_eq!(set.series[0].display_name, "Four");
    }
}

// ═══════════════════════════════════════════════════════════════════
// DistributionService
// ═══════════════════════════════════════════════════════════════════

mod distribution_service {
    use super::*;

    #[test]
    fn catalog_distribution_counts_member_lists() {
        let dist = DistributionService::new().catalog_distribution(
            &small_catalog(),
            &TranslationTable::new(),
            Language::En,
        );
        assert_eq!(dist.class_labels, vec!["Alpha", "Beta"]);
        assert_eq!(dist.counts, vec![3, 1]);
    }

    #[test]
    fn recorded_distribution_counts_distinct_ships() {
        let mut rng = StdRng::seed_from_u64(21);
        let history = HistoryService::new()
            .generate(&small_catalog(), &small_anchors(), &three_dates(), &mut rng)
            .unwrap();
        let dist = DistributionService::new().recorded_distribution(
            &small_catalog(),
            &history,
            &TranslationTable::new(),
            Language::En,
        );
        assert_eq!(dist.counts, vec![3, 1]);
    }

    #[test]
    fn the_two_counters_can_diverge() {
        // Record set is missing ship "Three" entirely — the recorded view
        // must say 2 while the catalog view keeps saying 3.
        let history = PriceHistory::new(vec![
            record("Alpha", "One", d(2024, 1, 1), 100.0),
            record("Alpha", "Two", d(2024, 1, 1), 200.0),
            record("Beta", "Four", d(2024, 1, 1), 300.0),
        ]);
        let svc = DistributionService::new();
        let translations = TranslationTable::new();
        let from_catalog =
            svc.catalog_distribution(&small_catalog(), &translations, Language::En);
        let from_records = svc.recorded_distribution(
            &small_catalog(),
            &history,
            &translations,
            Language::En,
        );
        assert_eq!(from_catalog.counts, vec![3, 1]);
        assert_eq!(from_records.counts, vec![2, 1]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsService & annual table
// ═══════════════════════════════════════════════════════════════════

mod analytics_service {
    use super::*;

    fn table() -> AnnualPriceTable {
        AnnualPriceTable {
            year_labels: vec!["2022".into(), "2023".into(), "2024".into()],
            series: vec![AnnualClassSeries {
                label: "Test Class".into(),
                ships: vec!["One".into(), "Two".into()],
                values: vec![900.0, 1000.0, 1100.0],
                color_hint: "#36a2eb".into(),
            }],
        }
    }

    #[test]
    fn summary_in_usd() {
        let summary = AnalyticsService::new()
            .class_summary(&table(), "Test Class", Currency::Usd)
            .unwrap();
        assert!((summary.average - 1000.0).abs() < 1e-9);
        assert_eq!(summary.min, 900.0);
        assert_eq!(summary.max, 1100.0);
        assert_eq!(summary.ships, vec!["One", "Two"]);
        assert_eq!(summary.currency, Currency::Usd);
    }

    #[test]
    fn summary_converts_before_aggregating() {
        let summary = AnalyticsService::new()
            .class_summary(&table(), "Test Class", Currency::Cad)
            .unwrap();
        // converted: 1215, 1350, 1485 → avg 1350
        assert!((summary.average - 1350.0).abs() < 1e-9);
        assert!((summary.min - 1215.0).abs() < 1e-9);
        assert!((summary.max - 1485.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_class_label_fails() {
        let result =
            AnalyticsService::new().class_summary(&table(), "Nope Class", Currency::Usd);
        assert!(matches!(result, Err(CoreError::SeriesNotFound(_))));
    }

    #[test]
    fn annual_series_keeps_year_axis_and_colors() {
        let set = ChartService::new().annual_series(&table(), Currency::Usd);
        assert_eq!(set.axis_labels, vec!["2022", "2023", "2024"]);
        assert_eq!(set.series[0].color_hint, "#36a2eb");
        assert_eq!(
            set.series[0].points,
            vec![Some(900.0), Some(1000.0), Some(1100.0)]
        );
    }

    #[test]
    fn annual_series_cad_uses_two_decimal_policy() {
        let table = AnnualPriceTable {
            year_labels: vec!["2024".into()],
            series: vec![AnnualClassSeries {
                label: "Test Class".into(),
                ships: vec![],
                values: vec![950.0],
                color_hint: "#fff".into(),
            }],
        };
        let set = ChartService::new().annual_series(&table, Currency::Cad);
        let value = set.series[0].points[0].unwrap();
        assert!((value - 1282.5).abs() < 1e-9);
    }
}
