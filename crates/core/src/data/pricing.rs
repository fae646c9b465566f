use crate::models::pricing::{AnnualClassSeries, AnnualPriceTable};

fn owned(ships: &[&str]) -> Vec<String> {
    ships.iter().map(|s| (*s).to_string()).collect()
}

/// The static annual price table behind the pricing-history view: one
/// average price per class per year, in USD, with per-class line colors
/// and the ship listing shown in the detail panel.
///
/// This table is independent of the synthetic comparison history — it is a
/// separate, fixed data set with its own (smaller) class membership.
pub fn builtin_annual_price_table() -> AnnualPriceTable {
    let year_labels = ["2018", "2019", "2020", "2021", "2022", "2023", "2024"]
        .iter()
        .map(|y| (*y).to_string())
        .collect();

    let series = vec![
        AnnualClassSeries {
            label: "Oasis Class".to_string(),
            ships: owned(&[
                "Oasis of the Seas",
                "Allure of the Seas",
                "Harmony of the Seas",
                "Symphony of the Seas",
                "Wonder of the Seas",
            ]),
            values: vec![950.0, 980.0, 960.0, 940.0, 970.0, 1000.0, 1020.0],
            color_hint: "#36a2eb".to_string(),
        },
        AnnualClassSeries {
            label: "Quantum Class".to_string(),
            ships: owned(&[
                "Quantum of the Seas",
                "Anthem of the Seas",
                "Ovation of the Seas",
                "Spectrum of the Seas",
            ]),
            values: vec![1050.0, 1080.0, 1070.0, 1060.0, 1090.0, 1120.0, 1150.0],
            color_hint: "#ff6384".to_string(),
        },
        AnnualClassSeries {
            label: "Freedom Class".to_string(),
            ships: owned(&[
                "Freedom of the Seas",
                "Liberty of the Seas",
                "Independence of the Seas",
            ]),
            values: vec![880.0, 900.0, 890.0, 880.0, 890.0, 910.0, 930.0],
            color_hint: "#008000".to_string(),
        },
        AnnualClassSeries {
            label: "Voyager Class".to_string(),
            ships: owned(&[
                "Voyager of the Seas",
                "Explorer of the Seas",
                "Adventure of the Seas",
                "Navigator of the Seas",
                "Mariner of the Seas",
            ]),
            values: vec![870.0, 890.0, 880.0, 870.0, 880.0, 900.0, 920.0],
            color_hint: "#4bc0c0".to_string(),
        },
        AnnualClassSeries {
            label: "Radiance Class".to_string(),
            ships: owned(&[
                "Radiance of the Seas",
                "Brilliance of the Seas",
                "Serenade of the Seas",
                "Jewel of the Seas",
            ]),
            values: vec![800.0, 820.0, 810.0, 800.0, 810.0, 830.0, 850.0],
            color_hint: "#ffa500".to_string(),
        },
        AnnualClassSeries {
            label: "Vision Class".to_string(),
            ships: owned(&[
                "Vision of the Seas",
                "Rhapsody of the Seas",
                "Enchantment of the Seas",
                "Grandeur of the Seas",
            ]),
            values: vec![750.0, 770.0, 760.0, 750.0, 760.0, 780.0, 800.0],
            color_hint: "#800080".to_string(),
        },
        AnnualClassSeries {
            label: "Icon Class".to_string(),
            ships: owned(&["Icon of the Seas"]),
            values: vec![1200.0, 1230.0, 1250.0, 1270.0, 1300.0, 1320.0, 1350.0],
            color_hint: "#ff1493".to_string(),
        },
    ];

    AnnualPriceTable {
        year_labels,
        series,
    }
}
