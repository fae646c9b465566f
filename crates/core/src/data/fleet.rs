use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::fleet::{AnchorPrices, FleetCatalog, ShipClass};
use crate::models::timeline::TimelineEntry;

fn ymd(y: i32, m: u32, d: u32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
        CoreError::ValidationError(format!("Invalid built-in date {y}-{m:02}-{d:02}"))
    })
}

fn owned(ships: &[&str]) -> Vec<String> {
    ships.iter().map(|s| (*s).to_string()).collect()
}

/// The Royal Caribbean fleet, grouped by class in display order.
pub fn builtin_catalog() -> Result<FleetCatalog, CoreError> {
    FleetCatalog::new(vec![
        ShipClass::new(
            "Oasis",
            owned(&[
                "Allure of the Seas",
                "Harmony of the Seas",
                "Oasis of the Seas",
                "Symphony of the Seas",
                "Wonder of the Seas",
                "Utopia of the Seas",
            ]),
        ),
        ShipClass::new(
            "Quantum",
            owned(&[
                "Anthem of the Seas",
                "Odyssey of the Seas",
                "Ovation of the Seas",
                "Quantum of the Seas",
                "Spectrum of the Seas",
            ]),
        ),
        ShipClass::new(
            "Freedom",
            owned(&[
                "Freedom of the Seas",
                "Independence of the Seas",
                "Liberty of the Seas",
            ]),
        ),
        ShipClass::new(
            "Voyager",
            owned(&[
                "Adventure of the Seas",
                "Explorer of the Seas",
                "Mariner of the Seas",
                "Navigator of the Seas",
                "Voyager of the Seas",
            ]),
        ),
        ShipClass::new(
            "Radiance",
            owned(&[
                "Brilliance of the Seas",
                "Jewel of the Seas",
                "Radiance of the Seas",
                "Serenade of the Seas",
            ]),
        ),
        ShipClass::new(
            "Vision",
            owned(&[
                "Enchantment of the Seas",
                "Grandeur of the Seas",
                "Rhapsody of the Seas",
                "Vision of the Seas",
            ]),
        ),
        ShipClass::new(
            "Sovereign",
            owned(&["Monarch of the Seas", "Sovereign of the Seas"]),
        ),
        ShipClass::new("Legacy", owned(&["Splendour of the Seas"])),
        ShipClass::new(
            "Icon",
            owned(&[
                "Legend of the Seas (TBD)",
                "Icon of the Seas",
                "Star of the Seas",
            ]),
        ),
    ])
}

/// Base and current price anchors per ship, in USD.
///
/// Every ship in the catalog has a base price (history generation requires
/// one). Ships without a current price — the unfinished Legend of the Seas —
/// fall back to the randomized rule on the final sample date.
pub fn builtin_anchor_prices() -> Result<AnchorPrices, CoreError> {
    AnchorPrices::from_tables(
        &[
            ("Allure of the Seas", 1180.0),
            ("Harmony of the Seas", 1220.0),
            ("Oasis of the Seas", 1150.0),
            ("Symphony of the Seas", 1250.0),
            ("Wonder of the Seas", 1200.0),
            ("Anthem of the Seas", 1320.0),
            ("Odyssey of the Seas", 1280.0),
            ("Ovation of the Seas", 1290.0),
            ("Quantum of the Seas", 1300.0),
            ("Spectrum of the Seas", 1290.0),
            ("Utopia of the Seas", 1310.0),
            ("Freedom of the Seas", 1100.0),
            ("Independence of the Seas", 1080.0),
            ("Liberty of the Seas", 1085.0),
            ("Adventure of the Seas", 1020.0),
            ("Explorer of the Seas", 1030.0),
            ("Mariner of the Seas", 1050.0),
            ("Navigator of the Seas", 1040.0),
            ("Voyager of the Seas", 1050.0),
            ("Brilliance of the Seas", 940.0),
            ("Jewel of the Seas", 960.0),
            ("Radiance of the Seas", 950.0),
            ("Serenade of the Seas", 980.0),
            ("Enchantment of the Seas", 400.0),
            ("Grandeur of the Seas", 620.0),
            ("Rhapsody of the Seas", 510.0),
            ("Vision of the Seas", 680.0),
            ("Monarch of the Seas", 830.0),
            ("Sovereign of the Seas", 850.0),
            ("Splendour of the Seas", 780.0),
            ("Icon of the Seas", 1500.0),
            ("Star of the Seas", 1500.0),
            ("Legend of the Seas (TBD)", 1500.0),
        ],
        &[
            ("Allure of the Seas", 1580.0),
            ("Harmony of the Seas", 1620.0),
            ("Oasis of the Seas", 1663.0),
            ("Symphony of the Seas", 1435.0),
            ("Wonder of the Seas", 1743.0),
            ("Anthem of the Seas", 2025.0),
            ("Odyssey of the Seas", 1980.0),
            ("Ovation of the Seas", 1995.0),
            ("Quantum of the Seas", 2008.0),
            ("Spectrum of the Seas", 1995.0),
            ("Utopia of the Seas", 2015.0),
            ("Freedom of the Seas", 2308.0),
            ("Independence of the Seas", 2200.0),
            ("Liberty of the Seas", 2225.0),
            ("Adventure of the Seas", 1590.0),
            ("Explorer of the Seas", 1600.0),
            ("Mariner of the Seas", 1580.0),
            ("Navigator of the Seas", 1590.0),
            ("Voyager of the Seas", 1672.0),
            ("Brilliance of the Seas", 870.0),
            ("Jewel of the Seas", 880.0),
            ("Radiance of the Seas", 865.0),
            ("Serenade of the Seas", 890.0),
            ("Enchantment of the Seas", 546.0),
            ("Grandeur of the Seas", 560.0),
            ("Rhapsody of the Seas", 570.0),
            ("Vision of the Seas", 540.0),
            ("Monarch of the Seas", 1050.0),
            ("Sovereign of the Seas", 1100.0),
            ("Splendour of the Seas", 1000.0),
            ("Icon of the Seas", 1750.0),
            ("Star of the Seas", 2100.0),
        ],
    )
}

/// The seven quarterly sample dates the synthetic history is generated
/// over. The final date is the "today" anchor pinned to current prices.
pub fn builtin_sample_dates() -> Result<Vec<NaiveDate>, CoreError> {
    Ok(vec![
        ymd(2024, 1, 1)?,
        ymd(2024, 4, 1)?,
        ymd(2024, 7, 1)?,
        ymd(2024, 10, 1)?,
        ymd(2025, 1, 1)?,
        ymd(2025, 4, 1)?,
        ymd(2025, 7, 18)?,
    ])
}

/// Fleet launch timeline, date-ascending.
pub fn builtin_timeline() -> Result<Vec<TimelineEntry>, CoreError> {
    let entries = [
        (1988, 11, 23, "Sovereign of the Seas"),
        (1991, 4, 5, "Monarch of the Seas"),
        (1992, 12, 7, "Majesty of the Seas"),
        (1995, 2, 3, "Legend of the Seas"),
        (1996, 1, 19, "Grandeur of the Seas"),
        (1996, 2, 26, "Splendour of the Seas"),
        (1997, 11, 22, "Rhapsody of the Seas"),
        (1998, 2, 26, "Vision of the Seas"),
        (1999, 6, 17, "Voyager of the Seas"),
        (2000, 4, 12, "Explorer of the Seas"),
        (2001, 7, 3, "Radiance of the Seas"),
        (2001, 11, 28, "Adventure of the Seas"),
        (2003, 11, 14, "Mariner of the Seas"),
        (2003, 11, 21, "Serenade of the Seas"),
        (2004, 5, 15, "Jewel of the Seas"),
        (2006, 12, 19, "Freedom of the Seas"),
        (2007, 5, 29, "Liberty of the Seas"),
        (2008, 5, 8, "Independence of the Seas"),
        (2009, 10, 24, "Oasis of the Seas"),
        (2010, 11, 20, "Allure of the Seas"),
        (2014, 10, 31, "Quantum of the Seas"),
        (2015, 4, 26, "Anthem of the Seas"),
        (2016, 4, 23, "Ovation of the Seas"),
        (2016, 5, 29, "Harmony of the Seas"),
        (2018, 3, 31, "Symphony of the Seas"),
        (2019, 4, 20, "Spectrum of the Seas"),
        (2021, 7, 31, "Odyssey of the Seas"),
        (2022, 3, 22, "Wonder of the Seas"),
        (2023, 11, 22, "Icon of the Seas"),
        (2025, 5, 1, "Star of the Seas (Future)"),
        (2026, 11, 15, "Utopia of the Seas II (Announced)"),
    ];

    entries
        .iter()
        .map(|&(y, m, d, ship)| Ok(TimelineEntry::new(ymd(y, m, d)?, ship)))
        .collect()
}
