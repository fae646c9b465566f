use crate::i18n::{LocalizedText, TranslationTable};

/// The built-in bilingual string tables.
///
/// Not every ship has a French label — lookups for the missing ones fall
/// back to the raw ship name, matching the catalog.
pub fn builtin_translations() -> TranslationTable {
    let mut table = TranslationTable::new();

    // ── UI strings ──────────────────────────────────────────────────
    let ui = [
        ("title", "Welcome to RoyalStats", "Bienvenue sur RoyalStats"),
        (
            "subtitle",
            " Explore Royal Caribbean Fleet Data. Compare ships, prices, and classes across Royal Caribbean’s entire fleet.",
            "Explorez les données de la flotte Royal Caribbean. Comparez les navires, les prix et les classes de toute la flotte Royal Caribbean.",
        ),
        ("checkPrices", "Check out their prices", "Consultez leurs prix"),
        (
            "learnFleet",
            "Learn more about the fleet",
            "En savoir plus sur la flotte",
        ),
        (
            "fleetTitle",
            "Royal Caribbean Fleetwide Comparisons",
            "Comparaison de la flotte Royal Caribbean",
        ),
        (
            "modalTitle",
            "Filter by Cruise Class",
            "Filtrer par classe de croisière",
        ),
        ("filterButton", "Filter", "Filtrer"),
        ("removeFilterButton", "Remove Filters", "Supprimer les filtres"),
        (
            "donutTitle",
            "Fleet Distribution by Class",
            "Répartition de la flotte par classe",
        ),
        ("homeLinkText", "Home", "Accueil"),
        ("fleetLinkText", "Fleet", "Flotte"),
        ("pricesLinkText", "Prices", "Prix"),
        (
            "languageToggleInfo",
            "Use the language toggle to switch languages",
            "Utilisez le sélecteur de langue pour changer la langue",
        ),
        (
            "journeyTitle",
            "Royal Caribbean's fleet",
            "La flotte de royal Caribbean",
        ),
        (
            "journeyDescription",
            "Royal Caribbean has grown remarkably, launching groundbreaking ships and delivering unforgettable experiences on the seas. Click below to check some interesting facts about each of their classes",
            "Royal Caribbean a connu une croissance remarquable, en lançant des navires révolutionnaires et en offrant des expériences inoubliables en mer. Cliquez ci-dessous pour découvrir quelques faits intéressants sur chacune de leurs classes",
        ),
        (
            "classDebutTitle",
            "Fleet Distribution by Class",
            "Répartition de la flotte par classe",
        ),
        (
            "timelineTitle",
            "Royal Caribbean Fleet Timeline",
            "Chronologie de la flotte Royal Caribbean",
        ),
        (
            "pricesIntroTitle",
            "Explore Royal Caribbean's Pricing",
            "Explorez les prix de Royal Caribbean",
        ),
        (
            "pricesIntroBody",
            "Royal Caribbean offers a wide variety of ships, each catering to different tastes, destinations, and budgets. This chart explores how the average prices for each class of ship have evolved over the years.",
            "Royal Caribbean propose une grande variété de navires, chacun répondant à des goûts, des destinations et des budgets différents. Ce graphique explore l'évolution des prix moyens par classe de navire au fil des années.",
        ),
        ("shipClassHeader", "Ship Class", "Classe de navire"),
        ("shipsLabel", "Ships:", "Navires :"),
        ("avgPriceLabel", "Average Price:", "Prix moyen :"),
        ("minPriceLabel", "Minimum Price:", "Prix minimum :"),
        ("maxPriceLabel", "Maximum Price:", "Prix maximum :"),
        (
            "selectClassPlaceholder",
            "Please select a ship class to view details.",
            "Veuillez sélectionner une classe de navire pour afficher les détails.",
        ),
    ];
    for (key, en, fr) in ui {
        table.insert_ui(key, LocalizedText::both(en, fr));
    }

    // ── Class labels ────────────────────────────────────────────────
    let classes = [
        ("Oasis", "Oasis", "Oasis"),
        ("Quantum", "Quantum", "Quantum"),
        ("Freedom", "Freedom", "Liberté"),
        ("Voyager", "Voyager", "Voyageur"),
        ("Radiance", "Radiance", "Rayonnement"),
        ("Vision", "Vision", "Vision"),
        ("Sovereign", "Sovereign", "Souverain"),
        ("Legacy", "Legacy", "Héritage"),
        ("Icon", "Icon", "Icône"),
    ];
    for (id, en, fr) in classes {
        table.insert_class(id, LocalizedText::both(en, fr));
    }

    // ── Ship labels ─────────────────────────────────────────────────
    let ships = [
        ("Allure of the Seas", "Allure of the Seas", "Attraction des Mers"),
        ("Harmony of the Seas", "Harmony of the Seas", "Harmonie des Mers"),
        ("Oasis of the Seas", "Oasis of the Seas", "Oasis des Mers"),
        ("Symphony of the Seas", "Symphony of the Seas", "Symphonie des Mers"),
        ("Wonder of the Seas", "Wonder of the Seas", "Merveille des Mers"),
        ("Utopia of the Seas", "Utopia of the Seas", "Utopie des Mers"),
        ("Spectrum of the Seas", "Spectrum of the Seas", "Spectre des Mers"),
        ("Quantum of the Seas", "Quantum of the Seas", "Quantum des Mers"),
        ("Anthem of the Seas", "Anthem of the Seas", "Hymne des Mers"),
        ("Ovation of the Seas", "Ovation of the Seas", "Ovation des Mers"),
        ("Freedom of the Seas", "Freedom of the Seas", "Liberté des Mers"),
        ("Liberty of the Seas", "Liberty of the Seas", "Liberté des Mers"),
        (
            "Independence of the Seas",
            "Independence of the Seas",
            "Indépendance des Mers",
        ),
        ("Voyager of the Seas", "Voyager of the Seas", "Voyageur des Mers"),
        ("Explorer of the Seas", "Explorer of the Seas", "Explorateur des Mers"),
        ("Adventure of the Seas", "Adventure of the Seas", "Aventure des Mers"),
        ("Radiance of the Seas", "Radiance of the Seas", "Rayonnement des Mers"),
        ("Brilliance of the Seas", "Brilliance of the Seas", "Brillance des Mers"),
        ("Serenade of the Seas", "Serenade of the Seas", "Sérénade des Mers"),
        ("Vision of the Seas", "Vision of the Seas", "Vision des Mers"),
        ("Grandeur of the Seas", "Grandeur of the Seas", "Grandeur des Mers"),
        ("Sovereign of the Seas", "Sovereign of the Seas", "Souverain des Mers"),
        ("Legend of the Seas", "Legend of the Seas", "Légende des Mers"),
        (
            "Enchantment of the Seas",
            "Enchantment of the Seas",
            "Enchantement des Mers",
        ),
        ("Navigator of the Seas", "Navigator of the Seas", "Navigateur des Mers"),
        ("Mariner of the Seas", "Mariner of the Seas", "Marin des Mers"),
        ("Rhapsody of the Seas", "Rhapsody of the Seas", "Rhapsodie des Mers"),
        ("Legend", "Legend", "Légende"),
        ("Icon of the Seas", "Icon of the Seas", "Icône des Mers"),
    ];
    for (name, en, fr) in ships {
        table.insert_ship(name, LocalizedText::both(en, fr));
    }

    table
}
