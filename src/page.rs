//! Page model: section order, presence, and the embedded site content.
//!
//! The page itself is pre-rendered material. Widgets add behavior on top of
//! it, so a section can exist and render without its widget ever activating.
//! Tests build partial pages through [`Page::with_sections`] to exercise the
//! skip paths.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

// ============================================================================
// Sections
// ============================================================================

/// The sections of the marketing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Chart,
    Faq,
    Newsletter,
    Footer,
}

/// Which sections this run of the page actually has.
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<SectionKind>,
}

impl Page {
    /// The full page as shipped.
    pub fn standard() -> Self {
        Self {
            sections: vec![
                SectionKind::Hero,
                SectionKind::Chart,
                SectionKind::Faq,
                SectionKind::Newsletter,
                SectionKind::Footer,
            ],
        }
    }

    /// A page with only the given sections, in the given order.
    pub fn with_sections(kinds: &[SectionKind]) -> Self {
        Self {
            sections: kinds.to_vec(),
        }
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }

    pub fn sections(&self) -> &[SectionKind] {
        &self.sections
    }
}

// ============================================================================
// Fixed section heights (rows)
// ============================================================================

pub const HERO_ROWS: u16 = 21;
pub const CHART_ROWS: u16 = 16;
pub const NEWSLETTER_ROWS: u16 = 11;
pub const FOOTER_ROWS: u16 = 4;
/// Title, tab row and search box above the FAQ item list.
pub const FAQ_HEADER_ROWS: u16 = 6;

// ============================================================================
// Hero copy
// ============================================================================

pub const HERO_TITLE: &str = "Jouw winkel verdient een mooie etalage";
pub const HERO_TAGLINE: &str = "Etalage bouwt je webwinkel, jij runt de zaak.";
pub const HERO_CTA: &str = "Probeer Etalage dertig dagen gratis";

/// Labels for the decorative floating bubbles beside the hero.
pub const BUBBLE_LABELS: [&str; 3] = ["Snel live", "Eigen stijl", "Meer bezoekers"];

// ============================================================================
// Chart content
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub points: Vec<ChartPoint>,
}

const MONTHLY_VISITORS: [u32; 12] = [
    420, 455, 540, 610, 737, 810, 905, 1102, 1240, 1415, 1608, 1850,
];

/// Visitor counts for an average Etalage shop over 2025.
pub static SITE_TRAFFIC: Lazy<ChartData> = Lazy::new(|| ChartData {
    title: "Bezoekers per maand",
    subtitle: "Gemiddelde groei van winkels op Etalage in 2025",
    points: MONTHLY_VISITORS
        .iter()
        .enumerate()
        .map(|(i, &value)| ChartPoint {
            date: NaiveDate::from_ymd_opt(2025, i as u32 + 1, 1).unwrap_or_default(),
            value,
        })
        .collect(),
});

const DUTCH_MONTHS: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Dutch month abbreviation for a date, as used in chart labels and tooltips.
pub fn month_label(date: &NaiveDate) -> &'static str {
    use chrono::Datelike;
    DUTCH_MONTHS[date.month0() as usize]
}

// ============================================================================
// FAQ content
// ============================================================================

pub const FAQ_TITLE: &str = "Veelgestelde vragen";
pub const FAQ_EMPTY_MESSAGE: &str = "Geen vragen gevonden.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    Algemeen,
    Prijzen,
    Technisch,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 3] = [
        FaqCategory::Algemeen,
        FaqCategory::Prijzen,
        FaqCategory::Technisch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::Algemeen => "Algemeen",
            FaqCategory::Prijzen => "Prijzen",
            FaqCategory::Technisch => "Technisch",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

const fn entry(
    category: FaqCategory,
    question: &'static str,
    answer: &'static str,
) -> FaqEntry {
    FaqEntry {
        category,
        question,
        answer,
    }
}

pub static FAQ_CATALOG: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    vec![
        entry(
            FaqCategory::Algemeen,
            "Wat is Etalage precies?",
            "Etalage zet je winkel in een paar stappen online: je kiest een stijl, \
             vult je producten in en wij regelen de rest.",
        ),
        entry(
            FaqCategory::Algemeen,
            "Heb ik technische kennis nodig?",
            "Nee. Alles werkt vanuit je browser en onze wizard loodst je door de \
             inrichting heen.",
        ),
        entry(
            FaqCategory::Algemeen,
            "Kan ik mijn eigen domeinnaam gebruiken?",
            "Ja, je koppelt een bestaand domein of registreert er direct een via je \
             dashboard.",
        ),
        entry(
            FaqCategory::Algemeen,
            "Hoe snel staat mijn site online?",
            "De meeste winkels staan binnen een week live, inclusief eigen huisstijl \
             en teksten.",
        ),
        entry(
            FaqCategory::Prijzen,
            "Wat kost Etalage per maand?",
            "Het standaardpakket kost 29 euro per maand, zonder opstartkosten.",
        ),
        entry(
            FaqCategory::Prijzen,
            "Krijg ik korting bij een jaarabonnement?",
            "Ja, bij jaarlijkse betaling dalen de kosten met twee maanden: je betaalt \
             tien keer de maandprijs.",
        ),
        entry(
            FaqCategory::Prijzen,
            "Is er een proefperiode?",
            "Je probeert Etalage dertig dagen gratis, zonder betaalgegevens achter te \
             laten.",
        ),
        entry(
            FaqCategory::Prijzen,
            "Kan ik maandelijks opzeggen?",
            "Ja, een maandabonnement zeg je op tot de laatste dag van de lopende \
             periode.",
        ),
        entry(
            FaqCategory::Technisch,
            "Waar wordt mijn site gehost?",
            "Op Nederlandse servers, met dagelijkse back-ups en een uptime van 99,9 \
             procent.",
        ),
        entry(
            FaqCategory::Technisch,
            "Werkt mijn site ook op mobiel?",
            "Elke stijl is volledig responsief en wordt automatisch geoptimaliseerd \
             voor telefoons en tablets.",
        ),
        entry(
            FaqCategory::Technisch,
            "Kan ik Etalage koppelen aan mijn kassa?",
            "Er zijn koppelingen voor de gangbare kassasystemen en een open API voor \
             de rest.",
        ),
        entry(
            FaqCategory::Technisch,
            "Hoe zit het met back-ups?",
            "We bewaren veertien dagen aan back-ups en zetten op verzoek elke versie \
             terug.",
        ),
    ]
});

// ============================================================================
// Newsletter copy
// ============================================================================

pub const NEWSLETTER_TITLE: &str = "Nieuwsbrief";
pub const NEWSLETTER_PROMPT: &str =
    "Elke maand tips om meer uit je winkel te halen. Geen spam, beloofd.";
pub const NEWSLETTER_SUBMIT: &str = "Aanmelden";
pub const MODAL_TITLE: &str = "Gelukt!";
pub const MODAL_BODY: &str = "Je aanmelding is binnen. Je ontvangt voortaan onze nieuwsbrief.";
pub const MODAL_CLOSE: &str = "Sluiten";

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_LINES: [&str; 2] = [
    "Etalage B.V. | Keizersgracht 120, Amsterdam",
    "support@etalage.app",
];
