//! Raw scan status codes → business status categories.

use std::fmt;

/// Business category assigned to every scan event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Delivered,
    OfdScans,
    Return,
    Scansort,
    Manifested,
    Ajtm,
    LostInTransit,
    Pickup,
    Other,
}

impl StatusCategory {
    /// The business label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Delivered => "Delivered",
            StatusCategory::OfdScans => "OFD Scans",
            StatusCategory::Return => "Return",
            StatusCategory::Scansort => "Scansort",
            StatusCategory::Manifested => "Manifested",
            StatusCategory::Ajtm => "AJTM",
            StatusCategory::LostInTransit => "Lost in Transit",
            StatusCategory::Pickup => "Pickup",
            StatusCategory::Other => "Other",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category membership, scanned in declared order.
///
/// The code sets are disjoint today; if an edit ever makes them overlap, the
/// first matching category wins.
static STATUS_CATEGORIES: &[(StatusCategory, &[&str])] = &[
    (
        StatusCategory::Delivered,
        &["DEL_VERBAL", "DEL_ASR", "DEL_SIG", "DEL_OSNR"],
    ),
    (
        StatusCategory::OfdScans,
        &["ITR_OFD", "FEDEX_ACCEPTED", "PIC_CANPAR", "PURO_ACCEPTED"],
    ),
    (
        StatusCategory::Return,
        &[
            "EXC_BADADDRESS",
            "EXC_CONS_NA",
            "EXC_DMG",
            "EXC_MECHDELAY",
            "EXC_MISSING",
            "EXC_MISSORT",
            "EXC_NOACCESS",
            "EXC_NODELATTEMPT",
            "EXC_REC_NA",
            "EXC_RECCLOSED",
            "EXC_RECUNNDKL",
            "EXC_REFUSED",
            "EXC_UNSAFE",
            "EXC_WEATHER",
            "RET_PUR",
            "RET_TOR",
            "RET_WAR",
            "REC_TOR",
        ],
    ),
    (StatusCategory::Scansort, &["SCANSORT"]),
    (StatusCategory::Manifested, &["1"]),
    (StatusCategory::Ajtm, &["AJTM"]),
    (StatusCategory::LostInTransit, &["LOST_IN_TRANSIT"]),
    (StatusCategory::Pickup, &["PU01"]),
];

/// Maps a raw status code to its category.
///
/// Matching is exact and case-sensitive; unknown codes land in
/// [`StatusCategory::Other`] rather than failing.
pub fn categorize_status(status: &str) -> StatusCategory {
    for (category, codes) in STATUS_CATEGORIES {
        if codes.contains(&status) {
            return *category;
        }
    }
    StatusCategory::Other
}
