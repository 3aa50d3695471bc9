//! Culture strategy for locale-specific casing and date formatting.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Date and time format data for one culture.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatInfo {
    pub month_names: [&'static str; 12],
    pub abbreviated_month_names: [&'static str; 12],
    /// Day names, Sunday first.
    pub day_names: [&'static str; 7],
    pub abbreviated_day_names: [&'static str; 7],
    pub am_designator: &'static str,
    pub pm_designator: &'static str,
    pub date_separator: &'static str,
    pub time_separator: &'static str,
    pub short_date_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_time_pattern: &'static str,
    pub long_time_pattern: &'static str,
    pub month_day_pattern: &'static str,
    pub year_month_pattern: &'static str,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_DAYS_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const INVARIANT_FORMAT: DateFormatInfo = DateFormatInfo {
    month_names: ENGLISH_MONTHS,
    abbreviated_month_names: ENGLISH_MONTHS_ABBR,
    day_names: ENGLISH_DAYS,
    abbreviated_day_names: ENGLISH_DAYS_ABBR,
    am_designator: "AM",
    pm_designator: "PM",
    date_separator: "/",
    time_separator: ":",
    short_date_pattern: "MM/dd/yyyy",
    long_date_pattern: "dddd, dd MMMM yyyy",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    month_day_pattern: "MMMM dd",
    year_month_pattern: "yyyy MMMM",
};

const EN_US_FORMAT: DateFormatInfo = DateFormatInfo {
    short_date_pattern: "M/d/yyyy",
    long_date_pattern: "dddd, MMMM d, yyyy",
    short_time_pattern: "h:mm tt",
    long_time_pattern: "h:mm:ss tt",
    month_day_pattern: "MMMM d",
    year_month_pattern: "MMMM yyyy",
    ..INVARIANT_FORMAT
};

const TR_TR_FORMAT: DateFormatInfo = DateFormatInfo {
    month_names: [
        "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
        "Ekim", "Kasım", "Aralık",
    ],
    abbreviated_month_names: [
        "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
    ],
    day_names: [
        "Pazar",
        "Pazartesi",
        "Salı",
        "Çarşamba",
        "Perşembe",
        "Cuma",
        "Cumartesi",
    ],
    abbreviated_day_names: ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"],
    am_designator: "ÖÖ",
    pm_designator: "ÖS",
    date_separator: ".",
    time_separator: ":",
    short_date_pattern: "d.MM.yyyy",
    long_date_pattern: "d MMMM yyyy dddd",
    short_time_pattern: "HH:mm",
    long_time_pattern: "HH:mm:ss",
    month_day_pattern: "d MMMM",
    year_month_pattern: "MMMM yyyy",
};

/// Strategy for culture-specific casing and date conventions.
pub trait Culture: Send + Sync {
    /// Culture name, e.g. "en-US". The invariant culture is "".
    fn name(&self) -> &str;

    /// Date and time format data.
    fn format_info(&self) -> &DateFormatInfo;

    /// Uppercases a single character.
    fn to_upper(&self, c: char) -> String {
        c.to_uppercase().collect()
    }

    /// Lowercases a single character.
    fn to_lower(&self, c: char) -> String {
        c.to_lowercase().collect()
    }

    /// Lowercases a whole string with this culture's rules.
    fn lowercase(&self, s: &str) -> String {
        s.chars().map(|c| self.to_lower(c)).collect()
    }
}

/// Culture-neutral conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvariantCulture;

impl Culture for InvariantCulture {
    fn name(&self) -> &str {
        ""
    }

    fn format_info(&self) -> &DateFormatInfo {
        &INVARIANT_FORMAT
    }
}

/// English (United States).
#[derive(Debug, Default, Clone, Copy)]
pub struct EnUsCulture;

impl Culture for EnUsCulture {
    fn name(&self) -> &str {
        "en-US"
    }

    fn format_info(&self) -> &DateFormatInfo {
        &EN_US_FORMAT
    }
}

/// Turkish (Turkey). Handles the dotted and dotless i.
#[derive(Debug, Default, Clone, Copy)]
pub struct TurkishCulture;

impl Culture for TurkishCulture {
    fn name(&self) -> &str {
        "tr-TR"
    }

    fn format_info(&self) -> &DateFormatInfo {
        &TR_TR_FORMAT
    }

    fn to_upper(&self, c: char) -> String {
        match c {
            'i' => "İ".to_string(),
            'ı' => "I".to_string(),
            _ => c.to_uppercase().collect(),
        }
    }

    fn to_lower(&self, c: char) -> String {
        match c {
            'I' => "ı".to_string(),
            'İ' => "i".to_string(),
            _ => c.to_lowercase().collect(),
        }
    }
}

/// Resolves a built-in culture by name (case-insensitive).
///
/// `""` and `"invariant"` select [`InvariantCulture`].
pub fn culture_for(name: &str) -> Result<Arc<dyn Culture>> {
    let key = name.trim().to_ascii_lowercase();
    let culture: Arc<dyn Culture> = match key.as_str() {
        "" | "invariant" => Arc::new(InvariantCulture),
        "en" | "en-us" => Arc::new(EnUsCulture),
        "tr" | "tr-tr" => Arc::new(TurkishCulture),
        _ => return Err(Error::UnknownCulture(name.to_string())),
    };
    tracing::debug!(culture = culture.name(), "resolved culture");
    Ok(culture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_lookup_is_case_insensitive() {
        assert_eq!(culture_for("EN-us").unwrap().name(), "en-US");
        assert_eq!(culture_for("tr").unwrap().name(), "tr-TR");
        assert_eq!(culture_for("").unwrap().name(), "");
    }

    #[test]
    fn test_unknown_culture_is_an_error() {
        let err = culture_for("xx-YY").err().expect("lookup should fail");
        assert!(matches!(err, Error::UnknownCulture(name) if name == "xx-YY"));
    }

    #[test]
    fn test_turkish_casing() {
        let tr = TurkishCulture;
        assert_eq!(tr.to_upper('i'), "İ");
        assert_eq!(tr.to_lower('I'), "ı");
        assert_eq!(tr.lowercase("KIRMIZI"), "kırmızı");
        assert_eq!(EnUsCulture.lowercase("KIRMIZI"), "kirmizi");
    }
}
