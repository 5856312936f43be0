// crates/sitelang-server/src/date.rs
// ============================================================================
// Module: Localized Dates
// Description: Medium-style calendar date formatting per locale.
// Purpose: Render post dates in the visitor's resolved locale.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Formats a [`Date`] in a medium style chosen by the locale's language:
//! English renders `Jan 5, 2024`, Spanish renders `5 ene 2024`, and every
//! other language falls back to ISO `2024-01-05`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sitelang_core::language_subtag;
use time::Date;
use time::Month;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// English medium date layout.
const ENGLISH_MEDIUM: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// ISO calendar date layout.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats `date` for `locale` in medium style.
#[must_use]
pub fn format_date(date: Date, locale: &str) -> String {
    let language = language_subtag(locale).to_ascii_lowercase();
    match language.as_str() {
        "en" => date.format(ENGLISH_MEDIUM).unwrap_or_else(|_| date.to_string()),
        "es" => format!("{} {} {}", date.day(), spanish_month(date.month()), date.year()),
        _ => date.format(ISO_DATE).unwrap_or_else(|_| date.to_string()),
    }
}

/// Abbreviated Spanish month names.
const fn spanish_month(month: Month) -> &'static str {
    match month {
        Month::January => "ene",
        Month::February => "feb",
        Month::March => "mar",
        Month::April => "abr",
        Month::May => "may",
        Month::June => "jun",
        Month::July => "jul",
        Month::August => "ago",
        Month::September => "sept",
        Month::October => "oct",
        Month::November => "nov",
        Month::December => "dic",
    }
}
