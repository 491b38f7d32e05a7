use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::error::{Result, StandardsError};

use super::round2;

/// Parse race-time text like "1:05.23", "65.23" or "1:05" into seconds.
///
/// `distance_hint` enables the OCR-correction heuristic: scraped and
/// PDF-extracted times sometimes gain a spurious leading minute digit, so a
/// total wildly out of range for the distance is re-parsed from the part
/// after the colon. Blank input is `Ok(None)`; text that is not a time at
/// all is an error, never a silent zero.
pub fn parse(input: &str, distance_hint: Option<u32>) -> Result<Option<Decimal>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some((mins_part, secs_part)) = input.split_once(':') {
        let mins: i64 = mins_part
            .trim()
            .parse()
            .map_err(|_| StandardsError::InvalidTime(input.to_string()))?;
        let secs = parse_seconds(secs_part.trim(), input)?;
        let total = round2(Decimal::from(mins * 60) + secs);

        if let Some(max) = implausibility_threshold(distance_hint)
            && total > max
        {
            // Likely a bogus minute digit prepended by OCR, e.g. "6:39.73"
            // for a 50m event. Keep only the part after the colon.
            warn!(
                time = input,
                distance_m = distance_hint,
                corrected = %secs_part.trim(),
                "correcting likely malformed time"
            );
            return Ok(Some(round2(secs)));
        }

        return Ok(Some(total));
    }

    Ok(Some(round2(parse_seconds(input, input)?)))
}

/// Total-seconds cutoffs above which a parsed time is treated as malformed.
/// Fixed constants, only defined for sprint distances.
fn implausibility_threshold(distance_hint: Option<u32>) -> Option<Decimal> {
    match distance_hint {
        Some(50) => Some(Decimal::from(90)),
        Some(100) => Some(Decimal::from(180)),
        Some(200) => Some(Decimal::from(360)),
        _ => None,
    }
}

fn parse_seconds(text: &str, original: &str) -> Result<Decimal> {
    text.parse::<Decimal>()
        .map_err(|_| StandardsError::InvalidTime(original.to_string()))
}

/// Format seconds as "M:SS.hh" (or "SS.hh" under a minute).
pub fn format(seconds: Decimal) -> String {
    let secs_f64 = seconds.to_f64().unwrap_or(0.0);
    let mins = (secs_f64 / 60.0) as i64;
    let secs = secs_f64 % 60.0;

    if mins > 0 {
        std::format!("{}:{:05.2}", mins, secs)
    } else {
        std::format!("{:.2}", secs)
    }
}
