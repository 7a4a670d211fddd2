//! Tabulated equinox and solstice instants and the solar-year phase derived from them.
//!
//! The built-in dataset lives in `data/seasons.txt`. Each row holds one year's four
//! markers as RFC 3339 UTC timestamps:
//!
//! ```text
//! version: 2022.09-usno
//! 2023,2023-03-20T21:25:00Z,2023-06-21T14:58:00Z,2023-09-23T06:50:00Z,2023-12-22T03:28:00Z
//! ```
//!
//! Extending the validity window only requires appending rows.

use std::fmt::Debug;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::error::{SolarError, SolarResult};
use crate::types::{Bracket, SeasonMarker};

const SEASONS_DATASET: &str = include_str!("../data/seasons.txt");

static BUILTIN: LazyLock<SeasonalTable> = LazyLock::new(|| {
    SeasonalTable::parse(SEASONS_DATASET).expect("embedded seasonal dataset is well-formed")
});

/// Finds the neighbouring elements of sorted `sequence` that enclose `value`.
///
/// `lower` is the greatest element `<= value` and `upper` its successor. The covered
/// window is `[first, last)`. With a `modulo`, the bracket's phase is
/// `(index of lower % modulo) / modulo`.
pub fn find_surrounding_elements<T>(
    sequence: &[T],
    value: &T,
    modulo: Option<usize>,
) -> SolarResult<Bracket<T>>
where
    T: PartialOrd + Clone + Debug,
{
    let (first, last) = match (sequence.first(), sequence.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SolarError::EmptySequence),
    };
    if !(first <= value && value < last) {
        log::debug!("{value:?} outside [{first:?}, {last:?})");
        return Err(SolarError::out_of_range(value, first, last));
    }

    let upper = sequence.partition_point(|element| element <= value);
    let lower = upper - 1;
    Ok(Bracket {
        lower: sequence[lower].clone(),
        upper: sequence[upper].clone(),
        phase: modulo.map(|m| (lower % m) as f64 / m as f64),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalTable {
    version: String,
    /// March, June, September, December, repeating; strictly increasing.
    combined: Vec<DateTime<Utc>>,
}

impl SeasonalTable {
    /// The embedded dataset, parsed once per process.
    pub fn builtin() -> &'static SeasonalTable {
        &BUILTIN
    }

    /// Builds a table from one sequence per marker. All four must have the same
    /// length and interleave chronologically.
    pub fn from_sequences(
        version: impl Into<String>,
        march: &[DateTime<Utc>],
        june: &[DateTime<Utc>],
        september: &[DateTime<Utc>],
        december: &[DateTime<Utc>],
    ) -> SolarResult<Self> {
        let years = march.len();
        if years == 0 {
            return Err(SolarError::invalid_table("no seasonal markers"));
        }
        if june.len() != years || september.len() != years || december.len() != years {
            return Err(SolarError::invalid_table(format!(
                "marker sequences differ in length: {}, {}, {}, {}",
                years,
                june.len(),
                september.len(),
                december.len()
            )));
        }

        let combined: Vec<DateTime<Utc>> = (0..years)
            .flat_map(|i| [march[i], june[i], september[i], december[i]])
            .collect();
        if let Some(pair) = combined.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SolarError::invalid_table(format!(
                "markers out of order: {} is not before {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self {
            version: version.into(),
            combined,
        })
    }

    pub fn parse(text: &str) -> SolarResult<Self> {
        let mut version = String::from("unversioned");
        let mut columns: [Vec<DateTime<Utc>>; 4] = Default::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(v) = line.strip_prefix("version:") {
                version = v.trim().to_string();
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 5 {
                return Err(SolarError::parse(
                    line_no,
                    format!("expected 5 fields, found {}", fields.len()),
                ));
            }
            let year: i32 = fields[0]
                .parse()
                .map_err(|e| SolarError::parse(line_no, format!("bad year {:?}: {e}", fields[0])))?;

            for (column, field) in columns.iter_mut().zip(&fields[1..]) {
                let instant = DateTime::parse_from_rfc3339(field)
                    .map_err(|e| {
                        SolarError::parse(line_no, format!("bad timestamp {field:?}: {e}"))
                    })?
                    .with_timezone(&Utc);
                if instant.year() != year {
                    return Err(SolarError::parse(
                        line_no,
                        format!("{field} does not fall in year {year}"),
                    ));
                }
                column.push(instant);
            }
        }

        let [march, june, september, december] = columns;
        let table = Self::from_sequences(version, &march, &june, &september, &december)?;
        log::debug!(
            "seasonal table {} covers {} to {}",
            table.version,
            table.first(),
            table.last()
        );
        Ok(table)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of years in the table.
    pub fn len(&self) -> usize {
        self.combined.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Earliest covered instant, the first March equinox.
    pub fn first(&self) -> DateTime<Utc> {
        self.combined[0]
    }

    /// End of coverage (exclusive), the last December solstice.
    pub fn last(&self) -> DateTime<Utc> {
        self.combined[self.combined.len() - 1]
    }

    pub fn combined(&self) -> &[DateTime<Utc>] {
        &self.combined
    }

    pub fn instants(&self, marker: SeasonMarker) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.combined.iter().skip(marker.index()).step_by(4).copied()
    }

    pub fn contains<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> bool {
        let utc = time.with_timezone(&Utc);
        self.first() <= utc && utc < self.last()
    }

    /// Average interval between consecutive occurrences of `marker`.
    pub fn mean_period(&self, marker: SeasonMarker) -> Option<Duration> {
        let instants: Vec<DateTime<Utc>> = self.instants(marker).collect();
        let (first, last) = (instants.first()?, instants.last()?);
        let intervals = i32::try_from(instants.len() - 1).ok().filter(|&n| n > 0)?;
        Some((*last - *first) / intervals)
    }

    /// The markers enclosing `time`, with the lower marker's phase.
    pub fn find_surrounding_seasonal_dates<Tz: TimeZone>(
        &self,
        time: &DateTime<Tz>,
    ) -> SolarResult<Bracket<DateTime<Utc>>> {
        find_surrounding_elements(&self.combined, &time.with_timezone(&Utc), Some(4))
    }

    /// Position in the solar year, in [0, 1): 0 at the March equinox, 0.25 at the June
    /// solstice, 0.5 at the September equinox, 0.75 at the December solstice.
    pub fn solar_year_phase<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> SolarResult<f64> {
        let utc = time.with_timezone(&Utc);
        let bracket = self.find_surrounding_seasonal_dates(&utc)?;
        let elapsed = (utc - bracket.lower).num_milliseconds() as f64;
        let span = (bracket.upper - bracket.lower).num_milliseconds() as f64;
        Ok(bracket.phase.unwrap_or_default() + elapsed / span / 4.0)
    }
}

/// Solar-year phase against the built-in table.
pub fn solar_year_phase<Tz: TimeZone>(time: &DateTime<Tz>) -> SolarResult<f64> {
    SeasonalTable::builtin().solar_year_phase(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let table = SeasonalTable::parse(SEASONS_DATASET).unwrap();
        assert_eq!(table.version(), "2022.09-usno");
        assert_eq!(table.len(), 12);
        assert_eq!(table.first().year(), 2022);
        assert_eq!(table.last().year(), 2033);
    }

    #[test]
    fn phase_uses_marker_of_lower_bound() {
        let bracket = find_surrounding_elements(&[0, 10, 20, 30, 40], &35, Some(4)).unwrap();
        assert_eq!(bracket.phase, Some(0.75));
    }
}
