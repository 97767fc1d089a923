//! Parsing of durations such as `500ms`, `2s` or `1m30s`.

use std::time::Duration;

/// Parse a duration made of one or more `<number><unit>` parts.
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. Numbers may have a
/// fractional part (`1.5s`). A bare `0` is accepted and means no duration.
///
/// ```
/// use gitmux::core::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration string".to_string());
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = 0f64;
    let mut rest = input;
    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (num_str, tail) = rest.split_at(num_len);
        let num: f64 = num_str
            .parse()
            .map_err(|_| format!("invalid duration {input:?}"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let nanos_per_unit = match unit {
            "ns" => 1e0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err(format!("missing unit in duration {input:?}")),
            _ => return Err(format!("unknown unit {unit:?} in duration {input:?}")),
        };

        total += num * nanos_per_unit;
        rest = tail;
    }

    if !total.is_finite() || total > u64::MAX as f64 {
        return Err(format!("duration {input:?} is out of range"));
    }
    Ok(Duration::from_nanos(total.round() as u64))
}
