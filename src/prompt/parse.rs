use anyhow::{bail, Context, Result};

/// Split a comma-separated label line, trimming entries and dropping empties.
pub fn parse_labels(line: &str) -> Vec<String> {
    line.split(',')
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect()
}

/// Parse a single judgment value: a plain number ("3", "0.5") or a
/// fraction ("1/3"). The result must be strictly positive and finite.
pub fn parse_ratio(token: &str) -> Result<f64> {
    let token = token.trim();
    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a number", token))?;
            let denominator: f64 = denominator
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a number", token))?;
            if denominator == 0.0 {
                bail!("'{}' divides by zero", token);
            }
            numerator / denominator
        }
        None => token
            .parse()
            .with_context(|| format!("'{}' is not a number", token))?,
    };

    if !value.is_finite() || value <= 0.0 {
        bail!("'{}' is not a positive judgment value", token);
    }
    Ok(value)
}

/// Parse one whitespace-separated row of judgment values.
pub fn parse_judgment_row(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace().map(parse_ratio).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_trims_and_drops_empties() {
        let labels = parse_labels(" Price , Quality ,, Comfort , ");
        assert_eq!(labels, vec!["Price", "Quality", "Comfort"]);
    }

    #[test]
    fn test_parse_labels_empty_line() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" , , ").is_empty());
    }

    #[test]
    fn test_parse_ratio_decimal() {
        assert_eq!(parse_ratio("3").unwrap(), 3.0);
        assert_eq!(parse_ratio("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_ratio_fraction() {
        assert!((parse_ratio("1/3").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(parse_ratio(" 3 / 2 ").unwrap(), 1.5);
    }

    #[test]
    fn test_parse_ratio_rejects_garbage() {
        assert!(parse_ratio("abc").is_err());
        assert!(parse_ratio("1/").is_err());
        assert!(parse_ratio("").is_err());
    }

    #[test]
    fn test_parse_ratio_rejects_non_positive() {
        assert!(parse_ratio("0").is_err());
        assert!(parse_ratio("-2").is_err());
        assert!(parse_ratio("1/0").is_err());
        assert!(parse_ratio("-1/3").is_err());
    }

    #[test]
    fn test_parse_judgment_row() {
        let row = parse_judgment_row("1 3 1/5").unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 3.0);
        assert!((row[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_parse_judgment_row_tabs_and_spaces() {
        let row = parse_judgment_row("\t1\t 1/2  4 ").unwrap();
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_parse_judgment_row_fails_on_any_bad_token() {
        assert!(parse_judgment_row("1 bad 3").is_err());
    }
}
