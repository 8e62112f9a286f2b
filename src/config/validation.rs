use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let depth = config.max_depth();
    if depth < 2 {
        errors.push(format!(
            "max_depth: must be at least 2 (the goal plus one criteria level), got {}",
            depth
        ));
    }

    let threshold = config.consistency_threshold();
    if !threshold.is_finite() || threshold < 0.0 {
        errors.push(format!(
            "consistency_threshold: must be a non-negative number, got {}",
            threshold
        ));
    }

    let (min, max) = config.group_bounds();
    if min < 2 {
        errors.push(format!(
            "group_size.min: pairwise comparison needs at least 2 members, got {}",
            min
        ));
    }
    if max < min {
        errors.push(format!(
            "group_size.max: must be at least group_size.min ({}), got {}",
            min, max
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
