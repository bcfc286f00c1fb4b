//! Local pre-submit validation for the generation flows.

use std::collections::BTreeMap;

/// Returns the declared variable names whose supplied value is missing or
/// blank after trimming, in declaration order.
///
/// A non-empty return means the single-page generation must fail locally
/// ("Missing values: a, b") without touching the network.
pub fn missing_variable_values(
    declared: &[String],
    values: &BTreeMap<String, String>,
) -> Vec<String> {
    declared
        .iter()
        .filter(|name| {
            values
                .get(*name)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_absent_and_blank_values() {
        let vars = declared(&["title", "city", "service"]);
        let mut values = BTreeMap::new();
        values.insert("title".to_string(), "Plumbers".to_string());
        values.insert("service".to_string(), "   ".to_string());

        assert_eq!(
            missing_variable_values(&vars, &values),
            vec!["city".to_string(), "service".to_string()]
        );
    }

    #[test]
    fn empty_when_everything_is_filled() {
        let vars = declared(&["title"]);
        let mut values = BTreeMap::new();
        values.insert("title".to_string(), "Plumbers in Austin".to_string());
        assert!(missing_variable_values(&vars, &values).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let vars = declared(&["city"]);
        let mut values = BTreeMap::new();
        values.insert("city".to_string(), "\t ".to_string());
        assert_eq!(missing_variable_values(&vars, &values), vec!["city".to_string()]);
    }
}
