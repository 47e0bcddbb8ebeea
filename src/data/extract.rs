use lazy_static::lazy_static;
use regex::Regex;

use super::model::Observation;
use super::regression::round_one_decimal;
use crate::config::{SCENARIO_DELIMITER, SCORE_PATTERN, SCORE_SEPARATOR};
use crate::error::SkipReason;

lazy_static! {
    static ref SCORE_LINE: Regex = Regex::new(SCORE_PATTERN).expect("score pattern is valid");
}

/// Scenario name of a stats file: everything before the first `"- "`.
pub fn scenario_name(file_name: &str) -> Option<&str> {
    split_scenario(file_name).ok()
}

fn split_scenario(file_name: &str) -> Result<&str, SkipReason> {
    match file_name.split_once(SCENARIO_DELIMITER) {
        None => Err(SkipReason::MissingDelimiter),
        Some(("", _)) => Err(SkipReason::EmptyScenario),
        Some((name, _)) => Ok(name),
    }
}

/// Turn one stats file into an observation, or `None` if it has no usable score.
pub fn extract(file_name: &str, file_text: &str) -> Option<Observation> {
    try_extract(file_name, file_text).ok()
}

/// Like [`extract`], but says why a file was left out.
pub fn try_extract(file_name: &str, file_text: &str) -> Result<Observation, SkipReason> {
    let group = split_scenario(file_name)?;

    let matched = SCORE_LINE
        .find(file_text)
        .ok_or(SkipReason::MissingScore)?
        .as_str();

    let parts: Vec<&str> = matched.split(SCORE_SEPARATOR).collect();
    let [_, number] = parts.as_slice() else {
        return Err(SkipReason::MalformedScore(matched.to_string()));
    };
    let value: f64 = number
        .parse()
        .map_err(|_| SkipReason::MalformedScore(matched.to_string()))?;

    Ok(Observation {
        group: group.to_string(),
        value: round_one_decimal(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = "\
Kill #,Timestamp,Bot,Weapon,TTK,Shots,Hits,Accuracy
1,12:00:01.120,Target,Pistol,0.512,2,1,0.5

Kills:,1
Avg TTK:,0.512
Score:,123.456
Scenario:,Gridshot
";

    #[test]
    fn group_is_prefix_before_delimiter() {
        assert_eq!(scenario_name("Foo - bar.csv"), Some("Foo "));
        assert_eq!(
            scenario_name("Gridshot - Challenge - 2024.01.01-12.00.00 Stats.csv"),
            Some("Gridshot ")
        );
        let obs = extract("Foo - bar.csv", STATS).unwrap();
        assert_eq!(obs.group, "Foo ");
    }

    #[test]
    fn missing_delimiter_is_skipped() {
        assert_eq!(scenario_name("Foo.csv"), None);
        assert!(extract("Foo.csv", STATS).is_none());
        assert!(matches!(
            try_extract("Foo-bar.csv", STATS),
            Err(SkipReason::MissingDelimiter)
        ));
    }

    #[test]
    fn empty_scenario_is_skipped() {
        assert_eq!(scenario_name("- bar.csv"), None);
        assert!(matches!(
            try_extract("- bar.csv", STATS),
            Err(SkipReason::EmptyScenario)
        ));
    }

    #[test]
    fn score_is_rounded_to_one_decimal() {
        let obs = extract("Gridshot - 1.csv", STATS).unwrap();
        assert_eq!(obs.value, 123.5);
    }

    #[test]
    fn first_score_line_wins() {
        let text = "Score:,10.04\nScore:,99.9\n";
        assert_eq!(extract("A - 1.csv", text).unwrap().value, 10.0);
    }

    #[test]
    fn missing_score_is_skipped() {
        assert!(extract("Gridshot - 1.csv", "Kills:,12\nAvg TTK:,0.4\n").is_none());
        assert!(matches!(
            try_extract("Gridshot - 1.csv", ""),
            Err(SkipReason::MissingScore)
        ));
    }

    #[test]
    fn score_needs_a_fraction() {
        // an integer score does not match the pattern
        assert!(extract("Gridshot - 1.csv", "Score:,812\n").is_none());
        assert!(extract("Gridshot - 1.csv", "Score: ,812.0\n").is_none());
    }

    #[test]
    fn non_ascii_digits_are_not_a_score() {
        let text = "Score:,\u{0661}\u{0662}.\u{0663}\nScore:,\u{FF11}\u{FF12}.\u{FF13}\nScore:,90.5\n";
        let obs = try_extract("Gridshot - 1.csv", text).unwrap();
        assert_eq!(obs.value, 90.5);
        assert!(extract("Gridshot - 1.csv", "Score:,\u{0661}\u{0662}.\u{0663}\n").is_none());
    }

    #[test]
    fn scenario_name_agrees_with_extraction() {
        for name in ["Foo - bar.csv", "Foo.csv", "- bar.csv", "A - B - C.csv"] {
            let extracted = extract(name, STATS).map(|o| o.group);
            assert_eq!(scenario_name(name).map(str::to_string), extracted, "name = {name:?}");
        }
    }

    #[test]
    fn score_may_be_embedded_in_a_longer_line() {
        let obs = extract("Gridshot - 1.csv", "xx,Score:,95.0,yy").unwrap();
        assert_eq!(obs.value, 95.0);
    }
}
