// src/services/history.rs

use serde::Deserialize;
use std::path::PathBuf;

use crate::config::HISTORY_LIMIT;

/// One row of the attempts dataset. Columns beyond these are ignored.
#[derive(Debug, Deserialize)]
struct AttemptRow {
    topic: String,
    quiz_no: u32,
    score: f64,
}

/// Chart series for one topic: scores and quiz numbers as parallel
/// vectors, in file order.
#[derive(Debug, Default, PartialEq)]
pub struct TopicHistory {
    pub scores: Vec<f64>,
    pub quiz_numbers: Vec<u32>,
}

/// Reads per-topic score history from the attempts dataset.
///
/// The file is re-read on every call so the chart picks up dataset edits
/// without a restart.
#[derive(Debug, Clone)]
pub struct ScoreHistory {
    path: PathBuf,
}

impl ScoreHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// First `HISTORY_LIMIT` attempts recorded for `topic`, in file order.
    /// Topics match exactly; a topic with no rows yields empty series.
    pub fn for_topic(&self, topic: &str) -> Result<TopicHistory, csv::Error> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut history = TopicHistory::default();
        for row in reader.deserialize::<AttemptRow>() {
            let row = row?;
            if row.topic != topic {
                continue;
            }
            history.scores.push(row.score);
            history.quiz_numbers.push(row.quiz_no);
            if history.scores.len() == HISTORY_LIMIT {
                break;
            }
        }
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_dataset(rows: &[(&str, u32, u32, f64)]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "topic,quiz_no,time_taken,score").unwrap();
        for (topic, quiz_no, time_taken, score) in rows {
            writeln!(file, "{},{},{},{}", topic, quiz_no, time_taken, score).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_filters_by_topic_in_file_order() {
        let file = write_dataset(&[
            ("Math", 1, 10, 55.0),
            ("Science", 1, 12, 70.0),
            ("Math", 2, 9, 62.0),
        ]);
        let history = ScoreHistory::new(file.path()).for_topic("Math").unwrap();
        assert_eq!(history.scores, vec![55.0, 62.0]);
        assert_eq!(history.quiz_numbers, vec![1, 2]);
    }

    #[test]
    fn test_caps_at_history_limit() {
        let rows: Vec<_> = (1..=10).map(|n| ("Math", n, 10, f64::from(n))).collect();
        let file = write_dataset(&rows);
        let history = ScoreHistory::new(file.path()).for_topic("Math").unwrap();
        assert_eq!(history.scores.len(), HISTORY_LIMIT);
        assert_eq!(history.quiz_numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_topic_match_is_exact() {
        let file = write_dataset(&[("math", 1, 10, 55.0), ("Math", 2, 9, 62.0)]);
        let history = ScoreHistory::new(file.path()).for_topic("Math").unwrap();
        assert_eq!(history.scores, vec![62.0]);
    }

    #[test]
    fn test_unseen_topic_yields_empty_series() {
        let file = write_dataset(&[("Math", 1, 10, 55.0)]);
        let history = ScoreHistory::new(file.path()).for_topic("History").unwrap();
        assert_eq!(history, TopicHistory::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let history = ScoreHistory::new("definitely/not/here.csv");
        assert!(history.for_topic("Math").is_err());
    }
}
