//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::Token;
use crate::cli::args::{OutputFormat, PolarityArgs};
use crate::error::Result;
use crate::evaluation::EvaluationReport;
use crate::ml::naive_bayes::ClassScore;

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub train_documents: usize,
    pub test_documents: usize,
    pub vocabulary_size: usize,
    pub duration_ms: u64,
    pub report: EvaluationReport,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<ClassScore>>,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub predictions: Vec<Prediction>,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trained on {} documents (vocabulary: {} words)",
            self.train_documents, self.vocabulary_size
        )?;
        writeln!(
            f,
            "Accuracy: {:.2}% ({}/{})",
            self.report.accuracy(),
            self.report.correct,
            self.test_documents
        )?;
        for (label, stats) in &self.report.per_label {
            writeln!(
                f,
                "  {label:<12} {:>6.2}% ({}/{})",
                stats.accuracy(),
                stats.correct,
                stats.total
            )?;
        }
        write!(f, "Time: {}ms", self.duration_ms)
    }
}

impl fmt::Display for ClassificationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, prediction) in self.predictions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}", prediction.label, prediction.text)?;
            if let Some(scores) = &prediction.scores {
                for score in scores {
                    write!(f, "\n  {:<12} {:.4}", score.label, score.log_score)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for TokenizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:>4}  {:>5}..{:<5}  {}",
                token.position, token.start_offset, token.end_offset, token
            )?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &PolarityArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &PolarityArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PolarityArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::LabelStats;

    #[test]
    fn test_evaluation_display() {
        let mut report = EvaluationReport::default();
        report.record("positive", "positive");
        report.record("negative", "positive");

        let result = EvaluationResult {
            train_documents: 8,
            test_documents: 2,
            vocabulary_size: 40,
            duration_ms: 3,
            report,
        };
        let text = result.to_string();

        assert!(text.contains("Accuracy: 50.00% (1/2)"));
        assert!(text.contains("vocabulary: 40 words"));
        assert_eq!(
            result.report.per_label["negative"],
            LabelStats { total: 1, correct: 0 }
        );
    }

    #[test]
    fn test_classification_json_skips_missing_scores() {
        let results = ClassificationResults {
            predictions: vec![Prediction {
                text: "great".to_string(),
                label: "positive".to_string(),
                scores: None,
            }],
        };
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"{"predictions":[{"text":"great","label":"positive"}]}"#
        );
        assert_eq!(results.to_string(), "positive\tgreat");
    }

    #[test]
    fn test_tokenize_display() {
        let result = TokenizeResult {
            tokens: vec![
                Token::with_offsets("hello", 0, 0, 5),
                Token::with_offsets("world", 2, 11, 16),
            ],
        };
        assert_eq!(
            result.to_string(),
            "   0      0..5      hello\n   2     11..16     world"
        );
    }

    #[test]
    fn test_tokenize_json_reports_offsets() {
        let result = TokenizeResult {
            tokens: vec![Token::with_offsets("plot", 1, 5, 9)],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"tokens":[{"text":"plot","position":1,"start_offset":5,"end_offset":9}]}"#
        );
    }
}
