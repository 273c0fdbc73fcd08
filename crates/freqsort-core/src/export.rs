/// Export of word-count results to CSV and JSON.
use crate::analysis::top_words;
use crate::error::{Error, Result};
use crate::model::FrequencyResult;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the `word,count` table, ranked by count, to any writer.
///
/// `limit` caps the number of rows; `None` writes every word.
pub fn write_csv_to<W: Write>(result: &FrequencyResult, limit: Option<usize>, out: W) -> Result<()> {
    let rows = top_words(result, limit.unwrap_or(result.len()));
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["word", "count"])?;
    for row in &rows {
        writer.serialize((row.word.as_str(), row.count))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the ranked `word,count` table to `path`.
pub fn write_csv(result: &FrequencyResult, limit: Option<usize>, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    write_csv_to(result, limit, file)?;
    info!("Wrote word counts to {}", path.display());
    Ok(())
}

/// Render the full result as a pretty JSON object in first-encountered order.
pub fn to_json(result: &FrequencyResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Token, WordCount};

    fn example() -> FrequencyResult {
        FrequencyResult::from_counts(vec![
            WordCount::new(Token::new("sat"), 1),
            WordCount::new(Token::new("cat"), 3),
            WordCount::new(Token::new("mat"), 1),
        ])
    }

    #[test]
    fn csv_is_ranked_with_header() {
        let mut buf = Vec::new();
        write_csv_to(&example(), None, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "word,count\ncat,3\nsat,1\nmat,1\n");
    }

    #[test]
    fn csv_limit_caps_rows() {
        let mut buf = Vec::new();
        write_csv_to(&example(), Some(1), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "word,count\ncat,3\n");
    }

    #[test]
    fn csv_of_empty_result_is_header_only() {
        let mut buf = Vec::new();
        write_csv_to(&FrequencyResult::new(), None, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "word,count\n");
    }

    #[test]
    fn csv_written_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("counts.csv");
        write_csv(&example(), Some(2), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("word,count\ncat,3\n"));
    }

    #[test]
    fn json_keeps_first_encountered_order() {
        let json = to_json(&example()).unwrap();
        let sat = json.find("\"sat\"").unwrap();
        let cat = json.find("\"cat\"").unwrap();
        assert!(sat < cat, "expected first-encountered order in {json}");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["cat"], 3);
    }
}
