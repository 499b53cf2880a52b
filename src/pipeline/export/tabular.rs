use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::structured::read_structured;
use super::ExportError;

/// Column headers of the tabular export.
const CSV_HEADERS: [&str; 4] = ["Rule", "Rule Definition", "Comply Yes/No", "Citation"];

/// UTF-8 byte-order mark, for spreadsheet tools that sniff encodings.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Derive the CSV export from a previously written structured export.
///
/// The JSON file is read back rather than any in-memory state, so the rows
/// reflect exactly what was persisted, in the same order. Every field is
/// quoted; CR and LF inside the definition each become one space so a rule
/// occupies one spreadsheet row. An existing file at `csv_path` is deleted
/// first, and a failed deletion aborts the derivation.
pub fn derive_tabular(structured_path: &Path, csv_path: &Path) -> Result<(), ExportError> {
    let results = read_structured(structured_path)?;

    if csv_path.exists() {
        std::fs::remove_file(csv_path).map_err(|source| ExportError::StaleFileRemoval {
            path: csv_path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %csv_path.display(), "removed stale tabular export");
    }

    let mut file = File::create(csv_path).map_err(|source| ExportError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;
    file.write_all(UTF8_BOM).map_err(|source| ExportError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| csv_error(csv_path, e))?;

    for (name, result) in results.iter() {
        let definition = flatten_newlines(&result.definition);
        writer
            .write_record([
                name.as_str(),
                definition.as_str(),
                result.compliance.as_str(),
                result.citation.as_str(),
            ])
            .map_err(|e| csv_error(csv_path, e))?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %csv_path.display(), rows = results.len(), "derived tabular export");
    Ok(())
}

/// Replace each carriage return and line feed with a single space.
fn flatten_newlines(text: &str) -> String {
    text.replace('\r', " ").replace('\n', " ")
}

fn csv_error(path: &Path, e: csv::Error) -> ExportError {
    ExportError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analysis::{ResultSet, RuleResult};
    use crate::pipeline::export::write_structured;

    fn export_dir() -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("plan.json");
        let csv = dir.path().join("plan.csv");
        (dir, json, csv)
    }

    fn persist(results: &ResultSet, json: &Path) {
        write_structured(results, json).unwrap();
    }

    #[test]
    fn starts_with_bom_and_header() {
        let (_dir, json, csv) = export_dir();
        persist(&ResultSet::default(), &json);

        derive_tabular(&json, &csv).unwrap();

        let bytes = std::fs::read(&csv).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(
            text,
            "\"Rule\",\"Rule Definition\",\"Comply Yes/No\",\"Citation\"\r\n"
        );
    }

    #[test]
    fn quotes_are_doubled_and_newlines_collapse_to_spaces() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push(
            "Disclosure".into(),
            RuleResult::from_definition("He said \"ok\"\nDone".into()),
        );
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        assert!(text.contains("\"He said \"\"ok\"\" Done\""));
    }

    #[test]
    fn carriage_returns_also_collapse() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push(
            "Reporting".into(),
            RuleResult::from_definition("line one\r\nline two".into()),
        );
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        // \r then \n each become a space, matching the flattening contract.
        assert!(text.contains("\"line one  line two\""));
    }

    #[test]
    fn every_field_is_quoted() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push(
            "Vesting".into(),
            RuleResult::from_definition("plain text".into()),
        );
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        assert!(text.contains("\"Vesting\",\"plain text\",\"\",\"\"\r\n"));
    }

    #[test]
    fn rows_follow_structured_file_order() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push("Zeta".into(), RuleResult::from_definition("z".into()));
        results.push("Alpha".into(), RuleResult::from_definition("a".into()));
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        let zeta_at = text.find("\"Zeta\"").unwrap();
        let alpha_at = text.find("\"Alpha\"").unwrap();
        assert!(zeta_at < alpha_at);
    }

    #[test]
    fn rederiving_replaces_stale_file_with_identical_bytes() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push(
            "Funding".into(),
            RuleResult::from_definition("The plan is funded \"annually\".\nSee section 2.".into()),
        );
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();
        let first = std::fs::read(&csv).unwrap();

        // Second derivation must succeed despite the existing file and
        // produce the same bytes.
        derive_tabular(&json, &csv).unwrap();
        let second = std::fs::read(&csv).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_structured_file_aborts() {
        let (_dir, json, csv) = export_dir();
        let err = derive_tabular(&json, &csv).unwrap_err();
        assert!(matches!(err, ExportError::MissingStructured(_)));
        assert!(!csv.exists());
    }

    #[test]
    fn verdict_and_citation_columns_pass_through() {
        let (_dir, json, csv) = export_dir();
        let mut results = ResultSet::default();
        results.push(
            "Coverage".into(),
            RuleResult {
                definition: "def".into(),
                compliance: "Yes".into(),
                citation: "p. 12".into(),
            },
        );
        persist(&results, &json);

        derive_tabular(&json, &csv).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        assert!(text.contains("\"Coverage\",\"def\",\"Yes\",\"p. 12\"\r\n"));
    }
}
