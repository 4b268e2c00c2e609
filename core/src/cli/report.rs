use crate::api::LabReport;
use std::fmt;

/// Text report formatter for analyzed lab results
pub struct TextReport<'a> {
    report: &'a LabReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a LabReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lab Report")?;
        writeln!(f, "==========")?;
        writeln!(f)?;

        if self.report.results.is_empty() {
            writeln!(f, "No recognized test values.")?;
        }

        for result in &self.report.results {
            let value = match result.value {
                Some(v) => v.to_string(),
                None => result.raw.clone(),
            };
            writeln!(
                f,
                "{:<8} {:<42} {:>8} {:<9} {}",
                result.key, result.name, value, result.unit, result.status
            )?;
            if let Some(ref note) = result.note {
                writeln!(f, "         note: {}", note)?;
            }
        }

        if let Some(ref suggestion) = self.report.suggestion {
            writeln!(f)?;
            match suggestion.category {
                Some(ref category) => {
                    writeln!(f, "Suggested panel: {} ({})", suggestion.name, category)?
                }
                None => writeln!(f, "Suggested panel: {}", suggestion.name)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LabReportAnalyzer;

    #[test]
    fn test_text_report_format() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(["HGB 13.4 g/dL", "WBC 12"]);
        let output = format!("{}", TextReport::new(&report));

        assert!(output.contains("Lab Report"));
        assert!(output.contains("HGB"));
        assert!(output.contains("Hemoglobin"));
        assert!(output.contains("13.4"));
        assert!(output.contains("g/dL"));
        assert!(output.contains("Normal"));
        // WBC 12 is High and carries its specific note
        assert!(output.contains("High"));
        assert!(output.contains("note:"));
    }

    #[test]
    fn test_text_report_empty() {
        let analyzer = LabReportAnalyzer::new();
        let report = analyzer.analyze_lines(Vec::<String>::new());
        let output = format!("{}", TextReport::new(&report));
        assert!(output.contains("No recognized test values."));
    }

    #[test]
    fn test_text_report_suggestion_line() {
        let analyzer = LabReportAnalyzer::new();
        let report =
            analyzer.analyze_lines(["HGB 13.4", "HCT 41", "WBC 6.2", "PLT 250", "MCV 88"]);
        let output = format!("{}", TextReport::new(&report));
        assert!(output.contains("Suggested panel: CBC (Blood)"));
    }
}
