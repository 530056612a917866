// Report Domain Model

use serde::Serialize;

/// Single `<label>: <value>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Ordered report lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(lines: Vec<ReportLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Machine-readable form of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub directory: String,
    pub file: String,
    pub pid: u32,
    pub platform: String,
    pub custom_var: String,
}

impl Snapshot {
    /// Pretty-printed JSON form
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_one_line_per_entry() {
        let report = Report::new(vec![
            ReportLine::new("Process ID", "42"),
            ReportLine::new("Platform", "linux"),
        ]);

        assert_eq!(report.to_string(), "Process ID: 42\nPlatform: linux\n");
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let snapshot = Snapshot {
            directory: "/a".to_string(),
            file: "/a/b".to_string(),
            pid: 9,
            platform: "linux".to_string(),
            custom_var: "Hello, global!".to_string(),
        };

        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["directory"], "/a");
        assert_eq!(value["file"], "/a/b");
        assert_eq!(value["pid"], 9);
        assert_eq!(value["platform"], "linux");
        assert_eq!(value["custom_var"], "Hello, global!");
    }
}
