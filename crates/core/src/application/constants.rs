// Report constants (no magic values)

/// Label for the containing directory line
pub const LABEL_DIRECTORY: &str = "__dirname";

/// Label for the file path line
pub const LABEL_FILE: &str = "__filename";

/// Label for the process identifier line
pub const LABEL_PROCESS_ID: &str = "Process ID";

/// Label for the platform line
pub const LABEL_PLATFORM: &str = "Platform";

/// Label for the custom variable line
pub const LABEL_CUSTOM_VAR: &str = "Custom global variable";

/// Report labels in output order
pub const REPORT_LABELS: [&str; 5] = [
    LABEL_DIRECTORY,
    LABEL_FILE,
    LABEL_PROCESS_ID,
    LABEL_PLATFORM,
    LABEL_CUSTOM_VAR,
];
