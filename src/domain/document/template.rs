//! Initial document template and export filename derivation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Skeleton every new requirements document starts from. The `{date}`
/// placeholder is substituted at session-open time.
const TEMPLATE: &str = r#"# Requirements Document

## Project Overview
*Describe the project's purpose, goals, and vision here...*

## Stakeholders
- **Client**:
- **End Users**:
- **Development Team**:

## Functional Requirements

### Core Features
1.

### Secondary Features
1.

## Non-Functional Requirements

### Performance
-

### Security
-

### Scalability
-

## User Personas

## Constraints & Assumptions

## Success Criteria

## Open Questions
-

---
*Last updated: {date}*
"#;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Returns the initial template with today's date stamped in.
pub fn initial_template() -> String {
    TEMPLATE.replace("{date}", &chrono::Utc::now().format("%Y-%m-%d").to_string())
}

/// Derives the download filename for an exported document.
///
/// The context name (typically the project name) is lower-cased with
/// whitespace runs replaced by hyphens; a missing or blank name falls back to
/// the generic default.
pub fn export_filename(context_name: Option<&str>) -> String {
    match context_name {
        Some(name) if !name.is_empty() => {
            let lowered = name.to_lowercase();
            let slug = WHITESPACE_RUNS.replace_all(&lowered, "-");
            format!("requirements-{}.md", slug)
        }
        _ => "requirements-document.md".to_string(),
    }
}
