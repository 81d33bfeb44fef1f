use serde::{Deserialize, Serialize};

/// Keys of the icon registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKey {
    External,
    PowerBi,
    Python,
    Sql,
    Aws,
    Azure,
    Docker,
    Git,
    Rust,
    Excel,
    Tableau,
    Spark,
    Linux,
    JavaScript,
    /// Placeholder for names the registry does not know.
    Fallback,
}

impl IconKey {
    /// Registry name
    pub fn code(&self) -> &'static str {
        match self {
            IconKey::External => "External",
            IconKey::PowerBi => "PowerBI",
            IconKey::Python => "Python",
            IconKey::Sql => "SQL",
            IconKey::Aws => "AWS",
            IconKey::Azure => "Azure",
            IconKey::Docker => "Docker",
            IconKey::Git => "Git",
            IconKey::Rust => "Rust",
            IconKey::Excel => "Excel",
            IconKey::Tableau => "Tableau",
            IconKey::Spark => "Spark",
            IconKey::Linux => "Linux",
            IconKey::JavaScript => "JavaScript",
            IconKey::Fallback => "Fallback",
        }
    }

    /// All keys that have a dedicated graphic
    pub fn all() -> Vec<IconKey> {
        vec![
            IconKey::External,
            IconKey::PowerBi,
            IconKey::Python,
            IconKey::Sql,
            IconKey::Aws,
            IconKey::Azure,
            IconKey::Docker,
            IconKey::Git,
            IconKey::Rust,
            IconKey::Excel,
            IconKey::Tableau,
            IconKey::Spark,
            IconKey::Linux,
            IconKey::JavaScript,
        ]
    }

    /// Look up a skill or icon name. Case, spaces, dots, dashes and
    /// underscores are ignored, so "Power BI" and "powerbi" match.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '.' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "external" | "externallink" => IconKey::External,
            "powerbi" => IconKey::PowerBi,
            "python" => IconKey::Python,
            "sql" | "tsql" | "postgresql" => IconKey::Sql,
            "aws" | "amazonwebservices" => IconKey::Aws,
            "azure" => IconKey::Azure,
            "docker" => IconKey::Docker,
            "git" | "github" => IconKey::Git,
            "rust" => IconKey::Rust,
            "excel" => IconKey::Excel,
            "tableau" => IconKey::Tableau,
            "spark" | "apachespark" | "pyspark" => IconKey::Spark,
            "linux" => IconKey::Linux,
            "javascript" | "js" => IconKey::JavaScript,
            _ => IconKey::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, IconKey::Fallback)
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
