use serde::{Deserialize, Serialize};

fn default_sheet_id() -> String {
    "1H-XP4biC77BiexlKCNGiyrlj_zlhWEpCyFUghieeRno".to_string()
}

/// Where the word list comes from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SheetConfig {
    /// Published Google Sheets document id
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,
    /// Full CSV URL, takes precedence over `sheet_id`
    #[serde(default)]
    pub url: Option<String>,
}

impl SheetConfig {
    pub fn export_url(&self) -> String {
        match &self.url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
                self.sheet_id
            ),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_id: default_sheet_id(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_from_sheet_id() {
        let config = SheetConfig {
            sheet_id: "abc".to_string(),
            url: None,
        };
        assert_eq!(
            config.export_url(),
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
        );
    }

    #[test]
    fn explicit_url_wins() {
        let config = SheetConfig {
            sheet_id: "abc".to_string(),
            url: Some(" http://localhost:9000/words.csv ".to_string()),
        };
        assert_eq!(config.export_url(), "http://localhost:9000/words.csv");
    }

    #[test]
    fn blank_url_falls_back_to_sheet_id() {
        let config = SheetConfig {
            url: Some("   ".to_string()),
            ..SheetConfig::default()
        };
        assert!(config.export_url().starts_with("https://docs.google.com/"));
    }
}
