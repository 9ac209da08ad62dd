//! Data models for recent-search persistence

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Maximum number of recent searches kept
const MAX_ENTRIES: usize = 50;

/// A single committed search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub timestamp: DateTime<Local>,
    /// Brand name the search was typed into
    pub brand: String,
    pub query: String,
}

impl SearchEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Wrapper for persisting recent searches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistory {
    pub entries: Vec<SearchEntry>,
}

impl SearchHistory {
    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".showroom-tui"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("searches.json"))
    }

    pub fn load() -> Vec<SearchEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<SearchHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[SearchEntry]) -> Result<(), String> {
        let history_dir = Self::history_dir().ok_or("Could not determine home directory")?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)
                .map_err(|e| format!("Failed to create history directory: {}", e))?;
        }

        let history_path = Self::history_path().ok_or("Could not determine history path")?;

        let history = SearchHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("Failed to serialize searches: {}", e))?;

        fs::write(&history_path, json)
            .map_err(|e| format!("Failed to write searches file: {}", e))?;

        Ok(())
    }
}

/// Record a committed search at the front of the list
///
/// Empty queries are not recorded; a repeat of the most recent query for
/// the same brand is collapsed. The list is capped at `MAX_ENTRIES`.
pub fn record(entries: &mut Vec<SearchEntry>, brand: &str, query: &str) {
    if query.is_empty() {
        return;
    }
    if let Some(first) = entries.first() {
        if first.brand == brand && first.query == query {
            return;
        }
    }
    entries.insert(
        0,
        SearchEntry {
            timestamp: Local::now(),
            brand: brand.to_string(),
            query: query.to_string(),
        },
    );
    entries.truncate(MAX_ENTRIES);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut entries = Vec::new();
        record(&mut entries, "Ford", "mustang");
        record(&mut entries, "Ford", "f-150");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "f-150");
    }

    #[test]
    fn test_empty_query_not_recorded() {
        let mut entries = Vec::new();
        record(&mut entries, "Audi", "");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_immediate_repeat_collapsed() {
        let mut entries = Vec::new();
        record(&mut entries, "Audi", "q7");
        record(&mut entries, "Audi", "q7");
        assert_eq!(entries.len(), 1);

        // Same query from a different brand is a distinct entry.
        record(&mut entries, "Ford", "q7");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_capped_at_max() {
        let mut entries = Vec::new();
        for i in 0..60 {
            record(&mut entries, "Lincoln", &format!("query {}", i));
        }
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].query, "query 59");
    }
}
