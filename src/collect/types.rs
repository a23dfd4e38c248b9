use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub summary: LanguageSummary,
}

/// Language name -> summary, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunReport {
    rows: Vec<LanguageRow>,
}

impl RunReport {
    pub fn new() -> Self { Self::default() }

    /// Re-inserting a language overwrites its summary but keeps its position.
    pub fn insert(&mut self, language: String, summary: LanguageSummary) {
        match self.rows.iter_mut().find(|r| r.language == language) {
            Some(row) => row.summary = summary,
            None => self.rows.push(LanguageRow { language, summary }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, language: &str) -> Option<&LanguageSummary> {
        self.rows.iter().find(|r| r.language == language).map(|r| &r.summary)
    }

    pub fn rows(&self) -> &[LanguageRow] { &self.rows }

    #[cfg(test)]
    pub fn languages(&self) -> impl Iterator<Item = &str> { self.rows.iter().map(|r| r.language.as_str()) }

    pub fn len(&self) -> usize { self.rows.len() }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderReport {
    pub title: String,
    pub languages: RunReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(found: u64) -> LanguageSummary {
        LanguageSummary { vacancies_found: found, vacancies_processed: 0, average_salary: 0 }
    }

    #[test]
    fn insert_keeps_order_and_replaces_duplicates() {
        let mut report = RunReport::new();
        report.insert("Python".into(), summary(1));
        report.insert("Go".into(), summary(2));
        report.insert("Python".into(), summary(3));

        assert_eq!(report.languages().collect::<Vec<_>>(), vec!["Python", "Go"]);
        assert_eq!(report.get("Python"), Some(&summary(3)));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn serializes_rows_flat() {
        let mut report = RunReport::new();
        report.insert("Rust".into(), LanguageSummary { vacancies_found: 10, vacancies_processed: 4, average_salary: 250000 });
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v[0]["language"], "Rust");
        assert_eq!(v[0]["vacancies_found"], 10);
        assert_eq!(v[0]["average_salary"], 250000);
    }
}
