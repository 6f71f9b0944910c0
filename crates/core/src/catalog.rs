//! # Project Catalog
//!
//! The ordered, read-only list of projects shown on the projects page, plus
//! the case-insensitive search used by the page's search box.
//!
//! The catalog is built once at startup, either from the built-in table or
//! from a JSON file, and never changes afterwards. Cloning a catalog shares
//! the underlying records.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Error, Result};

/// One project entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display name, unique within a catalog
    pub name: String,
    /// Free-text summary; a record without one only matches on its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External link, may be empty
    #[serde(default, alias = "html_url")]
    pub url: String,
    /// Tags, in display order
    #[serde(default)]
    pub topics: Vec<String>,
}

impl ProjectRecord {
    /// Whether `query` appears in the name or description, ignoring case
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowered(&query.to_lowercase())
    }

    fn matches_lowered(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// Whether the record has a link worth rendering
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Immutable, ordered collection of [`ProjectRecord`]s
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: Arc<[ProjectRecord]>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate project names
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        if let Some(duplicate) = first_duplicate(&records) {
            return Err(Error::DuplicateProject(duplicate.to_string()));
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// The built-in catalog, initialised on first use
    pub fn builtin() -> Self {
        static BUILTIN: OnceLock<ProjectCatalog> = OnceLock::new();

        BUILTIN
            .get_or_init(|| {
                let records: Vec<ProjectRecord> = BUILTIN_PROJECTS
                    .iter()
                    .map(|seed| ProjectRecord {
                        name: seed.name.to_string(),
                        description: Some(seed.description.to_string()),
                        url: seed.url.to_string(),
                        topics: seed.topics.iter().map(|t| t.to_string()).collect(),
                    })
                    .collect();
                tracing::debug!(count = records.len(), "Initialised built-in project catalog");
                ProjectCatalog {
                    records: records.into(),
                }
            })
            .clone()
    }

    /// Read a catalog from a JSON array of records
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<ProjectRecord> =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::new(records)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "Loaded project catalog");
        Ok(catalog)
    }

    /// Every record whose name or description contains `query`, ignoring case.
    ///
    /// Catalog order is preserved. An empty query returns every record.
    pub fn filter(&self, query: &str) -> Vec<&ProjectRecord> {
        let needle = query.to_lowercase();
        let hits: Vec<&ProjectRecord> = self
            .records
            .iter()
            .filter(|record| record.matches_lowered(&needle))
            .collect();

        tracing::debug!(query, hits = hits.len(), "Filtered project catalog");
        hits
    }

    /// Look up a record by exact name
    pub fn get(&self, name: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn first_duplicate(records: &[ProjectRecord]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| record.name.as_str())
        .find(|name| !seen.insert(*name))
}

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    url: &'static str,
    topics: &'static [&'static str],
}

const BUILTIN_PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        name: "Brain Tumor Detection",
        description: "A deep learning model using CNNs to detect brain tumors from MRI images, deployed with Flask.",
        url: "https://github.com/MohamadMassalkhi1/AI-and-ML-Projects/tree/main/Brain_Tumor_Detection",
        topics: &["Deep Learning", "Medical AI", "Flask"],
    },
    ProjectSeed {
        name: "Stock Price Prediction",
        description: "An LSTM-based deep learning model for time-series forecasting of stock prices.",
        url: "https://github.com/MohamadMassalkhi1/AI-and-ML-Projects/tree/main/Stock_Price_Prediction",
        topics: &["Deep Learning", "LSTM", "Finance", "Time Series"],
    },
    ProjectSeed {
        name: "CartPole - Reinforcement Learning",
        description: "A reinforcement learning model using OpenAI Gym to balance a pole on a moving cart.",
        url: "https://github.com/MohamadMassalkhi1/AI-and-ML-Projects/tree/main/Car%20Pole%20-%20Reinforcement%20Learning",
        topics: &["Reinforcement Learning", "OpenAI Gym", "Deep Q-Learning"],
    },
    ProjectSeed {
        name: "RAG App",
        description: "A Retrieval-Augmented Generation (RAG) application leveraging NLP and vector search for document processing.",
        url: "https://github.com/MohamadMassalkhi1/RAG_App",
        topics: &["Natural Language Processing", "LLMs", "AI Search"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(name: &str, description: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            description: description.map(str::to_string),
            url: String::new(),
            topics: Vec::new(),
        }
    }

    fn names(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn two_project_catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            record(
                "Brain Tumor Detection",
                Some("A deep learning model using CNNs to detect brain tumors from MRI images."),
            ),
            record(
                "Stock Price Prediction",
                Some("An LSTM-based deep learning model for time-series forecasting."),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_matches_description_only() {
        let catalog = two_project_catalog();
        assert_eq!(
            names(&catalog.filter("lstm")),
            vec!["Stock Price Prediction".to_string()]
        );
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let catalog = two_project_catalog();
        assert!(catalog.filter("xyz123").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = two_project_catalog();
        assert_eq!(
            names(&catalog.filter("")),
            vec![
                "Brain Tumor Detection".to_string(),
                "Stock Price Prediction".to_string()
            ]
        );
    }

    #[test]
    fn test_filter_ignores_case() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.filter("DEEP"), catalog.filter("deep"));
        assert_eq!(catalog.filter("rag app").len(), 1);
    }

    #[test]
    fn test_missing_description_matches_name_only() {
        let catalog = ProjectCatalog::new(vec![
            record("Vision", None),
            record("Other", Some("computer vision pipeline")),
        ])
        .unwrap();

        assert_eq!(
            names(&catalog.filter("vision")),
            vec!["Vision".to_string(), "Other".to_string()]
        );
        assert!(catalog.filter("pipeline").iter().all(|r| r.name == "Other"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ProjectCatalog::new(vec![record("A", None), record("A", Some("again"))])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateProject(name) if name == "A"));
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(ProjectCatalog::new(catalog.records().to_vec()).is_ok());
        assert_eq!(
            catalog.records()[0].name,
            "Brain Tumor Detection".to_string()
        );
        assert!(catalog.records().iter().all(ProjectRecord::has_url));

        let rl = catalog.get("CartPole - Reinforcement Learning").unwrap();
        assert_eq!(rl.topics.len(), 3);
        assert!(catalog.get("cartpole").is_none());
    }

    #[tokio::test]
    async fn test_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Alpha", "description": "first", "html_url": "https://example.com/a", "topics": ["x"]},
                {"name": "Beta"}
            ]"#,
        )
        .unwrap();

        let catalog = ProjectCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].url, "https://example.com/a");

        let beta = catalog.get("Beta").unwrap();
        assert_eq!(beta.description, None);
        assert!(!beta.has_url());
        assert!(beta.topics.is_empty());
    }

    #[tokio::test]
    async fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = ProjectCatalog::load(dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(Error::Io { .. })));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            ProjectCatalog::load(&bad).await,
            Err(Error::Json { .. })
        ));

        let dup = dir.path().join("dup.json");
        std::fs::write(&dup, r#"[{"name": "A"}, {"name": "A"}]"#).unwrap();
        assert!(matches!(
            ProjectCatalog::load(&dup).await,
            Err(Error::DuplicateProject(_))
        ));
    }

    prop_compose! {
        fn arbitrary_catalog()
            (entries in prop::collection::vec(
                ("[a-zA-Z ]{0,10}", prop::option::of("[a-zA-Z ]{0,16}")),
                0..12,
            ))
            -> ProjectCatalog
        {
            let records = entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, description))| ProjectRecord {
                    name: format!("{i}{name}"),
                    description,
                    url: String::new(),
                    topics: Vec::new(),
                })
                .collect();
            ProjectCatalog::new(records).unwrap()
        }
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(catalog in arbitrary_catalog(), query in "[a-zA-Z]{0,3}") {
            let hits = catalog.filter(&query);
            let mut remaining = catalog.records().iter();
            for hit in hits {
                prop_assert!(remaining.any(|r| r == hit), "result out of catalog order");
            }
        }

        #[test]
        fn prop_empty_query_is_identity(catalog in arbitrary_catalog()) {
            let all: Vec<&ProjectRecord> = catalog.records().iter().collect();
            prop_assert_eq!(catalog.filter(""), all);
        }

        #[test]
        fn prop_filter_is_sound_and_complete(catalog in arbitrary_catalog(), query in "[a-zA-Z]{0,3}") {
            let needle = query.to_lowercase();
            let hits = catalog.filter(&query);
            for record in catalog.records() {
                let expected = record.name.to_lowercase().contains(&needle)
                    || record
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle));
                prop_assert_eq!(hits.contains(&record), expected);
            }
        }

        #[test]
        fn prop_filter_is_idempotent(catalog in arbitrary_catalog(), query in "[a-zA-Z]{0,3}") {
            let once: Vec<ProjectRecord> = catalog.filter(&query).into_iter().cloned().collect();
            let narrowed = ProjectCatalog::new(once.clone()).unwrap();
            let twice: Vec<ProjectRecord> = narrowed.filter(&query).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_ignores_query_case(catalog in arbitrary_catalog(), query in "[a-zA-Z]{0,3}") {
            prop_assert_eq!(
                catalog.filter(&query.to_uppercase()),
                catalog.filter(&query.to_lowercase())
            );
        }
    }
}
