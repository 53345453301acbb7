//! Requirement store loading

use crate::condition::ParseCache;
use crate::config::{ParseOptions, RequirementData};
use crate::error::{ParseFailure, Result, UnlockError};
use crate::store::requirement::{CourseRequirement, Requirement};
use ahash::AHashMap;
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// Immutable course to requirement mapping
#[derive(Debug, Clone, Default)]
pub struct RequirementStore {
    entries: AHashMap<String, CourseRequirement>,
}

impl RequirementStore {
    /// Parse every (course, text) pair with default options
    ///
    /// Unparseable requirements are kept as such and do not stop the load.
    pub fn load<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self::load_with(pairs, &ParseCache::default())
    }

    /// Parse every (course, text) pair through `cache`
    pub fn load_with<I, K, V>(pairs: I, cache: &ParseCache) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut entries = AHashMap::new();
        let mut unparseable = 0usize;

        for (course, text) in pairs {
            let course = course.into();
            let text = text.as_ref();
            let outcome = cache.get_or_parse(text);

            if let Err(reason) = &outcome {
                warn!("Unparseable requirement for {}: {}", course, reason);
                unparseable += 1;
            }

            let entry = CourseRequirement::new(
                course.clone(),
                text,
                Requirement::from_outcome(outcome),
            );
            if let Some(previous) = entries.insert(course, entry) {
                warn!("Duplicate requirement for {}, keeping the last one", previous.course());
            }
        }

        debug!(
            "Loaded {} course requirements ({} unparseable, {} distinct texts)",
            entries.len(),
            unparseable,
            cache.len()
        );

        Self { entries }
    }

    /// Build a store from deserialized requirement data
    pub fn from_data(data: &RequirementData, options: &ParseOptions) -> Self {
        Self::load_with(data.iter(), &ParseCache::new(options.clone()))
    }

    /// Load from a JSON object of course codes to requirement text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data = RequirementData::from_json_str(json)?;
        Ok(Self::from_data(&data, &ParseOptions::default()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data = RequirementData::from_reader(reader)?;
        Ok(Self::from_data(&data, &ParseOptions::default()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading requirements from {}", path.display());
        let data = RequirementData::from_path(path)?;
        Ok(Self::from_data(&data, &ParseOptions::default()))
    }

    pub fn get(&self, course: &str) -> Option<&CourseRequirement> {
        self.entries.get(course)
    }

    /// Look up a course, failing with `UnknownCourse` if it is missing
    pub fn requirement(&self, course: &str) -> Result<&CourseRequirement> {
        self.get(course)
            .ok_or_else(|| UnlockError::UnknownCourse(course.to_string()))
    }

    #[inline]
    pub fn contains(&self, course: &str) -> bool {
        self.entries.contains_key(course)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Course codes in the store, unordered
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Courses whose requirement could not be parsed, sorted by course code
    pub fn unparseable(&self) -> Vec<(&str, &ParseFailure)> {
        let mut failed: Vec<_> = self
            .entries
            .values()
            .filter_map(|entry| match entry.requirement() {
                Requirement::Unparseable(reason) => Some((entry.course(), reason)),
                Requirement::Parsed(_) => None,
            })
            .collect();
        failed.sort_by_key(|(course, _)| *course);
        failed
    }

    /// Check whether `target` is unlocked by the completed courses
    pub fn is_unlocked<S: AsRef<str>>(&self, completed: &[S], target: &str) -> Result<bool> {
        crate::query::is_unlocked(self, completed, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;

    const CONDITIONS: &str = r#"{
        "COMP1511": "",
        "COMP1521": "COMP1511",
        "COMP2521": "COMP1511 or DPST1091",
        "COMP3121": "COMP1927 or (COMP2521 and MATH1081)",
        "COMP3900": "102 units of credit",
        "COMP9999": null
    }"#;

    #[test]
    fn test_load_pairs() {
        let store = RequirementStore::load([
            ("COMP1511", ""),
            ("COMP1521", "COMP1511"),
            ("COMP2521", "COMP1511 and COMP1521"),
        ]);

        assert_eq!(store.len(), 3);
        assert!(store.contains("COMP2521"));
        assert_eq!(
            store.get("COMP1521").unwrap().requirement(),
            &Requirement::Parsed(Condition::course("COMP1511"))
        );
    }

    #[test]
    fn test_duplicate_course_keeps_last() {
        let store = RequirementStore::load([
            ("COMP1521", "COMP1511"),
            ("COMP1521", "DPST1091"),
        ]);

        assert_eq!(store.len(), 1);
        let entry = store.get("COMP1521").unwrap();
        assert_eq!(entry.text(), "DPST1091");
        assert_eq!(
            entry.requirement().condition(),
            Some(&Condition::course("DPST1091"))
        );
    }

    #[test]
    fn test_deeply_nested_entry_does_not_stop_load() {
        let deep = format!(
            "{}COMP1511{}",
            "COMP1511 or (".repeat(2000),
            ")".repeat(2000)
        );
        let store = RequirementStore::load([
            ("COMP1521", "COMP1511".to_string()),
            ("COMP6666", deep),
            ("COMP2521", "COMP1511 and COMP1521".to_string()),
        ]);

        assert_eq!(store.len(), 3);
        assert!(matches!(
            store.get("COMP6666").unwrap().requirement(),
            Requirement::Unparseable(ParseFailure::TooDeep(_))
        ));
        assert!(matches!(
            store.is_unlocked(&["COMP1511"], "COMP6666"),
            Err(UnlockError::UnparseableRequirement { .. })
        ));
        assert!(store.is_unlocked(&["COMP1511"], "COMP1521").unwrap());
        assert!(store.is_unlocked(&["COMP1511", "COMP1521"], "COMP2521").unwrap());
    }

    #[test]
    fn test_load_is_partial_failure_tolerant() {
        let store = RequirementStore::from_json_str(CONDITIONS).unwrap();

        assert_eq!(store.len(), 6);
        let failed = store.unparseable();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].0, "COMP3900");
        assert!(store.get("COMP3121").unwrap().requirement().is_parsed());
    }

    #[test]
    fn test_null_requirement_is_trivially_true() {
        let store = RequirementStore::from_json_str(CONDITIONS).unwrap();
        assert_eq!(
            store.get("COMP9999").unwrap().requirement(),
            &Requirement::Parsed(Condition::TrivialTrue)
        );
    }

    #[test]
    fn test_raw_text_is_kept() {
        let store = RequirementStore::from_json_str(CONDITIONS).unwrap();
        assert_eq!(
            store.get("COMP2521").unwrap().text(),
            "COMP1511 or DPST1091"
        );
    }

    #[test]
    fn test_unknown_course_lookup() {
        let store = RequirementStore::default();
        assert!(matches!(
            store.requirement("COMP1511"),
            Err(UnlockError::UnknownCourse(code)) if code == "COMP1511"
        ));
    }

    #[test]
    fn test_load_with_options() {
        let data = RequirementData::from_json_str(r#"{"MATH1231": "1131"}"#).unwrap();
        let store = RequirementStore::from_data(&data, &ParseOptions::with_default_subject("MATH"));
        assert_eq!(
            store.get("MATH1231").unwrap().requirement().condition(),
            Some(&Condition::course("MATH1131"))
        );
    }

    #[test]
    fn test_shared_texts_are_parsed_once() {
        let cache = ParseCache::default();
        let store = RequirementStore::load_with(
            [
                ("COMP2041", "COMP1511 or DPST1091"),
                ("COMP2521", "COMP1511 or DPST1091"),
            ],
            &cache,
        );
        assert_eq!(store.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_from_reader() {
        let store = RequirementStore::from_reader(CONDITIONS.as_bytes()).unwrap();
        let mut courses: Vec<_> = store.courses().collect();
        courses.sort_unstable();
        assert_eq!(courses[0], "COMP1511");
        assert_eq!(courses.len(), 6);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RequirementStore::from_json_str("not json"),
            Err(UnlockError::DeserializationError(_))
        ));
    }
}
