//! Python bindings
//!
//! Exposes a `Requirements` class owning a loaded requirement store. Load it
//! once at startup and share it; it is read-only after construction.

use crate::config::ParseOptions;
use crate::store::RequirementStore;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::Arc;

/// Loaded course requirements
#[pyclass(frozen, module = "course_unlock_core")]
pub struct Requirements {
    store: Arc<RequirementStore>,
}

/// Deserialize (course, text) pairs from a Python dict
fn deserialize_pairs(dict: &Bound<'_, PyDict>) -> PyResult<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let course: String = key.extract()?;
        // None is read as an empty requirement
        let text: Option<String> = value.extract()?;
        pairs.push((course, text.unwrap_or_default()));
    }
    Ok(pairs)
}

#[pymethods]
impl Requirements {
    /// Load from a JSON object string of course codes to requirement text
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Ok(Self {
            store: Arc::new(RequirementStore::from_json_str(json)?),
        })
    }

    /// Load from a dict of course codes to requirement text
    #[staticmethod]
    #[pyo3(signature = (conditions, default_subject=None))]
    fn from_dict(conditions: &Bound<'_, PyDict>, default_subject: Option<String>) -> PyResult<Self> {
        let options = default_subject
            .map(ParseOptions::with_default_subject)
            .unwrap_or_default();
        let cache = crate::condition::ParseCache::new(options);
        let pairs = deserialize_pairs(conditions)?;
        Ok(Self {
            store: Arc::new(RequirementStore::load_with(pairs, &cache)),
        })
    }

    /// Load from a JSON file such as `conditions.json`
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        Ok(Self {
            store: Arc::new(RequirementStore::from_path(path)?),
        })
    }

    /// Check whether `target_course` is unlocked by `courses_list`
    ///
    /// Raises KeyError for unknown courses and ValueError when the course's
    /// requirement could not be parsed.
    fn is_unlocked(&self, courses_list: Vec<String>, target_course: &str) -> PyResult<bool> {
        Ok(self.store.is_unlocked(&courses_list, target_course)?)
    }

    /// Courses unlocked by `courses_list` that are not yet completed
    fn unlocked_courses(&self, courses_list: Vec<String>) -> Vec<String> {
        crate::query::unlocked_courses(&self.store, &courses_list)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Parsed requirement in compact notation, or None if unparseable
    fn describe(&self, course: &str) -> PyResult<Option<String>> {
        let entry = self.store.requirement(course)?;
        Ok(entry.requirement().condition().map(|c| c.to_string()))
    }

    /// Courses whose requirement could not be parsed, with the reason
    fn unparseable(&self) -> Vec<(String, String)> {
        self.store
            .unparseable()
            .into_iter()
            .map(|(course, reason)| (course.to_string(), reason.to_string()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.store.len()
    }

    fn __contains__(&self, course: &str) -> bool {
        self.store.contains(course)
    }
}

/// Python module definition
#[pymodule]
fn course_unlock_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Requirements>()?;
    Ok(())
}
