use serde::Deserialize;
use thiserror::Error;

/// Observations to fit and the points to predict afterwards
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    #[serde(default)]
    pub predict: Vec<f64>,
}

impl Dataset {
    /// The five hand-picked observations of the reference driver: y = 6 - x
    pub fn reference() -> Self {
        Self {
            xs: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            ys: vec![5.0, 4.0, 3.0, 2.0, 1.0],
            predict: vec![6.0],
        }
    }

    pub fn from_file(file_path: &str) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(file_path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, DatasetError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Pick the dataset from a file, inline values, or the reference data
    ///
    /// A non-empty `predict` list replaces whatever the chosen source carries.
    pub fn resolve(
        file_path: Option<&str>,
        xs: Vec<f64>,
        ys: Vec<f64>,
        predict: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        let mut dataset = match file_path {
            Some(path) => Self::from_file(path)?,
            None if xs.is_empty() && ys.is_empty() => Self::reference(),
            None => Self {
                xs,
                ys,
                predict: Vec::new(),
            },
        };

        if !predict.is_empty() {
            dataset.predict = predict;
        }
        Ok(dataset)
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let yaml = "xs: [1, 2, 3]\nys: [2.5, 4.5, 6.5]\npredict: [10]\n";
        let dataset = Dataset::from_yaml_str(yaml).unwrap();

        assert_eq!(dataset.xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(dataset.ys, vec![2.5, 4.5, 6.5]);
        assert_eq!(dataset.predict, vec![10.0]);
    }

    #[test]
    fn test_predict_defaults_to_empty() {
        let dataset = Dataset::from_yaml_str("xs: [1, 2]\nys: [3, 4]\n").unwrap();
        assert!(dataset.predict.is_empty());
    }

    #[test]
    fn test_missing_ys_is_an_error() {
        let result = Dataset::from_yaml_str("xs: [1, 2]\n");
        assert!(matches!(result, Err(DatasetError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Dataset::from_file("/nonexistent/lsfit/dataset.yaml");
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_resolve_reference_by_default() {
        let dataset = Dataset::resolve(None, vec![], vec![], vec![]).unwrap();
        assert_eq!(dataset, Dataset::reference());
    }

    #[test]
    fn test_resolve_inline_values() {
        let dataset =
            Dataset::resolve(None, vec![1.0, 2.0], vec![3.0, 5.0], vec![4.0]).unwrap();

        assert_eq!(dataset.xs, vec![1.0, 2.0]);
        assert_eq!(dataset.ys, vec![3.0, 5.0]);
        assert_eq!(dataset.predict, vec![4.0]);
    }

    #[test]
    fn test_resolve_predict_override() {
        let dataset = Dataset::resolve(None, vec![], vec![], vec![7.0, 8.0]).unwrap();

        assert_eq!(dataset.xs, Dataset::reference().xs);
        assert_eq!(dataset.predict, vec![7.0, 8.0]);
    }
}
