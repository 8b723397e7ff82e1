use serde::{Deserialize, Serialize};

/// Envelope for every dataset-wide view.
///
/// `NoData` is sent when nothing is loaded, so a client can show an explicit
/// "no data" state instead of an empty chart that reads as zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum DatasetResponse<T> {
    Ready(T),
    NoData,
}

impl<T> DatasetResponse<T> {
    /// `NoData` when the dataset is empty, otherwise the view built by `f`.
    pub fn from_dataset<D>(dataset: &[D], f: impl FnOnce(&[D]) -> T) -> Self {
        match dataset.is_empty() {
            true => DatasetResponse::NoData,
            false => DatasetResponse::Ready(f(dataset)),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            DatasetResponse::Ready(data) => Some(data),
            DatasetResponse::NoData => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let ready: DatasetResponse<Vec<u32>> = DatasetResponse::Ready(vec![1, 2]);
        assert_eq!(
            serde_json::to_string(&ready).unwrap(),
            r#"{"status":"ready","data":[1,2]}"#
        );
        let empty: DatasetResponse<Vec<u32>> = DatasetResponse::NoData;
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"status":"no_data"}"#
        );
        let parsed: DatasetResponse<Vec<u32>> =
            serde_json::from_str(r#"{"status":"no_data"}"#).unwrap();
        assert_eq!(parsed, DatasetResponse::NoData);
    }

    #[test]
    fn test_from_dataset() {
        let empty: [u8; 0] = [];
        assert_eq!(
            DatasetResponse::from_dataset(&empty, |d| d.len()),
            DatasetResponse::NoData
        );
        assert_eq!(
            DatasetResponse::from_dataset(&[1u8, 2, 3], |d| d.len()).into_option(),
            Some(3)
        );
    }
}
