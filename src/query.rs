use serde::Serialize;
use std::ffi::OsStr;
use tracing::debug;

use crate::manifest::ManifestRecord;

/// A value the build driver can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Id,
    Version,
    ZipGlob,
    ZipName,
}

impl Query {
    /// Maps a query name to its query. Names are matched exactly; anything
    /// else yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Query::Id),
            "version" => Some(Query::Version),
            "zipglob" => Some(Query::ZipGlob),
            "zipname" => Some(Query::ZipName),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Query::Id => "id",
            Query::Version => "version",
            Query::ZipGlob => "zipglob",
            Query::ZipName => "zipname",
        }
    }

    pub fn answer(&self, record: &ManifestRecord) -> String {
        match self {
            Query::Id => record.id().to_string(),
            Query::Version => record.version().to_string(),
            Query::ZipGlob => record.archive_glob(),
            Query::ZipName => record.archive_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub query: &'static str,
    pub value: String,
}

/// Answers each recognised name in order. Unknown names, including ones that
/// are not valid UTF-8, are dropped.
pub fn answer_all<S: AsRef<OsStr>>(record: &ManifestRecord, names: &[S]) -> Vec<Answer> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let query = name.to_str().and_then(Query::from_name);
            if query.is_none() {
                debug!(name = %name.to_string_lossy(), "skipping unrecognised query");
            }
            query
        })
        .map(|query| Answer {
            query: query.as_str(),
            value: query.answer(record),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, version: &str) -> ManifestRecord {
        ManifestRecord {
            id: Some(id.to_string()),
            version: Some(version.to_string()),
        }
    }

    #[test]
    fn test_query_names() {
        assert_eq!(Query::from_name("id"), Some(Query::Id));
        assert_eq!(Query::from_name("version"), Some(Query::Version));
        assert_eq!(Query::from_name("zipglob"), Some(Query::ZipGlob));
        assert_eq!(Query::from_name("zipname"), Some(Query::ZipName));
        assert_eq!(Query::from_name("ID"), None);
        assert_eq!(Query::from_name("bogus"), None);
    }

    #[test]
    fn test_answers_follow_input_order() {
        let record = record("lasercut_svg_export", "0.1.0");
        let values: Vec<String> = answer_all(&record, &["id", "version", "zipname", "zipglob"])
            .into_iter()
            .map(|a| a.value)
            .collect();

        assert_eq!(
            values,
            vec![
                "lasercut_svg_export",
                "0.1.0",
                "lasercut_svg_export-0.1.0.zip",
                "lasercut_svg_export-*.zip",
            ]
        );
    }

    #[test]
    fn test_unknown_query_is_skipped() {
        let record = record("ext", "2.0.1");
        let answers = answer_all(&record, &["zipname", "bogus", "id"]);

        assert_eq!(
            answers,
            vec![
                Answer { query: "zipname", value: "ext-2.0.1.zip".to_string() },
                Answer { query: "id", value: "ext".to_string() },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_query_is_skipped() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let record = record("ext", "1.0");
        let names = vec![
            OsString::from("id"),
            OsString::from_vec(vec![0x66, 0x6f, 0xff]),
            OsString::from("version"),
        ];

        let values: Vec<String> = answer_all(&record, &names).into_iter().map(|a| a.value).collect();
        assert_eq!(values, vec!["ext", "1.0"]);
    }

    #[test]
    fn test_repeated_queries_repeat_answers() {
        let record = record("ext", "1.0.0");
        assert_eq!(answer_all(&record, &["id", "id"]).len(), 2);
    }

    #[test]
    fn test_unset_fields_answer_empty() {
        let record = ManifestRecord::default();
        assert_eq!(Query::Id.answer(&record), "");
        assert_eq!(Query::Version.answer(&record), "");
    }
}
