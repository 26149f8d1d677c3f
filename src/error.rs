use thiserror::Error;

/// Failures reported by [`Catalog::run_lesson`](crate::Catalog::run_lesson).
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("lesson not found: day {day} has no lesson named {name:?}")]
    NotFound { day: String, name: String },

    #[error("lesson {name:?} is registered {count} times for day {day}")]
    Ambiguous {
        day: String,
        name: String,
        count: usize,
    },

    #[error("lesson {name} failed")]
    Failed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_day_and_lesson() {
        let err = LessonError::NotFound {
            day: "1".to_string(),
            name: "Nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "lesson not found: day 1 has no lesson named \"Nope\""
        );
    }

    #[test]
    fn test_failed_keeps_source() {
        let err = LessonError::Failed {
            name: "Lesson4".to_string(),
            source: anyhow::anyhow!("broken pipe"),
        };
        assert_eq!(err.to_string(), "lesson Lesson4 failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "broken pipe");
    }

    #[test]
    fn test_failed_alternate_chain_names_cause_once() {
        let err = anyhow::Error::from(LessonError::Failed {
            name: "Broken".to_string(),
            source: anyhow::anyhow!("not implemented"),
        });
        assert_eq!(
            format!("error: {:#}", err),
            "error: lesson Broken failed: not implemented"
        );
    }
}
