//! Symbolic outcome of a run, job or step.
//!
//! GitHub reports two fields: a `status` that moves through the lifecycle and a
//! `conclusion` that only exists once the status is `completed`. Everything that
//! draws a glyph goes through [`Outcome::classify`] so the two can never disagree.

use crate::model::{AnnotationLevel, Conclusion, RunStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    Cancelled,
    TimedOut,
    Neutral,
    Skipped,
    Stale,
    ActionRequired,
    StartupFailure,
    InProgress,
    Queued,
    Requested,
    Waiting,
    Pending,
}

/// Color role of a glyph. Painting happens in [`crate::iostreams::ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Yellow,
    Gray,
}

impl Outcome {
    /// # Panics
    ///
    /// Panics on a completed pair without a conclusion. The parser rejects such
    /// payloads, so reaching this is a bug in the caller.
    pub fn classify(status: RunStatus, conclusion: Option<Conclusion>) -> Self {
        match (status, conclusion) {
            (RunStatus::Queued, _) => Outcome::Queued,
            (RunStatus::Requested, _) => Outcome::Requested,
            (RunStatus::Waiting, _) => Outcome::Waiting,
            (RunStatus::Pending, _) => Outcome::Pending,
            (RunStatus::InProgress, _) => Outcome::InProgress,
            (RunStatus::Completed, Some(c)) => match c {
                Conclusion::Success => Outcome::Success,
                Conclusion::Failure => Outcome::Failure,
                Conclusion::Cancelled => Outcome::Cancelled,
                Conclusion::TimedOut => Outcome::TimedOut,
                Conclusion::Skipped => Outcome::Skipped,
                Conclusion::Neutral => Outcome::Neutral,
                Conclusion::Stale => Outcome::Stale,
                Conclusion::ActionRequired => Outcome::ActionRequired,
                Conclusion::StartupFailure => Outcome::StartupFailure,
            },
            (RunStatus::Completed, None) => {
                panic!("completed status without a conclusion cannot be classified")
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            Outcome::InProgress
                | Outcome::Queued
                | Outcome::Requested
                | Outcome::Waiting
                | Outcome::Pending
        )
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Outcome::Success => "✓",
            Outcome::Failure
            | Outcome::TimedOut
            | Outcome::Stale
            | Outcome::ActionRequired
            | Outcome::StartupFailure => "X",
            Outcome::Cancelled | Outcome::Skipped | Outcome::Neutral => "-",
            Outcome::InProgress => "*",
            Outcome::Queued | Outcome::Requested | Outcome::Waiting | Outcome::Pending => "…",
        }
    }

    /// Glyph used when stdout is not a terminal.
    pub fn ascii_glyph(self) -> &'static str {
        match self {
            Outcome::Success => "+",
            Outcome::Queued | Outcome::Requested | Outcome::Waiting | Outcome::Pending => ".",
            other => other.glyph(),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Outcome::Success => Tone::Green,
            Outcome::Failure
            | Outcome::TimedOut
            | Outcome::Stale
            | Outcome::ActionRequired
            | Outcome::StartupFailure => Tone::Red,
            Outcome::Cancelled | Outcome::Skipped | Outcome::Neutral => Tone::Gray,
            Outcome::InProgress
            | Outcome::Queued
            | Outcome::Requested
            | Outcome::Waiting
            | Outcome::Pending => Tone::Yellow,
        }
    }
}

pub fn annotation_glyph(level: AnnotationLevel) -> (&'static str, Tone) {
    match level {
        AnnotationLevel::Failure => ("X", Tone::Red),
        AnnotationLevel::Warning => ("!", Tone::Yellow),
        AnnotationLevel::Notice => ("-", Tone::Gray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: [RunStatus; 6] = [
        RunStatus::Queued,
        RunStatus::Requested,
        RunStatus::Waiting,
        RunStatus::Pending,
        RunStatus::InProgress,
        RunStatus::Completed,
    ];

    const CONCLUSIONS: [Conclusion; 9] = [
        Conclusion::Success,
        Conclusion::Failure,
        Conclusion::Cancelled,
        Conclusion::TimedOut,
        Conclusion::Skipped,
        Conclusion::Neutral,
        Conclusion::Stale,
        Conclusion::ActionRequired,
        Conclusion::StartupFailure,
    ];

    #[test]
    fn every_documented_pair_has_one_glyph() {
        for status in STATUSES {
            let conclusions: Vec<Option<Conclusion>> = if status == RunStatus::Completed {
                CONCLUSIONS.iter().copied().map(Some).collect()
            } else {
                std::iter::once(None)
                    .chain(CONCLUSIONS.iter().copied().map(Some))
                    .collect()
            };
            for conclusion in conclusions {
                let outcome = Outcome::classify(status, conclusion);
                assert_eq!(outcome.glyph().chars().count(), 1, "{status:?}/{conclusion:?}");
                assert_eq!(outcome.ascii_glyph().len(), 1, "{status:?}/{conclusion:?}");
                assert!(outcome.ascii_glyph().is_ascii());
            }
        }
    }

    #[test]
    fn conclusion_ignored_until_completed() {
        assert_eq!(
            Outcome::classify(RunStatus::InProgress, Some(Conclusion::Failure)),
            Outcome::InProgress
        );
        assert_eq!(
            Outcome::classify(RunStatus::Queued, Some(Conclusion::Success)),
            Outcome::Queued
        );
    }

    #[test]
    fn non_completed_outcomes_are_not_terminal() {
        for status in STATUSES.iter().filter(|s| **s != RunStatus::Completed) {
            let outcome = Outcome::classify(*status, None);
            assert!(!outcome.is_terminal(), "{status:?}");
            assert_eq!(outcome.tone(), Tone::Yellow);
        }
    }

    #[test]
    fn completed_glyphs() {
        let cases = [
            (Conclusion::Success, "✓", Tone::Green),
            (Conclusion::Failure, "X", Tone::Red),
            (Conclusion::TimedOut, "X", Tone::Red),
            (Conclusion::Stale, "X", Tone::Red),
            (Conclusion::Cancelled, "-", Tone::Gray),
            (Conclusion::Skipped, "-", Tone::Gray),
            (Conclusion::Neutral, "-", Tone::Gray),
        ];
        for (conclusion, glyph, tone) in cases {
            let outcome = Outcome::classify(RunStatus::Completed, Some(conclusion));
            assert!(outcome.is_terminal());
            assert_eq!(outcome.glyph(), glyph, "{conclusion:?}");
            assert_eq!(outcome.tone(), tone, "{conclusion:?}");
        }
    }

    #[test]
    #[should_panic(expected = "without a conclusion")]
    fn completed_without_conclusion_panics() {
        let _ = Outcome::classify(RunStatus::Completed, None);
    }

    #[test]
    fn annotation_levels() {
        assert_eq!(annotation_glyph(AnnotationLevel::Failure), ("X", Tone::Red));
        assert_eq!(annotation_glyph(AnnotationLevel::Warning).0, "!");
        assert_eq!(annotation_glyph(AnnotationLevel::Notice).1, Tone::Gray);
    }
}
