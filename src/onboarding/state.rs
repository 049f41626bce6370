//! Wizard step machine — tracks where the user is in the flow.

/// Number of steps in the onboarding flow.
pub const TOTAL_STEPS: usize = 6;

/// The six onboarding steps, in order.
///
/// Progresses linearly: Intent → Student → Stage → Domain → Region →
/// Funding. Submission is a separate action from the last step, not a
/// seventh step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intent,
    Student,
    Stage,
    Domain,
    Region,
    Funding,
}

impl Step {
    /// 1-based position, matching the on-screen "Step X of 6" counter.
    pub fn index(&self) -> usize {
        match self {
            Self::Intent => 1,
            Self::Student => 2,
            Self::Stage => 3,
            Self::Domain => 4,
            Self::Region => 5,
            Self::Funding => 6,
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<Step> {
        match self {
            Self::Intent => Some(Self::Student),
            Self::Student => Some(Self::Stage),
            Self::Stage => Some(Self::Domain),
            Self::Domain => Some(Self::Region),
            Self::Region => Some(Self::Funding),
            Self::Funding => None,
        }
    }

    /// The preceding step, if any.
    pub fn prev(&self) -> Option<Step> {
        match self {
            Self::Intent => None,
            Self::Student => Some(Self::Intent),
            Self::Stage => Some(Self::Student),
            Self::Domain => Some(Self::Stage),
            Self::Region => Some(Self::Domain),
            Self::Funding => Some(Self::Region),
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Funding)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Intent
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intent => "intent",
            Self::Student => "student",
            Self::Stage => "stage",
            Self::Domain => "domain",
            Self::Region => "region",
            Self::Funding => "funding",
        };
        write!(f, "{s}")
    }
}

/// How one slot of the progress indicator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMark {
    Completed,
    Active,
    Upcoming,
}

/// The progress indicator model: one mark per step plus the literal
/// step counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub marks: [StepMark; TOTAL_STEPS],
    pub counter: String,
}

impl Progress {
    /// Indicator state for `step`: everything before it completed, the step
    /// itself active, everything after unmarked.
    pub fn for_step(step: Step) -> Self {
        let current = step.index();
        let mut marks = [StepMark::Upcoming; TOTAL_STEPS];
        for (i, mark) in marks.iter_mut().enumerate() {
            let position = i + 1;
            *mark = if position < current {
                StepMark::Completed
            } else if position == current {
                StepMark::Active
            } else {
                StepMark::Upcoming
            };
        }
        Self {
            marks,
            counter: format!("Step {current} of {TOTAL_STEPS}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STEPS: [Step; TOTAL_STEPS] = [
        Step::Intent,
        Step::Student,
        Step::Stage,
        Step::Domain,
        Step::Region,
        Step::Funding,
    ];

    #[test]
    fn next_walks_all_steps() {
        let mut current = Step::Intent;
        for expected in &ALL_STEPS[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn prev_walks_all_steps_backward() {
        let mut current = Step::Funding;
        for expected in ALL_STEPS[..TOTAL_STEPS - 1].iter().rev() {
            let prev = current.prev().unwrap();
            assert_eq!(prev, *expected);
            current = prev;
        }
        assert!(current.prev().is_none());
    }

    #[test]
    fn indices_cover_one_through_six() {
        for (i, step) in ALL_STEPS.iter().enumerate() {
            assert_eq!(step.index(), i + 1);
        }
        assert!(Step::Funding.is_last());
        assert!(!Step::Region.is_last());
    }

    #[test]
    fn progress_marks_for_a_middle_step() {
        let progress = Progress::for_step(Step::Domain);
        assert_eq!(
            progress.marks,
            [
                StepMark::Completed,
                StepMark::Completed,
                StepMark::Completed,
                StepMark::Active,
                StepMark::Upcoming,
                StepMark::Upcoming,
            ]
        );
        assert_eq!(progress.counter, "Step 4 of 6");
    }

    #[test]
    fn progress_at_the_edges() {
        let first = Progress::for_step(Step::Intent);
        assert_eq!(first.marks[0], StepMark::Active);
        assert!(first.marks[1..].iter().all(|m| *m == StepMark::Upcoming));
        assert_eq!(first.counter, "Step 1 of 6");

        let last = Progress::for_step(Step::Funding);
        assert!(
            last.marks[..TOTAL_STEPS - 1]
                .iter()
                .all(|m| *m == StepMark::Completed)
        );
        assert_eq!(last.marks[TOTAL_STEPS - 1], StepMark::Active);
        assert_eq!(last.counter, "Step 6 of 6");
    }
}
