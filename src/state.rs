//! View-state sequencing for the search front end.
//!
//! The reference UI tracked loading/suggestion/notice visibility as
//! independent booleans; here the mutually exclusive presentations are a
//! single enum driven through one transition function, so contradictory
//! combinations ("loading" and "results shown" at once) cannot be
//! represented at all.

/// The mutually exclusive presentation states of the search UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Startup intro animation
    #[default]
    Loading,
    /// Idle form, ready for a submission
    AwaitingInput,
    /// A submission is being validated and, if valid, searched
    Validating,
    /// Matching recipes are on screen
    ResultsShown,
    /// "No recipes found" notice is on screen
    EmptyResultNotice,
}

/// Everything that can move the view from one state to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The startup intro finished playing
    IntroFinished,
    /// The user submitted the search form
    Submit,
    /// The submitted query failed validation
    ValidationFailed,
    /// The dataset could not be fetched or parsed
    LoadFailed,
    /// The search produced at least one match
    ResultsReady,
    /// The search ran and produced nothing
    NoMatches,
    /// The empty-result notice timed out
    NoticeTimeout,
    /// The user dismissed the results view
    Dismiss,
}

/// Advance the view by one event.
///
/// Events that do not apply to the current state leave it unchanged. A
/// `Submit` is accepted from any state after the intro, which is what makes
/// a new search implicitly cancel whatever cosmetic delay was pending: the
/// caller observes the reset state and drops the old timer.
pub fn transition(state: ViewState, event: ViewEvent) -> ViewState {
    use ViewEvent::*;
    use ViewState::*;

    match (state, event) {
        (Loading, IntroFinished) => AwaitingInput,
        (Loading, _) => Loading,

        (_, Submit) => Validating,

        (Validating, ValidationFailed) => AwaitingInput,
        (Validating, LoadFailed) => AwaitingInput,
        (Validating, ResultsReady) => ResultsShown,
        (Validating, NoMatches) => EmptyResultNotice,

        (EmptyResultNotice, NoticeTimeout) => AwaitingInput,
        (ResultsShown, Dismiss) => AwaitingInput,

        (state, _) => state,
    }
}
