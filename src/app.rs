use crate::api_client::{ApiFailure, ContributorsApi};
use crate::models::{ContributorSummary, QueryParameters};
use tracing::{debug, error};

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both a GitHub handle and repository name.";
pub const NO_CONTRIBUTORS_MESSAGE: &str = "No contributors found for this repository.";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching contributors. Please try again.";

/// Coarse view of the client state, derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Ticket for one in-flight submission. Only the latest ticket may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    seq: u64,
    pub query: QueryParameters,
}

impl Submission {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Form state of the client application.
#[derive(Debug, Default)]
pub struct App {
    pub owner: String,
    pub repo: String,
    pub contributors: Vec<ContributorSummary>,
    pub loading: bool,
    pub error: String,
    latest_seq: u64,
    /// Last finished submission returned a list, possibly empty.
    succeeded: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn set_repo(&mut self, repo: impl Into<String>) {
        self.repo = repo.into();
    }

    pub fn query(&self) -> QueryParameters {
        QueryParameters::new(self.owner.clone(), self.repo.clone())
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.succeeded {
            // An empty list is still a success, with an informational message
            Phase::Success
        } else if !self.error.is_empty() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    /// Validate the form and start a submission.
    ///
    /// Returns `None` when either field is empty; the error message is set and
    /// no request should be sent. Otherwise prior results and errors are
    /// cleared, loading is set, and a ticket superseding any earlier one is
    /// returned.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        let query = self.query();
        if !query.is_complete() {
            self.succeeded = false;
            self.error = MISSING_INPUT_MESSAGE.to_string();
            return None;
        }

        self.latest_seq += 1;
        self.loading = true;
        self.succeeded = false;
        self.error.clear();
        self.contributors.clear();

        Some(Submission {
            seq: self.latest_seq,
            query,
        })
    }

    /// Apply the outcome of a submission. Returns `false` if the ticket was stale
    /// and the result was discarded.
    pub fn finish(
        &mut self,
        submission: Submission,
        result: std::result::Result<Vec<ContributorSummary>, ApiFailure>,
    ) -> bool {
        if submission.seq != self.latest_seq {
            debug!(
                seq = submission.seq,
                latest = self.latest_seq,
                "Discarding stale contributor response"
            );
            return false;
        }

        match result {
            Ok(contributors) => {
                if contributors.is_empty() {
                    self.error = NO_CONTRIBUTORS_MESSAGE.to_string();
                }
                self.contributors = contributors;
                self.succeeded = true;
            }
            Err(failure) => {
                error!("Error: {}", failure);
                self.error = failure
                    .message
                    .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string());
            }
        }

        self.loading = false;
        true
    }

    /// Run one full submission against the proxy.
    pub async fn submit<A: ContributorsApi>(&mut self, api: &A) {
        let Some(submission) = self.begin_submit() else {
            return;
        };
        let result = api.list_contributors(&submission.query).await;
        self.finish(submission, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(login: &str) -> ContributorSummary {
        ContributorSummary {
            id: 1,
            login: login.to_string(),
            avatar_url: "u".to_string(),
            contributions: 1,
            profile_url: "p".to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        let app = App::new();
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.contributors.is_empty());
        assert!(!app.loading);
        assert!(app.error.is_empty());
    }

    #[test]
    fn begin_submit_requires_both_fields() {
        let mut app = App::new();
        app.set_repo("octocat");
        assert!(app.begin_submit().is_none());
        assert_eq!(app.error, MISSING_INPUT_MESSAGE);
        assert!(!app.loading);
    }

    #[test]
    fn newer_submission_supersedes_older() {
        let mut app = App::new();
        app.set_owner("rust-lang");
        app.set_repo("rust");

        let first = app.begin_submit().unwrap();
        let second = app.begin_submit().unwrap();
        assert!(second.seq() > first.seq());

        assert!(app.finish(second, Ok(vec![contributor("fast")])));
        assert!(!app.finish(first, Ok(vec![contributor("slow")])));

        assert_eq!(app.contributors.len(), 1);
        assert_eq!(app.contributors[0].login, "fast");
        assert_eq!(app.phase(), Phase::Success);
    }

    #[test]
    fn empty_list_is_success_with_message() {
        let mut app = App::new();
        app.set_owner("octocat");
        app.set_repo("empty");

        let submission = app.begin_submit().unwrap();
        assert_eq!(app.phase(), Phase::Loading);
        app.finish(submission, Ok(Vec::new()));

        assert_eq!(app.phase(), Phase::Success);
        assert_eq!(app.error, NO_CONTRIBUTORS_MESSAGE);
    }

    #[test]
    fn failure_after_success_is_error() {
        let mut app = App::new();
        app.set_owner("octocat");
        app.set_repo("hello-world");

        let first = app.begin_submit().unwrap();
        app.finish(first, Ok(vec![contributor("a")]));
        let second = app.begin_submit().unwrap();
        app.finish(second, Err(ApiFailure::default()));

        assert_eq!(app.phase(), Phase::Error);
        assert!(app.contributors.is_empty());
    }

    #[test]
    fn stale_result_does_not_clear_loading() {
        let mut app = App::new();
        app.set_owner("a");
        app.set_repo("b");

        let first = app.begin_submit().unwrap();
        let _second = app.begin_submit().unwrap();
        app.finish(first, Err(ApiFailure::default()));

        assert!(app.loading);
        assert!(app.error.is_empty());
    }
}
