//! Admin review console state machine.
//!
//! The console never touches the network itself: operations that need the
//! backend hand out a [`Request`], the caller runs it (see
//! [`Request::execute`]) and feeds the [`Response`] back through
//! [`AdminConsole::on_response`] together with the [`Session`] it was issued
//! under. Answers from an older session are dropped. Records are only ever
//! replaced by what the backend returned, there is no optimistic update.

use std::sync::Arc;

use crate::{
    api::{ApiError, VerificationApi},
    auth::{AuthError, CredentialCheck},
    models::{Counts, ListFilter, RecordId, VerificationRecord, VerificationStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    Unauthenticated,
    Loading,
    Listing,
    Detail,
}

/// Generation of the admin session a request was issued under. Bumped on
/// every successful authentication and on logout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Session(u64);

impl Session {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Backend call wanted by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchVerifications,
    UpdateStatus {
        id: RecordId,
        status: VerificationStatus,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Verifications(Result<Vec<VerificationRecord>, ApiError>),
    StatusUpdated(Result<(), ApiError>),
}

impl Request {
    pub async fn execute(self, api: Arc<dyn VerificationApi>, token: String) -> Response {
        match self {
            Request::FetchVerifications => {
                Response::Verifications(api.list_verifications(&token).await)
            }
            Request::UpdateStatus { id, status } => {
                Response::StatusUpdated(api.update_status(&token, &id, status).await)
            }
        }
    }
}

#[derive(Debug)]
pub struct AdminConsole {
    check: Arc<dyn CredentialCheck>,
    session: Session,
    token: String,
    authenticated: bool,
    loading: bool,
    records: Vec<VerificationRecord>,
    selected: Option<VerificationRecord>,
    updating: Option<RecordId>,
    filter: ListFilter,
}

impl AdminConsole {
    pub fn new(check: Arc<dyn CredentialCheck>) -> Self {
        Self {
            check,
            session: Session::default(),
            token: String::new(),
            authenticated: false,
            loading: false,
            records: Vec::new(),
            selected: None,
            updating: None,
            filter: ListFilter::default(),
        }
    }

    pub fn state(&self) -> ConsoleState {
        if !self.authenticated {
            ConsoleState::Unauthenticated
        } else if self.loading {
            ConsoleState::Loading
        } else if self.selected.is_some() {
            ConsoleState::Detail
        } else {
            ConsoleState::Listing
        }
    }

    /// Current session, to be handed back along with the response of any
    /// request issued now.
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Token input binding, only meaningful before authentication.
    pub fn set_token(&mut self, token: String) {
        if !self.authenticated {
            self.token = token;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Checks `token` and, if accepted, starts the first fetch.
    pub fn authenticate(&mut self, token: impl Into<String>) -> Result<Request, AuthError> {
        let token = token.into();
        if !self.check.verify(&token) {
            tracing::info!("admin authentication refused");
            self.token = token;
            return Err(AuthError::InvalidToken);
        }
        tracing::info!("admin authenticated");
        self.session = self.session.next();
        self.token = token;
        self.authenticated = true;
        Ok(self.begin_fetch())
    }

    pub fn logout(&mut self) {
        tracing::info!("admin logged out");
        self.session = self.session.next();
        self.token.clear();
        self.authenticated = false;
        self.loading = false;
        self.records.clear();
        self.selected = None;
        self.updating = None;
        self.filter = ListFilter::default();
    }

    /// Starts a list fetch unless one is already running.
    pub fn fetch_verifications(&mut self) -> Option<Request> {
        if !self.authenticated || self.loading {
            return None;
        }
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> Request {
        self.loading = true;
        Request::FetchVerifications
    }

    pub fn records(&self) -> &[VerificationRecord] {
        &self.records
    }

    /// Records passing the current filter, in backend order.
    pub fn visible_records(&self) -> impl Iterator<Item = &VerificationRecord> {
        self.records.iter().filter(|r| self.filter.matches(r))
    }

    /// Always computed over the whole list, whatever the filter.
    pub fn counts(&self) -> Counts {
        Counts::of(&self.records)
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn set_status_filter(&mut self, status: Option<VerificationStatus>) {
        self.filter.status = status;
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn selected(&self) -> Option<&VerificationRecord> {
        self.selected.as_ref()
    }

    /// Ignored before authentication and while the list is being fetched.
    pub fn select_record(&mut self, record: VerificationRecord) {
        if self.authenticated && !self.loading {
            self.selected = Some(record);
        }
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    /// Id of the record whose status change is in flight.
    pub fn updating(&self) -> Option<&RecordId> {
        self.updating.as_ref()
    }

    /// Asks the backend for a status change. Refused while another change is
    /// in flight.
    pub fn update_status(&mut self, id: RecordId, status: VerificationStatus) -> Option<Request> {
        if !self.authenticated || self.updating.is_some() {
            return None;
        }
        tracing::info!("updating verification {} to {}", id, status);
        self.updating = Some(id.clone());
        Some(Request::UpdateStatus { id, status })
    }

    /// Applies a backend answer and returns the follow-up request, if any.
    /// Answers issued under another session, or arriving logged out, are
    /// dropped.
    pub fn on_response(&mut self, session: Session, response: Response) -> Option<Request> {
        if !self.authenticated || session != self.session {
            tracing::debug!(
                "dropping stale backend answer of {:?}, current {:?}",
                session,
                self.session
            );
            return None;
        }
        match response {
            Response::Verifications(res) => {
                let _ = self.on_verifications(res);
                None
            }
            Response::StatusUpdated(res) => self.on_status_updated(res).ok(),
        }
    }

    /// Ends the loading phase. On failure the previous list is kept.
    fn on_verifications(
        &mut self,
        res: Result<Vec<VerificationRecord>, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        match res {
            Ok(records) => {
                tracing::info!("{} verifications loaded", records.len());
                self.records = records;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load verifications: {}", e);
                Err(e)
            }
        }
    }

    /// On success closes the detail and returns the re-fetch. On failure
    /// nothing changes besides releasing the busy guard.
    fn on_status_updated(&mut self, res: Result<(), ApiError>) -> Result<Request, ApiError> {
        let id = self.updating.take();
        match res {
            Ok(()) => {
                tracing::info!("verification {:?} updated", id);
                self.selected = None;
                Ok(self.begin_fetch())
            }
            Err(e) => {
                tracing::error!("Failed to update verification {:?}: {}", id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SharedSecret;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List(String),
        Update(String, RecordId, VerificationStatus),
    }

    /// Serves canned answers and records every call.
    #[derive(Debug, Default)]
    struct MockApi {
        lists: Mutex<Vec<Result<Vec<VerificationRecord>, ApiError>>>,
        updates: Mutex<Vec<Result<(), ApiError>>>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockApi {
        fn with_lists(self, lists: Vec<Result<Vec<VerificationRecord>, ApiError>>) -> Self {
            *self.lists.lock().unwrap() = lists;
            self
        }

        fn with_updates(self, updates: Vec<Result<(), ApiError>>) -> Self {
            *self.updates.lock().unwrap() = updates;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VerificationApi for MockApi {
        async fn list_verifications(
            &self,
            token: &str,
        ) -> Result<Vec<VerificationRecord>, ApiError> {
            self.calls.lock().unwrap().push(Call::List(token.to_string()));
            self.lists.lock().unwrap().remove(0)
        }

        async fn update_status(
            &self,
            token: &str,
            id: &RecordId,
            status: VerificationStatus,
        ) -> Result<(), ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(token.to_string(), id.clone(), status));
            self.updates.lock().unwrap().remove(0)
        }
    }

    fn records() -> Vec<VerificationRecord> {
        serde_json::from_value(json!([
            {"id": 1, "status": "pending", "first_name": "Ayse", "email": "ayse@example.com"},
            {"id": 2, "status": "approved", "first_name": "Mehmet", "email": "m@example.com"}
        ]))
        .unwrap()
    }

    fn console() -> AdminConsole {
        AdminConsole::new(Arc::new(SharedSecret::default()))
    }

    /// Runs `request` and every follow-up until the console is idle.
    async fn drive(console: &mut AdminConsole, api: &Arc<MockApi>, request: Option<Request>) {
        let mut next = request;
        while let Some(request) = next {
            let api: Arc<dyn VerificationApi> = api.clone();
            let session = console.session();
            let response = request.execute(api, console.token().to_string()).await;
            next = console.on_response(session, response);
        }
    }

    async fn listing(api: &Arc<MockApi>) -> AdminConsole {
        let mut console = console();
        let request = console.authenticate("admin123").unwrap();
        drive(&mut console, api, Some(request)).await;
        console
    }

    #[test]
    fn wrong_token_is_refused() {
        let mut console = console();
        assert_eq!(console.state(), ConsoleState::Unauthenticated);
        assert_eq!(console.authenticate("nope"), Err(AuthError::InvalidToken));
        assert!(!console.is_authenticated());
        assert!(!console.is_loading());
        assert_eq!(console.state(), ConsoleState::Unauthenticated);
        assert_eq!(console.fetch_verifications(), None);
        // retry right away
        assert_eq!(
            console.authenticate("admin123"),
            Ok(Request::FetchVerifications)
        );
        assert!(console.is_authenticated());
        assert_eq!(console.state(), ConsoleState::Loading);
    }

    #[test]
    fn pluggable_credential_check() {
        let mut console = AdminConsole::new(Arc::new(SharedSecret::new("letmein")));
        assert!(console.authenticate("admin123").is_err());
        assert!(console.authenticate("letmein").is_ok());
    }

    #[tokio::test]
    async fn authenticate_fetches_list() {
        let api = Arc::new(MockApi::default().with_lists(vec![Ok(records())]));
        let console = listing(&api).await;

        assert_eq!(api.calls(), vec![Call::List("admin123".to_string())]);
        assert_eq!(console.state(), ConsoleState::Listing);
        assert_eq!(
            console.counts(),
            Counts {
                total: 2,
                pending: 1,
                approved: 1,
                rejected: 0
            }
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_list() {
        let api = Arc::new(MockApi::default().with_lists(vec![
            Ok(records()),
            Err(ApiError::Http {
                status: 500,
                text: "boom".to_string(),
            }),
            Err(ApiError::Network("refused".to_string())),
        ]));
        let mut console = listing(&api).await;

        let request = console.fetch_verifications();
        assert_eq!(request, Some(Request::FetchVerifications));
        drive(&mut console, &api, request).await;
        assert_eq!(console.records(), records().as_slice());
        assert!(!console.is_loading());

        let request = console.fetch_verifications();
        let api_dyn: Arc<dyn VerificationApi> = api.clone();
        let response = request
            .unwrap()
            .execute(api_dyn, console.token().to_string())
            .await;
        let Response::Verifications(res) = response else {
            panic!("expected a list response");
        };
        assert_eq!(
            console.on_verifications(res),
            Err(ApiError::Network("refused".to_string()))
        );
        assert_eq!(console.records().len(), 2);
        assert_eq!(console.state(), ConsoleState::Listing);
    }

    #[test]
    fn fetch_is_not_duplicated_while_loading() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        assert!(console.is_loading());
        assert_eq!(console.fetch_verifications(), None);
        console.on_verifications(Ok(Vec::new())).unwrap();
        assert_eq!(
            console.fetch_verifications(),
            Some(Request::FetchVerifications)
        );
    }

    #[test]
    fn select_and_dismiss() {
        let mut console = console();
        console.select_record(records()[0].clone());
        // no detail before authentication
        assert_eq!(console.selected(), None);

        console.authenticate("admin123").unwrap();
        console.on_verifications(Ok(records())).unwrap();
        console.select_record(records()[1].clone());
        assert_eq!(console.state(), ConsoleState::Detail);
        assert_eq!(console.selected().map(|r| r.id.as_str()), Some("2"));
        console.dismiss();
        assert_eq!(console.state(), ConsoleState::Listing);
    }

    #[tokio::test]
    async fn approved_update_refetches_once_and_closes_detail() {
        let mut approved = records();
        approved[0].status = VerificationStatus::Approved;
        let api = Arc::new(
            MockApi::default()
                .with_lists(vec![Ok(records()), Ok(approved)])
                .with_updates(vec![Ok(())]),
        );
        let mut console = listing(&api).await;
        console.select_record(console.records()[0].clone());

        let request = console.update_status(RecordId::from(1), VerificationStatus::Approved);
        drive(&mut console, &api, request).await;

        assert_eq!(
            api.calls(),
            vec![
                Call::List("admin123".to_string()),
                Call::Update(
                    "admin123".to_string(),
                    RecordId::from(1),
                    VerificationStatus::Approved
                ),
                Call::List("admin123".to_string()),
            ]
        );
        assert_eq!(console.selected(), None);
        assert_eq!(console.updating(), None);
        assert_eq!(console.counts().approved, 2);
        assert_eq!(console.state(), ConsoleState::Listing);
    }

    #[tokio::test]
    async fn failed_update_changes_nothing() {
        let api = Arc::new(
            MockApi::default()
                .with_lists(vec![Ok(records())])
                .with_updates(vec![Err(ApiError::Timeout)]),
        );
        let mut console = listing(&api).await;
        let record = console.records()[0].clone();
        console.select_record(record.clone());

        let request = console.update_status(record.id.clone(), VerificationStatus::Rejected);
        drive(&mut console, &api, request).await;

        assert_eq!(api.calls().len(), 2);
        assert_eq!(console.records(), records().as_slice());
        assert_eq!(console.selected(), Some(&record));
        assert_eq!(console.state(), ConsoleState::Detail);
        assert_eq!(console.updating(), None);
        assert_eq!(
            console.on_status_updated(Err(ApiError::Timeout)),
            Err(ApiError::Timeout)
        );
    }

    #[test]
    fn concurrent_updates_are_refused() {
        let mut console = console();
        assert_eq!(
            console.update_status(RecordId::from(1), VerificationStatus::Approved),
            None
        );
        console.authenticate("admin123").unwrap();
        console.on_verifications(Ok(records())).unwrap();

        assert!(console
            .update_status(RecordId::from(1), VerificationStatus::Approved)
            .is_some());
        assert_eq!(console.updating(), Some(&RecordId::from(1)));
        assert_eq!(
            console.update_status(RecordId::from(2), VerificationStatus::Rejected),
            None
        );
        assert!(console.on_status_updated(Ok(())).is_ok());
        assert!(console.is_loading());
    }

    #[test]
    fn filter_does_not_change_counts() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        console.on_verifications(Ok(records())).unwrap();

        console.set_status_filter(Some(VerificationStatus::Pending));
        assert_eq!(console.visible_records().count(), 1);
        console.set_search("mehmet".to_string());
        assert_eq!(console.visible_records().count(), 0);
        console.set_status_filter(None);
        assert_eq!(console.visible_records().count(), 1);
        assert_eq!(console.counts().total, 2);
    }

    #[test]
    fn logout_drops_session() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        console.on_verifications(Ok(records())).unwrap();
        console.set_search("ayse".to_string());
        console.logout();

        assert_eq!(console.state(), ConsoleState::Unauthenticated);
        assert_eq!(console.token(), "");
        assert!(console.records().is_empty());
        assert!(console.filter().is_empty());
        assert_eq!(console.fetch_verifications(), None);
    }

    #[test]
    fn list_answer_after_logout_is_dropped() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        let session = console.session();
        console.logout();

        let next = console.on_response(session, Response::Verifications(Ok(records())));
        assert_eq!(next, None);
        assert_eq!(console.state(), ConsoleState::Unauthenticated);
        assert!(console.records().is_empty());
        assert!(!console.is_loading());
    }

    #[test]
    fn status_answer_after_logout_issues_nothing() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        console.on_verifications(Ok(records())).unwrap();
        console.select_record(records()[0].clone());
        assert!(console
            .update_status(RecordId::from(1), VerificationStatus::Approved)
            .is_some());
        let session = console.session();
        console.logout();

        assert_eq!(console.on_response(session, Response::StatusUpdated(Ok(()))), None);
        assert_eq!(console.token(), "");
        assert!(!console.is_loading());
        assert_eq!(console.updating(), None);
    }

    #[test]
    fn answer_from_previous_session_is_dropped() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        let old = console.session();
        console.logout();
        console.authenticate("admin123").unwrap();
        assert_ne!(console.session(), old);

        let stale = vec![records()[1].clone()];
        assert_eq!(console.on_response(old, Response::Verifications(Ok(stale))), None);
        assert!(console.is_loading());
        assert!(console.records().is_empty());

        let current = console.session();
        assert_eq!(
            console.on_response(current, Response::Verifications(Ok(records()))),
            None
        );
        assert_eq!(console.records(), records().as_slice());
        assert_eq!(console.state(), ConsoleState::Listing);
    }

    #[test]
    fn no_selection_while_loading() {
        let mut console = console();
        console.authenticate("admin123").unwrap();
        console.select_record(records()[0].clone());
        assert_eq!(console.selected(), None);
        console.on_verifications(Ok(records())).unwrap();
        console.select_record(records()[0].clone());
        assert_eq!(console.state(), ConsoleState::Detail);
    }

    #[test]
    fn token_input_frozen_once_authenticated() {
        let mut console = console();
        console.set_token("adm".to_string());
        assert_eq!(console.token(), "adm");
        console.authenticate("admin123").unwrap();
        console.set_token("other".to_string());
        assert_eq!(console.token(), "admin123");
    }
}
