use std::rc::Rc;

use log::debug;
use thiserror::Error;
use yew::prelude::*;

use crate::outside_click::{dismisses, resolve_hit};

/// Pending time before a waiting-list submission is acknowledged.
pub const SIGNUP_ACK_DELAY_MS: u32 = 800;

const MODAL_PANEL_REGION: &str = ".modal-panel";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("이름을 입력해 주세요.")]
    MissingName,
    #[error("올바른 이메일 주소를 입력해 주세요.")]
    InvalidEmail,
    #[error("the waiting list form is not accepting submissions")]
    NotAccepting,
    #[error("네트워크 연결을 확인한 뒤 다시 시도해 주세요.")]
    Offline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.name.trim().is_empty() {
            return Err(SignupError::MissingName);
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(SignupError::InvalidEmail),
        }
    }
}

/// Identifies one submission; acknowledgements for older tickets are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupPhase {
    Unsubmitted { error: Option<String> },
    Pending(SubmissionTicket),
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SignupState {
    Closed,
    Open(SignupPhase),
}

/// Waiting-list dialog. Opening always starts an unsubmitted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupModal {
    state: SignupState,
    issued: u64,
}

impl Default for SignupModal {
    fn default() -> Self {
        Self {
            state: SignupState::Closed,
            issued: 0,
        }
    }
}

impl SignupModal {
    pub fn open(&mut self) {
        self.state = SignupState::Open(SignupPhase::Unsubmitted { error: None });
    }

    pub fn close(&mut self) {
        self.state = SignupState::Closed;
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        matches!(self.state, SignupState::Open(_))
    }

    pub fn phase(&self) -> Option<&SignupPhase> {
        match &self.state {
            SignupState::Open(phase) => Some(phase),
            SignupState::Closed => None,
        }
    }

    #[cfg(test)]
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase(), Some(SignupPhase::Submitted))
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        match self.phase() {
            Some(SignupPhase::Pending(ticket)) => Some(*ticket),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self.phase() {
            Some(SignupPhase::Unsubmitted { error }) => error.as_deref(),
            _ => None,
        }
    }

    /// Starts a submission. Invalid input keeps the form unsubmitted with an inline error.
    pub fn submit(&mut self, form: &SignupForm) -> Result<SubmissionTicket, SignupError> {
        match &self.state {
            SignupState::Open(SignupPhase::Unsubmitted { .. }) => {}
            _ => return Err(SignupError::NotAccepting),
        }
        if let Err(err) = form.validate() {
            self.state = SignupState::Open(SignupPhase::Unsubmitted {
                error: Some(err.to_string()),
            });
            return Err(err);
        }
        self.issued += 1;
        let ticket = SubmissionTicket(self.issued);
        self.state = SignupState::Open(SignupPhase::Pending(ticket));
        Ok(ticket)
    }

    /// Completes the submission identified by `ticket`. Returns false when stale.
    pub fn acknowledge(&mut self, ticket: SubmissionTicket) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        self.state = SignupState::Open(SignupPhase::Submitted);
        true
    }

    /// Returns the pending submission to the form with `message` shown inline.
    pub fn fail(&mut self, ticket: SubmissionTicket, message: impl Into<String>) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        self.state = SignupState::Open(SignupPhase::Unsubmitted {
            error: Some(message.into()),
        });
        true
    }
}

/// Outcome of a pending submission once its delay has elapsed. A browser that
/// reports itself offline fails the submission so the typed input is kept.
pub fn settle_submission(ticket: SubmissionTicket, online: bool) -> ModalAction {
    if online {
        ModalAction::AcknowledgeSignup(ticket)
    } else {
        ModalAction::FailSignup(ticket, SignupError::Offline.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoModal {
    open: bool,
}

impl VideoModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Both dialogs of the page. They never reference each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    pub signup: SignupModal,
    pub video: VideoModal,
}

pub enum ModalAction {
    OpenSignup,
    CloseSignup,
    SubmitSignup(SignupForm),
    AcknowledgeSignup(SubmissionTicket),
    FailSignup(SubmissionTicket, String),
    OpenVideo,
    CloseVideo,
}

impl Reducible for ModalStack {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::OpenSignup => next.signup.open(),
            ModalAction::CloseSignup => next.signup.close(),
            ModalAction::SubmitSignup(form) => {
                if let Err(err) = next.signup.submit(&form) {
                    debug!("Waiting list submission not started: {}", err);
                }
            }
            ModalAction::AcknowledgeSignup(ticket) => {
                if !next.signup.acknowledge(ticket) {
                    debug!("Dropped stale acknowledgement {:?}", ticket);
                }
            }
            ModalAction::FailSignup(ticket, message) => {
                if !next.signup.fail(ticket, message) {
                    debug!("Dropped stale failure {:?}", ticket);
                }
            }
            ModalAction::OpenVideo => next.video.open(),
            ModalAction::CloseVideo => next.video.close(),
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    pub children: Children,
}

/// Backdrop plus centered panel. Presses on the backdrop close the dialog,
/// presses inside the panel never reach it.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if dismisses(true, resolve_hit(e.target(), MODAL_PANEL_REGION)) {
                on_close.emit(());
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={on_backdrop}>
                <div
                    class={classes!("modal-panel", props.wide.then(|| "wide"))}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="modal-glow top"></div>
                    <div class="modal-glow bottom"></div>
                    <button class="modal-close" onclick={on_close_button} aria-label="닫기">{"✕"}</button>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "홍길동".into(),
            email: "hello@example.com".into(),
        }
    }

    fn submitted_modal() -> SignupModal {
        let mut modal = SignupModal::default();
        modal.open();
        let ticket = modal.submit(&valid_form()).expect("valid form");
        assert!(modal.acknowledge(ticket));
        modal
    }

    #[test]
    fn starts_closed() {
        let modal = SignupModal::default();
        assert!(!modal.is_open());
        assert!(!modal.is_submitted());
        assert!(modal.phase().is_none());
    }

    #[test]
    fn open_always_yields_unsubmitted() {
        let mut modal = submitted_modal();
        assert!(modal.is_submitted());
        modal.open();
        assert!(modal.is_open());
        assert!(!modal.is_submitted());
        assert_eq!(modal.phase(), Some(&SignupPhase::Unsubmitted { error: None }));
    }

    #[test]
    fn submitted_only_after_acknowledgement() {
        let mut modal = SignupModal::default();
        modal.open();
        let ticket = modal.submit(&valid_form()).expect("valid form");
        assert!(!modal.is_submitted());
        assert_eq!(modal.pending_ticket(), Some(ticket));
        assert!(modal.acknowledge(ticket));
        assert!(modal.is_submitted());
        assert!(modal.is_open(), "submission never closes the dialog");
    }

    #[test]
    fn close_and_reopen_clears_submission() {
        let mut modal = submitted_modal();
        modal.close();
        assert!(!modal.is_open());
        modal.open();
        assert!(!modal.is_submitted());
    }

    #[test]
    fn late_acknowledgement_after_reopen_is_ignored() {
        let mut modal = SignupModal::default();
        modal.open();
        let ticket = modal.submit(&valid_form()).expect("valid form");
        modal.close();
        modal.open();
        assert!(!modal.acknowledge(ticket));
        assert!(!modal.is_submitted());
    }

    #[test]
    fn acknowledgement_after_close_is_ignored() {
        let mut modal = SignupModal::default();
        modal.open();
        let ticket = modal.submit(&valid_form()).expect("valid form");
        modal.close();
        assert!(!modal.acknowledge(ticket));
        assert!(!modal.is_open());
    }

    #[test]
    fn resubmission_issues_a_fresh_ticket() {
        let mut modal = SignupModal::default();
        modal.open();
        let first = modal.submit(&valid_form()).expect("valid form");
        modal.open();
        let second = modal.submit(&valid_form()).expect("valid form");
        assert_ne!(first, second);
        assert!(!modal.acknowledge(first));
        assert!(modal.acknowledge(second));
    }

    #[test]
    fn invalid_input_shows_inline_error() {
        let mut modal = SignupModal::default();
        modal.open();
        let form = SignupForm {
            name: "  ".into(),
            email: "hello@example.com".into(),
        };
        assert_eq!(modal.submit(&form), Err(SignupError::MissingName));
        assert_eq!(modal.error(), Some("이름을 입력해 주세요."));
        assert!(modal.pending_ticket().is_none());
    }

    #[test]
    fn failure_returns_to_form_with_error() {
        let mut modal = SignupModal::default();
        modal.open();
        let ticket = modal.submit(&valid_form()).expect("valid form");
        assert!(modal.fail(ticket, "등록에 실패했습니다."));
        assert!(!modal.is_submitted());
        assert_eq!(modal.error(), Some("등록에 실패했습니다."));
    }

    #[test]
    fn submit_requires_open_unsubmitted_form() {
        let mut modal = SignupModal::default();
        assert_eq!(modal.submit(&valid_form()), Err(SignupError::NotAccepting));
        modal.open();
        modal.submit(&valid_form()).expect("valid form");
        assert_eq!(modal.submit(&valid_form()), Err(SignupError::NotAccepting));
    }

    #[test]
    fn email_validation() {
        let with_email = |email: &str| SignupForm {
            name: "김민지".into(),
            email: email.into(),
        };
        assert!(with_email("a@b").validate().is_ok());
        assert_eq!(with_email("ab").validate(), Err(SignupError::InvalidEmail));
        assert_eq!(with_email("@b").validate(), Err(SignupError::InvalidEmail));
        assert_eq!(with_email("a@").validate(), Err(SignupError::InvalidEmail));
        assert_eq!(with_email("a@b@c").validate(), Err(SignupError::InvalidEmail));
    }

    #[test]
    fn video_modal_opens_and_closes() {
        let mut video = VideoModal::default();
        video.open();
        assert!(video.is_open());
        video.close();
        assert!(!video.is_open());
    }

    #[test]
    fn modals_are_independent() {
        let stack = Rc::new(ModalStack::default());
        let stack = stack.reduce(ModalAction::OpenVideo);
        let stack = stack.reduce(ModalAction::OpenSignup);
        assert!(stack.video.is_open());
        assert!(stack.signup.is_open());
        let stack = stack.reduce(ModalAction::CloseVideo);
        assert!(!stack.video.is_open());
        assert!(stack.signup.is_open());
    }

    #[test]
    fn reducer_runs_the_submission_flow() {
        let stack = Rc::new(ModalStack::default()).reduce(ModalAction::OpenSignup);
        let stack = stack.reduce(ModalAction::SubmitSignup(valid_form()));
        let ticket = stack.signup.pending_ticket().expect("pending");
        let stack = stack.reduce(ModalAction::AcknowledgeSignup(ticket));
        assert!(stack.signup.is_submitted());
        let stack = stack.reduce(ModalAction::CloseSignup).reduce(ModalAction::OpenSignup);
        assert!(stack.signup.is_open());
        assert!(!stack.signup.is_submitted());
    }

    #[test]
    fn offline_settlement_returns_to_form() {
        let stack = Rc::new(ModalStack::default()).reduce(ModalAction::OpenSignup);
        let stack = stack.reduce(ModalAction::SubmitSignup(valid_form()));
        let ticket = stack.signup.pending_ticket().expect("pending");
        let stack = stack.reduce(settle_submission(ticket, false));
        assert!(!stack.signup.is_submitted());
        assert!(stack.signup.pending_ticket().is_none());
        assert_eq!(stack.signup.error(), Some("네트워크 연결을 확인한 뒤 다시 시도해 주세요."));
    }

    #[test]
    fn online_settlement_acknowledges() {
        let stack = Rc::new(ModalStack::default()).reduce(ModalAction::OpenSignup);
        let stack = stack.reduce(ModalAction::SubmitSignup(valid_form()));
        let ticket = stack.signup.pending_ticket().expect("pending");
        assert!(stack.reduce(settle_submission(ticket, true)).signup.is_submitted());
    }

    #[test]
    fn stale_failure_keeps_the_same_state() {
        let stack = Rc::new(ModalStack::default()).reduce(ModalAction::OpenSignup);
        let stack = stack.reduce(ModalAction::SubmitSignup(valid_form()));
        let ticket = stack.signup.pending_ticket().expect("pending");
        let reopened = stack.reduce(ModalAction::CloseSignup).reduce(ModalAction::OpenSignup);
        let next = reopened.clone().reduce(settle_submission(ticket, false));
        assert!(Rc::ptr_eq(&reopened, &next));
        assert_eq!(next.signup.error(), None);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let stack = Rc::new(ModalStack::default());
        let next = stack.clone().reduce(ModalAction::CloseVideo);
        assert!(Rc::ptr_eq(&stack, &next));
    }
}
