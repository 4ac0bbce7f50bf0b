use kyc::{
    console::{Response, Session},
    form::Field,
    models::{RecordId, VerificationRecord, VerificationStatus},
};

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Host
    WindowResized(f32),
    ToggleRoute,

    // Submission form
    FormUpdate(Field, String),
    FormSubmit,
    FormNewSubmission,

    // Admin console
    AdminUpdateToken(String),
    AdminLogin,
    AdminLogout,
    AdminRefresh,
    AdminSelect(VerificationRecord),
    AdminDismiss,
    AdminUpdateStatus(RecordId, VerificationStatus),
    AdminResponse(Session, Response),
    AdminFilterStatus(Option<VerificationStatus>),
    AdminSearch(String),

    // Warnings
    WarningCloseModal,
}
