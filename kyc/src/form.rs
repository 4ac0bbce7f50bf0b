use std::fmt;

use thiserror::Error;

/// The five required fields of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
    ];

    /// Name used on the wire and as input id.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter your username",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "email@example.com",
            Self::Phone => "05xxxxxxxxx",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.iter().map(|f| f.name()).collect::<Vec<_>>().join(", "))]
    MissingFields(Vec<Field>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Fields failing the required check. Only emptiness counts, a value made
    /// of spaces is present.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    draft: FormDraft,
    state: FormState,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Submitted
    }

    /// Input binding. Ignored once submitted, the inputs are not shown then.
    pub fn update(&mut self, field: Field, value: String) {
        if self.state == FormState::Editing {
            self.draft.set(field, value);
        }
    }

    /// Type hint of the email input: a warning shown under the field, it
    /// never blocks the submission.
    pub fn email_warning(&self) -> Option<&'static str> {
        let email = &self.draft.email;
        (!email.is_empty()
            && email_address::EmailAddress::parse_with_options(
                email,
                email_address::Options::default(),
            )
            .is_err())
        .then_some("Invalid email!")
    }

    /// Marks the form as submitted if every required field is present.
    ///
    /// Nothing is sent anywhere: the confirmation is local only.
    pub fn submit(&mut self) -> Result<(), FormError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if self.state == FormState::Editing {
            tracing::info!(
                "submission of {:?} accepted locally, not transmitted",
                self.draft.username
            );
            self.state = FormState::Submitted;
        }
        Ok(())
    }

    /// Back to an empty form after a confirmation.
    pub fn new_submission(&mut self) {
        self.draft = FormDraft::default();
        self.state = FormState::Editing;
    }
}
