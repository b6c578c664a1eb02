//! Contact form submission state machine.
//!
//! DESIGN
//! ======
//! The form moves `Editing -> Submitting -> Submitted` and only returns to
//! `Editing` through an explicit reset. Submission is split in two so the
//! network call can run between `begin_submit` and `finish_submit` without
//! holding a borrow of the form. A failed delivery is logged and then
//! treated exactly like a successful one.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use std::fmt::Display;

use inquiry::{Field, InquiryError, InquiryForm};

/// Where the contact form is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("form is not editable")]
    NotEditing,
    #[error("no submission in progress")]
    NotSubmitting,
    #[error("form has not been submitted")]
    NotSubmitted,
    #[error(transparent)]
    Field(#[from] InquiryError),
}

/// Contact form record plus its submission state. One per Contact view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryFlow {
    form: InquiryForm,
    state: SubmissionState,
}

impl InquiryFlow {
    #[must_use]
    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Replace one field while editing.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotEditing`] outside `Editing`; [`FlowError::Field`] for
    /// an unknown category value. The form is unchanged on error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FlowError> {
        if self.state != SubmissionState::Editing {
            return Err(FlowError::NotEditing);
        }
        self.form.set(field, value)?;
        Ok(())
    }

    /// Move to `Submitting` and hand back the form to deliver.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotEditing`] if a submission is already running or done;
    /// [`FlowError::Field`] with [`InquiryError::Incomplete`] if a required
    /// field is empty. The state is unchanged on error.
    pub fn begin_submit(&mut self) -> Result<InquiryForm, FlowError> {
        if self.state != SubmissionState::Editing {
            return Err(FlowError::NotEditing);
        }
        self.form.validate()?;
        self.state = SubmissionState::Submitting;
        Ok(self.form.clone())
    }

    /// Record the end of the delivery attempt and move to `Submitted`.
    ///
    /// A delivery error is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotSubmitting`] if no submission was started.
    pub fn finish_submit<E: Display>(&mut self, delivery: Result<(), E>) -> Result<(), FlowError> {
        if self.state != SubmissionState::Submitting {
            return Err(FlowError::NotSubmitting);
        }
        if let Err(e) = delivery {
            leptos::logging::warn!("inquiry delivery failed: {e}");
        }
        self.state = SubmissionState::Submitted;
        Ok(())
    }

    /// Clear the form for a new inquiry.
    ///
    /// # Errors
    ///
    /// [`FlowError::NotSubmitted`] unless the form was submitted.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        if self.state != SubmissionState::Submitted {
            return Err(FlowError::NotSubmitted);
        }
        *self = Self::default();
        Ok(())
    }
}
