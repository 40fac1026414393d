/// Submission state shared by every form page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl FormStatus {
    /// Starts a submission, clearing earlier messages.
    ///
    /// Returns false while another submission is still outstanding.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        self.submitting = true;
        self.error = None;
        self.success = None;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.success = Some(message.into());
    }

    /// Ends a submission without a message, e.g. before navigating away.
    pub fn finish(&mut self) {
        self.submitting = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }
}

/// A message handed from one page to the page it navigates to, shown once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    message: Option<String>,
}

impl Flash {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn take(&mut self) -> Option<String> {
        self.message.take()
    }

    /// Moves a pending message into `status` as its success message.
    pub fn show_on(&mut self, status: &mut FormStatus) {
        if let Some(message) = self.take() {
            status.success = Some(message);
        }
    }
}
