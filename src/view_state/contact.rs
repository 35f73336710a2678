use serde::{Deserialize, Serialize};

use super::{ContactError, Millis};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sent {
        until: Millis,
    },
}

/// The contact form only pretends to send: a valid message is logged and a
/// success notice is shown for a while. The fields themselves live in the
/// page, which clears them only when `submit` succeeds.
#[derive(Debug, Clone)]
pub struct ContactForm {
    display_for: Millis,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new(display_for: Millis) -> Self {
        Self {
            display_for,
            status: ContactStatus::Idle,
        }
    }

    /// Validates and "sends" `message`. A rejected message leaves the status
    /// untouched.
    pub fn submit(&mut self, message: &ContactMessage, now: Millis) -> Result<(), ContactError> {
        message.validate()?;
        log::info!(
            "contact form submitted by {} <{}> ({} chars)",
            message.name.trim(),
            message.email.trim(),
            message.message.len()
        );
        self.status = ContactStatus::Sent {
            until: now.saturating_add(self.display_for),
        };
        Ok(())
    }

    pub fn tick(&mut self, now: Millis) -> ContactStatus {
        if let ContactStatus::Sent { until } = self.status {
            if now >= until {
                self.status = ContactStatus::Idle;
            }
        }
        self.status
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.status, ContactStatus::Sent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(message("Sam", "sam@example.com", "hi").validate(), Ok(()));
        assert_eq!(
            message("  ", "sam@example.com", "hi").validate(),
            Err(ContactError::MissingName)
        );
        for bad in ["", "sam", "sam@", "@example.com", "sam@example", "sam@.com", "s am@x.io", "a@b@c.io"] {
            assert_eq!(
                message("Sam", bad, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
        assert_eq!(
            message("Sam", "sam@example.com", "\n").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn test_success_notice_times_out() {
        let mut form = ContactForm::new(5000);
        form.submit(&message("Sam", "sam@example.com", "hello"), 1000)
            .unwrap();
        assert_eq!(form.status(), ContactStatus::Sent { until: 6000 });
        assert!(form.is_sent());
        assert!(form.tick(5999) != ContactStatus::Idle);
        assert_eq!(form.tick(6000), ContactStatus::Idle);
    }

    #[test]
    fn test_failed_submit_leaves_status() {
        let mut form = ContactForm::new(5000);
        let bad = message("Sam", "nope", "hello");
        assert_eq!(form.submit(&bad, 0), Err(ContactError::InvalidEmail));
        assert_eq!(form.status(), ContactStatus::Idle);
        assert!(!form.is_sent());
    }
}
