//! RSVP form state and submission rules.
//!
//! Nothing here is stored anywhere: a submitted response only lives long
//! enough to become a [`Wish`] on the page.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::Wish;

/// Whether the guest is coming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attendance {
    /// No choice made yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    /// "yes"
    #[serde(rename = "yes")]
    Attending,
    /// "no"
    #[serde(rename = "no")]
    Declined,
}

impl Attendance {
    /// Form value for this choice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Unset => "",
            Attendance::Attending => "yes",
            Attendance::Declined => "no",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Attendance::Unset)
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attendance {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Attendance::Unset),
            "yes" => Ok(Attendance::Attending),
            "no" => Ok(Attendance::Declined),
            other => Err(RsvpError::UnknownAttendance(other.to_string())),
        }
    }
}

/// Why a submission was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsvpError {
    #[error("name is required")]
    MissingName,

    #[error("attendance choice is required")]
    MissingAttendance,

    #[error("unknown attendance value: {0}")]
    UnknownAttendance(String),
}

/// Live form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpForm {
    pub name: String,
    pub attendance: Attendance,
    pub guests: u8,
    pub wishes: String,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            attendance: Attendance::Unset,
            guests: 1,
            wishes: String::new(),
        }
    }
}

impl RsvpForm {
    /// Check required fields and freeze the form into a response.
    ///
    /// The guest count is clamped to `1..=max_guests` for guests who attend
    /// and recorded as zero for guests who decline.
    pub fn submit(&self, max_guests: u8) -> Result<RsvpResponse, RsvpError> {
        if self.name.is_empty() {
            return Err(RsvpError::MissingName);
        }
        if !self.attendance.is_set() {
            return Err(RsvpError::MissingAttendance);
        }

        let guests = match self.attendance {
            Attendance::Attending => self.guests.clamp(1, max_guests.max(1)),
            _ => 0,
        };

        Ok(RsvpResponse {
            name: self.name.clone(),
            attendance: self.attendance,
            guests,
            wishes: self.wishes.clone(),
        })
    }
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub name: String,
    pub attendance: Attendance,
    pub guests: u8,
    pub wishes: String,
}

impl RsvpResponse {
    /// The wish this response contributes, if the guest wrote one.
    ///
    /// Name and message are kept exactly as typed.
    pub fn to_wish(&self, date: impl Into<String>) -> Option<Wish> {
        if self.wishes.is_empty() {
            return None;
        }
        Some(Wish::new(self.name.clone(), self.wishes.clone()).with_date(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RsvpForm {
        RsvpForm {
            name: "Dewi".to_string(),
            attendance: Attendance::Attending,
            guests: 2,
            wishes: "Selamat!".to_string(),
        }
    }

    #[test]
    fn test_submit_rejects_empty_name() {
        let form = RsvpForm {
            name: String::new(),
            ..filled()
        };
        assert_eq!(form.submit(5), Err(RsvpError::MissingName));
    }

    #[test]
    fn test_submit_accepts_whitespace_name() {
        let form = RsvpForm {
            name: " ".to_string(),
            attendance: Attendance::Declined,
            ..filled()
        };
        let response = form.submit(5).expect("accepted");
        assert_eq!(response.name, " ");
    }

    #[test]
    fn test_submit_rejects_unset_attendance() {
        let form = RsvpForm {
            attendance: Attendance::Unset,
            ..filled()
        };
        assert_eq!(form.submit(5), Err(RsvpError::MissingAttendance));
    }

    #[test]
    fn test_default_form_is_rejected() {
        assert!(RsvpForm::default().submit(5).is_err());
    }

    #[test]
    fn test_submit_accepts_complete_form() {
        let response = filled().submit(5).expect("accepted");
        assert_eq!(response.name, "Dewi");
        assert_eq!(response.attendance, Attendance::Attending);
        assert_eq!(response.guests, 2);
    }

    #[test]
    fn test_guests_clamped() {
        let form = RsvpForm {
            guests: 9,
            ..filled()
        };
        assert_eq!(form.submit(5).expect("accepted").guests, 5);

        let form = RsvpForm {
            guests: 0,
            ..filled()
        };
        assert_eq!(form.submit(5).expect("accepted").guests, 1);
    }

    #[test]
    fn test_declined_has_no_guests() {
        let form = RsvpForm {
            attendance: Attendance::Declined,
            ..filled()
        };
        assert_eq!(form.submit(5).expect("accepted").guests, 0);
    }

    #[test]
    fn test_to_wish_keeps_literal_text() {
        let form = RsvpForm {
            name: " Dewi ".to_string(),
            wishes: "Bahagia selalu ".to_string(),
            ..filled()
        };
        let wish = form
            .submit(5)
            .expect("accepted")
            .to_wish("June 21, 2025")
            .expect("wish");

        assert_eq!(wish.name, " Dewi ");
        assert_eq!(wish.message, "Bahagia selalu ");
        assert_eq!(wish.date.as_deref(), Some("June 21, 2025"));
    }

    #[test]
    fn test_to_wish_skips_empty_message() {
        let form = RsvpForm {
            wishes: String::new(),
            ..filled()
        };
        assert!(form.submit(5).expect("accepted").to_wish("today").is_none());
    }

    #[test]
    fn test_to_wish_keeps_whitespace_message() {
        let form = RsvpForm {
            wishes: "   ".to_string(),
            ..filled()
        };
        let wish = form
            .submit(5)
            .expect("accepted")
            .to_wish("today")
            .expect("wish");
        assert_eq!(wish.message, "   ");
    }

    #[test]
    fn test_attendance_parse() {
        assert_eq!("yes".parse::<Attendance>(), Ok(Attendance::Attending));
        assert_eq!("no".parse::<Attendance>(), Ok(Attendance::Declined));
        assert_eq!("".parse::<Attendance>(), Ok(Attendance::Unset));
        assert!("maybe".parse::<Attendance>().is_err());
        assert_eq!(Attendance::Declined.to_string(), "no");
    }

    #[test]
    fn test_attendance_serialization() {
        let json = serde_json::to_string(&Attendance::Attending).unwrap();
        assert_eq!(json, "\"yes\"");
        let unset: Attendance = serde_json::from_str("\"\"").unwrap();
        assert_eq!(unset, Attendance::Unset);
    }
}
