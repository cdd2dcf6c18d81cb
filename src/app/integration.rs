//! Placeholder integrations. Each trigger produces a fixed notice and does
//! nothing else; there is no network code behind any of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    Zoom,
    Calendar,
    Email,
}

impl Integration {
    pub fn name(self) -> &'static str {
        match self {
            Integration::Zoom => "Zoom",
            Integration::Calendar => "Google Calendar",
            Integration::Email => "Email",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Integration::Zoom => "\u{1f4f9}",
            Integration::Calendar => "\u{1f4c5}",
            Integration::Email => "\u{1f4e7}",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Integration::Zoom => "Meeting capture and real-time assistance",
            Integration::Calendar => "Meeting scheduling and participant sync",
            Integration::Email => "Follow-up automation and contact sync",
        }
    }

    /// Blurb shown on the onboarding "Connect Your Services" step.
    pub fn connect_blurb(self) -> &'static str {
        match self {
            Integration::Zoom => "Capture meeting context and participants",
            Integration::Calendar => "Sync meeting schedules and participants",
            Integration::Email => "Send follow-ups and sync contacts",
        }
    }

    /// Email is listed in settings as "Coming Soon" and cannot be configured.
    pub fn is_available(self) -> bool {
        !matches!(self, Integration::Email)
    }

    fn short_name(self) -> &'static str {
        match self {
            Integration::Zoom => "Zoom",
            Integration::Calendar => "Calendar",
            Integration::Email => "Email",
        }
    }
}

/// Something the user pressed that would reach an external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubTrigger {
    /// "Connect (Demo)" during onboarding.
    Connect(Integration),
    /// "Configure" in settings.
    Configure(Integration),
    StartMeeting,
    EmailPerson { email: String },
    ScheduleMeeting,
    FollowUp { email: String },
}

impl StubTrigger {
    pub fn integration(&self) -> Integration {
        match self {
            StubTrigger::Connect(i) | StubTrigger::Configure(i) => *i,
            StubTrigger::StartMeeting => Integration::Zoom,
            StubTrigger::EmailPerson { .. } | StubTrigger::FollowUp { .. } => Integration::Email,
            StubTrigger::ScheduleMeeting => Integration::Calendar,
        }
    }

    pub fn message(&self) -> String {
        let name = self.integration().short_name();
        match self {
            StubTrigger::Connect(_) => {
                format!("{} integration not implemented yet - using demo data", name)
            }
            StubTrigger::Configure(_) => {
                format!("{} integration not implemented - using demo data", name)
            }
            StubTrigger::StartMeeting => {
                "Zoom integration not implemented - this would open Zoom with Perfect Context panel"
                    .to_string()
            }
            StubTrigger::EmailPerson { email } => {
                format!("Email integration not implemented - would open email to {}", email)
            }
            StubTrigger::ScheduleMeeting => {
                "Calendar integration not implemented - would schedule meeting".to_string()
            }
            StubTrigger::FollowUp { email } => {
                format!("Email integration not implemented. Generated email:\n\n{}", email)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_and_configure_wording_differs() {
        assert_eq!(
            StubTrigger::Connect(Integration::Calendar).message(),
            "Calendar integration not implemented yet - using demo data"
        );
        assert_eq!(
            StubTrigger::Configure(Integration::Zoom).message(),
            "Zoom integration not implemented - using demo data"
        );
    }

    #[test]
    fn contextual_messages_carry_payload() {
        let msg = StubTrigger::EmailPerson { email: "alex@climatevc.com".into() }.message();
        assert!(msg.ends_with("would open email to alex@climatevc.com"));

        let msg = StubTrigger::FollowUp { email: "Subject: hi".into() }.message();
        assert!(msg.ends_with("Generated email:\n\nSubject: hi"));
    }

    #[test]
    fn triggers_map_to_services() {
        assert_eq!(StubTrigger::StartMeeting.integration(), Integration::Zoom);
        assert_eq!(StubTrigger::ScheduleMeeting.integration(), Integration::Calendar);
    }

    #[test]
    fn only_email_is_unavailable() {
        assert!(Integration::Zoom.is_available());
        assert!(Integration::Calendar.is_available());
        assert!(!Integration::Email.is_available());
    }
}
