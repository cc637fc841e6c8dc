//! Checkout steps and the transition table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CheckoutError, CheckoutResult};

/// A stage of the booking wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Order review
    Summary,
    /// Patient roster
    Patient,
    /// Collection address
    Address,
    /// Home collection date and slot
    Schedule,
    /// Terminal: payment confirmed
    Confirmed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Summary => "summary",
            CheckoutStep::Patient => "patient",
            CheckoutStep::Address => "address",
            CheckoutStep::Schedule => "schedule",
            CheckoutStep::Confirmed => "confirmed",
        }
    }

    /// Heading shown above the step.
    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::Summary => "Order Summary",
            CheckoutStep::Patient => "Patient Details",
            CheckoutStep::Address => "Collection Address",
            CheckoutStep::Schedule => "Collection Schedule",
            CheckoutStep::Confirmed => "Booking Confirmed",
        }
    }

    /// The step from which the order is submitted.
    pub fn final_step(has_home_collection: bool) -> CheckoutStep {
        if has_home_collection {
            CheckoutStep::Schedule
        } else {
            CheckoutStep::Address
        }
    }

    /// Steps shown in the progress indicator, in order.
    pub fn visible_steps(has_home_collection: bool) -> Vec<CheckoutStep> {
        let mut steps = vec![
            CheckoutStep::Summary,
            CheckoutStep::Patient,
            CheckoutStep::Address,
        ];
        if has_home_collection {
            steps.push(CheckoutStep::Schedule);
        }
        steps
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation request from the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StepEvent {
    Next,
    Back,
}

/// Where an accepted event leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    MoveTo(CheckoutStep),
    /// Leave the wizard by submitting the order
    Submit,
}

/// Transition table: `state × event → state | submit`, or reject.
///
/// Guards are not evaluated here; this only says which moves exist.
pub fn transition(
    from: CheckoutStep,
    event: StepEvent,
    has_home_collection: bool,
) -> CheckoutResult<Transition> {
    use CheckoutStep::*;
    use StepEvent::*;

    let to = match (from, event) {
        (Summary, Next) => Transition::MoveTo(Patient),
        (Patient, Next) => Transition::MoveTo(Address),
        (Address, Next) if has_home_collection => Transition::MoveTo(Schedule),
        (Address, Next) => Transition::Submit,
        (Schedule, Next) => Transition::Submit,
        (Patient, Back) => Transition::MoveTo(Summary),
        (Address, Back) => Transition::MoveTo(Patient),
        (Schedule, Back) => Transition::MoveTo(Address),
        (Summary, Back) | (Confirmed, _) => {
            return Err(CheckoutError::IllegalTransition { from, event })
        }
    };
    Ok(to)
}

/// Events accepted in a state.
pub fn allowed_events(from: CheckoutStep, has_home_collection: bool) -> Vec<StepEvent> {
    [StepEvent::Next, StepEvent::Back]
        .into_iter()
        .filter(|event| transition(from, *event, has_home_collection).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path_with_home_collection() {
        assert_eq!(
            transition(CheckoutStep::Summary, StepEvent::Next, true).unwrap(),
            Transition::MoveTo(CheckoutStep::Patient)
        );
        assert_eq!(
            transition(CheckoutStep::Address, StepEvent::Next, true).unwrap(),
            Transition::MoveTo(CheckoutStep::Schedule)
        );
        assert_eq!(
            transition(CheckoutStep::Schedule, StepEvent::Next, true).unwrap(),
            Transition::Submit
        );
    }

    #[test]
    fn test_address_submits_without_home_collection() {
        assert_eq!(
            transition(CheckoutStep::Address, StepEvent::Next, false).unwrap(),
            Transition::Submit
        );
    }

    #[test]
    fn test_back_goes_to_previous_step() {
        assert_eq!(
            transition(CheckoutStep::Schedule, StepEvent::Back, true).unwrap(),
            Transition::MoveTo(CheckoutStep::Address)
        );
        assert_eq!(
            transition(CheckoutStep::Patient, StepEvent::Back, false).unwrap(),
            Transition::MoveTo(CheckoutStep::Summary)
        );
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(transition(CheckoutStep::Summary, StepEvent::Back, true).is_err());
        assert!(transition(CheckoutStep::Confirmed, StepEvent::Next, true).is_err());
        assert!(transition(CheckoutStep::Confirmed, StepEvent::Back, false).is_err());
        assert!(allowed_events(CheckoutStep::Confirmed, true).is_empty());
        assert_eq!(allowed_events(CheckoutStep::Summary, false), vec![StepEvent::Next]);
    }

    #[test]
    fn test_visible_steps() {
        assert_eq!(CheckoutStep::visible_steps(false).len(), 3);
        assert_eq!(
            CheckoutStep::visible_steps(true).last(),
            Some(&CheckoutStep::Schedule)
        );
        assert_eq!(CheckoutStep::final_step(false), CheckoutStep::Address);
    }
}
