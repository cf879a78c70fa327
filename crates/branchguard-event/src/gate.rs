use branchguard_types::{Message, ids};

/// Result of inspecting the declared event type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventGate {
    /// The event is a pull request; extract and evaluate.
    Evaluate,
    /// Any other event: a soft no-op carrying a warning, never a failure.
    Skip(Message),
}

pub fn gate_event(event_name: &str) -> EventGate {
    if event_name == ids::EVENT_PULL_REQUEST {
        return EventGate::Evaluate;
    }
    EventGate::Skip(Message::warning(format!(
        "This action should only run, when the event is a pull request, but it's a {event_name}"
    )))
}
