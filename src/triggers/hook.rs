//! Event hooks.
//!
//! Event slots hold hooks: listeners declared by scripts, bare actions
//! (re-evaluated auras for `update`/`enrage`), and built-in rule markers that
//! the registry derives from static attributes.

use crate::effects::{Action, Effect, Target};

use super::event::GameEventKind;

/// Built-in rules attached by attribute, not by script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Damage dealt by this card destroys the damaged entity.
    Poisonous,
}

impl Rule {
    /// The listener this rule stands for.
    #[must_use]
    pub fn listener(self) -> EventListener {
        match self {
            Rule::Poisonous => EventListener::new(GameEventKind::Damage)
                .with_source(Target::SelfCard)
                .then(Effect::destroy(Target::EventTarget)),
        }
    }
}

/// Marker appended to the `events` slot of every poisonous card.
pub const POISONOUS: EventHook = EventHook::Rule(Rule::Poisonous);

/// Reacts to one kind of event raised by a given entity.
///
/// ## Example
///
/// ```
/// use card_registry::effects::{Effect, Target};
/// use card_registry::triggers::{EventListener, GameEventKind};
///
/// // "Whenever this minion takes damage, gain +3 Attack."
/// let listener = EventListener::new(GameEventKind::Damage)
///     .with_target(Target::SelfCard)
///     .then(Effect::buff(Target::SelfCard, 3, 0));
///
/// assert_eq!(listener.actions.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EventListener {
    /// Event kind listened for.
    pub event: GameEventKind,

    /// Required event source. `None` accepts any source.
    pub source: Option<Target>,

    /// Required event target. `None` accepts any target.
    pub target: Option<Target>,

    /// Actions run when the listener fires.
    pub actions: Vec<Action>,
}

impl EventListener {
    pub fn new(event: GameEventKind) -> Self {
        Self {
            event,
            source: None,
            target: None,
            actions: Vec::new(),
        }
    }

    /// Only fire for events raised by `source`.
    #[must_use]
    pub fn with_source(mut self, source: Target) -> Self {
        self.source = Some(source);
        self
    }

    /// Only fire for events affecting `target`.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Append an action.
    #[must_use]
    pub fn then(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }
}

/// One entry of an event slot.
#[derive(Clone, Debug, PartialEq)]
pub enum EventHook {
    Listener(EventListener),
    /// Action re-run whenever the slot is evaluated.
    Action(Action),
    Rule(Rule),
}

impl EventHook {
    /// Listener view of this hook; bare actions have none.
    #[must_use]
    pub fn listener(&self) -> Option<EventListener> {
        match self {
            EventHook::Listener(listener) => Some(listener.clone()),
            EventHook::Rule(rule) => Some(rule.listener()),
            EventHook::Action(_) => None,
        }
    }

    /// Whether this hook reacts to `kind`.
    #[must_use]
    pub fn listens_to(&self, kind: GameEventKind) -> bool {
        match self {
            EventHook::Listener(listener) => listener.event == kind,
            EventHook::Rule(rule) => rule.listener().event == kind,
            EventHook::Action(_) => false,
        }
    }
}

impl From<EventListener> for EventHook {
    fn from(listener: EventListener) -> Self {
        EventHook::Listener(listener)
    }
}

impl From<Action> for EventHook {
    fn from(action: Action) -> Self {
        EventHook::Action(action)
    }
}

impl From<Rule> for EventHook {
    fn from(rule: Rule) -> Self {
        EventHook::Rule(rule)
    }
}
