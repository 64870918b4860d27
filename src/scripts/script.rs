//! Raw card scripts and the locators that find them.
//!
//! A `CardScript` is what a card author writes: a handful of named members,
//! each a single value or a sequence. The normalizer turns it into a
//! fixed-shape `BehaviorBundle`.

use rustc_hash::FxHashMap;

use crate::cards::CardKey;
use crate::effects::{Action, Evaluator};
use crate::triggers::EventHook;

use super::slots::{ActionSlot, EvalSlot, EventSlot, Slot};

/// A value declared under one script member.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    Action(Action),
    Actions(Vec<Action>),
    Hook(EventHook),
    Hooks(Vec<EventHook>),
    Eval(Evaluator),
}

impl ScriptValue {
    /// Short description of the value's shape, for error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            ScriptValue::Action(_) => "an action",
            ScriptValue::Actions(_) => "an action sequence",
            ScriptValue::Hook(_) => "an event hook",
            ScriptValue::Hooks(_) => "an event hook sequence",
            ScriptValue::Eval(_) => "an evaluator",
        }
    }
}

impl From<Action> for ScriptValue {
    fn from(action: Action) -> Self {
        ScriptValue::Action(action)
    }
}

impl From<Vec<Action>> for ScriptValue {
    fn from(actions: Vec<Action>) -> Self {
        ScriptValue::Actions(actions)
    }
}

impl From<EventHook> for ScriptValue {
    fn from(hook: EventHook) -> Self {
        ScriptValue::Hook(hook)
    }
}

impl From<Vec<EventHook>> for ScriptValue {
    fn from(hooks: Vec<EventHook>) -> Self {
        ScriptValue::Hooks(hooks)
    }
}

impl From<Evaluator> for ScriptValue {
    fn from(eval: Evaluator) -> Self {
        ScriptValue::Eval(eval)
    }
}

/// Behavior construct for one card.
///
/// ## Example
///
/// ```
/// use card_registry::effects::{Effect, Evaluator, Target};
/// use card_registry::scripts::{ActionSlot, CardScript, EvalSlot};
///
/// // Frostbolt-ish: deal 3, cheaper with a discount in play.
/// let script = CardScript::new()
///     .action(ActionSlot::Play, Effect::hit(Target::Chosen, 3))
///     .eval(EvalSlot::CostMod, Evaluator::constant(-1));
///
/// assert_eq!(script.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardScript {
    members: FxHashMap<String, ScriptValue>,
}

impl CardScript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a member by name (builder pattern).
    ///
    /// Names need not be slots; unknown members are ignored at merge time.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ScriptValue>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Declare a single action.
    #[must_use]
    pub fn action(self, slot: ActionSlot, action: impl Into<Action>) -> Self {
        self.with(slot.as_str(), ScriptValue::Action(action.into()))
    }

    /// Declare an action sequence.
    #[must_use]
    pub fn actions<A>(self, slot: ActionSlot, actions: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<Action>,
    {
        let actions = actions.into_iter().map(Into::into).collect();
        self.with(slot.as_str(), ScriptValue::Actions(actions))
    }

    /// Declare a single event hook.
    #[must_use]
    pub fn hook(self, slot: EventSlot, hook: impl Into<EventHook>) -> Self {
        self.with(slot.as_str(), ScriptValue::Hook(hook.into()))
    }

    /// Declare an event hook sequence.
    #[must_use]
    pub fn hooks<H>(self, slot: EventSlot, hooks: impl IntoIterator<Item = H>) -> Self
    where
        H: Into<EventHook>,
    {
        let hooks = hooks.into_iter().map(Into::into).collect();
        self.with(slot.as_str(), ScriptValue::Hooks(hooks))
    }

    /// Declare an evaluator.
    #[must_use]
    pub fn eval(self, slot: EvalSlot, eval: Evaluator) -> Self {
        self.with(slot.as_str(), ScriptValue::Eval(eval))
    }

    /// Member declared under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScriptValue> {
        self.members.get(name)
    }

    /// Member declared for a slot.
    #[must_use]
    pub fn slot(&self, slot: impl Into<Slot>) -> Option<&ScriptValue> {
        self.get(slot.into().as_str())
    }

    /// Names of members that are not behavior slots.
    pub fn unknown_members(&self) -> impl Iterator<Item = &str> {
        self.members
            .keys()
            .map(String::as_str)
            .filter(|name| Slot::parse(name).is_none())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Finds the script for a card id.
///
/// Absence is a normal answer: most cards have no script.
pub trait ScriptLocator: Send + Sync {
    fn locate(&self, id: &str) -> Option<CardScript>;
}

/// Locator for hosts without scripts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScripts;

impl ScriptLocator for NoScripts {
    fn locate(&self, _id: &str) -> Option<CardScript> {
        None
    }
}

impl<F> ScriptLocator for F
where
    F: Fn(&str) -> Option<CardScript> + Send + Sync,
{
    fn locate(&self, id: &str) -> Option<CardScript> {
        self(id)
    }
}

/// Scripts of one card set.
#[derive(Clone, Debug, Default)]
pub struct ScriptSet {
    /// Set name (for debugging).
    pub name: String,
    scripts: FxHashMap<CardKey, CardScript>,
}

impl ScriptSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scripts: FxHashMap::default(),
        }
    }

    /// Add a card script (builder pattern). Replaces an earlier script for
    /// the same id.
    #[must_use]
    pub fn with(mut self, id: impl Into<CardKey>, script: CardScript) -> Self {
        self.insert(id, script);
        self
    }

    pub fn insert(&mut self, id: impl Into<CardKey>, script: CardScript) {
        self.scripts.insert(id.into(), script);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardScript> {
        self.scripts.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

/// Scripts for every card set, searched in registration order.
///
/// The first set that defines an id wins.
#[derive(Clone, Debug, Default)]
pub struct ScriptLibrary {
    sets: Vec<ScriptSet>,
}

impl ScriptLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: ScriptSet) -> Self {
        self.sets.push(set);
        self
    }

    pub fn add_set(&mut self, set: ScriptSet) {
        self.sets.push(set);
    }

    /// Registered set names, in search order.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    /// Total scripts across all sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.iter().map(ScriptSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(ScriptSet::is_empty)
    }
}

impl ScriptLocator for ScriptLibrary {
    fn locate(&self, id: &str) -> Option<CardScript> {
        self.sets.iter().find_map(|set| set.get(id)).cloned()
    }
}
