//! Script callables.
//!
//! Scripts declare behavior either as plain effects or as closures that
//! compute effects from the current game context. Evaluators answer a single
//! numeric question (cost adjustment, "is this powered up").

use std::fmt;
use std::sync::Arc;

use crate::cards::{Attributes, CardAttributes};

use super::effect::Effect;

/// Context a script callable runs against.
///
/// `state` is a read-only snapshot supplied by the rules engine (for example
/// `"combo_active"` or `"cards_in_hand"`).
#[derive(Clone, Copy, Debug)]
pub struct ScriptContext<'a> {
    /// The card carrying the script.
    pub card: &'a CardAttributes,
    /// Game-provided values.
    pub state: &'a Attributes,
}

impl<'a> ScriptContext<'a> {
    pub fn new(card: &'a CardAttributes, state: &'a Attributes) -> Self {
        Self { card, state }
    }

    /// Get an integer state value with a default.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a boolean state value with a default.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.state.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }
}

type ScriptCallback = dyn Fn(&ScriptContext<'_>) -> Vec<Effect> + Send + Sync;
type EvalCallback = dyn Fn(&ScriptContext<'_>) -> i64 + Send + Sync;

/// A shared closure producing effects.
#[derive(Clone)]
pub struct ScriptFn(Arc<ScriptCallback>);

impl ScriptFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ScriptContext<'_>) -> Vec<Effect> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, ctx: &ScriptContext<'_>) -> Vec<Effect> {
        (self.0)(ctx)
    }
}

impl PartialEq for ScriptFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ScriptFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptFn({:p})", Arc::as_ptr(&self.0))
    }
}

/// One triggerable behavior in an action or event slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A fixed effect.
    Effect(Effect),
    /// Effects computed when the action runs.
    Script(ScriptFn),
}

impl Action {
    /// Wrap a closure as an action.
    pub fn script<F>(f: F) -> Self
    where
        F: Fn(&ScriptContext<'_>) -> Vec<Effect> + Send + Sync + 'static,
    {
        Action::Script(ScriptFn::new(f))
    }

    /// Effects this action produces in `ctx`.
    pub fn resolve(&self, ctx: &ScriptContext<'_>) -> Vec<Effect> {
        match self {
            Action::Effect(effect) => vec![effect.clone()],
            Action::Script(script) => script.call(ctx),
        }
    }
}

impl From<Effect> for Action {
    fn from(effect: Effect) -> Self {
        Action::Effect(effect)
    }
}

/// A single evaluator for an eval slot.
#[derive(Clone)]
pub struct Evaluator(Arc<EvalCallback>);

impl Evaluator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ScriptContext<'_>) -> i64 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a yes/no check; true evaluates to 1.
    pub fn check<F>(f: F) -> Self
    where
        F: Fn(&ScriptContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self::new(move |ctx| i64::from(f(ctx)))
    }

    /// An evaluator that ignores its context.
    pub fn constant(value: i64) -> Self {
        Self::new(move |_| value)
    }

    pub fn eval(&self, ctx: &ScriptContext<'_>) -> i64 {
        (self.0)(ctx)
    }
}

impl PartialEq for Evaluator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluator({:p})", Arc::as_ptr(&self.0))
    }
}
