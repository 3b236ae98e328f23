//! Recording function doubles.
//!
//! A [`Spy`] stands in for a function of one argument. It records every call and
//! every returned value, and its behavior can be replaced for all later calls or
//! for just the next one. `Spy::on` keeps the wrapped function's behavior;
//! `Spy::fn_mock` starts with no behavior and returns `R::default()`.
//!
//! Functions of several arguments take a tuple: `Spy<(&'static str, i32), ()>`.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Implementation<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

struct State<A, R> {
    implementation: Implementation<A, R>,
    once: VecDeque<Implementation<A, R>>,
    calls: Vec<A>,
    results: Vec<R>,
}

pub struct Spy<A, R> {
    original: Implementation<A, R>,
    mock: bool,
    state: Mutex<State<A, R>>,
}

impl<A, R> Spy<A, R>
where
    A: Clone + 'static,
    R: Clone + 'static,
{
    fn with_implementation(original: Implementation<A, R>, mock: bool) -> Self {
        Spy {
            mock,
            state: Mutex::new(State {
                implementation: Arc::clone(&original),
                once: VecDeque::new(),
                calls: Vec::new(),
                results: Vec::new(),
            }),
            original,
        }
    }

    /// Watch `f` without changing what it does.
    pub fn on<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_implementation(Arc::new(f), false)
    }

    /// A mock with no behavior of its own.
    pub fn fn_mock() -> Self
    where
        R: Default,
    {
        Self::with_implementation(Arc::new(|_: A| R::default()), true)
    }

    /// True for doubles built with [`Spy::fn_mock`], false for [`Spy::on`] wrappers.
    /// Replacing the behavior later does not change the answer.
    pub fn is_mock(&self) -> bool {
        self.mock
    }

    fn lock(&self) -> MutexGuard<'_, State<A, R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Invoke the double. One-shot overrides are consumed first, oldest first.
    pub fn call(&self, args: A) -> R {
        let implementation = {
            let mut state = self.lock();
            state.calls.push(args.clone());
            match state.once.pop_front() {
                Some(once) => once,
                None => Arc::clone(&state.implementation),
            }
        };
        // The lock is released here so an implementation may call back into the spy.
        let result = implementation(args);
        self.lock().results.push(result.clone());
        result
    }

    /// Replace the behavior for every later call.
    pub fn mock_implementation<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.lock().implementation = Arc::new(f);
        self
    }

    /// Replace the behavior for exactly one later call.
    pub fn mock_implementation_once<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.lock().once.push_back(Arc::new(f));
        self
    }

    pub fn mock_return_value(&self, value: R) -> &Self
    where
        R: Send + Sync + 'static,
    {
        self.mock_implementation(move |_| value.clone())
    }

    pub fn mock_return_value_once(&self, value: R) -> &Self
    where
        R: Send + Sync + 'static,
    {
        self.mock_implementation_once(move |_| value.clone())
    }

    pub fn calls(&self) -> Vec<A> {
        self.lock().calls.clone()
    }

    pub fn results(&self) -> Vec<R> {
        self.lock().results.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn last_call(&self) -> Option<A> {
        self.lock().calls.last().cloned()
    }

    pub fn was_called_with(&self, args: &A) -> bool
    where
        A: PartialEq,
    {
        self.lock().calls.iter().any(|call| call == args)
    }

    /// Forget recorded calls and results; behavior is untouched.
    pub fn mock_clear(&self) {
        let mut state = self.lock();
        state.calls.clear();
        state.results.clear();
    }

    /// Forget everything, including overrides, and go back to the original behavior.
    pub fn mock_reset(&self) {
        let mut state = self.lock();
        state.calls.clear();
        state.results.clear();
        state.once.clear();
        state.implementation = Arc::clone(&self.original);
    }
}

impl<A, R> fmt::Debug for Spy<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Spy")
            .field("mock", &self.mock)
            .field("calls", &state.calls.len())
            .field("pending_once", &state.once.len())
            .finish()
    }
}
