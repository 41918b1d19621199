//! Observable Black-Scholes parameter set.
//!
//! [`BlsFormula`] owns one [`OptionParameters`] value and the [`OptionResult`]
//! derived from it. Every effective mutation recomputes the whole result and
//! then calls each subscribed listener with the [`Field`] that changed, so a
//! front end can keep its widgets in sync without polling. Listeners are typed
//! closures; there is no lookup by property name.

use std::fmt;

use crate::models::bs::price;
use crate::pricing::types::{OptionParameters, OptionResult};

/// One of the five editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Strike,
    Spot,
    YearsToExp,
    Sigma,
    Rate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Strike,
        Field::Spot,
        Field::YearsToExp,
        Field::Sigma,
        Field::Rate,
    ];

    fn slot(self, params: &mut OptionParameters) -> &mut f64 {
        match self {
            Field::Strike => &mut params.strike,
            Field::Spot => &mut params.spot,
            Field::YearsToExp => &mut params.years_to_exp,
            Field::Sigma => &mut params.sigma,
            Field::Rate => &mut params.rate,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Strike => "strike",
            Field::Spot => "spot",
            Field::YearsToExp => "years_to_exp",
            Field::Sigma => "sigma",
            Field::Rate => "rate",
        };
        f.write_str(name)
    }
}

/// Callback invoked after a field changed and the result was recomputed.
pub type Listener = Box<dyn Fn(Field, &OptionParameters, &OptionResult) + Send + Sync>;

/// Handle returned by [`BlsFormula::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct BlsFormula {
    params: OptionParameters,
    result: OptionResult,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl BlsFormula {
    pub fn new(params: OptionParameters) -> Self {
        Self {
            params,
            result: price(&params),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn parameters(&self) -> &OptionParameters {
        &self.params
    }

    pub fn result(&self) -> &OptionResult {
        &self.result
    }

    pub fn get(&self, field: Field) -> f64 {
        let mut params = self.params;
        *field.slot(&mut params)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(Field, &OptionParameters, &OptionResult) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Set one field. Returns false, without notifying, if the value is unchanged.
    pub fn set(&mut self, field: Field, value: f64) -> bool {
        let slot = field.slot(&mut self.params);
        // Bitwise comparison so that re-entering NaN is a no-op too.
        if slot.to_bits() == value.to_bits() {
            return false;
        }
        *slot = value;
        self.recalculate();
        self.notify(field);
        true
    }

    pub fn set_strike(&mut self, value: f64) -> bool {
        self.set(Field::Strike, value)
    }

    pub fn set_spot(&mut self, value: f64) -> bool {
        self.set(Field::Spot, value)
    }

    pub fn set_years_to_exp(&mut self, value: f64) -> bool {
        self.set(Field::YearsToExp, value)
    }

    pub fn set_sigma(&mut self, value: f64) -> bool {
        self.set(Field::Sigma, value)
    }

    pub fn set_rate(&mut self, value: f64) -> bool {
        self.set(Field::Rate, value)
    }

    /// Replace all inputs at once. The result is recomputed a single time and
    /// listeners hear about every field that actually changed.
    pub fn replace(&mut self, params: OptionParameters) -> Vec<Field> {
        let mut changed = Vec::new();
        for field in Field::ALL {
            let mut incoming = params;
            let new_value = *field.slot(&mut incoming);
            let slot = field.slot(&mut self.params);
            if slot.to_bits() != new_value.to_bits() {
                *slot = new_value;
                changed.push(field);
            }
        }

        if !changed.is_empty() {
            self.recalculate();
            for field in &changed {
                self.notify(*field);
            }
        }
        changed
    }

    fn recalculate(&mut self) {
        self.result = price(&self.params);
        tracing::debug!(
            params = ?self.params,
            result = ?self.result,
            finite = self.result.is_finite(),
            "recalculated"
        );
    }

    fn notify(&self, field: Field) {
        tracing::trace!(%field, listeners = self.listeners.len(), "notifying listeners");
        for (_, listener) in &self.listeners {
            listener(field, &self.params, &self.result);
        }
    }
}

impl Default for BlsFormula {
    fn default() -> Self {
        Self::new(OptionParameters::default())
    }
}

impl fmt::Debug for BlsFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlsFormula")
            .field("params", &self.params)
            .field("result", &self.result)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
