//! Game variables read by break guards.
//!
//! Break tables never hold pointers into game state. A guard names a variable
//! by index ([`VarRef`]) and the host answers reads through [`VariableSource`].

use serde::{Deserialize, Serialize};

/// Index of a shared game-state cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarRef(pub u32);

impl VarRef {
	/// Returns the variable index as `usize`
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for VarRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "var[{}]", self.0)
	}
}

/// Read access to game variables.
///
/// Returning `None` means the variable is unknown to the host; guards treat
/// that as a failed comparison.
pub trait VariableSource {
	/// Reads the current value of `var`
	fn read_var(&self, var: VarRef) -> Option<i32>;
}

/// Guard attached to a break: eligible only while `var == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
	/// Variable to read
	pub var: VarRef,
	/// Value the variable must hold
	pub value: i32,
}

impl Condition {
	/// Creates a new equality guard
	pub fn new(var: VarRef, value: i32) -> Self {
		Self {
			var,
			value,
		}
	}

	/// Evaluates the guard against `vars`
	pub fn holds<V: VariableSource + ?Sized>(&self, vars: &V) -> bool {
		vars.read_var(self.var) == Some(self.value)
	}
}

/// Flat, growable variable store.
///
/// # Examples
///
/// ```
/// use playbreak_types::vars::{GameVars, VarRef, VariableSource};
///
/// let mut vars = GameVars::new();
/// vars.set(VarRef(3), 7);
/// assert_eq!(vars.read_var(VarRef(3)), Some(7));
/// assert_eq!(vars.read_var(VarRef(0)), Some(0));
/// assert_eq!(vars.read_var(VarRef(10)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVars {
	values: Vec<i32>,
}

impl GameVars {
	/// Creates an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store with `len` variables, all zero
	pub fn with_len(len: usize) -> Self {
		Self {
			values: vec![0; len],
		}
	}

	/// Writes `value` into `var`, growing the store when needed.
	pub fn set(&mut self, var: VarRef, value: i32) {
		let index = var.index();
		if index >= self.values.len() {
			self.values.resize(index + 1, 0);
		}
		self.values[index] = value;
	}

	/// Returns the current value of `var`
	pub fn get(&self, var: VarRef) -> Option<i32> {
		self.values.get(var.index()).copied()
	}

	/// Number of known variables
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if no variable is known
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl VariableSource for GameVars {
	fn read_var(&self, var: VarRef) -> Option<i32> {
		self.get(var)
	}
}
