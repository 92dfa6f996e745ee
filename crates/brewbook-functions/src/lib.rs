//! # brewbook-functions: Tea-order function examples
//!
//! Five independent, stateless operations, one per way of writing a function:
//! - A named function ([`make_tea`])
//! - A nested helper scoped to its caller ([`order_tea`], [`order_tea_with`])
//! - A generic arithmetic function ([`calculate_total`])
//! - A higher-order function taking a callable ([`process_tea_order`])
//! - A factory returning a closure ([`create_tea_maker`])
//!
//! # Example
//!
//! ```
//! use brewbook_functions::{create_tea_maker, label_tea, make_tea, process_tea_order};
//!
//! assert_eq!(make_tea("green"), "making green tea");
//! assert_eq!(process_tea_order(label_tea), "makeTea : earl grey");
//!
//! let tea_maker = create_tea_maker();
//! assert_eq!(tea_maker("green tea"), "Making green tea");
//! ```

use std::{fmt::Display, ops::Mul, str::FromStr};

use serde::{Deserialize, Serialize};

/// The literal every [`process_tea_order`] call hands to its callable.
pub const EARL_GREY: &str = "earl grey";

// ============================================================================
// Named function
// ============================================================================

/// Describes the tea being made.
///
/// The label lands between a fixed prefix and suffix, exactly once:
///
/// ```
/// # use brewbook_functions::make_tea;
/// assert_eq!(make_tea("oolong"), "making oolong tea");
/// ```
pub fn make_tea(type_of_tea: &str) -> String {
    tracing::debug!(type_of_tea, "make_tea");
    format!("making {type_of_tea} tea")
}

// ============================================================================
// Nested helper
// ============================================================================

/// How [`order_tea_with`] builds its confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationMode {
    /// The helper ignores the ordered tea and always confirms chai.
    #[default]
    Faithful,
    /// The helper captures the ordered tea and echoes it back.
    Corrected,
}

impl ConfirmationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faithful => "faithful",
            Self::Corrected => "corrected",
        }
    }
}

impl Display for ConfirmationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfirmationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faithful" => Ok(Self::Faithful),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!(
                "unknown confirmation mode '{other}' (expected faithful or corrected)"
            )),
        }
    }
}

/// Confirms a tea order through a helper defined inside this function.
///
/// Equivalent to [`order_tea_with`] in [`ConfirmationMode::Faithful`], so the
/// result never depends on `tea_type`:
///
/// ```
/// # use brewbook_functions::order_tea;
/// assert_eq!(order_tea("Chai"), "Order confirmed for chai ");
/// assert_eq!(order_tea("Matcha"), "Order confirmed for chai ");
/// ```
pub fn order_tea(tea_type: &str) -> String {
    order_tea_with(tea_type, ConfirmationMode::Faithful)
}

/// Confirms a tea order using the requested [`ConfirmationMode`].
pub fn order_tea_with(tea_type: &str, mode: ConfirmationMode) -> String {
    // Not visible outside this function.
    fn confirm_order() -> String {
        "Order confirmed for chai ".to_string()
    }

    tracing::debug!(tea_type, %mode, "order_tea");
    match mode {
        ConfirmationMode::Faithful => confirm_order(),
        ConfirmationMode::Corrected => {
            let confirm_order = || format!("Order confirmed for {tea_type}");
            confirm_order()
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Returns `price * quantity`.
///
/// No bounds checking: integer overflow behaves as the `Mul` impl of `T` does.
///
/// ```
/// # use brewbook_functions::calculate_total;
/// assert_eq!(calculate_total(499, 10), 4990);
/// assert_eq!(calculate_total(2.5, 4.0), 10.0);
/// ```
pub fn calculate_total<T>(price: T, quantity: T) -> T
where
    T: Mul<Output = T>,
{
    price * quantity
}

// ============================================================================
// Higher-order function
// ============================================================================

/// The callable handed to [`process_tea_order`] in the lesson.
pub fn label_tea(type_of_tea: &str) -> String {
    format!("makeTea : {type_of_tea}")
}

/// Calls `tea_function` with [`EARL_GREY`] and returns whatever it returns.
pub fn process_tea_order<F, R>(tea_function: F) -> R
where
    F: FnOnce(&str) -> R,
{
    tracing::debug!(argument = EARL_GREY, "process_tea_order");
    tea_function(EARL_GREY)
}

// ============================================================================
// Function factory
// ============================================================================

/// Returns a closure that describes any tea passed to it.
///
/// The closure captures nothing mutable, so every call with the same label
/// yields the same sentence.
pub fn create_tea_maker() -> impl Fn(&str) -> String + Clone + Send + Sync + 'static {
    |tea_type: &str| format!("Making {tea_type}")
}

#[cfg(test)]
mod tests;
