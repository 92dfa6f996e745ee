//! # brewbook-objects: Constructor examples
//!
//! Each type shows one way of creating an object:
//! - Plain records with direct field assignment ([`Person`], [`Car`])
//! - Behavior owned by each instance ([`Tea`])
//! - Behavior defined once and shared by every instance ([`Animal`], [`Sound`])
//! - Construction that refuses to run outside a construction context
//!   ([`Drink`], [`Invocation`], [`ConstructionError`])
//!
//! # Example
//!
//! ```
//! use brewbook_objects::{Animal, Drink, Invocation, Sound, Tea};
//!
//! let lemon_tea = Tea::new("Lemon Tea");
//! assert_eq!(lemon_tea.describe(), "this is a cup of Lemon Tea");
//!
//! let dog = Animal::new("Dog");
//! assert_eq!(dog.sound(), "Dog makes a sound");
//!
//! assert!(Drink::invoke(Invocation::Construct, "tea").is_ok());
//! assert!(Drink::invoke(Invocation::Call, "coffee").is_err());
//! ```

mod animal;
mod drink;
mod error;
mod records;
mod tea;

pub use animal::{Animal, Sound};
pub use drink::{Drink, Invocation};
pub use error::ConstructionError;
pub use records::{Car, Person};
pub use tea::Tea;
