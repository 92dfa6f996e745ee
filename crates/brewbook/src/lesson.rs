//! The two lessons and what each one runs.

use std::{fmt::Display, str::FromStr};

use brewbook_config::BrewbookConfig;
use brewbook_functions::{
    ConfirmationMode, calculate_total, create_tea_maker, label_tea, make_tea, order_tea_with,
    process_tea_order,
};
use brewbook_objects::{
    Animal, Car, ConstructionError, Drink, Invocation, Person, Sound, Tea,
};
use serde::{Deserialize, Serialize};

use crate::{LessonError, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    Functions,
    Objects,
}

impl Lesson {
    pub const ALL: [Lesson; 2] = [Lesson::Functions, Lesson::Objects];

    pub fn name(self) -> &'static str {
        match self {
            Self::Functions => "functions",
            Self::Objects => "objects",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Functions => {
                "Named functions, nested helpers, higher-order functions, closure factories"
            }
            Self::Objects => {
                "Constructors, per-instance and shared behavior, guarded construction"
            }
        }
    }

    /// Runs every example in the lesson once, top to bottom.
    pub fn run(self, options: &LessonOptions) -> Transcript {
        let _span = tracing::info_span!("lesson", lesson = self.name()).entered();
        let mut transcript = Transcript::new(self);
        match self {
            Self::Functions => run_functions(&mut transcript, options),
            Self::Objects => run_objects(&mut transcript),
        }
        tracing::debug!(entries = transcript.entries().len(), "lesson finished");
        transcript
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lesson| lesson.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LessonError::UnknownLesson(s.to_string()))
    }
}

/// Knobs that change what a lesson prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonOptions {
    pub confirmation: ConfirmationMode,
}

impl LessonOptions {
    pub fn from_config(config: &BrewbookConfig) -> Self {
        let confirmation = if config.quirks.faithful_order_confirmation {
            ConfirmationMode::Faithful
        } else {
            ConfirmationMode::Corrected
        };
        Self { confirmation }
    }
}

fn run_functions(transcript: &mut Transcript, options: &LessonOptions) {
    transcript.output(make_tea("green"));

    let order_confirmation = order_tea_with("Chai", options.confirmation);
    transcript.output(order_confirmation);

    let total_cost = calculate_total(499, 10);
    transcript.value("totalCost", total_cost);

    let order = process_tea_order(label_tea);
    transcript.output(order);

    let tea_maker = create_tea_maker();
    transcript.output(tea_maker("green tea"));
}

fn run_objects(transcript: &mut Transcript) {
    let person = Person::new("Asha", 28);
    transcript.value("person", person);

    let my_car = Car::new("Toyota", "Camry");
    transcript.value("myCar", my_car);
    let my_new_car = Car::new("Tata", "Safari");
    transcript.value("myNewCar", my_new_car);

    let lemon_tea = Tea::new("Lemon Tea");
    transcript.output(lemon_tea.describe());

    for species in ["Dog", "Cat"] {
        transcript.output(Animal::new(species).sound());
    }

    record_drink(transcript, "tea", Drink::invoke(Invocation::Construct, "tea"));
    record_drink(transcript, "coffee", Drink::invoke(Invocation::Call, "coffee"));
}

fn record_drink(transcript: &mut Transcript, name: &str, drink: Result<Drink, ConstructionError>) {
    match drink {
        Ok(drink) => transcript.value(name, drink),
        Err(err) => transcript.failure(&err),
    }
}
