use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// A named unit of work the runner can execute.
///
/// Only `name` is meaningful to the picker; the rest is the body the
/// [`Runner`](crate::runner::Runner) understands.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub script: Vec<String>,
    pub directory: Option<String>,
    pub environment: Option<HashMap<String, String>>,
}

impl Task {
    /// Builds a task with just a name and a script, mostly useful in tests.
    pub fn new<S: Into<String>>(name: S, script: &[&str]) -> Self {
        Self {
            name: name.into(),
            description: None,
            script: script.iter().map(ToString::to_string).collect(),
            directory: None,
            environment: None,
        }
    }
}

impl Display for Task {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.name, desc),
            None => formatter.write_str(&self.name),
        }
    }
}
