use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Origin,
    Destination,
    PendingStop,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::PendingStop => "pending_stop",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" => Ok(Self::Origin),
            "destination" => Ok(Self::Destination),
            "pending_stop" => Ok(Self::PendingStop),
            _ => Err(Error::invalid_input_error()),
        }
    }
}

/// Text the user has typed into the three route fields.
///
/// Consumers read values when an action fires instead of keeping copies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inputs {
    origin: String,
    destination: String,
    pending_stop: String,
}

impl Inputs {
    pub fn read(&self, field: Field) -> &str {
        match field {
            Field::Origin => &self.origin,
            Field::Destination => &self.destination,
            Field::PendingStop => &self.pending_stop,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot(field) = value;
    }

    pub fn clear(&mut self, field: Field) {
        self.slot(field).clear();
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Origin => &mut self.origin,
            Field::Destination => &mut self.destination,
            Field::PendingStop => &mut self.pending_stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_parse_from_names() {
        for field in [Field::Origin, Field::Destination, Field::PendingStop] {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }

        assert!("waypoint".parse::<Field>().is_err());
    }

    #[test]
    fn clear_only_touches_one_field() {
        let mut inputs = Inputs::default();
        inputs.set(Field::Origin, "Budva".into());
        inputs.set(Field::PendingStop, "Tivat".into());

        inputs.clear(Field::PendingStop);

        assert_eq!(inputs.read(Field::Origin), "Budva");
        assert_eq!(inputs.read(Field::PendingStop), "");
    }
}
