//! Selectable therapist personas
//!
//! Each persona pairs a presentation (name, title, description) with a
//! speech-synthesis voice and a system prompt (see [`crate::persona::prompts`]).

use crate::SolaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voice used when no therapist is selected
pub const DEFAULT_VOICE: &str = "nova";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TherapistId {
    John,
    Emma,
    Ethan,
}

impl TherapistId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TherapistId::John => "john",
            TherapistId::Emma => "emma",
            TherapistId::Ethan => "ethan",
        }
    }
}

impl fmt::Display for TherapistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TherapistId {
    type Err = SolaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "john" => Ok(TherapistId::John),
            "emma" => Ok(TherapistId::Emma),
            "ethan" => Ok(TherapistId::Ethan),
            other => Err(SolaceError::UnknownTherapist(other.to_string())),
        }
    }
}

/// A selectable therapist persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Therapist {
    pub id: TherapistId,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Speech-synthesis voice identifier
    pub voice: &'static str,
}

/// All available therapist personas
pub const THERAPISTS: &[Therapist] = &[
    Therapist {
        id: TherapistId::John,
        name: "Dr. John",
        title: "Practical & Direct",
        description: "Matter-of-fact, down to earth, and no-nonsense. Provides factual \
                      advice without sugar coating.",
        voice: "onyx",
    },
    Therapist {
        id: TherapistId::Emma,
        name: "Dr. Emma",
        title: "Empathetic & Nurturing",
        description: "Very empathetic and sympathetic. Turns negative situations into \
                      positive ones and provides nurturing support.",
        voice: "nova",
    },
    Therapist {
        id: TherapistId::Ethan,
        name: "Dr. Ethan",
        title: "Humorous & Uplifting",
        description: "Has an acute sense of humor. Listens carefully and provides valuable \
                      yet funny feedback to make you feel good.",
        voice: "alloy",
    },
];

/// Look up a persona by id
pub fn therapist_by_id(id: TherapistId) -> &'static Therapist {
    THERAPISTS
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&THERAPISTS[0])
}

/// Voice to synthesize with for the given (possibly unselected) therapist
pub fn voice_for_therapist(id: Option<TherapistId>) -> &'static str {
    match id {
        Some(id) => therapist_by_id(id).voice,
        None => DEFAULT_VOICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for therapist in THERAPISTS {
            let parsed: TherapistId = therapist.id.as_str().parse().unwrap();
            assert_eq!(parsed, therapist.id);
        }
    }

    #[test]
    fn test_unknown_id_is_error() {
        let err = "sigmund".parse::<TherapistId>().unwrap_err();
        assert_eq!(err, SolaceError::UnknownTherapist("sigmund".to_string()));
    }

    #[test]
    fn test_voice_mapping() {
        assert_eq!(voice_for_therapist(Some(TherapistId::John)), "onyx");
        assert_eq!(voice_for_therapist(Some(TherapistId::Emma)), "nova");
        assert_eq!(voice_for_therapist(Some(TherapistId::Ethan)), "alloy");
        assert_eq!(voice_for_therapist(None), DEFAULT_VOICE);
    }

    #[test]
    fn test_serde_lowercase_ids() {
        let json = serde_json::to_string(&TherapistId::Emma).unwrap();
        assert_eq!(json, "\"emma\"");
        let id: TherapistId = serde_json::from_str("\"ethan\"").unwrap();
        assert_eq!(id, TherapistId::Ethan);
    }
}
