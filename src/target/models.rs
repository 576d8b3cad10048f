use crate::cities::models::City;

/// Progress of today's target resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum TargetState {
    Loading,
    Resolved { date: String, city: City },
    Failed { date: String, reason: String },
}

impl TargetState {
    pub fn city_for(&self, today: &str) -> Option<&City> {
        match self {
            TargetState::Resolved { date, city } if date == today => Some(city),
            _ => None,
        }
    }

    /// Resolution has not completed for `today`, successfully or not.
    pub fn is_loading(&self, today: &str) -> bool {
        match self {
            TargetState::Loading => true,
            TargetState::Resolved { date, .. } | TargetState::Failed { date, .. } => date != today,
        }
    }

    /// Settled, but for another day: a rollover happened since.
    pub fn is_stale(&self, today: &str) -> bool {
        match self {
            TargetState::Loading => false,
            TargetState::Resolved { date, .. } | TargetState::Failed { date, .. } => date != today,
        }
    }

    pub fn has_error(&self, today: &str) -> bool {
        matches!(self, TargetState::Failed { date, .. } if date == today)
    }
}
