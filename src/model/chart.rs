// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::Image;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub change_date: Option<String>,
    pub track_count: Option<u32>,
    pub person: Option<Person>,
    pub image: Option<Image>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub owner_name: Option<String>,
}

impl Chart {
    /// Curator name, falling back to the service itself for editorial charts.
    pub fn curator(&self) -> &str {
        self.person
            .as_ref()
            .and_then(|person| person.owner_name.as_deref())
            .unwrap_or("Beatsource")
    }
}
