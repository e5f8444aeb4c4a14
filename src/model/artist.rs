// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::Image;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<Image>,
}
