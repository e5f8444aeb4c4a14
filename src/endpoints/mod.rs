pub mod artists;
pub mod charts;
pub mod labels;
pub mod playlists;
pub mod releases;
pub mod search;
pub mod tracks;

use crate::client::Beatsource;
use crate::endpoints::artists::*;
use crate::endpoints::charts::*;
use crate::endpoints::labels::*;
use crate::endpoints::playlists::*;
use crate::endpoints::releases::*;
use crate::endpoints::search::*;
use crate::endpoints::tracks::*;

// Endpoint function namespaces

impl Beatsource {
    pub const fn artists(&self) -> Artists {
        Artists(&self)
    }

    pub const fn charts(&self) -> Charts {
        Charts(&self)
    }

    pub const fn labels(&self) -> Labels {
        Labels(&self)
    }

    pub const fn playlists(&self) -> Playlists {
        Playlists(&self)
    }

    pub const fn releases(&self) -> Releases {
        Releases(&self)
    }

    pub const fn searches(&self) -> Search {
        Search(&self)
    }

    pub const fn tracks(&self) -> Tracks {
        Tracks(&self)
    }
}
