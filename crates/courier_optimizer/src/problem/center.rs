use crate::{define_index_newtype, problem::distance::Distance};

define_index_newtype!(CenterIdx, Center);

/// A warehouse stocking a fixed set of products.
pub struct Center {
    external_id: String,
    distance: Distance,
}

impl Center {
    pub fn new(external_id: String, distance: Distance) -> Self {
        Self {
            external_id,
            distance,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Distance from this center to the hub.
    pub fn distance(&self) -> Distance {
        self.distance
    }
}
