use crate::{
    define_index_newtype,
    problem::{center::CenterIdx, weight::Weight},
};

define_index_newtype!(ProductIdx, Product);

pub struct Product {
    external_id: String,
    center_id: CenterIdx,
    unit_weight: Weight,
}

impl Product {
    pub fn new(external_id: String, center_id: CenterIdx, unit_weight: Weight) -> Self {
        Self {
            external_id,
            center_id,
            unit_weight,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn center_id(&self) -> CenterIdx {
        self.center_id
    }

    pub fn unit_weight(&self) -> Weight {
        self.unit_weight
    }
}
