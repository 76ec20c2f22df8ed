use crate::types::{Answer, ComplaintRecord};
use serde::Serialize;

/// One numbered row of the disgruntled consumer table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintEntry {
    pub serial: usize,
    pub consumer_name: String,
    pub consumer_phone: String,
    pub gets_water_daily: Answer,
    pub gets_water_same_time: Answer,
    pub satisfied_quantity: Answer,
    pub satisfied_quality: Answer,
}

pub fn complaints_for(table: &[ComplaintRecord], scheme_name: &str) -> Vec<ComplaintEntry> {
    table
        .iter()
        .filter(|c| c.scheme_name == scheme_name)
        .enumerate()
        .map(|(idx, c)| ComplaintEntry {
            serial: idx + 1,
            consumer_name: c.consumer_name.clone(),
            consumer_phone: c.consumer_phone.clone(),
            gets_water_daily: c.gets_water_daily,
            gets_water_same_time: c.gets_water_same_time,
            satisfied_quantity: c.satisfied_quantity,
            satisfied_quality: c.satisfied_quality,
        })
        .collect()
}
