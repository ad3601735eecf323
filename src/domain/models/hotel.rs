use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Hotel {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rating: f32,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub check_in_time: String,
    pub check_out_time: String,
    pub currency: String,
    pub images: Vec<String>,
}
