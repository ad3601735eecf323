use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DashboardStats {
    pub today_arrivals: usize,
    pub today_departures: usize,
    pub total_revenue: Decimal,
    pub occupancy_rate: u32,
    pub occupied_rooms: usize,
    pub total_rooms: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Decimal,
}
