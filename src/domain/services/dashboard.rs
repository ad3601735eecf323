use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use crate::domain::models::booking::{Booking, BookingStatus, PaymentStatus};
use crate::domain::models::dashboard::{DailyRevenue, DashboardStats};
use crate::domain::models::room::RoomType;

pub fn hotel_today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Active bookings over total inventory, as a rounded percentage. No rooms means 0%.
pub fn occupancy_rate(occupied: usize, total_rooms: u32) -> u32 {
    if total_rooms == 0 {
        return 0;
    }
    ((occupied as f64 / total_rooms as f64) * 100.0).round() as u32
}

pub fn dashboard_stats(rooms: &[RoomType], bookings: &[Booking], today: NaiveDate) -> DashboardStats {
    let today_arrivals = bookings.iter()
        .filter(|b| b.check_in == today && !b.is_cancelled())
        .count();
    let today_departures = bookings.iter()
        .filter(|b| b.check_out == today && !b.is_cancelled())
        .count();

    let total_revenue: Decimal = bookings.iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .map(|b| b.total_amount)
        .sum();

    // Counts bookings, not room-nights on `today`.
    let occupied_rooms = bookings.iter()
        .filter(|b| matches!(b.status, BookingStatus::CheckedIn | BookingStatus::Confirmed))
        .count();
    let total_rooms: u32 = rooms.iter().map(|r| r.total_rooms).sum();

    DashboardStats {
        today_arrivals,
        today_departures,
        total_revenue,
        occupancy_rate: occupancy_rate(occupied_rooms, total_rooms),
        occupied_rooms,
        total_rooms,
    }
}

/// Paid revenue per creation day for the `days` days ending at `today`, oldest first.
pub fn revenue_series(bookings: &[Booking], today: NaiveDate, days: u32, tz: Tz) -> Vec<DailyRevenue> {
    (0..days as i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let revenue = bookings.iter()
                .filter(|b| b.payment_status == PaymentStatus::Paid)
                .filter(|b| b.created_at.with_timezone(&tz).date_naive() == date)
                .map(|b| b.total_amount)
                .sum();
            DailyRevenue { date, revenue }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_rate_rounding() {
        assert_eq!(occupancy_rate(0, 0), 0);
        assert_eq!(occupancy_rate(5, 0), 0);
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(1, 8), 13);
        assert_eq!(occupancy_rate(11, 11), 100);
    }

    #[test]
    fn test_empty_inputs() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let stats = dashboard_stats(&[], &[], today);
        assert_eq!(stats.occupancy_rate, 0);
        assert_eq!(stats.total_rooms, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);

        let series = revenue_series(&[], today, 3, chrono_tz::UTC);
        let dates: Vec<_> = series.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-12-18", "2024-12-19", "2024-12-20"]);
    }
}
