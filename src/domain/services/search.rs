use crate::domain::models::booking::{Booking, BookingStatus};

/// Case-insensitive match on guest name, reference or email, optionally narrowed to one status.
pub fn search_bookings<'a>(
    bookings: &'a [Booking],
    term: &str,
    status: Option<BookingStatus>,
) -> Vec<&'a Booking> {
    let needle = term.trim().to_lowercase();

    bookings.iter()
        .filter(|b| {
            needle.is_empty()
                || b.guest_name.to_lowercase().contains(&needle)
                || b.reference.to_lowercase().contains(&needle)
                || b.guest_email.to_lowercase().contains(&needle)
        })
        .filter(|b| status.is_none_or(|s| b.status == s))
        .collect()
}
