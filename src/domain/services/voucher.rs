use tera::{Context, Tera};
use tracing::error;
use crate::domain::models::{booking::Booking, hotel::Hotel};
use crate::error::AppError;

pub const VOUCHER_TEMPLATE: &str = "voucher.html";

pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(VOUCHER_TEMPLATE, include_str!("../../templates/voucher.html"))
        .map_err(|e| AppError::InternalWithMsg(format!("Voucher template error: {}", e)))?;
    Ok(tera)
}

pub fn render_voucher(templates: &Tera, hotel: &Hotel, booking: &Booking) -> Result<String, AppError> {
    let mut context = Context::new();
    context.insert("hotel", hotel);
    context.insert("booking", booking);
    context.insert("subtotal", &(booking.total_amount - booking.tax_amount));
    context.insert("status", booking.status.as_str());
    context.insert("payment_status", booking.payment_status.as_str());

    templates.render(VOUCHER_TEMPLATE, &context).map_err(|e| {
        error!("Voucher render error: {:?}", e);
        AppError::InternalWithMsg(format!("Voucher render error: {}", e))
    })
}
