#[tokio::main]
async fn main() {
    hotel_booking_backend::run().await;
}
