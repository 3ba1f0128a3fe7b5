use chrono::NaiveDate;
use josnishop_tracking::clients::TrackingError;
use josnishop_tracking::config::TrackingConfig;
use josnishop_tracking::lifecycle::{setup_tracing, TrackingSystem};
use josnishop_tracking::model::{OrderCreate, OrderFilter};
use tracing::{error, info, info_span, Instrument};
use tracking_core::Stage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = TrackingConfig::from_env()?;
    // `--remote` sends status changes to the order service at JOSNISHOP_API_URL.
    let system = if std::env::args().any(|arg| arg == "--remote") {
        TrackingSystem::remote(&config)?
    } else {
        TrackingSystem::new(&config)
    };
    let seller = system.viewer(config.seller_user_id);
    let customer = system.sample_customer();

    let placed = NaiveDate::from_ymd_opt(2024, 11, 3)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .ok_or("invalid demo date")?;

    let order_id = async {
        let id = system
            .store_client
            .create_order(OrderCreate::new(customer.user_id, 89_900.0).placed_at(placed))
            .await?;
        info!(order_id = %id, "Order placed");
        Ok::<_, TrackingError>(id)
    }
    .instrument(info_span!("checkout"))
    .await?;

    async {
        match system.tracking_client.advance(order_id, &customer).await {
            Err(e) => info!(error = %e, "Customer cannot change the status"),
            Ok(order) => error!(estado = %order.estado, "Customer changed the status"),
        }

        for _ in 0..Stage::COUNT {
            match system.tracking_client.advance(order_id, &seller).await {
                Ok(order) => {
                    let view = system.tracking_client.view_of(order, &seller);
                    info!(estado = %view.order.estado, progress = %view.progress_label, "Advanced");
                }
                Err(e) => info!(error = %e, "Advance stopped"),
            }
        }

        let order = system
            .tracking_client
            .jump_to_stage(order_id, Stage::EnTransito, &seller)
            .await?;
        info!(estado = %order.estado, "Corrected status");
        Ok::<_, TrackingError>(())
    }
    .instrument(info_span!("status_updates"))
    .await?;

    let visible = system
        .tracking_client
        .list(&customer, OrderFilter::new().estado("tránsito"))
        .await?;
    info!(count = visible.len(), "Customer orders in transit");

    let view = system.tracking_client.view(order_id, &customer).await?;
    for step in &view.timeline {
        info!(stage = %step.info.name, icon = %step.info.icon, state = ?step.state, "Timeline");
    }

    system.shutdown().await?;
    Ok(())
}
