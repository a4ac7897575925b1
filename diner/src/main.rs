use std::sync::Arc;

use anyhow::Result;
use diner::{LogNotifier, MenuClient, Order, OrderStore, ReminderScheduler};
use log::info;
use rand::Rng;
use url::Url;

/// Walks the whole ordering flow against a locally running menu backend.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = MenuClient::new(Url::parse("http://localhost:8080")?);

    let categories = client.fetch_categories().await?;
    info!("categories on offer: {:?}", categories);
    let Some(category) = categories.first() else {
        info!("nothing on the menu today");
        return Ok(());
    };

    let items = client.fetch_menu_items(category).await?;
    info!("{} items in {}", items.len(), category);
    if items.is_empty() {
        return Ok(());
    }

    if let Some(image_url) = items.iter().find_map(|item| item.image_url.as_deref()) {
        match client.fetch_image(Url::parse(image_url)?).await {
            Ok(image) => info!("first picture is {}x{}", image.width(), image.height()),
            Err(err) => info!("no pictures today: {}", err),
        }
    }

    let mut store = OrderStore::new();
    store.subscribe(|order| info!("order now holds {} items", order.menu_ids.len()));

    let num_items = rand::thread_rng().gen_range(1..4);
    let mut menu_ids = store.current_order().menu_ids.clone();
    for _ in 0..num_items {
        let pick = rand::thread_rng().gen_range(0..items.len());
        menu_ids.push(items[pick].id);
    }
    store.replace_order(Order { menu_ids });

    let prep_minutes = client.submit_order(&store.current_order().menu_ids).await?;
    info!("order in, ready in about {} minutes", prep_minutes);

    let scheduler = ReminderScheduler::new(Arc::new(LogNotifier));
    let reminder = scheduler.schedule_ready_reminder(u64::from(prep_minutes.saturating_sub(10)));
    reminder.await?;

    Ok(())
}
