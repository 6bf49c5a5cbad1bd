use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    update_requests: AtomicU64,
    update_items: AtomicU64,
    update_rejections: AtomicU64,
}

impl Metrics {
    pub fn record_update(&self, item_count: usize) {
        self.update_requests.fetch_add(1, Ordering::Relaxed);
        self.update_items
            .fetch_add(item_count as u64, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.update_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.update_requests.load(Ordering::Relaxed);
        let items = self.update_items.load(Ordering::Relaxed);
        let rejections = self.update_rejections.load(Ordering::Relaxed);

        format!(
            "# TYPE shoal_update_requests_total counter\n\
shoal_update_requests_total {}\n\
# TYPE shoal_update_items_total counter\n\
shoal_update_items_total {}\n\
# TYPE shoal_update_rejections_total counter\n\
shoal_update_rejections_total {}\n",
            requests, items, rejections
        )
    }
}
